use hashes::fast::{Xxh32, Xxh64};

fn abc_joined() -> Vec<u8> {
  // Array(1000).join("abc"): 999 copies, 2997 bytes.
  b"abc".repeat(999)
}

#[test]
fn xxh32_vectors() {
  let cases: &[(&[u8], u32, u32)] = &[
    (b"", 0, 0x02CC_5D05),
    (b"a", 0, 0x550D_7456),
    (b"abc", 0, 0x32D1_53FF),
    (b"abcd", 0, 0xA364_3705),
    (b"abcd", 0xABCD, 0xCDA8_FAE4),
    ("heiå".as_bytes(), 0, 0xDB5A_BCCC),
    ("κόσμε".as_bytes(), 0, 0x749C_591F),
  ];
  for (i, &(input, seed, expected)) in cases.iter().enumerate() {
    assert_eq!(
      Xxh32::oneshot(seed, input),
      expected,
      "xxh32 vector mismatch at case {i} (len={})",
      input.len()
    );
  }
}

#[test]
fn xxh64_vectors() {
  let cases: &[(&[u8], u64, u64)] = &[
    (b"", 0, 0xEF46_DB37_51D8_E999),
    (b"a", 0, 0xD24E_C4F1_A98C_6E5B),
    (b"abc", 0, 0x44BC_2CF5_AD77_0999),
    (b"abcd", 0, 0xDE03_27B0_D25D_92CC),
    (b"abcd", 0xABCD, 0xE29F_70F8_B8C9_6DF7),
    ("heiå".as_bytes(), 0, 0xB9D3_D990_D200_1A1A),
    ("κόσμε".as_bytes(), 0, 0xDA3C_12B6_3A72_DD83),
  ];
  for (i, &(input, seed, expected)) in cases.iter().enumerate() {
    assert_eq!(
      Xxh64::oneshot(seed, input),
      expected,
      "xxh64 vector mismatch at case {i} (len={})",
      input.len()
    );
  }
}

#[test]
fn long_repeated_inputs() {
  let joined = abc_joined();
  assert_eq!(joined.len(), 2997);
  assert_eq!(Xxh32::oneshot(0, &joined), 0x89DA_9B6E);
  assert_eq!(Xxh64::oneshot(0, &joined), 0x933E_B856_1397_6467);

  let abcd = b"abcd".repeat(1000);
  assert_eq!(Xxh32::oneshot(0, &abcd), 0x0E18_CBEA);
  assert_eq!(Xxh64::oneshot(0, &abcd), 0x2052_19D3_8E88_98BC);
}

#[test]
fn split_inputs_reach_same_vector() {
  let joined = abc_joined();
  for split in [1usize, 10, 15, 16, 17, 20, 31, 32, 33, 40, 2996] {
    let (head, tail) = joined.split_at(split);
    assert_eq!(Xxh32::new().update(head).update(tail).digest(), 0x89DA_9B6E, "xxh32 split at {split}");
    assert_eq!(
      Xxh64::new().update(head).update(tail).digest(),
      0x933E_B856_1397_6467,
      "xxh64 split at {split}"
    );
  }
}

#[test]
fn sequential_bytes_cross_block_boundary() {
  let data: Vec<u8> = (0u8..32).collect();
  assert_eq!(Xxh32::oneshot(0, &data[..16]), 0xB728_37F4);
  assert_eq!(Xxh32::oneshot(0, &data), 0x8307_41C1);
  assert_eq!(Xxh64::oneshot(0, &data[..16]), 0x44B6_EF2F_B841_69F7);
  assert_eq!(Xxh64::oneshot(0, &data), 0xCBF5_9C51_16FF_32B4);
}
