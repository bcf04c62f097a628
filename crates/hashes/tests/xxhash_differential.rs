use hashes::fast::{Xxh32, Xxh64};
use proptest::prelude::*;
use traits::FastHash as _;

fn xxh32_ref(seed: u32, data: &[u8]) -> u32 {
  xxhash_rust::xxh32::xxh32(data, seed)
}

fn xxh64_ref(seed: u64, data: &[u8]) -> u64 {
  xxhash_rust::xxh64::xxh64(data, seed)
}

proptest! {
  #[test]
  fn xxh32_matches_xxhash_rust(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = Xxh32::hash_with_seed(seed, &data);
    let expected = xxh32_ref(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn xxh64_matches_xxhash_rust(seed in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = Xxh64::hash_with_seed(seed, &data);
    let expected = xxh64_ref(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn xxh32_matches_twox_hash(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..1024)) {
    prop_assert_eq!(Xxh32::hash_with_seed(seed, &data), twox_hash::XxHash32::oneshot(seed, &data));
  }

  #[test]
  fn xxh64_matches_twox_hash(seed in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..1024)) {
    prop_assert_eq!(Xxh64::hash_with_seed(seed, &data), twox_hash::XxHash64::oneshot(seed, &data));
  }

  #[test]
  fn streaming_matches_xxhash_rust_streaming(
    seed in any::<u64>(),
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    chunk in 1usize..=97,
  ) {
    let mut ours32 = Xxh32::with_seed(seed as u32);
    let mut ours64 = Xxh64::with_seed(seed);
    let mut theirs32 = xxhash_rust::xxh32::Xxh32::new(seed as u32);
    let mut theirs64 = xxhash_rust::xxh64::Xxh64::new(seed);
    for part in data.chunks(chunk) {
      ours32.update(part);
      ours64.update(part);
      theirs32.update(part);
      theirs64.update(part);
    }
    prop_assert_eq!(ours32.digest(), theirs32.digest());
    prop_assert_eq!(ours64.digest(), theirs64.digest());
  }
}

#[test]
fn hasher_path_matches_twox_hash() {
  use core::hash::Hasher as _;

  let data = b"streaming hash payload for chunked writes";

  let mut ours = Xxh64::with_seed(42);
  let mut theirs = twox_hash::XxHash64::with_seed(42);
  for (start, end) in [(0, 5), (5, 17), (17, data.len())] {
    ours.write(&data[start..end]);
    theirs.write(&data[start..end]);
  }
  assert_eq!(ours.finish(), theirs.finish());

  let mut ours = Xxh32::with_seed(42);
  let mut theirs = twox_hash::XxHash32::with_seed(42);
  ours.write(data);
  theirs.write(data);
  assert_eq!(ours.finish(), theirs.finish());
}
