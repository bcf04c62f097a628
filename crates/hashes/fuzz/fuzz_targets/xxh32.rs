#![no_main]

use hashes::fast::Xxh32;
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(4, input.len()));
  let mut seed = 0u32;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u32) << (i * 8);
  }

  let ours = Xxh32::hash_with_seed(seed, data);
  let expected = xxhash_rust::xxh32::xxh32(data, seed);
  assert_eq!(ours, expected);
});
