//! Arbitrary sequences of `update` calls must match the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{Xxh32, Xxh64};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

/// Split `data` by cycling through `chunk_sizes` (each taken mod 256, min 1).
fn chunks<'a>(data: &'a [u8], chunk_sizes: &'a [usize]) -> impl Iterator<Item = &'a [u8]> {
  let mut offset = 0;
  let mut chunk_idx = 0;
  core::iter::from_fn(move || {
    if offset >= data.len() {
      return None;
    }
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };
    let end = (offset + chunk_size).min(data.len());
    let part = &data[offset..end];
    offset = end;
    chunk_idx += 1;
    Some(part)
  })
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut h32 = Xxh32::with_seed_truncated(input.seed);
  let mut h64 = Xxh64::with_seed(input.seed);
  for part in chunks(data, &input.chunk_sizes) {
    h32.update(part);
    h64.update(part);
  }

  assert_eq!(h32.digest(), Xxh32::oneshot(input.seed as u32, data), "xxh32 streaming mismatch");
  assert_eq!(h64.digest(), Xxh64::oneshot(input.seed, data), "xxh64 streaming mismatch");

  // Digest resets: a second pass over the same input must agree.
  h64.update(data);
  assert_eq!(h64.digest(), Xxh64::oneshot(input.seed, data), "xxh64 reuse mismatch");
});
