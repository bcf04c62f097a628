//! Slow one-shot XXH64 computed entirely on [`Wide64`] halves.
//!
//! Shares no arithmetic with the `u64` engine, so agreement between the two is
//! meaningful. Not intended for production use.

use super::{PRIME64_1, PRIME64_2, PRIME64_3, PRIME64_4, PRIME64_5, wide::Wide64};

const P1: Wide64 = Wide64::from_u64(PRIME64_1);
const P2: Wide64 = Wide64::from_u64(PRIME64_2);
const P3: Wide64 = Wide64::from_u64(PRIME64_3);
const P4: Wide64 = Wide64::from_u64(PRIME64_4);
const P5: Wide64 = Wide64::from_u64(PRIME64_5);

fn round(acc: Wide64, input: Wide64) -> Wide64 {
  (acc + input * P2).rotate_left(31) * P1
}

fn merge_round(hash: Wide64, lane: Wide64) -> Wide64 {
  (hash ^ round(Wide64::ZERO, lane)) * P1 + P4
}

fn avalanche(mut hash: Wide64) -> Wide64 {
  hash = hash ^ hash.shift_right(33);
  hash = hash * P2;
  hash = hash ^ hash.shift_right(29);
  hash = hash * P3;
  hash ^ hash.shift_right(32)
}

/// XXH64 of `data` under `seed`.
#[must_use]
pub fn xxh64(seed: u64, data: &[u8]) -> u64 {
  let seed = Wide64::from_u64(seed);
  let (blocks, tail) = data.as_chunks::<32>();

  let mut hash = if blocks.is_empty() {
    seed + P5
  } else {
    let mut lanes = [seed + P1 + P2, seed + P2, seed, seed - P1];
    for block in blocks {
      let (words, _) = block.as_chunks::<8>();
      for (lane, word) in lanes.iter_mut().zip(words) {
        *lane = round(*lane, Wide64::from_le_bytes(*word));
      }
    }

    let [v1, v2, v3, v4] = lanes;
    let acc = v1.rotate_left(1) + v2.rotate_left(7) + v3.rotate_left(12) + v4.rotate_left(18);
    lanes.iter().fold(acc, |acc, &lane| merge_round(acc, lane))
  };

  hash = hash + Wide64::from_u64(data.len() as u64);

  let (words, rest) = tail.as_chunks::<8>();
  for word in words {
    hash = (hash ^ round(Wide64::ZERO, Wide64::from_le_bytes(*word))).rotate_left(27) * P1 + P4;
  }

  let (half, bytes) = rest.as_chunks::<4>();
  for word in half {
    hash = (hash ^ Wide64::from_u32(u32::from_le_bytes(*word)) * P1).rotate_left(23) * P2 + P3;
  }

  for &byte in bytes {
    hash = (hash ^ Wide64::from_u32(byte as u32) * P5).rotate_left(11) * P1;
  }

  avalanche(hash).to_u64()
}
