//! XXH64 (**NOT CRYPTO**).
//!
//! Portable scalar implementation on native `u64`. [`wide`] provides the same
//! arithmetic on two 32-bit halves, and [`reference`] is a slow XXH64 built on
//! it that serves as an independent oracle for the engine.

#![allow(clippy::indexing_slicing)] // Carry-buffer bookkeeping; `carry_len < BLOCK_LEN` bounds every slice

use core::{
  fmt,
  hash::{BuildHasher, Hasher},
};

use traits::{FastHash, StreamingHash};

use crate::util::{u32_le, u64_le};

#[doc(hidden)]
pub mod reference;
pub mod wide;

pub(crate) const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
pub(crate) const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
pub(crate) const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
pub(crate) const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
pub(crate) const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

const BLOCK_LEN: usize = 32;

#[inline(always)]
const fn round(acc: u64, input: u64) -> u64 {
  acc
    .wrapping_add(input.wrapping_mul(PRIME64_2))
    .rotate_left(31)
    .wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(hash: u64, lane: u64) -> u64 {
  (hash ^ round(0, lane)).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
const fn avalanche(mut hash: u64) -> u64 {
  hash ^= hash >> 33;
  hash = hash.wrapping_mul(PRIME64_2);
  hash ^= hash >> 29;
  hash = hash.wrapping_mul(PRIME64_3);
  hash ^ (hash >> 32)
}

#[inline(always)]
const fn initial_lanes(seed: u64) -> [u64; 4] {
  [
    seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
    seed.wrapping_add(PRIME64_2),
    seed,
    seed.wrapping_sub(PRIME64_1),
  ]
}

/// Fold one 32-byte block into the lanes: lane *i* takes bytes `8i..8i + 8`.
#[inline(always)]
fn mix_block(lanes: &mut [u64; 4], block: &[u8; BLOCK_LEN]) {
  let (words, _) = block.as_chunks::<8>();
  for (lane, word) in lanes.iter_mut().zip(words) {
    *lane = round(*lane, u64_le(*word));
  }
}

/// Streaming XXH64 state.
///
/// Same lifecycle as [`Xxh32`](super::Xxh32): [`digest`](Self::digest)
/// finalizes and re-seeds.
///
/// ```
/// use hashes::fast::Xxh64;
///
/// let mut h = Xxh64::with_seed(0xABCD);
/// assert_eq!(h.update(b"abcd").digest(), 0xE29F_70F8_B8C9_6DF7);
/// ```
#[derive(Clone)]
pub struct Xxh64 {
  seed: u64,
  lanes: [u64; 4],
  carry: [u8; BLOCK_LEN],
  carry_len: usize,
  total_len: u64,
}

impl Xxh64 {
  /// Bytes consumed per block-mixer pass.
  pub const BLOCK_LEN: usize = BLOCK_LEN;

  /// Hasher with seed 0.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self::with_seed(0)
  }

  /// Hasher with the given seed.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self {
      seed,
      lanes: initial_lanes(seed),
      carry: [0; BLOCK_LEN],
      carry_len: 0,
      total_len: 0,
    }
  }

  /// Hash `data` in one shot.
  #[inline]
  #[must_use]
  pub fn oneshot(seed: u64, data: &[u8]) -> u64 {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize()
  }

  /// The seed this hasher resets to.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.seed
  }

  /// Return to the freshly seeded state.
  #[inline]
  pub fn reset(&mut self) {
    self.lanes = initial_lanes(self.seed);
    self.carry_len = 0;
    self.total_len = 0;
  }

  /// Feed more bytes.
  pub fn update(&mut self, data: &[u8]) -> &mut Self {
    let mut input = data;
    self.total_len = self.total_len.wrapping_add(input.len() as u64);

    if self.carry_len + input.len() < BLOCK_LEN {
      self.carry[self.carry_len..self.carry_len + input.len()].copy_from_slice(input);
      self.carry_len += input.len();
      return self;
    }

    if self.carry_len > 0 {
      let (fill, rest) = input.split_at(BLOCK_LEN - self.carry_len);
      self.carry[self.carry_len..].copy_from_slice(fill);
      mix_block(&mut self.lanes, &self.carry);
      self.carry_len = 0;
      input = rest;
    }

    let (blocks, tail) = input.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      mix_block(&mut self.lanes, block);
    }

    self.carry[..tail.len()].copy_from_slice(tail);
    self.carry_len = tail.len();
    self
  }

  /// Finalize, then reset to the seeded state.
  #[inline]
  #[must_use]
  pub fn digest(&mut self) -> u64 {
    let hash = self.finalize();
    self.reset();
    hash
  }

  #[must_use]
  fn finalize(&self) -> u64 {
    let mut hash = if self.total_len >= BLOCK_LEN as u64 {
      let [v1, v2, v3, v4] = self.lanes;
      let mut acc = v1
        .rotate_left(1)
        .wrapping_add(v2.rotate_left(7))
        .wrapping_add(v3.rotate_left(12))
        .wrapping_add(v4.rotate_left(18));
      acc = merge_round(acc, v1);
      acc = merge_round(acc, v2);
      acc = merge_round(acc, v3);
      merge_round(acc, v4)
    } else {
      self.seed.wrapping_add(PRIME64_5)
    };

    hash = hash.wrapping_add(self.total_len);

    let (words, rest) = self.carry[..self.carry_len].as_chunks::<8>();
    for word in words {
      hash = (hash ^ round(0, u64_le(*word)))
        .rotate_left(27)
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4);
    }

    let (half, bytes) = rest.as_chunks::<4>();
    // At most one: `rest` is shorter than 8 bytes.
    for word in half {
      hash = (hash ^ u64::from(u32_le(*word)).wrapping_mul(PRIME64_1))
        .rotate_left(23)
        .wrapping_mul(PRIME64_2)
        .wrapping_add(PRIME64_3);
    }

    for &byte in bytes {
      hash = (hash ^ (byte as u64).wrapping_mul(PRIME64_5))
        .rotate_left(11)
        .wrapping_mul(PRIME64_1);
    }

    avalanche(hash)
  }

  /// Snapshot of the stream position, for debugging.
  #[cfg(feature = "diag")]
  #[must_use]
  pub fn diag(&self) -> crate::diag::StreamDiag {
    crate::diag::StreamDiag {
      algorithm: "xxh64",
      seed: self.seed,
      total_len: self.total_len,
      buffered: self.carry_len,
      block_len: BLOCK_LEN,
      lanes_engaged: self.total_len >= BLOCK_LEN as u64,
    }
  }
}

impl Default for Xxh64 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Xxh64 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Xxh64")
      .field("seed", &self.seed)
      .field("total_len", &self.total_len)
      .field("buffered", &self.carry_len)
      .finish_non_exhaustive()
  }
}

impl FastHash for Xxh64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    Self::oneshot(seed, data)
  }
}

impl StreamingHash for Xxh64 {
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn with_seed(seed: Self::Seed) -> Self {
    Self::with_seed(seed)
  }

  #[inline]
  fn seed(&self) -> Self::Seed {
    self.seed
  }

  #[inline]
  fn update(&mut self, data: &[u8]) -> &mut Self {
    Self::update(self, data)
  }

  #[inline]
  fn digest(&mut self) -> Self::Output {
    Self::digest(self)
  }

  #[inline]
  fn reset(&mut self) {
    Self::reset(self);
  }
}

/// `finish` does not reset, as `Hasher` requires.
impl Hasher for Xxh64 {
  #[inline]
  fn finish(&self) -> u64 {
    self.finalize()
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }
}

/// [`BuildHasher`] producing seeded [`Xxh64`] instances.
///
/// ```
/// use std::collections::HashMap;
///
/// use hashes::fast::BuildXxh64;
///
/// let mut map = HashMap::with_hasher(BuildXxh64::with_seed(42));
/// map.insert("key", 1);
/// assert_eq!(map.get("key"), Some(&1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildXxh64 {
  seed: u64,
}

impl BuildXxh64 {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self { seed }
  }
}

impl BuildHasher for BuildXxh64 {
  type Hasher = Xxh64;

  #[inline]
  fn build_hasher(&self) -> Self::Hasher {
    Xxh64::with_seed(self.seed)
  }
}
