//! XXH32 (**NOT CRYPTO**).
//!
//! Portable scalar implementation, bit-compatible with the reference C
//! implementation for every seed and input length.

#![allow(clippy::indexing_slicing)] // Carry-buffer bookkeeping; `carry_len < BLOCK_LEN` bounds every slice

use core::{
  fmt,
  hash::{BuildHasher, Hasher},
};

use traits::{FastHash, StreamingHash};

use crate::util::u32_le;

const PRIME32_1: u32 = 0x9E37_79B1;
const PRIME32_2: u32 = 0x85EB_CA77;
const PRIME32_3: u32 = 0xC2B2_AE3D;
const PRIME32_4: u32 = 0x27D4_EB2F;
const PRIME32_5: u32 = 0x1656_67B1;

const BLOCK_LEN: usize = 16;

#[inline(always)]
const fn round(acc: u32, input: u32) -> u32 {
  acc
    .wrapping_add(input.wrapping_mul(PRIME32_2))
    .rotate_left(13)
    .wrapping_mul(PRIME32_1)
}

#[inline(always)]
const fn avalanche(mut hash: u32) -> u32 {
  hash ^= hash >> 15;
  hash = hash.wrapping_mul(PRIME32_2);
  hash ^= hash >> 13;
  hash = hash.wrapping_mul(PRIME32_3);
  hash ^ (hash >> 16)
}

#[inline(always)]
const fn initial_lanes(seed: u32) -> [u32; 4] {
  [
    seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
    seed.wrapping_add(PRIME32_2),
    seed,
    seed.wrapping_sub(PRIME32_1),
  ]
}

/// Fold one 16-byte block into the lanes: lane *i* takes bytes `4i..4i + 4`.
#[inline(always)]
fn mix_block(lanes: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
  let (words, _) = block.as_chunks::<4>();
  for (lane, word) in lanes.iter_mut().zip(words) {
    *lane = round(*lane, u32_le(*word));
  }
}

/// Streaming XXH32 state.
///
/// [`digest`](Self::digest) returns the hash of everything fed since the last
/// reset and re-seeds the state, so one instance can hash many messages.
///
/// ```
/// use hashes::fast::Xxh32;
///
/// let mut h = Xxh32::new();
/// assert_eq!(h.update(b"ab").update(b"cd").digest(), 0xA364_3705);
/// assert_eq!(h.update(b"abc").digest(), 0x32D1_53FF);
/// ```
#[derive(Clone)]
pub struct Xxh32 {
  seed: u32,
  lanes: [u32; 4],
  carry: [u8; BLOCK_LEN],
  carry_len: usize,
  total_len: u64,
}

impl Xxh32 {
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
  pub const fn with_seed(seed: u32) -> Self {
    Self {
      seed,
      lanes: initial_lanes(seed),
      carry: [0; BLOCK_LEN],
      carry_len: 0,
      total_len: 0,
    }
  }

  /// Hasher seeded with the low 32 bits of `seed`.
  ///
  /// High bits are discarded silently; oversized seeds are not an error.
  #[inline]
  #[must_use]
  pub const fn with_seed_truncated(seed: u64) -> Self {
    Self::with_seed(seed as u32)
  }

  /// Hash `data` in one shot.
  #[inline]
  #[must_use]
  pub fn oneshot(seed: u32, data: &[u8]) -> u32 {
    let mut h = Self::with_seed(seed);
    h.update(data);
    h.finalize()
  }

  /// The seed this hasher resets to.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u32 {
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
  pub fn digest(&mut self) -> u32 {
    let hash = self.finalize();
    self.reset();
    hash
  }

  /// Hash of everything fed so far, leaving the state untouched.
  #[must_use]
  fn finalize(&self) -> u32 {
    let mut hash = if self.total_len >= BLOCK_LEN as u64 {
      let [v1, v2, v3, v4] = self.lanes;
      v1.rotate_left(1)
        .wrapping_add(v2.rotate_left(7))
        .wrapping_add(v3.rotate_left(12))
        .wrapping_add(v4.rotate_left(18))
    } else {
      self.seed.wrapping_add(PRIME32_5)
    };

    // The length folds in modulo 2^32.
    hash = hash.wrapping_add(self.total_len as u32);

    let (words, bytes) = self.carry[..self.carry_len].as_chunks::<4>();
    for word in words {
      hash = hash
        .wrapping_add(u32_le(*word).wrapping_mul(PRIME32_3))
        .rotate_left(17)
        .wrapping_mul(PRIME32_4);
    }
    for &byte in bytes {
      hash = hash
        .wrapping_add((byte as u32).wrapping_mul(PRIME32_5))
        .rotate_left(11)
        .wrapping_mul(PRIME32_1);
    }

    avalanche(hash)
  }

  /// Snapshot of the stream position, for debugging.
  #[cfg(feature = "diag")]
  #[must_use]
  pub fn diag(&self) -> crate::diag::StreamDiag {
    crate::diag::StreamDiag {
      algorithm: "xxh32",
      seed: u64::from(self.seed),
      total_len: self.total_len,
      buffered: self.carry_len,
      block_len: BLOCK_LEN,
      lanes_engaged: self.total_len >= BLOCK_LEN as u64,
    }
  }
}

impl Default for Xxh32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// Lanes are left out: they are noise to a reader and the seed plus position
// identify the stream.
impl fmt::Debug for Xxh32 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Xxh32")
      .field("seed", &self.seed)
      .field("total_len", &self.total_len)
      .field("buffered", &self.carry_len)
      .finish_non_exhaustive()
  }
}

impl FastHash for Xxh32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    Self::oneshot(seed, data)
  }
}

impl StreamingHash for Xxh32 {
  type Output = u32;
  type Seed = u32;

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
impl Hasher for Xxh32 {
  #[inline]
  fn finish(&self) -> u64 {
    u64::from(self.finalize())
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }
}

/// [`BuildHasher`] producing seeded [`Xxh32`] instances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildXxh32 {
  seed: u32,
}

impl BuildXxh32 {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { seed }
  }
}

impl BuildHasher for BuildXxh32 {
  type Hasher = Xxh32;

  #[inline]
  fn build_hasher(&self) -> Self::Hasher {
    Xxh32::with_seed(self.seed)
  }
}
