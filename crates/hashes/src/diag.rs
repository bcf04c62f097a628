//! Optional stream-state diagnostics.
//!
//! This module is behind `cfg(feature = "diag")`. It exposes where a streaming
//! hasher is in its input without touching the digest path.

use core::fmt;

/// Snapshot of a streaming hasher, taken by `Xxh32::diag` or `Xxh64::diag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamDiag {
  /// `"xxh32"` or `"xxh64"`.
  pub algorithm: &'static str,
  /// Seed, widened to 64 bits for XXH32.
  pub seed: u64,
  /// Bytes fed since the last reset, wrapping at 2^64.
  pub total_len: u64,
  /// Bytes sitting in the carry buffer, always `< block_len`.
  pub buffered: usize,
  /// Bytes per block-mixer pass: 16 for XXH32, 32 for XXH64.
  pub block_len: usize,
  /// Whether finalization will start from the four lanes rather than the seed.
  pub lanes_engaged: bool,
}

impl StreamDiag {
  /// Full blocks mixed into the lanes so far.
  #[inline]
  #[must_use]
  pub const fn blocks_mixed(&self) -> u64 {
    self.total_len.wrapping_sub(self.buffered as u64) / self.block_len as u64
  }
}

impl fmt::Display for StreamDiag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} seed={:#x} total_len={} buffered={}/{} lanes={}",
      self.algorithm,
      self.seed,
      self.total_len,
      self.buffered,
      self.block_len,
      if self.lanes_engaged { "engaged" } else { "idle" }
    )
  }
}
