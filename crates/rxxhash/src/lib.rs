//! Portable xxHash32 and xxHash64 (**NOT CRYPTO**).
//!
//! `rxxhash` bundles the XXH32 and XXH64 engines behind two plain functions
//! for one-shot use and two streaming types for incremental input. Zero
//! dependencies, `no_std` compatible.
//!
//! # Quick Start
//!
//! ```
//! use rxxhash::{Xxh32, Xxh64, xxh32, xxh64};
//!
//! // One-shot computation
//! assert_eq!(xxh32(b"abcd", 0), 0xA364_3705);
//! assert_eq!(xxh64(b"abcd", 0), 0xDE03_27B0_D25D_92CC);
//!
//! // Streaming computation; `digest` resets for reuse
//! let mut hasher = Xxh64::with_seed(0xABCD);
//! hasher.update(b"ab").update(b"cd");
//! assert_eq!(hasher.digest(), xxh64(b"abcd", 0xABCD));
//!
//! // Fixed-width uppercase hex is a formatting choice
//! assert_eq!(format!("{:08X}", Xxh32::new().update(b"abc").digest()), "32D153FF");
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `HashReader` / `HashWriter` adapters, `IoSlice` updates |
//! | `diag` | No | `Xxh32::diag` / `Xxh64::diag` stream snapshots |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! rxxhash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Engines
// =============================================================================

#[cfg(feature = "diag")]
pub use hashes::diag::StreamDiag;
#[cfg(feature = "std")]
pub use hashes::io::{HashReader, HashWriter};
pub use hashes::{
  fast,
  fast::{BuildXxh32, BuildXxh64, Xxh32, Xxh64},
};

// =============================================================================
// Traits
// =============================================================================

pub use traits::{FastHash, MismatchError, StreamingHash};

// =============================================================================
// One-shot
// =============================================================================

/// XXH32 of `data` under `seed`.
///
/// Same result as `Xxh32::with_seed(seed).update(data).digest()`. For a seed
/// wider than 32 bits, see [`Xxh32::with_seed_truncated`].
#[inline]
#[must_use]
pub fn xxh32(data: &[u8], seed: u32) -> u32 {
  Xxh32::oneshot(seed, data)
}

/// XXH64 of `data` under `seed`.
///
/// ```
/// assert_eq!(rxxhash::xxh64(b"abcd", 0xABCD), 0xE29F_70F8_B8C9_6DF7);
/// ```
#[inline]
#[must_use]
pub fn xxh64(data: &[u8], seed: u64) -> u64 {
  Xxh64::oneshot(seed, data)
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn top_level_vectors() {
    assert_eq!(xxh32(b"abcd", 0xABCD), 0xCDA8_FAE4);
    assert_eq!(xxh64(b"abcd", 0xABCD), 0xE29F_70F8_B8C9_6DF7);
    assert_eq!(xxh32("heiå".as_bytes(), 0), 0xDB5A_BCCC);
    assert_eq!(xxh64(b"abc", 0), 0x44BC_2CF5_AD77_0999);
  }

  #[test]
  fn sizes_resolve_with_both_traits_in_scope() {
    assert_eq!(Xxh32::OUTPUT_SIZE, 4);
    assert_eq!(Xxh64::OUTPUT_SIZE, 8);
    assert_eq!(Xxh32::BLOCK_LEN, 16);
    assert_eq!(Xxh64::BLOCK_LEN, 32);
  }

  #[test]
  fn hex_widths_are_fixed() {
    assert_eq!(format!("{:08X}", xxh32(b"", 0)), "02CC5D05");
    assert_eq!(format!("{:016X}", xxh64(b"abcd", 0)), "DE0327B0D25D92CC");
  }

  #[test]
  fn trait_paths_agree() {
    assert_eq!(<Xxh32 as FastHash>::hash(b"abc"), xxh32(b"abc", 0));
    let mut h = <Xxh64 as StreamingHash>::new();
    h.update(b"abc");
    assert!(h.verify(xxh64(b"abc", 0)).is_ok());
  }

  #[test]
  fn writer_adapter() {
    use std::io::Write as _;

    let mut w = Xxh32::writer(Vec::new());
    w.write_all(b"ab").unwrap();
    w.write_all(b"cd").unwrap();
    assert_eq!(w.digest(), 0xA364_3705);
    assert_eq!(w.into_inner(), b"abcd");
  }

  proptest! {
    #[test]
    fn matches_xxhash_rust(seed in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..1024)) {
      prop_assert_eq!(xxh32(&data, seed as u32), xxhash_rust::xxh32::xxh32(&data, seed as u32));
      prop_assert_eq!(xxh64(&data, seed), xxhash_rust::xxh64::xxh64(&data, seed));
    }
  }
}
