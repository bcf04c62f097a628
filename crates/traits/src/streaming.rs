//! Streaming hash traits.
//!
//! - **Streaming**: Incremental updates with any chunking
//! - **Reusable**: `digest` hands back the result and re-seeds the state

use core::fmt::Debug;

use crate::MismatchError;

/// Incremental non-cryptographic hash with a fixed block size.
///
/// # Usage
///
/// ```rust
/// use traits::StreamingHash;
///
/// /// Seeded byte sum; a stand-in for a real engine.
/// #[derive(Clone, Default)]
/// struct Sum {
///   seed: u32,
///   acc: u32,
/// }
///
/// impl StreamingHash for Sum {
///   type Output = u32;
///   type Seed = u32;
///
///   fn with_seed(seed: u32) -> Self {
///     Self { seed, acc: seed }
///   }
///
///   fn seed(&self) -> u32 {
///     self.seed
///   }
///
///   fn update(&mut self, data: &[u8]) -> &mut Self {
///     self.acc = data.iter().fold(self.acc, |acc, &b| acc.wrapping_add(u32::from(b)));
///     self
///   }
///
///   fn digest(&mut self) -> u32 {
///     let out = self.acc;
///     self.reset();
///     out
///   }
///
///   fn reset(&mut self) {
///     self.acc = self.seed;
///   }
/// }
///
/// let mut hasher = Sum::with_seed(100);
/// hasher.update(&[1, 2]).update(&[3]);
/// assert_eq!(hasher.digest(), 106);
///
/// // The hasher is immediately reusable with the same seed.
/// hasher.update(&[1, 2, 3]);
/// assert_eq!(hasher.digest(), 106);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - Splitting the input differently across `update` calls must never change
///   the digest
/// - `digest()` must leave the hasher in the same state as `reset()`
pub trait StreamingHash: Clone + Default {
  /// The digest output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Create a hasher seeded with the default seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// Create a hasher seeded with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// The seed this hasher resets to.
  #[must_use]
  fn seed(&self) -> Self::Seed;

  /// Feed more bytes. Returns `self` so calls can be chained.
  fn update(&mut self, data: &[u8]) -> &mut Self;

  /// Feed multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> &mut Self {
    for buf in bufs {
      self.update(buf);
    }
    self
  }

  /// Feed `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) -> &mut Self {
    for buf in bufs {
      self.update(buf);
    }
    self
  }

  /// Finalize, return the digest, and reset to the seeded state.
  #[must_use]
  fn digest(&mut self) -> Self::Output;

  /// Drop everything fed so far and return to the seeded state.
  fn reset(&mut self);

  /// Finalize and compare against `expected`.
  ///
  /// The hasher is reset either way.
  #[inline]
  fn verify(&mut self, expected: Self::Output) -> Result<(), MismatchError<Self::Output>> {
    let computed = self.digest();
    if computed == expected {
      Ok(())
    } else {
      Err(MismatchError::new(expected, computed))
    }
  }

  /// Wrap a reader so every byte read is hashed.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::StreamingHash;
  /// # #[derive(Clone, Default)]
  /// # struct Len(u64);
  /// # impl StreamingHash for Len {
  /// #   type Output = u64;
  /// #   type Seed = u64;
  /// #   fn with_seed(seed: u64) -> Self { Self(seed) }
  /// #   fn seed(&self) -> u64 { 0 }
  /// #   fn update(&mut self, data: &[u8]) -> &mut Self { self.0 += data.len() as u64; self }
  /// #   fn digest(&mut self) -> u64 { core::mem::take(&mut self.0) }
  /// #   fn reset(&mut self) { self.0 = 0; }
  /// # }
  /// use std::io::Cursor;
  ///
  /// let mut reader = Len::reader(Cursor::new(vec![0u8; 300]));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(reader.digest(), 300);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer so every byte written is hashed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
