//! I/O adapters for streaming hashes.
//!
//! [`HashReader`] and [`HashWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and feed every byte actually transferred
//! into a [`StreamingHash`]. Short reads and short writes are handled: only the
//! bytes the inner reader returned, or the inner writer accepted, are hashed.
//!
//! # Example
//!
//! ```rust
//! # use traits::StreamingHash;
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl StreamingHash for Sum {
//! #   type Output = u32;
//! #   type Seed = u32;
//! #   fn with_seed(seed: u32) -> Self { Self(seed) }
//! #   fn seed(&self) -> u32 { 0 }
//! #   fn update(&mut self, data: &[u8]) -> &mut Self {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #     self
//! #   }
//! #   fn digest(&mut self) -> u32 { let out = self.0; self.0 = 0; out }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(
//!   reader.digest(),
//!   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{IoSlice, IoSliceMut, Read, Result, Write};

use crate::StreamingHash;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> Result<usize>
where
  R: Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(inner: &mut R, bufs: &mut [IoSliceMut<'_>], on_data: impl FnMut(&[u8])) -> Result<usize>
where
  R: Read,
{
  let n = inner.read_vectored(bufs)?;
  for_each_prefix(bufs.iter().map(|buf| &**buf), n, on_data);
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> Result<usize>
where
  W: Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn write_vectored_and_update<W>(inner: &mut W, bufs: &[IoSlice<'_>], on_data: impl FnMut(&[u8])) -> Result<usize>
where
  W: Write,
{
  let n = inner.write_vectored(bufs)?;
  for_each_prefix(bufs.iter().map(|buf| &**buf), n, on_data);
  Ok(n)
}

/// Visit the first `n` bytes spread across `bufs`, in order.
fn for_each_prefix<'a>(bufs: impl Iterator<Item = &'a [u8]>, n: usize, mut on_data: impl FnMut(&[u8])) {
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let take = remaining.min(buf.len());
    if let Some(data) = buf.get(..take) {
      on_data(data);
    }
    remaining -= take;
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`] and hashes every byte read through it.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The hash algorithm type (e.g., `Xxh64`)
#[derive(Clone, Debug)]
pub struct HashReader<R, H: StreamingHash> {
  inner: R,
  hasher: H,
}

impl<R, H: StreamingHash> HashReader<R, H> {
  /// Wrap `inner` with a hasher using the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Wrap `inner` with a hasher using `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Seed) -> Self {
    Self { inner, hasher: H::with_seed(seed) }
  }

  /// Digest of everything read so far.
  ///
  /// The hasher is reset, so later reads start a fresh digest.
  #[inline]
  #[must_use]
  pub fn digest(&mut self) -> H::Output {
    self.hasher.digest()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `HashReader`, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(mut self) -> (R, H::Output) {
    let digest = self.hasher.digest();
    (self.inner, digest)
  }

  /// Unwrap this `HashReader`, returning the inner reader and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  ///
  /// Bytes read directly from the inner reader bypass the hasher.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: Read, H: StreamingHash> Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
    read_and_update(&mut self.inner, buf, |data| {
      self.hasher.update(data);
    })
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| {
      self.hasher.update(data);
    })
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`] and hashes every byte the inner writer accepts.
///
/// The hash is updated **after** the inner write returns, with exactly the
/// prefix that was written. A failed write hashes nothing.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `H`: The hash algorithm type (e.g., `Xxh32`)
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: StreamingHash> {
  inner: W,
  hasher: H,
}

impl<W, H: StreamingHash> HashWriter<W, H> {
  /// Wrap `inner` with a hasher using the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Wrap `inner` with a hasher using `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Seed) -> Self {
    Self { inner, hasher: H::with_seed(seed) }
  }

  /// Digest of everything written so far, resetting the hasher.
  #[inline]
  #[must_use]
  pub fn digest(&mut self) -> H::Output {
    self.hasher.digest()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap this `HashWriter`, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(mut self) -> (W, H::Output) {
    let digest = self.hasher.digest();
    (self.inner, digest)
  }

  /// Unwrap this `HashWriter`, returning the inner writer and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: Write, H: StreamingHash> Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> Result<usize> {
    write_and_update(&mut self.inner, buf, |data| {
      self.hasher.update(data);
    })
  }

  #[inline]
  fn flush(&mut self) -> Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| {
      self.hasher.update(data);
    })
  }
}
