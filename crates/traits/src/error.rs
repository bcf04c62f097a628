//! Error types for hash verification.
//!
//! Hashing itself never fails. The only error surfaced by this workspace is a
//! digest that does not match the value a caller expected (frame checksums,
//! content fingerprints).

use core::fmt;

/// A computed digest differed from the expected one.
///
/// Non-cryptographic digests carry no secrets, so both values are exposed to
/// make corrupted-data reports actionable.
///
/// # Examples
///
/// ```
/// use traits::MismatchError;
///
/// fn check(computed: u32, expected: u32) -> Result<(), MismatchError<u32>> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(MismatchError::new(expected, computed))
///   }
/// }
///
/// let err = check(0x02cc_5d05, 0x0000_0001).unwrap_err();
/// assert_eq!(err.to_string(), "digest mismatch: expected 0x1, computed 0x2cc5d05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct MismatchError<T> {
  /// The digest the caller expected.
  pub expected: T,
  /// The digest actually computed.
  pub computed: T,
}

impl<T> MismatchError<T> {
  /// Create a new mismatch error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new(expected: T, computed: T) -> Self {
    Self { expected, computed }
  }
}

impl<T: fmt::LowerHex> fmt::Display for MismatchError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "digest mismatch: expected {:#x}, computed {:#x}", self.expected, self.computed)
  }
}

impl<T: fmt::Debug + fmt::LowerHex> core::error::Error for MismatchError<T> {}
