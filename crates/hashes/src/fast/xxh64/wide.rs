//! 64-bit unsigned arithmetic on two 32-bit halves.
//!
//! Every operation reduces modulo 2^64 and uses only 32-bit adds, multiplies
//! and shifts. Multiplication splits each half into 16-bit limbs, so no
//! intermediate ever needs more than 32 bits. This is the arithmetic XXH64
//! needs on targets without a native 64-bit integer; here it backs the
//! [`reference`](super::reference) oracle.

use core::ops::{Add, BitXor, Mul, Sub};

/// An unsigned 64-bit value stored as `(lo, hi)` 32-bit halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wide64 {
  lo: u32,
  hi: u32,
}

/// Full 32x32 -> 64 product as `(lo, hi)`, built from 16-bit limbs.
#[inline(always)]
const fn mul_wide(a: u32, b: u32) -> (u32, u32) {
  let (a0, a1) = (a & 0xFFFF, a >> 16);
  let (b0, b1) = (b & 0xFFFF, b >> 16);

  let p00 = a0 * b0;
  let p01 = a0 * b1;
  let p10 = a1 * b0;
  let p11 = a1 * b1;

  let (mid, c1) = p01.overflowing_add(p10);
  let (mid, c2) = mid.overflowing_add(p00 >> 16);
  let carries = (c1 as u32 + c2 as u32) << 16;

  let lo = (mid << 16) | (p00 & 0xFFFF);
  let hi = p11.wrapping_add(mid >> 16).wrapping_add(carries);
  (lo, hi)
}

impl Wide64 {
  pub const ZERO: Self = Self::new(0, 0);

  #[inline]
  #[must_use]
  pub const fn new(lo: u32, hi: u32) -> Self {
    Self { lo, hi }
  }

  #[inline]
  #[must_use]
  pub const fn from_u64(value: u64) -> Self {
    Self::new(value as u32, (value >> 32) as u32)
  }

  #[inline]
  #[must_use]
  pub const fn to_u64(self) -> u64 {
    ((self.hi as u64) << 32) | self.lo as u64
  }

  /// Widen a 32-bit value (high half zero).
  #[inline]
  #[must_use]
  pub const fn from_u32(value: u32) -> Self {
    Self::new(value, 0)
  }

  #[inline]
  #[must_use]
  pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = bytes;
    Self::new(u32::from_le_bytes([b0, b1, b2, b3]), u32::from_le_bytes([b4, b5, b6, b7]))
  }

  #[inline]
  #[must_use]
  pub const fn lo(self) -> u32 {
    self.lo
  }

  #[inline]
  #[must_use]
  pub const fn hi(self) -> u32 {
    self.hi
  }

  #[inline]
  #[must_use]
  pub const fn wrapping_add(self, rhs: Self) -> Self {
    let (lo, carry) = self.lo.overflowing_add(rhs.lo);
    let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry as u32);
    Self::new(lo, hi)
  }

  #[inline]
  #[must_use]
  pub const fn wrapping_sub(self, rhs: Self) -> Self {
    let (lo, borrow) = self.lo.overflowing_sub(rhs.lo);
    let hi = self.hi.wrapping_sub(rhs.hi).wrapping_sub(borrow as u32);
    Self::new(lo, hi)
  }

  /// Product modulo 2^64. The `hi * hi` term only affects bits >= 64.
  #[inline]
  #[must_use]
  pub const fn wrapping_mul(self, rhs: Self) -> Self {
    let (lo, hi) = mul_wide(self.lo, rhs.lo);
    let hi = hi.wrapping_add(self.lo.wrapping_mul(rhs.hi)).wrapping_add(self.hi.wrapping_mul(rhs.lo));
    Self::new(lo, hi)
  }

  #[inline]
  #[must_use]
  pub const fn xor(self, rhs: Self) -> Self {
    Self::new(self.lo ^ rhs.lo, self.hi ^ rhs.hi)
  }

  /// Rotate left by `n % 64` bits.
  #[inline]
  #[must_use]
  pub const fn rotate_left(self, n: u32) -> Self {
    let n = n & 63;
    if n == 0 {
      self
    } else if n == 32 {
      Self::new(self.hi, self.lo)
    } else if n < 32 {
      Self::new(
        (self.lo << n) | (self.hi >> (32 - n)),
        (self.hi << n) | (self.lo >> (32 - n)),
      )
    } else {
      let m = n - 32;
      Self::new(
        (self.hi << m) | (self.lo >> (32 - m)),
        (self.lo << m) | (self.hi >> (32 - m)),
      )
    }
  }

  /// Logical shift right by `n % 64` bits.
  #[inline]
  #[must_use]
  pub const fn shift_right(self, n: u32) -> Self {
    let n = n & 63;
    if n == 0 {
      self
    } else if n < 32 {
      Self::new((self.lo >> n) | (self.hi << (32 - n)), self.hi >> n)
    } else {
      Self::new(self.hi >> (n - 32), 0)
    }
  }
}

impl From<u64> for Wide64 {
  #[inline]
  fn from(value: u64) -> Self {
    Self::from_u64(value)
  }
}

impl From<Wide64> for u64 {
  #[inline]
  fn from(value: Wide64) -> Self {
    value.to_u64()
  }
}

impl Add for Wide64 {
  type Output = Self;

  #[inline]
  fn add(self, rhs: Self) -> Self {
    self.wrapping_add(rhs)
  }
}

impl Sub for Wide64 {
  type Output = Self;

  #[inline]
  fn sub(self, rhs: Self) -> Self {
    self.wrapping_sub(rhs)
  }
}

impl Mul for Wide64 {
  type Output = Self;

  #[inline]
  fn mul(self, rhs: Self) -> Self {
    self.wrapping_mul(rhs)
  }
}

impl BitXor for Wide64 {
  type Output = Self;

  #[inline]
  fn bitxor(self, rhs: Self) -> Self {
    self.xor(rhs)
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
  const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;

  fn w(v: u64) -> Wide64 {
    Wide64::from_u64(v)
  }

  #[test]
  fn halves_round_trip() {
    let v = w(0x0123_4567_89AB_CDEF);
    assert_eq!(v.lo(), 0x89AB_CDEF);
    assert_eq!(v.hi(), 0x0123_4567);
    assert_eq!(u64::from(v), 0x0123_4567_89AB_CDEF);
    assert_eq!(Wide64::from_u32(u32::MAX).to_u64(), 0xFFFF_FFFF);
  }

  #[test]
  fn from_le_bytes_matches_native() {
    let bytes = [0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01];
    assert_eq!(Wide64::from_le_bytes(bytes).to_u64(), u64::from_le_bytes(bytes));
  }

  #[test]
  fn add_zero_and_small() {
    assert_eq!((Wide64::ZERO + Wide64::ZERO).to_u64(), 0);
    assert_eq!((w(1) + w(1)).to_u64(), 2);
  }

  #[test]
  fn add_carries_into_high_half() {
    assert_eq!((w(0xFFFF_FFFF) + w(1)).to_u64(), 0x1_0000_0000);
  }

  #[test]
  fn add_wraps_at_64_bits() {
    assert_eq!((w(u64::MAX) + w(1)).to_u64(), 0);
    let (a, b) = (0x0123_4567_89AB_CDEF, 0x0FED_CBA9_8765_4321);
    assert_eq!((w(a) + w(b)).to_u64(), a.wrapping_add(b));
  }

  #[test]
  fn sub_borrows_from_high_half() {
    assert_eq!((w(0x1_0000_0000) - w(1)).to_u64(), 0xFFFF_FFFF);
    assert_eq!((Wide64::ZERO - w(PRIME64_1)).to_u64(), 0u64.wrapping_sub(PRIME64_1));
  }

  #[test]
  fn mul_identities() {
    let v = w((456 << 32) | 123);
    assert_eq!((v * Wide64::ZERO).to_u64(), 0);
    assert_eq!((v * w(1)).to_u64(), v.to_u64());
  }

  #[test]
  fn mul_full_32_bit_operands() {
    assert_eq!((w(0xFFFF_FFFF) * w(0xFFFF_FFFF)).to_u64(), 0xFFFF_FFFE_0000_0001);
    assert_eq!((w(0x0123_4567_89AB_CDEF) * w(2)).to_u64(), 0x0246_8ACF_1357_9BDE);
  }

  #[test]
  fn mul_primes_wraps() {
    assert_eq!((w(PRIME64_1) * w(PRIME64_2)).to_u64(), PRIME64_1.wrapping_mul(PRIME64_2));
    assert_eq!((w(u64::MAX) * w(u64::MAX)).to_u64(), 1);
  }

  #[test]
  fn rotate_edge_amounts() {
    let v = 0x0123_4567_89AB_CDEFu64;
    for n in [0u32, 1, 13, 31, 32, 33, 63, 64] {
      assert_eq!(w(v).rotate_left(n).to_u64(), v.rotate_left(n), "rotl by {n}");
    }
  }

  #[test]
  fn shift_edge_amounts() {
    let v = 0x8123_4567_89AB_CDEFu64;
    for n in [0u32, 1, 29, 31, 32, 33, 63] {
      assert_eq!(w(v).shift_right(n).to_u64(), v >> n, "shr by {n}");
    }
  }

  #[test]
  fn xor_is_per_half() {
    assert_eq!((w(0xFFFF_0000_0000_FFFF) ^ w(0x0F0F_0F0F_0F0F_0F0F)).to_u64(), 0xF0F0_0F0F_0F0F_F0F0);
  }

  proptest! {
    #[test]
    fn ops_match_native(a in any::<u64>(), b in any::<u64>(), n in 0u32..128) {
      prop_assert_eq!((w(a) + w(b)).to_u64(), a.wrapping_add(b));
      prop_assert_eq!((w(a) - w(b)).to_u64(), a.wrapping_sub(b));
      prop_assert_eq!((w(a) * w(b)).to_u64(), a.wrapping_mul(b));
      prop_assert_eq!((w(a) ^ w(b)).to_u64(), a ^ b);
      prop_assert_eq!(w(a).rotate_left(n).to_u64(), a.rotate_left(n));
      prop_assert_eq!(w(a).shift_right(n).to_u64(), a >> (n & 63));
    }
  }
}
