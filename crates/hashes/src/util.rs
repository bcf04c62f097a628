#[inline(always)]
pub const fn u32_le(word: [u8; 4]) -> u32 {
  u32::from_le_bytes(word)
}

#[inline(always)]
pub const fn u64_le(word: [u8; 8]) -> u64 {
  u64::from_le_bytes(word)
}
