//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! Do not use these hashes for signatures, MACs, key derivation, or anything
//! requiring cryptographic security. They are checksums and hash-table hashes.

pub mod xxh32;
pub mod xxh64;

pub use xxh32::{BuildXxh32, Xxh32};
pub use xxh64::{BuildXxh64, Xxh64};
