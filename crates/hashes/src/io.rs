//! I/O adapters for the streaming engines.
//!
//! This module re-exports [`HashReader`] and [`HashWriter`], which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations and hash the bytes
//! that actually pass through them.
//!
//! # Example
//!
//! ```rust
//! use hashes::{StreamingHash, fast::Xxh64};
//! use std::io::Write;
//!
//! let mut writer = Xxh64::writer(Vec::new());
//! writer.write_all(b"abc")?;
//! let (out, digest) = writer.into_parts();
//! assert_eq!(out, b"abc");
//! assert_eq!(digest, 0x44BC_2CF5_AD77_0999);
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{HashReader, HashWriter};
