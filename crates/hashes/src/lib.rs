//! Fast non-cryptographic hashes: xxHash32 and xxHash64.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the rxxhash workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - XXH32 and XXH64 engines (**NOT CRYPTO**).
//! - `io` - Reader/writer adapters (`std` feature).
//! - `diag` - Stream-state snapshots (`diag` feature).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "diag")]
pub mod diag;
pub mod fast;
#[cfg(feature = "std")]
pub mod io;

mod util;

pub use traits::{FastHash, MismatchError, StreamingHash};
