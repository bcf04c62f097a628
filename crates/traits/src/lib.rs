//! Core hashing traits for rxxhash.
//!
//! This crate provides the traits that the xxHash engines conform to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic hashing | XXH32, XXH64 |
//! | [`StreamingHash`] | Incremental hashing with reusable state | XXH32, XXH64 |
//!
//! # Error Types
//!
//! - [`MismatchError`] - A computed digest differed from the expected one
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
#[cfg(feature = "std")]
pub mod io;
mod streaming;

pub use error::MismatchError;
pub use fast_hash::FastHash;
pub use streaming::StreamingHash;
