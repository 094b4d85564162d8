//! Public API types for the lfcrypt library
//!
//! This crate provides the shared API surface for the lfcrypt ecosystem:
//! the error taxonomy, result aliases, and the validation helpers used by
//! the algorithm and cipher crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use error::{validate, ResultExt};
