//! # lfcrypt
//!
//! A small pure-Rust stream cipher library built around a 32-bit
//! linear-feedback shift register.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! lfcrypt = "0.1"
//! ```
//!
//! ## Features
//!
//! - `stream` (default): LFSR keystream primitives and cipher sessions
//! - `std` (default): standard library support
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`lfcrypt-api`]: Error taxonomy and validation helpers
//! - [`lfcrypt-algorithms`]: The LFSR register primitive
//! - [`lfcrypt-symmetric`]: Cipher sessions and textual formatting
//!
//! [`lfcrypt-api`]: https://docs.rs/lfcrypt-api
//! [`lfcrypt-algorithms`]: https://docs.rs/lfcrypt-algorithms
//! [`lfcrypt-symmetric`]: https://docs.rs/lfcrypt-symmetric

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use lfcrypt_api as api;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use lfcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use lfcrypt_symmetric as symmetric;

/// Common imports for lfcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the register primitive and its types
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::stream::lfsr::{Lfsr32, DEFAULT_FEEDBACK};
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::stream::StreamCipher;
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::types::{RandomGeneration, Seed};

    // Re-export the cipher session surface
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::cipher::{StreamEncryption, SymmetricCipher};
    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        decrypt_with_keystream, EncryptedMessage, LfsrCipher, LfsrKey, LfsrSession,
    };
}
