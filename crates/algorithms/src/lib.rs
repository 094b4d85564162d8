//! Keystream generator primitives for the lfcrypt library
//!
//! This crate implements the register-level building blocks of the lfcrypt
//! stream cipher: a 32-bit linear-feedback shift register that is clocked
//! eight times per output byte, together with the typed seed it is keyed
//! with. The library is designed to be usable in both `std` and `no_std`
//! environments.
//!
//! Higher-level encrypt/decrypt sessions that return owned ciphertext and
//! keystream buffers live in `lfcrypt-symmetric`; this crate only deals in
//! caller-provided buffers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Typed wrappers for keying material
pub mod types;
pub use types::{RandomGeneration, Seed, SEED_SIZE};

// Stream cipher implementations
pub mod stream;
pub use stream::lfsr::{Lfsr32, DEFAULT_FEEDBACK, LFSR_STEPS_PER_BYTE};
pub use stream::StreamCipher;
