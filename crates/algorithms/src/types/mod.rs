//! Type-safe wrappers for keystream keying material
//!
//! This module provides typed wrappers around the raw integers the
//! register primitive is keyed with, ensuring proper validation and
//! secure handling.

use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub mod seed;
pub use seed::{Seed, SEED_SIZE};

/// Trait for types that can be generated from a cryptographic RNG
///
/// Implementations that cannot fail should simply wrap their infallible
/// constructor; fallible sources report
/// [`RandomGenerationError`](lfcrypt_api::Error::RandomGenerationError)
/// through the core error conversion.
pub trait RandomGeneration: Sized {
    /// Generate a random value from the given RNG
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self>;
}
