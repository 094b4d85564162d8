//! Type-safe seed for the shift register
//!
//! A seed is the initial 32-bit register value of the keystream
//! generator. Two cipher passes that start from equal seeds (and equal
//! feedback constants) produce identical keystreams, which is what makes
//! XOR decryption possible, so the seed is handled as keying material:
//! compared in constant time and zeroized on request.

use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::RandomGeneration;

/// Size of a serialized seed in bytes
pub const SEED_SIZE: usize = 4;

/// Initial register value for the keystream generator
#[derive(Clone, Zeroize)]
pub struct Seed {
    value: u32,
}

impl Seed {
    /// Create a seed from a raw register value
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Create from a little-endian byte slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Seed", slice.len(), SEED_SIZE)?;

        let mut bytes = [0u8; SEED_SIZE];
        bytes.copy_from_slice(slice);

        Ok(Self {
            value: u32::from_le_bytes(bytes),
        })
    }

    /// Generate a random seed
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            value: rng.next_u32(),
        }
    }

    /// The raw register value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Little-endian byte representation
    pub fn to_bytes(&self) -> [u8; SEED_SIZE] {
        self.value.to_le_bytes()
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.value.ct_eq(&other.value).into()
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed(0x{:08x})", self.value)
    }
}

impl RandomGeneration for Seed {
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> crate::error::Result<Self> {
        Ok(Self::random(rng))
    }
}
