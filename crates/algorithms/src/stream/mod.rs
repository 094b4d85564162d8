//! Stream cipher implementations
//!
//! This module provides keystream generators: symmetric primitives that
//! encrypt plaintext bytes one at a time by XORing them with a
//! pseudorandom keystream.
//!
//! # Available Generators
//!
//! - [`Lfsr32`]: a 32-bit linear-feedback shift register clocked eight
//!   times per output byte
//!
//! # Security Considerations
//!
//! LFSR keystreams are linear and therefore predictable from a short
//! known-plaintext prefix. These generators reproduce a classic
//! construction exactly; they are not a substitute for a modern stream
//! cipher where confidentiality matters.

/// Linear-feedback shift register implementations
pub mod lfsr;

// Re-export commonly used types
pub use lfsr::{Lfsr32, DEFAULT_FEEDBACK, LFSR_STEPS_PER_BYTE};

use crate::error::Result;

/// Common trait for keystream-based stream ciphers
pub trait StreamCipher {
    /// The serialized seed size in bytes
    const SEED_SIZE: usize;

    /// Register clocks consumed per keystream byte
    const STEPS_PER_BYTE: usize;

    /// Process data in place (encrypts for encryption, decrypts for decryption)
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to its initial state
    fn reset(&mut self) -> Result<()>;
}

// Implement StreamCipher for Lfsr32
impl StreamCipher for Lfsr32 {
    const SEED_SIZE: usize = crate::types::SEED_SIZE;
    const STEPS_PER_BYTE: usize = LFSR_STEPS_PER_BYTE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.reset();
        Ok(())
    }
}
