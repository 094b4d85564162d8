//! Symmetric cipher traits for lfcrypt-symmetric
//!
//! This module defines the core traits used by the stream cipher
//! sessions in this crate.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;
use crate::stream::EncryptedMessage;

/// Common trait for all symmetric encryption algorithms
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Trait for keystream ciphers that return owned ciphertext and keystream
pub trait StreamEncryption: SymmetricCipher {
    /// Encrypts plaintext, returning the ciphertext and the keystream used
    fn encrypt(&self, plaintext: &[u8]) -> EncryptedMessage;

    /// Decrypts ciphertext by replaying the keystream from the original seed
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
