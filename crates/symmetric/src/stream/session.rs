//! Stored-keystream decryption sessions

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::cipher::{EncryptedMessage, LfsrCipher, LfsrKey};
use crate::cipher::SymmetricCipher;
use crate::error::{Error, Result};

/// Cipher session that records its most recent encrypt pass
///
/// This is the "store the keystream during encryption" usage:
/// [`decrypt_last`](LfsrSession::decrypt_last) recombines the recorded
/// keystream with the recorded ciphertext, so the seed is not needed a
/// second time. The recorded sequences are owned by the session value;
/// independent sessions never share state, so concurrent encrypt/decrypt
/// pairs stay isolated.
pub struct LfsrSession {
    cipher: LfsrCipher,
    last: Option<EncryptedMessage>,
}

impl LfsrSession {
    /// Create a session from a key
    pub fn new(key: &LfsrKey) -> Result<Self> {
        Ok(Self {
            cipher: LfsrCipher::new(key)?,
            last: None,
        })
    }

    /// Encrypt plaintext and record the keystream and ciphertext
    ///
    /// Each call replaces the previously recorded pass.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> &EncryptedMessage {
        let message = self.cipher.encrypt(plaintext);
        self.last.insert(message)
    }

    /// Decrypt the most recent encrypt pass from its recorded keystream
    ///
    /// Fails with [`Error::MissingKeystream`] when no pass has been
    /// recorded yet.
    pub fn decrypt_last(&self) -> Result<Vec<u8>> {
        let message = self.last.as_ref().ok_or(Error::MissingKeystream {
            context: "decrypt_last",
        })?;
        message.decrypt()
    }

    /// The recorded pass, if any
    pub fn last_message(&self) -> Option<&EncryptedMessage> {
        self.last.as_ref()
    }

    /// Drop the recorded pass, zeroizing its buffers
    pub fn clear(&mut self) {
        self.last = None;
    }
}
