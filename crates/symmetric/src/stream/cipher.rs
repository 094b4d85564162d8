//! LFSR cipher keys and the encrypt/decrypt paths

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "std")]
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use lfcrypt_algorithms::stream::lfsr::{Lfsr32, DEFAULT_FEEDBACK};
use lfcrypt_algorithms::types::Seed;

use crate::cipher::{StreamEncryption, SymmetricCipher};
use crate::error::{validate, Result, SymmetricResultExt};

/// Key material for the LFSR cipher: a seed and the feedback taps
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct LfsrKey {
    seed: Seed,
    feedback: u32,
}

impl LfsrKey {
    /// Create a key from a seed and feedback constant
    pub fn new(seed: Seed, feedback: u32) -> Self {
        Self { seed, feedback }
    }

    /// Create a key with the reference feedback polynomial
    pub fn with_default_feedback(seed: Seed) -> Self {
        Self::new(seed, DEFAULT_FEEDBACK)
    }

    /// Generate a key with a random seed and the reference feedback polynomial
    #[cfg(feature = "std")]
    pub fn generate() -> Self {
        Self::with_default_feedback(Seed::random(&mut OsRng))
    }

    /// Create a key from a little-endian seed encoding
    pub fn from_seed_bytes(bytes: &[u8], feedback: u32) -> Result<Self> {
        let seed = Seed::from_slice(bytes).map_primitive_err()?;
        Ok(Self::new(seed, feedback))
    }

    /// The initial register value
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The feedback polynomial taps
    pub fn feedback(&self) -> u32 {
        self.feedback
    }
}

/// Encryption output: the cipher bytes plus the keystream that produced them
///
/// Owning both sequences lets a holder decrypt later without the seed via
/// [`decrypt_with_keystream`]. Both buffers are zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncryptedMessage {
    ciphertext: Vec<u8>,
    keystream: Vec<u8>,
}

impl EncryptedMessage {
    /// The cipher byte sequence
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// The keystream bytes consumed during encryption
    pub fn keystream(&self) -> &[u8] {
        &self.keystream
    }

    /// Length in bytes of the ciphertext (and of the keystream)
    pub fn len(&self) -> usize {
        self.ciphertext.len()
    }

    /// True when the encrypted payload is empty
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Recombine the stored keystream with the stored ciphertext
    pub fn decrypt(&self) -> Result<Vec<u8>> {
        decrypt_with_keystream(&self.ciphertext, &self.keystream)
    }

    /// Consume the message, keeping only the ciphertext
    pub fn into_ciphertext(mut self) -> Vec<u8> {
        core::mem::take(&mut self.ciphertext)
    }
}

/// LFSR stream cipher with an owned key
///
/// Every operation runs its own register pass seeded from the key, so one
/// cipher value serves any number of encrypt and decrypt calls, and
/// concurrent callers can clone it freely: there is no shared register.
#[derive(Clone)]
pub struct LfsrCipher {
    key: LfsrKey,
}

impl SymmetricCipher for LfsrCipher {
    type Key = LfsrKey;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self { key: key.clone() })
    }

    fn name() -> &'static str {
        "LFSR-32"
    }
}

impl LfsrCipher {
    /// Encrypt plaintext, returning the ciphertext and keystream
    ///
    /// Empty plaintext yields an empty message without clocking the
    /// register.
    pub fn encrypt(&self, plaintext: &[u8]) -> EncryptedMessage {
        let mut lfsr = Lfsr32::new(self.key.seed(), self.key.feedback());

        let mut keystream = vec![0u8; plaintext.len()];
        lfsr.keystream(&mut keystream);

        let ciphertext = plaintext
            .iter()
            .zip(keystream.iter())
            .map(|(p, k)| p ^ k)
            .collect();

        EncryptedMessage {
            ciphertext,
            keystream,
        }
    }

    /// Decrypt by replaying the keystream from the cipher's seed
    ///
    /// The inverse of [`encrypt`](LfsrCipher::encrypt): XOR is
    /// self-inverse, so decryption is the same register pass again.
    pub fn decrypt_with_seed(&self, ciphertext: &[u8]) -> Vec<u8> {
        let mut lfsr = Lfsr32::new(self.key.seed(), self.key.feedback());

        let mut plaintext = ciphertext.to_vec();
        lfsr.decrypt(&mut plaintext);
        plaintext
    }
}

impl StreamEncryption for LfsrCipher {
    fn encrypt(&self, plaintext: &[u8]) -> EncryptedMessage {
        LfsrCipher::encrypt(self, plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Ok(self.decrypt_with_seed(ciphertext))
    }
}

/// Recombine ciphertext with a previously recorded keystream
///
/// Fails with [`Error::InvalidLength`](crate::Error::InvalidLength) when
/// the two sequences differ in length.
pub fn decrypt_with_keystream(ciphertext: &[u8], keystream: &[u8]) -> Result<Vec<u8>> {
    validate::length("decrypt_with_keystream", keystream.len(), ciphertext.len())?;

    Ok(ciphertext
        .iter()
        .zip(keystream.iter())
        .map(|(c, k)| c ^ k)
        .collect())
}
