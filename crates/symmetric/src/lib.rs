//! LFSR stream cipher sessions for the lfcrypt library
//!
//! This crate provides the high-level encrypt/decrypt surface built on the
//! register primitive in `lfcrypt-algorithms`. An encryption pass returns
//! both the ciphertext and the keystream it consumed as owned values, so a
//! holder can decrypt either by replaying the keystream from the seed or
//! by recombining the recorded keystream, without any hidden shared state.
//!
//! # Examples
//!
//! ```
//! use lfcrypt_symmetric::cipher::SymmetricCipher;
//! use lfcrypt_symmetric::{LfsrCipher, LfsrKey};
//! use lfcrypt_symmetric::Result;
//!
//! fn encrypt_decrypt_example() -> Result<()> {
//!     // Generate a random key
//!     let key = LfsrKey::generate();
//!
//!     // Create a cipher instance
//!     let cipher = LfsrCipher::new(&key)?;
//!
//!     // Encrypt some data; the keystream comes back alongside the bytes
//!     let message = cipher.encrypt(b"Secret message");
//!
//!     // Decrypt by replaying the keystream from the seed
//!     let decrypted = cipher.decrypt_with_seed(message.ciphertext());
//!     assert_eq!(decrypted, b"Secret message");
//!     Ok(())
//! }
//! # encrypt_decrypt_example().unwrap();
//! ```
//!
//! ## Stored-keystream decryption
//!
//! ```
//! use lfcrypt_symmetric::{LfsrKey, LfsrSession};
//! use lfcrypt_symmetric::Result;
//!
//! fn session_example() -> Result<()> {
//!     let key = LfsrKey::generate();
//!     let mut session = LfsrSession::new(&key)?;
//!
//!     // The session records the keystream of its latest encrypt pass
//!     session.encrypt(b"Secret message");
//!
//!     // so decryption does not need the seed a second time
//!     let decrypted = session.decrypt_last()?;
//!     assert_eq!(decrypted, b"Secret message");
//!     Ok(())
//! }
//! # session_example().unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod cipher;
pub mod error;
pub mod escape;
pub mod stream;

// Re-export main types for convenience
pub use cipher::{StreamEncryption, SymmetricCipher};
pub use stream::{decrypt_with_keystream, EncryptedMessage, LfsrCipher, LfsrKey, LfsrSession};

// Re-export the API error system instead of custom error types
pub use lfcrypt_api::error::{Error, Result};

// Re-export commonly used validation and error handling utilities
pub use lfcrypt_api::error::{validate, ResultExt};
