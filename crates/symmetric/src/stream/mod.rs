//! LFSR stream cipher sessions
//!
//! An encryption pass returns an [`EncryptedMessage`] owning both the
//! cipher bytes and the keystream that produced them. Decryption comes in
//! two equivalent flavors: replay the keystream from the seed
//! ([`LfsrCipher::decrypt_with_seed`]), or recombine a recorded keystream
//! with the ciphertext ([`decrypt_with_keystream`], [`LfsrSession`]).

mod cipher;
mod session;

pub use cipher::{decrypt_with_keystream, EncryptedMessage, LfsrCipher, LfsrKey};
pub use session::LfsrSession;
