//! Integration tests for the LFSR cipher sessions

use lfcrypt_algorithms::types::Seed;
use lfcrypt_api::Error;
use lfcrypt_symmetric::cipher::{StreamEncryption, SymmetricCipher};
use lfcrypt_symmetric::{decrypt_with_keystream, escape, LfsrCipher, LfsrKey, LfsrSession};
use lfcrypt_tests::{REFERENCE_FEEDBACK, REFERENCE_SEED};

fn reference_cipher() -> LfsrCipher {
    let key = LfsrKey::new(Seed::new(REFERENCE_SEED), REFERENCE_FEEDBACK);
    LfsrCipher::new(&key).unwrap()
}

#[test]
fn reference_vector_single_byte() {
    let cipher = reference_cipher();

    let message = cipher.encrypt(b"A");
    assert_eq!(message.keystream(), &[0x33][..]);
    assert_eq!(message.ciphertext(), &[0x72][..]);

    assert_eq!(cipher.decrypt_with_seed(message.ciphertext()), b"A");
}

#[test]
fn reference_vector_message() {
    let cipher = reference_cipher();

    let message = cipher.encrypt(b"Hello, world!");
    assert_eq!(hex::encode(message.ciphertext()), "7b7bc9a8ca0a81ea2c037ae8ba");
    assert_eq!(hex::encode(message.keystream()), "331ea5c4a526a19d4371168c9b");

    assert_eq!(
        cipher.decrypt_with_seed(message.ciphertext()),
        b"Hello, world!"
    );
}

#[test]
fn empty_plaintext_yields_empty_message() {
    let cipher = reference_cipher();

    let message = cipher.encrypt(b"");
    assert!(message.is_empty());
    assert_eq!(message.len(), 0);
    assert!(message.keystream().is_empty());

    assert_eq!(cipher.decrypt_with_seed(&[]), Vec::<u8>::new());
}

#[test]
fn stored_keystream_matches_reseed() {
    let cipher = reference_cipher();
    let plaintext = b"two equivalent decryption strategies";

    let message = cipher.encrypt(plaintext);

    let via_keystream =
        decrypt_with_keystream(message.ciphertext(), message.keystream()).unwrap();
    let via_seed = cipher.decrypt_with_seed(message.ciphertext());

    assert_eq!(via_keystream, plaintext);
    assert_eq!(via_seed, plaintext);
}

#[test]
fn decrypt_with_keystream_rejects_length_mismatch() {
    let cipher = reference_cipher();
    let message = cipher.encrypt(b"length checked");

    let err = decrypt_with_keystream(message.ciphertext(), &message.keystream()[1..])
        .expect_err("mismatched lengths must be rejected");

    assert_eq!(
        err,
        Error::InvalidLength {
            context: "decrypt_with_keystream",
            expected: message.len(),
            actual: message.len() - 1,
        }
    );
}

#[test]
fn session_records_latest_pass() {
    let key = LfsrKey::new(Seed::new(REFERENCE_SEED), REFERENCE_FEEDBACK);
    let mut session = LfsrSession::new(&key).unwrap();

    session.encrypt(b"first pass");
    session.encrypt(b"second pass");

    assert_eq!(session.decrypt_last().unwrap(), b"second pass");
    assert_eq!(session.last_message().unwrap().len(), b"second pass".len());
}

#[test]
fn session_without_encrypt_has_no_keystream() {
    let key = LfsrKey::new(Seed::new(REFERENCE_SEED), REFERENCE_FEEDBACK);
    let session = LfsrSession::new(&key).unwrap();

    let err = session
        .decrypt_last()
        .expect_err("no pass recorded, decrypt_last must fail");

    assert_eq!(
        err,
        Error::MissingKeystream {
            context: "decrypt_last",
        }
    );
}

#[test]
fn session_clear_forgets_the_pass() {
    let key = LfsrKey::new(Seed::new(REFERENCE_SEED), REFERENCE_FEEDBACK);
    let mut session = LfsrSession::new(&key).unwrap();

    session.encrypt(b"soon forgotten");
    session.clear();

    assert!(session.last_message().is_none());
    assert!(session.decrypt_last().is_err());
}

#[test]
fn independent_sessions_stay_isolated() {
    let key_a = LfsrKey::new(Seed::new(REFERENCE_SEED), REFERENCE_FEEDBACK);
    let key_b = LfsrKey::new(Seed::new(0x1234_5678), REFERENCE_FEEDBACK);

    let mut session_a = LfsrSession::new(&key_a).unwrap();
    let mut session_b = LfsrSession::new(&key_b).unwrap();

    session_a.encrypt(b"session a plaintext");
    session_b.encrypt(b"session b plaintext");

    assert_eq!(session_a.decrypt_last().unwrap(), b"session a plaintext");
    assert_eq!(session_b.decrypt_last().unwrap(), b"session b plaintext");
}

#[test]
fn seed_sensitivity_on_reference_feedback() {
    let cipher_a = reference_cipher();
    let key_b = LfsrKey::new(Seed::new(0x1234_5678), REFERENCE_FEEDBACK);
    let cipher_b = LfsrCipher::new(&key_b).unwrap();

    let plaintext = b"same plaintext, different seeds";
    let message_a = cipher_a.encrypt(plaintext);
    let message_b = cipher_b.encrypt(plaintext);

    assert_ne!(message_a.ciphertext(), message_b.ciphertext());
}

#[test]
fn key_from_seed_bytes_matches_raw_seed() {
    let key = LfsrKey::from_seed_bytes(&REFERENCE_SEED.to_le_bytes(), REFERENCE_FEEDBACK).unwrap();
    let cipher = LfsrCipher::new(&key).unwrap();

    let message = cipher.encrypt(b"A");
    assert_eq!(message.ciphertext(), &[0x72][..]);
}

#[test]
fn key_from_seed_bytes_rejects_wrong_length() {
    let err = LfsrKey::from_seed_bytes(&[1, 2, 3], REFERENCE_FEEDBACK)
        .expect_err("three bytes are not a seed");

    assert_eq!(
        err,
        Error::InvalidLength {
            context: "Seed",
            expected: 4,
            actual: 3,
        }
    );
}

#[test]
fn generated_keys_roundtrip() {
    let key = LfsrKey::generate();
    let cipher = LfsrCipher::new(&key).unwrap();

    let message = cipher.encrypt(b"randomly seeded");
    assert_eq!(cipher.decrypt_with_seed(message.ciphertext()), b"randomly seeded");
}

#[test]
fn stream_encryption_trait_object_paths() {
    fn roundtrip<C: StreamEncryption>(cipher: &C, plaintext: &[u8]) -> Vec<u8> {
        let message = cipher.encrypt(plaintext);
        cipher.decrypt(message.ciphertext()).unwrap()
    }

    let cipher = reference_cipher();
    assert_eq!(roundtrip(&cipher, b"through the trait"), b"through the trait");
    assert_eq!(LfsrCipher::name(), "LFSR-32");
}

#[test]
fn message_into_ciphertext_keeps_bytes() {
    let cipher = reference_cipher();
    let message = cipher.encrypt(b"A");

    assert_eq!(message.into_ciphertext(), vec![0x72]);
}

#[test]
fn escape_roundtrip_of_ciphertext() {
    let cipher = reference_cipher();
    let message = cipher.encrypt(b"Hello, world!");

    let text = escape::encode(message.ciphertext());
    assert_eq!(text.len(), message.len() * escape::CHARS_PER_BYTE);
    assert!(text.starts_with("\\x7B\\x7B"));

    let bytes = escape::decode(&text).unwrap();
    assert_eq!(bytes, message.ciphertext());
    assert_eq!(cipher.decrypt_with_seed(&bytes), b"Hello, world!");
}

#[test]
fn escape_decode_rejects_malformed_text() {
    // Not a multiple of four characters
    assert!(escape::decode("\\x7").is_err());

    // Group does not start with \x
    assert!(escape::decode("0x72").is_err());

    // Digits are not hexadecimal
    assert!(escape::decode("\\xZZ").is_err());

    // Well-formed input still decodes
    assert_eq!(escape::decode("\\x00\\xff\\xAB").unwrap(), vec![0x00, 0xff, 0xab]);
}
