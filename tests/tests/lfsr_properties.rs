//! Property-based tests for the LFSR stream cipher

use lfcrypt_algorithms::stream::lfsr::Lfsr32;
use lfcrypt_algorithms::types::Seed;
use lfcrypt_symmetric::cipher::SymmetricCipher;
use lfcrypt_symmetric::{decrypt_with_keystream, LfsrCipher, LfsrKey};
use proptest::prelude::*;

fn cipher(seed: u32, feedback: u32) -> LfsrCipher {
    let key = LfsrKey::new(Seed::new(seed), feedback);
    LfsrCipher::new(&key).unwrap()
}

proptest! {
    #[test]
    fn roundtrip_with_seed(
        seed in any::<u32>(),
        feedback in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let cipher = cipher(seed, feedback);

        let message = cipher.encrypt(&data);
        prop_assert_eq!(cipher.decrypt_with_seed(message.ciphertext()), data);
    }

    #[test]
    fn roundtrip_with_stored_keystream(
        seed in any::<u32>(),
        feedback in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let cipher = cipher(seed, feedback);

        let message = cipher.encrypt(&data);
        let plaintext = decrypt_with_keystream(message.ciphertext(), message.keystream()).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn encryption_is_deterministic(
        seed in any::<u32>(),
        feedback in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let cipher = cipher(seed, feedback);

        let first = cipher.encrypt(&data);
        let second = cipher.encrypt(&data);

        prop_assert_eq!(first.ciphertext(), second.ciphertext());
        prop_assert_eq!(first.keystream(), second.keystream());
    }

    #[test]
    fn lengths_are_preserved(
        seed in any::<u32>(),
        feedback in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let cipher = cipher(seed, feedback);

        let message = cipher.encrypt(&data);
        prop_assert_eq!(message.ciphertext().len(), data.len());
        prop_assert_eq!(message.keystream().len(), data.len());
    }

    #[test]
    fn ciphertext_is_keystream_xor_plaintext(
        seed in any::<u32>(),
        feedback in any::<u32>(),
        data in prop::collection::vec(any::<u8>(), 1..256)
    ) {
        let cipher = cipher(seed, feedback);

        let message = cipher.encrypt(&data);
        for (i, byte) in data.iter().enumerate() {
            prop_assert_eq!(message.ciphertext()[i], message.keystream()[i] ^ byte);
        }
    }

    #[test]
    fn register_passes_are_pure(
        seed in any::<u32>(),
        feedback in any::<u32>(),
        len in 0usize..128
    ) {
        let seed = Seed::new(seed);
        let mut first = Lfsr32::new(&seed, feedback);
        let mut second = Lfsr32::new(&seed, feedback);

        let mut ks_first = vec![0u8; len];
        let mut ks_second = vec![0u8; len];
        first.keystream(&mut ks_first);
        second.keystream(&mut ks_second);

        prop_assert_eq!(ks_first, ks_second);
    }
}
