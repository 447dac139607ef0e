//! Property-based tests for the legacy cipher and hash
//!
//! These tests verify the fundamental invariants of the crate:
//!
//! 1. **Round-trip**: decrypt(encrypt(p)) == p for all plaintexts
//! 2. **Padded length**: ciphertext length is plaintext length rounded up,
//!    always with at least one padding byte
//! 3. **Validation first**: mis-sized keys and IVs are rejected the same way
//!    for every input, in both directions
//! 4. **Determinism**: digests of identical input are identical

use proptest::prelude::*;
use relic_crypto::{CipherError, DES_BLOCK_SIZE, DES_KEY_SIZE, decrypt, digest, encrypt};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_encrypt_decrypt_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        key in prop::collection::vec(any::<u8>(), DES_KEY_SIZE..=DES_KEY_SIZE),
        iv in prop::collection::vec(any::<u8>(), DES_BLOCK_SIZE..=DES_BLOCK_SIZE),
    ) {
        let ciphertext = encrypt(&plaintext, &key, &iv).unwrap();
        let decrypted = decrypt(&ciphertext, &key, &iv).unwrap();

        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn prop_ciphertext_length_follows_pkcs7(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        key in prop::collection::vec(any::<u8>(), DES_KEY_SIZE..=DES_KEY_SIZE),
        iv in prop::collection::vec(any::<u8>(), DES_BLOCK_SIZE..=DES_BLOCK_SIZE),
    ) {
        let ciphertext = encrypt(&plaintext, &key, &iv).unwrap();

        // Rounded up to the next block, full extra block if already aligned
        let expected = (plaintext.len() / DES_BLOCK_SIZE + 1) * DES_BLOCK_SIZE;
        prop_assert_eq!(ciphertext.len(), expected);
        prop_assert!(ciphertext.len() <= plaintext.len() + DES_BLOCK_SIZE);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_wrong_key_size_always_rejected(
        data in prop::collection::vec(any::<u8>(), 0..100),
        key in prop::collection::vec(any::<u8>(), 0..32)
            .prop_filter("wrong-sized keys only", |k| k.len() != DES_KEY_SIZE),
        iv in prop::collection::vec(any::<u8>(), DES_BLOCK_SIZE..=DES_BLOCK_SIZE),
    ) {
        let expected = CipherError::InvalidParameterSize {
            parameter: "key",
            expected: DES_KEY_SIZE,
            actual: key.len(),
        };

        prop_assert_eq!(encrypt(&data, &key, &iv).unwrap_err(), expected.clone());
        prop_assert_eq!(decrypt(&data, &key, &iv).unwrap_err(), expected);
    }

    #[test]
    fn prop_wrong_iv_size_always_rejected(
        data in prop::collection::vec(any::<u8>(), 0..100),
        key in prop::collection::vec(any::<u8>(), DES_KEY_SIZE..=DES_KEY_SIZE),
        iv in prop::collection::vec(any::<u8>(), 0..32)
            .prop_filter("wrong-sized ivs only", |iv| iv.len() != DES_BLOCK_SIZE),
    ) {
        let expected = CipherError::InvalidParameterSize {
            parameter: "iv",
            expected: DES_BLOCK_SIZE,
            actual: iv.len(),
        };

        prop_assert_eq!(encrypt(&data, &key, &iv).unwrap_err(), expected.clone());
        prop_assert_eq!(decrypt(&data, &key, &iv).unwrap_err(), expected);
    }

    #[test]
    fn prop_digest_is_deterministic_and_fixed_length(
        data in prop::collection::vec(any::<u8>(), 0..4096),
    ) {
        let first = digest(&data);
        let second = digest(&data);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 32);
    }
}
