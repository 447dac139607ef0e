//! Fuzz target for the DES-CBC cipher and MD5 digest
//!
//! Drives encrypt/decrypt/digest with adversarial inputs.
//!
//! # Strategy
//!
//! - Arbitrary plaintexts (empty, small, large)
//! - Keys and IVs of arbitrary length, correct and incorrect
//! - Raw bytes fed straight into decrypt (unpadding under corruption)
//!
//! # Invariants
//!
//! - decrypt(encrypt(p)) == p whenever key and IV sizes are valid
//! - Ciphertext length is plaintext length rounded up to the next block
//! - Mis-sized keys and IVs always yield InvalidParameterSize, never panic
//! - decrypt of arbitrary bytes returns Ok or OperationFailed, never panics
//! - digest always returns 32 hex characters

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use relic_crypto::{CipherError, DES_BLOCK_SIZE, DES_KEY_SIZE, decrypt, digest, encrypt};

#[derive(Debug, Arbitrary)]
struct CipherScenario {
    plaintext: Vec<u8>,
    key: Vec<u8>,
    iv: Vec<u8>,
    /// Bytes decrypted as-is, exercising the unpadding path
    raw_ciphertext: Vec<u8>,
}

fuzz_target!(|scenario: CipherScenario| {
    let CipherScenario { plaintext, key, iv, raw_ciphertext } = scenario;

    let sizes_valid = key.len() == DES_KEY_SIZE && iv.len() == DES_BLOCK_SIZE;

    match encrypt(&plaintext, &key, &iv) {
        Ok(ciphertext) => {
            assert!(sizes_valid);
            assert_eq!(
                ciphertext.len(),
                (plaintext.len() / DES_BLOCK_SIZE + 1) * DES_BLOCK_SIZE,
            );

            let decrypted = decrypt(&ciphertext, &key, &iv)
                .unwrap_or_else(|err| panic!("roundtrip decrypt failed: {err}"));
            assert_eq!(decrypted, plaintext);
        }
        Err(CipherError::InvalidParameterSize { .. }) => assert!(!sizes_valid),
        Err(err) => panic!("unexpected encrypt failure: {err}"),
    }

    // Arbitrary bytes through the decrypt path: must never panic, and a
    // success can only shrink the buffer.
    if let Ok(opened) = decrypt(&raw_ciphertext, &key, &iv) {
        assert!(sizes_valid);
        assert!(opened.len() < raw_ciphertext.len());
    }

    let hex = digest(&plaintext);
    assert_eq!(hex.len(), 32);
    assert!(hex.bytes().all(|b| b.is_ascii_hexdigit()));
});
