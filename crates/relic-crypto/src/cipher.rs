//! DES-CBC encryption and decryption with PKCS#7 padding
//!
//! All functions are pure and stateless - key and IV are borrowed for the
//! duration of one call and never retained. DES is kept deliberately: the
//! point of this crate is to trip weak-cipher lint rules, not to protect
//! data.

use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use des::Des;
use tracing::warn;

use crate::error::CipherError;

/// DES key size in bytes (56 effective bits plus 8 parity bits).
pub const DES_KEY_SIZE: usize = 8;

/// DES block size in bytes; the IV must be exactly this long.
pub const DES_BLOCK_SIZE: usize = 8;

type DesCbcEncryptor = cbc::Encryptor<Des>;
type DesCbcDecryptor = cbc::Decryptor<Des>;

/// Encrypt `plaintext` with DES-CBC and PKCS#7 padding.
///
/// The key and IV are used exactly as provided. The output is always padded,
/// so its length is `plaintext.len()` rounded up to the next block multiple,
/// plus a full extra block when the plaintext is already block-aligned.
///
/// # Errors
///
/// - `InvalidParameterSize`: key is not 8 bytes or IV is not 8 bytes,
///   checked before any cipher work
/// - `OperationFailed`: the cipher primitive rejected the operation
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
    check_parameter_sizes(key, iv)?;

    let Ok(cipher) = DesCbcEncryptor::new_from_slices(key, iv) else {
        unreachable!("key and iv sizes are validated above");
    };

    // Worst case is one full padding block past the plaintext; the buffer
    // is shrunk to the bytes actually written.
    let mut buf = vec![0u8; plaintext.len() + DES_BLOCK_SIZE];
    buf[..plaintext.len()].copy_from_slice(plaintext);

    let written = cipher
        .encrypt_padded_mut::<Pkcs7>(&mut buf, plaintext.len())
        .map_err(|_| operation_failed("encrypt", "output buffer too small for padded message"))?
        .len();
    buf.truncate(written);
    Ok(buf)
}

/// Decrypt `ciphertext` with DES-CBC and strip the PKCS#7 padding.
///
/// # Errors
///
/// - `InvalidParameterSize`: key is not 8 bytes or IV is not 8 bytes,
///   checked before any cipher work
/// - `OperationFailed`: ciphertext length is not a block multiple, or the
///   final block unpads invalidly (wrong key, wrong IV, or corruption)
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
    check_parameter_sizes(key, iv)?;

    let Ok(cipher) = DesCbcDecryptor::new_from_slices(key, iv) else {
        unreachable!("key and iv sizes are validated above");
    };

    // Padding removal only shrinks, so the ciphertext length bounds the
    // plaintext length.
    let mut buf = ciphertext.to_vec();

    let written = cipher
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| {
            operation_failed("decrypt", "ciphertext length not a block multiple or padding invalid")
        })?
        .len();
    buf.truncate(written);
    Ok(buf)
}

/// Reject keys and IVs whose length is not exactly what DES requires.
fn check_parameter_sizes(key: &[u8], iv: &[u8]) -> Result<(), CipherError> {
    if key.len() != DES_KEY_SIZE {
        return Err(invalid_size("key", DES_KEY_SIZE, key.len()));
    }
    if iv.len() != DES_BLOCK_SIZE {
        return Err(invalid_size("iv", DES_BLOCK_SIZE, iv.len()));
    }
    Ok(())
}

fn invalid_size(parameter: &'static str, expected: usize, actual: usize) -> CipherError {
    warn!(parameter, expected, actual, "rejecting DES parameter with wrong size");
    CipherError::InvalidParameterSize { parameter, expected, actual }
}

fn operation_failed(direction: &'static str, reason: &str) -> CipherError {
    warn!(direction, reason, "DES-CBC operation failed");
    CipherError::OperationFailed { reason: reason.to_owned() }
}
