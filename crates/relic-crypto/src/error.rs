//! Error types for the legacy cipher operations

use thiserror::Error;

/// Errors returned by [`encrypt`](crate::encrypt) and
/// [`decrypt`](crate::decrypt).
///
/// The enum is closed: every failure of the underlying primitive maps onto
/// one of these variants, and no panic crosses the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A key or IV did not have the exact length DES requires.
    ///
    /// Detected before any cipher work happens; the caller recovers by
    /// supplying correctly sized inputs.
    #[error("invalid {parameter} size: expected {expected} bytes, got {actual}")]
    InvalidParameterSize {
        /// Which input was rejected (`"key"` or `"iv"`)
        parameter: &'static str,
        /// The length DES requires
        expected: usize,
        /// The length the caller supplied
        actual: usize,
    },

    /// The cipher primitive itself reported a failure.
    ///
    /// On decryption this usually means the ciphertext length is not a
    /// block multiple or the padding is invalid (wrong key, wrong IV, or
    /// corruption). No partial output is produced.
    #[error("cipher operation failed: {reason}")]
    OperationFailed {
        /// Diagnostic context from the failed primitive call
        reason: String,
    },
}
