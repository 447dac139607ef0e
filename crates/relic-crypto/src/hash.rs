//! MD5 digests rendered as lowercase hex
//!
//! MD5 is collision-broken and stays here on purpose, as bait for
//! weak-hash lint rules.

use md5::{Digest, Md5};

/// MD5 digest size in bytes; the hex rendering is twice this long.
pub const MD5_DIGEST_SIZE: usize = 16;

/// Compute the MD5 digest of `data` as a lowercase hex string.
///
/// The whole buffer is hashed in one pass; there is no streaming interface.
/// The result is always `2 * MD5_DIGEST_SIZE` characters and the function
/// cannot fail.
pub fn digest(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}
