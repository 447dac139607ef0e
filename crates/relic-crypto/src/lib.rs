//! Relic Cryptographic Primitives
//!
//! Deliberately obsolete cryptography for weak-algorithm lint demonstrations.
//! Pure functions with deterministic outputs; no state survives a call.
//!
//! Two primitives are exposed:
//!
//! - DES in CBC mode with PKCS#7 padding ([`encrypt`] / [`decrypt`])
//! - MD5 digests rendered as lowercase hex ([`digest`])
//!
//! # Security
//!
//! THESE ALGORITHMS ARE BROKEN. This crate exists so that static-analysis
//! rules flagging weak cryptography (SonarQube S5547 and relatives) have
//! something real to flag:
//!
//! - DES has a 56-bit effective key, brute-forceable on commodity hardware
//! - CBC with PKCS#7 and caller-supplied IVs provides no authenticity
//! - MD5 collisions can be produced in seconds
//!
//! Do not use this crate to protect data. For real work reach for an AEAD
//! such as XChaCha20-Poly1305 and a SHA-2 or BLAKE family hash.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod error;
pub mod hash;

pub use cipher::{DES_BLOCK_SIZE, DES_KEY_SIZE, decrypt, encrypt};
pub use error::CipherError;
pub use hash::{MD5_DIGEST_SIZE, digest};
