//! # Hashing Utilities
//!
//! Two hash functions, two jobs:
//!
//! - **double SHA-256** produces the transaction hash that every signature
//!   entry signs. `SHA-256(SHA-256(x))` keeps us clear of length-extension
//!   games on the signed digest.
//! - **BLAKE3** derives addresses from key material. Fast, and the
//!   multi-part variant lets us hash `tag || threshold || keys...` without
//!   allocating a buffer.

use sha2::{Digest, Sha256};

use crate::config::HASH_OUTPUT_LENGTH;

/// A 32-byte transaction content hash.
pub type TxHash = [u8; HASH_OUTPUT_LENGTH];

/// Compute the SHA-256 hash of the input data as a fixed-size array.
pub fn sha256(data: &[u8]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// # Example
///
/// ```
/// use warden_protocol::crypto::double_sha256;
///
/// let tx_hash = double_sha256(b"raw transaction bytes");
/// assert_eq!(tx_hash.len(), 32);
/// ```
pub fn double_sha256(data: &[u8]) -> TxHash {
    sha256(&sha256(data))
}

/// Hash multiple byte slices together without concatenating them first.
///
/// `blake3_hash_multi(&[a, b])` equals `blake3(a || b)`.
pub fn blake3_hash_multi(parts: &[&[u8]]) -> [u8; HASH_OUTPUT_LENGTH] {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    *hasher.finalize().as_bytes()
}
