//! # Cryptographic Primitives for Warden
//!
//! Everything the authorization checker needs from cryptography, and nothing
//! more:
//!
//! - **Ed25519** keys and signatures (ed25519-dalek).
//! - **SHA-256** for the transaction hash that signatures cover.
//! - **BLAKE3** for address derivation.
//!
//! Everything here is a thin, type-safe wrapper around audited
//! implementations. We don't roll our own.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{blake3_hash_multi, double_sha256, sha256, TxHash};
pub use keys::{KeyError, Keypair, PublicKey, Signature};
pub use signatures::{sign, verify, verify_threshold, Ed25519Verifier, SignatureVerifier};
