//! # Key Management
//!
//! Ed25519 keypairs, public keys, and signatures as they appear on Warden
//! transactions.
//!
//! Public keys and signatures arriving on a transaction are untrusted bytes.
//! They are stored as-is and only interpreted at verification time, so a
//! garbage key or a truncated signature is a verification failure, never a
//! parse error or a panic.
//!
//! ## Security considerations
//!
//! - Private keys are zeroized on drop (ed25519-dalek does this for us).
//! - Key generation uses `OsRng`.
//! - Secret key bytes are never logged or printed by `Debug`.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{SIGNATURE_LENGTH, VERIFYING_KEY_LENGTH};

/// Errors that can occur while parsing key material.
///
/// Deliberately vague about *why* something failed.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key bytes: expected 32 bytes of hex")]
    InvalidSecretKey,

    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,
}

/// An Ed25519 keypair able to produce signatures for transaction entries.
///
/// `Keypair` intentionally does not implement `Serialize`. Exporting a
/// secret key is an explicit call to [`Keypair::secret_key_hex`].
pub struct Keypair {
    signing_key: SigningKey,
}

/// A public key as carried in a signature entry.
///
/// 32 opaque bytes. Equality and hashing are byte-wise; whether the bytes
/// form a valid curve point only matters when verifying.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey {
    #[serde(with = "hex::serde")]
    bytes: [u8; VERIFYING_KEY_LENGTH],
}

/// A signature datum as carried in a signature entry.
///
/// Stored as a `Vec<u8>` because it comes off the wire. A well-formed
/// Ed25519 signature is exactly 64 bytes; anything else simply fails to
/// verify.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature {
    #[serde(with = "hex::serde")]
    bytes: Vec<u8>,
}

impl Keypair {
    /// Generate a fresh keypair from the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Construct a keypair deterministically from a 32-byte seed.
    ///
    /// Tests and fixtures use this to get stable keys. A weak seed gives a
    /// weak key.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Reconstruct a keypair from a hex-encoded 32-byte secret key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str.trim()).map_err(|_| KeyError::InvalidSecretKey)?;
        let seed: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// Returns the public key of this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            bytes: self.signing_key.verifying_key().to_bytes(),
        }
    }

    /// Sign a message. Ed25519 is deterministic: same key and message,
    /// same signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature {
            bytes: self.signing_key.sign(message).to_bytes().to_vec(),
        }
    }

    /// Hex export of the secret key. Handle with care.
    pub fn secret_key_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }
}

impl Clone for Keypair {
    fn clone(&self) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&self.signing_key.to_bytes()),
        }
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public half only.
        write!(f, "Keypair(pub={})", self.public_key().to_hex())
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

impl PublicKey {
    /// Create a `PublicKey` from raw bytes. No curve check is performed.
    pub fn from_bytes(bytes: [u8; VERIFYING_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Parse a public key from a byte slice, rejecting anything that is not
    /// a valid Ed25519 point.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; VERIFYING_KEY_LENGTH] = slice.try_into().map_err(|_| KeyError::InvalidPublicKey)?;
        VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { bytes })
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; VERIFYING_KEY_LENGTH] {
        &self.bytes
    }

    /// Strict Ed25519 verification of `signature` over `message`.
    ///
    /// Returns `false` for invalid points, wrong-length signatures, and bad
    /// signatures alike.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.bytes) else {
            return false;
        };
        let Some(dalek_sig) = signature.to_dalek_signature() else {
            return false;
        };
        verifying_key.verify_strict(message, &dalek_sig).is_ok()
    }

    /// Hex-encoded representation. 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(s.trim()).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::try_from_slice(&bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

impl Signature {
    /// Wrap arbitrary bytes as a signature datum.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `None` unless the datum is exactly [`SIGNATURE_LENGTH`] bytes.
    pub fn to_dalek_signature(&self) -> Option<DalekSignature> {
        let arr: [u8; SIGNATURE_LENGTH] = self.bytes.as_slice().try_into().ok()?;
        Some(DalekSignature::from_bytes(&arr))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        let shown = &hex[..hex.len().min(16)];
        write!(f, "Signature({}, {} bytes)", shown, self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let kp = Keypair::generate();
        let sig = kp.sign(b"hello");
        assert!(kp.public_key().verify(b"hello", &sig));
        assert!(!kp.public_key().verify(b"goodbye", &sig));
    }

    #[test]
    fn test_from_seed_is_deterministic() {
        let a = Keypair::from_seed(&[7u8; 32]);
        let b = Keypair::from_seed(&[7u8; 32]);
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_secret_key_hex_roundtrip() {
        let kp = Keypair::generate();
        let restored = Keypair::from_hex(&kp.secret_key_hex()).unwrap();
        assert_eq!(kp.public_key(), restored.public_key());
    }

    #[test]
    fn test_from_hex_rejects_short_key() {
        assert!(matches!(
            Keypair::from_hex("abcd"),
            Err(KeyError::InvalidSecretKey)
        ));
    }

    #[test]
    fn test_truncated_signature_fails_without_panic() {
        let kp = Keypair::generate();
        let sig = kp.sign(b"msg");
        let truncated = Signature::from_bytes(sig.as_bytes()[..63].to_vec());
        assert!(!kp.public_key().verify(b"msg", &truncated));
    }

    #[test]
    fn test_garbage_public_key_fails_verification() {
        let kp = Keypair::generate();
        let sig = kp.sign(b"msg");
        let garbage = PublicKey::from_bytes([0xFF; 32]);
        assert!(!garbage.verify(b"msg", &sig));
    }

    #[test]
    fn test_public_key_serializes_as_hex() {
        let pk = PublicKey::from_bytes([0xAB; 32]);
        let json = serde_json::to_string(&pk).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pk);
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let pk = Keypair::from_seed(&[4u8; 32]).public_key();
        assert_eq!(PublicKey::from_hex(&pk.to_hex()).unwrap(), pk);
        assert_eq!(PublicKey::try_from_slice(pk.as_bytes()).unwrap(), pk);
    }

    #[test]
    fn test_public_key_parsing_rejects_bad_input() {
        let pk = Keypair::from_seed(&[4u8; 32]).public_key();
        assert!(matches!(
            PublicKey::from_hex("not hex"),
            Err(KeyError::InvalidPublicKey)
        ));
        assert!(matches!(
            PublicKey::try_from_slice(&pk.as_bytes()[..31]),
            Err(KeyError::InvalidPublicKey)
        ));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let kp = Keypair::generate();
        let dbg = format!("{:?}", kp);
        assert!(!dbg.contains(&kp.secret_key_hex()));
    }
}
