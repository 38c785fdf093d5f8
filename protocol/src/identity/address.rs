//! # Addresses
//!
//! An [`Address`] names whoever can authorize a transaction: either one key
//! holder, or an M-of-N group of key holders. Both are derived with BLAKE3
//! over a tagged encoding so the two kinds can never collide:
//!
//! ```text
//! single-key:  BLAKE3(0x01 || pk)
//! threshold:   BLAKE3(0x02 || M (u16 LE) || N (u16 LE) || sort(pk_1..pk_N))
//! ```
//!
//! Keys are sorted by byte value before hashing, so a threshold address does
//! not depend on the order the signer happened to list the keys in. The
//! threshold is part of the preimage: a 2-of-3 and a 3-of-3 over the same
//! keys are different addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ADDRESS_LENGTH;
use crate::crypto::hash::blake3_hash_multi;
use crate::crypto::keys::PublicKey;

const SINGLE_KEY_TAG: u8 = 0x01;
const THRESHOLD_TAG: u8 = 0x02;

/// A 32-byte authorizing address.
///
/// Serialized and displayed as lowercase hex. User-facing encodings
/// (checksummed, human-readable prefixes) are a wallet concern.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address {
    #[serde(with = "hex::serde")]
    bytes: [u8; ADDRESS_LENGTH],
}

impl Address {
    /// Wrap raw address bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Derive the single-key address for `pk`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_protocol::crypto::Keypair;
    /// use warden_protocol::identity::Address;
    ///
    /// let kp = Keypair::from_seed(&[1u8; 32]);
    /// let a = Address::from_public_key(&kp.public_key());
    /// assert_eq!(a, Address::from_public_key(&kp.public_key()));
    /// ```
    pub fn from_public_key(pk: &PublicKey) -> Self {
        let tag = [SINGLE_KEY_TAG];
        Self {
            bytes: blake3_hash_multi(&[tag.as_slice(), pk.as_bytes().as_slice()]),
        }
    }

    /// Derive the M-of-N address for `keys` with threshold `m`.
    ///
    /// Callers are expected to have bounded `keys.len()` and `m` already;
    /// both are encoded as `u16` and saturate if they somehow don't fit.
    pub fn from_threshold_keys(keys: &[PublicKey], m: usize) -> Self {
        let mut sorted: Vec<&PublicKey> = keys.iter().collect();
        sorted.sort();

        let m_bytes = u16::try_from(m).unwrap_or(u16::MAX).to_le_bytes();
        let n_bytes = u16::try_from(keys.len()).unwrap_or(u16::MAX).to_le_bytes();
        let tag = [THRESHOLD_TAG];

        let mut parts: Vec<&[u8]> = Vec::with_capacity(sorted.len() + 3);
        parts.push(&tag);
        parts.push(&m_bytes);
        parts.push(&n_bytes);
        parts.extend(sorted.iter().map(|pk| pk.as_bytes().as_slice()));

        Self {
            bytes: blake3_hash_multi(&parts),
        }
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.bytes
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::Keypair;

    fn pk(seed: u8) -> PublicKey {
        Keypair::from_seed(&[seed; 32]).public_key()
    }

    #[test]
    fn single_key_address_is_deterministic() {
        assert_eq!(Address::from_public_key(&pk(1)), Address::from_public_key(&pk(1)));
        assert_ne!(Address::from_public_key(&pk(1)), Address::from_public_key(&pk(2)));
    }

    #[test]
    fn threshold_address_ignores_key_order() {
        let a = Address::from_threshold_keys(&[pk(1), pk(2), pk(3)], 2);
        let b = Address::from_threshold_keys(&[pk(3), pk(1), pk(2)], 2);
        assert_eq!(a, b);
    }

    #[test]
    fn threshold_address_depends_on_m() {
        let keys = [pk(1), pk(2), pk(3)];
        assert_ne!(
            Address::from_threshold_keys(&keys, 2),
            Address::from_threshold_keys(&keys, 3)
        );
    }

    #[test]
    fn one_of_one_threshold_differs_from_single_key() {
        // Different tags, different preimages.
        assert_ne!(
            Address::from_threshold_keys(&[pk(1)], 1),
            Address::from_public_key(&pk(1))
        );
    }

    #[test]
    fn address_serializes_as_hex() {
        let addr = Address::from_bytes([0x0f; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(32)));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), addr);
    }
}
