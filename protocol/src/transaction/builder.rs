//! Transaction construction via the builder pattern.
//!
//! [`TransactionBuilder`] assembles the hashed content of a transaction:
//! payload, fees, nonce, attributes. It never signs. Signature entries are
//! appended afterwards by [`super::signing`], because they cover the hash of
//! everything the builder produced.

use serde::{Deserialize, Serialize};

use super::types::{write_var_bytes, Fee, Payload, SignatureEntry};
use crate::config::TX_VERSION;
use crate::crypto::hash::{double_sha256, TxHash};
use crate::identity::Address;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A transaction as it arrives at the validator.
///
/// Immutable from the validator's point of view. The content hash is
/// recomputed from the fields on demand rather than carried alongside them,
/// so a transaction can't claim one hash while containing different bytes.
///
/// # Canonical Byte Format
///
/// [`Transaction::signable_bytes`] serializes, in order: version (u8),
/// payload (tag + fields), nonce (u32 LE), attributes (length-prefixed),
/// fee count (u32 LE), then each fee as payer (32 bytes) and amount
/// (u64 LE). Signature entries are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u8,

    /// Exactly one payload.
    pub payload: Payload,

    /// Sender-chosen value to make otherwise identical transactions distinct.
    pub nonce: u32,

    /// Opaque attribute bytes; hashed, never interpreted here.
    #[serde(with = "hex::serde", default)]
    pub attributes: Vec<u8>,

    /// Fee entries. Every payer must be authorized by a signature entry.
    #[serde(default)]
    pub fees: Vec<Fee>,

    /// Signature entries, in the order they were attached.
    #[serde(default)]
    pub sigs: Vec<SignatureEntry>,
}

impl Transaction {
    /// Returns the canonical byte representation that the hash covers.
    pub fn signable_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);

        buf.push(self.version);
        self.payload.write_canonical(&mut buf);
        buf.extend_from_slice(&self.nonce.to_le_bytes());
        write_var_bytes(&mut buf, &self.attributes);

        buf.extend_from_slice(&(self.fees.len() as u32).to_le_bytes());
        for fee in &self.fees {
            buf.extend_from_slice(fee.payer.as_bytes());
            buf.extend_from_slice(&fee.amount.to_le_bytes());
        }

        buf
    }

    /// The content hash: `double_sha256(signable_bytes)`.
    ///
    /// This is the message every signature entry signs.
    pub fn hash(&self) -> TxHash {
        double_sha256(&self.signable_bytes())
    }

    /// Hex-encoded content hash, for logs.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash())
    }

    /// Iterator over fee payers, in fee order.
    pub fn payers(&self) -> impl Iterator<Item = &Address> {
        self.fees.iter().map(|fee| &fee.payer)
    }

    /// Parse a transaction from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`Transaction`] instances.
///
/// ```
/// use warden_protocol::crypto::Keypair;
/// use warden_protocol::identity::Address;
/// use warden_protocol::transaction::{Payload, TransactionBuilder};
///
/// let payer = Address::from_public_key(&Keypair::from_seed(&[1; 32]).public_key());
/// let tx = TransactionBuilder::new(Payload::invoke(vec![0x01]))
///     .fee(payer, 10)
///     .nonce(7)
///     .build();
/// assert!(tx.sigs.is_empty());
/// ```
pub struct TransactionBuilder {
    version: u8,
    payload: Payload,
    nonce: u32,
    attributes: Vec<u8>,
    fees: Vec<Fee>,
}

impl TransactionBuilder {
    /// Creates a new builder for the given payload.
    ///
    /// Defaults: current transaction version, nonce 0, no attributes,
    /// no fees.
    pub fn new(payload: Payload) -> Self {
        Self {
            version: TX_VERSION,
            payload,
            nonce: 0,
            attributes: Vec::new(),
            fees: Vec::new(),
        }
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn nonce(mut self, nonce: u32) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn attributes(mut self, attributes: Vec<u8>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Appends a fee entry. Call repeatedly for multiple payers.
    pub fn fee(mut self, payer: Address, amount: u64) -> Self {
        self.fees.push(Fee { payer, amount });
        self
    }

    /// Consumes the builder and produces a transaction with no signature
    /// entries.
    pub fn build(self) -> Transaction {
        Transaction {
            version: self.version,
            payload: self.payload,
            nonce: self.nonce,
            attributes: self.attributes,
            fees: self.fees,
            sigs: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
