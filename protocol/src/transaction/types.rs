//! Core type definitions for Warden transactions.
//!
//! These types are the vocabulary of the validator: signature entries that
//! claim authority, fee entries that name who pays, and the payload whose
//! kind decides whether this node knows what to do with the transaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::PayloadError;
use crate::crypto::keys::{PublicKey, Signature};
use crate::identity::Address;

// ---------------------------------------------------------------------------
// PayloadKind
// ---------------------------------------------------------------------------

/// Discriminant of a [`Payload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Deploy a code artifact.
    DeployCode,
    /// Invoke previously deployed code.
    InvokeCode,
    /// Bookkeeping (system accounting) transaction.
    Bookkeeping,
    /// Any other payload tag this node does not admit.
    Other(u8),
}

impl PayloadKind {
    pub const DEPLOY_CODE_TAG: u8 = 0xd0;
    pub const INVOKE_CODE_TAG: u8 = 0xd1;
    pub const BOOKKEEPING_TAG: u8 = 0x02;

    /// Classifies a wire tag.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            Self::DEPLOY_CODE_TAG => Self::DeployCode,
            Self::INVOKE_CODE_TAG => Self::InvokeCode,
            Self::BOOKKEEPING_TAG => Self::Bookkeeping,
            other => Self::Other(other),
        }
    }

    /// One-byte tag used in the canonical encoding.
    pub fn tag(&self) -> u8 {
        match self {
            Self::DeployCode => Self::DEPLOY_CODE_TAG,
            Self::InvokeCode => Self::INVOKE_CODE_TAG,
            Self::Bookkeeping => Self::BOOKKEEPING_TAG,
            Self::Other(tag) => *tag,
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeployCode => write!(f, "DeployCode"),
            Self::InvokeCode => write!(f, "InvokeCode"),
            Self::Bookkeeping => write!(f, "Bookkeeping"),
            Self::Other(tag) => write!(f, "Other(0x{:02x})", tag),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Code deployment payload. Only its kind matters to the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployCode {
    #[serde(with = "hex::serde")]
    pub code: Vec<u8>,
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
}

/// Code invocation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeCode {
    #[serde(with = "hex::serde")]
    pub code: Vec<u8>,
}

/// Bookkeeping payload. The nonce keeps otherwise identical bookkeeping
/// transactions from sharing a hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookkeeping {
    pub nonce: u64,
}

/// A payload whose tag this node has no type for.
///
/// The tag can never be one of the known wire tags, otherwise the payload
/// would hash identically to a typed one. Construct with
/// [`UnknownPayload::new`]; deserialization runs the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUnknownPayload")]
pub struct UnknownPayload {
    tag: u8,
    #[serde(with = "hex::serde")]
    data: Vec<u8>,
}

#[derive(Deserialize)]
struct RawUnknownPayload {
    tag: u8,
    #[serde(with = "hex::serde")]
    data: Vec<u8>,
}

impl UnknownPayload {
    /// Fails with [`PayloadError::ReservedTag`] if `tag` belongs to a known
    /// payload kind.
    pub fn new(tag: u8, data: impl Into<Vec<u8>>) -> Result<Self, PayloadError> {
        match PayloadKind::from_tag(tag) {
            PayloadKind::Other(_) => Ok(Self {
                tag,
                data: data.into(),
            }),
            _ => Err(PayloadError::ReservedTag(tag)),
        }
    }

    pub fn tag(&self) -> u8 {
        self.tag
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<RawUnknownPayload> for UnknownPayload {
    type Error = PayloadError;

    fn try_from(raw: RawUnknownPayload) -> Result<Self, Self::Error> {
        Self::new(raw.tag, raw.data)
    }
}

/// The transaction payload: a closed union over the kinds this codebase
/// knows about, plus `Other` for everything it doesn't.
///
/// Adding a variant is a compile error in the payload gate until someone
/// decides whether the new kind is admissible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    DeployCode(DeployCode),
    InvokeCode(InvokeCode),
    Bookkeeping(Bookkeeping),
    Other(UnknownPayload),
}

impl Payload {
    /// The kind of this payload.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::DeployCode(_) => PayloadKind::DeployCode,
            Self::InvokeCode(_) => PayloadKind::InvokeCode,
            Self::Bookkeeping(_) => PayloadKind::Bookkeeping,
            Self::Other(unknown) => PayloadKind::Other(unknown.tag),
        }
    }

    /// Shorthand for an invocation payload.
    pub fn invoke(code: impl Into<Vec<u8>>) -> Self {
        Self::InvokeCode(InvokeCode { code: code.into() })
    }

    /// Shorthand for a payload of an unknown kind. See [`UnknownPayload::new`].
    pub fn other(tag: u8, data: impl Into<Vec<u8>>) -> Result<Self, PayloadError> {
        UnknownPayload::new(tag, data).map(Self::Other)
    }

    /// Appends the canonical encoding of this payload to `buf`.
    ///
    /// Format: tag byte, then the variant's fields with length-prefixed
    /// byte strings.
    pub(crate) fn write_canonical(&self, buf: &mut Vec<u8>) {
        buf.push(self.kind().tag());
        match self {
            Self::DeployCode(d) => {
                write_var_bytes(buf, &d.code);
                write_var_bytes(buf, d.name.as_bytes());
                write_var_bytes(buf, d.version.as_bytes());
                write_var_bytes(buf, d.author.as_bytes());
                write_var_bytes(buf, d.description.as_bytes());
            }
            Self::InvokeCode(i) => write_var_bytes(buf, &i.code),
            Self::Bookkeeping(b) => buf.extend_from_slice(&b.nonce.to_le_bytes()),
            Self::Other(unknown) => write_var_bytes(buf, &unknown.data),
        }
    }
}

/// Length-prefixed (u32 LE) byte string.
pub(crate) fn write_var_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
}

// ---------------------------------------------------------------------------
// Fee
// ---------------------------------------------------------------------------

/// A fee entry: who pays, and how much. The amount is opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub payer: Address,
    pub amount: u64,
}

// ---------------------------------------------------------------------------
// SignatureEntry
// ---------------------------------------------------------------------------

/// One authorization claim on a transaction.
///
/// With one public key this is a plain signature. With several it is an
/// M-of-N threshold claim, where `m` is the number of distinct keys that
/// must have signed. Nothing about the entry is trusted until the
/// authorization checker has looked at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub m: u16,
    pub public_keys: Vec<PublicKey>,
    pub sig_data: Vec<Signature>,
}

impl SignatureEntry {
    /// A one-key, one-signature entry.
    pub fn single(public_key: PublicKey, signature: Signature) -> Self {
        Self {
            m: 1,
            public_keys: vec![public_key],
            sig_data: vec![signature],
        }
    }

    /// Number of public keys (`N`).
    pub fn key_count(&self) -> usize {
        self.public_keys.len()
    }

    /// Threshold as `usize`.
    pub fn threshold(&self) -> usize {
        usize::from(self.m)
    }

    pub fn is_single_key(&self) -> bool {
        self.public_keys.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_kind_matches_variant() {
        assert_eq!(Payload::invoke(vec![1, 2]).kind(), PayloadKind::InvokeCode);
        assert_eq!(
            Payload::Bookkeeping(Bookkeeping { nonce: 1 }).kind(),
            PayloadKind::Bookkeeping
        );
        assert_eq!(
            Payload::other(0x42, vec![]).unwrap().kind(),
            PayloadKind::Other(0x42)
        );
    }

    #[test]
    fn payload_kind_display() {
        assert_eq!(PayloadKind::DeployCode.to_string(), "DeployCode");
        assert_eq!(PayloadKind::Other(0x09).to_string(), "Other(0x09)");
    }

    #[test]
    fn canonical_encoding_starts_with_tag() {
        let mut buf = Vec::new();
        Payload::invoke(vec![0xAA]).write_canonical(&mut buf);
        assert_eq!(buf, vec![0xd1, 1, 0, 0, 0, 0xAA]);
    }

    #[test]
    fn payload_json_roundtrip() {
        let p = Payload::other(0x80, vec![0xde, 0xad]).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("dead"));
        assert_eq!(serde_json::from_str::<Payload>(&json).unwrap(), p);
    }

    #[test]
    fn known_tags_cannot_be_carried_as_other() {
        for tag in [
            PayloadKind::DEPLOY_CODE_TAG,
            PayloadKind::INVOKE_CODE_TAG,
            PayloadKind::BOOKKEEPING_TAG,
        ] {
            assert_eq!(Payload::other(tag, vec![0xaa]), Err(PayloadError::ReservedTag(tag)));
        }
    }

    #[test]
    fn known_tag_as_other_is_rejected_on_deserialize() {
        let json = r#"{"Other":{"tag":209,"data":"aa"}}"#;
        let err = serde_json::from_str::<Payload>(json).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn tag_classification_round_trips() {
        for kind in [
            PayloadKind::DeployCode,
            PayloadKind::InvokeCode,
            PayloadKind::Bookkeeping,
            PayloadKind::Other(0x80),
        ] {
            assert_eq!(PayloadKind::from_tag(kind.tag()), kind);
        }
    }
}
