//! Error types for transaction validation.
//!
//! Every rejection is a discriminated reason, not a boolean, so the caller
//! can decide whether to log, drop, or penalize the peer that relayed the
//! transaction. None of these is retried internally; the first failing rule
//! ends the validation call.

use std::fmt;
use thiserror::Error;

use super::types::PayloadKind;
use crate::identity::Address;

/// Which structural rule a signature entry broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The entry lists no public keys at all.
    NoPublicKeys,
    /// More keys than the configured maximum.
    TooManyKeys { keys: usize, max: usize },
    /// A threshold of zero authorizes nothing.
    ZeroThreshold,
    /// `M > N`.
    ThresholdExceedsKeys { m: usize, keys: usize },
    /// Fewer signature data values than the threshold.
    InsufficientSignatures { m: usize, supplied: usize },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPublicKeys => write!(f, "no public keys"),
            Self::TooManyKeys { keys, max } => write!(f, "{} keys exceeds maximum of {}", keys, max),
            Self::ZeroThreshold => write!(f, "threshold must be at least 1"),
            Self::ThresholdExceedsKeys { m, keys } => {
                write!(f, "threshold {} exceeds key count {}", m, keys)
            }
            Self::InsufficientSignatures { m, supplied } => {
                write!(f, "threshold {} but only {} signatures supplied", m, supplied)
            }
        }
    }
}

/// Authorization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A signature entry violates the structural limits.
    #[error("malformed signature entry {entry}: {reason}")]
    MalformedSignatureEntry {
        /// Index of the entry in `tx.sigs`.
        entry: usize,
        reason: MalformedReason,
    },

    /// The cryptographic check for an entry failed.
    #[error("signature verification failed for entry {entry}{}", key_suffix(.key))]
    SignatureVerificationFailed {
        /// Index of the entry in `tx.sigs`.
        entry: usize,
        /// Index of the failing key for single-key entries. Threshold
        /// entries fail as a whole, so this is `None` for them.
        key: Option<usize>,
    },

    /// A fee payer has no matching verified signature entry.
    #[error("signature missing for payer: {payer}")]
    PayerUnauthorized { payer: Address },
}

fn key_suffix(key: &Option<usize>) -> String {
    match key {
        Some(k) => format!(" (key {})", k),
        None => String::new(),
    }
}

/// Payload admissibility failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("unsupported transaction payload kind: {0}")]
    UnsupportedPayloadKind(PayloadKind),

    /// An unknown payload claimed a tag that belongs to a known kind.
    #[error("payload tag 0x{0:02x} is reserved for a known payload kind")]
    ReservedTag(u8),
}

/// Top-level validation failure returned by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("transaction authorization failed: {0}")]
    Authorization(#[from] AuthError),

    #[error("transaction payload rejected: {0}")]
    Payload(#[from] PayloadError),
}

impl ValidationError {
    /// Whether resubmitting the *same bytes* could ever succeed.
    ///
    /// Only unsupported payload kinds qualify, and only after a software
    /// upgrade teaches the node the new kind. Everything else is a property
    /// of the transaction itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Payload(PayloadError::UnsupportedPayloadKind(_)))
    }
}
