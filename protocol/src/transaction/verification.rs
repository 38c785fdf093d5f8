//! Authorization checking: who signed this transaction, and does that cover
//! everyone who is paying for it?
//!
//! [`check_authorization`] walks the signature entries in order. Each entry
//! is checked structurally first (cheap), then cryptographically
//! (expensive), and only after the signature check passes is the entry's
//! address derived and added to the authorized set. Once every entry has
//! passed, every fee payer must appear in that set.

use std::collections::HashSet;

use tracing::trace;

use super::builder::Transaction;
use super::error::{AuthError, MalformedReason};
use super::types::SignatureEntry;
use crate::config::ValidatorConfig;
use crate::crypto::hash::TxHash;
use crate::crypto::signatures::SignatureVerifier;
use crate::identity::Address;

/// Checks every signature entry on `tx` and confirms that every fee payer is
/// authorized.
///
/// Returns the set of addresses authorized by the transaction's signatures.
///
/// # Errors
///
/// The first failing rule, in this order per entry:
///
/// 1. [`AuthError::MalformedSignatureEntry`] for structural violations.
/// 2. [`AuthError::SignatureVerificationFailed`] when the verifier rejects.
///
/// then, after all entries:
///
/// 3. [`AuthError::PayerUnauthorized`] for the first uncovered fee payer.
pub fn check_authorization<V>(
    tx: &Transaction,
    verifier: &V,
    config: &ValidatorConfig,
) -> Result<HashSet<Address>, AuthError>
where
    V: SignatureVerifier + ?Sized,
{
    check_authorization_with_hash(tx, &tx.hash(), verifier, config)
}

/// [`check_authorization`] for callers that already hold `tx.hash()`.
pub(crate) fn check_authorization_with_hash<V>(
    tx: &Transaction,
    hash: &TxHash,
    verifier: &V,
    config: &ValidatorConfig,
) -> Result<HashSet<Address>, AuthError>
where
    V: SignatureVerifier + ?Sized,
{
    let mut authorized = HashSet::with_capacity(tx.sigs.len());

    for (index, entry) in tx.sigs.iter().enumerate() {
        check_entry_structure(index, entry, config)?;

        let address = if entry.is_single_key() {
            let public_key = &entry.public_keys[0];
            if !verifier.verify_single(public_key, hash, &entry.sig_data[0]) {
                return Err(AuthError::SignatureVerificationFailed {
                    entry: index,
                    key: Some(0),
                });
            }
            Address::from_public_key(public_key)
        } else {
            let m = entry.threshold();
            if !verifier.verify_threshold(hash, &entry.public_keys, m, &entry.sig_data) {
                return Err(AuthError::SignatureVerificationFailed {
                    entry: index,
                    key: None,
                });
            }
            Address::from_threshold_keys(&entry.public_keys, m)
        };

        trace!(entry = index, address = %address, "signature entry verified");
        authorized.insert(address);
    }

    if let Some(payer) = tx.payers().find(|payer| !authorized.contains(*payer)) {
        return Err(AuthError::PayerUnauthorized { payer: *payer });
    }

    Ok(authorized)
}

/// Structural limits on one entry: `1 ≤ N ≤ max`, `1 ≤ M ≤ N`, and at least
/// `M` signature data values.
fn check_entry_structure(
    index: usize,
    entry: &SignatureEntry,
    config: &ValidatorConfig,
) -> Result<(), AuthError> {
    let keys = entry.key_count();
    let max = config.effective_max_multisig_keys();
    let m = entry.threshold();
    let supplied = entry.sig_data.len();

    let reason = if keys == 0 {
        Some(MalformedReason::NoPublicKeys)
    } else if keys > max {
        Some(MalformedReason::TooManyKeys { keys, max })
    } else if m == 0 {
        Some(MalformedReason::ZeroThreshold)
    } else if m > keys {
        Some(MalformedReason::ThresholdExceedsKeys { m, keys })
    } else if supplied < m {
        Some(MalformedReason::InsufficientSignatures { m, supplied })
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AuthError::MalformedSignatureEntry {
            entry: index,
            reason,
        }),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
