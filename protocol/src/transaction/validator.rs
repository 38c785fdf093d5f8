//! The transaction validator: authorization first, payload second.
//!
//! This is the only entry point external callers should use. Running the
//! authorization check before the payload gate means an unauthorized sender
//! learns nothing about which payload kinds this node supports.
//!
//! There is no global registry to look a validator up in. Whoever needs one
//! constructs it with [`TransactionValidator::new`] (or
//! [`TransactionValidator::with_defaults`]) and passes it around. It holds no
//! mutable state, so a shared reference can be used from any number of
//! threads at once.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::builder::Transaction;
use super::error::ValidationError;
use super::payload::check_payload;
use super::verification::check_authorization_with_hash;
use crate::config::ValidatorConfig;
use crate::crypto::signatures::{Ed25519Verifier, SignatureVerifier};
use crate::identity::Address;

/// Stateless validator parameterized over the signature primitives.
#[derive(Debug, Clone, Default)]
pub struct TransactionValidator<V = Ed25519Verifier> {
    verifier: V,
    config: ValidatorConfig,
}

impl TransactionValidator<Ed25519Verifier> {
    /// Ed25519 verification with protocol-default limits.
    pub fn with_defaults() -> Self {
        Self::new(Ed25519Verifier, ValidatorConfig::default())
    }
}

impl<V: SignatureVerifier> TransactionValidator<V> {
    pub fn new(verifier: V, config: ValidatorConfig) -> Self {
        Self { verifier, config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `tx`, returning the first rule it breaks.
    pub fn validate(&self, tx: &Transaction) -> Result<(), ValidationError> {
        self.authorize(tx).map(|_| ())
    }

    /// Validates `tx` and, on success, returns the set of addresses its
    /// signatures authorize.
    pub fn authorize(&self, tx: &Transaction) -> Result<HashSet<Address>, ValidationError> {
        let hash = tx.hash();

        let authorized = check_authorization_with_hash(tx, &hash, &self.verifier, &self.config)
            .map_err(|err| {
                info!(tx_hash = %hex::encode(hash), error = %err, "transaction authorization rejected");
                ValidationError::Authorization(err)
            })?;

        check_payload(&tx.payload).map_err(|err| {
            warn!(tx_hash = %hex::encode(hash), error = %err, "transaction payload rejected");
            ValidationError::Payload(err)
        })?;

        debug!(
            tx_hash = %hex::encode(hash),
            authorized = authorized.len(),
            payload = %tx.payload.kind(),
            "transaction validated"
        );
        Ok(authorized)
    }

    /// Validates each transaction independently; one rejection does not
    /// affect the others.
    pub fn validate_batch(&self, txs: &[Transaction]) -> Vec<Result<(), ValidationError>> {
        txs.iter().map(|tx| self.validate(tx)).collect()
    }
}

/// Validates `tx` with the default Ed25519 validator.
///
/// ```
/// use warden_protocol::crypto::Keypair;
/// use warden_protocol::identity::Address;
/// use warden_protocol::transaction::{
///     sign_transaction, validate_transaction, Payload, TransactionBuilder,
/// };
///
/// let kp = Keypair::generate();
/// let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x01]))
///     .fee(Address::from_public_key(&kp.public_key()), 10)
///     .build();
/// sign_transaction(&mut tx, &kp);
/// assert!(validate_transaction(&tx).is_ok());
/// ```
pub fn validate_transaction(tx: &Transaction) -> Result<(), ValidationError> {
    TransactionValidator::with_defaults().validate(tx)
}
