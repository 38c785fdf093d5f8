//! Attaching signature entries to a transaction.
//!
//! Signing is separate from building because the keys usually aren't all in
//! one place: a threshold entry is typically assembled from signatures that
//! co-signers produced independently over the same transaction hash.

use super::builder::Transaction;
use super::types::SignatureEntry;
use crate::crypto::keys::{Keypair, PublicKey};

/// Appends a single-key signature entry signed by `keypair`.
///
/// The signature covers [`Transaction::hash`], which does not include
/// signature entries, so entries can be added in any order.
///
/// ```
/// use warden_protocol::crypto::Keypair;
/// use warden_protocol::identity::Address;
/// use warden_protocol::transaction::{sign_transaction, Payload, TransactionBuilder};
///
/// let kp = Keypair::generate();
/// let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x01]))
///     .fee(Address::from_public_key(&kp.public_key()), 10)
///     .build();
/// sign_transaction(&mut tx, &kp);
/// assert_eq!(tx.sigs.len(), 1);
/// ```
pub fn sign_transaction<'a>(tx: &'a mut Transaction, keypair: &Keypair) -> &'a Transaction {
    let hash = tx.hash();
    tx.sigs
        .push(SignatureEntry::single(keypair.public_key(), keypair.sign(&hash)));
    tx
}

/// Appends an M-of-N threshold entry over `public_keys`, with signatures
/// from each of `signers`.
///
/// `signers` does not need to be a subset of `public_keys` or have `m`
/// members; building deliberately broken entries is how the tests exercise
/// the checker.
pub fn sign_threshold<'a>(
    tx: &'a mut Transaction,
    m: u16,
    public_keys: Vec<PublicKey>,
    signers: &[&Keypair],
) -> &'a Transaction {
    let hash = tx.hash();
    let sig_data = signers.iter().map(|kp| kp.sign(&hash)).collect();
    tx.sigs.push(SignatureEntry {
        m,
        public_keys,
        sig_data,
    });
    tx
}
