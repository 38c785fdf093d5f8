//! # Digital Signatures
//!
//! Single-key and threshold (M-of-N) verification over a transaction hash.
//!
//! The authorization checker never talks to ed25519-dalek directly. It goes
//! through the [`SignatureVerifier`] trait, which is the seam where a node can
//! swap in a hardware-accelerated or batch verifier, and where tests can plug
//! in a verifier that answers from a table.
//!
//! ## Threshold pairing policy
//!
//! [`verify_threshold`] does not assume signatures arrive in key order. Every
//! supplied signature is tried against the keys that have not been claimed
//! yet, and the first key it verifies under is claimed. Verification succeeds
//! as soon as `m` distinct keys are claimed. Extra or garbage signatures
//! beyond the first `m` matches are ignored; a key can never be counted
//! twice.

use super::keys::{Keypair, PublicKey, Signature};

/// Signature verification primitives consumed by the authorization checker.
///
/// Implementations must be pure: the same inputs always give the same answer.
pub trait SignatureVerifier {
    /// Verify one signature by one key over `message`.
    fn verify_single(&self, public_key: &PublicKey, message: &[u8], signature: &Signature)
        -> bool;

    /// Verify that at least `m` of `signatures` are valid over `message`,
    /// each by a distinct key in `public_keys`.
    fn verify_threshold(
        &self,
        message: &[u8],
        public_keys: &[PublicKey],
        m: usize,
        signatures: &[Signature],
    ) -> bool;
}

/// The production verifier: strict Ed25519 via ed25519-dalek.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify_single(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        signature: &Signature,
    ) -> bool {
        verify(public_key, message, signature)
    }

    fn verify_threshold(
        &self,
        message: &[u8],
        public_keys: &[PublicKey],
        m: usize,
        signatures: &[Signature],
    ) -> bool {
        verify_threshold(message, public_keys, m, signatures)
    }
}

/// Sign a message using a keypair.
///
/// # Example
///
/// ```
/// use warden_protocol::crypto::{sign, verify, Keypair};
///
/// let keypair = Keypair::generate();
/// let signature = sign(&keypair, b"tx hash");
/// assert!(verify(&keypair.public_key(), b"tx hash", &signature));
/// ```
pub fn sign(keypair: &Keypair, message: &[u8]) -> Signature {
    keypair.sign(message)
}

/// Verify an Ed25519 signature against a public key and message.
///
/// "Invalid signature", "invalid key" and "wrong length" all come back as
/// `false`.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    public_key.verify(message, signature)
}

/// M-of-N verification. See the module docs for the pairing policy.
///
/// Returns `false` when `m` is zero, exceeds the number of keys, or exceeds
/// the number of signatures.
pub fn verify_threshold(
    message: &[u8],
    public_keys: &[PublicKey],
    m: usize,
    signatures: &[Signature],
) -> bool {
    if m == 0 || m > public_keys.len() || signatures.len() < m {
        return false;
    }

    let mut claimed = vec![false; public_keys.len()];
    let mut matched = 0usize;

    for signature in signatures {
        let hit = (0..public_keys.len())
            .find(|&j| !claimed[j] && public_keys[j].verify(message, signature));

        if let Some(j) = hit {
            claimed[j] = true;
            matched += 1;
            if matched == m {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: u8) -> Vec<Keypair> {
        (1..=n).map(|i| Keypair::from_seed(&[i; 32])).collect()
    }

    fn pubs(kps: &[Keypair]) -> Vec<PublicKey> {
        kps.iter().map(Keypair::public_key).collect()
    }

    #[test]
    fn test_sign_and_verify() {
        let kp = Keypair::generate();
        let sig = sign(&kp, b"hello, world");
        assert!(verify(&kp.public_key(), b"hello, world", &sig));
    }

    #[test]
    fn test_wrong_key_fails() {
        let kps = keys(2);
        let sig = sign(&kps[0], b"test message");
        assert!(!verify(&kps[1].public_key(), b"test message", &sig));
    }

    #[test]
    fn test_threshold_two_of_three() {
        let kps = keys(3);
        let msg = b"two of three";
        let sigs = vec![kps[0].sign(msg), kps[2].sign(msg)];
        assert!(verify_threshold(msg, &pubs(&kps), 2, &sigs));
    }

    #[test]
    fn test_threshold_signature_order_does_not_matter() {
        let kps = keys(3);
        let msg = b"any order";
        let sigs = vec![kps[2].sign(msg), kps[0].sign(msg)];
        assert!(verify_threshold(msg, &pubs(&kps), 2, &sigs));
    }

    #[test]
    fn test_threshold_one_valid_is_not_enough() {
        let kps = keys(3);
        let outsider = Keypair::from_seed(&[99; 32]);
        let msg = b"one of three";
        let sigs = vec![kps[1].sign(msg), outsider.sign(msg)];
        assert!(!verify_threshold(msg, &pubs(&kps), 2, &sigs));
    }

    #[test]
    fn test_threshold_skips_garbage_among_extras() {
        let kps = keys(3);
        let msg = b"extras";
        let sigs = vec![
            Signature::from_bytes(vec![0u8; 12]),
            kps[0].sign(msg),
            kps[1].sign(msg),
        ];
        assert!(verify_threshold(msg, &pubs(&kps), 2, &sigs));
    }

    #[test]
    fn test_threshold_same_signature_twice_counts_once() {
        let kps = keys(3);
        let msg = b"replayed";
        let sig = kps[0].sign(msg);
        let sigs = vec![sig.clone(), sig];
        assert!(!verify_threshold(msg, &pubs(&kps), 2, &sigs));
    }

    #[test]
    fn test_threshold_rejects_degenerate_parameters() {
        let kps = keys(2);
        let msg = b"degenerate";
        let sigs = vec![kps[0].sign(msg), kps[1].sign(msg)];
        assert!(!verify_threshold(msg, &pubs(&kps), 0, &sigs));
        assert!(!verify_threshold(msg, &pubs(&kps), 3, &sigs));
        assert!(!verify_threshold(msg, &pubs(&kps), 2, &sigs[..1]));
    }

    #[test]
    fn test_ed25519_verifier_delegates() {
        let kps = keys(2);
        let msg = b"delegation";
        let v = Ed25519Verifier;
        assert!(v.verify_single(&kps[0].public_key(), msg, &kps[0].sign(msg)));
        let sigs = vec![kps[1].sign(msg), kps[0].sign(msg)];
        assert!(v.verify_threshold(msg, &pubs(&kps), 2, &sigs));
    }
}
