//! # Protocol Configuration & Constants
//!
//! Every magic number Warden cares about lives here. If you're hardcoding a
//! limit somewhere else, move it here first.
//!
//! The constants are consensus-relevant: two validators that disagree on
//! [`MAX_MULTISIG_KEYS`] will disagree on which transactions are valid.
//! [`ValidatorConfig`] exists so that test networks can tighten the limits
//! without a recompile, not so that mainnet operators can improvise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Protocol Version
// ---------------------------------------------------------------------------

/// The full version string of the validation rule set.
pub const PROTOCOL_VERSION: &str = "0.1.0";

/// Transaction format version produced by the builder.
pub const TX_VERSION: u8 = 0;

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 - used for every signature entry on a transaction.
pub const SIGNING_ALGORITHM: &str = "Ed25519";

/// Public (verifying) key length in bytes.
pub const VERIFYING_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Anything else fails verification.
pub const SIGNATURE_LENGTH: usize = 64;

/// Hash output length in bytes. Transaction hashes and addresses are both
/// 32-byte digests.
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Address length in bytes.
pub const ADDRESS_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Authorization Limits
// ---------------------------------------------------------------------------

/// Maximum number of public keys in a single signature entry.
///
/// Threshold verification is O(signatures × keys) in the worst case, so
/// the key count is what bounds validation time per entry.
pub const MAX_MULTISIG_KEYS: usize = 24;

// ---------------------------------------------------------------------------
// Validator settings
// ---------------------------------------------------------------------------

/// Rejected validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_multisig_keys {requested} exceeds the protocol limit of {limit}")]
    KeyLimitAboveProtocol { requested: usize, limit: usize },
}

/// Runtime settings for the transaction validator.
///
/// Deserializes from JSON; missing fields fall back to the protocol
/// defaults. Values may only tighten the protocol limits, so a document
/// asking for more than [`MAX_MULTISIG_KEYS`] fails to load.
///
/// ```json
/// { "max_multisig_keys": 24 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawValidatorConfig")]
pub struct ValidatorConfig {
    /// Upper bound on `N` for any signature entry. Anything above
    /// [`MAX_MULTISIG_KEYS`] is ignored; see
    /// [`ValidatorConfig::effective_max_multisig_keys`].
    pub max_multisig_keys: usize,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawValidatorConfig {
    max_multisig_keys: usize,
}

impl Default for RawValidatorConfig {
    fn default() -> Self {
        Self {
            max_multisig_keys: MAX_MULTISIG_KEYS,
        }
    }
}

impl TryFrom<RawValidatorConfig> for ValidatorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawValidatorConfig) -> Result<Self, Self::Error> {
        if raw.max_multisig_keys > MAX_MULTISIG_KEYS {
            return Err(ConfigError::KeyLimitAboveProtocol {
                requested: raw.max_multisig_keys,
                limit: MAX_MULTISIG_KEYS,
            });
        }
        Ok(Self {
            max_multisig_keys: raw.max_multisig_keys,
        })
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_multisig_keys: MAX_MULTISIG_KEYS,
        }
    }
}

impl ValidatorConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The key limit actually enforced: the configured value, capped at
    /// [`MAX_MULTISIG_KEYS`] for configs built in code.
    pub fn effective_max_multisig_keys(&self) -> usize {
        self.max_multisig_keys.min(MAX_MULTISIG_KEYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_protocol_limit() {
        assert_eq!(ValidatorConfig::default().max_multisig_keys, 24);
    }

    #[test]
    fn test_config_from_json() {
        let cfg = ValidatorConfig::from_json(r#"{ "max_multisig_keys": 5 }"#).unwrap();
        assert_eq!(cfg.max_multisig_keys, 5);
    }

    #[test]
    fn test_config_missing_fields_default() {
        let cfg = ValidatorConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ValidatorConfig::default());
    }

    #[test]
    fn test_config_cannot_exceed_protocol_limit() {
        let err = ValidatorConfig::from_json(r#"{ "max_multisig_keys": 100 }"#).unwrap_err();
        assert!(err.to_string().contains("exceeds the protocol limit of 24"));
        assert!(ValidatorConfig::from_json(r#"{ "max_multisig_keys": 24 }"#).is_ok());
    }

    #[test]
    fn test_effective_limit_is_capped() {
        let loose = ValidatorConfig {
            max_multisig_keys: 100,
        };
        let strict = ValidatorConfig {
            max_multisig_keys: 3,
        };
        assert_eq!(loose.effective_max_multisig_keys(), MAX_MULTISIG_KEYS);
        assert_eq!(strict.effective_max_multisig_keys(), 3);
    }
}
