//! Payload admissibility: does this node accept this kind of payload at all?
//!
//! Pure classification. The gate looks at which variant the payload is and
//! nothing else; field contents belong to execution.

use super::error::PayloadError;
use super::types::{Payload, PayloadKind};

/// Accepts `DeployCode`, `InvokeCode` and `Bookkeeping`; rejects everything
/// else with [`PayloadError::UnsupportedPayloadKind`].
pub fn check_payload(payload: &Payload) -> Result<(), PayloadError> {
    match payload {
        Payload::DeployCode(_) | Payload::InvokeCode(_) | Payload::Bookkeeping(_) => Ok(()),
        Payload::Other(unknown) => Err(PayloadError::UnsupportedPayloadKind(
            PayloadKind::Other(unknown.tag()),
        )),
    }
}
