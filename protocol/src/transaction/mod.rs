//! # Transaction Module
//!
//! The transaction data model and the stateless checks a transaction must
//! pass before it is admitted to the pool.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        - Payload, PayloadKind, Fee, SignatureEntry
//! builder.rs      - Transaction and its canonical hash; TransactionBuilder
//! signing.rs      - Attaching single-key and threshold signature entries
//! verification.rs - Authorization checker (signatures, addresses, payers)
//! payload.rs      - Payload admissibility gate
//! validator.rs    - TransactionValidator: authorization, then payload
//! error.rs        - AuthError, PayloadError, ValidationError
//! ```
//!
//! ## Validation Order
//!
//! 1. **Structure** - each signature entry satisfies `1 ≤ M ≤ N ≤ 24` and
//!    carries at least `M` signatures.
//! 2. **Signatures** - single-key entries verify directly; threshold entries
//!    need `M` distinct keys to have signed the transaction hash.
//! 3. **Payers** - every fee payer is an address derived from a verified
//!    entry.
//! 4. **Payload** - the payload is `DeployCode`, `InvokeCode`, or
//!    `Bookkeeping`.
//!
//! The first failing step ends validation.

pub mod builder;
pub mod error;
pub mod payload;
pub mod signing;
pub mod types;
pub mod validator;
pub mod verification;

pub use builder::{Transaction, TransactionBuilder};
pub use error::{AuthError, MalformedReason, PayloadError, ValidationError};
pub use payload::check_payload;
pub use signing::{sign_threshold, sign_transaction};
pub use types::{
    Bookkeeping, DeployCode, Fee, InvokeCode, Payload, PayloadKind, SignatureEntry, UnknownPayload,
};
pub use validator::{validate_transaction, TransactionValidator};
pub use verification::check_authorization;
