// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Warden Protocol - Core Library
//!
//! Warden sits at the door of the transaction pool. Before anything gets
//! executed, ordered, or even looked at twice, it answers one question:
//! does this transaction carry sufficient, correctly-formed authorization,
//! and is its payload something we know how to handle?
//!
//! ## Architecture
//!
//! - **crypto** - Ed25519 keys, hashing, and the [`SignatureVerifier`]
//!   seam for single-key and threshold verification.
//! - **identity** - Address derivation from one key or an M-of-N key set.
//! - **transaction** - The transaction data model, the authorization
//!   checker, the payload gate, and the [`TransactionValidator`] that runs
//!   them in order.
//! - **config** - Protocol constants and validator settings.
//!
//! ## Design Philosophy
//!
//! 1. Stateless. Every check is a pure function of the transaction bytes.
//! 2. First failure wins, and the caller learns exactly which rule failed.
//! 3. An address is never trusted before the signature behind it verified.
//!
//! [`SignatureVerifier`]: crypto::SignatureVerifier
//! [`TransactionValidator`]: transaction::TransactionValidator

pub mod config;
pub mod crypto;
pub mod identity;
pub mod transaction;
