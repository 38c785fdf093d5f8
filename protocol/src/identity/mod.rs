//! # Identity Module
//!
//! Who is allowed to authorize a transaction. Every signature entry that
//! verifies yields exactly one [`Address`]: a single-key address for a
//! one-key entry, a threshold address for an M-of-N entry. Fee payers are
//! named by address, and a payer is only accepted if one of those derived
//! addresses matches.

pub mod address;

pub use address::Address;
