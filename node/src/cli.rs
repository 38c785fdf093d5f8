//! # CLI Interface
//!
//! Defines the command-line argument structure for `warden-node` using
//! `clap` derive. Supports five subcommands: `validate`, `keygen`, `sign`,
//! `address`, and `version`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Warden transaction validator.
///
/// Checks that every fee payer of a transaction is backed by a valid
/// signature entry and that its payload is of an admissible kind.
#[derive(Parser, Debug)]
#[command(
    name = "warden-node",
    about = "Warden transaction validator",
    version,
    propagate_version = true
)]
pub struct WardenCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the Warden binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one transaction or a JSON array of transactions.
    Validate(ValidateArgs),
    /// Generate a fresh Ed25519 keypair and print its address.
    Keygen,
    /// Build and sign a sample transaction paid for by the key's address.
    Sign(SignArgs),
    /// Derive the address that a fee payer must name for a set of keys.
    Address(AddressArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// JSON file holding a transaction or an array of transactions.
    pub file: PathBuf,

    /// Path to a JSON validator configuration.
    ///
    /// When omitted, protocol defaults apply.
    #[arg(long, short = 'c', env = "WARDEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit JSON log lines instead of human-readable output.
    #[arg(long, env = "WARDEN_JSON_LOGS")]
    pub json_logs: bool,
}

/// Arguments for the `sign` subcommand.
#[derive(Parser, Debug)]
pub struct SignArgs {
    /// Hex-encoded Ed25519 secret key.
    #[arg(long, env = "WARDEN_SIGNING_KEY")]
    pub key: String,

    /// Payload kind of the sample transaction.
    #[arg(long, value_enum, default_value_t = PayloadArg::Invoke)]
    pub kind: PayloadArg,

    /// Transaction nonce.
    #[arg(long, default_value_t = 1)]
    pub nonce: u32,

    /// Fee amount charged to the signer's address.
    #[arg(long, default_value_t = 100)]
    pub fee: u64,

    /// Write the signed transaction here instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the `address` subcommand.
#[derive(Parser, Debug)]
pub struct AddressArgs {
    /// Hex-encoded Ed25519 public keys.
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Signatures required (`M`). Needed whenever more than one key is given.
    #[arg(long, short = 'm')]
    pub threshold: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadArg {
    Deploy,
    Invoke,
    Bookkeeping,
}
