// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Warden Validator CLI
//!
//! Entry point for the `warden-node` binary. Parses CLI arguments,
//! initializes logging, and runs one of five subcommands:
//!
//! - `validate` - check transactions read from a JSON file
//! - `keygen`   - generate an Ed25519 keypair and its address
//! - `sign`     - build and sign a sample transaction
//! - `address`  - derive the payer address for one key or an M-of-N set
//! - `version`  - print build version information

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::Path;

use warden_protocol::config::{ValidatorConfig, MAX_MULTISIG_KEYS};
use warden_protocol::crypto::{Ed25519Verifier, Keypair, PublicKey};
use warden_protocol::identity::Address;
use warden_protocol::transaction::{
    sign_transaction, Bookkeeping, DeployCode, Payload, Transaction, TransactionBuilder,
    TransactionValidator,
};

use cli::{Commands, PayloadArg, WardenCli};
use logging::LogFormat;

const DEFAULT_LOG_LEVEL: &str = "warden_node=info,warden_protocol=info";

fn main() -> Result<()> {
    let cli = WardenCli::parse();

    match cli.command {
        Commands::Validate(args) => validate_file(args),
        Commands::Keygen => {
            keygen();
            Ok(())
        }
        Commands::Sign(args) => sign_sample(args),
        Commands::Address(args) => {
            println!("{}", derive_address(&args.keys, args.threshold)?);
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Validates every transaction in `args.file`, printing one verdict per
/// line. Fails if any transaction is rejected.
fn validate_file(args: cli::ValidateArgs) -> Result<()> {
    logging::init_logging(DEFAULT_LOG_LEVEL, LogFormat::from_json_flag(args.json_logs));

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ValidatorConfig::default(),
    };
    tracing::info!(
        file = %args.file.display(),
        max_multisig_keys = config.effective_max_multisig_keys(),
        "validating transactions"
    );

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let txs = parse_transactions(&raw)
        .with_context(|| format!("failed to parse transactions in {}", args.file.display()))?;

    let validator = TransactionValidator::new(Ed25519Verifier, config);
    let results = validator.validate_batch(&txs);

    let mut rejected = 0usize;
    for (tx, result) in txs.iter().zip(&results) {
        match result {
            Ok(()) => println!("{}  ok", tx.hash_hex()),
            Err(err) => {
                rejected += 1;
                let hint = if err.is_retryable() { " (retryable)" } else { "" };
                println!("{}  rejected: {}{}", tx.hash_hex(), err, hint);
            }
        }
    }

    tracing::info!(
        total = txs.len(),
        accepted = txs.len() - rejected,
        rejected,
        "validation finished"
    );

    if rejected > 0 {
        bail!("{} of {} transactions rejected", rejected, txs.len());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<ValidatorConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    ValidatorConfig::from_json(&raw)
        .with_context(|| format!("invalid validator config {}", path.display()))
}

/// A file holds either one transaction object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum TransactionFile {
    Many(Vec<Transaction>),
    One(Box<Transaction>),
}

fn parse_transactions(raw: &str) -> Result<Vec<Transaction>> {
    let parsed: TransactionFile = serde_json::from_str(raw)?;
    Ok(match parsed {
        TransactionFile::Many(txs) => txs,
        TransactionFile::One(tx) => vec![*tx],
    })
}

/// Prints a fresh keypair and its single-key address.
fn keygen() {
    let keypair = Keypair::generate();
    let public_key = keypair.public_key();

    println!("secret key : {}", keypair.secret_key_hex());
    println!("public key : {}", public_key.to_hex());
    println!("address    : {}", Address::from_public_key(&public_key));
}

/// Builds a transaction paid for by the key's own address, signs it, and
/// writes it as JSON.
fn sign_sample(args: cli::SignArgs) -> Result<()> {
    logging::init_logging(DEFAULT_LOG_LEVEL, LogFormat::Pretty);

    let keypair = Keypair::from_hex(&args.key).context("failed to load signing key")?;
    let tx = build_signed(&keypair, args.kind, args.nonce, args.fee);
    let json = serde_json::to_string_pretty(&tx)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(tx_hash = %tx.hash_hex(), path = %path.display(), "signed transaction written");
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn build_signed(keypair: &Keypair, kind: PayloadArg, nonce: u32, fee: u64) -> Transaction {
    let payload = match kind {
        PayloadArg::Deploy => Payload::DeployCode(DeployCode {
            code: vec![0x00, 0xc5, 0x6b],
            name: "sample".into(),
            version: "1.0".into(),
            author: "warden".into(),
            description: "sample contract".into(),
        }),
        PayloadArg::Invoke => Payload::invoke(vec![0x51, 0xc1]),
        PayloadArg::Bookkeeping => Payload::Bookkeeping(Bookkeeping {
            nonce: u64::from(nonce),
        }),
    };

    let mut tx = TransactionBuilder::new(payload)
        .nonce(nonce)
        .fee(Address::from_public_key(&keypair.public_key()), fee)
        .build();
    sign_transaction(&mut tx, keypair);
    tx
}

/// Parses `keys` strictly and derives the address an entry over them
/// authorizes. A lone key yields a single-key address.
fn derive_address(keys: &[String], threshold: Option<usize>) -> Result<Address> {
    let keys = keys
        .iter()
        .map(|k| PublicKey::from_hex(k).with_context(|| format!("invalid public key {}", k)))
        .collect::<Result<Vec<_>>>()?;

    if keys.len() > MAX_MULTISIG_KEYS {
        bail!("{} keys exceeds the limit of {}", keys.len(), MAX_MULTISIG_KEYS);
    }

    match (keys.as_slice(), threshold) {
        ([single], None | Some(1)) => Ok(Address::from_public_key(single)),
        (_, Some(m)) if (1..=keys.len()).contains(&m) => Ok(Address::from_threshold_keys(&keys, m)),
        (_, Some(m)) => bail!("threshold {} must be between 1 and {}", m, keys.len()),
        (_, None) => bail!("--threshold is required for {} keys", keys.len()),
    }
}

/// Prints version information to stdout.
fn print_version() {
    println!("warden-node {}", env!("CARGO_PKG_VERSION"));
    println!("protocol    {}", warden_protocol::config::PROTOCOL_VERSION);
    println!("signatures  {}", warden_protocol::config::SIGNING_ALGORITHM);
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_protocol::transaction::validate_transaction;

    fn keypair() -> Keypair {
        Keypair::from_seed(&[9; 32])
    }

    #[test]
    fn sample_transactions_validate() {
        let kp = keypair();
        for kind in [PayloadArg::Deploy, PayloadArg::Invoke, PayloadArg::Bookkeeping] {
            let tx = build_signed(&kp, kind, 3, 50);
            assert_eq!(validate_transaction(&tx), Ok(()));
        }
    }

    #[test]
    fn derived_addresses_match_library_derivation() {
        let (a, b) = (Keypair::from_seed(&[1; 32]), Keypair::from_seed(&[2; 32]));
        let (pa, pb) = (a.public_key(), b.public_key());
        let hexes = vec![pa.to_hex(), pb.to_hex()];

        assert_eq!(
            derive_address(&hexes[..1], None).unwrap(),
            Address::from_public_key(&pa)
        );
        assert_eq!(
            derive_address(&hexes, Some(2)).unwrap(),
            Address::from_threshold_keys(&[pa, pb], 2)
        );
    }

    #[test]
    fn address_rejects_bad_input() {
        let hex = keypair().public_key().to_hex();
        assert!(derive_address(&["zz".to_string()], None).is_err());
        assert!(derive_address(&[hex[..62].to_string()], None).is_err());
        assert!(derive_address(&[hex.clone(), hex.clone()], None).is_err());
        assert!(derive_address(&[hex.clone(), hex.clone()], Some(3)).is_err());
        assert!(derive_address(&vec![hex; 25], Some(1)).is_err());
    }

    #[test]
    fn parses_single_object_and_array() {
        let tx = build_signed(&keypair(), PayloadArg::Invoke, 1, 10);
        let one = serde_json::to_string(&tx).unwrap();
        let many = serde_json::to_string(&vec![tx.clone(), tx.clone()]).unwrap();

        assert_eq!(parse_transactions(&one).unwrap(), vec![tx.clone()]);
        assert_eq!(parse_transactions(&many).unwrap().len(), 2);
    }

    #[test]
    fn rejects_garbage_input() {
        assert!(parse_transactions("{\"not\": \"a transaction\"}").is_err());
        assert!(parse_transactions("[1, 2]").is_err());
    }
}
