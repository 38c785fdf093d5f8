//! Walkthrough of Warden transaction validation.
//!
//! Builds a handful of transactions, some valid and some not, and shows
//! the verdict the validator reaches for each. Output uses ANSI colors.
//!
//! Run with:
//!   cargo run --example demo --release

use std::time::Instant;

use warden_protocol::crypto::{Keypair, Signature};
use warden_protocol::identity::Address;
use warden_protocol::transaction::{
    sign_threshold, sign_transaction, Payload, Transaction, TransactionBuilder,
    TransactionValidator,
};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn section(num: u32, title: &str) {
    println!();
    println!("{BOLD}{CYAN}===[{YELLOW} Case {num} {CYAN}]======================================================{RESET}");
    println!("{BOLD}{WHITE}  {title}{RESET}");
}

fn info(label: &str, value: &str) {
    println!("{WHITE}  {BOLD}{label}:{RESET} {YELLOW}{value}{RESET}");
}

fn verdict(validator: &TransactionValidator, tx: &Transaction) {
    let start = Instant::now();
    let result = validator.validate(tx);
    let ms = start.elapsed().as_secs_f64() * 1000.0;

    info("tx hash", &tx.hash_hex());
    match result {
        Ok(()) => println!("{GREEN}  [ACCEPTED]{RESET} {DIM}({ms:.2} ms){RESET}"),
        Err(err) => println!("{RED}  [REJECTED]{RESET} {err} {DIM}({ms:.2} ms){RESET}"),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let validator = TransactionValidator::with_defaults();

    let alice = Keypair::generate();
    let alice_addr = Address::from_public_key(&alice.public_key());
    let board: Vec<Keypair> = (0..3).map(|_| Keypair::generate()).collect();
    let board_keys: Vec<_> = board.iter().map(Keypair::public_key).collect();
    let board_addr = Address::from_threshold_keys(&board_keys, 2);

    info("alice", &alice_addr.to_hex());
    info("board (2-of-3)", &board_addr.to_hex());

    section(1, "Alice invokes a contract and pays her own fee");
    let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x51]))
        .fee(alice_addr, 100)
        .build();
    sign_transaction(&mut tx, &alice);
    verdict(&validator, &tx);

    section(2, "Alice signs, but the fee is charged to the board");
    let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x51]))
        .fee(board_addr, 100)
        .build();
    sign_transaction(&mut tx, &alice);
    verdict(&validator, &tx);

    section(3, "Two board members co-sign a board-paid transaction");
    let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x52]))
        .fee(board_addr, 100)
        .build();
    sign_threshold(&mut tx, 2, board_keys.clone(), &[&board[2], &board[0]]);
    verdict(&validator, &tx);

    section(4, "One board member plus a forged signature");
    let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x52]))
        .fee(board_addr, 100)
        .build();
    sign_threshold(&mut tx, 2, board_keys, &[&board[1]]);
    tx.sigs[0].sig_data.push(Signature::from_bytes(vec![0; 64]));
    verdict(&validator, &tx);

    section(5, "Authorized, but the payload kind is not admitted");
    let unknown = Payload::other(0x80, vec![1, 2, 3]).expect("0x80 is not a known tag");
    let mut tx = TransactionBuilder::new(unknown).fee(alice_addr, 100).build();
    sign_transaction(&mut tx, &alice);
    verdict(&validator, &tx);

    println!();
}
