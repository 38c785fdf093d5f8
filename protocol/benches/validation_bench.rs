// Validation benchmarks for the Warden protocol.
//
// Covers single-key Ed25519 verification, full single-signer transaction
// validation, and threshold entries at various key counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use warden_protocol::crypto::{sign, verify, Keypair, PublicKey};
use warden_protocol::identity::Address;
use warden_protocol::transaction::{
    sign_threshold, sign_transaction, Payload, TransactionBuilder, TransactionValidator,
};

fn bench_verify_signature(c: &mut Criterion) {
    let keypair = Keypair::generate();
    let message = b"32 bytes of transaction hash....";
    let signature = sign(&keypair, message);
    let public_key = keypair.public_key();

    c.bench_function("ed25519/verify_signature", |b| {
        b.iter(|| verify(&public_key, message, &signature));
    });
}

fn bench_validate_single_signer(c: &mut Criterion) {
    let keypair = Keypair::generate();
    let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x51; 64]))
        .fee(Address::from_public_key(&keypair.public_key()), 100)
        .nonce(42)
        .build();
    sign_transaction(&mut tx, &keypair);
    let validator = TransactionValidator::with_defaults();

    c.bench_function("validate/single_signer", |b| {
        b.iter(|| validator.validate(&tx).unwrap());
    });
}

fn bench_validate_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate/threshold");
    let validator = TransactionValidator::with_defaults();

    for n in [3usize, 8, 16, 24] {
        let signers: Vec<Keypair> = (0..n).map(|_| Keypair::generate()).collect();
        let keys: Vec<PublicKey> = signers.iter().map(Keypair::public_key).collect();
        let m = n / 2 + 1;
        // Sign with the last m keys: the worst case for first-fit pairing.
        let chosen: Vec<&Keypair> = signers.iter().rev().take(m).collect();

        let mut tx = TransactionBuilder::new(Payload::invoke(vec![0x51]))
            .fee(Address::from_threshold_keys(&keys, m), 100)
            .build();
        sign_threshold(&mut tx, m as u16, keys, &chosen);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &tx, |b, tx| {
            b.iter(|| validator.validate(tx).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_verify_signature,
    bench_validate_single_signer,
    bench_validate_threshold,
);
criterion_main!(benches);
