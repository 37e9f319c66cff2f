//! # Crypto Suite Benchmarks
//!
//! Conditions:
//! - Both suite curves (P-256/SHA2, P-384/SHA3)
//! - Message sizes from a single hash block to 64 KiB
//! - Import through both PEM paths (PKCS#8 scalar, SPKI)
//! - Adversarial high-S and garbage signatures on the verify path

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use qc_crypto_suite::{CryptoSuite, CryptoSuiteApi, CryptoSuiteConfig, EcdsaSignature};
use rand::Rng;
use std::time::Duration;

fn suites() -> Vec<(&'static str, CryptoSuite)> {
    let p256 = CryptoSuiteConfig::default();
    let p384 = CryptoSuiteConfig::default()
        .with_key_size(384)
        .with_hash_algorithm("SHA3");

    vec![
        ("p256-sha2", CryptoSuite::new(p256).expect("valid config")),
        ("p384-sha3", CryptoSuite::new(p384).expect("valid config")),
    ]
}

/// Generate random message
fn generate_message(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

pub fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto-suite-hash");

    for (name, suite) in suites() {
        for size in [32usize, 1024, 64 * 1024] {
            let message = generate_message(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &message, |b, message| {
                b.iter(|| black_box(suite.hash(message)))
            });
        }
    }

    group.finish();
}

pub fn bench_sign_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto-suite-signatures");
    group.measurement_time(Duration::from_secs(10));

    for (name, suite) in suites() {
        let key = suite.generate_ephemeral_key().expect("key generation");
        let message = generate_message(256);
        let digest = suite.hash(&message);
        let signature = suite.sign(&key, &digest).expect("sign");

        group.bench_function(BenchmarkId::new("sign", name), |b| {
            b.iter(|| black_box(suite.sign(&key, &digest)))
        });

        group.bench_function(BenchmarkId::new("verify", name), |b| {
            b.iter(|| black_box(suite.verify(&key, &signature, &message)))
        });

        // Rejected before any curve arithmetic
        let decoded = EcdsaSignature::from_der(&signature).expect("decode");
        let high_s = EcdsaSignature::new(decoded.r, &suite.curve().params().order - &decoded.s)
            .to_der()
            .expect("encode");
        group.bench_function(BenchmarkId::new("verify_high_s", name), |b| {
            b.iter(|| black_box(suite.verify(&key, &high_s, &message)))
        });

        let garbage = generate_message(72);
        group.bench_function(BenchmarkId::new("verify_garbage", name), |b| {
            b.iter(|| black_box(suite.verify(&key, &garbage, &message)))
        });
    }

    group.finish();
}

pub fn bench_key_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto-suite-keys");

    for (name, suite) in suites() {
        group.bench_function(BenchmarkId::new("generate_ephemeral", name), |b| {
            b.iter(|| black_box(suite.generate_ephemeral_key()))
        });

        let key = suite.generate_ephemeral_key().expect("key generation");
        let private_pem = key.to_pem().expect("export");
        let public_pem = key
            .public_key()
            .expect("public projection")
            .to_pem()
            .expect("export");

        group.bench_function(BenchmarkId::new("import_pkcs8", name), |b| {
            b.iter(|| black_box(suite.import_ephemeral_key(private_pem.as_bytes())))
        });

        group.bench_function(BenchmarkId::new("import_spki", name), |b| {
            b.iter(|| black_box(suite.import_ephemeral_key(public_pem.as_bytes())))
        });

        group.bench_function(BenchmarkId::new("export_pkcs8", name), |b| {
            b.iter(|| black_box(key.to_pem()))
        });
    }

    group.finish();
}
