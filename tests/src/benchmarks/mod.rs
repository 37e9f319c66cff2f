//! # Crypto Suite Benchmarks

pub mod crypto_suite;
