//! # Integration Tests
//!
//! Key lifecycle flows through the crypto suite, a key store and the EC
//! engine.

pub mod crypto_suite_flows;
