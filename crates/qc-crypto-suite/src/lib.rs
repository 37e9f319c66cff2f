//! # Crypto Suite
//!
//! Pluggable elliptic-curve crypto suite for Quantum-Chain client SDKs:
//! key generation and import, hashing, and ECDSA signing/verification over
//! secp256r1 and secp384r1. secp256k1 (ECDSA) and sm2p256v1 (SM2DSA) keys
//! are accepted on import and sign and verify like suite keys.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): curve registry, hash selection, key
//!   material, PEM codec, signature malleability guard
//! - **Ports Layer** (`ports/`): the suite API and the key store / EC engine
//!   it depends on
//! - **Adapters Layer** (`adapters/`): RustCrypto engine, in-memory key store
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//!
//! ## Security Notes
//!
//! - **Low-S only**: `sign` always emits `s <= n/2`; `verify` returns `false`
//!   for the high form even though the ECDSA equation accepts it.
//! - **No secrets in logs**: `KeyMaterial`'s `Debug` output omits the private
//!   scalar, and scalars are zeroized on drop.
//!
//! ## Example
//!
//! ```no_run
//! use qc_crypto_suite::{CryptoSuite, CryptoSuiteApi, CryptoSuiteConfig};
//!
//! # fn main() -> Result<(), qc_crypto_suite::CryptoError> {
//! let suite = CryptoSuite::new(CryptoSuiteConfig::default())?;
//! let key = suite.generate_ephemeral_key()?;
//!
//! let digest = suite.hash(b"abc");
//! let signature = suite.sign(&key, &digest)?;
//! assert!(suite.verify(&key, &signature, b"abc")?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{InMemoryKeyStore, RustCryptoEngine};
pub use config::CryptoSuiteConfig;
pub use domain::curves::{CurveId, CurveParams, CURVE_REGISTRY};
pub use domain::errors::{CryptoError, ErrorKind};
pub use domain::hashing::HashAlgorithm;
pub use domain::keys::{KeyKind, KeyMaterial, KeyOptions, KeyType};
pub use domain::signature::EcdsaSignature;
pub use ports::inbound::CryptoSuiteApi;
pub use ports::outbound::{EcEngine, EcPoint, EngineError, KeyStore, KeyStoreError};
pub use service::CryptoSuite;
