//! Crypto suite configuration.

use crate::domain::curves::CurveId;
use crate::domain::errors::CryptoError;
use crate::domain::hashing;
use serde::{Deserialize, Serialize};
use std::env;

/// Default key size in bits.
pub const DEFAULT_KEY_SIZE: u32 = 256;

/// Default hash algorithm family.
pub const DEFAULT_HASH_ALGORITHM: &str = "SHA2";

/// Key size and hash family for a [`CryptoSuite`](crate::CryptoSuite).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoSuiteConfig {
    /// Key size in bits (256 or 384)
    pub key_size: u32,

    /// Hash family name, case-insensitive (`SHA2`, `SHA3`, `SM3`)
    pub hash_algorithm: String,
}

impl Default for CryptoSuiteConfig {
    fn default() -> Self {
        Self {
            key_size: DEFAULT_KEY_SIZE,
            hash_algorithm: DEFAULT_HASH_ALGORITHM.to_string(),
        }
    }
}

impl CryptoSuiteConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_CRYPTO_KEY_SIZE`: Key size in bits (default: 256)
    /// - `QC_CRYPTO_HASH_ALGO`: Hash family (default: SHA2)
    ///
    /// An unparseable key size is kept as `0` so that [`validate`](Self::validate)
    /// reports it instead of silently using the default.
    pub fn from_env() -> Self {
        Self {
            key_size: env::var("QC_CRYPTO_KEY_SIZE")
                .map(|v| v.trim().parse().unwrap_or(0))
                .unwrap_or(DEFAULT_KEY_SIZE),

            hash_algorithm: env::var("QC_CRYPTO_HASH_ALGO")
                .unwrap_or_else(|_| DEFAULT_HASH_ALGORITHM.to_string()),
        }
    }

    pub fn with_key_size(mut self, key_size: u32) -> Self {
        self.key_size = key_size;
        self
    }

    pub fn with_hash_algorithm(mut self, hash_algorithm: impl Into<String>) -> Self {
        self.hash_algorithm = hash_algorithm.into();
        self
    }

    /// Hash family to use; empty names fall back to the default.
    pub fn effective_hash_algorithm(&self) -> &str {
        if self.hash_algorithm.trim().is_empty() {
            DEFAULT_HASH_ALGORITHM
        } else {
            &self.hash_algorithm
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CryptoError> {
        CurveId::for_key_size(self.key_size)?;
        hashing::select(self.effective_hash_algorithm(), self.key_size)?;
        Ok(())
    }
}
