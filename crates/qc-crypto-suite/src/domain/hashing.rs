//! # Hash Selector
//!
//! Maps a (hash algorithm, key size) pair to a digest function whose output
//! size matches the key size (RFC 5480 §4, recommended key size / digest
//! pairs).
//!
//! The compatibility table is fixed. `sm3-256` is served by SHA2-256 for
//! output-size compatibility with peers that negotiate the domestic digest.

use super::errors::CryptoError;
use sha2::{Digest, Sha256, Sha384};
use sha3::{Sha3_256, Sha3_384};

/// Concrete digest function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha2_256,
    Sha2_384,
    Sha3_256,
    Sha3_384,
}

impl HashAlgorithm {
    /// Digest output size in bytes.
    pub const fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha2_256 | HashAlgorithm::Sha3_256 => 32,
            HashAlgorithm::Sha2_384 | HashAlgorithm::Sha3_384 => 48,
        }
    }

    /// Hash a message (one-shot).
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha2_256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha2_384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha3_256 => Sha3_256::digest(data).to_vec(),
            HashAlgorithm::Sha3_384 => Sha3_384::digest(data).to_vec(),
        }
    }
}

/// Supported `<algorithm>-<key size>` pairs.
pub const COMPATIBILITY_TABLE: &[(&str, HashAlgorithm)] = &[
    ("sha2-256", HashAlgorithm::Sha2_256),
    ("sha2-384", HashAlgorithm::Sha2_384),
    ("sha3-256", HashAlgorithm::Sha3_256),
    ("sha3-384", HashAlgorithm::Sha3_384),
    ("sm3-256", HashAlgorithm::Sha2_256),
];

/// Select the digest function for an algorithm name and key size in bits.
pub fn select(algorithm: &str, key_size: u32) -> Result<HashAlgorithm, CryptoError> {
    let key = format!("{}-{}", algorithm.to_lowercase(), key_size);

    COMPATIBILITY_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, hash)| *hash)
        .ok_or_else(|| CryptoError::UnsupportedHashKeySizePair {
            algorithm: algorithm.to_string(),
            key_size,
        })
}

/// SHA-256 (one-shot). Used for subject key identifiers.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}
