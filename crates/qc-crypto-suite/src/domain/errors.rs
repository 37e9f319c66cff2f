//! # Crypto Suite Errors
//!
//! Error types for key lifecycle, hashing and signature operations.
//!
//! Configuration and parse failures are always surfaced as errors. Signature
//! failures inside `verify` are the exception: they collapse to `Ok(false)`
//! in the service layer, see [`crate::service::CryptoSuite::verify`].

use crate::ports::outbound::{EngineError, KeyStoreError};
use thiserror::Error;

/// Coarse classification of a [`CryptoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad key size, unsupported hash/size pair, unbound key store
    Configuration,
    /// Malformed or unsupported PEM/DER key content
    KeyParse,
    /// Structurally invalid or non-canonical signature
    Signature,
    /// Failure reported by the key store collaborator
    Store,
    /// Failure reported by the EC engine collaborator
    Engine,
    /// Operation intentionally not provided by this suite
    NotImplemented,
    /// Missing key, message or signature
    InvalidArgument,
}

/// Errors that can occur in crypto suite operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key size is not one of the supported sizes (256, 384)
    #[error("Illegal key size: {0} - this crypto suite only supports key sizes 256 or 384")]
    InvalidKeySize(u32),

    /// The hash algorithm cannot produce a digest matching the key size
    #[error("Unsupported hash algorithm and key size pair: {algorithm}-{key_size}")]
    UnsupportedHashKeySizePair { algorithm: String, key_size: u32 },

    /// Curve name or OID not present in the curve registry
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// Persistence was requested but no key store is bound
    #[error("{operation} requires a key store to be bound")]
    KeyStoreRequired { operation: &'static str },

    /// PEM/DER content could not be parsed
    #[error("Failed to parse key from PEM: {0}")]
    KeyParse(String),

    /// PEM content parsed but is not an EC key or certificate
    #[error("Does not understand PEM contents other than EC private keys and certificates")]
    UnrecognizedKeyFormat,

    /// Key could not be encoded to PEM/DER
    #[error("Failed to encode key: {0}")]
    KeyEncode(String),

    /// DER signature is structurally invalid or has an absent component
    #[error("Failed to load the signature object from the bytes: {0}")]
    SignatureDecode(String),

    /// Signature S value is above half of the curve order
    #[error("Invalid S value in signature. Must be smaller than half of the order.")]
    MalleableSignature,

    /// No half order is registered for the curve
    #[error("Can not find the half order needed to calculate \"s\" value for immalleable signatures. Unsupported curve name: {0}")]
    UnknownCurveForMalleabilityCheck(String),

    /// Key store failure, passed through as reported by the store
    #[error(transparent)]
    Store(#[from] KeyStoreError),

    /// EC engine failure
    #[error("EC engine failure: {0}")]
    Engine(#[from] EngineError),

    /// Operation is not provided by this suite
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// No usable key was supplied
    #[error("A valid key is required to {0}")]
    MissingKey(&'static str),

    /// No signature was supplied
    #[error("A valid signature is required to verify")]
    MissingSignature,

    /// No message or digest was supplied
    #[error("A valid message is required to {0}")]
    MissingMessage(&'static str),
}

impl CryptoError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CryptoError::InvalidKeySize(_)
            | CryptoError::UnsupportedHashKeySizePair { .. }
            | CryptoError::UnsupportedCurve(_)
            | CryptoError::KeyStoreRequired { .. } => ErrorKind::Configuration,
            CryptoError::KeyParse(_)
            | CryptoError::UnrecognizedKeyFormat
            | CryptoError::KeyEncode(_) => ErrorKind::KeyParse,
            CryptoError::SignatureDecode(_)
            | CryptoError::MalleableSignature
            | CryptoError::UnknownCurveForMalleabilityCheck(_) => ErrorKind::Signature,
            CryptoError::Store(_) => ErrorKind::Store,
            CryptoError::Engine(_) => ErrorKind::Engine,
            CryptoError::NotImplemented(_) => ErrorKind::NotImplemented,
            CryptoError::MissingKey(_)
            | CryptoError::MissingSignature
            | CryptoError::MissingMessage(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl From<der::Error> for CryptoError {
    fn from(e: der::Error) -> Self {
        CryptoError::KeyParse(e.to_string())
    }
}
