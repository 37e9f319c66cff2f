//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the crypto suite depends on but does not own:
//! - [`KeyStore`]: asynchronous key persistence addressed by SKI
//! - [`EcEngine`]: elliptic-curve point arithmetic and raw ECDSA / SM2DSA

use crate::domain::curves::CurveId;
use crate::domain::keys::KeyMaterial;
use num_bigint::BigUint;
use thiserror::Error;
use zeroize::Zeroizing;

// =============================================================================
// KEY STORE
// =============================================================================

/// Error from key store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyStoreError {
    /// The store cannot be reached
    #[error("Key store unavailable: {0}")]
    Unavailable(String),

    /// The key cannot be addressed (no subject key identifier)
    #[error("Key has no subject key identifier")]
    MissingIdentifier,

    /// Backend-specific failure
    #[error("Key store backend error: {0}")]
    Backend(String),
}

/// Persistent key storage addressed by subject key identifier.
///
/// Implementations own cancellation, timeouts and retries; the suite imposes
/// none of its own.
#[async_trait::async_trait]
pub trait KeyStore: Send + Sync {
    /// Fetch a key by subject key identifier.
    ///
    /// Returns `Ok(None)` when no key is stored under `ski`.
    async fn get_key(&self, ski: &str) -> Result<Option<KeyMaterial>, KeyStoreError>;

    /// Persist a copy of `key`.
    async fn put_key(&self, key: &KeyMaterial) -> Result<(), KeyStoreError>;
}

// =============================================================================
// EC ENGINE
// =============================================================================

/// Error from the EC engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Scalar is zero, out of range or of the wrong length
    #[error("Invalid private scalar for {0}")]
    InvalidScalar(CurveId),

    /// Result of a point multiplication is the identity
    #[error("Point multiplication produced the identity point")]
    IdentityPoint,

    /// The raw signing primitive failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Affine point coordinates as big-endian integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPoint {
    pub x: BigUint,
    pub y: BigUint,
}

/// Elliptic-curve math engine.
///
/// All operations are pure: no side effects and no retained state.
pub trait EcEngine: Send + Sync {
    /// Generate a fresh private scalar (big-endian, curve byte length).
    fn generate_secret(&self, curve: CurveId) -> Result<Zeroizing<Vec<u8>>, EngineError>;

    /// Compute `scalar * G`.
    fn multiply_generator(&self, curve: CurveId, scalar: &[u8]) -> Result<EcPoint, EngineError>;

    /// Whether a SEC1-encoded point lies on `curve` and is not the identity.
    fn is_on_curve(&self, curve: CurveId, public_point: &[u8]) -> bool;

    /// Sign a digest of any length, returning the raw `(r, s)` pair.
    ///
    /// ECDSA output is not normalized. Curves without an `n - s` twin
    /// must return `s <= n/2` themselves.
    fn raw_sign(
        &self,
        curve: CurveId,
        digest: &[u8],
        scalar: &[u8],
    ) -> Result<(BigUint, BigUint), EngineError>;

    /// Verify `(r, s)` over a digest against a SEC1-encoded public point.
    fn raw_verify(
        &self,
        curve: CurveId,
        digest: &[u8],
        r: &BigUint,
        s: &BigUint,
        public_point: &[u8],
    ) -> bool;
}
