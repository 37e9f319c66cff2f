//! # Inbound Ports (Driving Ports / API)
//!
//! The crypto suite API as seen by client SDK code.

use crate::domain::errors::CryptoError;
use crate::domain::keys::{KeyMaterial, KeyOptions};
use async_trait::async_trait;

/// Primary crypto suite API.
///
/// Key store interactions are the only suspension points; everything else is
/// synchronous and CPU-bound. Implementations must be thread-safe.
#[async_trait]
pub trait CryptoSuiteApi: Send + Sync {
    // =========================================================================
    // Key lifecycle
    // =========================================================================

    /// Generate a new key pair on the suite's curve.
    ///
    /// Unless `opts.ephemeral`, the key is persisted and the call only
    /// succeeds once the key store has accepted it.
    async fn generate_key(&self, opts: KeyOptions) -> Result<KeyMaterial, CryptoError>;

    /// Import a key from a PEM document.
    async fn import_key(&self, pem: &[u8], opts: KeyOptions) -> Result<KeyMaterial, CryptoError>;

    /// Fetch a key from the bound key store by subject key identifier.
    async fn get_key(&self, ski: &str) -> Result<Option<KeyMaterial>, CryptoError>;

    // =========================================================================
    // Hashing and signatures
    // =========================================================================

    /// Hash with the configured digest. Output length is `key_size / 8`.
    fn hash(&self, message: &[u8]) -> Vec<u8>;

    /// Sign a digest. The DER signature is always in low-S form.
    fn sign(&self, key: &KeyMaterial, digest: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verify a DER signature over `message`.
    ///
    /// Undecodable or high-S signatures yield `Ok(false)`.
    fn verify(
        &self,
        key: &KeyMaterial,
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool, CryptoError>;

    // =========================================================================
    // Unsupported operations
    // =========================================================================

    fn derive_key(&self, key: &KeyMaterial) -> Result<KeyMaterial, CryptoError>;

    fn encrypt(&self, key: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;

    fn decrypt(&self, key: &KeyMaterial, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError>;
}
