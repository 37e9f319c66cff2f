//! # Crypto Suite Service
//!
//! Application service implementing [`CryptoSuiteApi`].
//!
//! ## Lifecycle
//!
//! ```text
//! CryptoSuite::new(config) ──► Initialized ──bind_key_store──► KeyStoreBound
//!        │                          │
//!        └─ InvalidKeySize /        └─ ephemeral operations only
//!           UnsupportedHashKeySizePair
//! ```
//!
//! Persisting operations check for a bound store before doing any work, so
//! a missing store never leaves a half-applied operation behind.

use crate::adapters::engine::RustCryptoEngine;
use crate::config::CryptoSuiteConfig;
use crate::domain::curves::CurveId;
use crate::domain::errors::CryptoError;
use crate::domain::hashing::{self, HashAlgorithm};
use crate::domain::keys::{KeyMaterial, KeyOptions};
use crate::domain::pem;
use crate::domain::signature::{self, EcdsaSignature};
use crate::ports::inbound::CryptoSuiteApi;
use crate::ports::outbound::{EcEngine, KeyStore, KeyStoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// EC crypto suite bound to one curve and one digest.
pub struct CryptoSuite<E: EcEngine = RustCryptoEngine> {
    config: CryptoSuiteConfig,
    curve: CurveId,
    hash: HashAlgorithm,
    engine: E,
    key_store: Option<Arc<dyn KeyStore>>,
}

impl CryptoSuite<RustCryptoEngine> {
    /// Create a suite backed by the RustCrypto engine.
    pub fn new(config: CryptoSuiteConfig) -> Result<Self, CryptoError> {
        Self::with_engine(config, RustCryptoEngine::new())
    }
}

impl<E: EcEngine> CryptoSuite<E> {
    /// Create a suite with a custom EC engine.
    ///
    /// # Errors
    /// - `InvalidKeySize` unless the key size is 256 or 384
    /// - `UnsupportedHashKeySizePair` for hash families without a digest of
    ///   that size
    pub fn with_engine(config: CryptoSuiteConfig, engine: E) -> Result<Self, CryptoError> {
        let curve = CurveId::for_key_size(config.key_size)?;
        let hash = hashing::select(config.effective_hash_algorithm(), config.key_size)?;

        debug!(
            key_size = config.key_size,
            hash_algorithm = config.effective_hash_algorithm(),
            curve = %curve,
            "Crypto suite initialized"
        );

        Ok(Self {
            config,
            curve,
            hash,
            engine,
            key_store: None,
        })
    }

    /// Bind a key store, replacing any previous one.
    pub fn bind_key_store(&mut self, store: Arc<dyn KeyStore>) {
        debug!(rebind = self.key_store.is_some(), "Key store bound");
        self.key_store = Some(store);
    }

    /// Builder-style [`bind_key_store`](Self::bind_key_store).
    pub fn with_key_store(mut self, store: Arc<dyn KeyStore>) -> Self {
        self.bind_key_store(store);
        self
    }

    pub fn has_key_store(&self) -> bool {
        self.key_store.is_some()
    }

    pub fn config(&self) -> &CryptoSuiteConfig {
        &self.config
    }

    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }

    /// Generate a key pair that is never persisted.
    pub fn generate_ephemeral_key(&self) -> Result<KeyMaterial, CryptoError> {
        debug!(curve = %self.curve, "Generating ephemeral key");
        Ok(self.new_key_pair()?.into_ephemeral(true))
    }

    /// Import a PEM document without persisting it.
    pub fn import_ephemeral_key(&self, pem: &[u8]) -> Result<KeyMaterial, CryptoError> {
        debug!("Importing ephemeral key");
        Ok(self.decode_pem(pem)?.into_ephemeral(true))
    }

    fn new_key_pair(&self) -> Result<KeyMaterial, CryptoError> {
        let secret = self.engine.generate_secret(self.curve)?;
        let public = self.engine.multiply_generator(self.curve, &secret)?;
        KeyMaterial::from_affine(self.curve, &secret, &public)
    }

    fn decode_pem(&self, pem: &[u8]) -> Result<KeyMaterial, CryptoError> {
        let text = std::str::from_utf8(pem).map_err(|e| CryptoError::KeyParse(e.to_string()))?;

        pem::decode_pem(text, &self.engine).inspect_err(|e| {
            if matches!(e, CryptoError::UnrecognizedKeyFormat) {
                warn!("Rejected PEM import: not an EC key or certificate");
            }
        })
    }

    fn require_store(&self, operation: &'static str) -> Result<Arc<dyn KeyStore>, CryptoError> {
        self.key_store
            .clone()
            .ok_or(CryptoError::KeyStoreRequired { operation })
    }

    async fn persist(&self, store: &dyn KeyStore, key: &KeyMaterial) -> Result<(), CryptoError> {
        store.put_key(key).await?;
        let ski = key.ski().unwrap_or_default();
        info!(
            ski = %ski,
            curve = %key.curve(),
            "Key persisted to key store"
        );
        Ok(())
    }
}

#[async_trait]
impl<E: EcEngine> CryptoSuiteApi for CryptoSuite<E> {
    async fn generate_key(&self, opts: KeyOptions) -> Result<KeyMaterial, CryptoError> {
        if opts.ephemeral {
            return self.generate_ephemeral_key();
        }

        let store = self.require_store("generate_key")?;
        debug!(curve = %self.curve, "Generating persistent key");
        let key = self.new_key_pair()?;
        self.persist(store.as_ref(), &key).await?;
        Ok(key)
    }

    async fn import_key(&self, pem: &[u8], opts: KeyOptions) -> Result<KeyMaterial, CryptoError> {
        if opts.ephemeral {
            return self.import_ephemeral_key(pem);
        }

        let store = self.require_store("import_key")?;
        debug!("Importing persistent key");
        let key = self.decode_pem(pem)?;
        self.persist(store.as_ref(), &key).await?;
        Ok(key)
    }

    async fn get_key(&self, ski: &str) -> Result<Option<KeyMaterial>, CryptoError> {
        let store = self.require_store("get_key")?;
        if ski.is_empty() {
            return Err(KeyStoreError::MissingIdentifier.into());
        }
        Ok(store.get_key(ski).await?)
    }

    fn hash(&self, message: &[u8]) -> Vec<u8> {
        self.hash.digest(message)
    }

    fn sign(&self, key: &KeyMaterial, digest: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let scalar = key.private_scalar().ok_or(CryptoError::MissingKey("sign"))?;
        if digest.is_empty() {
            return Err(CryptoError::MissingMessage("sign"));
        }

        let curve = key.curve();
        let (r, s) = self.engine.raw_sign(curve, digest, scalar)?;
        let raw = EcdsaSignature::new(r, s);

        let canonical = if curve.has_malleable_s() {
            signature::normalize(&raw, curve.params())?
        } else {
            // Flipping s would invalidate the signature
            signature::ensure_canonical(&raw, curve.params())?;
            raw
        };
        canonical.to_der()
    }

    fn verify(
        &self,
        key: &KeyMaterial,
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool, CryptoError> {
        let public_point = key.public_point().ok_or(CryptoError::MissingKey("verify"))?;
        if signature.is_empty() {
            return Err(CryptoError::MissingSignature);
        }

        let params = key.curve().params();
        match signature::is_canonical(signature, params) {
            Ok(true) => {}
            Ok(false) => {
                warn!(curve = %key.curve(), "Rejected high-S signature");
                return Ok(false);
            }
            Err(CryptoError::SignatureDecode(reason)) => {
                warn!(curve = %key.curve(), %reason, "Rejected undecodable signature");
                return Ok(false);
            }
            Err(e) => return Err(e),
        }

        let sig = EcdsaSignature::from_der(signature)?;
        let digest = self.hash.digest(message);
        Ok(self
            .engine
            .raw_verify(key.curve(), &digest, &sig.r, &sig.s, public_point))
    }

    fn derive_key(&self, _key: &KeyMaterial) -> Result<KeyMaterial, CryptoError> {
        Err(CryptoError::NotImplemented("derive_key"))
    }

    fn encrypt(&self, _key: &KeyMaterial, _plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Err(CryptoError::NotImplemented("encrypt"))
    }

    fn decrypt(&self, _key: &KeyMaterial, _ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Err(CryptoError::NotImplemented("decrypt"))
    }
}
