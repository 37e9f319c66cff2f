//! # In-Memory Key Store
//!
//! [`KeyStore`] held in process memory, keyed by SKI.
//!
//! A key pair and its public projection share an SKI. Storing the public half
//! never overwrites a stored private key, and lookups return the private form
//! when one is held.

use crate::domain::keys::KeyMaterial;
use crate::ports::outbound::{KeyStore, KeyStoreError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

#[derive(Default)]
pub struct InMemoryKeyStore {
    keys: RwLock<HashMap<String, KeyMaterial>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }
}

#[async_trait]
impl KeyStore for InMemoryKeyStore {
    async fn get_key(&self, ski: &str) -> Result<Option<KeyMaterial>, KeyStoreError> {
        Ok(self.keys.read().get(ski).cloned())
    }

    async fn put_key(&self, key: &KeyMaterial) -> Result<(), KeyStoreError> {
        let ski = key.ski().ok_or(KeyStoreError::MissingIdentifier)?;
        let mut keys = self.keys.write();

        if !key.is_private() && keys.get(&ski).is_some_and(KeyMaterial::is_private) {
            debug!(ski = %ski, "Private key already stored, keeping it");
            return Ok(());
        }

        keys.insert(ski, key.clone());
        Ok(())
    }
}
