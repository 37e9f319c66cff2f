//! # Adapters Module
//!
//! Infrastructure implementations of the outbound ports.

pub mod engine;
pub mod memory_store;

pub use engine::RustCryptoEngine;
pub use memory_store::InMemoryKeyStore;
