//! # Exploit Simulations
//!
//! Attacks an adversary can mount with nothing but public data.

pub mod signature_malleability;
