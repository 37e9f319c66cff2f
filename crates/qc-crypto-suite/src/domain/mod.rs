//! # Domain Layer
//!
//! Curve registry, hash selection, key material, PEM codec and the
//! signature malleability guard. No I/O.

pub mod curves;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod pem;
pub mod signature;
