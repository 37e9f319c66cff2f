//! # Ports Layer
//!
//! - **Inbound (Driving)**: the crypto suite API callers use
//! - **Outbound (Driven)**: key store and EC engine the suite depends on

pub mod inbound;
pub mod outbound;
