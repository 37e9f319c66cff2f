//! # Signature Codec & Malleability Guard
//!
//! DER encoding of ECDSA `(r, s)` pairs and the low-S rule.
//!
//! ## Security Notes
//!
//! - ECDSA signatures have two valid `s` values for the same message and key
//!   (`s` and `n - s`). Only the low form (`s <= n/2`) is canonical.
//! - Signing always emits the canonical form ([`normalize`]). SM2DSA has no
//!   `n - s` twin, so SM2 output is only checked ([`ensure_canonical`]).
//! - Verification rejects the high form ([`is_canonical`]) before any curve
//!   arithmetic, even though the raw ECDSA equation would accept it.
//!
//! Reference: BIP-62 "Low S values in signatures"

use super::curves::{CurveParams, CURVE_REGISTRY};
use super::errors::CryptoError;
use der::asn1::UintRef;
use der::{Decode, Encode, Sequence};
use num_bigint::BigUint;
use num_traits::Zero;

/// ECDSA signature components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaSignature {
    pub r: BigUint,
    pub s: BigUint,
}

/// `Ecdsa-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }` (RFC 3279 §2.2.3)
#[derive(Sequence)]
struct EcdsaSigValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl EcdsaSignature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Decode a DER `Ecdsa-Sig-Value`.
    ///
    /// Rejects trailing data, negative or non-minimal integers, and zero
    /// components.
    pub fn from_der(bytes: &[u8]) -> Result<Self, CryptoError> {
        let value = EcdsaSigValue::from_der(bytes)
            .map_err(|e| CryptoError::SignatureDecode(e.to_string()))?;

        let r = BigUint::from_bytes_be(value.r.as_bytes());
        let s = BigUint::from_bytes_be(value.s.as_bytes());
        if r.is_zero() || s.is_zero() {
            return Err(CryptoError::SignatureDecode(
                "signature component is zero".to_string(),
            ));
        }

        Ok(Self { r, s })
    }

    /// Encode as a DER `Ecdsa-Sig-Value`.
    pub fn to_der(&self) -> Result<Vec<u8>, CryptoError> {
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();
        let value = EcdsaSigValue {
            r: UintRef::new(&r).map_err(|e| CryptoError::SignatureDecode(e.to_string()))?,
            s: UintRef::new(&s).map_err(|e| CryptoError::SignatureDecode(e.to_string()))?,
        };

        value
            .to_der()
            .map_err(|e| CryptoError::SignatureDecode(e.to_string()))
    }
}

fn registered_half_order(curve: &CurveParams) -> Result<&'static BigUint, CryptoError> {
    CURVE_REGISTRY
        .half_order(curve.name)
        .ok_or_else(|| CryptoError::UnknownCurveForMalleabilityCheck(curve.name.to_string()))
}

/// Whether `s` is in the lower half of the curve order.
pub fn is_low_s(s: &BigUint, half_order: &BigUint) -> bool {
    s <= half_order
}

/// Canonicalize a signature: replace `s` with `n - s` when `s > n/2`.
///
/// `r` is never touched. Components outside `[1, n-1]` are rejected.
pub fn normalize(sig: &EcdsaSignature, curve: &CurveParams) -> Result<EcdsaSignature, CryptoError> {
    let half_order = registered_half_order(curve)?;

    if sig.r.is_zero() || sig.r >= curve.order || sig.s.is_zero() || sig.s >= curve.order {
        return Err(CryptoError::SignatureDecode(format!(
            "signature component out of range for {}",
            curve.name
        )));
    }

    if is_low_s(&sig.s, half_order) {
        return Ok(sig.clone());
    }

    Ok(EcdsaSignature {
        r: sig.r.clone(),
        s: &curve.order - &sig.s,
    })
}

/// Check whether DER signature bytes are in canonical low-S form.
///
/// Fails when the bytes cannot be decoded into `(r, s)`; returns `false`
/// iff `s > n/2`.
pub fn is_canonical(der: &[u8], curve: &CurveParams) -> Result<bool, CryptoError> {
    let half_order = registered_half_order(curve)?;
    let sig = EcdsaSignature::from_der(der)?;
    Ok(is_low_s(&sig.s, half_order))
}

/// Reject a non-canonical signature.
pub fn ensure_canonical(sig: &EcdsaSignature, curve: &CurveParams) -> Result<(), CryptoError> {
    let half_order = registered_half_order(curve)?;
    if is_low_s(&sig.s, half_order) {
        Ok(())
    } else {
        Err(CryptoError::MalleableSignature)
    }
}
