//! # RustCrypto EC Engine
//!
//! [`EcEngine`] backed by the RustCrypto curve crates:
//! `p256` (secp256r1), `p384` (secp384r1), `k256` (secp256k1) and
//! `sm2` (sm2p256v1, SM2DSA).
//!
//! Digests are fitted to the curve byte length before signing or verifying:
//! shorter inputs are left-padded with zeros and longer ones keep their
//! leftmost bytes. That is the integer conversion ECDSA and SM2DSA define,
//! so callers may pass inputs of any length.
//!
//! `raw_sign` returns whatever the ECDSA curve crate produces; canonicalization
//! is the suite's job. SM2DSA has no `n - s` twin to fall back on, so the SM2
//! signer draws fresh nonces until `s <= n/2`. `raw_verify` runs the plain
//! verification equation, except on secp256k1 where `k256` itself refuses
//! high-S signatures.

use crate::domain::curves::CurveId;
use crate::ports::outbound::{EcEngine, EcPoint, EngineError};
use num_bigint::BigUint;
use std::borrow::Cow;
use std::cmp::Ordering;
use zeroize::Zeroizing;

/// Key generation, point multiplication and point validation for one
/// RustCrypto curve crate. Expands inside a per-curve module.
macro_rules! curve_arithmetic {
    ($krate:ident, $curve:expr) => {
        const CURVE: CurveId = $curve;

        pub fn generate_secret() -> Zeroizing<Vec<u8>> {
            let secret = $krate::SecretKey::random(&mut OsRng);
            Zeroizing::new(secret.to_bytes().to_vec())
        }

        pub fn multiply_generator(scalar: &[u8]) -> Result<EcPoint, EngineError> {
            let secret = $krate::SecretKey::from_slice(scalar)
                .map_err(|_| EngineError::InvalidScalar(CURVE))?;
            let encoded = secret.public_key().to_encoded_point(false);

            match (encoded.x(), encoded.y()) {
                (Some(x), Some(y)) => Ok(EcPoint {
                    x: BigUint::from_bytes_be(x),
                    y: BigUint::from_bytes_be(y),
                }),
                _ => Err(EngineError::IdentityPoint),
            }
        }

        pub fn is_on_curve(public_point: &[u8]) -> bool {
            $krate::PublicKey::from_sec1_bytes(public_point).is_ok()
        }
    };
}

/// Stamps out the per-curve primitives for one RustCrypto ECDSA curve crate.
macro_rules! ecdsa_curve {
    ($module:ident, $krate:ident, $curve:expr) => {
        mod $module {
            use super::{fit_digest, left_pad, CurveId, EcPoint, EngineError};
            use num_bigint::BigUint;
            use rand::rngs::OsRng;
            use zeroize::Zeroizing;
            use $krate::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
            use $krate::ecdsa::{Signature, SigningKey, VerifyingKey};
            use $krate::elliptic_curve::sec1::ToEncodedPoint;
            use $krate::FieldBytes;

            curve_arithmetic!($krate, $curve);

            pub fn sign(digest: &[u8], scalar: &[u8]) -> Result<(BigUint, BigUint), EngineError> {
                let signing_key =
                    SigningKey::from_slice(scalar).map_err(|_| EngineError::InvalidScalar(CURVE))?;
                let prehash = fit_digest(digest, CURVE.params().byte_len);
                let signature: Signature = signing_key
                    .sign_prehash(&prehash)
                    .map_err(|e| EngineError::SigningFailed(e.to_string()))?;

                let (r, s) = signature.split_bytes();
                Ok((BigUint::from_bytes_be(&r), BigUint::from_bytes_be(&s)))
            }

            pub fn verify(digest: &[u8], r: &BigUint, s: &BigUint, public_point: &[u8]) -> bool {
                let byte_len = CURVE.params().byte_len;
                let (Some(r), Some(s)) = (left_pad(r, byte_len), left_pad(s, byte_len)) else {
                    return false;
                };
                let Ok(signature) = Signature::from_scalars(
                    FieldBytes::clone_from_slice(&r),
                    FieldBytes::clone_from_slice(&s),
                ) else {
                    return false;
                };
                let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(public_point) else {
                    return false;
                };

                verifying_key
                    .verify_prehash(&fit_digest(digest, byte_len), &signature)
                    .is_ok()
            }
        }
    };
}

ecdsa_curve!(secp256r1, p256, CurveId::P256);
ecdsa_curve!(secp384r1, p384, CurveId::P384);
ecdsa_curve!(secp256k1, k256, CurveId::Secp256k1);

/// SM2DSA over a caller-supplied digest (the `e` value of GM/T 0003.2).
mod sm2p256v1 {
    use super::{fit_digest, left_pad, CurveId, EcPoint, EngineError};
    use num_bigint::BigUint;
    use rand::rngs::OsRng;
    use sm2::dsa::signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};
    use sm2::dsa::{Signature, SigningKey, VerifyingKey};
    use sm2::elliptic_curve::sec1::ToEncodedPoint;
    use sm2::FieldBytes;
    use zeroize::Zeroizing;

    curve_arithmetic!(sm2, CurveId::Sm2);

    /// Default distinguishing identifier (GM/T 0009-2012).
    const DISTID: &str = "1234567812345678";

    /// Each attempt is low-S with probability 1/2.
    const MAX_SIGN_ATTEMPTS: usize = 64;

    pub fn sign(digest: &[u8], scalar: &[u8]) -> Result<(BigUint, BigUint), EngineError> {
        let secret =
            sm2::SecretKey::from_slice(scalar).map_err(|_| EngineError::InvalidScalar(CURVE))?;
        let signing_key = SigningKey::new(DISTID, &secret)
            .map_err(|e| EngineError::SigningFailed(e.to_string()))?;
        let params = CURVE.params();
        let prehash = fit_digest(digest, params.byte_len);

        for _ in 0..MAX_SIGN_ATTEMPTS {
            let signature: Signature = signing_key
                .sign_prehash_with_rng(&mut OsRng, &prehash)
                .map_err(|e| EngineError::SigningFailed(e.to_string()))?;

            let bytes = signature.to_bytes();
            let (r, s) = bytes.split_at(params.byte_len);
            let s = BigUint::from_bytes_be(s);
            if s <= params.half_order {
                return Ok((BigUint::from_bytes_be(r), s));
            }
        }

        Err(EngineError::SigningFailed(
            "no low-S SM2 signature within attempt limit".to_string(),
        ))
    }

    pub fn verify(digest: &[u8], r: &BigUint, s: &BigUint, public_point: &[u8]) -> bool {
        let byte_len = CURVE.params().byte_len;
        let (Some(r), Some(s)) = (left_pad(r, byte_len), left_pad(s, byte_len)) else {
            return false;
        };
        let Ok(signature) = Signature::from_scalars(
            FieldBytes::clone_from_slice(&r),
            FieldBytes::clone_from_slice(&s),
        ) else {
            return false;
        };
        let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(DISTID, public_point) else {
            return false;
        };

        verifying_key
            .verify_prehash(&fit_digest(digest, byte_len), &signature)
            .is_ok()
    }
}

/// Fit a digest to `len` bytes: left-pad short input, keep the leftmost
/// bytes of long input.
fn fit_digest(digest: &[u8], len: usize) -> Cow<'_, [u8]> {
    match digest.len().cmp(&len) {
        Ordering::Equal => Cow::Borrowed(digest),
        Ordering::Greater => Cow::Borrowed(&digest[..len]),
        Ordering::Less => {
            let mut padded = vec![0u8; len - digest.len()];
            padded.extend_from_slice(digest);
            Cow::Owned(padded)
        }
    }
}

fn left_pad(value: &BigUint, len: usize) -> Option<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if bytes.len() > len {
        return None;
    }
    let mut padded = vec![0u8; len - bytes.len()];
    padded.extend_from_slice(&bytes);
    Some(padded)
}

/// Default [`EcEngine`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoEngine;

impl RustCryptoEngine {
    pub fn new() -> Self {
        Self
    }
}

impl EcEngine for RustCryptoEngine {
    fn generate_secret(&self, curve: CurveId) -> Result<Zeroizing<Vec<u8>>, EngineError> {
        Ok(match curve {
            CurveId::P256 => secp256r1::generate_secret(),
            CurveId::P384 => secp384r1::generate_secret(),
            CurveId::Secp256k1 => secp256k1::generate_secret(),
            CurveId::Sm2 => sm2p256v1::generate_secret(),
        })
    }

    fn multiply_generator(&self, curve: CurveId, scalar: &[u8]) -> Result<EcPoint, EngineError> {
        match curve {
            CurveId::P256 => secp256r1::multiply_generator(scalar),
            CurveId::P384 => secp384r1::multiply_generator(scalar),
            CurveId::Secp256k1 => secp256k1::multiply_generator(scalar),
            CurveId::Sm2 => sm2p256v1::multiply_generator(scalar),
        }
    }

    fn is_on_curve(&self, curve: CurveId, public_point: &[u8]) -> bool {
        match curve {
            CurveId::P256 => secp256r1::is_on_curve(public_point),
            CurveId::P384 => secp384r1::is_on_curve(public_point),
            CurveId::Secp256k1 => secp256k1::is_on_curve(public_point),
            CurveId::Sm2 => sm2p256v1::is_on_curve(public_point),
        }
    }

    fn raw_sign(
        &self,
        curve: CurveId,
        digest: &[u8],
        scalar: &[u8],
    ) -> Result<(BigUint, BigUint), EngineError> {
        match curve {
            CurveId::P256 => secp256r1::sign(digest, scalar),
            CurveId::P384 => secp384r1::sign(digest, scalar),
            CurveId::Secp256k1 => secp256k1::sign(digest, scalar),
            CurveId::Sm2 => sm2p256v1::sign(digest, scalar),
        }
    }

    fn raw_verify(
        &self,
        curve: CurveId,
        digest: &[u8],
        r: &BigUint,
        s: &BigUint,
        public_point: &[u8],
    ) -> bool {
        match curve {
            CurveId::P256 => secp256r1::verify(digest, r, s, public_point),
            CurveId::P384 => secp384r1::verify(digest, r, s, public_point),
            CurveId::Secp256k1 => secp256k1::verify(digest, r, s, public_point),
            CurveId::Sm2 => sm2p256v1::verify(digest, r, s, public_point),
        }
    }
}
