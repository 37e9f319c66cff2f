//! # Curve Registry
//!
//! Static table of supported curves and their domain parameters.
//!
//! The half order (`n >> 1`) of every curve is computed once when the
//! registry is first touched and is read-only afterwards. It is the bound
//! used by the low-S malleability guard.

use super::errors::CryptoError;
use der::asn1::ObjectIdentifier;
use hex_literal::hex;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Identifier of a registered curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveId {
    /// NIST P-256 (secp256r1 / prime256v1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// secp256k1
    Secp256k1,
    /// SM2 recommended curve (GM/T 0003-2012)
    Sm2,
}

impl CurveId {
    /// All registered curves.
    pub const ALL: [CurveId; 4] = [
        CurveId::P256,
        CurveId::P384,
        CurveId::Secp256k1,
        CurveId::Sm2,
    ];

    /// Canonical curve name.
    pub const fn name(&self) -> &'static str {
        match self {
            CurveId::P256 => "secp256r1",
            CurveId::P384 => "secp384r1",
            CurveId::Secp256k1 => "secp256k1",
            CurveId::Sm2 => "sm2p256v1",
        }
    }

    /// Resolve a curve from its name or a common alias (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        match name.to_ascii_lowercase().as_str() {
            "secp256r1" | "prime256v1" | "p-256" | "p256" | "nistp256" => Ok(CurveId::P256),
            "secp384r1" | "p-384" | "p384" | "nistp384" => Ok(CurveId::P384),
            "secp256k1" | "k256" => Ok(CurveId::Secp256k1),
            "sm2p256v1" | "sm2" => Ok(CurveId::Sm2),
            _ => Err(CryptoError::UnsupportedCurve(name.to_string())),
        }
    }

    /// Resolve a curve from its named-curve object identifier.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self, CryptoError> {
        CurveId::ALL
            .into_iter()
            .find(|curve| curve.params().oid == *oid)
            .ok_or_else(|| CryptoError::UnsupportedCurve(oid.to_string()))
    }

    /// Curve used by the suite for a given key size in bits.
    ///
    /// Only NIST curves are constructed here; secp256k1 and SM2 keys are
    /// reachable through import.
    pub fn for_key_size(key_size: u32) -> Result<Self, CryptoError> {
        match key_size {
            256 => Ok(CurveId::P256),
            384 => Ok(CurveId::P384),
            other => Err(CryptoError::InvalidKeySize(other)),
        }
    }

    /// Whether `(r, n - s)` is also a valid signature on this curve.
    ///
    /// True for ECDSA curves. SM2DSA binds `s` into the verification point,
    /// so flipping it yields an invalid signature rather than a twin.
    pub const fn has_malleable_s(&self) -> bool {
        !matches!(self, CurveId::Sm2)
    }

    /// Domain parameters of this curve.
    pub fn params(&self) -> &'static CurveParams {
        match self {
            CurveId::P256 => &CURVE_REGISTRY.curves[0],
            CurveId::P384 => &CURVE_REGISTRY.curves[1],
            CurveId::Secp256k1 => &CURVE_REGISTRY.curves[2],
            CurveId::Sm2 => &CURVE_REGISTRY.curves[3],
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain parameters of a curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Curve identifier
    pub id: CurveId,
    /// Canonical curve name
    pub name: &'static str,
    /// Named-curve OID (RFC 5480)
    pub oid: ObjectIdentifier,
    /// Group order n
    pub order: BigUint,
    /// n >> 1
    pub half_order: BigUint,
    /// Generator point, SEC1 uncompressed encoding
    pub generator: Vec<u8>,
    /// Field element length in bytes
    pub byte_len: usize,
}

impl CurveParams {
    fn new(id: CurveId, oid: ObjectIdentifier, order: &[u8], gx: &[u8], gy: &[u8]) -> Self {
        let order = BigUint::from_bytes_be(order);
        let half_order = &order >> 1u32;
        let byte_len = gx.len();

        let mut generator = Vec::with_capacity(1 + 2 * byte_len);
        generator.push(0x04);
        generator.extend_from_slice(gx);
        generator.extend_from_slice(gy);

        Self {
            id,
            name: id.name(),
            oid,
            order,
            half_order,
            generator,
            byte_len,
        }
    }

    /// Length of the SEC1 uncompressed point encoding (`04 || X || Y`).
    pub fn uncompressed_point_len(&self) -> usize {
        1 + 2 * self.byte_len
    }
}

/// Read-only table of registered curves.
#[derive(Debug)]
pub struct CurveRegistry {
    curves: Vec<CurveParams>,
}

impl CurveRegistry {
    /// Look up a curve by name or alias.
    pub fn lookup(&self, name: &str) -> Result<&CurveParams, CryptoError> {
        let id = CurveId::from_name(name)?;
        self.curves
            .iter()
            .find(|params| params.id == id)
            .ok_or_else(|| CryptoError::UnsupportedCurve(name.to_string()))
    }

    /// Half order of a curve, as used by the malleability guard.
    pub fn half_order(&self, name: &str) -> Option<&BigUint> {
        self.lookup(name).ok().map(|params| &params.half_order)
    }

    /// Iterate over all registered curves.
    pub fn iter(&self) -> impl Iterator<Item = &CurveParams> {
        self.curves.iter()
    }
}

// Named-curve OIDs (RFC 5480, SEC 2, GM/T 0006). Evaluated at compile time.
const P256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const P384_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP256K1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");
const SM2_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.156.10197.1.301");

/// Process-wide curve registry.
///
/// Order of entries matches [`CurveId::params`].
pub static CURVE_REGISTRY: LazyLock<CurveRegistry> = LazyLock::new(|| CurveRegistry {
    curves: vec![
        CurveParams::new(
            CurveId::P256,
            P256_OID,
            &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
            &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        ),
        CurveParams::new(
            CurveId::P384,
            P384_OID,
            &hex!(
                "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
                "581a0db248b0a77aecec196accc52973"
            ),
            &hex!(
                "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
                "5502f25dbf55296c3a545e3872760ab7"
            ),
            &hex!(
                "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
                "0a60b1ce1d7e819d7a431d7c90ea0e5f"
            ),
        ),
        CurveParams::new(
            CurveId::Secp256k1,
            SECP256K1_OID,
            &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
            &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        ),
        CurveParams::new(
            CurveId::Sm2,
            SM2_OID,
            &hex!("fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123"),
            &hex!("32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7"),
            &hex!("bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0"),
        ),
    ],
});

/// Look up a curve in the process-wide registry.
pub fn lookup(name: &str) -> Result<&'static CurveParams, CryptoError> {
    CURVE_REGISTRY.lookup(name)
}
