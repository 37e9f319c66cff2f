//! # Key Material
//!
//! Immutable EC key values produced by generation or import.
//!
//! The variant carries exactly the components it owns, so "private scalar
//! present iff the key can sign" holds by construction.

use super::curves::CurveId;
use super::errors::CryptoError;
use super::hashing::sha256;
use super::pem;
use crate::ports::outbound::EcPoint;
use num_bigint::BigUint;
use std::fmt;
use zeroize::Zeroizing;

/// Key classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    EcPublic,
    EcPrivate,
    EcKeyPair,
}

/// Key components by kind.
///
/// Points are SEC1 uncompressed (`04 || X || Y`); scalars are big-endian
/// and left-padded to the curve byte length.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyKind {
    EcPublic {
        point: Vec<u8>,
    },
    EcPrivate {
        scalar: Zeroizing<Vec<u8>>,
    },
    EcKeyPair {
        scalar: Zeroizing<Vec<u8>>,
        point: Vec<u8>,
    },
}

/// Options for `generate_key` / `import_key`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOptions {
    /// Skip the key store entirely
    pub ephemeral: bool,
}

impl KeyOptions {
    /// Options for a key that is never persisted.
    pub fn ephemeral() -> Self {
        Self { ephemeral: true }
    }

    /// Options for a key that is persisted (the default).
    pub fn persistent() -> Self {
        Self { ephemeral: false }
    }
}

/// An EC public key, private key or key pair on a registered curve.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    curve: CurveId,
    kind: KeyKind,
    ephemeral: bool,
}

impl KeyMaterial {
    /// Public key from a SEC1 uncompressed point.
    ///
    /// Only the encoding is checked here; PEM import also checks that the
    /// point lies on the curve.
    pub fn public(curve: CurveId, point: Vec<u8>) -> Result<Self, CryptoError> {
        check_point(curve, &point)?;
        Ok(Self {
            curve,
            kind: KeyKind::EcPublic { point },
            ephemeral: false,
        })
    }

    /// Private key without a known public point.
    pub fn private(curve: CurveId, scalar: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            curve,
            kind: KeyKind::EcPrivate {
                scalar: pad_scalar(curve, scalar)?,
            },
            ephemeral: false,
        })
    }

    /// Key pair from a private scalar and its public point.
    pub fn key_pair(curve: CurveId, scalar: &[u8], point: Vec<u8>) -> Result<Self, CryptoError> {
        check_point(curve, &point)?;
        Ok(Self {
            curve,
            kind: KeyKind::EcKeyPair {
                scalar: pad_scalar(curve, scalar)?,
                point,
            },
            ephemeral: false,
        })
    }

    /// Key pair from a scalar and the affine point derived from it.
    pub fn from_affine(curve: CurveId, scalar: &[u8], point: &EcPoint) -> Result<Self, CryptoError> {
        let byte_len = curve.params().byte_len;
        let mut encoded = Vec::with_capacity(1 + 2 * byte_len);
        encoded.push(0x04);
        encoded.extend(pad_coordinate(&point.x, byte_len)?);
        encoded.extend(pad_coordinate(&point.y, byte_len)?);

        Self::key_pair(curve, scalar, encoded)
    }

    /// Mark this value as ephemeral (never handed to a key store).
    pub fn into_ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Key classification.
    pub fn key_type(&self) -> KeyType {
        match self.kind {
            KeyKind::EcPublic { .. } => KeyType::EcPublic,
            KeyKind::EcPrivate { .. } => KeyType::EcPrivate,
            KeyKind::EcKeyPair { .. } => KeyType::EcKeyPair,
        }
    }

    pub fn kind(&self) -> &KeyKind {
        &self.kind
    }

    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }

    /// Whether the key can sign.
    pub fn is_private(&self) -> bool {
        self.private_scalar().is_some()
    }

    /// SEC1 uncompressed public point, if known.
    pub fn public_point(&self) -> Option<&[u8]> {
        match &self.kind {
            KeyKind::EcPublic { point } | KeyKind::EcKeyPair { point, .. } => {
                Some(point.as_slice())
            }
            KeyKind::EcPrivate { .. } => None,
        }
    }

    /// Big-endian private scalar, if present.
    pub fn private_scalar(&self) -> Option<&[u8]> {
        match &self.kind {
            KeyKind::EcPrivate { scalar } | KeyKind::EcKeyPair { scalar, .. } => {
                Some(scalar.as_slice())
            }
            KeyKind::EcPublic { .. } => None,
        }
    }

    /// Subject key identifier: hex SHA-256 of the uncompressed public point.
    pub fn ski(&self) -> Option<String> {
        self.public_point().map(|point| hex::encode(sha256(point)))
    }

    /// Public projection of this key.
    pub fn public_key(&self) -> Option<KeyMaterial> {
        self.public_point().map(|point| Self {
            curve: self.curve,
            kind: KeyKind::EcPublic {
                point: point.to_vec(),
            },
            ephemeral: self.ephemeral,
        })
    }

    /// Encode as PEM: PKCS#8 `PRIVATE KEY` when a scalar is present,
    /// SPKI `PUBLIC KEY` otherwise.
    pub fn to_pem(&self) -> Result<String, CryptoError> {
        pem::encode_pem(self)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key_type", &self.key_type())
            .field("curve", &self.curve)
            .field("ski", &self.ski())
            .field("ephemeral", &self.ephemeral)
            .finish_non_exhaustive()
    }
}

fn check_point(curve: CurveId, point: &[u8]) -> Result<(), CryptoError> {
    let params = curve.params();
    if point.len() != params.uncompressed_point_len() || point[0] != 0x04 {
        return Err(CryptoError::KeyParse(format!(
            "expected a {}-byte uncompressed {} point",
            params.uncompressed_point_len(),
            curve
        )));
    }
    Ok(())
}

fn pad_coordinate(value: &BigUint, byte_len: usize) -> Result<Vec<u8>, CryptoError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > byte_len {
        return Err(CryptoError::KeyParse(format!(
            "coordinate longer than {byte_len} bytes"
        )));
    }
    let mut padded = vec![0u8; byte_len - bytes.len()];
    padded.extend_from_slice(&bytes);
    Ok(padded)
}

fn pad_scalar(curve: CurveId, scalar: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let byte_len = curve.params().byte_len;
    let trimmed = match scalar.iter().position(|&b| b != 0) {
        Some(first) => &scalar[first..],
        None => return Err(CryptoError::KeyParse("private scalar is zero".to_string())),
    };
    if trimmed.len() > byte_len {
        return Err(CryptoError::KeyParse(format!(
            "private scalar longer than {byte_len} bytes for {curve}"
        )));
    }

    let mut padded = Zeroizing::new(vec![0u8; byte_len]);
    padded[byte_len - trimmed.len()..].copy_from_slice(trimmed);
    Ok(padded)
}
