//! # Signature Malleability Attack
//!
//! An observer of a valid `(r, s)` signature can produce `(r, n - s)` without
//! the private key. Both satisfy the ECDSA equation, so a deduplicator keyed
//! on signature bytes sees two distinct submissions of one authorization.
//!
//! ## Attack
//!
//! 1. Victim signs a transfer and broadcasts it.
//! 2. Attacker rewrites `s` to `n - s` and rebroadcasts.
//! 3. A naive replay filter keyed by signature bytes accepts both.
//!
//! ## Defense
//!
//! `sign` only emits low-S and `verify` returns `false` for high-S, so the
//! mutated copy never passes verification.

#[cfg(test)]
mod tests {
    use qc_crypto_suite::domain::signature::is_canonical;
    use qc_crypto_suite::{
        CryptoSuite, CryptoSuiteApi, CryptoSuiteConfig, CurveId, EcEngine, EcdsaSignature,
        KeyMaterial, RustCryptoEngine,
    };
    use std::collections::HashSet;

    /// Byte-keyed replay filter that only admits verified submissions.
    struct ReplayFilter<'a> {
        suite: &'a CryptoSuite,
        seen: HashSet<Vec<u8>>,
    }

    impl<'a> ReplayFilter<'a> {
        fn new(suite: &'a CryptoSuite) -> Self {
            Self {
                suite,
                seen: HashSet::new(),
            }
        }

        fn admit(
            &mut self,
            key: &KeyMaterial,
            signature: &[u8],
            message: &[u8],
        ) -> bool {
            self.suite.verify(key, signature, message).unwrap_or(false)
                && self.seen.insert(signature.to_vec())
        }
    }

    /// The attacker's only move: `s -> n - s`.
    fn flip_s(der: &[u8], curve: CurveId) -> Vec<u8> {
        let sig = EcdsaSignature::from_der(der).unwrap();
        let flipped = EcdsaSignature::new(sig.r, &curve.params().order - &sig.s);
        flipped.to_der().unwrap()
    }

    /// The mutated signature is mathematically valid but never admitted.
    #[test]
    fn test_flipped_s_replay_is_rejected() {
        let suite = CryptoSuite::new(CryptoSuiteConfig::default()).unwrap();
        let victim = suite.generate_ephemeral_key().unwrap();
        let message = b"transfer 10 QC to 0xBB";

        let original = suite.sign(&victim, &suite.hash(message)).unwrap();
        let forged = flip_s(&original, CurveId::P256);
        assert_ne!(original, forged);

        // The raw ECDSA equation accepts the forgery
        let decoded = EcdsaSignature::from_der(&forged).unwrap();
        assert!(RustCryptoEngine::new().raw_verify(
            CurveId::P256,
            &suite.hash(message),
            &decoded.r,
            &decoded.s,
            victim.public_point().unwrap(),
        ));

        let mut filter = ReplayFilter::new(&suite);
        assert!(filter.admit(&victim, &original, message));
        assert!(!filter.admit(&victim, &forged, message));
        assert!(!filter.admit(&victim, &original, message));
    }

    /// Every signature the suite produces is already canonical, for every
    /// curve it can sign on.
    #[test]
    fn test_suite_never_emits_forgeable_form() {
        for key_size in [256, 384] {
            let suite =
                CryptoSuite::new(CryptoSuiteConfig::default().with_key_size(key_size)).unwrap();
            let key = suite.generate_ephemeral_key().unwrap();

            for i in 0u32..64 {
                let digest = suite.hash(&i.to_le_bytes());
                let signature = suite.sign(&key, &digest).unwrap();
                assert!(is_canonical(&signature, suite.curve().params()).unwrap());
            }
        }
    }

    /// Flipping twice restores the original, which still verifies.
    #[test]
    fn test_double_flip_is_original() {
        let suite = CryptoSuite::new(CryptoSuiteConfig::default()).unwrap();
        let key = suite.generate_ephemeral_key().unwrap();
        let original = suite.sign(&key, &suite.hash(b"vote yes")).unwrap();

        let restored = flip_s(&flip_s(&original, CurveId::P256), CurveId::P256);

        assert_eq!(restored, original);
        assert!(suite.verify(&key, &restored, b"vote yes").unwrap());
    }
}
