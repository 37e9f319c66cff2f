//! Fuzz target for the DER signature codec and low-S guard.
//!
//! ## Running
//!
//! ```bash
//! cd crates/qc-crypto-suite
//! cargo +nightly fuzz run fuzz_signature_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use qc_crypto_suite::domain::curves::CurveId;
use qc_crypto_suite::domain::signature::{is_canonical, normalize, EcdsaSignature};

fuzz_target!(|data: &[u8]| {
    let Ok(sig) = EcdsaSignature::from_der(data) else {
        return;
    };

    // Anything that decodes must re-encode
    let reencoded = sig.to_der().expect("decoded signature must re-encode");
    assert_eq!(
        EcdsaSignature::from_der(&reencoded).expect("re-encoded signature must decode"),
        sig
    );

    for curve in CurveId::ALL {
        let params = curve.params();
        if let Ok(canonical) = normalize(&sig, params) {
            let der = canonical.to_der().expect("normalized signature must encode");
            assert!(is_canonical(&der, params).expect("normalized signature must decode"));
            assert_eq!(normalize(&canonical, params).ok(), Some(canonical));
        }
    }
});
