//! Fuzz target for PEM key import.
//!
//! Feeds arbitrary text through both decoder paths (raw private key and
//! generic key object). Any panic is a bug; errors are expected.
//!
//! ## Running
//!
//! ```bash
//! cd crates/qc-crypto-suite
//! cargo +nightly fuzz run fuzz_pem_decode
//! ```

#![no_main]

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use libfuzzer_sys::fuzz_target;
use qc_crypto_suite::domain::pem::decode_pem;
use qc_crypto_suite::RustCryptoEngine;

#[derive(Debug, arbitrary::Arbitrary)]
enum Label {
    PrivateKey,
    PublicKey,
    Certificate,
    EcPrivateKey,
    EcdsaPrivateKey,
    Empty,
}

impl Label {
    fn as_str(&self) -> &'static str {
        match self {
            Label::PrivateKey => "PRIVATE KEY",
            Label::PublicKey => "PUBLIC KEY",
            Label::Certificate => "CERTIFICATE",
            Label::EcPrivateKey => "EC PRIVATE KEY",
            Label::EcdsaPrivateKey => "ECDSA PRIVATE KEY",
            Label::Empty => "",
        }
    }
}

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    label: Label,
    body: String,
    raw: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let engine = RustCryptoEngine::new();

    // Free-form text
    let _ = decode_pem(&input.body, &engine);

    // Well-framed document with an arbitrary body
    let framed = format!(
        "-----BEGIN {label}-----\n{body}\n-----END {label}-----\n",
        label = input.label.as_str(),
        body = input.body,
    );
    let _ = decode_pem(&framed, &engine);

    // Well-framed document with arbitrary DER
    let pem = frame(input.label.as_str(), &input.raw);
    if let Ok(key) = decode_pem(&pem, &engine) {
        // Whatever decodes must re-encode
        assert!(key.to_pem().is_ok());
    }
});

fn frame(label: &str, der: &[u8]) -> String {
    let body = BASE64.encode(der);
    format!("-----BEGIN {label}-----\n{body}\n-----END {label}-----\n")
}
