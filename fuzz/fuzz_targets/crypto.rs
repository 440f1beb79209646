//! Fuzz target for the AEAD engines and modes
//!
//! Encryption must round-trip, and decryption of arbitrary input must fail
//! cleanly instead of panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lwc_crypto::{Algorithm, Mode};

#[derive(Debug, Arbitrary)]
struct CryptoInput {
    elephant: bool,
    mode: u8,
    key: Vec<u8>,
    nonce: Vec<u8>,
    plaintext: Vec<u8>,
    tag: Vec<u8>,
    ad: Option<Vec<u8>>,
}

fuzz_target!(|input: CryptoInput| {
    let algorithm = if input.elephant {
        Algorithm::Elephant
    } else {
        Algorithm::Isap
    };
    let mode = Mode::ALL[usize::from(input.mode) % Mode::ALL.len()];
    let ad = input.ad.as_deref();

    // Arbitrary lengths: must return InvalidParameter, never panic
    if let Ok(sealed) = algorithm.seal(mode, &input.plaintext, &input.key, &input.nonce, ad) {
        let opened = algorithm.open(
            mode,
            &sealed.ciphertext,
            &input.key,
            &input.nonce,
            &sealed.tag,
            ad,
        );
        assert_eq!(opened.as_deref(), Ok(input.plaintext.as_slice()));
    }

    // Treat the plaintext as forged ciphertext
    let _ = algorithm.open(mode, &input.plaintext, &input.key, &input.nonce, &input.tag, ad);
});
