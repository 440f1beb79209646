//! Fuzz target for `ciphertext || tag` extracts
//!
//! Arbitrary bytes are split as an extract and opened under a fixed key.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lwc_crypto::{Algorithm, AuthenticatedData, Mode};

fuzz_target!(|data: &[u8]| {
    let key = [0x42u8; 16];

    for algorithm in Algorithm::ALL {
        let nonce = vec![0u8; algorithm.nonce_len()];
        let Ok(extract) = AuthenticatedData::from_extract(data, algorithm.tag_len()) else {
            assert!(data.len() < algorithm.tag_len());
            continue;
        };
        assert_eq!(extract.to_extract(), data);

        for mode in Mode::ALL {
            let _ = algorithm.open(mode, &extract.ciphertext, &key, &nonce, &extract.tag, None);
        }
    }
});
