//! Shared fixtures for the LWC integration tests.

use lwc_crypto::{Algorithm, Mode};
use rand_core::{OsRng, RngCore};

/// Message lengths that cover empty, partial, exact and multi-block inputs.
pub const MESSAGE_LENGTHS: [usize; 8] = [0, 1, 7, 8, 9, 16, 100, 1000];

/// Every scheme paired with every mode.
pub fn all_combinations() -> impl Iterator<Item = (Algorithm, Mode)> {
    Algorithm::ALL
        .into_iter()
        .flat_map(|algorithm| Mode::ALL.into_iter().map(move |mode| (algorithm, mode)))
}

/// Associated data variants: absent, empty, short and long.
#[must_use]
pub fn ad_variants() -> Vec<Option<Vec<u8>>> {
    vec![
        None,
        Some(Vec::new()),
        Some(b"hdr".to_vec()),
        Some(b"long associated data ".repeat(10)),
    ]
}

/// Deterministic message of `len` bytes.
#[must_use]
pub fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// Fresh random key and nonce sized for `algorithm`.
#[must_use]
pub fn random_key_nonce(algorithm: Algorithm) -> (Vec<u8>, Vec<u8>) {
    let mut key = vec![0u8; algorithm.key_len()];
    let mut nonce = vec![0u8; algorithm.nonce_len()];
    OsRng.fill_bytes(&mut key);
    OsRng.fill_bytes(&mut nonce);
    (key, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_cover_everything() {
        assert_eq!(all_combinations().count(), 6);
    }

    #[test]
    fn test_random_material_sizes() {
        let (key, nonce) = random_key_nonce(Algorithm::Elephant);
        assert_eq!((key.len(), nonce.len()), (16, 8));
    }
}
