//! Integration tests for LWC
//!
//! End-to-end checks across schemes, modes and the file integrity service.

use lwc_crypto::{Aead, Algorithm, AuthenticatedData, CryptoError, Elephant, Isap, Mode};
use lwc_files::{IntegrityError, IntegrityService};
use lwc_integration_tests::{
    MESSAGE_LENGTHS, ad_variants, all_combinations, message, random_key_nonce,
};
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_roundtrip_matrix() {
    for (algorithm, mode) in all_combinations() {
        let (key, nonce) = random_key_nonce(algorithm);
        for len in MESSAGE_LENGTHS {
            let plaintext = message(len);
            for ad in ad_variants() {
                let ad = ad.as_deref();
                let sealed = algorithm.seal(mode, &plaintext, &key, &nonce, ad).unwrap();
                assert_eq!(sealed.ciphertext.len(), len, "{algorithm}/{mode}/{len}");
                assert_eq!(sealed.tag.len(), algorithm.tag_len());

                let opened = algorithm
                    .open(mode, &sealed.ciphertext, &key, &nonce, &sealed.tag, ad)
                    .unwrap();
                assert_eq!(opened, plaintext, "{algorithm}/{mode}/{len}/{ad:?}");
            }
        }
    }
}

#[test]
fn test_none_and_empty_ad_equivalent() {
    for (algorithm, mode) in all_combinations() {
        let (key, nonce) = random_key_nonce(algorithm);
        let a = algorithm.seal(mode, b"same", &key, &nonce, None).unwrap();
        let b = algorithm.seal(mode, b"same", &key, &nonce, Some(b"")).unwrap();
        assert_eq!(a, b, "{algorithm}/{mode}");
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_zero_inputs_empty_message() {
    for algorithm in Algorithm::ALL {
        let key = vec![0u8; 16];
        let nonce = vec![0u8; algorithm.nonce_len()];
        let first = algorithm.encrypt(&[], &key, &nonce, None).unwrap();
        let second = algorithm.encrypt(&[], &key, &nonce, None).unwrap();

        assert!(first.ciphertext.is_empty());
        assert_eq!(first.tag.len(), algorithm.tag_len());
        assert_eq!(first.tag, second.tag);
    }
}

#[test]
fn test_nine_bytes_with_five_byte_ad() {
    for algorithm in Algorithm::ALL {
        let (key, nonce) = random_key_nonce(algorithm);
        let sealed = algorithm.encrypt(b"123456789", &key, &nonce, Some(b"extra")).unwrap();
        let opened = algorithm
            .decrypt(&sealed.ciphertext, &key, &nonce, &sealed.tag, Some(b"extra"))
            .unwrap();
        assert_eq!(opened, b"123456789");
    }
}

// ============================================================================
// Parameter validation
// ============================================================================

#[test]
fn test_invalid_lengths_every_entry_point() {
    for (algorithm, mode) in all_combinations() {
        let key = vec![0u8; 16];
        let nonce = vec![0u8; algorithm.nonce_len()];
        let tag = vec![0u8; algorithm.tag_len()];

        let err = algorithm.seal(mode, b"m", &key[..15], &nonce, None).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidParameter { parameter: "key", .. }));

        let err = algorithm.seal(mode, b"m", &key, &nonce[1..], None).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidParameter { parameter: "nonce" | "iv", .. }
        ));

        let err = algorithm
            .open(mode, b"m", &key, &nonce, &tag[1..], None)
            .unwrap_err();
        assert!(matches!(err, CryptoError::InvalidParameter { parameter: "tag", .. }));
    }
}

#[test]
fn test_static_and_dynamic_dispatch_agree() {
    let key = [0x44u8; 16];
    let elephant_nonce = [0x55u8; 8];
    let isap_nonce = [0x66u8; 16];

    assert_eq!(
        Elephant.encrypt_cbc(b"static", &key, &elephant_nonce, None).unwrap(),
        Algorithm::Elephant.encrypt_cbc(b"static", &key, &elephant_nonce, None).unwrap()
    );
    assert_eq!(
        Isap.encrypt_ofb(b"static", &key, &isap_nonce, None).unwrap(),
        Algorithm::Isap.encrypt_ofb(b"static", &key, &isap_nonce, None).unwrap()
    );
}

#[test]
fn test_extract_roundtrip_through_bytes() {
    for (algorithm, mode) in all_combinations() {
        let (key, nonce) = random_key_nonce(algorithm);
        let sealed = algorithm.seal(mode, b"wire format", &key, &nonce, None).unwrap();
        let parsed =
            AuthenticatedData::from_extract(&sealed.to_extract(), algorithm.tag_len()).unwrap();
        let opened = algorithm
            .open(mode, &parsed.ciphertext, &key, &nonce, &parsed.tag, None)
            .unwrap();
        assert_eq!(opened, b"wire format");
    }
}

// ============================================================================
// Tamper detection (Elephant binds every input through the tag)
// ============================================================================

#[test]
fn test_elephant_rejects_any_flipped_bit() {
    let (key, nonce) = random_key_nonce(Algorithm::Elephant);
    let ad: &[u8] = b"context";
    for mode in Mode::ALL {
        let sealed = Algorithm::Elephant
            .seal(mode, &message(20), &key, &nonce, Some(ad))
            .unwrap();

        for index in 0..sealed.ciphertext.len() {
            let mut ciphertext = sealed.ciphertext.clone();
            ciphertext[index] ^= 0x10;
            let result =
                Algorithm::Elephant.open(mode, &ciphertext, &key, &nonce, &sealed.tag, Some(ad));
            assert_eq!(result, Err(CryptoError::AuthenticationFailure), "{mode} byte {index}");
        }

        for index in 0..ad.len() {
            let mut other_ad = ad.to_vec();
            other_ad[index] ^= 0x01;
            let result = Algorithm::Elephant.open(
                mode,
                &sealed.ciphertext,
                &key,
                &nonce,
                &sealed.tag,
                Some(other_ad.as_slice()),
            );
            assert_eq!(result, Err(CryptoError::AuthenticationFailure), "{mode} ad {index}");
        }

        let result =
            Algorithm::Elephant.open(mode, &sealed.ciphertext, &key, &nonce, &sealed.tag, None);
        assert_eq!(result, Err(CryptoError::AuthenticationFailure));
    }
}

#[test]
fn test_every_tag_bit_matters() {
    for (algorithm, mode) in all_combinations() {
        let (key, nonce) = random_key_nonce(algorithm);
        let sealed = algorithm.seal(mode, b"tagged", &key, &nonce, None).unwrap();
        for bit in 0..sealed.tag.len() * 8 {
            let mut tag = sealed.tag.clone();
            tag[bit / 8] ^= 1 << (bit % 8);
            assert_eq!(
                algorithm.open(mode, &sealed.ciphertext, &key, &nonce, &tag, None),
                Err(CryptoError::AuthenticationFailure)
            );
        }
    }
}

#[test]
fn test_isap_ad_shapes_keystream_not_tag() {
    // The ISAP tag covers the ciphertext only; associated data changes the
    // keystream, so a wrong AD verifies but recovers different bytes.
    let key: Vec<u8> = (0u8..16).collect();
    let nonce: Vec<u8> = (0x10u8..0x20).collect();
    let sealed = Isap.encrypt(b"short", &key, &nonce, Some(b"hdr")).unwrap();
    assert_eq!(hex::encode(&sealed.ciphertext), "8dc7406a9e");

    let without_ad = Isap.encrypt(b"short", &key, &nonce, None).unwrap();
    assert_eq!(hex::encode(&without_ad.ciphertext), "15ff7de6e4");

    let opened = Isap
        .decrypt(&sealed.ciphertext, &key, &nonce, &sealed.tag, None)
        .unwrap();
    assert_eq!(opened.len(), 5);
    assert_ne!(opened, b"short");
}

// ============================================================================
// OFB keystream symmetry
// ============================================================================

#[test]
fn test_ofb_observed_symmetry() {
    use lwc_crypto::KeystreamRecorder;

    for algorithm in Algorithm::ALL {
        let (key, iv) = random_key_nonce(algorithm);
        let plaintext = message(37);

        let mut encrypt_side = KeystreamRecorder::new();
        let sealed = algorithm
            .encrypt_ofb_observed(&plaintext, &key, &iv, Some(b"ad"), &mut encrypt_side)
            .unwrap();

        let mut decrypt_side = KeystreamRecorder::new();
        let opened = algorithm
            .decrypt_ofb_observed(
                &sealed.ciphertext,
                &key,
                &iv,
                &sealed.tag,
                Some(b"ad"),
                &mut decrypt_side,
            )
            .unwrap();

        assert_eq!(opened, plaintext);
        assert_eq!(encrypt_side.blocks(), decrypt_side.blocks());
        assert_eq!(encrypt_side.blocks().len(), 5);

        for (block, (p, c)) in encrypt_side
            .blocks()
            .iter()
            .zip(plaintext.chunks(8).zip(sealed.ciphertext.chunks(8)))
        {
            let xored: Vec<u8> = p.iter().zip(c).map(|(a, b)| a ^ b).collect();
            assert_eq!(&xored, block);
        }
    }
}

// ============================================================================
// File integrity
// ============================================================================

fn temp_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_seal_verify_cycle() {
    for algorithm in Algorithm::ALL {
        let service = IntegrityService::new(algorithm);
        let (key, nonce) = random_key_nonce(algorithm);
        let content = message(150_000);
        let file = temp_file(&content);

        service.seal_file(file.path(), &key, &nonce).unwrap();
        assert!(service.verify_file(file.path(), &key, &nonce).unwrap());

        let mut sealed = std::fs::read(file.path()).unwrap();
        sealed[75_000] ^= 0x01;
        std::fs::write(file.path(), &sealed).unwrap();
        assert!(!service.verify_file(file.path(), &key, &nonce).unwrap());

        sealed[75_000] ^= 0x01;
        std::fs::write(file.path(), &sealed).unwrap();
        service.strip_extract(file.path()).unwrap();
        assert_eq!(std::fs::read(file.path()).unwrap(), content);
    }
}

#[test]
fn test_generate_then_append_equals_seal() {
    let service = IntegrityService::new(Algorithm::Elephant);
    let (key, nonce) = random_key_nonce(Algorithm::Elephant);

    let manual = temp_file(b"two step");
    let extract = service.generate_extract(manual.path(), &key, &nonce).unwrap();
    service.append_extract(manual.path(), &extract).unwrap();

    let sealed = temp_file(b"two step");
    service.seal_file(sealed.path(), &key, &nonce).unwrap();

    assert_eq!(
        std::fs::read(manual.path()).unwrap(),
        std::fs::read(sealed.path()).unwrap()
    );
}

#[test]
fn test_unsealed_short_file_is_truncated_error() {
    let service = IntegrityService::new(Algorithm::Elephant);
    let (key, nonce) = random_key_nonce(Algorithm::Elephant);
    let file = temp_file(b"tiny");
    assert!(matches!(
        service.verify_file(file.path(), &key, &nonce),
        Err(IntegrityError::Truncated { .. })
    ));
}
