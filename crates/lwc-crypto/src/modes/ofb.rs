//! OFB-like keystream mode.
//!
//! The chain value starts as the IV. For each block the full core cipher is
//! applied to the chain value under `(key, iv, ad)`; its ciphertext is both
//! the block's keystream and the next chain value. Encryption and decryption
//! share [`apply_keystream`].

use super::{KeystreamObserver, TagAccumulator, check_key_iv};
use crate::CryptoError;
use crate::aead::AuthenticatedData;
use crate::constant_time::{verify_tag, xor_into};
use crate::duplex::{self, Direction, keystream_pass};
use crate::scheme::Scheme;
use zeroize::Zeroizing;

/// XOR `input` with the chained keystream.
fn apply_keystream<S: Scheme>(
    input: &[u8],
    key: &[u8],
    iv: &[u8],
    ad: Option<&[u8]>,
    observer: &mut dyn KeystreamObserver,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let mut output = Zeroizing::new(input.to_vec());
    let mut previous = Zeroizing::new(iv.to_vec());

    for (index, block) in output.chunks_mut(S::RATE).enumerate() {
        let (keystream, _) = keystream_pass::<S>(key, iv, ad, &previous, Direction::Encrypt)?;
        let used = &keystream[..block.len()];
        observer.on_keystream(index, used);
        xor_into(block, used);
        previous = keystream;
    }

    Ok(output)
}

/// Encrypt `plaintext` in OFB-like mode.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameter`] on a wrong key or IV length.
pub fn encrypt<S: Scheme>(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
    ad: Option<&[u8]>,
    observer: &mut dyn KeystreamObserver,
) -> Result<AuthenticatedData, CryptoError> {
    check_key_iv::<S>(key, iv)?;

    let ciphertext = apply_keystream::<S>(plaintext, key, iv, ad, observer)?.to_vec();
    let tag = TagAccumulator::<S>::over(key, iv, ad, &ciphertext)?.finalize();
    Ok(AuthenticatedData { ciphertext, tag })
}

/// Verify the mode tag, then decrypt OFB-like ciphertext.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameter`] on a wrong key, IV or tag
/// length and [`CryptoError::AuthenticationFailure`] on a tag mismatch.
pub fn decrypt<S: Scheme>(
    ciphertext: &[u8],
    key: &[u8],
    iv: &[u8],
    tag: &[u8],
    ad: Option<&[u8]>,
    observer: &mut dyn KeystreamObserver,
) -> Result<Vec<u8>, CryptoError> {
    check_key_iv::<S>(key, iv)?;
    duplex::check_tag::<S>(tag)?;

    let expected = TagAccumulator::<S>::over(key, iv, ad, ciphertext)?.finalize();
    if !verify_tag(&expected, tag) {
        return Err(CryptoError::AuthenticationFailure);
    }

    let mut plaintext = apply_keystream::<S>(ciphertext, key, iv, ad, observer)?;
    Ok(core::mem::take(&mut *plaintext))
}
