//! CBC-like chaining.
//!
//! The chain value starts as the first `RATE` bytes of the IV. Each block is
//! XORed with the chain value, run through the core keystream as a one-block
//! message under `(key, iv, ad)`, and the result becomes the next chain value.

use super::{TagAccumulator, check_key_iv};
use crate::CryptoError;
use crate::aead::AuthenticatedData;
use crate::constant_time::{verify_tag, xor_into};
use crate::duplex::{self, Direction, keystream_pass};
use crate::scheme::Scheme;
use zeroize::Zeroizing;

/// Encrypt `plaintext` in CBC-like mode.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameter`] on a wrong key or IV length.
pub fn encrypt<S: Scheme>(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
    ad: Option<&[u8]>,
) -> Result<AuthenticatedData, CryptoError> {
    check_key_iv::<S>(key, iv)?;

    let mut acc = TagAccumulator::<S>::new(key, iv, ad)?;
    let mut ciphertext = Vec::with_capacity(plaintext.len());
    let mut previous = iv[..S::RATE].to_vec();

    for block in plaintext.chunks(S::RATE) {
        let mut chained = Zeroizing::new(block.to_vec());
        xor_into(&mut chained, &previous[..block.len()]);

        let (emitted, _) = keystream_pass::<S>(key, iv, ad, &chained, Direction::Encrypt)?;
        acc.absorb_block(&emitted);
        ciphertext.extend_from_slice(&emitted);
        previous.clear();
        previous.extend_from_slice(&emitted);
    }

    Ok(AuthenticatedData {
        ciphertext,
        tag: acc.finalize(),
    })
}

/// Verify the mode tag, then decrypt CBC-like ciphertext.
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
) -> Result<Vec<u8>, CryptoError> {
    check_key_iv::<S>(key, iv)?;
    duplex::check_tag::<S>(tag)?;

    let expected = TagAccumulator::<S>::over(key, iv, ad, ciphertext)?.finalize();
    if !verify_tag(&expected, tag) {
        return Err(CryptoError::AuthenticationFailure);
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut previous = &iv[..S::RATE];

    for block in ciphertext.chunks(S::RATE) {
        let (mut chained, _) = keystream_pass::<S>(key, iv, ad, block, Direction::Decrypt)?;
        xor_into(&mut chained, &previous[..block.len()]);
        plaintext.extend_from_slice(&chained);
        previous = block;
    }

    Ok(plaintext)
}
