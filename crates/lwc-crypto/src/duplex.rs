//! Generic duplex-sponge AEAD core.
//!
//! The operations here are parameterized by a [`Scheme`] and are shared by
//! both engines and by the chaining modes:
//!
//! - [`initialize`] - load `key || nonce`, run the full-round permutation
//! - [`absorb`] - XOR rate-sized blocks into the state, domain-separate the last one
//! - [`squeeze`] - read rate-sized blocks out of the state
//! - [`encrypt`] / [`decrypt`] - the single-call AEAD
//!
//! ## Duplex pass
//!
//! Each message block is XORed with the leading `RATE` bytes of the state.
//! The block's plaintext (true length, never padding beyond it) is then fed
//! back into the same bytes before the reduced-round permutation, which ties
//! every later keystream byte to all earlier plaintext.

use crate::CryptoError;
use crate::aead::AuthenticatedData;
use crate::constant_time::{verify_tag, xor_into};
use crate::scheme::{Scheme, TAG_STATE_SEPARATOR, TagStrategy};
use crate::state::State;
use zeroize::Zeroizing;

/// Duplex state of scheme `S`.
pub type SchemeState<S> = State<<S as Scheme>::Permutation>;

/// Direction of a duplex pass; selects which side is fed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Input is plaintext.
    Encrypt,
    /// Input is ciphertext.
    Decrypt,
}

pub(crate) fn check_key<S: Scheme>(key: &[u8]) -> Result<(), CryptoError> {
    CryptoError::check_len("key", S::KEY_SIZE, key.len())
}

pub(crate) fn check_nonce<S: Scheme>(
    parameter: &'static str,
    nonce: &[u8],
) -> Result<(), CryptoError> {
    CryptoError::check_len(parameter, S::NONCE_SIZE, nonce.len())
}

pub(crate) fn check_tag<S: Scheme>(tag: &[u8]) -> Result<(), CryptoError> {
    CryptoError::check_len("tag", S::TAG_SIZE, tag.len())
}

/// Load the concatenation of `parts` and run the full-round permutation.
pub(crate) fn initialize_with<S: Scheme>(parts: &[&[u8]]) -> Result<SchemeState<S>, CryptoError> {
    let mut state = SchemeState::<S>::load(parts)?;
    state.permute(S::FULL_ROUNDS);
    Ok(state)
}

/// Fresh state for `key || nonce`.
///
/// Lengths are not checked here; callers validate against the scheme first.
///
/// # Errors
///
/// Returns [`CryptoError::MalformedInput`] if `key || nonce` exceeds the state.
pub fn initialize<S: Scheme>(key: &[u8], nonce: &[u8]) -> Result<SchemeState<S>, CryptoError> {
    initialize_with::<S>(&[key, nonce])
}

/// Absorb `data` in `RATE`-byte blocks.
///
/// The final block also XORs `domain` into the last byte of the state.
/// Every block is followed by the reduced-round permutation. Empty `data`
/// leaves the state untouched.
pub fn absorb<S: Scheme>(state: &mut SchemeState<S>, data: &[u8], domain: u8) {
    let mut blocks = data.chunks(S::RATE).peekable();
    while let Some(block) = blocks.next() {
        state.xor_leading(block);
        if blocks.peek().is_none() {
            state.xor_last_byte(domain);
        }
        state.permute(S::REDUCED_ROUNDS);
    }
}

/// Squeeze `len` bytes, permuting between (not after) `RATE`-byte reads.
#[must_use]
pub fn squeeze<S: Scheme>(state: &mut SchemeState<S>, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let mut blocks = out.chunks_mut(S::RATE).peekable();
    while let Some(block) = blocks.next() {
        state.read_leading(block);
        if blocks.peek().is_some() {
            state.permute(S::REDUCED_ROUNDS);
        }
    }
    out
}

/// Run the duplex over `input`, returning the transformed bytes.
pub(crate) fn duplex_pass<S: Scheme>(
    state: &mut SchemeState<S>,
    input: &[u8],
    direction: Direction,
) -> Zeroizing<Vec<u8>> {
    let mut output = Zeroizing::new(input.to_vec());
    let mut buffer = Zeroizing::new(vec![0u8; S::RATE]);

    for block in output.chunks_mut(S::RATE) {
        let keystream = &mut buffer[..block.len()];
        state.read_leading(keystream);

        if direction == Direction::Encrypt {
            state.xor_leading(block);
        }
        xor_into(block, keystream);
        if direction == Direction::Decrypt {
            state.xor_leading(block);
        }

        state.permute(S::REDUCED_ROUNDS);
    }
    output
}

/// Initialize, absorb associated data and run one duplex pass.
///
/// This is the cipher half of [`encrypt`]/[`decrypt`] without any tag work;
/// the chaining modes use it for their per-block transforms.
pub(crate) fn keystream_pass<S: Scheme>(
    key: &[u8],
    nonce: &[u8],
    ad: Option<&[u8]>,
    input: &[u8],
    direction: Direction,
) -> Result<(Zeroizing<Vec<u8>>, SchemeState<S>), CryptoError> {
    let mut state = initialize::<S>(key, nonce)?;
    absorb::<S>(&mut state, ad.unwrap_or_default(), S::AD_DOMAIN);
    let output = duplex_pass::<S>(&mut state, input, direction);
    Ok((output, state))
}

/// Tag from a state keyed with `nonce || 0x02` over the ciphertext.
///
/// Associated data only reaches the tag through the ciphertext it shaped.
fn independent_tag<S: Scheme>(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let mut tag_state = initialize_with::<S>(&[key, nonce, &[TAG_STATE_SEPARATOR]])?;
    absorb::<S>(&mut tag_state, ciphertext, S::TAG_DOMAIN);
    Ok(squeeze::<S>(&mut tag_state, S::TAG_SIZE))
}

/// Tag from the lock-step state after the duplex pass.
///
/// The lock-step tag state starts as a copy of the pre-encryption state and
/// receives the same feedback, so it always equals the duplex state.
fn lockstep_tag<S: Scheme>(state: &SchemeState<S>) -> Vec<u8> {
    let mut tag = vec![0u8; S::TAG_SIZE];
    state.read_leading(&mut tag);
    tag
}

fn release(mut buffer: Zeroizing<Vec<u8>>) -> Vec<u8> {
    core::mem::take(&mut *buffer)
}

/// Encrypt `plaintext` under `key` and `nonce`, authenticating `ad`.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameter`] if the key or nonce length is wrong.
pub fn encrypt<S: Scheme>(
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    ad: Option<&[u8]>,
) -> Result<AuthenticatedData, CryptoError> {
    check_key::<S>(key)?;
    check_nonce::<S>("nonce", nonce)?;

    let (ciphertext, state) = keystream_pass::<S>(key, nonce, ad, plaintext, Direction::Encrypt)?;
    let ciphertext = release(ciphertext);

    let tag = match S::TAG_STRATEGY {
        TagStrategy::Independent => independent_tag::<S>(key, nonce, &ciphertext)?,
        TagStrategy::Lockstep => lockstep_tag::<S>(&state),
    };

    Ok(AuthenticatedData { ciphertext, tag })
}

/// Decrypt `ciphertext` and verify `tag`.
///
/// Plaintext is only returned after the tag comparison succeeds; on failure
/// the recovered bytes are wiped.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidParameter`] for a wrong key, nonce or tag
/// length and [`CryptoError::AuthenticationFailure`] if the tag does not match.
pub fn decrypt<S: Scheme>(
    ciphertext: &[u8],
    key: &[u8],
    nonce: &[u8],
    tag: &[u8],
    ad: Option<&[u8]>,
) -> Result<Vec<u8>, CryptoError> {
    check_key::<S>(key)?;
    check_nonce::<S>("nonce", nonce)?;
    check_tag::<S>(tag)?;

    match S::TAG_STRATEGY {
        TagStrategy::Independent => {
            let expected = independent_tag::<S>(key, nonce, ciphertext)?;
            if !verify_tag(&expected, tag) {
                return Err(CryptoError::AuthenticationFailure);
            }
            let (plaintext, _) =
                keystream_pass::<S>(key, nonce, ad, ciphertext, Direction::Decrypt)?;
            Ok(release(plaintext))
        }
        TagStrategy::Lockstep => {
            let (plaintext, state) =
                keystream_pass::<S>(key, nonce, ad, ciphertext, Direction::Decrypt)?;
            if !verify_tag(&lockstep_tag::<S>(&state), tag) {
                return Err(CryptoError::AuthenticationFailure);
            }
            Ok(release(plaintext))
        }
    }
}
