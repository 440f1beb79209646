//! Block-chaining modes over the duplex core.
//!
//! Both modes process the message in `RATE`-byte blocks (the last block may
//! be short) and authenticate the emitted ciphertext with a mode-level
//! [`TagAccumulator`]. Inner per-block core calls never check tags.

pub mod cbc;
pub mod ofb;

use crate::CryptoError;
use crate::duplex::{self, SchemeState};
use crate::scheme::Scheme;
use zeroize::Zeroize;

/// Receives keystream blocks as a mode produces them.
///
/// Used by tests to check that encryption and decryption derive the same
/// keystream. Implementations must not perform I/O with the bytes.
pub trait KeystreamObserver {
    /// Called once per block with the keystream bytes actually used.
    fn on_keystream(&mut self, index: usize, keystream: &[u8]);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl KeystreamObserver for NoopObserver {
    #[inline]
    fn on_keystream(&mut self, _index: usize, _keystream: &[u8]) {}
}

/// Observer that keeps a copy of every block, wiped on drop.
#[derive(Debug, Default)]
pub struct KeystreamRecorder {
    blocks: Vec<Vec<u8>>,
}

impl KeystreamRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded blocks in order.
    #[must_use]
    pub fn blocks(&self) -> &[Vec<u8>] {
        &self.blocks
    }
}

impl KeystreamObserver for KeystreamRecorder {
    fn on_keystream(&mut self, index: usize, keystream: &[u8]) {
        debug_assert_eq!(index, self.blocks.len());
        self.blocks.push(keystream.to_vec());
    }
}

impl Drop for KeystreamRecorder {
    fn drop(&mut self) {
        self.blocks.zeroize();
    }
}

/// Mode-level tag state.
///
/// Keyed with `key || iv`, absorbs the associated data once and then every
/// ciphertext block with the tag domain.
pub(crate) struct TagAccumulator<S: Scheme> {
    state: SchemeState<S>,
}

impl<S: Scheme> TagAccumulator<S> {
    pub(crate) fn new(key: &[u8], iv: &[u8], ad: Option<&[u8]>) -> Result<Self, CryptoError> {
        let mut state = duplex::initialize::<S>(key, iv)?;
        duplex::absorb::<S>(&mut state, ad.unwrap_or_default(), S::AD_DOMAIN);
        Ok(Self { state })
    }

    /// Accumulator that has already absorbed all of `ciphertext`.
    pub(crate) fn over(
        key: &[u8],
        iv: &[u8],
        ad: Option<&[u8]>,
        ciphertext: &[u8],
    ) -> Result<Self, CryptoError> {
        let mut acc = Self::new(key, iv, ad)?;
        for block in ciphertext.chunks(S::RATE) {
            acc.absorb_block(block);
        }
        Ok(acc)
    }

    pub(crate) fn absorb_block(&mut self, block: &[u8]) {
        duplex::absorb::<S>(&mut self.state, block, S::TAG_DOMAIN);
    }

    pub(crate) fn finalize(mut self) -> Vec<u8> {
        duplex::squeeze::<S>(&mut self.state, S::TAG_SIZE)
    }
}

/// Validate key and IV lengths for a mode call.
pub(crate) fn check_key_iv<S: Scheme>(key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
    duplex::check_key::<S>(key)?;
    duplex::check_nonce::<S>("iv", iv)
}
