//! Owned duplex state.

use crate::codec;
use crate::permutation::Permutation;
use crate::CryptoError;
use zeroize::{Zeroize, Zeroizing};

/// Lane array of a permutation, wiped on drop.
///
/// One `State` lives for a single encrypt/decrypt call.
pub struct State<P: Permutation> {
    lanes: P::Lanes,
}

impl<P: Permutation> State<P> {
    /// Load the concatenation of `parts` into a zero state.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedInput`] if the parts exceed the state width.
    pub fn load(parts: &[&[u8]]) -> Result<Self, CryptoError> {
        let material = Zeroizing::new(parts.concat());
        let mut state = Self {
            lanes: P::Lanes::default(),
        };
        codec::load_bytes(state.lanes.as_mut(), &material)?;
        Ok(state)
    }

    /// State width in bytes.
    #[must_use]
    pub const fn byte_len() -> usize {
        P::LANES * codec::WORD_BYTES
    }

    /// Apply `rounds` rounds of the permutation.
    pub fn permute(&mut self, rounds: usize) {
        P::permute(&mut self.lanes, rounds);
    }

    /// XOR `data` into the leading bytes.
    pub fn xor_leading(&mut self, data: &[u8]) {
        codec::xor_bytes(self.lanes.as_mut(), data);
    }

    /// XOR `byte` into the final byte of the state.
    pub fn xor_last_byte(&mut self, byte: u8) {
        codec::xor_byte(self.lanes.as_mut(), Self::byte_len() - 1, byte);
    }

    /// Copy the leading `out.len()` bytes.
    pub fn read_leading(&self, out: &mut [u8]) {
        codec::read_bytes(self.lanes.as_ref(), out);
    }

    /// Lane `index`.
    #[must_use]
    pub fn lane(&self, index: usize) -> u64 {
        self.lanes.as_ref()[index]
    }
}

impl<P: Permutation> Clone for State<P> {
    fn clone(&self) -> Self {
        Self {
            lanes: self.lanes.clone(),
        }
    }
}

impl<P: Permutation> Drop for State<P> {
    fn drop(&mut self) {
        self.lanes.zeroize();
    }
}

impl<P: Permutation> core::fmt::Debug for State<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("State")
            .field("permutation", &P::NAME)
            .finish_non_exhaustive()
    }
}
