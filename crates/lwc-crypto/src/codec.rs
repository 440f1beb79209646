//! Byte/word conversion for permutation states.
//!
//! States are arrays of 64-bit lanes. Byte offset `i` of a state is byte
//! `i % 8` of lane `i / 8` in big-endian order, so the first byte of the
//! state is the most significant byte of lane 0. Short inputs are
//! zero-padded on the right.

use crate::CryptoError;

/// Bytes per state lane.
pub const WORD_BYTES: usize = 8;

#[inline]
fn locate(offset: usize) -> (usize, u32) {
    let shift = 56 - 8 * (offset % WORD_BYTES) as u32;
    (offset / WORD_BYTES, shift)
}

/// Load `data` into `N` big-endian words, zero-padding the tail.
///
/// # Errors
///
/// Returns [`CryptoError::MalformedInput`] if `data` is longer than `8 * N`.
pub fn words_from_bytes<const N: usize>(data: &[u8]) -> Result<[u64; N], CryptoError> {
    let mut words = [0u64; N];
    load_bytes(&mut words, data)?;
    Ok(words)
}

/// Overwrite the leading bytes of `words` with `data`; later bytes are untouched.
///
/// # Errors
///
/// Returns [`CryptoError::MalformedInput`] if `data` does not fit.
pub fn load_bytes(words: &mut [u64], data: &[u8]) -> Result<(), CryptoError> {
    let capacity = words.len() * WORD_BYTES;
    if data.len() > capacity {
        return Err(CryptoError::MalformedInput(format!(
            "{} bytes do not fit a {capacity}-byte state",
            data.len()
        )));
    }

    for (index, chunk) in data.chunks(WORD_BYTES).enumerate() {
        // Low bits past the chunk survive; a full chunk keeps nothing.
        let keep = (1u64 << (64 - 8 * chunk.len() as u32)) - 1;
        words[index] = pack_block(chunk) | (words[index] & keep);
    }
    Ok(())
}

/// Serialize words to big-endian bytes.
#[must_use]
pub fn words_to_bytes(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// Pack up to 8 bytes into a word, big-endian, zero-padded on the right.
///
/// # Panics
///
/// Panics if `block` is longer than [`WORD_BYTES`].
#[must_use]
pub fn pack_block(block: &[u8]) -> u64 {
    assert!(block.len() <= WORD_BYTES, "block wider than a lane");
    let mut bytes = [0u8; WORD_BYTES];
    bytes[..block.len()].copy_from_slice(block);
    u64::from_be_bytes(bytes)
}

/// XOR one byte into the state at byte `offset`.
///
/// # Panics
///
/// Panics if `offset` is past the end of the state.
pub fn xor_byte(words: &mut [u64], offset: usize, byte: u8) {
    let (index, shift) = locate(offset);
    words[index] ^= u64::from(byte) << shift;
}

/// XOR `data` into the leading bytes of the state.
///
/// # Panics
///
/// Panics if `data` is longer than the state.
pub fn xor_bytes(words: &mut [u64], data: &[u8]) {
    for (index, chunk) in data.chunks(WORD_BYTES).enumerate() {
        words[index] ^= pack_block(chunk);
    }
}

/// Copy the leading bytes of the state into `out`.
///
/// # Panics
///
/// Panics if `out` is longer than the state.
pub fn read_bytes(words: &[u64], out: &mut [u8]) {
    for (index, chunk) in out.chunks_mut(WORD_BYTES).enumerate() {
        let bytes = words[index].to_be_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
