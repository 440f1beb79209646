//! Scheme parameterizations of the duplex core.
//!
//! Every constant that distinguishes Elephant from ISAP lives here as an
//! associated const of a zero-sized type, so the generic core in
//! [`crate::duplex`] is monomorphised per scheme.

use crate::permutation::{ElephantPermutation, IsapPermutation, Permutation};
use core::fmt::Debug;

/// Byte appended to the nonce when initializing the independent tag state.
pub const TAG_STATE_SEPARATOR: u8 = 0x02;

/// How a scheme derives its authentication tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagStrategy {
    /// A second state keyed with `nonce || 0x02` absorbs the associated
    /// data and ciphertext and is squeezed. Computable before decryption.
    Independent,
    /// The tag is read from a state that tracks the duplex state block for
    /// block. Only known after the full pass.
    Lockstep,
}

/// Parameters of one AEAD scheme.
pub trait Scheme: Copy + Default + Debug + Send + Sync + 'static {
    /// Permutation driving the duplex.
    type Permutation: Permutation;

    /// Scheme identifier, as accepted by [`crate::Algorithm`].
    const NAME: &'static str;
    /// Key length in bytes.
    const KEY_SIZE: usize;
    /// Nonce (and chaining IV) length in bytes.
    const NONCE_SIZE: usize;
    /// Tag length in bytes.
    const TAG_SIZE: usize;
    /// Bytes exchanged with the state per duplex step.
    const RATE: usize;
    /// Rounds used by initialization.
    const FULL_ROUNDS: usize;
    /// Rounds used between duplex blocks.
    const REDUCED_ROUNDS: usize;
    /// Domain byte closing associated data.
    const AD_DOMAIN: u8;
    /// Domain byte closing tag-state input.
    const TAG_DOMAIN: u8;
    /// Tag derivation.
    const TAG_STRATEGY: TagStrategy;
}

/// Elephant: Keccak-style permutation, lock-step tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Elephant;

impl Scheme for Elephant {
    type Permutation = ElephantPermutation;

    const NAME: &'static str = "elephant";
    const KEY_SIZE: usize = 16;
    const NONCE_SIZE: usize = 8;
    const TAG_SIZE: usize = 8;
    const RATE: usize = 8;
    const FULL_ROUNDS: usize = 12;
    const REDUCED_ROUNDS: usize = 12;
    const AD_DOMAIN: u8 = 0x01;
    const TAG_DOMAIN: u8 = 0x03;
    const TAG_STRATEGY: TagStrategy = TagStrategy::Lockstep;
}

/// ISAP: Ascon-style permutation, independent tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Isap;

impl Scheme for Isap {
    type Permutation = IsapPermutation;

    const NAME: &'static str = "isap";
    const KEY_SIZE: usize = 16;
    const NONCE_SIZE: usize = 16;
    const TAG_SIZE: usize = 16;
    const RATE: usize = 8;
    const FULL_ROUNDS: usize = 12;
    const REDUCED_ROUNDS: usize = 6;
    const AD_DOMAIN: u8 = 0x01;
    const TAG_DOMAIN: u8 = 0x03;
    const TAG_STRATEGY: TagStrategy = TagStrategy::Independent;
}
