//! Fixed-width permutations driving the duplex constructions.
//!
//! - [`IsapPermutation`] - Ascon-style, 5 lanes (320 bits)
//! - [`ElephantPermutation`] - Keccak-style, 25 lanes (1600 bits)
//!
//! Round constant tables are part of each permutation's identity. Round `i`
//! of a call always uses entry `i` of the table, so a reduced-round call uses
//! the leading constants.

mod ascon;
mod keccak;

pub use ascon::IsapPermutation;
pub use keccak::ElephantPermutation;

use core::fmt::Debug;
use zeroize::Zeroize;

/// Number of entries in every round constant table.
pub const MAX_ROUNDS: usize = 12;

/// Round function over a fixed array of 64-bit lanes.
pub trait Permutation: Copy + Default + Debug + Send + Sync + 'static {
    /// Lane array the permutation operates on.
    type Lanes: AsRef<[u64]> + AsMut<[u64]> + Clone + Default + Zeroize + Send + Sync;

    /// Number of 64-bit lanes in the state.
    const LANES: usize;

    /// Human-readable name.
    const NAME: &'static str;

    /// Apply `rounds` rounds in place.
    ///
    /// `rounds` must not exceed [`MAX_ROUNDS`].
    fn permute(lanes: &mut Self::Lanes, rounds: usize);
}
