//! Keccak-style permutation used by Elephant.

use super::{MAX_ROUNDS, Permutation};

/// Round constants, XORed into lane 0 by the ι step.
const ROUND_CONSTANTS: [u64; MAX_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
];

/// 5x5 lane Keccak-style permutation, lane `(x, y)` at index `x + 5y`.
///
/// Elephant uses 12 rounds everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElephantPermutation;

#[inline]
fn theta(s: &mut [u64; 25]) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = s[x] ^ s[x + 5] ^ s[x + 10] ^ s[x + 15] ^ s[x + 20];
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            s[x + 5 * y] ^= d;
        }
    }
}

/// Lane relocation and rotation.
///
/// A carried lane, seeded from `(1, 0)`, walks the rows `y = 1..5` in order;
/// each step displaces lane `((x + 3y) % 5, x)` and writes the carried value
/// there rotated by `x + 2y`.
#[inline]
fn rho_pi(s: &mut [u64; 25]) {
    let mut carried = s[1];
    for y in 1..5 {
        for x in 0..5 {
            let target = (x + 3 * y) % 5 + 5 * x;
            let displaced = s[target];
            s[target] = carried.rotate_left(((x + 2 * y) % 64) as u32);
            carried = displaced;
        }
    }
}

#[inline]
fn chi(s: &mut [u64; 25]) {
    for row in s.chunks_exact_mut(5) {
        let t = [row[0], row[1], row[2], row[3], row[4]];
        for x in 0..5 {
            row[x] = t[x] ^ (!t[(x + 1) % 5] & t[(x + 2) % 5]);
        }
    }
}

impl Permutation for ElephantPermutation {
    type Lanes = [u64; 25];

    const LANES: usize = 25;
    const NAME: &'static str = "elephant-p";

    fn permute(lanes: &mut Self::Lanes, rounds: usize) {
        debug_assert!(rounds <= MAX_ROUNDS, "at most {MAX_ROUNDS} rounds");
        for &rc in ROUND_CONSTANTS.iter().take(rounds) {
            theta(lanes);
            rho_pi(lanes);
            chi(lanes);
            // ι
            lanes[0] ^= rc;
        }
    }
}
