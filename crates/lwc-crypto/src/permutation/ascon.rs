//! Ascon-style permutation used by ISAP.

use super::{MAX_ROUNDS, Permutation};

/// Round constants, XORed into lane 2.
const ROUND_CONSTANTS: [u64; MAX_ROUNDS] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Five-lane Ascon-style permutation.
///
/// ISAP runs it with 12 rounds for initialization and 6 rounds between
/// duplex blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsapPermutation;

#[inline]
fn round(s: &mut [u64; 5], rc: u64) {
    s[2] ^= rc;

    // Substitution layer
    let t = [s[0] ^ s[4], s[1] ^ s[0], s[2] ^ s[1], s[3] ^ s[2], s[4] ^ s[3]];
    for i in 0..5 {
        s[i] ^= t[(i + 1) % 5];
    }

    // Linear diffusion
    s[0] = s[0].rotate_left(19) ^ s[0].rotate_left(28);
    s[1] = s[1].rotate_left(61) ^ s[1].rotate_left(39);
    s[2] = s[2].rotate_left(1) ^ s[2].rotate_left(6);
    s[3] = s[3].rotate_left(10) ^ s[3].rotate_left(17);
    s[4] = s[4].rotate_left(7) ^ s[4].rotate_left(41);
}

impl Permutation for IsapPermutation {
    type Lanes = [u64; 5];

    const LANES: usize = 5;
    const NAME: &'static str = "isap-p";

    fn permute(lanes: &mut Self::Lanes, rounds: usize) {
        debug_assert!(rounds <= MAX_ROUNDS, "at most {MAX_ROUNDS} rounds");
        for &rc in ROUND_CONSTANTS.iter().take(rounds) {
            round(lanes, rc);
        }
    }
}
