//! Constant-time tag verification and byte helpers.
//!
//! Tag checks must not leak where two tags first differ, so every
//! comparison goes through `subtle` rather than `==`.

use subtle::ConstantTimeEq;

/// Constant-time comparison of byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// Execution time depends only on slice length, not content.
#[must_use]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Compare a freshly computed tag against the one supplied by the caller.
///
/// Length is public (fixed per scheme), contents are not.
#[must_use]
#[inline(never)]
pub fn verify_tag(expected: &[u8], supplied: &[u8]) -> bool {
    ct_eq(expected, supplied)
}

/// XOR `mask` into the front of `target`, stopping at the shorter of the two.
pub fn xor_into(target: &mut [u8], mask: &[u8]) {
    for (t, m) in target.iter_mut().zip(mask) {
        *t ^= m;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq_same() {
        let a = [1u8; 32];
        let b = [1u8; 32];
        assert!(ct_eq(&a, &b));
    }

    #[test]
    fn test_ct_eq_different() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        assert!(!ct_eq(&a, &b));
    }

    #[test]
    fn test_ct_eq_different_lengths() {
        let a = [1u8; 16];
        let b = [1u8; 8];
        assert!(!ct_eq(&a, &b));
    }

    #[test]
    fn test_verify_tag_single_bit() {
        let expected = [0x5Au8; 16];
        for byte in 0..16 {
            for bit in 0..8 {
                let mut supplied = expected;
                supplied[byte] ^= 1 << bit;
                assert!(!verify_tag(&expected, &supplied));
            }
        }
        assert!(verify_tag(&expected, &expected));
    }

    #[test]
    fn test_verify_tag_empty() {
        assert!(verify_tag(&[], &[]));
        assert!(!verify_tag(&[], &[0]));
    }

    #[test]
    fn test_xor_into_truncates_to_target() {
        let mut target = [0x0Fu8; 3];
        xor_into(&mut target, &[0xF0; 8]);
        assert_eq!(target, [0xFF; 3]);

        let mut longer = [0u8; 4];
        xor_into(&mut longer, &[1, 2]);
        assert_eq!(longer, [1, 2, 0, 0]);
    }
}
