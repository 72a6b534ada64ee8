//! The medium length-class routine: 9–16 input bytes.
//!
//! A single PH-style pair (the first and last 8 bytes, which overlap
//! when `n < 16`) is XOR-masked with the first two PH key words and
//! carry-lessly multiplied; the result is folded through one Horner
//! update and the output mixer.

use crate::clmul::clmul64;
use crate::finalize;
use crate::arith::horner_double_update;
use crate::K;

/// Hashes `data` (`9 <= data.len() <= 16`) under `ph[0], ph[1]`, `poly =
/// (f_squared, f)`, and `seed`.
pub(crate) fn hash(ph: &[u64; K], poly: (u64, u64), seed: u64, data: &[u8]) -> u64 {
    let n = data.len();
    debug_assert!((9..=16).contains(&n));

    let (m0, m1) = poly;

    let x = u64::from_le_bytes(data[0..8].try_into().unwrap()) ^ ph[0];
    let y = u64::from_le_bytes(data[n - 8..n].try_into().unwrap()) ^ ph[1];
    let (lo, hi) = clmul64(x, y);

    let acc_lo = (seed ^ n as u64) ^ lo;
    let acc_hi = hi;

    finalize::mix(horner_double_update(0, m0, m1, acc_lo, acc_hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph() -> [u64; K] {
        let mut k = [0u64; K];
        for (i, slot) in k.iter_mut().enumerate() {
            *slot = (i as u64 + 1).wrapping_mul(0x1111_1111_1111_1111);
        }
        k
    }

    #[test]
    fn boundary_lengths_are_both_defined_and_differ() {
        let ph = ph();
        let poly = (7, 11);
        let a = hash(&ph, poly, 0, &[0u8; 9]);
        let b = hash(&ph, poly, 0, &[0u8; 16]);
        assert_ne!(a, b);
    }

    #[test]
    fn overlapping_tail_still_distinguishes_inputs() {
        let ph = ph();
        let poly = (7, 11);
        // n = 9: first and last 8-byte windows overlap in 7 bytes.
        let a = hash(&ph, poly, 0, b"AAAAAAAAA");
        let b = hash(&ph, poly, 0, b"AAAAAAAAB");
        assert_ne!(a, b);
    }

    #[test]
    fn is_deterministic() {
        let ph = ph();
        let poly = (7, 11);
        let data = b"0123456789abcd";
        assert_eq!(hash(&ph, poly, 3, data), hash(&ph, poly, 3, data));
    }
}
