//! The long length-class routine: more than 16 input bytes.
//!
//! Walks `data` in [`BLOCK_SIZE`]-byte blocks, compressing each with
//! [`ph::full_block`] and folding the 128-bit result into a Horner
//! accumulator over `poly`; the final (possibly partial) block goes
//! through [`ph::last_block`] instead, so it may be as short as one
//! byte without ever reading outside `data`.

use crate::arith::horner_double_update;
use crate::finalize;
use crate::ph;
use crate::{BLOCK_SIZE, K};

/// Hashes `data` (`data.len() > 16`) under `ph`, `poly = (f_squared, f)`,
/// and `seed`.
pub(crate) fn hash(ph_key: &[u64; K], poly: (u64, u64), seed: u64, data: &[u8]) -> u64 {
    let n = data.len();
    debug_assert!(n > 16);

    let (m0, m1) = poly;
    let tail16: [u8; 16] = data[n - 16..].try_into().unwrap();

    let mut acc = 0u64;
    let mut remaining = data;

    while remaining.len() > BLOCK_SIZE {
        let block: &[u8; BLOCK_SIZE] = remaining[..BLOCK_SIZE].try_into().unwrap();
        let res = ph::full_block(ph_key, seed, block);
        acc = horner_double_update(acc, m0, m1, res.bits[0], res.bits[1]);
        remaining = &remaining[BLOCK_SIZE..];
    }

    let seed_prime = seed ^ (remaining.len() as u64 & 0xFF);
    let res = ph::last_block(ph_key, seed_prime, remaining, &tail16);
    acc = horner_double_update(acc, m0, m1, res.bits[0], res.bits[1]);

    finalize::mix(acc)
}
