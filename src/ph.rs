//! PH: the block-compression primitive.
//!
//! A block is an unordered sequence of `K/2` pairs of 64-bit words. Each
//! pair is XOR-masked with two key words and carry-lessly multiplied;
//! the `K/2` products are XOR-accumulated into a 128-bit register seeded
//! with the caller's seed. This module provides the two entry points
//! UMASH's length classes need: a full, exactly-sized block, and a
//! final block that may be as short as one byte.

use crate::clmul::clmul64;
use crate::{BLOCK_SIZE, K};

/// The 128-bit result of compressing one block, as its low and high
/// 64-bit halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhResult {
    pub bits: [u64; 2],
}

#[inline]
fn read_le_u64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(bytes[..8].try_into().unwrap())
}

/// Compresses one full, exactly `BLOCK_SIZE`-byte block against `key`.
///
/// `block` need not be aligned: all word loads go through
/// [`u64::from_le_bytes`], which tolerates arbitrary byte offsets.
pub fn full_block(key: &[u64; K], seed: u64, block: &[u8; BLOCK_SIZE]) -> PhResult {
    let mut acc = [seed, 0u64];

    let mut i = 0;
    while i < K {
        let x = read_le_u64(&block[i * 8..]) ^ key[i];
        let y = read_le_u64(&block[(i + 1) * 8..]) ^ key[i + 1];

        let (lo, hi) = clmul64(x, y);
        acc[0] ^= lo;
        acc[1] ^= hi;

        i += 2;
    }

    PhResult { bits: acc }
}

/// Compresses a final, possibly short block.
///
/// `chunk` is the tail of the input starting at this block's base, of
/// length `n` (`1 <= n <= BLOCK_SIZE`); only its first
/// `end_full_pairs * 8` bytes are read as full pairs. `tail16` is the
/// last 16 bytes of the *entire* original input — which, because this
/// is the final block, is the same as `chunk`'s own last 16 bytes when
/// `n >= 16`, but reaches back into already-processed data when
/// `n < 16`. That overlap is intentional (§4.2): repeated tail bytes
/// still contribute non-destructively, because the key words XORed in
/// at the overlapping position differ from the ones used the first
/// time those bytes were read.
pub fn last_block(key: &[u64; K], seed: u64, chunk: &[u8], tail16: &[u8; 16]) -> PhResult {
    let n = chunk.len();
    debug_assert!((1..=BLOCK_SIZE).contains(&n));

    let remaining = 1 + ((n - 1) % 16);
    let end_full_pairs = (n - remaining) / 8;

    let mut acc = [seed, 0u64];

    let mut i = 0;
    while i + 1 < end_full_pairs {
        let x = read_le_u64(&chunk[i * 8..]) ^ key[i];
        let y = read_le_u64(&chunk[(i + 1) * 8..]) ^ key[i + 1];

        let (lo, hi) = clmul64(x, y);
        acc[0] ^= lo;
        acc[1] ^= hi;

        i += 2;
    }

    let x = read_le_u64(&tail16[0..8]) ^ key[i];
    let y = read_le_u64(&tail16[8..16]) ^ key[i + 1];
    let (lo, hi) = clmul64(x, y);
    acc[0] ^= lo;
    acc[1] ^= hi;

    PhResult { bits: acc }
}
