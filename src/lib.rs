//! UMASH: a keyed, almost-universal string hash
//!
//! This crate implements the computational core of UMASH — a string hash
//! that takes a prepared key schedule ([`Params`]) and a 64-bit seed and
//! maps an arbitrary byte string to a 64-bit digest, with a mathematically
//! characterised collision probability. A [`fingerprint`] entry point
//! derives two nearly-independent digests from the same key schedule at
//! once, for callers that want a 128-bit tag instead of a 64-bit one.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level hashing API. All components are
//! designed to be dependency-free, explicit in their semantics, and
//! suitable for performance-sensitive code that still wants to understand
//! exactly what it is running.
//!
//! # Module overview
//!
//! - [`arith`]
//!   Arithmetic in the ring R = ℤ/(2⁶⁴ − 8), with a one-shot final
//!   reduction to the Mersenne prime p = 2⁶¹ − 1. Every other module
//!   builds on these four operations.
//!
//! - [`clmul`]
//!   The carry-less-multiply capability [`ph`] needs on every block: an
//!   auto-detected hardware backend and a constant-time portable
//!   fallback behind one call.
//!
//! - [`ph`]
//!   The PH block-compression primitive: mixes a 256-byte block (or a
//!   shorter final block) with 32 key words into a 128-bit result.
//!
//! - `length` (private; re-exported through [`hash`] and [`fingerprint`])
//!   The three length-class routines — short (0–8 bytes), medium
//!   (9–16 bytes), long (>16 bytes) — that turn key material, a seed,
//!   and data into a 64-bit digest.
//!
//! - [`finalize`]
//!   The splitmix-style output mixer applied to the long-path
//!   accumulator before it is returned.
//!
//! - [`params`]
//!   [`Params`], the validated, immutable key schedule, and the
//!   [`prepare`] sanitiser that turns a buffer of arbitrary bytes into
//!   one.
//!
//! # Design goals
//!
//! - No heap allocations anywhere in the hashing path
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics shared across implementations that
//!   persist the same [`Params`] byte layout
//! - Clear separation between the pure hashing core and key preparation
//!
//! This crate does not provide a streaming/incremental `Hasher` surface,
//! a CLI, or a source of random key material: those are collaborators
//! outside this core, left to the host application.

pub mod arith;
pub mod clmul;
mod finalize;
mod length;
pub mod params;
pub mod ph;

pub use params::{Params, PrepareError};

/// Number of PH key words consumed by one hash evaluation.
pub const K: usize = 32;

/// Word offset between the primary and Toeplitz-shifted PH key windows.
///
/// Frozen at 8: `ph` holds `K + TOEPLITZ_SHIFT` = 40 words total, so the
/// shifted window (used by `which = true` and by [`fingerprint`]'s second
/// digest) still spans a full `K`-word range while only donating 8 words
/// of overlap with the primary window.
pub const TOEPLITZ_SHIFT: usize = 8;

/// Size, in bytes, of one PH block (`8 * K`).
pub const BLOCK_SIZE: usize = 8 * K;

/// Total PH key words a [`Params`] carries (`K + TOEPLITZ_SHIFT`).
pub const PH_WORDS: usize = K + TOEPLITZ_SHIFT;

/// Computes a 64-bit UMASH digest of `data`.
///
/// `which` selects which of the two nearly-independent keyed hashes to
/// compute: `false` uses the primary polynomial key and PH window,
/// `true` uses the Toeplitz-shifted window and the second polynomial
/// key. [`fingerprint`] simply calls this twice.
///
/// This function is total: every `(seed, which, data)` combination
/// produces a digest, including `data = &[]`.
pub fn hash(params: &Params, seed: u64, which: bool, data: &[u8]) -> u64 {
    let ph = params.ph_window(which);
    let poly = params.poly(which);
    length::dispatch(ph, poly, seed, data)
}

/// Computes a 128-bit UMASH fingerprint of `data`, as two nearly
/// independent 64-bit halves.
///
/// `fingerprint(params, seed, data) == (hash(params, seed, false, data),
/// hash(params, seed, true, data))` always holds: this function exists
/// purely so callers who want both halves don't need to spell out the
/// two calls themselves.
pub fn fingerprint(params: &Params, seed: u64, data: &[u8]) -> (u64, u64) {
    (
        hash(params, seed, false, data),
        hash(params, seed, true, data),
    )
}
