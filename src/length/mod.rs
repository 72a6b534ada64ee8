//! The three length-class hashing routines, and the dispatcher that
//! picks one by input length.
//!
//! - [`short`]: 0–8 bytes, no PH block at all — just a length-indexed
//!   key word and a splitmix-style mixer.
//! - [`medium`]: 9–16 bytes, a single overlapping PH pair.
//! - [`long`]: everything above 16 bytes, PH blocks chained through a
//!   Horner accumulator.

pub(crate) mod long;
pub(crate) mod medium;
pub(crate) mod short;

use crate::K;

/// Picks a length-class routine by `data.len()` and runs it.
///
/// `ph` is the caller's `K`-word PH key window (already shifted for
/// `which`, see [`crate::params::Params::ph_window`]); `poly` is
/// `(f_squared, f)` for the selected polynomial key.
pub(crate) fn dispatch(ph: &[u64; K], poly: (u64, u64), seed: u64, data: &[u8]) -> u64 {
    match data.len() {
        0..=8 => short::hash(ph, seed, data),
        9..=16 => medium::hash(ph, poly, seed, data),
        _ => long::hash(ph, poly, seed, data),
    }
}
