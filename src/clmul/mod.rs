//! Carry-less (GF(2) polynomial) multiplication of two 64-bit operands.
//!
//! [`crate::ph`] needs a 64×64→128-bit carry-less multiply on every pair
//! of words it compresses. This module is the one seam where that
//! portability assumption becomes concrete: an auto-detected hardware
//! backend on `x86_64`, and a constant-time portable fallback used
//! everywhere else — and whenever the `portable-clmul` feature forces
//! it, which is useful for exercising the fallback's correctness on a
//! machine that does have the instruction.
//!
//! Neither backend is exposed directly: callers always go through
//! [`clmul64`], which picks one at runtime.

#[cfg(all(target_arch = "x86_64", not(feature = "portable-clmul")))]
mod hardware;
mod portable;

/// Returns the 128-bit carry-less product of `a` and `b`, as `(low,
/// high)` 64-bit halves.
///
/// On `x86_64`, this dispatches to the hardware `PCLMULQDQ`
/// instruction when the running CPU advertises it; otherwise (and on
/// every other target, and whenever `portable-clmul` is enabled) it
/// falls back to [`portable::clmul64`], which is slower but behaves
/// identically for every input.
#[inline]
pub fn clmul64(a: u64, b: u64) -> (u64, u64) {
    #[cfg(all(target_arch = "x86_64", not(feature = "portable-clmul")))]
    {
        if let Some(result) = hardware::clmul64(a, b) {
            return result;
        }
    }

    portable::clmul64(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_portable_reference() {
        let cases: &[(u64, u64)] = &[
            (0, 0),
            (1, 1),
            (u64::MAX, 1),
            (1, u64::MAX),
            (u64::MAX, u64::MAX),
            (0x8000_0000_0000_0000, 0x8000_0000_0000_0000),
            (0xbf58476d1ce4e5b9, 0x94d049bb133111eb),
        ];
        for &(a, b) in cases {
            assert_eq!(clmul64(a, b), portable::clmul64(a, b), "a={a:#x} b={b:#x}");
        }
    }

    #[test]
    fn is_commutative() {
        let cases: &[(u64, u64)] = &[(0x1234_5678, 0x9abc_def0), (u64::MAX, 0), (7, 13)];
        for &(a, b) in cases {
            assert_eq!(clmul64(a, b), clmul64(b, a), "a={a:#x} b={b:#x}");
        }
    }

    #[test]
    fn zero_is_absorbing() {
        assert_eq!(clmul64(0, 0x1234_5678_9abc_def0), (0, 0));
        assert_eq!(clmul64(0x1234_5678_9abc_def0, 0), (0, 0));
    }

    #[test]
    fn one_is_identity() {
        let a = 0x1234_5678_9abc_def0;
        assert_eq!(clmul64(a, 1), (a, 0));
        assert_eq!(clmul64(1, a), (a, 0));
    }
}
