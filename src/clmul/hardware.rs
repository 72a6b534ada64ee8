//! `x86_64` hardware backend for 64×64→128-bit carry-less multiplication,
//! via the `PCLMULQDQ` instruction.

use core::arch::x86_64::{_mm_clmulepi64_si128, _mm_extract_epi64, _mm_set_epi64x};

/// Attempts the hardware path; returns `None` if the running CPU does
/// not advertise `pclmulqdq`, in which case the caller falls back to
/// [`super::portable::clmul64`].
#[inline]
pub(crate) fn clmul64(a: u64, b: u64) -> Option<(u64, u64)> {
    if !is_x86_feature_detected!("pclmulqdq") || !is_x86_feature_detected!("sse2") {
        return None;
    }

    // SAFETY: both required features were just confirmed present.
    Some(unsafe { clmul64_impl(a, b) })
}

#[target_feature(enable = "pclmulqdq,sse2")]
unsafe fn clmul64_impl(a: u64, b: u64) -> (u64, u64) {
    unsafe {
        let va = _mm_set_epi64x(0, a as i64);
        let vb = _mm_set_epi64x(0, b as i64);
        let product = _mm_clmulepi64_si128::<0x00>(va, vb);

        let lo = _mm_extract_epi64::<0>(product) as u64;
        let hi = _mm_extract_epi64::<1>(product) as u64;
        (lo, hi)
    }
}
