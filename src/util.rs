use core::hint;

macro_rules! const_assert {
    ($($tt:tt)*) => {
        const _: () = ::core::assert!($($tt)*);
    }
}
pub(crate) use const_assert;

/// Hints to the compiler that `b` is always true.
///
/// # Safety
///
/// `b` must never be false.
#[track_caller]
pub(crate) const unsafe fn assume(b: bool) {
    debug_assert!(b);

    if !b {
        // SAFETY: See the function's safety docs.
        unsafe { hint::unreachable_unchecked() }
    }
}

/// Returns the index of the highest set bit in `x`.
///
/// It returns 0 for `x == 0`.
pub(crate) const fn log2_32(x: u32) -> u32 {
    // `x|1` cannot change the highest set bit of a non-zero
    // `x`, and it keeps `ilog2` from panicking on zero.
    (x | 1).ilog2()
}

/// Returns the index of the highest set bit in `x`.
///
/// It returns 0 for `x == 0`.
pub(crate) const fn log2_64(x: u64) -> u32 {
    (x | 1).ilog2()
}

/// Returns the minimum number of bits required to represent `x`.
///
/// It returns 0 for `x == 0`.
pub(crate) const fn bitlen_64(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

/// Returns the number of decimal digits in `x` the slow way.
///
/// Only used to build tables.
pub(crate) const fn naive_digits(mut x: u64) -> u32 {
    let mut n = 1;
    while x >= 10 {
        x /= 10;
        n += 1;
    }
    n
}
