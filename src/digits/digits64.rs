//! Digit counting for `u64`.

use crate::{
    tables::{LOG2_TO_DIGITS64, POW10, POW10_BY_DIGITS},
    util,
};

/// Returns the number of decimal digits in `x`.
///
/// Integers with more than 10 digits are split at 10^10 and
/// the upper limb is counted on its own.
///
/// The result is in [1, 20].
pub const fn ladder(x: u64) -> u32 {
    const LIMB: u64 = 10_000_000_000;

    if x >= LIMB {
        return ladder(x / LIMB) + 10;
    }

    if x >= 1_000_000_000 {
        return 10;
    }
    if x >= 100_000_000 {
        return 9;
    }
    if x >= 10_000_000 {
        return 8;
    }
    if x >= 1_000_000 {
        return 7;
    }
    if x >= 100_000 {
        return 6;
    }
    if x >= 10_000 {
        return 5;
    }
    if x >= 1_000 {
        return 4;
    }
    if x >= 100 {
        return 3;
    }
    if x >= 10 {
        return 2;
    }
    1
}

/// Returns the number of decimal digits in `x`.
///
/// The highest set bit of `x` gives a provisional digit count
/// that is either exact or one too large; a single comparison
/// against the matching power of 10 fixes it up.
pub const fn table(x: u64) -> u32 {
    let b = util::log2_64(x);
    #[allow(clippy::indexing_slicing, reason = "`b` is in [0, 63]")]
    let p = LOG2_TO_DIGITS64[b as usize];

    // SAFETY: Every entry in `LOG2_TO_DIGITS64` is in [1, 20].
    unsafe { util::assume(matches!(p, 1..=20)) };

    #[allow(clippy::indexing_slicing, reason = "`p` is in [1, 20]")]
    let lo = POW10_BY_DIGITS[p as usize];
    p as u32 - (x < lo) as u32
}

/// Returns the number of decimal digits in `x`.
///
/// It estimates `log10(x)` from the bit length of `x` and
/// corrects the estimate with one comparison.
pub const fn estimate(mut x: u64) -> u32 {
    // Ensure that `x` is non-zero so that `estimate(0) == 1`.
    //
    // This cannot cause an incorrect result because:
    //
    // - `x|1` sets the lowest bit, so it cannot increase the bit
    // length for a non-zero `x`.
    // - `x >= p` remains correct because the largest integer
    // less than `p` is 999...999, which is odd, meaning `x|1` is
    // a no-op.
    x |= 1;

    let r = ((util::bitlen_64(x) + 1) * 1233) / 4096;
    // `r` is in [0, 19], so it cannot panic.
    #[allow(clippy::indexing_slicing, reason = "`r` is in [0, 19]")]
    let p = POW10[r as usize];
    r + (x >= p) as u32
}
