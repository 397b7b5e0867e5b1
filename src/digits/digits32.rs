//! Digit counting for `u32`.

use crate::{
    tables::{DIGITS32_BIASED, POW10},
    util,
};

/// Returns the number of decimal digits in `x`.
///
/// The result is in [1, 10].
pub const fn ladder(x: u32) -> u32 {
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
/// This is branch free: the highest set bit of `x` selects a
/// biased digit count, and adding `x` to it carries into the
/// upper half exactly when `x` reaches the next power of 10.
/// See [`DIGITS32_BIASED`].
pub const fn table(x: u32) -> u32 {
    let b = util::log2_32(x);
    #[allow(clippy::indexing_slicing, reason = "`b` is in [0, 31]")]
    let bias = DIGITS32_BIASED[b as usize];
    ((x as u64 + bias) >> 32) as u32
}

/// Returns the number of decimal digits in `x`.
///
/// It sets bit `k` of a mask for the decade `x` falls in and
/// returns the index of that bit. Each decade test uses a
/// short-circuiting `&&`.
#[allow(clippy::manual_range_contains)]
pub const fn mask(x: u32) -> u32 {
    let mask = (((x < 10) as u32) << 1)
        | (((x >= 10 && x < 100) as u32) << 2)
        | (((x >= 100 && x < 1_000) as u32) << 3)
        | (((x >= 1_000 && x < 10_000) as u32) << 4)
        | (((x >= 10_000 && x < 100_000) as u32) << 5)
        | (((x >= 100_000 && x < 1_000_000) as u32) << 6)
        | (((x >= 1_000_000 && x < 10_000_000) as u32) << 7)
        | (((x >= 10_000_000 && x < 100_000_000) as u32) << 8)
        | (((x >= 100_000_000 && x < 1_000_000_000) as u32) << 9)
        | (((x >= 1_000_000_000) as u32) << 10);
    util::log2_32(mask)
}

/// Like [`mask`], but each decade test combines its two
/// comparisons with a non-short-circuiting `&`.
pub const fn mask_bitwise(x: u32) -> u32 {
    let mask = (((x < 10) as u32) << 1)
        | ((((x >= 10) as u32) & ((x < 100) as u32)) << 2)
        | ((((x >= 100) as u32) & ((x < 1_000) as u32)) << 3)
        | ((((x >= 1_000) as u32) & ((x < 10_000) as u32)) << 4)
        | ((((x >= 10_000) as u32) & ((x < 100_000) as u32)) << 5)
        | ((((x >= 100_000) as u32) & ((x < 1_000_000) as u32)) << 6)
        | ((((x >= 1_000_000) as u32) & ((x < 10_000_000) as u32)) << 7)
        | ((((x >= 10_000_000) as u32) & ((x < 100_000_000) as u32)) << 8)
        | ((((x >= 100_000_000) as u32) & ((x < 1_000_000_000) as u32)) << 9)
        | (((x >= 1_000_000_000) as u32) << 10);
    util::log2_32(mask)
}

/// Returns the number of decimal digits in `x`.
///
/// It estimates `log10(x)` from the bit length of `x` and
/// corrects the estimate with one comparison.
pub const fn estimate(mut x: u32) -> u32 {
    // Ensure that `x` is non-zero so that `estimate(0) == 1`.
    //
    // `x|1` sets the lowest bit, which cannot change the bit
    // length of a non-zero `x`, and the largest integer less
    // than a power of 10 is odd, so `x >= p` is unaffected.
    x |= 1;

    // 1233/4096 ~= log10(2)
    let r = ((u32::BITS - x.leading_zeros() + 1) * 1233) >> 12;
    #[allow(clippy::indexing_slicing, reason = "`r` is in [0, 9]")]
    let p = POW10[r as usize];
    r + (x as u64 >= p) as u32
}

#[cfg(test)]
mod tests {
    use rand::random;

    use super::*;
    use crate::digits::KERNELS32;

    fn boundaries() -> impl Iterator<Item = u32> {
        (0..=9u32)
            .map(|n| 10u32.pow(n))
            .flat_map(|p| [p - 1, p, p + 1])
            .chain([0, 1, u32::MAX - 1, u32::MAX])
    }

    #[test]
    fn test_known() {
        for (name, f) in KERNELS32 {
            assert_eq!(f(0), 1, "{name}");
            assert_eq!(f(9), 1, "{name}");
            assert_eq!(f(10), 2, "{name}");
            assert_eq!(f(999_999_999), 9, "{name}");
            assert_eq!(f(1_000_000_000), 10, "{name}");
            assert_eq!(f(u32::MAX), 10, "{name}");
        }
    }

    #[test]
    fn test_boundaries() {
        let mut buf = itoa::Buffer::new();
        for (name, f) in KERNELS32 {
            for x in boundaries() {
                let got = f(x);
                let want = buf.format(x).len() as u32;
                assert_eq!(got, want, "{name}: #{x}");
            }
        }
    }

    #[test]
    fn test_powers_of_two() {
        let mut buf = itoa::Buffer::new();
        for (name, f) in KERNELS32 {
            for b in 0..u32::BITS {
                let lo = 1u32 << b;
                let hi = lo | (lo - 1);
                for x in [lo, hi] {
                    let got = f(x);
                    let want = buf.format(x).len() as u32;
                    assert_eq!(got, want, "{name}: #{x}");
                }
            }
        }
    }

    #[test]
    fn test_random() {
        let mut buf = itoa::Buffer::new();
        for _ in 0..100_000 {
            let x: u32 = random();
            let want = buf.format(x).len() as u32;
            for (name, f) in KERNELS32 {
                assert_eq!(f(x), want, "{name}: #{x}");
            }
        }
    }

    #[test]
    #[cfg(feature = "slow-tests")]
    fn test_exhaustive() {
        let mut buf = itoa::Buffer::new();
        for x in 0..=u32::MAX {
            let want = buf.format(x).len() as u32;
            for (name, f) in KERNELS32 {
                assert_eq!(f(x), want, "{name}: #{x}");
            }
        }
    }
}
