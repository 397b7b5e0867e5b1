//! Reference digit counters.
//!
//! These are slow and only exist to check (and benchmark
//! against) the kernels in [`digits`][crate::digits].

use super::math;

fn text<I: itoa::Integer>(x: I) -> u32 {
    let mut buf = itoa::Buffer::new();
    buf.format(x).len() as u32
}

/// Returns the length of `x` printed in base 10.
pub fn text8(x: u8) -> u32 {
    text(x)
}

/// Returns the length of `x` printed in base 10.
pub fn text16(x: u16) -> u32 {
    text(x)
}

/// Returns the length of `x` printed in base 10.
pub fn text32(x: u32) -> u32 {
    text(x)
}

/// Returns the length of `x` printed in base 10.
pub fn text64(x: u64) -> u32 {
    text(x)
}

/// Returns `ceil(log10(x + 1))`, or 1 for 0 and 1.
///
/// `x + 1` is computed in `f64`, which is exact for every
/// `u32`. There is no 64-bit version because `f64` cannot
/// tell `10^k - 1` from `10^k` for large `k`.
fn math(x: u32) -> u32 {
    if x == 0 || x == 1 {
        return 1;
    }
    math::ceil(math::log10(f64::from(x) + 1.0)) as u32
}

/// Returns the number of decimal digits in `x` using `log10`.
pub fn math8(x: u8) -> u32 {
    math(u32::from(x))
}

/// Returns the number of decimal digits in `x` using `log10`.
pub fn math16(x: u16) -> u32 {
    math(u32::from(x))
}

/// Returns the number of decimal digits in `x` using `log10`.
pub fn math32(x: u32) -> u32 {
    math(x)
}
