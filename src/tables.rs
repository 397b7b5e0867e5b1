//! Lookup tables shared by the digit counting kernels.
//!
//! Every table is computed at compile time from the
//! relationship between bit length and decimal length instead
//! of being transcribed, so a mis-typed constant cannot slip
//! in at a single decade boundary.

use super::util::{const_assert, naive_digits};

/// All 64-bit powers of 10: `POW10[n] == 10^n`.
#[allow(
    clippy::indexing_slicing,
    reason = "This is a const initializer, so panicking is okay."
)]
pub(crate) const POW10: [u64; 20] = {
    let mut table = [0u64; 20];
    let mut i = 0;
    while i < table.len() {
        table[i] = 10u64.pow(i as u32);
        i += 1;
    }
    table
};

/// Powers of 10 indexed by digit count.
///
/// `POW10_BY_DIGITS[d]` is the smallest integer with `d`
/// digits, except that entries 0 and 1 are zero: index 0 is
/// never used and a zero at index 1 means one-digit values
/// (including zero itself) are never corrected downwards.
#[allow(
    clippy::indexing_slicing,
    reason = "This is a const initializer, so panicking is okay."
)]
pub(crate) const POW10_BY_DIGITS: [u64; 21] = {
    let mut table = [0u64; 21];
    let mut i = 2;
    while i < table.len() {
        table[i] = POW10[i - 1];
        i += 1;
    }
    table
};

/// Maps the highest set bit of a `u64` to the number of digits
/// in the largest integer with that highest set bit.
///
/// The true digit count is either the entry or one less.
#[allow(
    clippy::indexing_slicing,
    reason = "This is a const initializer, so panicking is okay."
)]
pub(crate) const LOG2_TO_DIGITS64: [u8; 64] = {
    let mut table = [0u8; 64];
    let mut b = 0;
    while b < table.len() {
        let hi = if b == 63 { u64::MAX } else { (1 << (b + 1)) - 1 };
        table[b] = naive_digits(hi) as u8;
        b += 1;
    }
    table
};

/// Maps the highest set bit `b` of a `u32` to a biased digit
/// count such that `(x + DIGITS32_BIASED[b]) >> 32` is the
/// number of digits in `x`.
///
/// All integers in `[2^b, 2^(b+1))` have `d` or `d+1` digits
/// where `d` is the digit count of `2^b`, since the range spans
/// a factor of two and so holds at most one power of 10. The
/// entry is `((d+1) << 32) - 10^d`, which carries into bit 32
/// exactly when `x >= 10^d`. When `10^d` does not fit in 32
/// bits no `x` can reach it and the entry is just `d << 32`.
#[allow(
    clippy::indexing_slicing,
    reason = "This is a const initializer, so panicking is okay."
)]
pub(crate) const DIGITS32_BIASED: [u64; 32] = {
    let mut table = [0u64; 32];
    let mut b = 0;
    while b < table.len() {
        let d = naive_digits(1 << b);
        let p = POW10[d as usize];
        let mut entry = (d as u64) << 32;
        if p <= u32::MAX as u64 {
            entry += (1 << 32) - p;
        }
        table[b] = entry;
        b += 1;
    }
    table
};

const_assert!(DIGITS32_BIASED[0] == (2 << 32) - 10);
const_assert!(DIGITS32_BIASED[31] == 10 << 32);
const_assert!(LOG2_TO_DIGITS64[0] == 1);
const_assert!(LOG2_TO_DIGITS64[63] == 20);
const_assert!(POW10_BY_DIGITS[20] == 10_000_000_000_000_000_000);
