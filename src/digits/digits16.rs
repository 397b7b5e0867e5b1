//! Digit counting for `u16`.

/// Returns the number of decimal digits in `x`.
///
/// The result is in [1, 5].
pub const fn ladder(x: u16) -> u32 {
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
