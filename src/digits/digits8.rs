//! Digit counting for `u8`.

/// Returns the number of decimal digits in `x`.
///
/// The result is in [1, 3].
pub const fn ladder(x: u8) -> u32 {
    if x >= 100 {
        return 3;
    }
    if x >= 10 {
        return 2;
    }
    1
}
