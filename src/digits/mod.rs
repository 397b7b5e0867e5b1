//! Decimal digit counts of unsigned integers.
//!
//! Each width has its own module with every kernel for that
//! width. [`DigitCount`] picks the fastest one.

pub mod digits16;
pub mod digits32;
pub mod digits64;
pub mod digits8;

/// A named digit counting kernel.
pub type Kernel<T> = (&'static str, fn(T) -> u32);

/// Every `u8` kernel.
pub const KERNELS8: [Kernel<u8>; 1] = [("ladder", digits8::ladder)];

/// Every `u16` kernel.
pub const KERNELS16: [Kernel<u16>; 1] = [("ladder", digits16::ladder)];

/// Every `u32` kernel.
pub const KERNELS32: [Kernel<u32>; 5] = [
    ("ladder", digits32::ladder),
    ("table", digits32::table),
    ("mask", digits32::mask),
    ("mask_bitwise", digits32::mask_bitwise),
    ("estimate", digits32::estimate),
];

/// Every `u64` kernel.
pub const KERNELS64: [Kernel<u64>; 3] = [
    ("ladder", digits64::ladder),
    ("table", digits64::table),
    ("estimate", digits64::estimate),
];

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer whose decimal digits can be counted.
pub trait DigitCount: private::Sealed + Copy {
    /// The largest number of digits any value can have.
    const MAX_DIGITS: u32;

    /// Returns the number of digits in the base-10
    /// representation of `self`.
    ///
    /// Zero has one digit.
    ///
    /// # Example
    ///
    /// ```
    /// use digitlog::DigitCount;
    ///
    /// assert_eq!(0u8.digit_count(), 1);
    /// assert_eq!(4_294_967_295u32.digit_count(), 10);
    /// assert_eq!(u64::MAX.digit_count(), 20);
    /// ```
    fn digit_count(self) -> u32;
}

macro_rules! impl_digit_count {
    ($($word:ty => ($kernel:path, $max:literal)),* $(,)?) => {
        $(
            impl DigitCount for $word {
                const MAX_DIGITS: u32 = $max;

                #[inline]
                fn digit_count(self) -> u32 {
                    $kernel(self)
                }
            }

            $crate::util::const_assert!($kernel(<$word>::MAX) == $max);
            $crate::util::const_assert!($kernel(0) == 1);
        )*
    };
}
impl_digit_count! {
    u8 => (digits8::ladder, 3),
    u16 => (digits16::ladder, 5),
    u32 => (digits32::table, 10),
    u64 => (digits64::table, 20),
}
