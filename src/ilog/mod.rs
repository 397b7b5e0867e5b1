//! Integer base-10 logarithms of binary floating point numbers.
//!
//! Every function here requires a finite, non-negative input.
//! Negative numbers, NaN and infinities are not checked (except
//! by a `debug_assert!`) and produce an unspecified result.
//!
//! # Profiles
//!
//! The *non-negative* kernels never return a negative
//! logarithm: everything in `(0, 10)` maps to 0. That is what
//! callers that want a digit-count-like bucket need, and it
//! keeps the ladder short.
//!
//! The *full-range* kernels resolve every bucket from
//! `[1e-8, 1e-7)` up to `[1e8, 1e9)` with comparisons and
//! fall back to `log10` outside of that.
//!
//! # Accuracy
//!
//! The `log10` fallback truncates towards zero. Very close to
//! an exact power of 10 the rounded `log10` result can land on
//! the wrong side of an integer, so the fallback may be off by
//! one bucket there. The comparison ladders are exact.

pub mod ilog32;
pub mod ilog64;

/// Selects which integer logarithm to compute.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Profile {
    /// Clamp the result to zero or more.
    ///
    /// Every value in `(0, 10)` has a logarithm of 0.
    NonNegative,
    /// Compute the floored logarithm for the whole domain.
    #[default]
    Full,
}

/// A named integer logarithm kernel.
pub type Kernel<T> = (&'static str, fn(T) -> i32);

/// The non-negative `f32` kernels.
pub const NON_NEGATIVE32: [Kernel<f32>; 2] = [
    ("ladder", ilog32::non_negative_ilog),
    ("math", ilog32::math_non_negative_ilog),
];

/// The full-range `f32` kernels.
pub const FULL32: [Kernel<f32>; 3] = [
    ("ladder", ilog32::ilog),
    ("split", ilog32::ilog_split),
    ("math", ilog32::math_ilog),
];

/// The non-negative `f64` kernels.
pub const NON_NEGATIVE64: [Kernel<f64>; 2] = [
    ("ladder", ilog64::non_negative_ilog),
    ("math", ilog64::math_non_negative_ilog),
];

/// The full-range `f64` kernels.
pub const FULL64: [Kernel<f64>; 3] = [
    ("ladder", ilog64::ilog),
    ("split", ilog64::ilog_split),
    ("math", ilog64::math_ilog),
];

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating point number with an integer base-10 logarithm.
pub trait IntegerLog10: private::Sealed + Copy {
    /// Returns the largest integer `e` such that `10^e <= self`
    /// under `profile`, or [`i32::MIN`] if `self` is zero.
    ///
    /// `self` must be finite and non-negative, otherwise the
    /// result is unspecified.
    ///
    /// # Example
    ///
    /// ```
    /// use digitlog::{IntegerLog10, Profile};
    ///
    /// assert_eq!(0.1f64.int_log10(Profile::Full), -1);
    /// assert_eq!(0.1f64.int_log10(Profile::NonNegative), 0);
    /// assert_eq!(10.0f32.int_log10(Profile::Full), 1);
    /// assert_eq!(0.0f64.int_log10(Profile::Full), i32::MIN);
    /// ```
    fn int_log10(self, profile: Profile) -> i32;
}

macro_rules! impl_ilog {
    ($float:ty, $log10:path) => {
        /// Returns `floor(log10(x))` clamped to zero or more,
        /// or [`i32::MIN`] if `x` is zero.
        ///
        /// Every `x` in `(0, 10)` returns 0.
        #[inline]
        pub fn non_negative_ilog(x: $float) -> i32 {
            debug_assert!(x >= 0.0 && x.is_finite(), "{x}");

            if x == 0.0 {
                return i32::MIN;
            }
            if x >= 1e9 {
                return math_non_negative_ilog(x);
            }
            if x < 1e1 {
                return 0;
            }
            if x < 1e2 {
                return 1;
            }
            if x < 1e3 {
                return 2;
            }
            if x < 1e4 {
                return 3;
            }
            if x < 1e5 {
                return 4;
            }
            if x < 1e6 {
                return 5;
            }
            if x < 1e7 {
                return 6;
            }
            if x < 1e8 {
                return 7;
            }
            8
        }

        /// Returns `trunc(log10(x))` clamped to zero or more.
        ///
        /// Unlike [`non_negative_ilog`], zero returns 0.
        #[inline]
        pub fn math_non_negative_ilog(x: $float) -> i32 {
            i32::max(0, math_ilog(x))
        }

        /// Returns `floor(log10(x))`, or [`i32::MIN`] if `x` is
        /// zero.
        #[inline]
        pub fn ilog(x: $float) -> i32 {
            debug_assert!(x >= 0.0 && x.is_finite(), "{x}");

            if x == 0.0 {
                return i32::MIN;
            }
            if x >= 1e9 || x < 1e-8 {
                return math_ilog(x);
            }
            if x < 1e-7 {
                return -8;
            }
            if x < 1e-6 {
                return -7;
            }
            if x < 1e-5 {
                return -6;
            }
            if x < 1e-4 {
                return -5;
            }
            if x < 1e-3 {
                return -4;
            }
            if x < 1e-2 {
                return -3;
            }
            if x < 1e-1 {
                return -2;
            }
            if x < 1e0 {
                return -1;
            }
            if x < 1e1 {
                return 0;
            }
            if x < 1e2 {
                return 1;
            }
            if x < 1e3 {
                return 2;
            }
            if x < 1e4 {
                return 3;
            }
            if x < 1e5 {
                return 4;
            }
            if x < 1e6 {
                return 5;
            }
            if x < 1e7 {
                return 6;
            }
            if x < 1e8 {
                return 7;
            }
            8
        }

        /// Like [`ilog`], but decides whether `x < 1` first and
        /// only searches that half of the ladder.
        ///
        /// The result is identical to [`ilog`] for every input.
        #[inline]
        pub fn ilog_split(x: $float) -> i32 {
            debug_assert!(x >= 0.0 && x.is_finite(), "{x}");

            if x == 0.0 {
                return i32::MIN;
            }
            if x < 1.0 {
                if x < 1e-8 {
                    return math_ilog(x);
                }
                if x < 1e-7 {
                    return -8;
                }
                if x < 1e-6 {
                    return -7;
                }
                if x < 1e-5 {
                    return -6;
                }
                if x < 1e-4 {
                    return -5;
                }
                if x < 1e-3 {
                    return -4;
                }
                if x < 1e-2 {
                    return -3;
                }
                if x < 1e-1 {
                    return -2;
                }
                return -1;
            }

            if x >= 1e9 {
                return math_ilog(x);
            }
            if x < 1e1 {
                return 0;
            }
            if x < 1e2 {
                return 1;
            }
            if x < 1e3 {
                return 2;
            }
            if x < 1e4 {
                return 3;
            }
            if x < 1e5 {
                return 4;
            }
            if x < 1e6 {
                return 5;
            }
            if x < 1e7 {
                return 6;
            }
            if x < 1e8 {
                return 7;
            }
            8
        }

        /// Returns `trunc(log10(x))`.
        ///
        /// Zero returns [`i32::MIN`] since `log10(0)` is
        /// negative infinity and the conversion saturates.
        #[inline]
        pub fn math_ilog(x: $float) -> i32 {
            $log10(x) as i32
        }

        impl super::IntegerLog10 for $float {
            #[inline]
            fn int_log10(self, profile: super::Profile) -> i32 {
                match profile {
                    super::Profile::NonNegative => non_negative_ilog(self),
                    super::Profile::Full => ilog(self),
                }
            }
        }

    };
}
use impl_ilog;
