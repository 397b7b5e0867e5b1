//! Transcendental functions.
//!
//! With the `std` feature these are the platform's; otherwise
//! they come from `libm` so the crate stays `no_std`.

/// Returns `log10(x)`.
#[cfg(feature = "std")]
#[inline]
pub(crate) fn log10(x: f64) -> f64 {
    x.log10()
}

/// Returns `log10(x)`.
#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn log10(x: f64) -> f64 {
    libm::log10(x)
}

/// Returns `log10(x)`.
#[cfg(feature = "std")]
#[inline]
pub(crate) fn log10f(x: f32) -> f32 {
    x.log10()
}

/// Returns `log10(x)`.
#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn log10f(x: f32) -> f32 {
    libm::log10f(x)
}

/// Returns `ceil(x)`.
#[cfg(feature = "std")]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Returns `ceil(x)`.
#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}
