//! `digitlog` is a pure Rust, no-std collection of kernels for
//! counting the decimal digits of unsigned integers and for
//! computing the integer base-10 logarithm of floating point
//! numbers.
//!
//! # Features
//!
//! - [`DigitCount`] for `u8`, `u16`, `u32` and `u64`.
//! - [`IntegerLog10`] for `f32` and `f64`, with a
//! [non-negative][Profile::NonNegative] and a
//! [full-range][Profile::Full] profile.
//!
//! Every competing implementation is public, one module per
//! type (see [`digits`] and [`ilog`]), so they can be compared
//! against each other and against the slow references in
//! [`baseline`].
//!
//! # Cargo Features
//!
//! - `std`: Use the platform's `log10` instead of [`libm`].
//!
//! - `slow-tests`: Run exhaustive tests.
//!
//! [`libm`]: https://crates.io/crates/libm

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

pub mod baseline;
pub mod digits;
mod harness;
pub mod ilog;
mod math;
mod tables;
mod util;

pub use digits::DigitCount;
pub use ilog::{IntegerLog10, Profile};

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{DigitCount, IntegerLog10, Profile};
}
