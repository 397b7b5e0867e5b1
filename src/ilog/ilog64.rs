//! Integer logarithms of `f64`.

use crate::math;

super::impl_ilog!(f64, math::log10);
