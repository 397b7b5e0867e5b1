//! Integer logarithms of `f32`.

use crate::math;

super::impl_ilog!(f32, math::log10f);
