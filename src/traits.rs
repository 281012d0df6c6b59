use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};
use num_traits::{Float, Num, One, Zero};

use crate::precision::Quantize;

/// Trait for types that can be used as interpolation knots and values.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point knot types.
///
/// Required by the interpolation kernels, which need ordered comparisons
/// and `abs`/`floor` from [`Float`].
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Element type stored by [`ScaledArray`](crate::ScaledArray).
///
/// Anything that can be quantized and linearly blended with real `f64`
/// weights. Covers `f64` and `Complex<f64>`.
pub trait Sample:
    Copy
    + PartialEq
    + Debug
    + Zero
    + Quantize
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
}

impl<T> Sample for T where
    T: Copy
        + PartialEq
        + Debug
        + Zero
        + Quantize
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<f64, Output = T>
{
}
