//! Interpolation kernels behind the scaled containers: clamped piecewise
//! linear, cubic Hermite, not-a-knot cubic spline, and a tensor-product
//! spline surface over a rectangular grid.
//!
//! Kernels work on sorted slices and are generic over [`FloatScalar`].
//! The spline and surface extrapolate with the nearest boundary piece; the
//! linear kernels clamp to the boundary samples instead.
//!
//! # Examples
//!
//! ```
//! use scalegrid::interp::DynSpline;
//!
//! let xs = vec![0.0_f64, 1.0, 2.0, 3.0];
//! let ys: Vec<f64> = xs.iter().map(|x| x * x * x).collect();
//! let spline = DynSpline::new(xs, ys).unwrap();
//! // not-a-knot splines reproduce cubics
//! assert!((spline.eval(1.5) - 3.375).abs() < 1e-12);
//! ```

mod bispline;
mod hermite;
pub mod linear;
mod spline;

#[cfg(test)]
mod tests;

pub use bispline::RectBivariateSpline;
pub use spline::{knot_slopes, DynSpline};

use crate::traits::FloatScalar;

/// Errors from interpolant construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// Not enough data points for the interpolation method.
    TooFewPoints,
    /// The `xs` array is not strictly increasing.
    NotSorted,
    /// Knot and value dimensions differ.
    LengthMismatch,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            InterpError::NotSorted => write!(f, "x values must be strictly increasing"),
            InterpError::LengthMismatch => write!(f, "xs and ys must have the same length"),
        }
    }
}

impl std::error::Error for InterpError {}

/// Validate that a slice is strictly increasing.
fn validate_sorted<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 1..xs.len() {
        // `!(a > b)` also rejects NaN knots
        if !(xs[i] > xs[i - 1]) {
            return Err(InterpError::NotSorted);
        }
    }
    Ok(())
}

/// Binary search for the interval containing `x` in a sorted slice.
///
/// Returns index `i` such that `xs[i] <= x < xs[i+1]`, clamped to
/// `[0, xs.len() - 2]` for extrapolation beyond boundaries. Repeated knots
/// are allowed; the returned segment then has `xs[i] < xs[i+1]` whenever
/// `x` lies strictly inside the range.
pub(crate) fn find_interval<T: FloatScalar>(xs: &[T], x: T) -> usize {
    debug_assert!(xs.len() >= 2);
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if x < xs[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}
