//! Clamped piecewise-linear lookup over a sorted scale.

use core::ops::{Add, Mul, Sub};

use crate::traits::FloatScalar;

use super::find_interval;

/// Piecewise-linear interpolation of `ys` over non-decreasing knots `xs`,
/// flat-clamped at both ends.
///
/// Queries at or below `xs[0]` return `ys[0]`, at or above the last knot
/// return the last sample. The enclosing segment is found by binary search,
/// so the knots need not be uniformly spaced. A single knot yields a
/// constant for every query, NaN included. Values may be any type that
/// blends linearly with real weights (reals, complex numbers).
///
/// # Panics
///
/// Panics if `xs` is empty or shorter than `ys`.
///
/// # Example
///
/// ```
/// use scalegrid::interp::linear::lerp_clamped;
///
/// let xs = [0.0_f64, 1.0, 4.0];
/// let ys = [0.0, 2.0, 8.0];
/// assert_eq!(lerp_clamped(&xs, &ys, 2.5), 5.0);
/// assert_eq!(lerp_clamped(&xs, &ys, -1.0), 0.0);
/// assert_eq!(lerp_clamped(&xs, &ys, 9.0), 8.0);
/// ```
pub fn lerp_clamped<T, Y>(xs: &[T], ys: &[Y], x: T) -> Y
where
    T: FloatScalar,
    Y: Copy + Add<Output = Y> + Sub<Output = Y> + Mul<T, Output = Y>,
{
    let n = xs.len();
    if n == 1 || x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }
    let i = find_interval(xs, x);
    let (x0, x1) = (xs[i], xs[i + 1]);
    if x0 == x1 {
        return ys[i];
    }
    ys[i] + (ys[i + 1] - ys[i]) * ((x - x0) / (x1 - x0))
}

/// Inverse lookup: interpolate `fp` at `x` given monotonic sample values `xp`.
///
/// `xp` may be increasing or decreasing; results are clamped to the end
/// values of `fp`. For non-monotonic `xp` the result is unspecified.
///
/// # Panics
///
/// Panics if `xp` is empty or shorter than `fp`.
pub fn interp_monotonic<T: FloatScalar>(xp: &[T], fp: &[T], x: T) -> T {
    let n = xp.len();
    if n < 2 || xp[0] <= xp[n - 1] {
        return lerp_clamped(xp, fp, x);
    }
    // descending: xp[0] is the largest value
    if x >= xp[0] {
        return fp[0];
    }
    if x <= xp[n - 1] {
        return fp[n - 1];
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if x > xp[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    let (x0, x1) = (xp[lo], xp[hi]);
    if x0 == x1 {
        return fp[lo];
    }
    fp[lo] + (fp[hi] - fp[lo]) * ((x - x0) / (x1 - x0))
}
