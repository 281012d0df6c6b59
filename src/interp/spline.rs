use crate::traits::FloatScalar;

use super::hermite::{basis, basis_derivative};
use super::{InterpError, find_interval, validate_sorted};

/// First derivatives at the knots of the interpolating cubic spline with
/// not-a-knot end conditions.
///
/// The degree drops with the knot count: one knot gives a constant (slope
/// zero), two a straight line, three the interpolating parabola. From four
/// knots on, the third derivative is continuous across `xs[1]` and
/// `xs[n-2]`, so the first and last two segments are single cubics.
///
/// The slope system is tridiagonal and solved with the Thomas algorithm in
/// O(n). Knots must be strictly increasing; this is not re-checked here.
pub fn knot_slopes<T: FloatScalar>(xs: &[T], ys: &[T]) -> Vec<T> {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    let two = T::one() + T::one();
    let three = two + T::one();

    match n {
        0 => return Vec::new(),
        1 => return vec![T::zero()],
        2 => {
            let d = (ys[1] - ys[0]) / (xs[1] - xs[0]);
            return vec![d, d];
        }
        _ => {}
    }

    // h[i] = x[i+1] - x[i], delta[i] = (y[i+1] - y[i]) / h[i]
    let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let delta: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    if n == 3 {
        // Parabola through the three knots: p'(x) = delta0 + c·(2x - x0 - x1)
        let c = (delta[1] - delta[0]) / (h[0] + h[1]);
        return vec![
            delta[0] - c * h[0],
            delta[0] + c * h[0],
            delta[0] + c * (h[0] + two * h[1]),
        ];
    }

    // Row i: lower[i]·s[i-1] + diag[i]·s[i] + upper[i]·s[i+1] = rhs[i]
    let mut lower = vec![T::zero(); n];
    let mut diag = vec![T::zero(); n];
    let mut upper = vec![T::zero(); n];
    let mut rhs = vec![T::zero(); n];

    let d0 = h[0] + h[1];
    diag[0] = h[1];
    upper[0] = d0;
    rhs[0] = ((h[0] + two * d0) * h[1] * delta[0] + h[0] * h[0] * delta[1]) / d0;

    for i in 1..n - 1 {
        lower[i] = h[i];
        diag[i] = two * (h[i - 1] + h[i]);
        upper[i] = h[i - 1];
        rhs[i] = three * (h[i] * delta[i - 1] + h[i - 1] * delta[i]);
    }

    let (a, b) = (h[n - 3], h[n - 2]);
    let dn = a + b;
    lower[n - 1] = dn;
    diag[n - 1] = a;
    rhs[n - 1] = (b * b * delta[n - 3] + (two * dn + b) * a * delta[n - 2]) / dn;

    // Forward sweep
    for i in 1..n {
        let w = lower[i] / diag[i - 1];
        diag[i] = diag[i] - w * upper[i - 1];
        rhs[i] = rhs[i] - w * rhs[i - 1];
    }

    // Back substitution
    let mut s = vec![T::zero(); n];
    s[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        s[i] = (rhs[i] - upper[i] * s[i + 1]) / diag[i];
    }
    s
}

/// Interpolating cubic spline with not-a-knot end conditions
/// (heap-allocated, runtime-sized).
///
/// Stored in Hermite form (values plus knot slopes from [`knot_slopes`]).
/// Requires at least 2 points; evaluation outside the knot range extends
/// the boundary segment.
///
/// # Example
///
/// ```
/// use scalegrid::interp::DynSpline;
///
/// let spline = DynSpline::new(vec![0.0_f64, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// // three knots: the interpolating parabola y = x²
/// assert!((spline.eval(1.5) - 2.25).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct DynSpline<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    slopes: Vec<T>,
}

impl<T: FloatScalar> DynSpline<T> {
    /// Construct a spline from sorted knots.
    ///
    /// Returns `InterpError::LengthMismatch` if the lengths differ,
    /// `InterpError::TooFewPoints` for fewer than 2 knots,
    /// `InterpError::NotSorted` if `xs` is not strictly increasing.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(&xs)?;
        let slopes = knot_slopes(&xs, &ys);
        Ok(Self { xs, ys, slopes })
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: T) -> T {
        let i = find_interval(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let [h00, h10, h01, h11] = basis(t);
        h00 * self.ys[i]
            + h10 * h * self.slopes[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.slopes[i + 1]
    }

    /// Evaluate the spline and its derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        let i = find_interval(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let [h00, h10, h01, h11] = basis(t);
        let [d00, d10, d01, d11] = basis_derivative(t);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (s0, s1) = (self.slopes[i], self.slopes[i + 1]);
        let val = h00 * y0 + h10 * h * s0 + h01 * y1 + h11 * h * s1;
        let dval = (d00 * y0 + d01 * y1) / h + d10 * s0 + d11 * s1;
        (val, dval)
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The knot y-values.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// First derivatives at the knots.
    pub fn slopes(&self) -> &[T] {
        &self.slopes
    }
}
