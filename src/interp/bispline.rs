use ndarray::{Array2, ArrayView2, Axis};

use crate::traits::FloatScalar;

use super::hermite::AxisWeights;
use super::spline::knot_slopes;
use super::{InterpError, validate_sorted};

/// Interpolating tensor-product spline on a rectangular grid.
///
/// The surface passes through every grid value. Along each axis it is the
/// not-a-knot cubic spline of [`knot_slopes`], so the degree per axis is
/// `min(3, n - 1)`: a 2×2 grid gives the bilinear patch, a single row or
/// column degenerates to a 1D spline. Out-of-range queries extrapolate the
/// boundary cell polynomial.
///
/// Internally each node stores `f`, `∂f/∂x`, `∂f/∂y` and `∂²f/∂x∂y`;
/// evaluation locates the enclosing cell and applies bicubic Hermite
/// interpolation, which reproduces the tensor spline exactly. Storage is
/// indexed `[[ix, iy]]`, matching `z[[ix, iy]] = f(xs[ix], ys[iy])`.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use scalegrid::interp::RectBivariateSpline;
///
/// let z = array![[0.0_f64, 0.0], [0.0, 4.0]];
/// let s = RectBivariateSpline::new(vec![0.0, 1.0], vec![0.0, 1.0], z.view()).unwrap();
/// assert!((s.eval(1.0, 1.0) - 4.0).abs() < 1e-14);
/// assert!((s.eval(0.5, 0.5) - 1.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct RectBivariateSpline<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    f: Array2<T>,
    fx: Array2<T>,
    fy: Array2<T>,
    fxy: Array2<T>,
}

impl<T: FloatScalar> RectBivariateSpline<T> {
    /// Fit the surface through `z[[ix, iy]]` at `(xs[ix], ys[iy])`.
    ///
    /// Returns `InterpError::TooFewPoints` if either axis is empty,
    /// `InterpError::LengthMismatch` if `z` is not `xs.len() × ys.len()`,
    /// `InterpError::NotSorted` if an axis is not strictly increasing.
    pub fn new(xs: Vec<T>, ys: Vec<T>, z: ArrayView2<'_, T>) -> Result<Self, InterpError> {
        let (nx, ny) = (xs.len(), ys.len());
        if nx == 0 || ny == 0 {
            return Err(InterpError::TooFewPoints);
        }
        if z.dim() != (nx, ny) {
            return Err(InterpError::LengthMismatch);
        }
        validate_sorted(&xs)?;
        validate_sorted(&ys)?;

        let f = z.to_owned();
        let fx = slopes_along(&xs, f.view(), Axis(0));
        let fy = slopes_along(&ys, f.view(), Axis(1));
        // mixed partials: x-derivative of the y-slope field
        let fxy = slopes_along(&xs, fy.view(), Axis(0));

        Ok(Self {
            xs,
            ys,
            f,
            fx,
            fy,
            fxy,
        })
    }

    /// Evaluate the surface at `(x, y)`.
    pub fn eval(&self, x: T, y: T) -> T {
        let wx = AxisWeights::locate(&self.xs, x);
        let wy = AxisWeights::locate(&self.ys, y);

        let mut acc = T::zero();
        for a in 0..wx.count {
            let ix = wx.index + a;
            for b in 0..wy.count {
                let iy = wy.index + b;
                acc = acc
                    + wx.value[a] * wy.value[b] * self.f[[ix, iy]]
                    + wx.slope[a] * wy.value[b] * self.fx[[ix, iy]]
                    + wx.value[a] * wy.slope[b] * self.fy[[ix, iy]]
                    + wx.slope[a] * wy.slope[b] * self.fxy[[ix, iy]];
            }
        }
        acc
    }

    /// The grid x-knots.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The grid y-knots.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }
}

/// Knot slopes of every 1D line of `values` running along `axis`.
fn slopes_along<T: FloatScalar>(knots: &[T], values: ArrayView2<'_, T>, axis: Axis) -> Array2<T> {
    let mut out = Array2::zeros(values.raw_dim());
    for (line, mut dst) in values.lanes(axis).into_iter().zip(out.lanes_mut(axis)) {
        let ys: Vec<T> = line.iter().copied().collect();
        for (d, s) in dst.iter_mut().zip(knot_slopes(knots, &ys)) {
            *d = s;
        }
    }
    out
}
