use log::{debug, trace};
use ndarray::{Array, Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Data, Dimension, Zip};
use num_complex::Complex64;

use crate::error::{Result, ScaleError};
use crate::interp::{InterpError, RectBivariateSpline};
use crate::precision::Precision;

use super::scale;

/// Pair of spline surfaces fitted to the real and imaginary parts of a
/// complex grid.
#[derive(Debug, Clone)]
pub struct ComplexSurface {
    re: RectBivariateSpline<f64>,
    im: RectBivariateSpline<f64>,
}

impl ComplexSurface {
    /// Fit both parts of `z[[ix, iy]]` over `(x[ix], y[iy])`.
    pub fn fit(
        x: &[f64],
        y: &[f64],
        z: ArrayView2<'_, Complex64>,
    ) -> core::result::Result<Self, InterpError> {
        let re = RectBivariateSpline::new(x.to_vec(), y.to_vec(), z.mapv(|c| c.re).view())?;
        let im = RectBivariateSpline::new(x.to_vec(), y.to_vec(), z.mapv(|c| c.im).view())?;
        Ok(Self { re, im })
    }

    /// `re(x, y) + i·im(x, y)`; extrapolates outside the grid.
    pub fn eval(&self, x: f64, y: f64) -> Complex64 {
        Complex64::new(self.re.eval(x, y), self.im.eval(x, y))
    }
}

/// Derived interpolator state of a [`ScaledMatrix`].
#[derive(Debug, Clone, Default)]
pub enum InterpolatorCache {
    /// Needs a refit before the next evaluation.
    #[default]
    Stale,
    /// Fitted to the current coordinates and values.
    Valid(Box<ComplexSurface>),
}

impl InterpolatorCache {
    /// `true` when a fitted surface is held.
    pub fn is_valid(&self) -> bool {
        matches!(self, InterpolatorCache::Valid(_))
    }

    fn get_or_try_fit<F>(&mut self, fit: F) -> core::result::Result<&ComplexSurface, InterpError>
    where
        F: FnOnce() -> core::result::Result<ComplexSurface, InterpError>,
    {
        if let InterpolatorCache::Stale = self {
            *self = InterpolatorCache::Valid(Box::new(fit()?));
        }
        let InterpolatorCache::Valid(surface) = self else {
            return Err(InterpError::TooFewPoints);
        };
        Ok(&**surface)
    }
}

/// A 2D complex grid with a coordinate scale on each axis.
///
/// `values()[[ix, iy]]` sits at `(x_values()[ix], y_values()[iy])`; the grid
/// shape is always `(x.len(), y.len())`. Coordinates and values are
/// quantized on entry. Real grids are promoted to complex on construction,
/// so interpolation always yields a `Complex64`.
///
/// Interpolation fits a [`ComplexSurface`] on first use and keeps it until a
/// mutator touches the coordinates or values.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use scalegrid::ScaledMatrix;
///
/// let mut m = ScaledMatrix::from_real(
///     array![0.0, 1.0],
///     array![0.0, 1.0],
///     array![[0.0, 0.0], [0.0, 4.0]],
/// )
/// .unwrap();
/// assert!(!m.is_interpolator_ready());
/// let z = m.interpolate_value(1.0, 1.0).unwrap();
/// assert!((z.re - 4.0).abs() < 1e-12 && z.im.abs() < 1e-12);
/// assert!(m.is_interpolator_ready());
/// ```
#[derive(Debug, Clone)]
pub struct ScaledMatrix {
    x_coord: Vec<f64>,
    y_coord: Vec<f64>,
    z_values: Array2<Complex64>,
    shape: (usize, usize),
    precision: Precision,
    cache: InterpolatorCache,
}

impl ScaledMatrix {
    /// Grid `z_values` over explicit coordinates.
    ///
    /// Fails with [`ScaleError::ShapeMismatch`] unless
    /// `z_values.dim() == (x_coord.len(), y_coord.len())`.
    pub fn new(
        x_coord: Array1<f64>,
        y_coord: Array1<f64>,
        z_values: Array2<Complex64>,
    ) -> Result<Self> {
        Self::new_with_precision(x_coord, y_coord, z_values, Precision::default())
    }

    /// Like [`ScaledMatrix::new`] with an explicit rounding setting.
    pub fn new_with_precision(
        x_coord: Array1<f64>,
        y_coord: Array1<f64>,
        z_values: Array2<Complex64>,
        precision: Precision,
    ) -> Result<Self> {
        let expected = (x_coord.len(), y_coord.len());
        if z_values.dim() != expected {
            return Err(ScaleError::grid_mismatch(expected, z_values.dim()));
        }
        let mut matrix = Self {
            x_coord: x_coord.iter().map(|&v| precision.quantize(v)).collect(),
            y_coord: y_coord.iter().map(|&v| precision.quantize(v)).collect(),
            z_values: z_values.mapv(|v| precision.quantize(v)),
            shape: (0, 0),
            precision,
            cache: InterpolatorCache::Stale,
        };
        matrix.refresh_shape();
        Ok(matrix)
    }

    /// Real grid over explicit coordinates, stored as complex.
    pub fn from_real(
        x_coord: Array1<f64>,
        y_coord: Array1<f64>,
        z_values: Array2<f64>,
    ) -> Result<Self> {
        Self::new(x_coord, y_coord, z_values.mapv(Complex64::from))
    }

    /// Grid with all coordinates zero, to be scaled afterwards.
    pub fn from_grid(z_values: Array2<Complex64>) -> Self {
        let (nx, ny) = z_values.dim();
        let precision = Precision::default();
        let mut matrix = Self {
            x_coord: vec![0.0; nx],
            y_coord: vec![0.0; ny],
            z_values: z_values.mapv(|v| precision.quantize(v)),
            shape: (0, 0),
            precision,
            cache: InterpolatorCache::Stale,
        };
        matrix.refresh_shape();
        matrix
    }

    /// Real counterpart of [`ScaledMatrix::from_grid`].
    pub fn from_real_grid(z_values: Array2<f64>) -> Self {
        Self::from_grid(z_values.mapv(Complex64::from))
    }

    /// Uniform scales running from `min` to `max` on each axis.
    pub fn from_range(
        z_values: Array2<Complex64>,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<Self> {
        let mut matrix = Self::from_grid(z_values);
        matrix.set_scale_from_range(0, x_min, x_max)?;
        matrix.set_scale_from_range(1, y_min, y_max)?;
        Ok(matrix)
    }

    /// Uniform scales `initial + k·step` on each axis.
    pub fn from_steps(
        z_values: Array2<Complex64>,
        x_initial: f64,
        x_step: f64,
        y_initial: f64,
        y_step: f64,
    ) -> Result<Self> {
        let mut matrix = Self::from_grid(z_values);
        matrix.set_scale_from_steps(0, x_initial, x_step)?;
        matrix.set_scale_from_steps(1, y_initial, y_step)?;
        Ok(matrix)
    }

    /// x coordinate at index `index` (grid axis 0).
    pub fn x_value(&self, index: usize) -> f64 {
        self.x_coord[index]
    }

    /// y coordinate at index `index` (grid axis 1).
    pub fn y_value(&self, index: usize) -> f64 {
        self.y_coord[index]
    }

    /// The x scale.
    pub fn x_values(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.x_coord[..])
    }

    /// The y scale.
    pub fn y_values(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.y_coord[..])
    }

    /// `(x.len(), y.len())`.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Same as [`shape`](Self::shape).
    pub fn size(&self) -> (usize, usize) {
        self.shape
    }

    /// Rounding setting applied to coordinates, values and queries.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Value at grid node `(x_index, y_index)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn value(&self, x_index: usize, y_index: usize) -> Complex64 {
        self.z_values[[x_index, y_index]]
    }

    /// Value at grid node `(x_index, y_index)`, or `None` when out of bounds.
    pub fn get(&self, x_index: usize, y_index: usize) -> Option<Complex64> {
        self.z_values.get([x_index, y_index]).copied()
    }

    /// Read-only view of the whole grid. Mutate through
    /// [`set_value`](Self::set_value) or [`set_values`](Self::set_values) so
    /// the interpolator is refreshed.
    pub fn values(&self) -> ArrayView2<'_, Complex64> {
        self.z_values.view()
    }

    /// Whether the cached surface matches the current data.
    pub fn is_interpolator_ready(&self) -> bool {
        self.cache.is_valid()
    }

    /// Current interpolator state.
    pub fn interpolator_cache(&self) -> &InterpolatorCache {
        &self.cache
    }

    /// Write one node.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set_value(&mut self, x_index: usize, y_index: usize, value: Complex64) {
        self.z_values[[x_index, y_index]] = self.precision.quantize(value);
        self.invalidate();
    }

    /// Replace the whole grid. The shape must not change.
    pub fn set_values(&mut self, values: Array2<Complex64>) -> Result<()> {
        if values.dim() != self.shape {
            return Err(ScaleError::grid_mismatch(self.shape, values.dim()));
        }
        let precision = self.precision;
        self.z_values = values.mapv(|v| precision.quantize(v));
        self.invalidate();
        Ok(())
    }

    /// Replace the x coordinates. The length must not change.
    pub fn set_x_values(&mut self, x_coord: Array1<f64>) -> Result<()> {
        self.set_axis_values(0, x_coord)
    }

    /// Replace the y coordinates. The length must not change.
    pub fn set_y_values(&mut self, y_coord: Array1<f64>) -> Result<()> {
        self.set_axis_values(1, y_coord)
    }

    /// Uniform scale `q(initial) + k·q(step)` on `axis` (0 = x, 1 = y).
    ///
    /// Fails with [`ScaleError::InvalidAxis`] or [`ScaleError::InvalidStep`];
    /// an axis of length zero is left untouched. Equivalent to IGOR's
    /// `SetScale/P`.
    pub fn set_scale_from_steps(&mut self, axis: usize, initial: f64, step: f64) -> Result<()> {
        let len = self.axis_len(axis)?;
        let coords = scale::from_steps(len, initial, step, self.precision)?;
        if len > 0 {
            self.install_axis(axis, coords);
        }
        Ok(())
    }

    /// Uniform scale from `min` to `max` on `axis` (0 = x, 1 = y).
    ///
    /// Fails with [`ScaleError::InvalidAxis`] or [`ScaleError::InvalidRange`];
    /// an axis of length zero is left untouched. Equivalent to IGOR's
    /// `SetScale/I`.
    pub fn set_scale_from_range(&mut self, axis: usize, min: f64, max: f64) -> Result<()> {
        let len = self.axis_len(axis)?;
        let coords = scale::from_range(len, min, max, self.precision)?;
        if len > 0 {
            self.install_axis(axis, coords);
        }
        Ok(())
    }

    /// Change the rounding setting and re-quantize coordinates and values.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
        for v in self.x_coord.iter_mut().chain(self.y_coord.iter_mut()) {
            *v = precision.quantize(*v);
        }
        self.z_values.mapv_inplace(|v| precision.quantize(v));
        self.invalidate();
    }

    /// Refit the surface now, whether or not the cache is stale.
    ///
    /// Fails with [`ScaleError::Interp`] if an axis is empty or not strictly
    /// increasing; the cache is left stale in that case.
    pub fn compute_interpolator(&mut self) -> Result<()> {
        self.invalidate();
        self.surface()?;
        Ok(())
    }

    /// Spline estimate at `(x, y)`, fitting the surface first if the cache
    /// is stale.
    ///
    /// Queries outside the grid extrapolate the boundary cell; unlike
    /// [`ScaledArray`](crate::ScaledArray) there is no clamping.
    pub fn interpolate_value(&mut self, x: f64, y: f64) -> Result<Complex64> {
        Ok(self.surface()?.eval(x, y))
    }

    /// [`interpolate_value`](Self::interpolate_value) at each `(xs[k], ys[k])`
    /// pair. `xs` and `ys` must have the same shape, which the result keeps.
    pub fn interpolate_values<S1, S2, D>(
        &mut self,
        xs: &ArrayBase<S1, D>,
        ys: &ArrayBase<S2, D>,
    ) -> Result<Array<Complex64, D>>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        D: Dimension,
    {
        if xs.shape() != ys.shape() {
            return Err(ScaleError::ShapeMismatch {
                expected: xs.shape().to_vec(),
                found: ys.shape().to_vec(),
            });
        }
        let surface = self.surface()?;
        Ok(Zip::from(xs).and(ys).map_collect(|&x, &y| surface.eval(x, y)))
    }

    fn surface(&mut self) -> Result<&ComplexSurface> {
        let (x, y, z) = (&self.x_coord, &self.y_coord, &self.z_values);
        let shape = self.shape;
        let surface = self.cache.get_or_try_fit(|| {
            debug!("computing interpolator for {}x{} grid", shape.0, shape.1);
            ComplexSurface::fit(x, y, z.view())
        })?;
        Ok(surface)
    }

    fn invalidate(&mut self) {
        if self.cache.is_valid() {
            trace!("interpolator invalidated");
        }
        self.cache = InterpolatorCache::Stale;
    }

    fn refresh_shape(&mut self) {
        self.shape = (self.x_coord.len(), self.y_coord.len());
    }

    fn axis_len(&self, axis: usize) -> Result<usize> {
        match axis {
            0 => Ok(self.shape.0),
            1 => Ok(self.shape.1),
            _ => Err(ScaleError::InvalidAxis(axis)),
        }
    }

    fn set_axis_values(&mut self, axis: usize, coords: Array1<f64>) -> Result<()> {
        let len = self.axis_len(axis)?;
        if coords.len() != len {
            return Err(ScaleError::length_mismatch(len, coords.len()));
        }
        let precision = self.precision;
        self.install_axis(axis, coords.iter().map(|&v| precision.quantize(v)).collect());
        Ok(())
    }

    fn install_axis(&mut self, axis: usize, coords: Vec<f64>) {
        if axis == 0 {
            self.x_coord = coords;
        } else {
            self.y_coord = coords;
        }
        self.refresh_shape();
        self.invalidate();
    }
}
