use ndarray::{Array, Array1, ArrayBase, ArrayView1, Data, Dimension};

use crate::error::{Result, ScaleError};
use crate::interp::linear::{interp_monotonic, lerp_clamped};
use crate::precision::Precision;
use crate::traits::Sample;

use super::scale;

/// A 1D sample vector paired with a non-decreasing coordinate scale.
///
/// `samples[i]` sits at coordinate `scale[i]`. Both are quantized on entry
/// (12 decimal digits by default). The scale may be arbitrary, or uniform
/// when built from steps or a range (`offset`, `delta` then describe it).
///
/// Samples are `f64` by default; `Complex64` works too, e.g. for a
/// complex amplitude along one transverse axis.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use scalegrid::ScaledArray;
///
/// let a = ScaledArray::from_range(array![0.0, 1.0, 2.0, 3.0], 0.0, 3.0).unwrap();
/// assert_eq!(a.abscissas(), array![0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(a.interpolate_value(1.5), 1.5);
/// // no extrapolation: flat beyond both ends
/// assert_eq!(a.interpolate_value(-7.0), 0.0);
/// assert_eq!(a.interpolate_value(7.0), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScaledArray<S = f64> {
    samples: Vec<S>,
    scale: Vec<f64>,
    offset: f64,
    delta: f64,
    precision: Precision,
}

impl<S: Sample> ScaledArray<S> {
    /// Pair `samples` with an explicit `scale`.
    ///
    /// Fails with [`ScaleError::ShapeMismatch`] if the lengths differ,
    /// [`ScaleError::EmptySeries`] if both are empty, and
    /// [`ScaleError::UnsortedScale`] if the (quantized) scale decreases
    /// anywhere.
    pub fn new(samples: Array1<S>, scale: Array1<f64>) -> Result<Self> {
        Self::new_with_precision(samples, scale, Precision::default())
    }

    /// Like [`ScaledArray::new`] with an explicit rounding setting.
    pub fn new_with_precision(
        samples: Array1<S>,
        scale: Array1<f64>,
        precision: Precision,
    ) -> Result<Self> {
        if samples.len() != scale.len() {
            return Err(ScaleError::length_mismatch(scale.len(), samples.len()));
        }
        if samples.is_empty() {
            return Err(ScaleError::EmptySeries);
        }
        let scale: Vec<f64> = scale.iter().map(|&v| precision.quantize(v)).collect();
        scale::check_non_decreasing(&scale)?;
        let samples = samples.iter().map(|&v| precision.quantize(v)).collect();

        let mut array = Self {
            samples,
            scale,
            offset: f64::NAN,
            delta: 0.0,
            precision,
        };
        array.refresh_scale_cache();
        Ok(array)
    }

    /// Index scale `0, 1, …, N-1`.
    pub fn from_index_scale(samples: Array1<S>) -> Result<Self> {
        let scale = Array1::from_iter((0..samples.len()).map(|i| i as f64));
        Self::new(samples, scale)
    }

    /// Uniform scale from `min` to `max` inclusive.
    pub fn from_range(samples: Array1<S>, min: f64, max: f64) -> Result<Self> {
        let mut array = Self::from_index_scale(samples)?;
        array.set_scale_from_range(min, max)?;
        Ok(array)
    }

    /// Uniform scale `initial + k·step`.
    pub fn from_steps(samples: Array1<S>, initial: f64, step: f64) -> Result<Self> {
        let mut array = Self::from_index_scale(samples)?;
        array.set_scale_from_steps(initial, step)?;
        Ok(array)
    }

    /// Number of samples.
    pub fn size(&self) -> usize {
        self.samples.len()
    }

    /// First scale value, NaN for a single-sample array.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// `|scale[1] - scale[0]|`, zero for a single-sample array.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Rounding setting applied to the scale, samples and queries.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Coordinate of sample `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn scale_value(&self, index: usize) -> f64 {
        self.scale[index]
    }

    /// Sample at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn value(&self, index: usize) -> S {
        self.samples[index]
    }

    /// Sample at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<S> {
        self.samples.get(index).copied()
    }

    /// The samples.
    pub fn values(&self) -> ArrayView1<'_, S> {
        ArrayView1::from(&self.samples[..])
    }

    /// The scale.
    pub fn abscissas(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.scale[..])
    }

    /// Overwrite sample `index` with the quantized `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn set_value(&mut self, index: usize, value: S) {
        self.samples[index] = self.precision.quantize(value);
    }

    /// Replace all samples. The length must not change.
    pub fn set_values(&mut self, values: Array1<S>) -> Result<()> {
        if values.len() != self.size() {
            return Err(ScaleError::length_mismatch(self.size(), values.len()));
        }
        self.samples = values.iter().map(|&v| self.precision.quantize(v)).collect();
        Ok(())
    }

    /// Replace the scale. The length must not change and the values must
    /// be non-decreasing.
    pub fn set_scale(&mut self, scale: Array1<f64>) -> Result<()> {
        if scale.len() != self.size() {
            return Err(ScaleError::length_mismatch(self.size(), scale.len()));
        }
        let scale: Vec<f64> = scale.iter().map(|&v| self.precision.quantize(v)).collect();
        scale::check_non_decreasing(&scale)?;
        self.scale = scale;
        self.refresh_scale_cache();
        Ok(())
    }

    /// Move one coordinate. It must stay between its neighbours.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn set_scale_value(&mut self, index: usize, value: f64) -> Result<()> {
        let value = self.precision.quantize(value);
        let n = self.size();
        assert!(index < n, "scale index {index} out of bounds for size {n}");
        let after_prev = index == 0 || self.scale[index - 1] <= value;
        let before_next = index + 1 == n || value <= self.scale[index + 1];
        if !(after_prev && before_next) {
            return Err(ScaleError::UnsortedScale);
        }
        self.scale[index] = value;
        self.refresh_scale_cache();
        Ok(())
    }

    /// Uniform scale `q(initial) + k·q(step)`; `step` must be positive.
    ///
    /// Equivalent to IGOR's `SetScale/P`.
    pub fn set_scale_from_steps(&mut self, initial: f64, step: f64) -> Result<()> {
        self.scale = scale::from_steps(self.size(), initial, step, self.precision)?;
        self.refresh_scale_cache();
        Ok(())
    }

    /// Uniform scale with first value `min` and last value `max`;
    /// requires `max > min`.
    ///
    /// Equivalent to IGOR's `SetScale/I`.
    pub fn set_scale_from_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.scale = scale::from_range(self.size(), min, max, self.precision)?;
        self.refresh_scale_cache();
        Ok(())
    }

    /// Change the rounding setting and re-quantize the stored data.
    ///
    /// Digits already dropped by a coarser setting do not come back.
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
        for v in &mut self.scale {
            *v = precision.quantize(*v);
        }
        for v in &mut self.samples {
            *v = precision.quantize(*v);
        }
        self.refresh_scale_cache();
    }

    /// Piecewise-linear estimate at `coord`, flat-clamped at both ends.
    ///
    /// `coord` is quantized like the stored scale, so a query equal to a
    /// knot up to rounding noise returns that knot's sample exactly. The
    /// neighbouring samples are found by binary search; the scale does not
    /// have to be uniform.
    pub fn interpolate_value(&self, coord: f64) -> S {
        let coord = self.precision.quantize(coord);
        lerp_clamped(&self.scale, &self.samples, coord)
    }

    /// [`interpolate_value`](Self::interpolate_value) applied element-wise;
    /// the result has the shape of `coords`.
    pub fn interpolate_values<Sd, D>(&self, coords: &ArrayBase<Sd, D>) -> Array<S, D>
    where
        Sd: Data<Elem = f64>,
        D: Dimension,
    {
        coords.mapv(|c| self.interpolate_value(c))
    }

    fn refresh_scale_cache(&mut self) {
        if self.scale.len() > 1 {
            self.offset = self.scale[0];
            self.delta = (self.scale[1] - self.scale[0]).abs();
        } else {
            self.offset = f64::NAN;
            self.delta = 0.0;
        }
    }
}

impl ScaledArray<f64> {
    /// Coordinate at which the samples reach `value`.
    ///
    /// Linear interpolation of the `(sample, scale)` pairs, clamped to the
    /// scale ends. Meaningful only when the samples are monotonic (either
    /// direction); otherwise the result is unspecified.
    pub fn interpolate_scale_value(&self, value: f64) -> f64 {
        interp_monotonic(&self.samples, &self.scale, value)
    }

    /// [`interpolate_scale_value`](Self::interpolate_scale_value) applied
    /// element-wise.
    pub fn interpolate_scale_values<Sd, D>(&self, values: &ArrayBase<Sd, D>) -> Array<f64, D>
    where
        Sd: Data<Elem = f64>,
        D: Dimension,
    {
        values.mapv(|v| self.interpolate_scale_value(v))
    }
}
