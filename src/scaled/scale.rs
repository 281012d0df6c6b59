use crate::error::{Result, ScaleError};
use crate::precision::Precision;

/// Uniform scale `initial + k·step` for `k in 0..len`.
///
/// `initial` and `step` are quantized first; the products are not, so
/// `scale[k] == q(initial) + k as f64 * q(step)` bit for bit.
pub(crate) fn from_steps(
    len: usize,
    initial: f64,
    step: f64,
    precision: Precision,
) -> Result<Vec<f64>> {
    // `!(step > 0.0)` also rejects NaN
    if !(step > 0.0) {
        return Err(ScaleError::InvalidStep(step));
    }
    let v0 = precision.quantize(initial);
    let dv = precision.quantize(step);
    Ok((0..len).map(|k| v0 + k as f64 * dv).collect())
}

/// Uniform scale running from `min` to `max` inclusive.
///
/// A single-point scale sits at `min`.
pub(crate) fn from_range(len: usize, min: f64, max: f64, precision: Precision) -> Result<Vec<f64>> {
    if !(max > min) {
        return Err(ScaleError::InvalidRange { min, max });
    }
    let span = max - min;
    let step = if len > 1 { span / (len - 1) as f64 } else { span };
    from_steps(len, min, step, precision)
}

/// Reject scales that step backwards.
pub(crate) fn check_non_decreasing(scale: &[f64]) -> Result<()> {
    if scale.windows(2).all(|w| w[0] <= w[1]) {
        Ok(())
    } else {
        Err(ScaleError::UnsortedScale)
    }
}
