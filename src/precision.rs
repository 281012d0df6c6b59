//! Fixed-digit quantization of coordinates and samples.
//!
//! Every value entering a [`ScaledArray`](crate::ScaledArray) or
//! [`ScaledMatrix`](crate::ScaledMatrix) is rounded to a fixed number of
//! decimal digits first. Boundary tests during interpolation (`<=`, `==`
//! against scale endpoints) then compare values that went through the same
//! rounding, so representation noise such as `0.1 + 0.2 != 0.3` does not
//! move a query to the wrong side of a knot.
//!
//! Rounding is half-to-even on `x · 10^d`, the rule NumPy's `round` uses.

use num_complex::Complex64;

/// Number of decimal digits kept by [`Precision::default`].
pub const DEFAULT_DECIMALS: i32 = 12;

/// Rounding applied at every mutation boundary of the scaled containers.
///
/// # Example
///
/// ```
/// use scalegrid::Precision;
///
/// let p = Precision::default();
/// assert_eq!(p.quantize(0.1 + 0.2), 0.3);
/// assert_eq!(Precision::exact().quantize(0.1 + 0.2), 0.1 + 0.2);
/// assert_eq!(Precision::decimals(2).quantize(1.005_1), 1.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    decimals: Option<i32>,
}

impl Precision {
    /// Round to `decimals` digits after the decimal point. Negative values
    /// round to tens, hundreds, and so on.
    pub const fn decimals(decimals: i32) -> Self {
        Self {
            decimals: Some(decimals),
        }
    }

    /// Store values unchanged.
    pub const fn exact() -> Self {
        Self { decimals: None }
    }

    /// Configured number of digits, `None` for [`Precision::exact`].
    pub fn digits(&self) -> Option<i32> {
        self.decimals
    }

    /// Quantize a real or complex value.
    #[inline]
    pub fn quantize<Q: Quantize>(&self, value: Q) -> Q {
        value.quantize(*self)
    }

    fn round(&self, x: f64) -> f64 {
        let Some(d) = self.decimals else {
            return x;
        };
        if !x.is_finite() {
            return x;
        }
        if d >= 0 {
            let factor = 10f64.powi(d);
            let scaled = x * factor;
            // |x| too large for the requested digits: nothing left to round
            if !scaled.is_finite() {
                return x;
            }
            scaled.round_ties_even() / factor
        } else {
            let factor = 10f64.powi(-d);
            (x / factor).round_ties_even() * factor
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::decimals(DEFAULT_DECIMALS)
    }
}

/// Values that can be rounded by a [`Precision`].
pub trait Quantize: Sized {
    fn quantize(self, precision: Precision) -> Self;
}

impl Quantize for f64 {
    #[inline]
    fn quantize(self, precision: Precision) -> Self {
        precision.round(self)
    }
}

/// Real and imaginary parts are rounded independently.
impl Quantize for Complex64 {
    #[inline]
    fn quantize(self, precision: Precision) -> Self {
        Complex64::new(precision.round(self.re), precision.round(self.im))
    }
}
