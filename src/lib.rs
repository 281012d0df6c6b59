//! # scalegrid
//!
//! Coordinate-aware numeric containers for sampled physical quantities,
//! e.g. a wavefront amplitude over a transverse plane. Samples are stored
//! together with the coordinate of every node, and can be queried at
//! arbitrary coordinates rather than only at indices.
//!
//! ## Quick start
//!
//! ```
//! use ndarray::Array2;
//! use num_complex::Complex64;
//! use scalegrid::{ScaledArray, ScaledMatrix};
//!
//! // 1D: uniform scale from a range, clamped linear lookup
//! let a = ScaledArray::from_range(ndarray::array![0.0, 1.0, 4.0, 9.0], 0.0, 3.0).unwrap();
//! assert_eq!(a.interpolate_value(2.5), 6.5);
//!
//! // 2D: uniform scales from steps, spline surface fitted on first query
//! let z = Array2::from_shape_fn((8, 6), |(i, j)| Complex64::new(i as f64, j as f64));
//! let mut m = ScaledMatrix::from_steps(z, -1.0, 0.25, 0.0, 0.5).unwrap();
//! let v = m.interpolate_value(-0.875, 1.25).unwrap();
//! assert!((v - Complex64::new(0.5, 2.5)).norm() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`scaled`]: [`ScaledArray`] (1D samples + scale, clamped piecewise-linear
//!   interpolation and its monotonic inverse) and [`ScaledMatrix`] (complex 2D
//!   grid + per-axis scales, lazily cached spline surface).
//!
//! - [`interp`]: The kernels underneath: clamped linear lookup, not-a-knot
//!   cubic spline, and [`RectBivariateSpline`](interp::RectBivariateSpline),
//!   an interpolating tensor-product spline on a rectangular grid.
//!
//! - [`precision`]: [`Precision`], the fixed-digit rounding applied to every
//!   stored coordinate and value (12 decimal digits by default).
//!
//! - [`traits`]: Element traits:
//!   - [`FloatScalar`]: real float knots for the interpolation kernels
//!   - [`Sample`]: values a [`ScaledArray`] can hold (`f64`, `Complex64`)
//!
//! ## Uniform scales
//!
//! Both containers build uniform scales the way IGOR's `SetScale` does:
//! `/P` from an initial value and a positive step (`set_scale_from_steps`),
//! `/I` from an inclusive `min..=max` range (`set_scale_from_range`).
//!
//! ## Logging
//!
//! Fitting a [`ScaledMatrix`] surface is the one expensive hidden step; it is
//! reported at `debug` level through the [`log`] facade.

pub mod error;
pub mod interp;
pub mod precision;
pub mod scaled;
pub mod traits;

pub use error::{Result, ScaleError};
pub use precision::{DEFAULT_DECIMALS, Precision, Quantize};
pub use scaled::{ComplexSurface, InterpolatorCache, ScaledArray, ScaledMatrix};
pub use traits::{FloatScalar, Sample, Scalar};

pub use num_complex::Complex64;
