//! Errors raised by the scaled containers.

use thiserror::Error;

use crate::interp::InterpError;

/// Failure of a construction, mutation, or interpolation request.
///
/// Every check runs before any field of the target is written, so an `Err`
/// leaves the container exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ScaleError {
    /// Data and coordinate dimensions disagree.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Zero-length series where at least one sample is required.
    #[error("series must contain at least one sample")]
    EmptySeries,

    /// Axis selector other than 0 (x) or 1 (y).
    #[error("axis must be 0 or 1, found {0}")]
    InvalidAxis(usize),

    /// Non-positive (or NaN) scale step.
    #[error("scale step must be > 0.0, found {0}")]
    InvalidStep(f64),

    /// Empty or inverted scale range.
    #[error("max scale value ({max}) must be > min scale value ({min})")]
    InvalidRange { min: f64, max: f64 },

    /// Scale is not in non-decreasing order.
    #[error("scale values must be non-decreasing")]
    UnsortedScale,

    /// The surface fit refused the grid.
    #[error("interpolator: {0}")]
    Interp(#[from] InterpError),
}

impl ScaleError {
    pub(crate) fn length_mismatch(expected: usize, found: usize) -> Self {
        ScaleError::ShapeMismatch {
            expected: vec![expected],
            found: vec![found],
        }
    }

    pub(crate) fn grid_mismatch(expected: (usize, usize), found: (usize, usize)) -> Self {
        ScaleError::ShapeMismatch {
            expected: vec![expected.0, expected.1],
            found: vec![found.0, found.1],
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, ScaleError>;
