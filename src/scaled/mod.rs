//! Coordinate-aware containers: a 1D sample vector with one scale, and a
//! 2D grid with a scale per axis.
//!
//! Both quantize every value they store (see [`Precision`](crate::Precision))
//! and build uniform scales the same way, from an `(initial, step)` pair or
//! a `(min, max)` range. [`ScaledMatrix`] additionally caches its spline
//! surface and drops it on any mutation.

mod array;
mod matrix;
mod scale;


pub use array::ScaledArray;
pub use matrix::{ComplexSurface, InterpolatorCache, ScaledMatrix};
