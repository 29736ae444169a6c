//! Homogeneous vector and matrix transforms for DCL.
//!
//! This crate provides the value types the rest of DCL builds on: [`Vector`], a 4-component
//! homogeneous vector, [`Matrix`], a 4x4 transform matrix, and [`Complex`], a complex number. All
//! are plain `Copy` values; every operation returns a new value and never mutates its receiver.
//! Small scalar helpers (`radians`, `modulo`, `clamp`, `lerp`) live in [`trig`].
//!
//! # Conventions
//!
//! - Vectors are *row vectors* and are multiplied on the *left* of a matrix: `v' = v · M`. This is
//!   what [`Vector::transform_by`] computes.
//! - Consequently, `a.multiply(b)` (or `a * b`) yields a matrix that applies `a` *first* and `b`
//!   second. The builder methods [`Matrix::scale`], [`Matrix::rotate_axis`] and
//!   [`Matrix::translate`] append their transform after everything already in the matrix.
//! - Matrices are stored row-major. The translation lives in the last row, and the last column
//!   controls the homogeneous `w` of transformed vectors.
//! - The `w` component of a [`Vector`] is `1` for points and `0` for directions. Translations only
//!   affect points.
//! - Angles passed to this crate are in *degrees*.
//!
//! # Degenerate Input
//!
//! None of the numeric operations check their input. Normalizing a zero vector, projecting a point
//! onto the eye plane, fast-inverting a matrix that contains scale, or building a look-at matrix
//! from parallel vectors all produce `NaN`, infinities, or finite garbage rather than an error.
//! The only fallible operation is parsing an [`Axis`] from its name.

mod axis;
mod complex;
mod error;
mod matrix;
pub mod trig;
mod vector;

pub use axis::*;
pub use complex::*;
pub use error::*;
pub use matrix::*;
pub use vector::*;
