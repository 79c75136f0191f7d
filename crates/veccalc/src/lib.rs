//! Euclidean vector arithmetic.
//!
//! This crate provides a small set of pure operations on [`Vector`]s: element-wise addition and
//! subtraction, scaling, dot and cross products, lengths, angles, normalization, orthogonality
//! and parallelism tests, and projection of one vector onto another.
//!
//! Every operation is available in two forms:
//!
//! - As a freestanding function named after the operation ([`add`], [`subtract`], [`scale`],
//!   [`dot`], [`length`], [`is_orthogonal`], [`angle_between`], [`unit`], [`is_parallel`],
//!   [`project`], [`orthogonal_component`], [`cross_product`]).
//! - As a method on [`Vector`] ([`Vector::checked_add`], [`Vector::dot`], [`Vector::normalize`],
//!   and so on).
//!
//! # Dimensions
//!
//! The dimension of a [`Vector`] is only known at runtime. Operations that combine two vectors
//! check that their dimensions match, and return [`Error::DimensionMismatch`] if they don't. The
//! cross product is only defined for 3-dimensional vectors and returns
//! [`Error::InvalidDimension`] for anything else.
//!
//! Operations that have to divide by a vector's length (normalization, angles, projection) return
//! [`Error::DegenerateVector`] when handed a zero-length vector, instead of producing `NaN` or
//! infinite elements.
//!
//! # Floating-point comparisons
//!
//! [`is_orthogonal`] and [`is_parallel`] compare their intermediate results *exactly*, which is
//! rarely what you want for computed inputs. The [`is_orthogonal_within`] and
//! [`is_parallel_within`] variants (and their `_approx` shorthands) accept a tolerance instead.
//! The [`approx`] module contains the underlying comparison machinery.
//!
//! # Logging
//!
//! Failures are reported through the [`log`] facade at *trace* level before being returned. The
//! crate never installs a logger.

pub mod approx;
mod error;
mod func;
mod traits;
mod vector;

#[cfg(test)]
mod test;

pub use error::*;
pub use func::*;
pub use traits::*;
pub use vector::*;
