//! Freestanding functions for every vector operation.
//!
//! These forward to the equivalent [`Vector`] methods and exist for callers that prefer the
//! `operation(a, b)` form.

use crate::{
    approx::DefaultTolerances,
    error::Result,
    traits::{Number, Real},
    Vector,
};

/// Element-wise sum of `a` and `b`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `a` and `b` have
/// different dimensions.
///
/// # Examples
///
/// ```
/// # use veccalc::*;
/// let sum = add(&Vector::from([1, 2, 3]), &Vector::from([4, 5, 6]))?;
/// assert_eq!(sum, [5, 7, 9]);
/// # Ok::<_, Error>(())
/// ```
pub fn add<T: Number>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.checked_add(b)
}

/// Element-wise difference `a - b`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `a` and `b` have
/// different dimensions.
pub fn subtract<T: Number>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.checked_sub(b)
}

/// Multiplies every element of `v` with `k`.
pub fn scale<T: Number>(k: T, v: &Vector<T>) -> Vector<T> {
    v.scale(k)
}

/// Dot product of `a` and `b`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `a` and `b` have
/// different dimensions.
pub fn dot<T: Number>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    a.dot(b)
}

/// Euclidean length of `v`.
///
/// # Examples
///
/// ```
/// # use veccalc::*;
/// assert_eq!(length(&Vector::from([3.0, 4.0])), 5.0);
/// ```
pub fn length<T: Real>(v: &Vector<T>) -> T {
    v.length()
}

/// Returns `true` if the dot product of `a` and `b` is exactly zero.
///
/// See [`is_orthogonal_within`] for a tolerant version.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `a` and `b` have
/// different dimensions.
pub fn is_orthogonal<T: Number>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    a.is_orthogonal_to(b)
}

/// Returns `true` if the cosine of the angle between `a` and `b` is within `tolerance` of zero.
pub fn is_orthogonal_within<T: Real>(
    a: &Vector<T>,
    b: &Vector<T>,
    tolerance: T,
) -> Result<bool> {
    a.is_orthogonal_within(b, tolerance)
}

/// [`is_orthogonal_within`] using the element type's
/// [`DEFAULT_DIRECTION_TOLERANCE`][DefaultTolerances::DEFAULT_DIRECTION_TOLERANCE].
pub fn is_orthogonal_approx<T: Real>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    a.is_orthogonal_within(b, <T as DefaultTolerances>::DEFAULT_DIRECTION_TOLERANCE)
}

/// Angle between `a` and `b`, in degrees (`0..=180`).
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `a` and `b` have
/// different dimensions, and [`Error::DegenerateVector`][crate::Error::DegenerateVector] if either
/// has zero length.
///
/// # Examples
///
/// ```
/// # use veccalc::*;
/// let angle = angle_between(&Vector::from([1.0, 0.0]), &Vector::from([0.0, 1.0]))?;
/// assert_approx_eq!(angle, 90.0);
/// # Ok::<_, Error>(())
/// ```
pub fn angle_between<T: Real>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    a.angle_to_degrees(b)
}

/// Unit vector pointing in the direction of `v`.
///
/// # Errors
///
/// Returns [`Error::DegenerateVector`][crate::Error::DegenerateVector] if `v` has zero length.
pub fn unit<T: Real>(v: &Vector<T>) -> Result<Vector<T>> {
    v.normalize()
}

/// Returns `true` if `unit(a)` and `unit(b)` are exactly equal.
///
/// Vectors pointing in opposite directions are *not* parallel by this definition.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `a` and `b` have
/// different dimensions, and [`Error::DegenerateVector`][crate::Error::DegenerateVector] if either
/// has zero length.
pub fn is_parallel<T: Real>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    a.is_parallel_to(b)
}

/// Returns `true` if `unit(a)` and `unit(b)` differ by at most `tolerance` in every element.
pub fn is_parallel_within<T: Real>(
    a: &Vector<T>,
    b: &Vector<T>,
    tolerance: T,
) -> Result<bool> {
    a.is_parallel_within(b, tolerance)
}

/// [`is_parallel_within`] using the element type's
/// [`DEFAULT_DIRECTION_TOLERANCE`][DefaultTolerances::DEFAULT_DIRECTION_TOLERANCE].
pub fn is_parallel_approx<T: Real>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    a.is_parallel_within(b, <T as DefaultTolerances>::DEFAULT_DIRECTION_TOLERANCE)
}

/// Orthogonal projection of `a` onto `b`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `a` and `b` have
/// different dimensions, and [`Error::DegenerateVector`][crate::Error::DegenerateVector] if `b`
/// has zero length.
///
/// # Examples
///
/// ```
/// # use veccalc::*;
/// let p = project(&Vector::from([3.0, 4.0]), &Vector::from([1.0, 0.0]))?;
/// assert_eq!(p, [3.0, 0.0]);
/// # Ok::<_, Error>(())
/// ```
pub fn project<T: Real>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.project_onto(b)
}

/// Component of `a` perpendicular to `b`: `a - project(a, b)`.
///
/// # Errors
///
/// Same as [`project`].
pub fn orthogonal_component<T: Real>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.reject_from(b)
}

/// Cross product of two 3-dimensional vectors.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`][crate::Error::InvalidDimension] unless both `a` and `b` have
/// exactly 3 elements.
///
/// # Examples
///
/// ```
/// # use veccalc::*;
/// let z = cross_product(&Vector::from([1, 0, 0]), &Vector::from([0, 1, 0]))?;
/// assert_eq!(z, [0, 0, 1]);
///
/// let err = cross_product(&Vector::from([1, 2]), &Vector::from([3, 4]));
/// assert_eq!(err, Err(Error::InvalidDimension { expected: 3, actual: 2 }));
/// # Ok::<_, Error>(())
/// ```
pub fn cross_product<T: Number>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    a.cross(b)
}
