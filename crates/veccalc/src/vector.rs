use std::{fmt, slice};

use crate::{
    approx::ApproxEq,
    error::{Error, Result},
    traits::{Number, Real, Zero},
};

mod ops;

/// An immutable vector of numbers whose dimension is determined at runtime.
///
/// # Construction
///
/// - From an array, a [`Vec`], a boxed slice or a borrowed slice, via their [`From`] impls.
/// - From an iterator, via [`FromIterator`] (`iter.collect::<Vector<_>>()`).
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::splat`] copies one value into every element.
/// - [`Vector::zero`] creates the zero vector of a given dimension.
///
/// # Immutability
///
/// A [`Vector`] never changes after construction. There is no mutable element access; every
/// operation returns a new [`Vector`]. Elements can be read via [`Index`][std::ops::Index],
/// [`Vector::as_slice`] and [`Vector::iter`].
///
/// # Fallible operations
///
/// Operations that combine two vectors return [`Error::DimensionMismatch`] when the dimensions
/// differ. Operations that divide by a length return [`Error::DegenerateVector`] for zero-length
/// inputs. The only infallible operations are the ones on a single vector ([`Vector::scale`],
/// [`Vector::length`], negation).
#[derive(Clone, Hash)]
pub struct Vector<T>(Box<[T]>);

impl<T> Vector<T> {
    /// Creates a `dim`-dimensional vector where each element is initialized by invoking a closure
    /// with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let v = Vector::from_fn(3, |i| i as i32 * 10);
    /// assert_eq!(v, [0, 10, 20]);
    /// ```
    pub fn from_fn<F>(dim: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        (0..dim).map(cb).collect()
    }

    /// Creates a `dim`-dimensional vector with each element initialized to `elem`.
    pub fn splat(dim: usize, elem: T) -> Self
    where
        T: Copy,
    {
        Self(vec![elem; dim].into_boxed_slice())
    }

    /// Creates the `dim`-dimensional zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// assert_eq!(Vector::<f32>::zero(2), [0.0, 0.0]);
    /// assert_eq!(Vector::<f32>::zero(2).length(), 0.0);
    /// ```
    pub fn zero(dim: usize) -> Self
    where
        T: Zero + Copy,
    {
        Self::splat(dim, T::ZERO)
    }

    /// Returns the number of elements in this vector.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Converts this vector into a [`Vec`] of its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let v = Vector::from([1, 2, 3]).map(|i| i * 10);
    /// assert_eq!(v, [10, 20, 30]);
    /// ```
    pub fn map<F, U>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    fn check_dim<U>(&self, other: &Vector<U>) -> Result<()> {
        if self.dim() == other.dim() {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(self.dim(), other.dim()))
        }
    }

    /// Combines the elements of `self` and `other` pairwise.
    fn zip_with<U, F>(&self, other: &Self, mut f: F) -> Result<Vector<U>>
    where
        T: Copy,
        F: FnMut(T, T) -> U,
    {
        self.check_dim(other)?;
        Ok(self.iter().zip(other).map(|(&a, &b)| f(a, b)).collect())
    }
}

impl<T: Number> Vector<T> {
    /// Element-wise addition of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let a = Vector::from([1, 2, 3]);
    /// let b = Vector::from([4, 5, 6]);
    /// assert_eq!(a.checked_add(&b)?, [5, 7, 9]);
    ///
    /// let c = Vector::from([1, 2]);
    /// assert_eq!(a.checked_add(&c), Err(Error::DimensionMismatch { left: 3, right: 2 }));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise subtraction of `other` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every element with the scalar `k`.
    ///
    /// The `*` operator does the same thing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let v = Vector::from([1.0, -2.0]);
    /// assert_eq!(v.scale(3.0), [3.0, -6.0]);
    /// assert_eq!(v.scale(3.0), v * 3.0);
    /// ```
    pub fn scale(&self, k: T) -> Self {
        self.map(|&e| k * e)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative angle of the two
    /// vectors:
    /// - If the dot product is greater than zero, the angle between the vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let a = Vector::from([1, 3, -5]);
    /// let b = Vector::from([4, -2, -1]);
    /// assert_eq!(a.dot(&b)?, 3);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_dim(other)?;
        Ok(self
            .iter()
            .zip(other)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b))
    }

    /// Returns the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// assert_eq!(Vector::from([4, 0]).length2(), 16);
    /// ```
    pub fn length2(&self) -> T {
        self.iter().fold(T::ZERO, |acc, &e| acc + e * e)
    }

    /// Returns `true` if the dot product of `self` and `other` is *exactly* zero.
    ///
    /// For vectors computed with floating-point arithmetic, [`Vector::is_orthogonal_within`] is
    /// usually the better choice.
    ///
    /// The zero vector is orthogonal to every vector of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions.
    pub fn is_orthogonal_to(&self, other: &Self) -> Result<bool> {
        Ok(self.dot(other)? == T::ZERO)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Swapping the
    /// arguments inverts its direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] unless both vectors are 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let x = Vector::from([1, 0, 0]);
    /// let y = Vector::from([0, 1, 0]);
    /// assert_eq!(x.cross(&y)?, [0, 0, 1]);
    /// assert_eq!(y.cross(&x)?, [0, 0, -1]);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        let &[a0, a1, a2] = self.as_slice() else {
            return Err(Error::invalid_dimension(3, self.dim()));
        };
        let &[b0, b1, b2] = other.as_slice() else {
            return Err(Error::invalid_dimension(3, other.dim()));
        };

        #[rustfmt::skip]
        let cross = Self::from([
            a1 * b2 - a2 * b1,
            a2 * b0 - a0 * b2,
            a0 * b1 - a1 * b0,
        ]);
        Ok(cross)
    }
}

impl<T: Real> Vector<T> {
    /// Returns the Euclidean length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// assert_eq!(Vector::from([3.0, 4.0]).length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Returns the squared length, or an error if it is zero.
    fn nonzero_length2(&self) -> Result<T> {
        let length2 = self.length2();
        if length2 == T::ZERO {
            Err(Error::degenerate(self.dim()))
        } else {
            Ok(length2)
        }
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateVector`] if `self` has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let z = Vector::from([0.0, 0.0, 4.0]).normalize()?;
    /// assert_eq!(z, [0.0, 0.0, 1.0]);
    ///
    /// assert_eq!(Vector::<f64>::zero(3).normalize(), Err(Error::DegenerateVector));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn normalize(&self) -> Result<Self> {
        let length = self.nonzero_length2()?.sqrt();
        Ok(self.scale(T::ONE / length))
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// The result lies in `[0, π]`. The angle of a vector to itself is exactly 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions, and
    /// [`Error::DegenerateVector`] if either of them has zero length.
    pub fn abs_angle_to(&self, other: &Self) -> Result<T> {
        self.check_dim(other)?;
        let a = self.nonzero_length2()?.sqrt();
        let b = other.nonzero_length2()?.sqrt();
        if self == other {
            return Ok(T::ZERO);
        }

        let cos = self.dot(other)? / (a * b);
        // Rounding can push the cosine slightly out of `acos`'s domain.
        let cos = if cos > T::ONE {
            T::ONE
        } else if cos < -T::ONE {
            -T::ONE
        } else {
            cos
        };
        Ok(cos.acos())
    }

    /// Computes the smallest positive angle between `self` and `other`, in degrees.
    ///
    /// The result lies in `[0, 180]`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::abs_angle_to`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let x = Vector::from([1.0, 0.0]);
    /// let y = Vector::from([0.0, 2.0]);
    /// assert_approx_eq!(x.angle_to_degrees(&y)?, 90.0);
    /// assert_approx_eq!(x.angle_to_degrees(&-&x)?, 180.0);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn angle_to_degrees(&self, other: &Self) -> Result<T> {
        Ok(self.abs_angle_to(other)?.to_degrees())
    }

    /// Returns `true` if the unit vectors of `self` and `other` are *exactly* equal.
    ///
    /// Only vectors pointing in the same direction are considered parallel. Vectors pointing in
    /// opposite directions are not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions, and
    /// [`Error::DegenerateVector`] if either of them has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let a = Vector::from([1.0, 2.0]);
    /// assert!(a.is_parallel_to(&(&a * 4.0))?);
    /// assert!(!a.is_parallel_to(&-&a)?);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        self.check_dim(other)?;
        Ok(self.normalize()? == other.normalize()?)
    }

    /// Returns `true` if the cosine of the angle between `self` and `other` is within `tolerance`
    /// of zero.
    ///
    /// The zero vector is orthogonal to every vector of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions.
    pub fn is_orthogonal_within(&self, other: &Self, tolerance: T) -> Result<bool> {
        let dot = self.dot(other)?;
        let bound = tolerance * self.length() * other.length();
        Ok(dot.abs_diff_eq(&T::ZERO, bound))
    }

    /// Returns `true` if the unit vectors of `self` and `other` differ by at most `tolerance` in
    /// every element.
    ///
    /// Like [`Vector::is_parallel_to`], this does not consider opposite directions parallel.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::is_parallel_to`].
    pub fn is_parallel_within(&self, other: &Self, tolerance: T) -> Result<bool> {
        self.check_dim(other)?;
        Ok(self
            .normalize()?
            .abs_diff_eq(&other.normalize()?, tolerance))
    }

    /// Computes the orthogonal projection of `self` onto the direction of `onto`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the vectors have different dimensions, and
    /// [`Error::DegenerateVector`] if `onto` has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let a = Vector::from([3.0, 4.0]);
    /// let x = Vector::from([2.0, 0.0]);
    /// assert_eq!(a.project_onto(&x)?, [3.0, 0.0]);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn project_onto(&self, onto: &Self) -> Result<Self> {
        self.check_dim(onto)?;
        let unit = onto.normalize()?;
        Ok(unit.scale(self.dot(&unit)?))
    }

    /// Computes the component of `self` that is orthogonal to `from` (the *vector rejection*).
    ///
    /// Adding the result to `self.project_onto(from)` yields `self` again (up to rounding).
    ///
    /// # Errors
    ///
    /// Same as [`Vector::project_onto`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use veccalc::*;
    /// let a = Vector::from([3.0, 4.0]);
    /// let x = Vector::from([1.0, 0.0]);
    /// assert_eq!(a.reject_from(&x)?, [0.0, 4.0]);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn reject_from(&self, from: &Self) -> Result<Self> {
        self.checked_sub(&self.project_onto(from)?)
    }
}

impl<T> From<Box<[T]>> for Vector<T> {
    #[inline]
    fn from(value: Box<[T]>) -> Self {
        Self(value)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(Box::new(value))
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    #[inline]
    fn from(value: &[T]) -> Self {
        Self(value.into())
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(value: Vector<T>) -> Self {
        value.into_vec()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}
