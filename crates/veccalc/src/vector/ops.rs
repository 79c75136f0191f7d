//! Implementations of `std::ops` and comparison traits.
//!
//! Only the operators that cannot fail are provided. Element-wise addition and subtraction need a
//! dimension check and are exposed as [`Vector::checked_add`] and [`Vector::checked_sub`] instead.

use std::ops::{Index, Mul, Neg};

use crate::{approx::ApproxEq, traits::Number};

use super::Vector;

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, U> PartialEq<Vector<U>> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for Vector<T> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for Vector<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

/// Vectors of different dimension are never approximately equal.
impl<T> ApproxEq for Vector<T>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}

/// Element-wise negation.
impl<T> Neg for Vector<T>
where
    T: Neg + Copy,
{
    type Output = Vector<T::Output>;

    fn neg(self) -> Self::Output {
        self.map(|&e| -e)
    }
}

/// Element-wise negation.
impl<T> Neg for &Vector<T>
where
    T: Neg + Copy,
{
    type Output = Vector<T::Output>;

    fn neg(self) -> Self::Output {
        self.map(|&e| -e)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{approx::ApproxEq, Vector};

    #[test]
    fn index() {
        let v = Vector::from([1.5, -2.0]);
        assert_eq!(v[0], 1.5);
        assert_eq!(v[1], -2.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = Vector::from([1.5, -2.0]);
        let _ = v[2];
    }

    #[test]
    fn eq() {
        let v = Vector::from([1, 2]);
        assert_eq!(v, [1, 2]);
        assert_eq!([1, 2], v);
        assert_eq!(v, &[1, 2][..]);
        assert_ne!(v, Vector::from([1, 2, 0]));
        assert_eq!(Vector::from([0.0]), Vector::from([-0.0]));
        assert_ne!(Vector::from([f32::NAN]), Vector::from([f32::NAN]));
    }

    #[test]
    fn approx() {
        let a = Vector::from([1.0f32, 2.0]);
        assert!(a.approx_eq(&Vector::from([1.0, 2.0 + f32::EPSILON])));
        assert!(!a.approx_eq(&Vector::from([1.0, 2.0, 0.0])));
        assert!(a.abs_diff_eq(&Vector::from([1.1, 1.9]), 0.2));
        assert!(!a.abs_diff_eq(&Vector::from([1.1, 1.9]), 0.05));
    }

    #[test]
    fn arith() {
        let v = Vector::from([1, -2, 3]);
        assert_eq!(-&v, [-1, 2, -3]);
        assert_eq!(-v.clone(), [-1, 2, -3]);
        assert_eq!(&v * 2, [2, -4, 6]);
        assert_eq!(v * 0, [0, 0, 0]);
    }
}
