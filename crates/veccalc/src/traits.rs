use std::ops;

use crate::approx::{ApproxEq, DefaultTolerances};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the inverse cosine and conversion to degrees.
pub trait Trig {
    /// Computes the arccosine of `self`, in radians.
    ///
    /// Returns `NaN` if `self` is outside the range `[-1, 1]`.
    fn acos(self) -> Self;
    /// Converts `self` from radians to degrees.
    fn to_degrees(self) -> Self;
}

/// A trait for numeric vector elements that support basic arithmetic.
///
/// Signed integer and floating-point types implement this trait. Unsigned integers don't, since
/// negation is part of the vector interface. It is sufficient for the operations
/// that don't need to divide or take square roots (addition, subtraction, scaling, dot and cross
/// products, exact orthogonality).
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Real-valued vector elements: [`f32`] and [`f64`].
///
/// Required by operations involving lengths, normalization, angles and approximate comparisons.
pub trait Real:
    Number + Sqrt + Trig + PartialOrd + ApproxEq<Tolerance = Self> + DefaultTolerances
{
}
impl<T> Real for T where
    T: Number + Sqrt + Trig + PartialOrd + ApproxEq<Tolerance = Self> + DefaultTolerances
{
}

macro_rules! int_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }
            impl One for $ty {
                const ONE: Self = 1;
            }
        )+
    };
}
int_impls!(i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }
            impl One for $ty {
                const ONE: Self = 1.0;
            }
            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }
            impl Trig for $ty {
                fn acos(self) -> Self {
                    <$ty>::acos(self)
                }

                fn to_degrees(self) -> Self {
                    <$ty>::to_degrees(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    fn half_turn<T: Real>() -> T {
        (-T::ONE).acos().to_degrees()
    }

    #[test]
    fn float_trig() {
        assert_approx_eq!(half_turn::<f32>(), 180.0);
        assert_approx_eq!(half_turn::<f64>(), 180.0);
        assert!(Trig::acos(1.5f32).is_nan());
    }

    #[test]
    fn identities() {
        assert_eq!(i32::ZERO + i32::ONE, 1);
        assert_eq!(f64::ONE * f64::ONE, 1.0);
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
    }

    fn is_number<T: Number>() {}

    #[test]
    fn signed_integer_vectors() {
        is_number::<i8>();
        is_number::<isize>();

        let a = crate::Vector::from([1i64, -2, 3]);
        let b = crate::Vector::from([4i64, 5, -6]);
        assert_eq!(a.dot(&b), Ok(-24));
        assert_eq!(-&a, [-1, 2, -3]);
        assert_eq!(a.checked_sub(&b), Ok(crate::Vector::from([-3, -7, 9])));
        assert_eq!(a.cross(&b), Ok(crate::Vector::from([-3, 18, 13])));
        assert_eq!(a.is_orthogonal_to(&crate::Vector::from([2i64, 1, 0])), Ok(true));
    }
}
