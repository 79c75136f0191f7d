//! Approximate equality.
//!
//! Results of [`Vector`][crate::Vector] operations that involve square roots, division or
//! trigonometry are rarely exact. This module provides the [`ApproxEq`] trait for comparing such
//! results with a tolerance, and the [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros built on top of it.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (slices, [`Vector`][crate::Vector]s) are approximately equal if they have the
/// same length and all of their elements are.
///
/// `NaN` is never approximately equal to anything. Infinities are only equal to infinities of the
/// same sign.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance values, typically the compared primitive float type.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// The values are considered equal if their absolute difference is at most `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// The values are considered equal if their absolute difference is at most `rel_tolerance`
    /// times the larger of their magnitudes.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` using the default tolerances of the tolerance type.
    ///
    /// The values are equal if either an absolute comparison with
    /// [`DEFAULT_ABS_TOLERANCE`][DefaultTolerances::DEFAULT_ABS_TOLERANCE] or a relative comparison
    /// with [`DEFAULT_REL_TOLERANCE`][DefaultTolerances::DEFAULT_REL_TOLERANCE] considers them
    /// equal.
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, Self::Tolerance::DEFAULT_ABS_TOLERANCE)
            || self.rel_diff_eq(other, Self::Tolerance::DEFAULT_REL_TOLERANCE)
    }
}

/// Default tolerance values for a tolerance type.
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance used by [`is_orthogonal_approx`][crate::is_orthogonal_approx] and
    /// [`is_parallel_approx`][crate::is_parallel_approx].
    ///
    /// This bounds the cosine of the angle for orthogonality, and the per-element difference of the
    /// unit vectors for parallelism.
    const DEFAULT_DIRECTION_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_DIRECTION_TOLERANCE: Self = 1e-5;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_DIRECTION_TOLERANCE: Self = 1e-12;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped (at the end of the statement containing the
/// macro invocation). Before that, [`Asserter::abs`] and [`Asserter::rel`] can be used to select
/// the comparison to perform. If both are called, the values are considered equal if either
/// comparison considers them equal. If neither is called, [`ApproxEq::approx_eq`] decides.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Compares the values by their absolute difference, using the given tolerance.
    ///
    /// Best suited for values close to zero.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the values by their relative difference, using the given tolerance.
    ///
    /// Not useful for comparisons against zero: any non-zero value needs a relative tolerance of at
    /// least 1.0 to compare equal to 0.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&self) -> bool {
        match (self.abs, self.rel) {
            (None, None) => self.left.approx_eq(self.right),
            (abs, rel) => {
                abs.map_or(false, |abs| self.left.abs_diff_eq(self.right, abs))
                    || rel.map_or(false, |rel| self.left.rel_diff_eq(self.right, rel))
            }
        }
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // `#[track_caller]` has no effect on `drop`, so the panic location points here. The location
    // of the macro invocation is part of the message instead.
    match args {
        Some(args) => panic!(
            "assertion `left {op} right` failed at {location}: {args}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to pick the comparison
/// and tolerance.
///
/// # Examples
///
/// ```
/// # use veccalc::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
///
/// let v = unit(&Vector::from([3.0, 4.0])).unwrap();
/// assert_approx_eq!(v, Vector::from([0.6, 0.8]));
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// The counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use veccalc::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(Vector::from([1.0, 0.0]), Vector::from([1.0, 0.0, 0.0]));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "off by one")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "off by {}", "one");
    }

    #[test]
    fn defaults() {
        assert_approx_eq!(1.0f32, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0e10f64, 1.0e10 + 1.0e-6);
        assert_approx_ne!(1.0f64, 1.0 + 4.0 * f64::EPSILON);
        assert!(0.3f64.approx_eq(&(0.1 + 0.2)));
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
        assert_approx_ne!(0.0, 0.00001).rel(0.5);
    }

    #[test]
    fn abs_or_rel() {
        assert_approx_eq!(100.0, 99.0).abs(0.5).rel(0.02);
        assert_approx_ne!(100.0, 99.0).abs(0.5).rel(0.005);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f32::NAN, 0.0).abs(1.0);
        assert_approx_ne!(f64::NAN, 0.0).rel(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_eq!(f64::NEG_INFINITY, f64::NEG_INFINITY).rel(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY).rel(10000.0);
    }

    #[test]
    fn slices() {
        let a: &[f64] = &[1.0, 2.0];
        let b: &[f64] = &[1.0, 2.0 + f64::EPSILON];
        let c: &[f64] = &[1.0, 2.0, 3.0];
        assert!(a.approx_eq(b));
        assert!(!a.approx_eq(c));
        assert!(!c.approx_eq(a));
    }
}
