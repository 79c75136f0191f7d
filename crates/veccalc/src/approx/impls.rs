use super::ApproxEq;

macro_rules! float_impls {
    ($($ty:ty),+) => {
        $(
            impl ApproxEq for $ty {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // `inf == inf`, `inf != -inf`, `NaN != NaN`
                        return self == other;
                    }

                    (self - other).abs() <= abs_tolerance
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }

                    let largest = self.abs().max(other.abs());
                    (self - other).abs() <= largest * rel_tolerance
                }
            }
        )+
    };
}
float_impls!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }
}
