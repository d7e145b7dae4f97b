use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Num, Signed};

/// Scalar type every planar primitive is generic over.
///
/// Two substrates implement it: `f64`, where equality means `|a - b| <= eps`, and
/// `BigRational`, where every value is exact and comparisons are made on values
/// rounded to an order of magnitude (see [`super::Precision`]).
///
/// Irrational results (square roots, trigonometry) are only ever produced through
/// the methods taking a tolerance, so the exact substrate always knows how far to
/// evaluate them.
pub trait Real: Num + Signed + Clone + Debug + PartialOrd + 'static {
    /// Tolerance descriptor threaded through every comparison.
    type Tolerance: Copy + Debug + PartialEq;

    /// Converts a float into this substrate. `None` for non-finite input.
    fn from_f64(value: f64) -> Option<Self>;

    /// Nearest `f64` to this value.
    fn to_f64(&self) -> f64;

    /// The value as seen at the given tolerance. Identity for floats.
    #[must_use]
    fn rounded(&self, tol: Self::Tolerance) -> Self;

    /// Equality under the tolerance contract of the substrate.
    fn approx_eq(&self, other: &Self, tol: Self::Tolerance) -> bool;

    /// Sign of the value, with values indistinguishable from zero reported as `Equal`.
    fn approx_sign(&self, tol: Self::Tolerance) -> Ordering;

    /// Square root, evaluated to the tolerance.
    ///
    /// Negative input is a programming error.
    #[must_use]
    fn sqrt(&self, tol: Self::Tolerance) -> Self;

    /// `(sin, cos)` of an angle in radians, accurate enough that rotating unit-scale
    /// coordinates stays within the tolerance.
    fn sin_cos(&self, tol: Self::Tolerance) -> (Self, Self);

    /// Four-quadrant arc tangent of `y / x`, in `(-pi, pi]`.
    fn atan2(y: &Self, x: &Self, tol: Self::Tolerance) -> Self;

    /// The constant pi at the given tolerance.
    fn pi(tol: Self::Tolerance) -> Self;

    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[must_use]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Returns `true` if the value cannot be told apart from zero.
    fn approx_zero(&self, tol: Self::Tolerance) -> bool {
        self.approx_sign(tol) == Ordering::Equal
    }

    /// Ordering where values equal under the tolerance compare `Equal`.
    fn approx_cmp(&self, other: &Self, tol: Self::Tolerance) -> Ordering {
        if self.approx_eq(other, tol) {
            Ordering::Equal
        } else if self < other {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// `self <= other` under the tolerance.
    fn approx_le(&self, other: &Self, tol: Self::Tolerance) -> bool {
        self.approx_cmp(other, tol) != Ordering::Greater
    }

    /// `self >= other` under the tolerance.
    fn approx_ge(&self, other: &Self, tol: Self::Tolerance) -> bool {
        self.approx_cmp(other, tol) != Ordering::Less
    }
}

/// Smaller of two partially ordered values, preferring `a` on ties.
#[must_use]
pub fn min_of<T: Real>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two partially ordered values, preferring `a` on ties.
#[must_use]
pub fn max_of<T: Real>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Total ordering for sorting, treating incomparable values as equal.
pub(crate) fn total_cmp<T: Real>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl Real for f64 {
    type Tolerance = f64;

    fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn rounded(&self, _tol: f64) -> Self {
        *self
    }

    fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self - other).abs() <= tol
    }

    fn approx_sign(&self, tol: f64) -> Ordering {
        if self.abs() <= tol {
            Ordering::Equal
        } else if *self < 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    fn sqrt(&self, _tol: f64) -> Self {
        f64::sqrt(*self)
    }

    fn sin_cos(&self, _tol: f64) -> (Self, Self) {
        f64::sin_cos(*self)
    }

    fn atan2(y: &Self, x: &Self, _tol: f64) -> Self {
        f64::atan2(*y, *x)
    }

    fn pi(_tol: f64) -> Self {
        std::f64::consts::PI
    }
}
