use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::BigRational;

use crate::error::{GeometryError, Result};
use crate::math::{ExactRoot, Real};

/// Compass classification of a vector's direction.
///
/// Axis-aligned vectors map to the four cardinal directions; everything else
/// falls into the quadrant between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octant {
    Zero,
    E,
    NE,
    N,
    NW,
    W,
    SW,
    S,
    SE,
}

/// A displacement `(dx, dy)` in the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Real> {
    pub dx: T,
    pub dy: T,
}

impl<T: Real> Vector<T> {
    /// Creates a new vector.
    #[must_use]
    pub fn new(dx: T, dy: T) -> Self {
        Self { dx, dy }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Returns the vector multiplied by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &T) -> Self {
        Self::new(self.dx.clone() * factor.clone(), self.dy.clone() * factor.clone())
    }

    /// Returns the vector pointing the other way.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::new(-self.dx.clone(), -self.dy.clone())
    }

    /// Left-pointing normal `(-dy, dx)`.
    #[must_use]
    pub fn perp(&self) -> Self {
        Self::new(-self.dy.clone(), self.dx.clone())
    }

    /// Returns the dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.dx.clone() * other.dx.clone() + self.dy.clone() * other.dy.clone()
    }

    /// The z component of the 3D cross product, `dx * other.dy - dy * other.dx`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> T {
        self.dx.clone() * other.dy.clone() - self.dy.clone() * other.dx.clone()
    }

    /// Returns the squared length, exact in either substrate.
    #[must_use]
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the length, rounded at `tol` in the exact substrate.
    #[must_use]
    pub fn magnitude(&self, tol: T::Tolerance) -> T {
        self.magnitude_squared().sqrt(tol)
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the vector is zero under `tol`.
    pub fn unit(&self, tol: T::Tolerance) -> Result<Self> {
        if self.is_zero(tol) {
            return Err(GeometryError::ZeroVector.into());
        }
        let len = self.magnitude(tol);
        Ok(Self::new(self.dx.clone() / len.clone(), self.dy.clone() / len))
    }

    /// Rotates counter-clockwise by `angle` radians.
    #[must_use]
    pub fn rotate(&self, angle: &T, tol: T::Tolerance) -> Self {
        let (sin, cos) = angle.sin_cos(tol);
        self.rotate_by(&sin, &cos)
    }

    /// Rotates with a precomputed sine and cosine.
    #[must_use]
    pub fn rotate_by(&self, sin: &T, cos: &T) -> Self {
        Self::new(
            self.dx.clone() * cos.clone() - self.dy.clone() * sin.clone(),
            self.dx.clone() * sin.clone() + self.dy.clone() * cos.clone(),
        )
    }

    /// Direction angle in `(-pi, pi]`, measured from the positive x axis.
    #[must_use]
    pub fn angle(&self, tol: T::Tolerance) -> T {
        T::atan2(&self.dy, &self.dx, tol)
    }

    /// Unsigned angle between two vectors, in `[0, pi]`.
    #[must_use]
    pub fn angle_to(&self, other: &Self, tol: T::Tolerance) -> T {
        T::atan2(&self.cross(other).abs(), &self.dot(other), tol)
    }

    /// Returns the compass octant the vector points into, `Zero` for a zero vector.
    #[must_use]
    pub fn octant(&self, tol: T::Tolerance) -> Octant {
        match (self.dx.approx_sign(tol), self.dy.approx_sign(tol)) {
            (Ordering::Equal, Ordering::Equal) => Octant::Zero,
            (Ordering::Greater, Ordering::Equal) => Octant::E,
            (Ordering::Greater, Ordering::Greater) => Octant::NE,
            (Ordering::Equal, Ordering::Greater) => Octant::N,
            (Ordering::Less, Ordering::Greater) => Octant::NW,
            (Ordering::Less, Ordering::Equal) => Octant::W,
            (Ordering::Less, Ordering::Less) => Octant::SW,
            (Ordering::Equal, Ordering::Less) => Octant::S,
            (Ordering::Greater, Ordering::Less) => Octant::SE,
        }
    }

    /// Returns `true` if both components are zero under `tol`.
    #[must_use]
    pub fn is_zero(&self, tol: T::Tolerance) -> bool {
        self.dx.approx_zero(tol) && self.dy.approx_zero(tol)
    }

    /// Returns `true` if the dot product is zero under `tol`.
    #[must_use]
    pub fn is_orthogonal(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.dot(other).approx_zero(tol)
    }

    /// Returns `true` if either vector is a scalar multiple of the other (parallel or
    /// antiparallel).
    #[must_use]
    pub fn is_scalar_multiple(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.cross(other).approx_zero(tol)
    }

    /// Returns `true` if `other` points the opposite way along the same direction.
    #[must_use]
    pub fn is_reverse(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.is_scalar_multiple(other, tol) && self.dot(other).approx_sign(tol) == Ordering::Less
    }

    /// Returns `true` if both components match under `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.dx.approx_eq(&other.dx, tol) && self.dy.approx_eq(&other.dy, tol)
    }
}

impl Vector<BigRational> {
    /// Exact length, kept symbolic.
    #[must_use]
    pub fn magnitude_root(&self) -> ExactRoot {
        ExactRoot::new(self.magnitude_squared())
    }
}

impl<T: Real> Add for Vector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl<T: Real> Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: Self) -> Vector<T> {
        Vector::new(self.dx.clone() + rhs.dx.clone(), self.dy.clone() + rhs.dy.clone())
    }
}

impl<T: Real> Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl<T: Real> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: Self) -> Vector<T> {
        Vector::new(self.dx.clone() - rhs.dx.clone(), self.dy.clone() - rhs.dy.clone())
    }
}

impl<T: Real> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl<T: Real> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.reverse()
    }
}

impl<T: Real> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.dx * rhs.clone(), self.dy * rhs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use num_rational::BigRational;

    use super::*;
    use crate::math::{Precision, RoundingMode};

    const TOL: f64 = 1e-10;

    fn v(dx: f64, dy: f64) -> Vector<f64> {
        Vector::new(dx, dy)
    }

    fn q(n: i64) -> BigRational {
        BigRational::from_integer(n.into())
    }

    #[test]
    fn arithmetic() {
        let a = v(1.0, 2.0);
        let b = v(3.0, -1.0);
        assert_eq!(&a + &b, v(4.0, 1.0));
        assert_eq!(&a - &b, v(-2.0, 3.0));
        assert_eq!(-a.clone(), v(-1.0, -2.0));
        assert_eq!(a.clone() * 2.0, v(2.0, 4.0));
        assert_abs_diff_eq!(a.dot(&b), 1.0);
        assert_abs_diff_eq!(a.cross(&b), -7.0);
    }

    #[test]
    fn magnitude_and_unit() {
        let a = v(3.0, 4.0);
        assert_abs_diff_eq!(a.magnitude_squared(), 25.0);
        assert_abs_diff_eq!(a.magnitude(TOL), 5.0);
        let u = a.unit(TOL).unwrap();
        assert_abs_diff_eq!(u.dx, 0.6, epsilon = TOL);
        assert_abs_diff_eq!(u.dy, 0.8, epsilon = TOL);
        assert!(v(0.0, 0.0).unit(TOL).is_err());
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = v(1.0, 0.0).rotate(&FRAC_PI_2, TOL);
        assert!(r.approx_eq(&v(0.0, 1.0), TOL));
        let back = r.rotate(&-FRAC_PI_2, TOL);
        assert!(back.approx_eq(&v(1.0, 0.0), TOL));
    }

    #[test]
    fn predicates() {
        let a = v(1.0, 1.0);
        assert!(a.is_orthogonal(&v(-1.0, 1.0), TOL));
        assert!(a.is_scalar_multiple(&v(-2.0, -2.0), TOL));
        assert!(a.is_reverse(&v(-2.0, -2.0), TOL));
        assert!(!a.is_reverse(&v(2.0, 2.0), TOL));
        assert!(!a.is_scalar_multiple(&v(1.0, 2.0), TOL));
        assert!(v(1e-12, -1e-12).is_zero(TOL));
    }

    #[test]
    fn octants() {
        assert_eq!(v(0.0, 0.0).octant(TOL), Octant::Zero);
        assert_eq!(v(2.0, 0.0).octant(TOL), Octant::E);
        assert_eq!(v(1.0, 1.0).octant(TOL), Octant::NE);
        assert_eq!(v(0.0, 1.0).octant(TOL), Octant::N);
        assert_eq!(v(-1.0, 3.0).octant(TOL), Octant::NW);
        assert_eq!(v(-1.0, 0.0).octant(TOL), Octant::W);
        assert_eq!(v(-1.0, -1.0).octant(TOL), Octant::SW);
        assert_eq!(v(0.0, -4.0).octant(TOL), Octant::S);
        assert_eq!(v(5.0, -1.0).octant(TOL), Octant::SE);
    }

    #[test]
    fn angles() {
        assert_abs_diff_eq!(v(0.0, 1.0).angle(TOL), FRAC_PI_2, epsilon = TOL);
        assert_abs_diff_eq!(v(1.0, 0.0).angle_to(&v(-1.0, 0.0), TOL), PI, epsilon = TOL);
    }

    #[test]
    fn exact_vector_operations() {
        let tol = Precision::new(-6, RoundingMode::HalfUp);
        let a = Vector::new(q(3), q(4));
        assert_eq!(a.magnitude(tol), q(5));
        assert_eq!(a.cross(&Vector::new(q(4), q(3))), q(-7));
        let r = Vector::new(q(1), q(0)).rotate(&BigRational::pi(tol), tol);
        assert!(r.approx_eq(&Vector::new(q(-1), q(0)), tol));
        let diag = Vector::new(q(1), q(1));
        assert_eq!(diag.magnitude(tol), BigRational::new(1_414_214.into(), 1_000_000.into()));
    }

    #[test]
    fn exact_magnitude_stays_symbolic() {
        let tol = Precision::new(-6, RoundingMode::HalfUp);
        let q = |n: i64| BigRational::from_integer(n.into());
        let diagonal = Vector::new(q(1), q(1));
        assert_eq!(diagonal.magnitude_root().radicand(), &q(2));
        assert_eq!(diagonal.magnitude_root().round(tol), diagonal.magnitude(tol));
        assert_eq!(Vector::new(q(3), q(4)).magnitude_root().to_rational(), Some(q(5)));
    }
}
