use std::ops::{Add, Sub};

use num_rational::BigRational;

use crate::error::{OperationError, Result};
use crate::math::{ExactRoot, Real};

use super::Vector;

/// A position in the plane, stored as `offset + rel`.
///
/// Translation only touches `offset`, so a group of points that were built with the
/// same offset can be moved by updating that one component. Equality and every
/// geometric query look at the effective position only: two points whose offset
/// and relative parts differ but sum to the same coordinates are equal.
#[derive(Debug, Clone)]
pub struct Point<T: Real> {
    offset: Vector<T>,
    rel: Vector<T>,
}

impl<T: Real> Point<T> {
    /// Creates a point at `(x, y)` with a zero offset.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self {
            offset: Vector::zero(),
            rel: Vector::new(x, y),
        }
    }

    /// Creates a point from an explicit offset and relative part.
    #[must_use]
    pub fn with_offset(offset: Vector<T>, rel: Vector<T>) -> Self {
        Self { offset, rel }
    }

    /// Converts float coordinates into the substrate.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either coordinate is not finite.
    pub fn from_f64(x: f64, y: f64) -> Result<Self> {
        match (T::from_f64(x), T::from_f64(y)) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ => Err(OperationError::InvalidInput(format!(
                "non-finite coordinates ({x}, {y})"
            ))
            .into()),
        }
    }

    /// The origin.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Returns the effective x coordinate.
    #[must_use]
    pub fn x(&self) -> T {
        self.offset.dx.clone() + self.rel.dx.clone()
    }

    /// Returns the effective y coordinate.
    #[must_use]
    pub fn y(&self) -> T {
        self.offset.dy.clone() + self.rel.dy.clone()
    }

    /// The effective position as a vector from the origin.
    #[must_use]
    pub fn position(&self) -> Vector<T> {
        &self.offset + &self.rel
    }

    /// Returns the offset part of the position.
    #[must_use]
    pub fn offset(&self) -> &Vector<T> {
        &self.offset
    }

    /// Returns the relative part of the position.
    #[must_use]
    pub fn rel(&self) -> &Vector<T> {
        &self.rel
    }

    /// Replaces the offset part of the position.
    pub fn set_offset(&mut self, offset: Vector<T>) {
        self.offset = offset;
    }

    /// Replaces the relative part of the position.
    pub fn set_rel(&mut self, rel: Vector<T>) {
        self.rel = rel;
    }

    /// Moves the point by `v`. Only the offset changes.
    pub fn translate(&mut self, v: &Vector<T>) {
        self.offset = &self.offset + v;
    }

    /// Returns a copy moved by `v`.
    #[must_use]
    pub fn translated(&self, v: &Vector<T>) -> Self {
        let mut moved = self.clone();
        moved.translate(v);
        moved
    }

    /// Rotates counter-clockwise about `pivot` by `angle` radians.
    pub fn rotate(&mut self, pivot: &Self, angle: &T, tol: T::Tolerance) {
        let (sin, cos) = angle.sin_cos(tol);
        self.rotate_by(pivot, &sin, &cos);
    }

    /// Rotates about `pivot` with a precomputed sine and cosine.
    ///
    /// The offset is kept; the relative part absorbs the rotation.
    pub fn rotate_by(&mut self, pivot: &Self, sin: &T, cos: &T) {
        let arm = &*self - pivot;
        let rotated = &pivot.position() + &arm.rotate_by(sin, cos);
        self.rel = &rotated - &self.offset;
    }

    /// Returns the point halfway to `other`.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        let half = T::half();
        Self::new(
            (self.x() + other.x()) * half.clone(),
            (self.y() + other.y()) * half,
        )
    }

    /// Returns the squared distance to `other`, exact in either substrate.
    #[must_use]
    pub fn distance_squared_to(&self, other: &Self) -> T {
        (self - other).magnitude_squared()
    }

    /// Returns the distance to `other`, rounded at `tol` in the exact substrate.
    #[must_use]
    pub fn distance_to(&self, other: &Self, tol: T::Tolerance) -> T {
        self.distance_squared_to(other).sqrt(tol)
    }

    /// Equality of effective positions under the tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.x().approx_eq(&other.x(), tol) && self.y().approx_eq(&other.y(), tol)
    }
}

impl Point<BigRational> {
    /// Exact distance to another point, kept symbolic.
    #[must_use]
    pub fn distance_root(&self, other: &Self) -> ExactRoot {
        ExactRoot::new(self.distance_squared_to(other))
    }
}

impl<T: Real> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

impl<T: Real> Sub for &Point<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: Self) -> Vector<T> {
        Vector::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl<T: Real> Add<&Vector<T>> for &Point<T> {
    type Output = Point<T>;

    fn add(self, rhs: &Vector<T>) -> Point<T> {
        self.translated(rhs)
    }
}
