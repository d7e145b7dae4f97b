use std::cmp::Ordering;

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::ParamRange;
use crate::math::intersect_2d::{point_at, project_2d, side_sign_2d};
use crate::math::Real;

use super::linear::Linear;
use super::{Point, Vector};

/// An infinite line through `p` with direction `v`.
///
/// The parametric form is: `P(t) = p + t * v`. The direction is kept as given (not
/// normalized) so the exact substrate never needs a square root to build a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<T: Real> {
    p: Point<T>,
    v: Vector<T>,
}

impl<T: Real> Line<T> {
    /// Creates a new line from an anchor point and a direction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the direction is exactly zero.
    pub fn new(p: Point<T>, v: Vector<T>) -> Result<Self> {
        if v.dx.is_zero() && v.dy.is_zero() {
            debug!(?p, "rejected line with zero direction");
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::unchecked(p, v))
    }

    pub(crate) fn unchecked(p: Point<T>, v: Vector<T>) -> Self {
        Self { p, v }
    }

    /// Creates the line through two points, directed from `p` to `q`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the points coincide.
    pub fn through(p: Point<T>, q: &Point<T>) -> Result<Self> {
        let v = q - &p;
        Self::new(p, v)
    }

    /// The anchor point.
    #[must_use]
    pub fn p(&self) -> &Point<T> {
        &self.p
    }

    /// The direction vector.
    #[must_use]
    pub fn v(&self) -> &Vector<T> {
        &self.v
    }

    /// Returns the point at parameter `t`, where `t = 1` is one direction length from the anchor.
    #[must_use]
    pub fn point_at(&self, t: &T) -> Point<T> {
        point_at(&self.p, &self.v, t)
    }

    /// Parameter of the orthogonal projection of `point` onto the line.
    #[must_use]
    pub fn parameter_of(&self, point: &Point<T>) -> T {
        project_2d(&self.p, &self.v, point)
    }

    /// Returns the orthogonal projection of `point` onto the line.
    #[must_use]
    pub fn closest_point(&self, point: &Point<T>) -> Point<T> {
        self.point_at(&self.parameter_of(point))
    }

    /// Returns `true` if `point` is within `tol` of the line.
    #[must_use]
    pub fn contains_point(&self, point: &Point<T>, tol: T::Tolerance) -> bool {
        side_sign_2d(&self.p, &self.v, point, tol) == Ordering::Equal
    }

    /// Returns `true` if the directions are parallel or opposed under `tol`.
    #[must_use]
    pub fn is_parallel(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.v.is_scalar_multiple(&other.v, tol)
    }

    /// Returns `true` if both lines are the same infinite line.
    #[must_use]
    pub fn is_collinear_with(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.is_parallel(other, tol)
            && self.contains_point(&other.p, tol)
            && other.contains_point(&self.p, tol)
    }

    /// Returns `true` if `a` and `b` are not strictly separated by the line.
    ///
    /// A point on the line counts as being on the same side as anything.
    #[must_use]
    pub fn is_on_same_side(&self, a: &Point<T>, b: &Point<T>, tol: T::Tolerance) -> bool {
        let sa = side_sign_2d(&self.p, &self.v, a, tol);
        let sb = side_sign_2d(&self.p, &self.v, b, tol);
        sa == Ordering::Equal || sb == Ordering::Equal || sa == sb
    }

    /// The line through `point` perpendicular to this one.
    #[must_use]
    pub fn perpendicular_through(&self, point: Point<T>) -> Self {
        Self {
            p: point,
            v: self.v.perp(),
        }
    }

    /// Moves the anchor by `v`.
    pub fn translate(&mut self, v: &Vector<T>) {
        self.p.translate(v);
    }

    /// Rotates the anchor about `pivot` and the direction in place.
    pub fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
        self.p.rotate_by(pivot, sin, cos);
        self.v = self.v.rotate_by(sin, cos);
    }

    /// Returns `true` if both describe the same infinite line.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.is_collinear_with(other, tol)
    }

    pub(crate) fn linear(&self) -> Linear<'_, T> {
        Linear::new(self, ParamRange::unbounded())
    }
}

/// Returns `true` if all points lie on one line under `tol`.
///
/// Fewer than three points, or points that all coincide, are trivially collinear.
#[must_use]
pub fn is_collinear<T: Real>(points: &[Point<T>], tol: T::Tolerance) -> bool {
    let Some(first) = points.first() else {
        return true;
    };
    let Some(reference) = points
        .iter()
        .map(|pt| pt - first)
        .find(|d| !d.is_zero(tol))
    else {
        return true;
    };
    points
        .iter()
        .all(|pt| side_sign_2d(first, &reference, pt, tol) == Ordering::Equal)
}
