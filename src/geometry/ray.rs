use std::cmp::Ordering;

use crate::error::Result;
use crate::math::distance_2d::ParamRange;
use crate::math::Real;

use super::linear::Linear;
use super::{Line, Point, Vector};

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray<T: Real> {
    line: Line<T>,
}

impl<T: Real> Ray<T> {
    /// Creates a new ray.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the direction is exactly zero.
    pub fn new(origin: Point<T>, direction: Vector<T>) -> Result<Self> {
        Ok(Self {
            line: Line::new(origin, direction)?,
        })
    }

    /// Creates the ray from `origin` through `through`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the points coincide.
    pub fn through(origin: Point<T>, through: &Point<T>) -> Result<Self> {
        Ok(Self {
            line: Line::through(origin, through)?,
        })
    }

    pub(crate) fn unchecked(origin: Point<T>, direction: Vector<T>) -> Self {
        Self {
            line: Line::unchecked(origin, direction),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn origin(&self) -> &Point<T> {
        self.line.p()
    }

    /// Returns the direction vector, never zero.
    #[must_use]
    pub fn direction(&self) -> &Vector<T> {
        self.line.v()
    }

    /// The carrier line.
    #[must_use]
    pub fn line(&self) -> &Line<T> {
        &self.line
    }

    /// Point of the ray nearest to `point`; the origin for points behind it.
    #[must_use]
    pub fn closest_point(&self, point: &Point<T>) -> Point<T> {
        self.linear().closest_point(point)
    }

    /// Moves the origin by `v`.
    pub fn translate(&mut self, v: &Vector<T>) {
        self.line.translate(v);
    }

    /// Rotates the origin about `pivot` and turns the direction with it.
    pub fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
        self.line.rotate_by(pivot, sin, cos);
    }

    /// Same origin and same heading under `tol`; direction magnitudes may differ.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.origin().approx_eq(other.origin(), tol)
            && self.direction().is_scalar_multiple(other.direction(), tol)
            && self.direction().dot(other.direction()).approx_sign(tol) == Ordering::Greater
    }

    pub(crate) fn linear(&self) -> Linear<'_, T> {
        Linear::new(&self.line, ParamRange::ray())
    }
}
