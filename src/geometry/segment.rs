use num_rational::BigRational;
use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::ParamRange;
use crate::math::{max_of, min_of, ExactRoot, Real};

use super::aabb::Aabb;
use super::linear::Linear;
use super::{Line, Point, Vector};

/// A bounded piece of a line from `p` (t = 0) to `q` (t = 1).
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment<T: Real> {
    line: Line<T>,
    q: Point<T>,
}

impl<T: Real> LineSegment<T> {
    /// Creates a new segment between two points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CoincidentPoints` if `p` and `q` are exactly equal.
    pub fn new(p: Point<T>, q: Point<T>) -> Result<Self> {
        if p == q {
            debug!(?p, "rejected segment with coincident ends");
            return Err(GeometryError::CoincidentPoints("segment ends").into());
        }
        Ok(Self::unchecked(p, q))
    }

    /// Builds a segment whose ends are known to differ.
    pub(crate) fn unchecked(p: Point<T>, q: Point<T>) -> Self {
        let v = &q - &p;
        Self {
            line: Line::unchecked(p, v),
            q,
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn p(&self) -> &Point<T> {
        self.line.p()
    }

    /// Returns the end point.
    #[must_use]
    pub fn q(&self) -> &Point<T> {
        &self.q
    }

    /// Vector from `p` to `q`.
    #[must_use]
    pub fn direction(&self) -> &Vector<T> {
        self.line.v()
    }

    /// The carrier line.
    #[must_use]
    pub fn line(&self) -> &Line<T> {
        &self.line
    }

    /// Returns the squared length, exact in either substrate.
    #[must_use]
    pub fn length_squared(&self) -> T {
        self.line.v().magnitude_squared()
    }

    /// Returns the length, rounded at `tol` in the exact substrate.
    #[must_use]
    pub fn length(&self, tol: T::Tolerance) -> T {
        self.line.v().magnitude(tol)
    }

    /// Returns the point halfway between the ends.
    #[must_use]
    pub fn midpoint(&self) -> Point<T> {
        self.line.point_at(&T::half())
    }

    /// Point of the segment nearest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: &Point<T>) -> Point<T> {
        self.linear().closest_point(point)
    }

    /// The same segment traversed from `q` to `p`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::unchecked(self.q.clone(), self.p().clone())
    }

    /// Returns the smallest box holding both ends.
    #[must_use]
    pub fn aabb(&self) -> Aabb<T> {
        let (p, q) = (self.p(), self.q());
        Aabb::new(
            min_of(p.x(), q.x()),
            max_of(p.x(), q.x()),
            min_of(p.y(), q.y()),
            max_of(p.y(), q.y()),
        )
    }

    /// Moves both ends by `v`.
    pub fn translate(&mut self, v: &Vector<T>) {
        self.line.translate(v);
        self.q.translate(v);
    }

    /// Rotates both ends about `pivot` by the angle with the given sine and cosine.
    pub fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
        self.line.rotate_by(pivot, sin, cos);
        self.q.rotate_by(pivot, sin, cos);
    }

    /// Equal ends under `tol`, in either order.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        let (a, b) = (self.p(), self.q());
        let (c, d) = (other.p(), other.q());
        (a.approx_eq(c, tol) && b.approx_eq(d, tol)) || (a.approx_eq(d, tol) && b.approx_eq(c, tol))
    }

    pub(crate) fn linear(&self) -> Linear<'_, T> {
        Linear::new(&self.line, ParamRange::unit())
    }
}

impl LineSegment<BigRational> {
    /// Exact length, kept symbolic.
    #[must_use]
    pub fn length_root(&self) -> ExactRoot {
        self.p().distance_root(self.q())
    }
}
