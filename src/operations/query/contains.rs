use crate::geometry::{Part, ShapeRef};
use crate::math::Real;

/// Tests whether one shape covers another entirely.
pub struct Contains<'a, T: Real> {
    outer: ShapeRef<'a, T>,
    inner: ShapeRef<'a, T>,
}

impl<'a, T: Real> Contains<'a, T> {
    /// Creates a new `Contains` query.
    #[must_use]
    pub fn new(outer: ShapeRef<'a, T>, inner: ShapeRef<'a, T>) -> Self {
        Self { outer, inner }
    }

    /// Executes the query.
    ///
    /// Convex areas contain another shape when they enclose its defining points; an
    /// unbounded shape is never inside a bounded one.
    #[must_use]
    pub fn execute(&self, tol: T::Tolerance) -> bool {
        match (self.outer.part(), self.inner.part()) {
            (Part::Point(p), Part::Point(q)) => p.approx_eq(q, tol),
            (Part::Point(_), _) | (Part::Linear(_), Part::Area(_)) => false,
            (Part::Linear(l), Part::Point(p)) => l.contains_point(p, tol),
            (Part::Linear(a), Part::Linear(b)) => a.contains(&b, tol),
            (Part::Area(x), Part::Point(p)) => x.encloses(p, tol),
            (Part::Area(x), Part::Linear(l)) => {
                l.is_bounded() && l.endpoints().iter().all(|e| x.encloses(e, tol))
            }
            (Part::Area(x), Part::Area(y)) => y.boundary().iter().all(|v| x.encloses(v, tol)),
        }
    }
}
