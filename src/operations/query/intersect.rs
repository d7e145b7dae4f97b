use tracing::trace;

use crate::geometry::{Geometry, Part, ShapeRef};
use crate::math::Real;

/// Computes the shared part of two shapes.
///
/// Points, straight primitives and convex areas each have one rule per pairing;
/// areas are handled through their triangles.
pub struct Intersect<'a, T: Real> {
    a: ShapeRef<'a, T>,
    b: ShapeRef<'a, T>,
}

impl<'a, T: Real> Intersect<'a, T> {
    /// Creates a new `Intersect` query.
    #[must_use]
    pub fn new(a: ShapeRef<'a, T>, b: ShapeRef<'a, T>) -> Self {
        Self { a, b }
    }

    /// Returns `true` if the shapes share at least one point.
    #[must_use]
    pub fn test(&self, tol: T::Tolerance) -> bool {
        self.execute(tol).is_some()
    }

    /// Executes the query. `None` means the shapes are apart.
    ///
    /// Shapes whose bounding boxes are apart under `tol` never intersect.
    #[must_use]
    pub fn execute(&self, tol: T::Tolerance) -> Option<Geometry<T>> {
        if let (Some(a), Some(b)) = (self.a.aabb(), self.b.aabb()) {
            if !a.intersects(&b, tol) {
                return None;
            }
        }
        let result = match (self.a.part(), self.b.part()) {
            (Part::Point(p), Part::Point(q)) => p.approx_eq(q, tol).then(|| Geometry::Point(p.clone())),
            (Part::Point(p), Part::Linear(l)) | (Part::Linear(l), Part::Point(p)) => {
                l.contains_point(p, tol).then(|| Geometry::Point(p.clone()))
            }
            (Part::Point(p), Part::Area(x)) | (Part::Area(x), Part::Point(p)) => {
                x.encloses(p, tol).then(|| Geometry::Point(p.clone()))
            }
            (Part::Linear(a), Part::Linear(b)) => a.intersection(&b, tol),
            (Part::Linear(l), Part::Area(x)) | (Part::Area(x), Part::Linear(l)) => {
                x.intersection_linear(&l, tol)
            }
            (Part::Area(x), Part::Area(y)) => x.intersection_area(&y, tol),
        };
        trace!(kind = result.as_ref().map(Geometry::kind), "intersection");
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Line, LineSegment, Point, Ray, Shape, Triangle, Vector};

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn point_pairs() {
        let a = p(1.0, 1.0);
        let b = p(1.0, 1.0 + 1e-12);
        assert!(Intersect::new(a.shape(), b.shape()).test(TOL));
        assert!(!Intersect::new(a.shape(), p(2.0, 1.0).shape()).test(TOL));
    }

    #[test]
    fn ray_entering_a_triangle() {
        let t = Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0), TOL).unwrap();
        let r = Ray::new(p(1.0, 1.0), Vector::new(1.0, 0.0)).unwrap();
        match Intersect::new(t.shape(), r.shape()).execute(TOL) {
            Some(Geometry::Segment(s)) => {
                assert!(s.approx_eq(&LineSegment::new(p(1.0, 1.0), p(3.0, 1.0)).unwrap(), TOL));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn results_do_not_depend_on_operand_order() {
        let t = Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0), TOL).unwrap();
        let l = Line::through(p(0.0, 2.0), &p(1.0, 2.0)).unwrap();
        let ab = Intersect::new(t.shape(), l.shape()).execute(TOL).unwrap();
        let ba = Intersect::new(l.shape(), t.shape()).execute(TOL).unwrap();
        assert!(ab.approx_eq(&ba, TOL));
    }

    #[test]
    fn bounding_boxes_reject_early() {
        let a = LineSegment::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
        let b = LineSegment::new(p(5.0, 5.0), p(6.0, 7.0)).unwrap();
        assert!(!Intersect::new(a.shape(), b.shape()).test(TOL));
    }

    #[test]
    fn test_and_execute_agree_on_thin_triangles() {
        let far = p(5.0, 0.0);
        let sliver = Triangle::unchecked(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-12));
        let thin = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-6), TOL).unwrap();
        for t in [&sliver, &thin] {
            let query = Intersect::new(t.shape(), far.shape());
            assert!(!query.test(TOL));
            assert!(query.execute(TOL).is_none());
            assert!(!t.contains(&far, TOL));
            assert!(t.distance(&far, TOL) > 2.9);
        }
        let along = LineSegment::new(p(4.0, 0.0), p(6.0, 0.0)).unwrap();
        let query = Intersect::new(along.shape(), thin.shape());
        assert_eq!(query.test(TOL), query.execute(TOL).is_some());
        assert!(!query.test(TOL));
    }
}
