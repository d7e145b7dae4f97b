use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::Real;

use super::aabb::Aabb;
use super::{LineSegment, Point, Triangle, Vector};

/// A rectangle `p -> q -> r -> s` with orthogonal adjacent edges.
///
/// Every area query goes through the two triangles `pqr` and `rsp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle<T: Real> {
    p: Point<T>,
    q: Point<T>,
    r: Point<T>,
    s: Point<T>,
}

impl<T: Real> Rectangle<T> {
    /// Creates a new rectangle from its corners in boundary order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NotRectangle` if the corners fail
    /// [`Rectangle::is_rectangle`].
    pub fn new(p: Point<T>, q: Point<T>, r: Point<T>, s: Point<T>, tol: T::Tolerance) -> Result<Self> {
        if !Self::is_rectangle(&p, &q, &r, &s, tol) {
            debug!(?p, ?q, ?r, ?s, "rejected non-rectangular corners");
            return Err(GeometryError::NotRectangle.into());
        }
        Ok(Self::unchecked(p, q, r, s))
    }

    pub(crate) fn unchecked(p: Point<T>, q: Point<T>, r: Point<T>, s: Point<T>) -> Self {
        Self { p, q, r, s }
    }

    /// The rectangle covering a box of non-zero width and height.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NotRectangle` for a degenerate box.
    pub fn from_aabb(aabb: &Aabb<T>) -> Result<Self> {
        if aabb.width().is_zero() || aabb.height().is_zero() {
            return Err(GeometryError::NotRectangle.into());
        }
        let [p, q, r, s] = aabb.corners();
        Ok(Self { p, q, r, s })
    }

    /// Returns `true` if the four corners, taken in order, form a rectangle.
    ///
    /// Both edges leaving `q` and `s` must be non-zero and orthogonal, and the
    /// diagonals must share their midpoint.
    #[must_use]
    pub fn is_rectangle(p: &Point<T>, q: &Point<T>, r: &Point<T>, s: &Point<T>, tol: T::Tolerance) -> bool {
        let pq = q - p;
        let qr = r - q;
        let rs = s - r;
        let sp = p - s;
        let non_zero = [&pq, &qr, &rs, &sp].iter().all(|e| !e.is_zero(tol));
        non_zero
            && pq.is_orthogonal(&qr, tol)
            && rs.is_orthogonal(&sp, tol)
            && p.midpoint(r).approx_eq(&q.midpoint(s), tol)
    }

    /// Returns the four corners in construction order.
    #[must_use]
    pub fn points(&self) -> [&Point<T>; 4] {
        [&self.p, &self.q, &self.r, &self.s]
    }

    /// Length of `pq`.
    #[must_use]
    pub fn width(&self, tol: T::Tolerance) -> T {
        self.p.distance_to(&self.q, tol)
    }

    /// Length of `qr`.
    #[must_use]
    pub fn height(&self, tol: T::Tolerance) -> T {
        self.q.distance_to(&self.r, tol)
    }

    /// Returns the unsigned area.
    #[must_use]
    pub fn area(&self) -> T {
        (&self.q - &self.p).cross(&(&self.r - &self.q)).abs()
    }

    /// Returns the mean of the four corners.
    #[must_use]
    pub fn centroid(&self) -> Point<T> {
        self.p.midpoint(&self.r)
    }

    /// The triangles `pqr` and `rsp`.
    #[must_use]
    pub fn triangles(&self) -> [Triangle<T>; 2] {
        [
            Triangle::unchecked(self.p.clone(), self.q.clone(), self.r.clone()),
            Triangle::unchecked(self.r.clone(), self.s.clone(), self.p.clone()),
        ]
    }

    /// The edges `pq`, `qr`, `rs`, `sp`.
    #[must_use]
    pub fn edges(&self) -> [LineSegment<T>; 4] {
        [
            LineSegment::unchecked(self.p.clone(), self.q.clone()),
            LineSegment::unchecked(self.q.clone(), self.r.clone()),
            LineSegment::unchecked(self.r.clone(), self.s.clone()),
            LineSegment::unchecked(self.s.clone(), self.p.clone()),
        ]
    }

    /// Returns the smallest box holding all four corners.
    #[must_use]
    pub fn aabb(&self) -> Aabb<T> {
        let mut aabb = Aabb::from_corners(&self.p, &self.r);
        aabb.expand(&self.q);
        aabb.expand(&self.s);
        aabb
    }

    /// Moves every corner by `v`.
    pub fn translate(&mut self, v: &Vector<T>) {
        for corner in [&mut self.p, &mut self.q, &mut self.r, &mut self.s] {
            corner.translate(v);
        }
    }

    /// Rotates every corner about `pivot`.
    pub fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
        for corner in [&mut self.p, &mut self.q, &mut self.r, &mut self.s] {
            corner.rotate_by(pivot, sin, cos);
        }
    }

    /// Same corner set under `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        let matched = |a: &Self, b: &Self| {
            a.points()
                .iter()
                .all(|v| b.points().iter().any(|w| v.approx_eq(w, tol)))
        };
        matched(self, other) && matched(other, self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_abs_diff_eq;
    use num_rational::BigRational;

    use super::*;
    use crate::geometry::{Geometry, Line, Shape};
    use crate::math::{Precision, RoundingMode};

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    fn unit_square() -> Rectangle<f64> {
        Rectangle::new(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), TOL).unwrap()
    }

    #[test]
    fn non_rectangles_are_rejected() {
        assert!(Rectangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1.0), p(0.0, 1.0), TOL).is_err());
        assert!(Rectangle::new(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), TOL).is_err());
        // Diagonal order.
        assert!(Rectangle::new(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(1.0, 0.0), TOL).is_err());
    }

    #[test]
    fn rotated_rectangle_is_accepted() {
        let (sin, cos) = FRAC_PI_4.sin_cos();
        let corners: Vec<Point<f64>> = [(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]
            .iter()
            .map(|&(x, y)| {
                let mut c = p(x, y);
                c.rotate_by(&p(0.0, 0.0), &sin, &cos);
                c
            })
            .collect();
        let [a, b, c, d] = <[Point<f64>; 4]>::try_from(corners).unwrap();
        let rect = Rectangle::new(a, b, c, d, TOL).unwrap();
        assert_abs_diff_eq!(rect.width(TOL), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.height(TOL), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.area(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn line_along_an_edge_gives_that_edge() {
        let l = Line::through(p(0.0, -1.0), &p(0.0, 1.0)).unwrap();
        match unit_square().intersection(&l, TOL) {
            Some(Geometry::Segment(s)) => {
                assert!(s.approx_eq(&LineSegment::new(p(0.0, 0.0), p(0.0, 1.0)).unwrap(), TOL));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn diagonal_crossing_both_triangles() {
        let s = LineSegment::new(p(-1.0, 0.5), p(2.0, 0.5)).unwrap();
        match unit_square().intersection(&s, TOL) {
            Some(Geometry::Segment(hit)) => {
                assert!(hit.approx_eq(&LineSegment::new(p(0.0, 0.5), p(1.0, 0.5)).unwrap(), TOL));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_squares() {
        let a = unit_square();
        let b = Rectangle::from_aabb(&Aabb::new(0.5, 1.5, 0.5, 1.5)).unwrap();
        match a.intersection(&b, TOL) {
            Some(Geometry::ConvexArea(area)) => {
                assert_abs_diff_eq!(area.area(), 0.25, epsilon = 1e-12);
                assert!(matches!(area.simplify(TOL), Geometry::Rectangle(_)));
            }
            other => panic!("expected convex area, got {other:?}"),
        }
    }

    #[test]
    fn distance_and_containment() {
        let sq = unit_square();
        assert_abs_diff_eq!(sq.distance(&p(3.0, 0.5), TOL), 2.0);
        assert_abs_diff_eq!(sq.distance(&p(0.5, 0.5), TOL), 0.0);
        assert!(sq.contains(&p(0.25, 0.75), TOL));
        assert!(!sq.contains(&p(1.25, 0.75), TOL));
        let (t1, t2) = (&sq.triangles()[0], &sq.triangles()[1]);
        assert_abs_diff_eq!(t1.area() + t2.area(), sq.area());
    }

    #[test]
    fn from_aabb_and_back() {
        let b = Aabb::new(1.0, 3.0, 2.0, 5.0);
        let r = Rectangle::from_aabb(&b).unwrap();
        assert_eq!(r.aabb(), b);
        assert!(Rectangle::from_aabb(&Aabb::new(1.0, 1.0, 2.0, 5.0)).is_err());
    }

    #[test]
    fn exact_rectangle_measures() {
        let tol = Precision::new(-6, RoundingMode::HalfUp);
        let q = |n: i64| BigRational::from_integer(n.into());
        let r = Rectangle::new(
            Point::new(q(0), q(0)),
            Point::new(q(3), q(0)),
            Point::new(q(3), q(4)),
            Point::new(q(0), q(4)),
            tol,
        )
        .unwrap();
        assert_eq!(r.area(), q(12));
        assert_eq!(r.width(tol), q(3));
        assert_eq!(r.centroid(), Point::new(BigRational::new(3.into(), 2.into()), q(2)));
    }
}
