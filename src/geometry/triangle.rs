use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at, side_2d, side_sign_2d};
use crate::math::polygon_2d::orientation_2d;
use crate::math::Real;

use super::aabb::Aabb;
use super::linear::Linear;
use super::reduce::{reduce_collinear, reduce_points};
use super::{Geometry, LineSegment, Point, Vector};

/// A non-degenerate triangle with vertices `p`, `q`, `r` in either winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle<T: Real> {
    p: Point<T>,
    q: Point<T>,
    r: Point<T>,
}

impl<T: Real> Triangle<T> {
    /// Creates a new triangle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if any vertex lies within `tol` of the line
    /// through the other two. Use [`Triangle::geometry`] to get the lower-dimensional
    /// shape instead.
    pub fn new(p: Point<T>, q: Point<T>, r: Point<T>, tol: T::Tolerance) -> Result<Self> {
        let flat = [(&p, &q, &r), (&q, &r, &p), (&r, &p, &q)]
            .into_iter()
            .any(|(a, b, c)| orientation_2d(a, b, c, tol) == Ordering::Equal);
        if flat {
            debug!(?p, ?q, ?r, "rejected collinear triangle");
            return Err(GeometryError::Degenerate("triangle vertices are collinear".into()).into());
        }
        Ok(Self::unchecked(p, q, r))
    }

    pub(crate) fn unchecked(p: Point<T>, q: Point<T>, r: Point<T>) -> Self {
        Self { p, q, r }
    }

    /// The simplest shape spanned by three points.
    ///
    /// Coincident points give a `Point`, collinear ones the `Segment` between the
    /// extremes, anything else a `Triangle` keeping the given vertex order.
    #[must_use]
    pub fn geometry(p: Point<T>, q: Point<T>, r: Point<T>, tol: T::Tolerance) -> Geometry<T> {
        let flat = [(&p, &q, &r), (&q, &r, &p), (&r, &p, &q)]
            .into_iter()
            .any(|(a, b, c)| orientation_2d(a, b, c, tol) == Ordering::Equal);
        if !flat {
            return Geometry::Triangle(Self::unchecked(p, q, r));
        }
        let fallback = Geometry::Point(p.clone());
        reduce_collinear(vec![p, q, r], tol).unwrap_or(fallback)
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn p(&self) -> &Point<T> {
        &self.p
    }

    /// Returns the second vertex.
    #[must_use]
    pub fn q(&self) -> &Point<T> {
        &self.q
    }

    /// Returns the third vertex.
    #[must_use]
    pub fn r(&self) -> &Point<T> {
        &self.r
    }

    /// Returns the vertices in construction order.
    #[must_use]
    pub fn points(&self) -> [&Point<T>; 3] {
        [&self.p, &self.q, &self.r]
    }

    /// The edges `pq`, `qr`, `rp`.
    #[must_use]
    pub fn edges(&self) -> [LineSegment<T>; 3] {
        [
            LineSegment::unchecked(self.p.clone(), self.q.clone()),
            LineSegment::unchecked(self.q.clone(), self.r.clone()),
            LineSegment::unchecked(self.r.clone(), self.p.clone()),
        ]
    }

    /// Returns twice the signed area, exact in either substrate.
    #[must_use]
    pub fn double_signed_area(&self) -> T {
        (&self.q - &self.p).cross(&(&self.r - &self.p))
    }

    /// Positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> T {
        self.double_signed_area() * T::half()
    }

    /// Returns the unsigned area.
    #[must_use]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Returns `true` if the vertices turn clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.double_signed_area().is_negative()
    }

    /// Returns the mean of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point<T> {
        let three = T::one() + T::two();
        Point::new(
            (self.p.x() + self.q.x() + self.r.x()) / three.clone(),
            (self.p.y() + self.q.y() + self.r.y()) / three,
        )
    }

    /// Meeting point of the perpendicular bisectors of `pq` and `qr`.
    #[must_use]
    pub fn circumcenter(&self, tol: T::Tolerance) -> Option<Point<T>> {
        let mid_pq = self.p.midpoint(&self.q);
        let mid_qr = self.q.midpoint(&self.r);
        let n_pq = (&self.q - &self.p).perp();
        let n_qr = (&self.r - &self.q).perp();
        let (t, _) = line_line_intersect_2d(&mid_pq, &n_pq, &mid_qr, &n_qr, tol)?;
        Some(point_at(&mid_pq, &n_pq, &t))
    }

    /// Returns the sum of the edge lengths.
    #[must_use]
    pub fn perimeter(&self, tol: T::Tolerance) -> T {
        self.p.distance_to(&self.q, tol) + self.q.distance_to(&self.r, tol) + self.r.distance_to(&self.p, tol)
    }

    /// Interior angle at `p`, in radians.
    #[must_use]
    pub fn angle_p(&self, tol: T::Tolerance) -> T {
        (&self.q - &self.p).angle_to(&(&self.r - &self.p), tol)
    }

    /// Interior angle at `q`, in radians.
    #[must_use]
    pub fn angle_q(&self, tol: T::Tolerance) -> T {
        (&self.r - &self.q).angle_to(&(&self.p - &self.q), tol)
    }

    /// Interior angle at `r`, in radians.
    #[must_use]
    pub fn angle_r(&self, tol: T::Tolerance) -> T {
        (&self.p - &self.r).angle_to(&(&self.q - &self.r), tol)
    }

    /// The vertex not on `edge`, if `edge` joins two of the vertices.
    #[must_use]
    pub fn opposite(&self, edge: &LineSegment<T>, tol: T::Tolerance) -> Option<&Point<T>> {
        let on_edge = |v: &Point<T>| v.approx_eq(edge.p(), tol) || v.approx_eq(edge.q(), tol);
        let [p, q, r] = self.points();
        match (on_edge(p), on_edge(q), on_edge(r)) {
            (false, true, true) => Some(p),
            (true, false, true) => Some(q),
            (true, true, false) => Some(r),
            _ => None,
        }
    }

    /// Returns `true` if `point` is inside the triangle or within `tol` of its boundary.
    ///
    /// Points past a vertex that sit near both of its edge lines are cut off by the
    /// bounding box.
    #[must_use]
    pub fn encloses(&self, point: &Point<T>, tol: T::Tolerance) -> bool {
        if !self.aabb().contains_point(point, tol) {
            return false;
        }
        let signs = [
            side_sign_2d(&self.p, &(&self.q - &self.p), point, tol),
            side_sign_2d(&self.q, &(&self.r - &self.q), point, tol),
            side_sign_2d(&self.r, &(&self.p - &self.r), point, tol),
        ];
        !(signs.contains(&Ordering::Less) && signs.contains(&Ordering::Greater))
    }

    /// Returns the smallest box holding all three vertices.
    #[must_use]
    pub fn aabb(&self) -> Aabb<T> {
        let mut aabb = Aabb::from_corners(&self.p, &self.q);
        aabb.expand(&self.r);
        aabb
    }

    /// Moves every vertex by `v`.
    pub fn translate(&mut self, v: &Vector<T>) {
        self.p.translate(v);
        self.q.translate(v);
        self.r.translate(v);
    }

    /// Rotates every vertex about `pivot`.
    pub fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
        self.p.rotate_by(pivot, sin, cos);
        self.q.rotate_by(pivot, sin, cos);
        self.r.rotate_by(pivot, sin, cos);
    }

    /// Same vertex set under `tol`, regardless of order or winding.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        let matched = |a: &Self, b: &Self| {
            a.points()
                .iter()
                .all(|v| b.points().iter().any(|w| v.approx_eq(w, tol)))
        };
        matched(self, other) && matched(other, self)
    }

    /// Intersection with a line, ray or segment: the edge hits plus enclosed ends.
    pub(crate) fn intersection_linear(&self, query: &Linear<'_, T>, tol: T::Tolerance) -> Option<Geometry<T>> {
        let mut hits = Vec::new();
        for edge in self.edges() {
            match edge.linear().intersection(query, tol) {
                Some(Geometry::Point(pt)) => hits.push(pt),
                Some(Geometry::Segment(s)) => {
                    hits.push(s.p().clone());
                    hits.push(s.q().clone());
                }
                _ => {}
            }
        }
        hits.extend(query.endpoints().into_iter().filter(|e| self.encloses(e, tol)));
        reduce_collinear(hits, tol)
    }

    /// Clips this triangle against the half-planes of `other`.
    pub(crate) fn clip(&self, other: &Self, tol: T::Tolerance) -> Option<Geometry<T>> {
        let clockwise = other.is_clockwise();
        let winding = if clockwise { -T::one() } else { T::one() };
        let mut poly: Vec<Point<T>> = self.points().into_iter().cloned().collect();
        for edge in other.edges() {
            if poly.is_empty() {
                break;
            }
            let side = |pt: &Point<T>| winding.clone() * side_2d(edge.p(), edge.direction(), pt);
            let inside = |pt: &Point<T>| {
                let sign = side_sign_2d(edge.p(), edge.direction(), pt, tol);
                sign == Ordering::Equal || (sign == Ordering::Greater) != clockwise
            };
            let mut kept = Vec::with_capacity(poly.len() + 1);
            for (i, cur) in poly.iter().enumerate() {
                let prev = &poly[(i + poly.len() - 1) % poly.len()];
                let (s_cur, s_prev) = (side(cur), side(prev));
                let cur_in = inside(cur);
                let prev_in = inside(prev);
                if cur_in != prev_in {
                    let t = s_prev.clone() / (s_prev - s_cur);
                    kept.push(point_at(prev, &(cur - prev), &t));
                }
                if cur_in {
                    kept.push(cur.clone());
                }
            }
            poly = kept;
        }
        trace!(vertices = poly.len(), "clipped triangle");
        reduce_points(poly, tol)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_abs_diff_eq;
    use num_rational::BigRational;

    use super::*;
    use crate::geometry::{Line, Shape};
    use crate::math::{Precision, RoundingMode};

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle<f64> {
        Triangle::new(p(a.0, a.1), p(b.0, b.1), p(c.0, c.1), TOL).unwrap()
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        assert!(Triangle::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), TOL).is_err());
    }

    #[test]
    fn slivers_within_tolerance_are_rejected() {
        assert!(Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-12), TOL).is_err());
        assert!(Triangle::new(p(0.0, 0.0), p(1e-12, 0.0), p(1.0, 1.0), TOL).is_err());
        assert!(Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-6), TOL).is_ok());
        match Triangle::geometry(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-12), TOL) {
            Geometry::Segment(s) => {
                assert!(s.approx_eq(&LineSegment::new(p(0.0, 0.0), p(2.0, 0.0)).unwrap(), TOL));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn sliver_does_not_reach_along_its_carrier() {
        let sliver = Triangle::unchecked(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-12));
        let far = p(5.0, 0.0);
        assert!(!sliver.encloses(&far, TOL));
        assert!(sliver.encloses(&p(1.5, 0.0), TOL));

        let thin = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1e-6), TOL).unwrap();
        assert!(!thin.encloses(&far, TOL));
        assert!(!thin.intersects(&far, TOL));
        assert!(thin.intersection(&far, TOL).is_none());
        assert!(!thin.contains(&far, TOL));
        assert!(thin.distance(&far, TOL) > 2.9);
    }

    #[test]
    fn enclosure_does_not_scale_with_edge_length() {
        let big = tri((0.0, 0.0), (1000.0, 0.0), (0.0, 1000.0));
        let small = tri((0.0, 0.0), (1e-3, 0.0), (0.0, 1e-3));
        for t in [&big, &small] {
            assert!(t.encloses(&p(1e-4, -2e-11), TOL));
            assert!(!t.encloses(&p(1e-4, -1e-9), TOL));
        }
    }

    #[test]
    fn geometry_reduces_degenerate_input() {
        assert_eq!(
            Triangle::geometry(p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0), TOL),
            Geometry::Point(p(1.0, 1.0))
        );
        match Triangle::geometry(p(0.0, 0.0), p(2.0, 2.0), p(1.0, 1.0), TOL) {
            Geometry::Segment(s) => {
                assert!(s.approx_eq(&LineSegment::new(p(0.0, 0.0), p(2.0, 2.0)).unwrap(), TOL));
            }
            other => panic!("expected segment, got {other:?}"),
        }
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert_eq!(
            Triangle::geometry(t.p().clone(), t.q().clone(), t.r().clone(), TOL),
            Geometry::Triangle(t)
        );
    }

    #[test]
    fn measures() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
        assert_abs_diff_eq!(t.area(), 6.0);
        assert_abs_diff_eq!(t.signed_area(), 6.0);
        assert!(!t.is_clockwise());
        assert_abs_diff_eq!(t.perimeter(TOL), 12.0, epsilon = TOL);
        assert!(t.centroid().approx_eq(&p(4.0 / 3.0, 1.0), TOL));
        assert!(t.circumcenter(TOL).unwrap().approx_eq(&p(2.0, 1.5), TOL));
        let cw = tri((0.0, 0.0), (0.0, 3.0), (4.0, 0.0));
        assert!(cw.is_clockwise());
        assert_abs_diff_eq!(cw.area(), 6.0);
    }

    #[test]
    fn right_isosceles_angles() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert_abs_diff_eq!(t.angle_p(TOL), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(t.angle_q(TOL), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(t.angle_r(TOL), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(t.angle_p(TOL) + t.angle_q(TOL) + t.angle_r(TOL), PI, epsilon = 1e-12);
    }

    #[test]
    fn opposite_vertex() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let edge = LineSegment::new(p(0.0, 1.0), p(1.0, 0.0)).unwrap();
        assert_eq!(t.opposite(&edge, TOL), Some(&p(0.0, 0.0)));
        let stray = LineSegment::new(p(5.0, 5.0), p(1.0, 0.0)).unwrap();
        assert!(t.opposite(&stray, TOL).is_none());
    }

    #[test]
    fn encloses_interior_and_boundary() {
        let t = tri((0.0, 0.0), (2.0, 0.0), (0.0, 2.0));
        assert!(t.encloses(&p(0.5, 0.5), TOL));
        assert!(t.encloses(&p(1.0, 1.0), TOL));
        assert!(t.encloses(&p(0.0, 0.0), TOL));
        assert!(!t.encloses(&p(1.5, 1.5), TOL));
        let cw = tri((0.0, 0.0), (0.0, 2.0), (2.0, 0.0));
        assert!(cw.encloses(&p(0.5, 0.5), TOL));
    }

    #[test]
    fn segment_through_triangle() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        let s = LineSegment::new(p(-1.0, 1.0), p(5.0, 1.0)).unwrap();
        match t.intersection(&s, TOL) {
            Some(Geometry::Segment(hit)) => {
                let expected = LineSegment::new(p(0.0, 1.0), p(3.0, 1.0)).unwrap();
                assert!(hit.approx_eq(&expected, TOL));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn segment_inside_triangle_is_found() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        let s = LineSegment::new(p(0.5, 0.5), p(1.0, 1.0)).unwrap();
        match t.intersection(&s, TOL) {
            Some(Geometry::Segment(hit)) => assert!(hit.approx_eq(&s, TOL)),
            other => panic!("expected segment, got {other:?}"),
        }
        assert!(t.contains(&s, TOL));
    }

    #[test]
    fn line_touching_a_vertex() {
        let t = tri((0.0, 0.0), (2.0, 0.0), (0.0, 2.0));
        let l = Line::through(p(-1.0, 1.0), &p(1.0, -1.0)).unwrap();
        assert_eq!(t.intersection(&l, TOL), Some(Geometry::Point(p(0.0, 0.0))));
    }

    #[test]
    fn overlapping_triangles_clip_to_a_convex_area() {
        let a = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        let b = tri((1.0, -1.0), (1.0, 5.0), (-5.0, 2.0));
        match a.intersection(&b, TOL) {
            Some(Geometry::ConvexArea(area)) => {
                assert_eq!(area.points().len(), 4);
                assert_abs_diff_eq!(area.area(), 3.5, epsilon = 1e-9);
            }
            other => panic!("expected convex area, got {other:?}"),
        }
    }

    #[test]
    fn nested_triangle_is_its_own_intersection() {
        let outer = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        let inner = tri((1.0, 1.0), (2.0, 1.0), (1.0, 2.0));
        match outer.intersection(&inner, TOL) {
            Some(Geometry::Triangle(t)) => assert!(t.approx_eq(&inner, TOL)),
            other => panic!("expected triangle, got {other:?}"),
        }
        assert!(outer.contains(&inner, TOL));
        assert!(!inner.contains(&outer, TOL));
    }

    #[test]
    fn triangles_sharing_an_edge_meet_in_a_segment() {
        let a = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let b = tri((1.0, 0.0), (0.0, 1.0), (1.0, 1.0));
        match a.intersection(&b, TOL) {
            Some(Geometry::Segment(s)) => {
                assert!(s.approx_eq(&LineSegment::new(p(1.0, 0.0), p(0.0, 1.0)).unwrap(), TOL));
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn separated_triangles_have_a_gap() {
        let a = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let b = tri((3.0, 0.0), (4.0, 0.0), (3.0, 1.0));
        assert!(a.intersection(&b, TOL).is_none());
        assert_abs_diff_eq!(a.distance(&b, TOL), 2.0, epsilon = TOL);
    }

    #[test]
    fn exact_angle_sum() {
        let tol = Precision::new(-8, RoundingMode::HalfEven);
        let q = |n: i64| BigRational::from_integer(n.into());
        let t = Triangle::new(
            Point::new(q(0), q(0)),
            Point::new(q(3), q(0)),
            Point::new(q(1), q(2)),
            tol,
        )
        .unwrap();
        let sum = t.angle_p(tol) + t.angle_q(tol) + t.angle_r(tol);
        let coarse = Precision::new(-6, RoundingMode::HalfEven);
        assert!(sum.approx_eq(&BigRational::pi(coarse), coarse));
    }
}
