use tracing::trace;

use crate::math::{total_cmp, Real};
use crate::operations::creation::ConvexHull;

use super::{ConvexArea, Geometry, LineSegment, Point, Triangle};

/// Removes points that cannot be told apart from an earlier one, keeping order.
#[must_use]
pub fn dedup_points<T: Real>(points: Vec<Point<T>>, tol: T::Tolerance) -> Vec<Point<T>> {
    let mut kept: Vec<Point<T>> = Vec::with_capacity(points.len());
    for pt in points {
        if !kept.iter().any(|k| k.approx_eq(&pt, tol)) {
            kept.push(pt);
        }
    }
    kept
}

/// Reduces points known to lie on one line: nothing, a point, or the segment
/// spanning the two extremes.
#[must_use]
pub fn reduce_collinear<T: Real>(points: Vec<Point<T>>, tol: T::Tolerance) -> Option<Geometry<T>> {
    let mut points = dedup_points(points, tol);
    match points.len() {
        0 => None,
        1 => points.pop().map(Geometry::Point),
        _ => {
            let anchor = points[0].clone();
            let far = points
                .iter()
                .max_by(|a, b| total_cmp(&a.distance_squared_to(&anchor), &b.distance_squared_to(&anchor)))
                .map_or_else(|| anchor.clone(), Clone::clone);
            let dir = &far - &anchor;
            let along = |pt: &Point<T>| (pt - &anchor).dot(&dir);
            let lo = points
                .iter()
                .min_by(|a, b| total_cmp(&along(a), &along(b)))
                .cloned()?;
            let hi = points
                .iter()
                .max_by(|a, b| total_cmp(&along(a), &along(b)))
                .cloned()?;
            Some(Geometry::Segment(LineSegment::unchecked(lo, hi)))
        }
    }
}

/// Reduces an arbitrary point set to the simplest shape covering its convex hull.
///
/// 0 points give `None`, then a point, a segment for collinear input, a triangle for
/// three hull vertices and a convex area beyond that.
#[must_use]
pub fn reduce_points<T: Real>(points: Vec<Point<T>>, tol: T::Tolerance) -> Option<Geometry<T>> {
    let points = dedup_points(points, tol);
    if points.len() < 3 {
        return reduce_collinear(points, tol);
    }
    let hull = ConvexHull::new(points.clone()).execute(tol);
    trace!(points = points.len(), hull = hull.len(), "reducing point set");
    match <[Point<T>; 3]>::try_from(hull) {
        Ok([p, q, r]) => Some(Geometry::Triangle(Triangle::unchecked(p, q, r))),
        Err(hull) if hull.len() > 3 => Some(Geometry::ConvexArea(ConvexArea::unchecked(hull))),
        Err(_) => reduce_collinear(points, tol),
    }
}
