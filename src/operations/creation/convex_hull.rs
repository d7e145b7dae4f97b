use std::cmp::Ordering;

use tracing::trace;

use crate::geometry::{dedup_points, Point};
use crate::math::polygon_2d::{cmp_xy_2d, orientation_2d, rotate_to_canonical_start};
use crate::math::Real;

/// Builds the convex hull of an unordered point set.
///
/// The result is counter-clockwise, starts at the leftmost-bottom point and has no
/// three consecutive collinear points. Fewer than three points come back when the
/// input is collinear: the two extremes, or a single point.
pub struct ConvexHull<T: Real> {
    points: Vec<Point<T>>,
}

impl<T: Real> ConvexHull<T> {
    /// Creates a new `ConvexHull` operation.
    #[must_use]
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Executes the hull construction (Andrew's monotone chain).
    #[must_use]
    pub fn execute(&self, tol: T::Tolerance) -> Vec<Point<T>> {
        let mut sorted = dedup_points(self.points.clone(), tol);
        sorted.sort_by(cmp_xy_2d);
        if sorted.len() < 3 {
            return sorted;
        }

        let lower = half_hull(sorted.iter(), tol);
        let upper = half_hull(sorted.iter().rev(), tol);
        let mut hull: Vec<Point<T>> = lower[..lower.len() - 1]
            .iter()
            .chain(&upper[..upper.len() - 1])
            .cloned()
            .collect();
        remove_collinear(&mut hull, tol);
        let hull = rotate_to_canonical_start(&hull);
        trace!(input = self.points.len(), hull = hull.len(), "convex hull built");
        hull
    }
}

/// One monotone chain, keeping only strict left turns.
fn half_hull<'a, T: Real>(
    points: impl Iterator<Item = &'a Point<T>>,
    tol: T::Tolerance,
) -> Vec<Point<T>> {
    let mut chain: Vec<Point<T>> = Vec::new();
    for pt in points {
        while chain.len() >= 2
            && orientation_2d(&chain[chain.len() - 2], &chain[chain.len() - 1], pt, tol)
                != Ordering::Greater
        {
            chain.pop();
        }
        chain.push(pt.clone());
    }
    chain
}

/// Drops vertices that are collinear with their cyclic neighbours.
///
/// The chains already turn strictly left inside, so only the vertices where they
/// meet can still fail the test.
fn remove_collinear<T: Real>(hull: &mut Vec<Point<T>>, tol: T::Tolerance) {
    let mut i = 1;
    while hull.len() > 2 && i <= hull.len() {
        let n = hull.len();
        let at = i % n;
        let prev = &hull[(at + n - 1) % n];
        let next = &hull[(at + 1) % n];
        if orientation_2d(prev, &hull[at], next, tol) == Ordering::Greater {
            i += 1;
        } else {
            trace!(index = at, "dropping collinear hull vertex");
            hull.remove(at);
            i = i.saturating_sub(1).max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use num_rational::BigRational;

    use super::*;
    use crate::math::{Precision, RoundingMode};

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn square_with_interior_and_edge_points() {
        let pts = vec![
            p(1.0, 1.0),
            p(0.0, 0.0),
            p(2.0, 2.0),
            p(0.5, 1.0),
            p(2.0, 0.0),
            p(0.0, 2.0),
            p(1.0, 0.0),
            p(2.0, 1.0),
        ];
        let hull = ConvexHull::new(pts).execute(TOL);
        assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]);
    }

    #[test]
    fn duplicates_are_merged() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)];
        let hull = ConvexHull::new(pts).execute(TOL);
        assert_eq!(hull, vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
    }

    #[test]
    fn collinear_input_yields_extremes() {
        let pts = vec![p(1.0, 1.0), p(3.0, 3.0), p(0.0, 0.0), p(2.0, 2.0)];
        let hull = ConvexHull::new(pts).execute(TOL);
        assert_eq!(hull, vec![p(0.0, 0.0), p(3.0, 3.0)]);
    }

    #[test]
    fn nearly_collinear_vertex_is_removed() {
        let pts = vec![p(0.0, 0.0), p(1.0, 1e-12), p(2.0, 0.0), p(1.0, 1.0)];
        let hull = ConvexHull::new(pts).execute(TOL);
        assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1.0)]);
    }

    #[test]
    fn small_inputs_pass_through() {
        assert!(ConvexHull::<f64>::new(vec![]).execute(TOL).is_empty());
        assert_eq!(ConvexHull::new(vec![p(4.0, 4.0)]).execute(TOL), vec![p(4.0, 4.0)]);
    }

    #[test]
    fn exact_hull() {
        let tol = Precision::new(-6, RoundingMode::HalfUp);
        let q = |n: i64| BigRational::from_integer(n.into());
        let pts = vec![
            Point::new(q(2), q(2)),
            Point::new(q(0), q(0)),
            Point::new(q(1), q(1)),
            Point::new(q(2), q(0)),
        ];
        let hull = ConvexHull::new(pts).execute(tol);
        assert_eq!(
            hull,
            vec![Point::new(q(0), q(0)), Point::new(q(2), q(0)), Point::new(q(2), q(2))]
        );
    }
}
