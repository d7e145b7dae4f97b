use std::cmp::Ordering;

use crate::geometry::Point;

use super::intersect_2d::side_sign_2d;
use super::Real;

/// Computes twice the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn double_signed_area_2d<T: Real>(points: &[Point<T>]) -> T {
    let n = points.len();
    if n < 3 {
        return T::zero();
    }
    let mut sum = T::zero();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        sum = sum + a.x() * b.y() - b.x() * a.y();
    }
    sum
}

/// Computes the signed area of a polygon (shoelace formula).
#[must_use]
pub fn signed_area_2d<T: Real>(points: &[Point<T>]) -> T {
    double_signed_area_2d(points) * T::half()
}

/// Orientation of the turn `a -> b -> c`: `Greater` for counter-clockwise, `Less` for
/// clockwise, `Equal` when `c` lies within `tol` of the line through `a` and `b`.
#[must_use]
pub fn orientation_2d<T: Real>(a: &Point<T>, b: &Point<T>, c: &Point<T>, tol: T::Tolerance) -> Ordering {
    side_sign_2d(a, &(b - a), c, tol)
}

/// Lexicographic `(x, y)` ordering used for canonical starts and hull sweeps.
#[must_use]
pub fn cmp_xy_2d<T: Real>(a: &Point<T>, b: &Point<T>) -> Ordering {
    super::total_cmp(&a.x(), &b.x()).then_with(|| super::total_cmp(&a.y(), &b.y()))
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y.
#[must_use]
pub fn rotate_to_canonical_start<T: Real>(points: &[Point<T>]) -> Vec<Point<T>> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let best = leftmost_bottom_index(points);
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Index of the leftmost-bottommost vertex of a polygon. `0` for an empty slice.
#[must_use]
pub fn leftmost_bottom_index<T: Real>(points: &[Point<T>]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        if cmp_xy_2d(pt, &points[best]) == Ordering::Less {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_abs_diff_eq!(signed_area_2d(&pts), 1.0);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert_abs_diff_eq!(signed_area_2d(&pts), -1.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert_abs_diff_eq!(signed_area_2d(&[p(0.0, 0.0)]), 0.0);
        assert_abs_diff_eq!(signed_area_2d::<f64>(&[]), 0.0);
    }

    #[test]
    fn orientation_of_turns() {
        let (a, b) = (p(0.0, 0.0), p(1.0, 0.0));
        assert_eq!(orientation_2d(&a, &b, &p(1.0, 1.0), TOL), Ordering::Greater);
        assert_eq!(orientation_2d(&a, &b, &p(1.0, -1.0), TOL), Ordering::Less);
        assert_eq!(orientation_2d(&a, &b, &p(5.0, 0.0), TOL), Ordering::Equal);
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        let rotated = rotate_to_canonical_start(&pts);
        assert_eq!(rotated[0], p(0.0, 0.0));
        assert_eq!(rotated[1], p(1.0, 0.0));
    }

    #[test]
    fn leftmost_bottom_basic() {
        let pts = vec![p(1.0, 2.0), p(0.5, 1.0), p(0.5, 0.5), p(2.0, 0.0)];
        assert_eq!(leftmost_bottom_index(&pts), 2);
    }
}
