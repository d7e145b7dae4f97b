use std::cmp::Ordering;

use crate::geometry::{Point, Vector};

use super::Real;

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel
/// under `tol`. Solved with Cramer's rule on the 2x2 system.
#[must_use]
pub fn line_line_intersect_2d<T: Real>(
    p1: &Point<T>,
    d1: &Vector<T>,
    p2: &Point<T>,
    d2: &Vector<T>,
    tol: T::Tolerance,
) -> Option<(T, T)> {
    let cross = d1.cross(d2);
    if cross.approx_zero(tol) {
        return None;
    }
    let offset = p2 - p1;
    let t = offset.cross(d2) / cross.clone();
    let u = offset.cross(d1) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at<T: Real>(origin: &Point<T>, dir: &Vector<T>, t: &T) -> Point<T> {
    origin + &dir.scale(t)
}

/// Parameter of the orthogonal projection of `point` onto `origin + t * dir`.
///
/// `dir` must be non-zero.
#[must_use]
pub fn project_2d<T: Real>(origin: &Point<T>, dir: &Vector<T>, point: &Point<T>) -> T {
    (point - origin).dot(dir) / dir.magnitude_squared()
}

/// Side of the directed line `origin + t * dir` that `point` lies on.
///
/// Positive on the left, negative on the right, zero under `tol` on the line.
#[must_use]
pub fn side_2d<T: Real>(origin: &Point<T>, dir: &Vector<T>, point: &Point<T>) -> T {
    dir.cross(&(point - origin))
}

/// Side of the directed line `origin + t * dir` that `point` lies on, judged by distance.
///
/// `Equal` when the orthogonal foot of `point` is within `tol` of it, so the verdict
/// does not scale with the length of `dir`. A zero `dir` degrades to a point test.
#[must_use]
pub fn side_sign_2d<T: Real>(origin: &Point<T>, dir: &Vector<T>, point: &Point<T>, tol: T::Tolerance) -> Ordering {
    if dir.magnitude_squared().is_zero() {
        return if origin.approx_eq(point, tol) {
            Ordering::Equal
        } else {
            Ordering::Greater
        };
    }
    let foot = point_at(origin, dir, &project_2d(origin, dir, point));
    if foot.approx_eq(point, tol) {
        return Ordering::Equal;
    }
    super::total_cmp(&side_2d(origin, dir, point), &T::zero())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn line_line_perpendicular() {
        let (t, u) = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector::new(1.0, 0.0),
            &p(0.5, -1.0),
            &Vector::new(0.0, 1.0),
            TOL,
        )
        .unwrap();
        assert_abs_diff_eq!(t, 0.5, epsilon = TOL);
        assert_abs_diff_eq!(u, 1.0, epsilon = TOL);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        assert!(line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector::new(1.0, 0.0),
            &p(0.0, 1.0),
            &Vector::new(2.0, 0.0),
            TOL,
        )
        .is_none());
    }

    #[test]
    fn point_at_interpolation() {
        let pt = point_at(&p(1.0, 2.0), &Vector::new(4.0, 6.0), &0.5);
        assert_eq!(pt, p(3.0, 5.0));
    }

    #[test]
    fn projection_and_side() {
        let origin = p(0.0, 0.0);
        let dir = Vector::new(2.0, 0.0);
        assert_abs_diff_eq!(project_2d(&origin, &dir, &p(1.0, 5.0)), 0.5);
        assert!(side_2d(&origin, &dir, &p(1.0, 5.0)) > 0.0);
        assert!(side_2d(&origin, &dir, &p(1.0, -5.0)) < 0.0);
    }

    #[test]
    fn side_sign_ignores_direction_length() {
        let origin = p(0.0, 0.0);
        let near = p(0.5, 2e-11);
        for len in [1e-3, 1.0, 1e3] {
            let dir = Vector::new(len, 0.0);
            assert_eq!(side_sign_2d(&origin, &dir, &near, TOL), Ordering::Equal);
            assert_eq!(side_sign_2d(&origin, &dir, &p(0.5, 1e-6), TOL), Ordering::Greater);
            assert_eq!(side_sign_2d(&origin, &dir, &p(0.5, -1e-6), TOL), Ordering::Less);
        }
    }
}
