use crate::math::distance_2d::{closest_on_range_2d, ParamRange};
use crate::math::intersect_2d::{line_line_intersect_2d, project_2d};
use crate::math::Real;

use super::{Geometry, Line, LineSegment, Point, Ray};

/// A straight primitive seen as its carrier line plus a parameter range.
///
/// Lines, rays and segments all reduce to this, so every pairing between them is
/// handled by one clip of parameter ranges.
#[derive(Debug, Clone)]
pub(crate) struct Linear<'a, T: Real> {
    line: &'a Line<T>,
    range: ParamRange<T>,
}

impl<'a, T: Real> Linear<'a, T> {
    pub(crate) fn new(line: &'a Line<T>, range: ParamRange<T>) -> Self {
        Self { line, range }
    }

    /// The finite ends, lowest parameter first.
    pub(crate) fn endpoints(&self) -> Vec<Point<T>> {
        [&self.range.lo, &self.range.hi]
            .into_iter()
            .flatten()
            .map(|t| self.line.point_at(t))
            .collect()
    }

    pub(crate) fn is_bounded(&self) -> bool {
        self.range.lo.is_some() && self.range.hi.is_some()
    }

    /// Whether the point at parameter `t` belongs to the range.
    ///
    /// Parameters just outside an end still count when their point cannot be told
    /// apart from the end point.
    fn within(&self, t: &T, tol: T::Tolerance) -> bool {
        let near = |end: &T| self.line.point_at(t).approx_eq(&self.line.point_at(end), tol);
        let above = self.range.lo.as_ref().is_none_or(|lo| t >= lo || near(lo));
        let below = self.range.hi.as_ref().is_none_or(|hi| t <= hi || near(hi));
        above && below
    }

    pub(crate) fn contains_point(&self, point: &Point<T>, tol: T::Tolerance) -> bool {
        self.line.contains_point(point, tol) && self.within(&self.line.parameter_of(point), tol)
    }

    /// The other range expressed in this carrier's parameter space.
    ///
    /// Only meaningful when both carriers coincide.
    fn mapped(&self, other: &Self) -> ParamRange<T> {
        let v = self.line.v();
        let origin = project_2d(self.line.p(), v, other.line.p());
        let scale = other.line.v().dot(v) / v.magnitude_squared();
        other.range.mapped(&origin, &scale)
    }

    pub(crate) fn intersection(&self, other: &Self, tol: T::Tolerance) -> Option<Geometry<T>> {
        let (a, b) = (self.line, other.line);
        if let Some((t, u)) = line_line_intersect_2d(a.p(), a.v(), b.p(), b.v(), tol) {
            return (self.within(&t, tol) && other.within(&u, tol))
                .then(|| Geometry::Point(a.point_at(&t)));
        }
        if !a.is_collinear_with(b, tol) {
            return None;
        }
        let shared = self.range.overlap(&self.mapped(other));
        match (shared.lo, shared.hi) {
            (None, None) => Some(Geometry::Line(a.clone())),
            (Some(lo), None) => Some(Geometry::Ray(Ray::unchecked(a.point_at(&lo), a.v().clone()))),
            (None, Some(hi)) => Some(Geometry::Ray(Ray::unchecked(a.point_at(&hi), a.v().reverse()))),
            (Some(lo), Some(hi)) => {
                let start = a.point_at(&lo);
                let end = a.point_at(&hi);
                if start.approx_eq(&end, tol) {
                    Some(Geometry::Point(start))
                } else if lo > hi {
                    None
                } else {
                    Some(Geometry::Segment(LineSegment::unchecked(start, end)))
                }
            }
        }
    }

    pub(crate) fn intersects(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.intersection(other, tol).is_some()
    }

    /// Returns `true` if every point of `other` lies on this primitive.
    pub(crate) fn contains(&self, other: &Self, tol: T::Tolerance) -> bool {
        if !self.line.is_collinear_with(other.line, tol) {
            return false;
        }
        let inner = self.mapped(other);
        let near = |a: &T, b: &T| self.line.point_at(a).approx_eq(&self.line.point_at(b), tol);
        let lo_ok = match (&self.range.lo, &inner.lo) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(t)) => t >= outer || near(t, outer),
        };
        let hi_ok = match (&self.range.hi, &inner.hi) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(t)) => t <= outer || near(t, outer),
        };
        lo_ok && hi_ok
    }

    pub(crate) fn closest_point(&self, point: &Point<T>) -> Point<T> {
        closest_on_range_2d(self.line.p(), self.line.v(), &self.range, point).0
    }

    /// Closest pair of points `(on self, on other)`, or `None` when the two touch.
    ///
    /// For non-intersecting primitives one end of the connection is always a finite
    /// end of one of them, except for two parallel unbounded carriers.
    pub(crate) fn closest_pair(&self, other: &Self, tol: T::Tolerance) -> Option<(Point<T>, Point<T>)> {
        if self.intersects(other, tol) {
            return None;
        }
        let from_self = self
            .endpoints()
            .into_iter()
            .map(|e| {
                let on_other = other.closest_point(&e);
                (e, on_other)
            });
        let from_other = other
            .endpoints()
            .into_iter()
            .map(|e| (self.closest_point(&e), e));
        let best = from_self.chain(from_other).reduce(|best, pair| {
            if pair.0.distance_squared_to(&pair.1) < best.0.distance_squared_to(&best.1) {
                pair
            } else {
                best
            }
        });
        best.or_else(|| {
            let anchor = other.line.p().clone();
            Some((self.closest_point(&anchor), anchor))
        })
    }

}
