use crate::geometry::{Point, Vector};

use super::intersect_2d::{point_at, project_2d};
use super::{max_of, min_of, Real};

/// Bounds of a parameter range along a line. `None` means unbounded on that side.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamRange<T: Real> {
    pub lo: Option<T>,
    pub hi: Option<T>,
}

impl<T: Real> ParamRange<T> {
    /// `(-inf, inf)`: an infinite line.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { lo: None, hi: None }
    }

    /// `[0, inf)`: a ray.
    #[must_use]
    pub fn ray() -> Self {
        Self {
            lo: Some(T::zero()),
            hi: None,
        }
    }

    /// `[0, 1]`: a segment.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            lo: Some(T::zero()),
            hi: Some(T::one()),
        }
    }

    /// Clamps `t` into the range.
    #[must_use]
    pub fn clamp(&self, t: T) -> T {
        let t = match &self.lo {
            Some(lo) => max_of(t, lo.clone()),
            None => t,
        };
        match &self.hi {
            Some(hi) => min_of(t, hi.clone()),
            None => t,
        }
    }

    /// Intersection of two ranges, possibly empty (`lo > hi`).
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Self {
        let lo = match (&self.lo, &other.lo) {
            (Some(a), Some(b)) => Some(max_of(a.clone(), b.clone())),
            (Some(a), None) | (None, Some(a)) => Some(a.clone()),
            (None, None) => None,
        };
        let hi = match (&self.hi, &other.hi) {
            (Some(a), Some(b)) => Some(min_of(a.clone(), b.clone())),
            (Some(a), None) | (None, Some(a)) => Some(a.clone()),
            (None, None) => None,
        };
        Self { lo, hi }
    }

    /// Image of the range under `t -> origin + scale * t`.
    ///
    /// A negative scale swaps the ends.
    #[must_use]
    pub fn mapped(&self, origin: &T, scale: &T) -> Self {
        let map = |t: &T| origin.clone() + scale.clone() * t.clone();
        let lo = self.lo.as_ref().map(map);
        let hi = self.hi.as_ref().map(map);
        if scale.is_negative() {
            Self { lo: hi, hi: lo }
        } else {
            Self { lo, hi }
        }
    }
}

/// Closest point to `point` on `origin + t * dir` with `t` restricted to `range`,
/// together with its parameter.
#[must_use]
pub fn closest_on_range_2d<T: Real>(
    origin: &Point<T>,
    dir: &Vector<T>,
    range: &ParamRange<T>,
    point: &Point<T>,
) -> (Point<T>, T) {
    let t = range.clamp(project_2d(origin, dir, point));
    (point_at(origin, dir, &t), t)
}
