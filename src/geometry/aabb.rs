use crate::error::Result;
use crate::math::{max_of, min_of, Real};

use super::{Geometry, LineSegment, Point, Rectangle, Vector};

/// Axis-aligned bounding box.
///
/// Always normalized: `x_min <= x_max` and `y_min <= y_max`. A box may be degenerate
/// (zero width or height) when it bounds a point or an axis-parallel segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Aabb<T: Real> {
    x_min: T,
    x_max: T,
    y_min: T,
    y_max: T,
}

impl<T: Real> Aabb<T> {
    /// Creates a box from its bounds, swapping reversed pairs.
    #[must_use]
    pub fn new(x_min: T, x_max: T, y_min: T, y_max: T) -> Self {
        let (x_min, x_max) = if x_min > x_max { (x_max, x_min) } else { (x_min, x_max) };
        let (y_min, y_max) = if y_min > y_max { (y_max, y_min) } else { (y_min, y_max) };
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The box spanned by two opposite corners.
    #[must_use]
    pub fn from_corners(a: &Point<T>, b: &Point<T>) -> Self {
        Self::new(a.x(), b.x(), a.y(), b.y())
    }

    /// Smallest box containing every point, `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point<T>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::from_corners(first, first);
        for pt in rest {
            aabb.expand(pt);
        }
        Some(aabb)
    }

    /// Returns the left edge.
    #[must_use]
    pub fn x_min(&self) -> &T {
        &self.x_min
    }

    /// Returns the right edge.
    #[must_use]
    pub fn x_max(&self) -> &T {
        &self.x_max
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn y_min(&self) -> &T {
        &self.y_min
    }

    /// Returns the top edge.
    #[must_use]
    pub fn y_max(&self) -> &T {
        &self.y_max
    }

    /// Returns `x_max - x_min`.
    #[must_use]
    pub fn width(&self) -> T {
        self.x_max.clone() - self.x_min.clone()
    }

    /// Returns `y_max - y_min`.
    #[must_use]
    pub fn height(&self) -> T {
        self.y_max.clone() - self.y_min.clone()
    }

    /// Returns the midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point<T> {
        let half = T::half();
        Point::new(
            (self.x_min.clone() + self.x_max.clone()) * half.clone(),
            (self.y_min.clone() + self.y_max.clone()) * half,
        )
    }

    /// The four corners, counter-clockwise from `(x_min, y_min)`.
    #[must_use]
    pub fn corners(&self) -> [Point<T>; 4] {
        [
            Point::new(self.x_min.clone(), self.y_min.clone()),
            Point::new(self.x_max.clone(), self.y_min.clone()),
            Point::new(self.x_max.clone(), self.y_max.clone()),
            Point::new(self.x_min.clone(), self.y_max.clone()),
        ]
    }

    /// Grows the box to include `point`.
    pub fn expand(&mut self, point: &Point<T>) {
        let (x, y) = (point.x(), point.y());
        if x < self.x_min {
            self.x_min = x;
        } else if x > self.x_max {
            self.x_max = x;
        }
        if y < self.y_min {
            self.y_min = y;
        } else if y > self.y_max {
            self.y_max = y;
        }
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x_min: min_of(self.x_min.clone(), other.x_min.clone()),
            x_max: max_of(self.x_max.clone(), other.x_max.clone()),
            y_min: min_of(self.y_min.clone(), other.y_min.clone()),
            y_max: max_of(self.y_max.clone(), other.y_max.clone()),
        }
    }

    /// Closed-interval overlap test on both axes. Boxes that only touch intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.x_min.approx_le(&other.x_max, tol)
            && other.x_min.approx_le(&self.x_max, tol)
            && self.y_min.approx_le(&other.y_max, tol)
            && other.y_min.approx_le(&self.y_max, tol)
    }

    /// The overlap of two boxes, `None` if they are apart.
    ///
    /// Boxes touching within `tol` yield a degenerate box.
    #[must_use]
    pub fn intersection(&self, other: &Self, tol: T::Tolerance) -> Option<Self> {
        if !self.intersects(other, tol) {
            return None;
        }
        let x_min = max_of(self.x_min.clone(), other.x_min.clone());
        let y_min = max_of(self.y_min.clone(), other.y_min.clone());
        let x_max = max_of(min_of(self.x_max.clone(), other.x_max.clone()), x_min.clone());
        let y_max = max_of(min_of(self.y_max.clone(), other.y_max.clone()), y_min.clone());
        Some(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Returns `true` if `other` lies inside this box.
    #[must_use]
    pub fn contains(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.x_min.approx_le(&other.x_min, tol)
            && other.x_max.approx_le(&self.x_max, tol)
            && self.y_min.approx_le(&other.y_min, tol)
            && other.y_max.approx_le(&self.y_max, tol)
    }

    /// Returns `true` if `point` is inside the box or within `tol` of it.
    #[must_use]
    pub fn contains_point(&self, point: &Point<T>, tol: T::Tolerance) -> bool {
        self.contains_xy(&point.x(), &point.y(), tol)
    }

    /// Returns `true` if `(x, y)` is inside the box or within `tol` of it.
    #[must_use]
    pub fn contains_xy(&self, x: &T, y: &T, tol: T::Tolerance) -> bool {
        self.x_min.approx_le(x, tol)
            && x.approx_le(&self.x_max, tol)
            && self.y_min.approx_le(y, tol)
            && y.approx_le(&self.y_max, tol)
    }

    /// Moves the box by `v`.
    pub fn translate(&mut self, v: &Vector<T>) {
        self.x_min = self.x_min.clone() + v.dx.clone();
        self.x_max = self.x_max.clone() + v.dx.clone();
        self.y_min = self.y_min.clone() + v.dy.clone();
        self.y_max = self.y_max.clone() + v.dy.clone();
    }

    /// The box as a shape: a point, an axis-parallel segment, or a rectangle.
    ///
    /// # Errors
    ///
    /// Never fails for a normalized box; the `Result` carries constructor errors.
    pub fn to_geometry(&self) -> Result<Geometry<T>> {
        let [lo, _, hi, _] = self.corners();
        match (self.width().is_zero(), self.height().is_zero()) {
            (true, true) => Ok(Geometry::Point(lo)),
            (true, false) | (false, true) => Ok(Geometry::Segment(LineSegment::new(lo, hi)?)),
            (false, false) => Ok(Geometry::Rectangle(Rectangle::from_aabb(self)?)),
        }
    }
}
