use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Real;
use crate::operations::creation::ConvexHull;

use super::aabb::Aabb;
use super::{Geometry, LineSegment, Point, Rectangle, Triangle, Vector};

/// A convex polygon, counter-clockwise, with no three consecutive collinear
/// vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexArea<T: Real> {
    points: Vec<Point<T>>,
}

impl<T: Real> ConvexArea<T> {
    /// Builds the convex area spanned by an unordered point set.
    ///
    /// Interior points, duplicates and points collinear with their neighbours are
    /// dropped; the boundary starts at the leftmost-bottom vertex.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` for fewer than three points, and
    /// `GeometryError::Degenerate` if the hull has no area.
    pub fn from_points(points: Vec<Point<T>>, tol: T::Tolerance) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                needed: 3,
                got: points.len(),
            }
            .into());
        }
        let hull = ConvexHull::new(points).execute(tol);
        if hull.len() < 3 {
            debug!(hull = hull.len(), "rejected convex area without interior");
            return Err(GeometryError::Degenerate("points are collinear".into()).into());
        }
        Ok(Self::unchecked(hull))
    }

    /// Wraps an already valid hull.
    pub(crate) fn unchecked(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Returns the boundary, counter-clockwise from the leftmost-bottom vertex.
    #[must_use]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// A triangle for three vertices, a rectangle for four at right angles,
    /// otherwise the area itself.
    #[must_use]
    pub fn simplify(&self, tol: T::Tolerance) -> Geometry<T> {
        match self.points.as_slice() {
            [p, q, r] => Geometry::Triangle(Triangle::unchecked(p.clone(), q.clone(), r.clone())),
            [p, q, r, s] if Rectangle::is_rectangle(p, q, r, s, tol) => Geometry::Rectangle(
                Rectangle::unchecked(p.clone(), q.clone(), r.clone(), s.clone()),
            ),
            _ => Geometry::ConvexArea(self.clone()),
        }
    }

    /// Fan triangulation from the first vertex.
    #[must_use]
    pub fn triangles(&self) -> Vec<Triangle<T>> {
        let Some((first, rest)) = self.points.split_first() else {
            return Vec::new();
        };
        rest.windows(2)
            .map(|w| Triangle::unchecked(first.clone(), w[0].clone(), w[1].clone()))
            .collect()
    }

    /// Boundary edges, wrapping from the last vertex to the first.
    #[must_use]
    pub fn edges(&self) -> Vec<LineSegment<T>> {
        let n = self.points.len();
        (0..n)
            .map(|i| LineSegment::unchecked(self.points[i].clone(), self.points[(i + 1) % n].clone()))
            .collect()
    }

    /// Returns the enclosed area.
    #[must_use]
    pub fn area(&self) -> T {
        signed_area_2d(&self.points).abs()
    }

    /// Area-weighted mean of the fan triangle centroids.
    #[must_use]
    pub fn centroid(&self) -> Point<T> {
        let mut weight = T::zero();
        let (mut x, mut y) = (T::zero(), T::zero());
        for tri in self.triangles() {
            let a = tri.area();
            let c = tri.centroid();
            x = x + c.x() * a.clone();
            y = y + c.y() * a.clone();
            weight = weight + a;
        }
        Point::new(x / weight.clone(), y / weight)
    }

    /// Returns the smallest box holding every vertex.
    #[must_use]
    pub fn aabb(&self) -> Aabb<T> {
        let mut aabb = Aabb::from_corners(&self.points[0], &self.points[0]);
        for pt in &self.points[1..] {
            aabb.expand(pt);
        }
        aabb
    }

    /// Moves every vertex by `v`.
    pub fn translate(&mut self, v: &Vector<T>) {
        for pt in &mut self.points {
            pt.translate(v);
        }
    }

    /// Rotates every vertex about `pivot`.
    pub fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
        for pt in &mut self.points {
            pt.rotate_by(pivot, sin, cos);
        }
    }

    /// Same vertex set under `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .all(|v| other.points.iter().any(|w| v.approx_eq(w, tol)))
    }
}
