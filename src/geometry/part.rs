use crate::math::Real;

use super::linear::Linear;
use super::reduce::{reduce_collinear, reduce_points};
use super::{Geometry, LineSegment, Point, Triangle};

/// The three kinds of operand the query engines distinguish.
pub(crate) enum Part<'a, T: Real> {
    Point(&'a Point<T>),
    Linear(Linear<'a, T>),
    Area(Area<T>),
}

/// A convex area as its triangle decomposition plus its boundary ring.
#[derive(Debug, Clone)]
pub(crate) struct Area<T: Real> {
    triangles: Vec<Triangle<T>>,
    boundary: Vec<Point<T>>,
}

impl<T: Real> Area<T> {
    pub(crate) fn new(triangles: Vec<Triangle<T>>, boundary: Vec<Point<T>>) -> Self {
        Self { triangles, boundary }
    }

    pub(crate) fn boundary(&self) -> &[Point<T>] {
        &self.boundary
    }

    pub(crate) fn edges(&self) -> Vec<LineSegment<T>> {
        let n = self.boundary.len();
        (0..n)
            .map(|i| LineSegment::unchecked(self.boundary[i].clone(), self.boundary[(i + 1) % n].clone()))
            .collect()
    }

    pub(crate) fn encloses(&self, point: &Point<T>, tol: T::Tolerance) -> bool {
        self.triangles.iter().any(|t| t.encloses(point, tol))
    }

    pub(crate) fn intersection_linear(&self, query: &Linear<'_, T>, tol: T::Tolerance) -> Option<Geometry<T>> {
        let hits = self
            .triangles
            .iter()
            .filter_map(|t| t.intersection_linear(query, tol))
            .flat_map(Geometry::into_vertices)
            .collect();
        reduce_collinear(hits, tol)
    }

    /// Both clip directions contribute, so swapping the operands gives the same vertex set.
    pub(crate) fn intersection_area(&self, other: &Self, tol: T::Tolerance) -> Option<Geometry<T>> {
        let mut hits = Vec::new();
        for a in &self.triangles {
            for b in &other.triangles {
                for piece in [a.clip(b, tol), b.clip(a, tol)].into_iter().flatten() {
                    hits.extend(piece.into_vertices());
                }
            }
        }
        reduce_points(hits, tol)
    }
}
