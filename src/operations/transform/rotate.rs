use crate::geometry::Point;
use crate::math::Real;

use super::Transform;

/// Rotates shapes counter-clockwise about a pivot.
///
/// The sine and cosine are evaluated once at construction, so one `Rotate` can be
/// applied to many shapes at the cost of a few multiplications each.
pub struct Rotate<T: Real> {
    pivot: Point<T>,
    sin: T,
    cos: T,
}

impl<T: Real> Rotate<T> {
    /// Creates a new `Rotate` operation for `angle` radians.
    #[must_use]
    pub fn new(pivot: Point<T>, angle: &T, tol: T::Tolerance) -> Self {
        let (sin, cos) = angle.sin_cos(tol);
        Self { pivot, sin, cos }
    }

    /// The rotation undoing this one, about the same pivot.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            pivot: self.pivot.clone(),
            sin: -self.sin.clone(),
            cos: self.cos.clone(),
        }
    }

    /// Executes the rotation, modifying the shape in place.
    pub fn execute<S: Transform<T> + ?Sized>(&self, shape: &mut S) {
        shape.rotate_by(&self.pivot, &self.sin, &self.cos);
    }
}
