use crate::geometry::Vector;
use crate::math::Real;

use super::Transform;

/// Translates shapes by a displacement vector.
pub struct Translate<T: Real> {
    displacement: Vector<T>,
}

impl<T: Real> Translate<T> {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector<T>) -> Self {
        Self { displacement }
    }

    /// The translation undoing this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.displacement.reverse())
    }

    /// Executes the translation, modifying the shape in place.
    pub fn execute<S: Transform<T> + ?Sized>(&self, shape: &mut S) {
        shape.translate(&self.displacement);
    }
}
