mod rotate;
mod translate;

pub use rotate::Rotate;
pub use translate::Translate;

use crate::geometry::{ConvexArea, Geometry, Line, LineSegment, Point, Ray, Rectangle, Triangle, Vector};
use crate::math::Real;

/// Rigid motions shared by every primitive.
pub trait Transform<T: Real> {
    /// Moves the shape by `v`.
    fn translate(&mut self, v: &Vector<T>);

    /// Rotates counter-clockwise about `pivot` with a precomputed sine and cosine.
    fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T);

    /// Rotates counter-clockwise about `pivot` by `angle` radians.
    fn rotate(&mut self, pivot: &Point<T>, angle: &T, tol: T::Tolerance) {
        let (sin, cos) = angle.sin_cos(tol);
        self.rotate_by(pivot, &sin, &cos);
    }
}

macro_rules! transform_inherent {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: Real> Transform<T> for $ty<T> {
                fn translate(&mut self, v: &Vector<T>) {
                    $ty::translate(self, v);
                }

                fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
                    $ty::rotate_by(self, pivot, sin, cos);
                }
            }
        )*
    };
}

transform_inherent!(Point, Line, LineSegment, Ray, Triangle, Rectangle, ConvexArea);

impl<T: Real> Transform<T> for Geometry<T> {
    fn translate(&mut self, v: &Vector<T>) {
        match self {
            Self::Point(p) => p.translate(v),
            Self::Line(l) => l.translate(v),
            Self::Segment(s) => s.translate(v),
            Self::Ray(r) => r.translate(v),
            Self::Triangle(t) => t.translate(v),
            Self::Rectangle(r) => r.translate(v),
            Self::ConvexArea(c) => c.translate(v),
        }
    }

    fn rotate_by(&mut self, pivot: &Point<T>, sin: &T, cos: &T) {
        match self {
            Self::Point(p) => p.rotate_by(pivot, sin, cos),
            Self::Line(l) => l.rotate_by(pivot, sin, cos),
            Self::Segment(s) => s.rotate_by(pivot, sin, cos),
            Self::Ray(r) => r.rotate_by(pivot, sin, cos),
            Self::Triangle(t) => t.rotate_by(pivot, sin, cos),
            Self::Rectangle(r) => r.rotate_by(pivot, sin, cos),
            Self::ConvexArea(c) => c.rotate_by(pivot, sin, cos),
        }
    }
}
