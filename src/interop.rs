//! Conversions between planar primitives and `nalgebra` types.

use crate::geometry::{Point, Vector};
use crate::math::Real;

impl<T: Real> From<nalgebra::Point2<T>> for Point<T> {
    fn from(p: nalgebra::Point2<T>) -> Self {
        Self::new(p.x.clone(), p.y.clone())
    }
}

impl<T: Real> From<&Point<T>> for nalgebra::Point2<T> {
    fn from(p: &Point<T>) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl<T: Real> From<Point<T>> for nalgebra::Point2<T> {
    fn from(p: Point<T>) -> Self {
        Self::from(&p)
    }
}

impl<T: Real> From<nalgebra::Vector2<T>> for Vector<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self::new(v.x.clone(), v.y.clone())
    }
}

impl<T: Real> From<Vector<T>> for nalgebra::Vector2<T> {
    fn from(v: Vector<T>) -> Self {
        Self::new(v.dx, v.dy)
    }
}
