pub mod environment;
pub mod error;
pub mod geometry;
pub mod interop;
pub mod math;
pub mod operations;

pub use environment::Environment;
pub use error::{PlanarError, Result};

/// Traits needed to call queries and transforms on any primitive.
pub mod prelude {
    pub use crate::geometry::Shape;
    pub use crate::math::Real;
    pub use crate::operations::transform::Transform;
}

/// Primitives over the epsilon-tolerant `f64` substrate.
pub mod fast {
    /// Scalar of the fast substrate.
    pub type Scalar = f64;

    pub type Point = crate::geometry::Point<f64>;
    pub type Vector = crate::geometry::Vector<f64>;
    pub type Line = crate::geometry::Line<f64>;
    pub type LineSegment = crate::geometry::LineSegment<f64>;
    pub type Ray = crate::geometry::Ray<f64>;
    pub type Triangle = crate::geometry::Triangle<f64>;
    pub type Rectangle = crate::geometry::Rectangle<f64>;
    pub type ConvexArea = crate::geometry::ConvexArea<f64>;
    pub type Aabb = crate::geometry::Aabb<f64>;
    pub type Geometry = crate::geometry::Geometry<f64>;
}

/// Primitives over the exact `BigRational` substrate.
pub mod exact {
    /// Scalar of the exact substrate.
    pub type Scalar = num_rational::BigRational;

    pub type Point = crate::geometry::Point<Scalar>;
    pub type Vector = crate::geometry::Vector<Scalar>;
    pub type Line = crate::geometry::Line<Scalar>;
    pub type LineSegment = crate::geometry::LineSegment<Scalar>;
    pub type Ray = crate::geometry::Ray<Scalar>;
    pub type Triangle = crate::geometry::Triangle<Scalar>;
    pub type Rectangle = crate::geometry::Rectangle<Scalar>;
    pub type ConvexArea = crate::geometry::ConvexArea<Scalar>;
    pub type Aabb = crate::geometry::Aabb<Scalar>;
    pub type Geometry = crate::geometry::Geometry<Scalar>;

    pub use crate::math::{Precision, RoundingMode};
}
