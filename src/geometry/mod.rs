mod aabb;
mod convex_area;
mod line;
mod linear;
mod part;
mod point;
mod ray;
mod rectangle;
mod reduce;
mod segment;
mod triangle;
mod vector;


pub use aabb::Aabb;
pub use convex_area::ConvexArea;
pub use line::{is_collinear, Line};
pub use point::Point;
pub use ray::Ray;
pub use rectangle::Rectangle;
pub use reduce::{dedup_points, reduce_collinear, reduce_points};
pub use segment::LineSegment;
pub use triangle::Triangle;
pub use vector::{Octant, Vector};

pub(crate) use part::{Area, Part};

use crate::error::{OperationError, PlanarError, Result};
use crate::math::Real;
use crate::operations::query::{Connection, Contains, Distance, Intersect};

/// Result of an intersection or a reduction: one of the primitive shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<T: Real> {
    Point(Point<T>),
    Line(Line<T>),
    Segment(LineSegment<T>),
    Ray(Ray<T>),
    Triangle(Triangle<T>),
    Rectangle(Rectangle<T>),
    ConvexArea(ConvexArea<T>),
}

impl<T: Real> Geometry<T> {
    /// Name of the variant, for messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Line(_) => "line",
            Self::Segment(_) => "segment",
            Self::Ray(_) => "ray",
            Self::Triangle(_) => "triangle",
            Self::Rectangle(_) => "rectangle",
            Self::ConvexArea(_) => "convex area",
        }
    }

    /// The defining points. Lines and rays report their anchor only.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point<T>> {
        self.clone().into_vertices()
    }

    pub(crate) fn into_vertices(self) -> Vec<Point<T>> {
        match self {
            Self::Point(p) => vec![p],
            Self::Line(l) => vec![l.p().clone()],
            Self::Segment(s) => vec![s.p().clone(), s.q().clone()],
            Self::Ray(r) => vec![r.origin().clone()],
            Self::Triangle(t) => t.points().into_iter().cloned().collect(),
            Self::Rectangle(r) => r.points().into_iter().cloned().collect(),
            Self::ConvexArea(c) => c.points().to_vec(),
        }
    }

    /// Same kind and same shape under `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: T::Tolerance) -> bool {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => a.approx_eq(b, tol),
            (Self::Line(a), Self::Line(b)) => a.approx_eq(b, tol),
            (Self::Segment(a), Self::Segment(b)) => a.approx_eq(b, tol),
            (Self::Ray(a), Self::Ray(b)) => a.approx_eq(b, tol),
            (Self::Triangle(a), Self::Triangle(b)) => a.approx_eq(b, tol),
            (Self::Rectangle(a), Self::Rectangle(b)) => a.approx_eq(b, tol),
            (Self::ConvexArea(a), Self::ConvexArea(b)) => a.approx_eq(b, tol),
            _ => false,
        }
    }

    /// Canonical form: degenerate triangles collapse and convex areas simplify.
    ///
    /// Reducing an already reduced shape returns an equal shape.
    #[must_use]
    pub fn reduce(&self, tol: T::Tolerance) -> Self {
        match self {
            Self::Triangle(t) => Triangle::geometry(t.p().clone(), t.q().clone(), t.r().clone(), tol),
            Self::ConvexArea(c) => c.simplify(tol),
            other => other.clone(),
        }
    }
}

macro_rules! geometry_variant {
    ($($variant:ident => $ty:ident),* $(,)?) => {
        $(
            impl<T: Real> From<$ty<T>> for Geometry<T> {
                fn from(value: $ty<T>) -> Self {
                    Self::$variant(value)
                }
            }

            impl<T: Real> TryFrom<Geometry<T>> for $ty<T> {
                type Error = PlanarError;

                fn try_from(value: Geometry<T>) -> Result<Self> {
                    match value {
                        Geometry::$variant(inner) => Ok(inner),
                        other => Err(OperationError::InvalidInput(format!(
                            "expected {}, got {}",
                            stringify!($variant),
                            other.kind()
                        ))
                        .into()),
                    }
                }
            }
        )*
    };
}

geometry_variant! {
    Point => Point,
    Line => Line,
    Segment => LineSegment,
    Ray => Ray,
    Triangle => Triangle,
    Rectangle => Rectangle,
    ConvexArea => ConvexArea,
}

/// Borrowed view of any shape, used to dispatch pairwise queries.
#[derive(Debug)]
pub enum ShapeRef<'a, T: Real> {
    Point(&'a Point<T>),
    Line(&'a Line<T>),
    Segment(&'a LineSegment<T>),
    Ray(&'a Ray<T>),
    Triangle(&'a Triangle<T>),
    Rectangle(&'a Rectangle<T>),
    ConvexArea(&'a ConvexArea<T>),
}

impl<T: Real> Clone for ShapeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Real> Copy for ShapeRef<'_, T> {}

impl<'a, T: Real> ShapeRef<'a, T> {
    /// Bounding box; `None` for unbounded lines and rays.
    #[must_use]
    pub fn aabb(self) -> Option<Aabb<T>> {
        match self {
            Self::Point(p) => Some(Aabb::from_corners(p, p)),
            Self::Line(_) | Self::Ray(_) => None,
            Self::Segment(s) => Some(s.aabb()),
            Self::Triangle(t) => Some(t.aabb()),
            Self::Rectangle(r) => Some(r.aabb()),
            Self::ConvexArea(c) => Some(c.aabb()),
        }
    }

    pub(crate) fn part(self) -> Part<'a, T> {
        match self {
            Self::Point(p) => Part::Point(p),
            Self::Line(l) => Part::Linear(l.linear()),
            Self::Segment(s) => Part::Linear(s.linear()),
            Self::Ray(r) => Part::Linear(r.linear()),
            Self::Triangle(t) => Part::Area(Area::new(
                vec![t.clone()],
                t.points().into_iter().cloned().collect(),
            )),
            Self::Rectangle(r) => Part::Area(Area::new(
                r.triangles().to_vec(),
                r.points().into_iter().cloned().collect(),
            )),
            Self::ConvexArea(c) => Part::Area(Area::new(c.triangles(), c.points().to_vec())),
        }
    }
}

/// Pairwise queries shared by every primitive.
///
/// Implementors only expose a [`ShapeRef`]; the queries themselves run in
/// [`crate::operations::query`].
pub trait Shape<T: Real> {
    fn shape(&self) -> ShapeRef<'_, T>;

    /// Bounding box; `None` for unbounded lines and rays.
    fn bounding_box(&self) -> Option<Aabb<T>> {
        self.shape().aabb()
    }

    /// Returns `true` if the two shapes share at least one point under `tol`.
    fn intersects<S: Shape<T> + ?Sized>(&self, other: &S, tol: T::Tolerance) -> bool {
        Intersect::new(self.shape(), other.shape()).test(tol)
    }

    /// The shared part of the two shapes, reduced to its simplest form.
    fn intersection<S: Shape<T> + ?Sized>(&self, other: &S, tol: T::Tolerance) -> Option<Geometry<T>> {
        Intersect::new(self.shape(), other.shape()).execute(tol)
    }

    fn distance_squared<S: Shape<T> + ?Sized>(&self, other: &S, tol: T::Tolerance) -> T {
        Distance::new(self.shape(), other.shape()).squared(tol)
    }

    fn distance<S: Shape<T> + ?Sized>(&self, other: &S, tol: T::Tolerance) -> T {
        Distance::new(self.shape(), other.shape()).execute(tol)
    }

    /// Returns `true` if every point of `other` belongs to this shape.
    fn contains<S: Shape<T> + ?Sized>(&self, other: &S, tol: T::Tolerance) -> bool {
        Contains::new(self.shape(), other.shape()).execute(tol)
    }

    /// Shortest segment from this shape to `other`, `None` when they touch.
    fn connection<S: Shape<T> + ?Sized>(&self, other: &S, tol: T::Tolerance) -> Option<LineSegment<T>> {
        Connection::new(self.shape(), other.shape()).execute(tol)
    }
}

macro_rules! shape_ref {
    ($($variant:ident => $ty:ident),* $(,)?) => {
        $(
            impl<T: Real> Shape<T> for $ty<T> {
                fn shape(&self) -> ShapeRef<'_, T> {
                    ShapeRef::$variant(self)
                }
            }
        )*
    };
}

shape_ref! {
    Point => Point,
    Line => Line,
    Segment => LineSegment,
    Ray => Ray,
    Triangle => Triangle,
    Rectangle => Rectangle,
    ConvexArea => ConvexArea,
}

impl<T: Real> Shape<T> for Geometry<T> {
    fn shape(&self) -> ShapeRef<'_, T> {
        match self {
            Self::Point(p) => ShapeRef::Point(p),
            Self::Line(l) => ShapeRef::Line(l),
            Self::Segment(s) => ShapeRef::Segment(s),
            Self::Ray(r) => ShapeRef::Ray(r),
            Self::Triangle(t) => ShapeRef::Triangle(t),
            Self::Rectangle(r) => ShapeRef::Rectangle(r),
            Self::ConvexArea(c) => ShapeRef::ConvexArea(c),
        }
    }
}
