use num_rational::BigRational;

use crate::geometry::{Area, LineSegment, Part, Point, ShapeRef};
use crate::math::{total_cmp, ExactRoot, Precision, Real};

/// Computes the distance between two shapes.
///
/// The squared form stays inside the substrate; [`Distance::execute`] takes the
/// root at the given tolerance.
pub struct Distance<'a, T: Real> {
    a: ShapeRef<'a, T>,
    b: ShapeRef<'a, T>,
}

impl<'a, T: Real> Distance<'a, T> {
    /// Creates a new `Distance` query.
    #[must_use]
    pub fn new(a: ShapeRef<'a, T>, b: ShapeRef<'a, T>) -> Self {
        Self { a, b }
    }

    /// Squared distance; zero when the shapes touch.
    #[must_use]
    pub fn squared(&self, tol: T::Tolerance) -> T {
        if let (ShapeRef::Point(p), ShapeRef::Point(q)) = (self.a, self.b) {
            return p.distance_squared_to(q);
        }
        Connection::new(self.a, self.b)
            .closest_pair(tol)
            .map_or_else(T::zero, |(a, b)| a.distance_squared_to(&b))
    }

    /// Returns the distance, rounded at `tol` in the exact substrate.
    #[must_use]
    pub fn execute(&self, tol: T::Tolerance) -> T {
        self.squared(tol).sqrt(tol)
    }
}

impl Distance<'_, BigRational> {
    /// The distance as an unrounded square root.
    ///
    /// Only the touching test reads `tol`; the value itself carries no rounding, so
    /// two roots compare exactly.
    #[must_use]
    pub fn root(&self, tol: Precision) -> ExactRoot {
        ExactRoot::new(self.squared(tol))
    }
}

/// Finds the shortest segment joining two shapes that do not touch.
pub struct Connection<'a, T: Real> {
    a: ShapeRef<'a, T>,
    b: ShapeRef<'a, T>,
}

impl<'a, T: Real> Connection<'a, T> {
    /// Creates a new `Connection` query.
    #[must_use]
    pub fn new(a: ShapeRef<'a, T>, b: ShapeRef<'a, T>) -> Self {
        Self { a, b }
    }

    /// Executes the query: a segment from a point of `a` to a point of `b`, or
    /// `None` when the shapes intersect.
    #[must_use]
    pub fn execute(&self, tol: T::Tolerance) -> Option<LineSegment<T>> {
        let (from, to) = self.closest_pair(tol)?;
        LineSegment::new(from, to).ok()
    }

    /// Closest points `(on a, on b)`.
    pub(crate) fn closest_pair(&self, tol: T::Tolerance) -> Option<(Point<T>, Point<T>)> {
        match (self.a.part(), self.b.part()) {
            (Part::Point(p), Part::Point(q)) => (!p.approx_eq(q, tol)).then(|| (p.clone(), q.clone())),
            (Part::Point(p), Part::Linear(l)) => {
                (!l.contains_point(p, tol)).then(|| (p.clone(), l.closest_point(p)))
            }
            (Part::Linear(l), Part::Point(p)) => {
                (!l.contains_point(p, tol)).then(|| (l.closest_point(p), p.clone()))
            }
            (Part::Point(p), Part::Area(x)) => area_to_point(&x, p, tol).map(swap),
            (Part::Area(x), Part::Point(p)) => area_to_point(&x, p, tol),
            (Part::Linear(a), Part::Linear(b)) => a.closest_pair(&b, tol),
            (Part::Linear(l), Part::Area(x)) => {
                if x.intersection_linear(&l, tol).is_some() {
                    return None;
                }
                nearest(x.edges().iter().filter_map(|e| e.linear().closest_pair(&l, tol))).map(swap)
            }
            (Part::Area(x), Part::Linear(l)) => {
                if x.intersection_linear(&l, tol).is_some() {
                    return None;
                }
                nearest(x.edges().iter().filter_map(|e| e.linear().closest_pair(&l, tol)))
            }
            (Part::Area(x), Part::Area(y)) => {
                if x.intersection_area(&y, tol).is_some() {
                    return None;
                }
                let (xs, ys) = (x.edges(), y.edges());
                nearest(
                    xs.iter()
                        .flat_map(|e| ys.iter().map(move |f| (e, f)))
                        .filter_map(|(e, f)| e.linear().closest_pair(&f.linear(), tol)),
                )
            }
        }
    }
}

fn area_to_point<T: Real>(area: &Area<T>, point: &Point<T>, tol: T::Tolerance) -> Option<(Point<T>, Point<T>)> {
    if area.encloses(point, tol) {
        return None;
    }
    nearest(
        area.edges()
            .iter()
            .map(|e| (e.linear().closest_point(point), point.clone())),
    )
}

fn nearest<T: Real>(pairs: impl Iterator<Item = (Point<T>, Point<T>)>) -> Option<(Point<T>, Point<T>)> {
    pairs.min_by(|a, b| total_cmp(&a.0.distance_squared_to(&a.1), &b.0.distance_squared_to(&b.1)))
}

fn swap<T: Real>((a, b): (Point<T>, Point<T>)) -> (Point<T>, Point<T>) {
    (b, a)
}
