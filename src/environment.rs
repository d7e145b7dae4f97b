use num_rational::BigRational;

use crate::math::{Precision, Real, DEFAULT_EPSILON};

/// Default tolerance for one numeric substrate.
///
/// Every geometric call still takes its tolerance explicitly; an `Environment` is
/// where an application keeps the one it threads through.
#[derive(Debug)]
pub struct Environment<T: Real> {
    tolerance: T::Tolerance,
}

impl<T: Real> Clone for Environment<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Real> Copy for Environment<T> {}

impl<T: Real> Environment<T> {
    /// Creates an environment with the given default tolerance.
    #[must_use]
    pub fn new(tolerance: T::Tolerance) -> Self {
        Self { tolerance }
    }

    /// The default tolerance.
    #[must_use]
    pub fn tolerance(&self) -> T::Tolerance {
        self.tolerance
    }

    /// A copy of this environment using `tolerance` instead.
    #[must_use]
    pub fn with_tolerance(self, tolerance: T::Tolerance) -> Self {
        Self { tolerance }
    }
}

impl Default for Environment<f64> {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl Environment<BigRational> {
    /// Exact environment comparing at `10^oom` with the given rounding.
    #[must_use]
    pub fn exact(precision: Precision) -> Self {
        Self::new(precision)
    }
}
