pub mod distance_2d;
mod exact;
pub mod intersect_2d;
pub mod polygon_2d;
mod real;
mod root;
pub mod series;

pub use exact::{pow10, round_at, Precision, RoundingMode, GUARD_DIGITS};
pub(crate) use real::total_cmp;
pub use real::{max_of, min_of, Real};
pub use root::ExactRoot;

/// Default epsilon of the fast substrate.
pub const DEFAULT_EPSILON: f64 = 1e-10;
