mod contains;
mod distance;
mod intersect;

pub use contains::Contains;
pub use distance::{Connection, Distance};
pub use intersect::Intersect;
