use thiserror::Error;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised when a primitive cannot be built from its defining points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("zero-length direction vector")]
    ZeroVector,

    #[error("coincident points: {0}")]
    CoincidentPoints(&'static str),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("points do not form a rectangle")]
    NotRectangle,

    #[error("expected at least {needed} points, got {got}")]
    TooFewPoints { needed: usize, got: usize },
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
