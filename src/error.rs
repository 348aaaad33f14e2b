use thiserror::Error;

/// Top-level error type for the equigate solver.
#[derive(Debug, Error)]
pub enum EquigateError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing or validating geometric inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("polyline needs at least 2 points, got {points}")]
    InvalidPolyline { points: usize },

    #[error("circle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors raised by solver operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no equidistant point: {0}")]
    NoEquidistantPoint(String),

    /// Bisector selection needs exactly two gateway pairs.
    #[error("degenerate gateway configuration: expected 2 gateway pairs, found {pairs}")]
    DegenerateGatewayConfiguration { pairs: usize },
}

/// Convenience type alias for results using [`EquigateError`].
pub type Result<T> = std::result::Result<T, EquigateError>;
