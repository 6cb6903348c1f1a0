//! Error types surfaced by the wind load engine.

use thiserror::Error;

/// Top-level error returned by engine operations.
///
/// Every failure is detected before any segment is computed, so an error never comes with
/// partial results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WindLoadError {
    /// Returned when the calculation parameters violate a precondition.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Reason a set of calculation parameters was rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    /// Tower height is zero or negative.
    #[error("tower height must be positive (received {0} m)")]
    NonPositiveHeight(f64),
    /// The tower must be cut into at least one segment.
    #[error("segment count must be at least 1")]
    NoSegments,
    /// More segments than one calculation will allocate.
    #[error("segment count {0} exceeds the limit of {max}", max = crate::params::MAX_SEGMENTS)]
    TooManySegments(usize),
    /// Terrain code outside the A-D table.
    #[error("unknown terrain class '{0}' (expected one of A, B, C, D)")]
    UnknownTerrain(String),
    /// Altitude where the barometric approximation has no real value.
    #[error("altitude {0} m must be below 44300 m")]
    AltitudeOutOfRange(f64),
    /// A numeric parameter is NaN or infinite.
    #[error("parameter '{0}' must be a finite number")]
    NonFinite(&'static str),
}
