//! Error types for posterior computation.

use thiserror::Error;

/// Errors that can terminate a computation cycle.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Every public API returns `Result<T, ComputeError>`; library code never panics
/// on bad input. An inverted credible interval (`x1 > x2`) is deliberately not
/// represented here: it is a valid state that only suppresses interval output.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    /// A model parameter is outside its domain (e.g. `k > N`, non-integral `N`,
    /// non-positive shape parameter, interval bound outside `[0, 1]`).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The normalization integral is zero, negative, NaN or infinite.
    #[error("degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// The grid size cannot support the grid or the quadrature rule.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A distribution rejected parameters that already passed validation.
    #[error("numerical error: {0}")]
    Numerical(String),

    /// Reading a request or writing a report failed.
    #[error("io error: {0}")]
    Io(String),

    /// Encoding or decoding a request/response failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ComputeError {
    fn from(err: std::io::Error) -> Self {
        ComputeError::Io(err.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ComputeError {
    fn from(err: serde_json::Error) -> Self {
        ComputeError::Serialization(err.to_string())
    }
}

impl ComputeError {
    /// Returns true for errors caused by the caller's inputs rather than by
    /// the engine itself.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ComputeError::InvalidParameter(_) | ComputeError::InvalidGrid(_)
        )
    }
}
