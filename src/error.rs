//! Error types for nthroot

use thiserror::Error;

/// Result type alias using the crate's `RootError`
pub type Result<T> = std::result::Result<T, RootError>;

/// Root finding error conditions.
///
/// To help with diagnostics, iteration failures carry the last relevant `x`
/// position.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootError {
    /// Root degree must be a positive integer.
    #[error("invalid degree {degree}: must be at least 1")]
    InvalidDegree { degree: i32 },

    /// Radicand must be finite and non-negative.
    #[error("invalid number {number}: must be finite and non-negative")]
    InvalidNumber { number: f64 },

    /// Convergence tolerance must be positive and finite.
    #[error("invalid tolerance {epsilon}: must be positive and finite")]
    InvalidTolerance { epsilon: f64 },

    /// The next iterate computed from `last_x` was NaN or infinite.
    #[error("iterate went non-finite after x={last_x}")]
    NonFinite { last_x: f64 },

    /// Iteration limit was reached.
    #[error("no convergence after {iterations} iterations, last x={last_x}")]
    NonConvergence { last_x: f64, iterations: usize },
}
