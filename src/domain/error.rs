//! Error types for constructing validation domain values.
//!
//! These signal contract violations by the caller. Ordinary validation
//! failures are never errors; they travel as [`super::Outcome`] values.

use thiserror::Error;

/// Errors returned while declaring a custom severity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeverityError {
    /// The severity name is empty after trimming.
    #[error("severity name must not be empty")]
    EmptyName,

    /// Custom severities must rank strictly above `error`.
    #[error("custom severity '{name}' has rank {rank}; it must rank above error (30)")]
    RankNotAboveError {
        /// The rejected severity name.
        name: String,
        /// The rejected rank.
        rank: u16,
    },
}

/// Error returned while parsing a severity name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

/// Errors returned while constructing an outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutcomeError {
    /// A failure was requested with a severity that is not an error.
    #[error("severity '{0}' does not describe a failure; use Outcome::Success instead")]
    SuccessIsNotAFailure(String),
}
