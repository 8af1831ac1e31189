//! The result of applying a single rule to a single object.

use super::{FailureSeverity, OutcomeError, Severity};
use serde::Serialize;

/// Result of one rule check.
///
/// An outcome is either the shared success value or a [`Failure`] carrying
/// an error-class severity and a message. Outcomes are immutable once built.
///
/// # Examples
///
/// ```
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome, Severity};
///
/// let outcome = "The two passwords differ.".into_failure(FailureSeverity::Error);
/// assert_eq!(outcome.severity(), Severity::Error);
/// assert_eq!(outcome.message(), Some("The two passwords differ."));
/// assert!(!Outcome::success().is_error());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The object conforms to the rule.
    #[default]
    Success,
    /// The object violates the rule.
    Failure(Failure),
}

impl Outcome {
    /// Returns the success outcome.
    #[must_use]
    pub const fn success() -> Self {
        Self::Success
    }

    /// Creates a failure with one of the predefined failure severities.
    #[must_use]
    pub fn failure(severity: FailureSeverity, message: impl Into<String>) -> Self {
        Self::Failure(Failure {
            severity: severity.into(),
            message: message.into(),
        })
    }

    /// Creates a failure with an arbitrary severity, including custom ones.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::SuccessIsNotAFailure`] when `severity` is not
    /// an error-class severity. The call never silently degrades to
    /// [`Outcome::Success`].
    pub fn failure_with(
        severity: Severity,
        message: impl Into<String>,
    ) -> Result<Self, OutcomeError> {
        if !severity.is_error() {
            return Err(OutcomeError::SuccessIsNotAFailure(
                severity.as_str().to_owned(),
            ));
        }
        Ok(Self::Failure(Failure {
            severity,
            message: message.into(),
        }))
    }

    /// Returns the severity of this outcome.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Success => Severity::Success,
            Self::Failure(failure) => failure.severity,
        }
    }

    /// Returns `true` when the severity is error-class.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.severity().is_error()
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.as_failure().map(Failure::message)
    }

    /// Returns the failure payload, if any.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Success => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// A failed rule check: an error-class severity and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    severity: Severity,
    message: String,
}

impl Failure {
    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message describing the violation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Binds a message to a failure severity.
pub trait IntoFailure {
    /// Converts `self` into a failing [`Outcome`] with the given severity.
    fn into_failure(self, severity: FailureSeverity) -> Outcome;
}

impl<S: Into<String>> IntoFailure for S {
    fn into_failure(self, severity: FailureSeverity) -> Outcome {
        Outcome::failure(severity, self)
    }
}
