//! Rule port: the atomic unit of validation logic.

use crate::domain::Outcome;
use std::sync::Arc;

/// Checks one object and reports exactly one [`Outcome`].
///
/// A rule must return an outcome for every expected validation failure. It
/// may have side effects through collaborators it captured, but it should
/// not panic to signal an invalid object: a panic is treated as a fault in
/// the rule and unwinds through the owning validator untouched.
///
/// # Implementation Notes
///
/// Implementations should be free of shared mutable state so that one
/// validator instance can be used from several threads at once.
///
/// # Examples
///
/// ```
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome};
/// use rulebook::ports::Rule;
///
/// struct NotBlank;
///
/// impl Rule<str> for NotBlank {
///     fn validate(&self, object: &str) -> Outcome {
///         if object.trim().is_empty() {
///             return "value must not be blank".into_failure(FailureSeverity::Error);
///         }
///         Outcome::success()
///     }
///
///     fn stops_on_error(&self) -> bool {
///         true
///     }
/// }
///
/// assert!(NotBlank.validate("  ").is_error());
/// ```
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Checks `object` and returns the outcome.
    fn validate(&self, object: &T) -> Outcome;

    /// Returns `true` when an error-class outcome from this rule must stop
    /// the owning validator from running any further rules.
    ///
    /// Typical use: a presence check that every later rule depends on.
    fn stops_on_error(&self) -> bool {
        false
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for &R {
    fn validate(&self, object: &T) -> Outcome {
        (**self).validate(object)
    }

    fn stops_on_error(&self) -> bool {
        (**self).stops_on_error()
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Box<R> {
    fn validate(&self, object: &T) -> Outcome {
        (**self).validate(object)
    }

    fn stops_on_error(&self) -> bool {
        (**self).stops_on_error()
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Arc<R> {
    fn validate(&self, object: &T) -> Outcome {
        (**self).validate(object)
    }

    fn stops_on_error(&self) -> bool {
        (**self).stops_on_error()
    }
}
