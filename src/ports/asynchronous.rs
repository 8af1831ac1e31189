//! Asynchronous rule and validator ports.
//!
//! These mirror [`super::Rule`] and [`super::Validator`]. Every rule or
//! validator invocation is a suspension point, and invocations are awaited
//! one at a time in their documented order.

use crate::domain::{Outcome, Summary};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Result type for cancellable asynchronous validation.
pub type CancellableResult<T> = Result<T, ValidationCancelled>;

/// Returned when a cancellable validation run observed its token.
///
/// No partial summary is produced: outcomes gathered before cancellation
/// are discarded.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("validation was cancelled before it completed")]
pub struct ValidationCancelled;

/// Asynchronously checks one object and reports exactly one [`Outcome`].
#[async_trait]
pub trait AsyncRule<T: ?Sized + Sync>: Send + Sync {
    /// Checks `object` and returns the outcome.
    async fn validate(&self, object: &T) -> Outcome;

    /// Returns `true` when an error-class outcome from this rule must stop
    /// the owning validator from running any further rules.
    fn stops_on_error(&self) -> bool {
        false
    }
}

/// Asynchronously validates an object into a [`Summary`].
#[async_trait]
pub trait AsyncValidator<T: ?Sized + Sync>: Send + Sync {
    /// Validates `object`.
    async fn validate(&self, object: &T) -> Summary;

    /// Validates `object`, giving up if `token` is cancelled.
    ///
    /// The token is only observed between invocations, never while a rule
    /// is running. The default implementation checks it once, before
    /// delegating to [`AsyncValidator::validate`]; orchestrating validators
    /// override it to check before every rule or nested validator.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationCancelled`] when the token fired before the run
    /// completed.
    async fn validate_cancellable(
        &self,
        object: &T,
        token: &CancellationToken,
    ) -> CancellableResult<Summary> {
        if token.is_cancelled() {
            return Err(ValidationCancelled);
        }
        Ok(self.validate(object).await)
    }
}

#[async_trait]
impl<T: ?Sized + Sync, R: AsyncRule<T> + ?Sized> AsyncRule<T> for Box<R> {
    async fn validate(&self, object: &T) -> Outcome {
        (**self).validate(object).await
    }

    fn stops_on_error(&self) -> bool {
        (**self).stops_on_error()
    }
}

#[async_trait]
impl<T: ?Sized + Sync, R: AsyncRule<T> + ?Sized> AsyncRule<T> for Arc<R> {
    async fn validate(&self, object: &T) -> Outcome {
        (**self).validate(object).await
    }

    fn stops_on_error(&self) -> bool {
        (**self).stops_on_error()
    }
}

#[async_trait]
impl<T: ?Sized + Sync, V: AsyncValidator<T> + ?Sized> AsyncValidator<T> for Box<V> {
    async fn validate(&self, object: &T) -> Summary {
        (**self).validate(object).await
    }

    async fn validate_cancellable(
        &self,
        object: &T,
        token: &CancellationToken,
    ) -> CancellableResult<Summary> {
        (**self).validate_cancellable(object, token).await
    }
}

#[async_trait]
impl<T: ?Sized + Sync, V: AsyncValidator<T> + ?Sized> AsyncValidator<T> for Arc<V> {
    async fn validate(&self, object: &T) -> Summary {
        (**self).validate(object).await
    }

    async fn validate_cancellable(
        &self,
        object: &T,
        token: &CancellationToken,
    ) -> CancellableResult<Summary> {
        (**self).validate_cancellable(object, token).await
    }
}
