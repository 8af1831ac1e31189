//! Checkpoints consulted between asynchronous invocations.

use crate::{
    domain::Summary,
    ports::{AsyncValidator, CancellableResult, ValidationCancelled},
};
use futures::{FutureExt, future::BoxFuture};
use std::convert::Infallible;
use tokio_util::sync::CancellationToken;

/// Decides whether an orchestrator may start its next invocation.
pub(crate) trait Gate: Sync {
    /// Raised when the run must stop.
    type Error: Send;

    /// Fails once the run has been cancelled.
    fn check(&self) -> Result<(), Self::Error>;

    /// Runs a nested validator under this gate.
    fn validate<'a, T, V>(
        &'a self,
        validator: &'a V,
        object: &'a T,
    ) -> BoxFuture<'a, Result<Summary, Self::Error>>
    where
        T: ?Sized + Sync,
        V: AsyncValidator<T> + ?Sized;
}

/// A gate that never closes.
pub(crate) struct Open;

impl Gate for Open {
    type Error = Infallible;

    fn check(&self) -> Result<(), Infallible> {
        Ok(())
    }

    fn validate<'a, T, V>(
        &'a self,
        validator: &'a V,
        object: &'a T,
    ) -> BoxFuture<'a, Result<Summary, Infallible>>
    where
        T: ?Sized + Sync,
        V: AsyncValidator<T> + ?Sized,
    {
        validator.validate(object).map(Ok).boxed()
    }
}

impl Gate for CancellationToken {
    type Error = ValidationCancelled;

    fn check(&self) -> CancellableResult<()> {
        if self.is_cancelled() {
            tracing::debug!("validation cancelled between invocations");
            return Err(ValidationCancelled);
        }
        Ok(())
    }

    fn validate<'a, T, V>(
        &'a self,
        validator: &'a V,
        object: &'a T,
    ) -> BoxFuture<'a, CancellableResult<Summary>>
    where
        T: ?Sized + Sync,
        V: AsyncValidator<T> + ?Sized,
    {
        validator.validate_cancellable(object, self)
    }
}
