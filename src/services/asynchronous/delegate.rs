//! Asynchronous projection onto another validator.

use crate::{
    domain::Summary,
    ports::{AsyncValidator, CancellableResult},
};
use async_trait::async_trait;
use std::fmt;
use std::marker::PhantomData;
use tokio_util::sync::CancellationToken;

/// Asynchronous counterpart of [`crate::services::DelegateValidator`].
///
/// Cancellation is forwarded to the wrapped validator.
pub struct AsyncDelegateValidator<V, F, T: ?Sized> {
    validator: V,
    projection: F,
    target: PhantomData<fn(&T)>,
}

impl<V, F, T: ?Sized + Sync> AsyncDelegateValidator<V, F, T> {
    /// Wraps `validator` behind `projection`.
    #[must_use]
    pub const fn new<U: ?Sized>(validator: V, projection: F) -> Self
    where
        V: AsyncValidator<T>,
        F: Fn(&U) -> &T,
    {
        Self {
            validator,
            projection,
            target: PhantomData,
        }
    }
}

impl<V: fmt::Debug, F, T: ?Sized> fmt::Debug for AsyncDelegateValidator<V, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncDelegateValidator")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<V, F, T, U> AsyncValidator<U> for AsyncDelegateValidator<V, F, T>
where
    T: ?Sized + Sync,
    U: ?Sized + Sync,
    V: AsyncValidator<T>,
    F: Fn(&U) -> &T + Send + Sync,
{
    async fn validate(&self, object: &U) -> Summary {
        self.validator.validate((self.projection)(object)).await
    }

    async fn validate_cancellable(
        &self,
        object: &U,
        token: &CancellationToken,
    ) -> CancellableResult<Summary> {
        self.validator
            .validate_cancellable((self.projection)(object), token)
            .await
    }
}
