//! Asynchronous validation of a collection reached from a parent object.

use super::{
    AsyncRuleBasedValidator, AsyncValidatorCombiner,
    gate::{Gate, Open},
};
use crate::{
    domain::Summary,
    ports::{AsyncRule, AsyncValidator, CancellableResult},
    services::Elements,
};
use async_trait::async_trait;
use std::fmt;
use tokio_util::sync::CancellationToken;

type Selector<T, U> = Box<dyn for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync>;

/// Asynchronous counterpart of [`crate::services::SubCollectionValidator`].
///
/// Elements are validated one at a time in selector order.
pub struct AsyncSubCollectionValidator<T: ?Sized, U: Sync> {
    selector: Selector<T, U>,
    validator: Box<dyn AsyncValidator<U>>,
}

impl<T: ?Sized, U: Sync> AsyncSubCollectionValidator<T, U> {
    /// Creates a validator applying `validator` to every selected element.
    #[must_use]
    pub fn new<S, V>(selector: S, validator: V) -> Self
    where
        S: for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync + 'static,
        V: AsyncValidator<U> + 'static,
    {
        Self {
            selector: Box::new(selector),
            validator: Box::new(validator),
        }
    }

    /// Creates a validator over a slice borrowed from the parent object.
    #[must_use]
    pub fn over_slice<S, V>(selector: S, validator: V) -> Self
    where
        S: Fn(&T) -> &[U] + Send + Sync + 'static,
        V: AsyncValidator<U> + 'static,
    {
        Self::new(move |parent: &T| Box::new(selector(parent).iter()), validator)
    }

    /// Creates a validator applying an ordered rule list to every element.
    #[must_use]
    pub fn from_rules<S>(
        selector: S,
        rules: impl IntoIterator<Item = Box<dyn AsyncRule<U>>>,
    ) -> Self
    where
        S: for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync + 'static,
        U: 'static,
    {
        Self::new(selector, AsyncRuleBasedValidator::from_rules(rules))
    }

    /// Creates a validator running several validators, in order, on every
    /// element.
    #[must_use]
    pub fn from_validators<S>(
        selector: S,
        validators: impl IntoIterator<Item = Box<dyn AsyncValidator<U>>>,
    ) -> Self
    where
        S: for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync + 'static,
        U: 'static,
    {
        Self::new(selector, AsyncValidatorCombiner::from_validators(validators))
    }

    async fn run<G: Gate>(&self, object: &T, gate: &G) -> Result<Summary, G::Error> {
        let mut summaries = Vec::new();
        for element in (self.selector)(object) {
            gate.check()?;
            summaries.push(gate.validate(self.validator.as_ref(), element).await?);
        }
        Ok(Summary::merge(summaries))
    }
}

impl<T: ?Sized, U: Sync> fmt::Debug for AsyncSubCollectionValidator<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncSubCollectionValidator")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: ?Sized + Sync, U: Sync> AsyncValidator<T> for AsyncSubCollectionValidator<T, U> {
    async fn validate(&self, object: &T) -> Summary {
        let Ok(summary) = self.run(object, &Open).await;
        summary
    }

    async fn validate_cancellable(
        &self,
        object: &T,
        token: &CancellationToken,
    ) -> CancellableResult<Summary> {
        self.run(object, token).await
    }
}
