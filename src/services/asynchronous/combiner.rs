//! Asynchronous validator combination.

use super::{
    AsyncRuleBasedValidator,
    gate::{Gate, Open},
};
use crate::{
    domain::Summary,
    ports::{AsyncRule, AsyncValidator, CancellableResult},
};
use async_trait::async_trait;
use std::fmt;
use tokio_util::sync::CancellationToken;

/// Asynchronous counterpart of [`crate::services::ValidatorCombiner`].
pub struct AsyncValidatorCombiner<T: ?Sized + Sync> {
    validators: Vec<Box<dyn AsyncValidator<T>>>,
}

impl<T: ?Sized + Sync> AsyncValidatorCombiner<T> {
    /// Creates a combiner without validators.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Creates a combiner from already boxed validators, keeping their order.
    #[must_use]
    pub fn from_validators(
        validators: impl IntoIterator<Item = Box<dyn AsyncValidator<T>>>,
    ) -> Self {
        Self {
            validators: validators.into_iter().collect(),
        }
    }

    /// Appends a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: impl AsyncValidator<T> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Appends a single rule wrapped in its own [`AsyncRuleBasedValidator`].
    #[must_use]
    pub fn with_rule(self, rule: impl AsyncRule<T> + 'static) -> Self
    where
        T: 'static,
    {
        self.with_validator(AsyncRuleBasedValidator::new().with_rule(rule))
    }

    /// Returns the number of validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` when no validator was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    async fn run<G: Gate>(&self, object: &T, gate: &G) -> Result<Summary, G::Error> {
        let mut summaries = Vec::with_capacity(self.validators.len());
        for validator in &self.validators {
            gate.check()?;
            summaries.push(gate.validate(validator.as_ref(), object).await?);
        }
        Ok(Summary::merge(summaries))
    }
}

impl<T: ?Sized + Sync> Default for AsyncValidatorCombiner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Sync> fmt::Debug for AsyncValidatorCombiner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncValidatorCombiner")
            .field("validators", &self.validators.len())
            .finish()
    }
}

#[async_trait]
impl<T: ?Sized + Sync> AsyncValidator<T> for AsyncValidatorCombiner<T> {
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
