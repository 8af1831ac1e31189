//! Asynchronous validation of every element of a sequence.

use super::{
    AsyncRuleBasedValidator,
    gate::{Gate, Open},
};
use crate::{
    domain::{Outcome, Summary},
    ports::{AsyncValidator, CancellableResult},
    services::{CollectionConfigError, IterationOrder},
};
use async_trait::async_trait;
use std::fmt;
use tokio_util::sync::CancellationToken;

enum Source<T: ?Sized + Sync> {
    Rules(AsyncRuleBasedValidator<T>),
    Validator(Box<dyn AsyncValidator<T>>),
}

/// Asynchronous counterpart of [`crate::services::CollectionValidator`].
///
/// Supports both iteration orders with the same stop semantics as the
/// synchronous validator. Every rule or validator invocation is awaited
/// before the next one starts.
pub struct AsyncCollectionValidator<T: ?Sized + Sync> {
    source: Source<T>,
    order: IterationOrder,
}

impl<T: ?Sized + Sync> AsyncCollectionValidator<T> {
    /// Creates a collection validator that applies `rules` to each object.
    #[must_use]
    pub const fn from_rules(rules: AsyncRuleBasedValidator<T>) -> Self {
        Self {
            source: Source::Rules(rules),
            order: IterationOrder::ObjectsFirst,
        }
    }

    /// Creates a collection validator that runs `validator` on each object.
    #[must_use]
    pub fn from_validator(validator: impl AsyncValidator<T> + 'static) -> Self {
        Self {
            source: Source::Validator(Box::new(validator)),
            order: IterationOrder::ObjectsFirst,
        }
    }

    /// Selects the iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionConfigError::RulesFirstRequiresRules`] when
    /// rules-first order is requested on a validator built with
    /// [`AsyncCollectionValidator::from_validator`].
    pub fn with_iteration_order(
        mut self,
        order: IterationOrder,
    ) -> Result<Self, CollectionConfigError> {
        if order == IterationOrder::RulesFirst && matches!(self.source, Source::Validator(_)) {
            return Err(CollectionConfigError::RulesFirstRequiresRules);
        }
        self.order = order;
        Ok(self)
    }

    /// Returns the configured iteration order.
    #[must_use]
    pub const fn iteration_order(&self) -> IterationOrder {
        self.order
    }

    /// Validates `objects` and returns a single severity-ordered summary.
    pub async fn validate_collection<'a, I>(&'a self, objects: I) -> Summary
    where
        I: IntoIterator<Item = &'a T>,
    {
        let Ok(outcomes) = self.outcomes(objects, &Open).await;
        Summary::new(outcomes)
    }

    /// Validates `objects`, giving up if `token` is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ports::ValidationCancelled`] when the token fired
    /// before every invocation completed.
    pub async fn validate_collection_cancellable<'a, I>(
        &'a self,
        objects: I,
        token: &CancellationToken,
    ) -> CancellableResult<Summary>
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.outcomes(objects, token).await.map(Summary::new)
    }

    async fn outcomes<'a, I, G>(&'a self, objects: I, gate: &G) -> Result<Vec<Outcome>, G::Error>
    where
        I: IntoIterator<Item = &'a T>,
        G: Gate,
    {
        let mut outcomes = Vec::new();
        match (&self.source, self.order) {
            (Source::Rules(rules), IterationOrder::ObjectsFirst) => {
                for object in objects {
                    outcomes.extend(rules.outcomes(object, gate).await?);
                }
            }
            (Source::Rules(rules), IterationOrder::RulesFirst) => {
                // Every object is visited once per rule.
                let buffered: Vec<&'a T> = objects.into_iter().collect();
                for (index, rule) in rules.rules().iter().enumerate() {
                    for (position, object) in buffered.iter().enumerate() {
                        gate.check()?;
                        let outcome = rule.validate(*object).await;
                        let stop = outcome.is_error() && rule.stops_on_error();
                        outcomes.push(outcome);
                        if stop {
                            tracing::debug!(
                                rule = index,
                                skipped_objects =
                                    buffered.len().saturating_sub(position.saturating_add(1)),
                                "rule stopped for the remaining objects"
                            );
                            break;
                        }
                    }
                }
            }
            (Source::Validator(validator), _) => {
                for object in objects {
                    gate.check()?;
                    let summary = gate.validate(validator.as_ref(), object).await?;
                    outcomes.extend(summary.into_outcomes());
                }
            }
        }
        Ok(outcomes)
    }
}

impl<T: ?Sized + Sync> From<AsyncRuleBasedValidator<T>> for AsyncCollectionValidator<T> {
    fn from(rules: AsyncRuleBasedValidator<T>) -> Self {
        Self::from_rules(rules)
    }
}

impl<T: ?Sized + Sync> fmt::Debug for AsyncCollectionValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Source::Rules(rules) => format!("{} rules", rules.len()),
            Source::Validator(_) => "validator".to_owned(),
        };
        f.debug_struct("AsyncCollectionValidator")
            .field("source", &source)
            .field("order", &self.order)
            .finish()
    }
}

#[async_trait]
impl<T: Sync> AsyncValidator<[T]> for AsyncCollectionValidator<T> {
    async fn validate(&self, objects: &[T]) -> Summary {
        self.validate_collection(objects).await
    }

    async fn validate_cancellable(
        &self,
        objects: &[T],
        token: &CancellationToken,
    ) -> CancellableResult<Summary> {
        self.validate_collection_cancellable(objects, token).await
    }
}
