//! Asynchronous ordered rule list.

use super::gate::{Gate, Open};
use crate::{
    domain::{Outcome, Summary},
    ports::{AsyncRule, AsyncValidator, CancellableResult},
};
use async_trait::async_trait;
use std::fmt;
use tokio_util::sync::CancellationToken;

/// Asynchronous counterpart of [`crate::services::RuleBasedValidator`].
///
/// Rules are awaited one at a time in order, with the same stop semantics
/// as the synchronous validator.
pub struct AsyncRuleBasedValidator<T: ?Sized + Sync> {
    rules: Vec<Box<dyn AsyncRule<T>>>,
}

impl<T: ?Sized + Sync> AsyncRuleBasedValidator<T> {
    /// Creates a validator without rules.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a validator from already boxed rules, keeping their order.
    #[must_use]
    pub fn from_rules(rules: impl IntoIterator<Item = Box<dyn AsyncRule<T>>>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl AsyncRule<T> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when no rules were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn rules(&self) -> &[Box<dyn AsyncRule<T>>] {
        &self.rules
    }

    /// Applies the rules to `object` and returns outcomes in invocation order.
    pub(crate) async fn outcomes<G: Gate>(
        &self,
        object: &T,
        gate: &G,
    ) -> Result<Vec<Outcome>, G::Error> {
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for (index, rule) in self.rules.iter().enumerate() {
            gate.check()?;
            let outcome = rule.validate(object).await;
            let stop = outcome.is_error() && rule.stops_on_error();
            outcomes.push(outcome);
            if stop {
                tracing::debug!(
                    rule = index,
                    skipped_rules = self.rules.len().saturating_sub(index.saturating_add(1)),
                    "rule stopped validation of the current object"
                );
                break;
            }
        }
        Ok(outcomes)
    }
}

impl<T: ?Sized + Sync> Default for AsyncRuleBasedValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Sync> fmt::Debug for AsyncRuleBasedValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncRuleBasedValidator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[async_trait]
impl<T: ?Sized + Sync> AsyncValidator<T> for AsyncRuleBasedValidator<T> {
    async fn validate(&self, object: &T) -> Summary {
        let Ok(outcomes) = self.outcomes(object, &Open).await;
        Summary::new(outcomes)
    }

    async fn validate_cancellable(
        &self,
        object: &T,
        token: &CancellationToken,
    ) -> CancellableResult<Summary> {
        self.outcomes(object, token).await.map(Summary::new)
    }
}
