//! Runs several validators against the same object.

use super::RuleBasedValidator;
use crate::{
    domain::Summary,
    ports::{Rule, Validator},
};
use std::fmt;

/// Runs validators in registration order and merges their summaries.
///
/// Every validator runs; stopping rules inside one validator never prevent
/// the next validator from running.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::RuleFn;
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome, Severity};
/// use rulebook::ports::Validator;
/// use rulebook::services::ValidatorCombiner;
///
/// let combiner = ValidatorCombiner::new()
///     .with_rule(RuleFn::new(|text: &str| {
///         if text.is_empty() {
///             "text is empty".into_failure(FailureSeverity::Error)
///         } else {
///             Outcome::success()
///         }
///     }))
///     .with_rule(RuleFn::new(|text: &str| {
///         if text.len() > 8 {
///             "text is long".into_failure(FailureSeverity::Information)
///         } else {
///             Outcome::success()
///         }
///     }));
///
/// assert_eq!(combiner.validate("a rather long text").severity(), Severity::Information);
/// ```
pub struct ValidatorCombiner<T: ?Sized> {
    validators: Vec<Box<dyn Validator<T>>>,
}

impl<T: ?Sized> ValidatorCombiner<T> {
    /// Creates a combiner without validators.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Creates a combiner from already boxed validators, keeping their order.
    #[must_use]
    pub fn from_validators(validators: impl IntoIterator<Item = Box<dyn Validator<T>>>) -> Self {
        Self {
            validators: validators.into_iter().collect(),
        }
    }

    /// Appends a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Appends a single rule wrapped in its own [`RuleBasedValidator`].
    #[must_use]
    pub fn with_rule(self, rule: impl Rule<T> + 'static) -> Self
    where
        T: 'static,
    {
        self.with_validator(RuleBasedValidator::new().with_rule(rule))
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
}

impl<T: ?Sized> Default for ValidatorCombiner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ValidatorCombiner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorCombiner")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<T: ?Sized> Validator<T> for ValidatorCombiner<T> {
    fn validate(&self, object: &T) -> Summary {
        let summary = Summary::merge(
            self.validators
                .iter()
                .map(|validator| validator.validate(object)),
        );
        tracing::trace!(
            validators = self.validators.len(),
            severity = %summary.severity(),
            "combined validator summaries"
        );
        summary
    }
}
