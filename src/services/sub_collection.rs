//! Validates a collection reached from a parent object.

use super::{RuleBasedValidator, ValidatorCombiner};
use crate::{
    domain::Summary,
    ports::{Rule, Validator},
};
use std::fmt;

/// The elements a selector picks out of a parent object.
pub type Elements<'a, U> = Box<dyn Iterator<Item = &'a U> + Send + 'a>;

type Selector<T, U> = Box<dyn for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync>;

/// Validates each element of a collection selected from a parent object.
///
/// The selector may return any iterator over borrowed elements, such as a
/// filtered view; [`SubCollectionValidator::over_slice`] covers the common
/// case of a slice field. The element summaries are merged into one summary
/// for the parent.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::RuleFn;
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome};
/// use rulebook::ports::Validator;
/// use rulebook::services::{RuleBasedValidator, SubCollectionValidator};
///
/// struct Order {
///     quantities: Vec<u32>,
/// }
///
/// let validator = SubCollectionValidator::over_slice(
///     |order: &Order| order.quantities.as_slice(),
///     RuleBasedValidator::new().with_rule(RuleFn::new(|quantity: &u32| {
///         if *quantity == 0 {
///             "empty order line".into_failure(FailureSeverity::Error)
///         } else {
///             Outcome::success()
///         }
///     })),
/// );
///
/// let summary = validator.validate(&Order { quantities: vec![2, 0, 5] });
/// assert_eq!(summary.failures().count(), 1);
/// ```
pub struct SubCollectionValidator<T: ?Sized, U> {
    selector: Selector<T, U>,
    validator: Box<dyn Validator<U>>,
}

impl<T: ?Sized, U> SubCollectionValidator<T, U> {
    /// Creates a validator applying `validator` to every selected element.
    #[must_use]
    pub fn new<S, V>(selector: S, validator: V) -> Self
    where
        S: for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync + 'static,
        V: Validator<U> + 'static,
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
        V: Validator<U> + 'static,
        U: Sync,
    {
        Self::new(move |parent: &T| Box::new(selector(parent).iter()), validator)
    }

    /// Creates a validator applying an ordered rule list to every element.
    #[must_use]
    pub fn from_rules<S>(selector: S, rules: impl IntoIterator<Item = Box<dyn Rule<U>>>) -> Self
    where
        S: for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync + 'static,
        U: 'static,
    {
        Self::new(selector, RuleBasedValidator::from_rules(rules))
    }

    /// Creates a validator running several validators, in order, on every
    /// element.
    #[must_use]
    pub fn from_validators<S>(
        selector: S,
        validators: impl IntoIterator<Item = Box<dyn Validator<U>>>,
    ) -> Self
    where
        S: for<'a> Fn(&'a T) -> Elements<'a, U> + Send + Sync + 'static,
        U: 'static,
    {
        Self::new(selector, ValidatorCombiner::from_validators(validators))
    }
}

impl<T: ?Sized, U> fmt::Debug for SubCollectionValidator<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubCollectionValidator").finish_non_exhaustive()
    }
}

impl<T: ?Sized, U> Validator<T> for SubCollectionValidator<T, U> {
    fn validate(&self, object: &T) -> Summary {
        let summaries: Vec<Summary> = (self.selector)(object)
            .map(|element| self.validator.validate(element))
            .collect();
        tracing::trace!(elements = summaries.len(), "validated sub-collection");
        Summary::merge(summaries)
    }
}
