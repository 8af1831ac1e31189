//! Fluent conversions between rules and validators.

use super::{DelegateValidator, RuleBasedValidator};
use crate::{
    adapters::ProjectedRule,
    ports::{Rule, Validator},
};

/// Conversions available on every [`Rule`].
pub trait RuleExt<T: ?Sized>: Rule<T> + Sized {
    /// Wraps this rule in a single-rule [`RuleBasedValidator`].
    fn into_validator(self) -> RuleBasedValidator<T>
    where
        Self: 'static,
    {
        RuleBasedValidator::new().with_rule(self)
    }

    /// Reuses this rule on a `U` that contains a `T`.
    fn project<U, F>(self, projection: F) -> ProjectedRule<Self, F, T>
    where
        U: ?Sized,
        F: Fn(&U) -> &T,
    {
        ProjectedRule::new(self, projection)
    }
}

impl<T: ?Sized, R: Rule<T>> RuleExt<T> for R {}

/// Conversions available on every [`Validator`].
pub trait ValidatorExt<T: ?Sized>: Validator<T> + Sized {
    /// Reuses this validator on a `U` that contains a `T`.
    fn delegate<U, F>(self, projection: F) -> DelegateValidator<Self, F, T>
    where
        U: ?Sized,
        F: Fn(&U) -> &T,
    {
        DelegateValidator::new(self, projection)
    }
}

impl<T: ?Sized, V: Validator<T>> ValidatorExt<T> for V {}
