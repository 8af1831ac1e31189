//! Applies an ordered rule list to one object.

use crate::{
    domain::{Outcome, Summary},
    ports::{Rule, Validator},
};
use std::fmt;
use std::iter::FusedIterator;

/// A validator that runs an ordered list of rules against one object.
///
/// Rules run in the order they were added. When a rule reports an
/// error-class outcome and its [`Rule::stops_on_error`] flag is set, the
/// remaining rules are skipped for that object. The outcome of the stopping
/// rule is still part of the result.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::RuleFn;
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome, Severity};
/// use rulebook::ports::Validator;
/// use rulebook::services::RuleBasedValidator;
///
/// let validator = RuleBasedValidator::new()
///     .with_rule(
///         RuleFn::new(|name: &String| {
///             if name.is_empty() {
///                 "a name is required".into_failure(FailureSeverity::Error)
///             } else {
///                 Outcome::success()
///             }
///         })
///         .stopping_on_error(),
///     )
///     .with_rule(RuleFn::new(|name: &String| {
///         if name.len() < 3 {
///             "the name is very short".into_failure(FailureSeverity::Warning)
///         } else {
///             Outcome::success()
///         }
///     }));
///
/// let summary = validator.validate(&String::new());
/// assert_eq!(summary.len(), 1);
/// assert_eq!(summary.severity(), Severity::Error);
/// ```
pub struct RuleBasedValidator<T: ?Sized> {
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T: ?Sized> RuleBasedValidator<T> {
    /// Creates a validator without rules.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a validator from already boxed rules, keeping their order.
    #[must_use]
    pub fn from_rules(rules: impl IntoIterator<Item = Box<dyn Rule<T>>>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Appends a rule to the end of the rule list.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule<T> + 'static) -> Self {
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

    /// Lazily applies the rules to `object`, in order.
    ///
    /// Each rule runs only when the iterator is advanced to it, and the
    /// iterator ends right after a stopping rule reports an error.
    pub fn outcomes<'a>(&'a self, object: &'a T) -> RuleOutcomes<'a, T> {
        RuleOutcomes {
            rules: self.rules.iter(),
            object,
            stopped: false,
        }
    }

    pub(crate) fn rules(&self) -> &[Box<dyn Rule<T>>] {
        &self.rules
    }
}

impl<T: ?Sized> Default for RuleBasedValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for RuleBasedValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBasedValidator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<T: ?Sized> Validator<T> for RuleBasedValidator<T> {
    fn validate(&self, object: &T) -> Summary {
        Summary::new(self.outcomes(object))
    }
}

/// Lazy outcome stream produced by [`RuleBasedValidator::outcomes`].
pub struct RuleOutcomes<'a, T: ?Sized> {
    rules: std::slice::Iter<'a, Box<dyn Rule<T>>>,
    object: &'a T,
    stopped: bool,
}

impl<T: ?Sized> Iterator for RuleOutcomes<'_, T> {
    type Item = Outcome;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        let rule = self.rules.next()?;
        let outcome = rule.validate(self.object);
        if outcome.is_error() && rule.stops_on_error() {
            tracing::debug!(
                severity = %outcome.severity(),
                skipped_rules = self.rules.len(),
                "rule stopped validation of the current object"
            );
            self.stopped = true;
        }
        Some(outcome)
    }
}

impl<T: ?Sized> FusedIterator for RuleOutcomes<'_, T> {}

impl<T: ?Sized> fmt::Debug for RuleOutcomes<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleOutcomes")
            .field("remaining_rules", &self.rules.len())
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}
