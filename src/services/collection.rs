//! Validates every element of a sequence of objects.

use super::{CollectionConfigError, RuleBasedValidator, RuleOutcomes};
use crate::{
    domain::{Outcome, Summary},
    ports::{Rule, Validator},
};
use std::fmt;
use std::iter::FusedIterator;

/// The nesting of the rule and object loops of a [`CollectionValidator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IterationOrder {
    /// Apply every rule to the first object, then to the next one.
    #[default]
    ObjectsFirst,
    /// Apply the first rule to every object, then the next rule.
    RulesFirst,
}

enum Source<T: ?Sized> {
    Rules(RuleBasedValidator<T>),
    Validator(Box<dyn Validator<T>>),
}

/// Applies a rule set or a validator to each element of a sequence.
///
/// In [`IterationOrder::ObjectsFirst`] mode a stopping rule skips only the
/// remaining rules for the current object. In [`IterationOrder::RulesFirst`]
/// mode a stopping rule that fails is not applied to the remaining objects,
/// while later rules still run over the whole sequence. Rules-first mode
/// buffers references to the objects, so the input sequence is traversed
/// once.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::RuleFn;
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome};
/// use rulebook::services::{CollectionValidator, IterationOrder, RuleBasedValidator};
///
/// let rules = RuleBasedValidator::new().with_rule(RuleFn::new(|age: &u32| {
///     if *age > 30 {
///         "implausible age".into_failure(FailureSeverity::Warning)
///     } else {
///         Outcome::success()
///     }
/// }));
/// let validator = CollectionValidator::from_rules(rules)
///     .with_iteration_order(IterationOrder::RulesFirst)
///     .expect("built from rules");
///
/// let summary = validator.validate_collection(&[3, 41, 12]);
/// assert_eq!(summary.len(), 3);
/// assert_eq!(summary.failures().count(), 1);
/// ```
pub struct CollectionValidator<T: ?Sized> {
    source: Source<T>,
    order: IterationOrder,
}

impl<T: ?Sized> CollectionValidator<T> {
    /// Creates a collection validator that applies `rules` to each object.
    #[must_use]
    pub const fn from_rules(rules: RuleBasedValidator<T>) -> Self {
        Self {
            source: Source::Rules(rules),
            order: IterationOrder::ObjectsFirst,
        }
    }

    /// Creates a collection validator that runs `validator` on each object.
    ///
    /// Such a validator always iterates objects first.
    #[must_use]
    pub fn from_validator(validator: impl Validator<T> + 'static) -> Self {
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
    /// [`CollectionValidator::from_validator`].
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

    /// Lazily produces the outcomes for `objects` in invocation order.
    ///
    /// Outcomes are not sorted; use [`CollectionValidator::validate_collection`]
    /// for a severity-ordered summary.
    pub fn outcomes<'a, I>(&'a self, objects: I) -> CollectionOutcomes<'a, T>
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
    {
        let inner = match (&self.source, self.order) {
            (Source::Rules(rules), IterationOrder::ObjectsFirst) => Inner::ObjectsFirst {
                objects: Box::new(objects.into_iter().fuse()),
                rules,
                current: None,
            },
            (Source::Rules(rules), IterationOrder::RulesFirst) => {
                Inner::RulesFirst(RulesFirst::new(rules.rules(), objects.into_iter().collect()))
            }
            (Source::Validator(validator), _) => Inner::Summaries {
                objects: Box::new(objects.into_iter().fuse()),
                validator: validator.as_ref(),
                current: Vec::new().into_iter(),
            },
        };
        CollectionOutcomes { inner }
    }

    /// Validates `objects` and returns a single severity-ordered summary.
    #[must_use]
    pub fn validate_collection<'a, I>(&'a self, objects: I) -> Summary
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
    {
        let summary = Summary::new(self.outcomes(objects));
        tracing::debug!(
            order = ?self.order,
            outcomes = summary.len(),
            severity = %summary.severity(),
            "validated collection"
        );
        summary
    }
}

impl<T: ?Sized> From<RuleBasedValidator<T>> for CollectionValidator<T> {
    fn from(rules: RuleBasedValidator<T>) -> Self {
        Self::from_rules(rules)
    }
}

impl<T: ?Sized> fmt::Debug for CollectionValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Source::Rules(rules) => format!("{} rules", rules.len()),
            Source::Validator(_) => "validator".to_owned(),
        };
        f.debug_struct("CollectionValidator")
            .field("source", &source)
            .field("order", &self.order)
            .finish()
    }
}

impl<T> Validator<[T]> for CollectionValidator<T> {
    fn validate(&self, objects: &[T]) -> Summary {
        self.validate_collection(objects)
    }
}

impl<T> Validator<Vec<T>> for CollectionValidator<T> {
    fn validate(&self, objects: &Vec<T>) -> Summary {
        self.validate_collection(objects)
    }
}

/// Lazy outcome stream produced by [`CollectionValidator::outcomes`].
pub struct CollectionOutcomes<'a, T: ?Sized + 'a> {
    inner: Inner<'a, T>,
}

enum Inner<'a, T: ?Sized + 'a> {
    ObjectsFirst {
        objects: Box<dyn Iterator<Item = &'a T> + 'a>,
        rules: &'a RuleBasedValidator<T>,
        current: Option<RuleOutcomes<'a, T>>,
    },
    RulesFirst(RulesFirst<'a, T>),
    Summaries {
        objects: Box<dyn Iterator<Item = &'a T> + 'a>,
        validator: &'a dyn Validator<T>,
        current: std::vec::IntoIter<Outcome>,
    },
}

impl<T: ?Sized> Iterator for CollectionOutcomes<'_, T> {
    type Item = Outcome;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::ObjectsFirst {
                objects,
                rules,
                current,
            } => loop {
                if let Some(outcome) = current.as_mut().and_then(Iterator::next) {
                    return Some(outcome);
                }
                let object = objects.next()?;
                *current = Some(rules.outcomes(object));
            },
            Inner::RulesFirst(state) => state.advance(),
            Inner::Summaries {
                objects,
                validator,
                current,
            } => loop {
                if let Some(outcome) = current.next() {
                    return Some(outcome);
                }
                let object = objects.next()?;
                *current = validator.validate(object).into_outcomes().into_iter();
            },
        }
    }
}

impl<T: ?Sized> FusedIterator for CollectionOutcomes<'_, T> {}

impl<T: ?Sized> fmt::Debug for CollectionOutcomes<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match &self.inner {
            Inner::ObjectsFirst { .. } => "objects_first",
            Inner::RulesFirst(_) => "rules_first",
            Inner::Summaries { .. } => "validator",
        };
        f.debug_struct("CollectionOutcomes")
            .field("mode", &mode)
            .finish_non_exhaustive()
    }
}

/// Cursor over the rule × object grid, rule-major.
struct RulesFirst<'a, T: ?Sized + 'a> {
    rules: &'a [Box<dyn Rule<T>>],
    objects: Vec<&'a T>,
    rule_index: usize,
    object_index: usize,
}

impl<'a, T: ?Sized + 'a> RulesFirst<'a, T> {
    const fn new(rules: &'a [Box<dyn Rule<T>>], objects: Vec<&'a T>) -> Self {
        Self {
            rules,
            objects,
            rule_index: 0,
            object_index: 0,
        }
    }

    fn next_rule(&mut self) {
        self.rule_index = self.rule_index.saturating_add(1);
        self.object_index = 0;
    }

    fn advance(&mut self) -> Option<Outcome> {
        loop {
            let rule = self.rules.get(self.rule_index)?;
            let Some(object) = self.objects.get(self.object_index).copied() else {
                self.next_rule();
                continue;
            };
            self.object_index = self.object_index.saturating_add(1);
            let outcome = rule.validate(object);
            if outcome.is_error() && rule.stops_on_error() {
                tracing::debug!(
                    rule = self.rule_index,
                    skipped_objects = self.objects.len().saturating_sub(self.object_index),
                    "rule stopped for the remaining objects"
                );
                self.next_rule();
            }
            return Some(outcome);
        }
    }
}
