//! Runs a rule written for one type against values of another.

use crate::{domain::Outcome, ports::Rule};
use std::fmt;
use std::marker::PhantomData;

/// Applies a `Rule<T>` to a `U` by borrowing a `T` out of it first.
///
/// This is how a rule for a general type is reused where a rule for a more
/// specific type is expected: a rule for an animal becomes a rule for a dog
/// that contains one. The stop flag of the wrapped rule is preserved.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::{ProjectedRule, RuleFn};
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome};
/// use rulebook::ports::Rule;
///
/// struct Account {
///     email: String,
/// }
///
/// let has_at = RuleFn::new(|email: &str| {
///     if email.contains('@') {
///         Outcome::success()
///     } else {
///         "e-mail address is malformed".into_failure(FailureSeverity::Error)
///     }
/// });
/// let account_rule = ProjectedRule::new(has_at, |account: &Account| account.email.as_str());
///
/// let account = Account { email: "nobody".to_owned() };
/// assert!(account_rule.validate(&account).is_error());
/// ```
pub struct ProjectedRule<R, F, T: ?Sized> {
    rule: R,
    projection: F,
    target: PhantomData<fn(&T)>,
}

impl<R, F, T: ?Sized> ProjectedRule<R, F, T> {
    /// Wraps `rule` so it runs against whatever `projection` borrows.
    pub const fn new<U: ?Sized>(rule: R, projection: F) -> Self
    where
        R: Rule<T>,
        F: Fn(&U) -> &T,
    {
        Self {
            rule,
            projection,
            target: PhantomData,
        }
    }
}

impl<R: fmt::Debug, F, T: ?Sized> fmt::Debug for ProjectedRule<R, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectedRule")
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

impl<R, F, T, U> Rule<U> for ProjectedRule<R, F, T>
where
    R: Rule<T>,
    F: Fn(&U) -> &T + Send + Sync,
    T: ?Sized,
    U: ?Sized,
{
    fn validate(&self, object: &U) -> Outcome {
        self.rule.validate((self.projection)(object))
    }

    fn stops_on_error(&self) -> bool {
        self.rule.stops_on_error()
    }
}
