//! Reuses a validator of one type on a value reached from another.

use crate::{domain::Summary, ports::Validator};
use std::fmt;
use std::marker::PhantomData;

/// Validates `U` by projecting it onto `T` and running a `T` validator.
///
/// The inner summary is returned unchanged.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::RuleFn;
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome};
/// use rulebook::ports::Validator;
/// use rulebook::services::{DelegateValidator, RuleBasedValidator};
///
/// struct Account {
///     email: String,
/// }
///
/// let email = RuleBasedValidator::new().with_rule(RuleFn::new(|email: &String| {
///     if email.contains('@') {
///         Outcome::success()
///     } else {
///         "not an email address".into_failure(FailureSeverity::Error)
///     }
/// }));
/// let validator = DelegateValidator::new(email, |account: &Account| &account.email);
///
/// let account = Account { email: "nobody".to_owned() };
/// assert!(!validator.validate(&account).is_success());
/// ```
pub struct DelegateValidator<V, F, T: ?Sized> {
    validator: V,
    projection: F,
    target: PhantomData<fn(&T)>,
}

impl<V, F, T: ?Sized> DelegateValidator<V, F, T> {
    /// Wraps `validator` behind `projection`.
    #[must_use]
    pub const fn new<U: ?Sized>(validator: V, projection: F) -> Self
    where
        V: Validator<T>,
        F: Fn(&U) -> &T,
    {
        Self {
            validator,
            projection,
            target: PhantomData,
        }
    }

    /// Returns the wrapped validator.
    #[must_use]
    pub const fn inner(&self) -> &V {
        &self.validator
    }
}

impl<V: fmt::Debug, F, T: ?Sized> fmt::Debug for DelegateValidator<V, F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateValidator")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl<V, F, T, U> Validator<U> for DelegateValidator<V, F, T>
where
    T: ?Sized,
    U: ?Sized,
    V: Validator<T>,
    F: Fn(&U) -> &T + Send + Sync,
{
    fn validate(&self, object: &U) -> Summary {
        self.validator.validate((self.projection)(object))
    }
}
