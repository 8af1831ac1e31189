//! Closure-backed rules.

use crate::{
    domain::Outcome,
    ports::{AsyncRule, Rule},
};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::fmt;

/// A rule that delegates to a closure.
///
/// The stop flag is supplied separately and defaults to `false`.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::RuleFn;
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome};
/// use rulebook::ports::Rule;
///
/// let present = RuleFn::new(|name: &Option<String>| match name {
///     Some(_) => Outcome::success(),
///     None => "a name is required".into_failure(FailureSeverity::Error),
/// })
/// .stopping_on_error();
///
/// assert!(present.stops_on_error());
/// assert!(present.validate(&None).is_error());
/// ```
pub struct RuleFn<F> {
    function: F,
    stops_on_error: bool,
}

impl<F> RuleFn<F> {
    /// Wraps `function` as a rule that never stops the validator.
    pub const fn new<T: ?Sized>(function: F) -> Self
    where
        F: Fn(&T) -> Outcome,
    {
        Self {
            function,
            stops_on_error: false,
        }
    }

    /// Makes an error-class outcome from this rule stop the owning validator.
    #[must_use]
    pub const fn stopping_on_error(mut self) -> Self {
        self.stops_on_error = true;
        self
    }
}

impl<F> fmt::Debug for RuleFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleFn")
            .field("stops_on_error", &self.stops_on_error)
            .finish_non_exhaustive()
    }
}

impl<T, F> Rule<T> for RuleFn<F>
where
    T: ?Sized,
    F: Fn(&T) -> Outcome + Send + Sync,
{
    fn validate(&self, object: &T) -> Outcome {
        (self.function)(object)
    }

    fn stops_on_error(&self) -> bool {
        self.stops_on_error
    }
}

/// Wraps `function` as a [`RuleFn`].
pub const fn rule_fn<T, F>(function: F) -> RuleFn<F>
where
    T: ?Sized,
    F: Fn(&T) -> Outcome,
{
    RuleFn::new(function)
}

/// An asynchronous rule that delegates to a closure returning a boxed future.
///
/// # Examples
///
/// ```
/// use futures::FutureExt;
/// use rulebook::adapters::AsyncRuleFn;
/// use rulebook::domain::{FailureSeverity, IntoFailure, Outcome};
///
/// let unique = AsyncRuleFn::new(|email: &String| {
///     let taken = email == "taken@example.com";
///     async move {
///         if taken {
///             "e-mail address is already registered".into_failure(FailureSeverity::Error)
///         } else {
///             Outcome::success()
///         }
///     }
///     .boxed()
/// });
/// # let _ = unique;
/// ```
pub struct AsyncRuleFn<F> {
    function: F,
    stops_on_error: bool,
}

impl<F> AsyncRuleFn<F> {
    /// Wraps `function` as an asynchronous rule that never stops the validator.
    pub const fn new<T: ?Sized>(function: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> BoxFuture<'a, Outcome>,
    {
        Self {
            function,
            stops_on_error: false,
        }
    }

    /// Makes an error-class outcome from this rule stop the owning validator.
    #[must_use]
    pub const fn stopping_on_error(mut self) -> Self {
        self.stops_on_error = true;
        self
    }
}

impl<F> fmt::Debug for AsyncRuleFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncRuleFn")
            .field("stops_on_error", &self.stops_on_error)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T, F> AsyncRule<T> for AsyncRuleFn<F>
where
    T: ?Sized + Sync,
    F: for<'a> Fn(&'a T) -> BoxFuture<'a, Outcome> + Send + Sync,
{
    async fn validate(&self, object: &T) -> Outcome {
        (self.function)(object).await
    }

    fn stops_on_error(&self) -> bool {
        self.stops_on_error
    }
}
