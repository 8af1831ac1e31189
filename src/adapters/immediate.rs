//! Lifts synchronous rules and validators into the asynchronous ports.

use crate::{
    domain::{Outcome, Summary},
    ports::{AsyncRule, AsyncValidator, Rule, Validator},
};
use async_trait::async_trait;

/// Runs a synchronous [`Rule`] or [`Validator`] behind the asynchronous ports.
///
/// The wrapped value completes without suspending, which lets synchronous
/// checks take part in an asynchronous pipeline alongside genuinely
/// asynchronous ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate<I>(pub I);

impl<I> Immediate<I> {
    /// Returns the wrapped rule or validator.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.0
    }
}

#[async_trait]
impl<T, R> AsyncRule<T> for Immediate<R>
where
    T: ?Sized + Sync,
    R: Rule<T>,
{
    async fn validate(&self, object: &T) -> Outcome {
        self.0.validate(object)
    }

    fn stops_on_error(&self) -> bool {
        self.0.stops_on_error()
    }
}

#[async_trait]
impl<T, V> AsyncValidator<T> for Immediate<V>
where
    T: ?Sized + Sync,
    V: Validator<T>,
{
    async fn validate(&self, object: &T) -> Summary {
        self.0.validate(object)
    }
}
