//! Validator port: maps an object to a [`Summary`].

use crate::domain::Summary;
use std::sync::Arc;

/// Validates an object and aggregates the result into a [`Summary`].
///
/// Validators hold only the configuration they were built with, so a single
/// instance may be shared and invoked concurrently as long as the rules,
/// selectors and projections it wraps are themselves thread-safe. Every
/// call runs sequentially: there is no fan-out across rules, elements or
/// combined validators.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Validates `object`.
    fn validate(&self, object: &T) -> Summary;
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for &V {
    fn validate(&self, object: &T) -> Summary {
        (**self).validate(object)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    fn validate(&self, object: &T) -> Summary {
        (**self).validate(object)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Arc<V> {
    fn validate(&self, object: &T) -> Summary {
        (**self).validate(object)
    }
}
