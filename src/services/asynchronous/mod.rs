//! Asynchronous validation services.
//!
//! Each type mirrors a synchronous service and awaits its rules or nested
//! validators strictly one after another. The cancellable entry points
//! check the [`tokio_util::sync::CancellationToken`] before every
//! invocation.

mod collection;
mod combiner;
mod delegate;
mod gate;
mod rule_based;
mod sub_collection;

pub use collection::AsyncCollectionValidator;
pub use combiner::AsyncValidatorCombiner;
pub use delegate::AsyncDelegateValidator;
pub use rule_based::AsyncRuleBasedValidator;
pub use sub_collection::AsyncSubCollectionValidator;
