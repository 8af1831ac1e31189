//! Validation services composed from the ports.
//!
//! Synchronous services live at this level; their asynchronous mirrors are
//! in [`asynchronous`].

pub mod asynchronous;
mod collection;
mod combiner;
mod delegate;
mod error;
mod extensions;
mod rule_based;
mod sub_collection;

pub use asynchronous::{
    AsyncCollectionValidator, AsyncDelegateValidator, AsyncRuleBasedValidator,
    AsyncSubCollectionValidator, AsyncValidatorCombiner,
};
pub use collection::{CollectionOutcomes, CollectionValidator, IterationOrder};
pub use combiner::ValidatorCombiner;
pub use delegate::DelegateValidator;
pub use error::CollectionConfigError;
pub use extensions::{RuleExt, ValidatorExt};
pub use rule_based::{RuleBasedValidator, RuleOutcomes};
pub use sub_collection::{Elements, SubCollectionValidator};
