//! Port definitions for rules, validators and result presentation.
//!
//! Ports are the trait contracts the validation services are written
//! against. Callers implement [`Rule`] (or [`AsyncRule`]) for their own
//! checks; every orchestrating validator implements [`Validator`] (or
//! [`AsyncValidator`]).

pub mod asynchronous;
pub mod presentation;
pub mod rule;
pub mod validator;

pub use asynchronous::{AsyncRule, AsyncValidator, CancellableResult, ValidationCancelled};
pub use presentation::{PresentationPolicy, SummaryPresenter, SummaryPresenterExt};
pub use rule::Rule;
pub use validator::Validator;

#[cfg(test)]
pub use presentation::MockSummaryPresenter;
