//! Adapters that turn caller code into rules, validators and presenters.
//!
//! - [`RuleFn`] and [`AsyncRuleFn`] wrap closures as rules
//! - [`ProjectedRule`] reuses a rule for a general type on a specific one
//! - [`Immediate`] lifts synchronous rules and validators into the async ports
//! - [`TracingPresenter`] is a headless [`crate::ports::SummaryPresenter`]

mod immediate;
mod projected;
mod rule_fn;
mod tracing_presenter;

pub use immediate::Immediate;
pub use projected::ProjectedRule;
pub use rule_fn::{AsyncRuleFn, RuleFn, rule_fn};
pub use tracing_presenter::TracingPresenter;
