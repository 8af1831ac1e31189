//! Rulebook: composable rule-based validation of domain objects.
//!
//! Rules inspect one object and report an [`domain::Outcome`]. Validators
//! run rules, or other validators, and aggregate the outcomes into a
//! severity-ordered [`domain::Summary`] that callers use to decide whether
//! a process may continue.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Severities, outcomes and summaries ([`domain`])
//! - **Ports**: The rule, validator and presenter contracts ([`ports`])
//! - **Services**: Validators composed from the ports ([`services`])
//! - **Adapters**: Closure-backed rules, projections and a logging presenter
//!   ([`adapters`])
//!
//! # Example
//!
//! ```
//! use rulebook::adapters::RuleFn;
//! use rulebook::domain::{FailureSeverity, IntoFailure, Outcome, Severity};
//! use rulebook::ports::Validator;
//! use rulebook::services::RuleBasedValidator;
//!
//! struct Registration {
//!     password: String,
//!     confirmation: String,
//! }
//!
//! let validator = RuleBasedValidator::new()
//!     .with_rule(RuleFn::new(|form: &Registration| {
//!         if form.password == form.confirmation {
//!             Outcome::success()
//!         } else {
//!             "The two passwords differ.".into_failure(FailureSeverity::Error)
//!         }
//!     }))
//!     .with_rule(RuleFn::new(|form: &Registration| {
//!         if form.password.len() < 8 {
//!             "The password is weak.".into_failure(FailureSeverity::Warning)
//!         } else {
//!             Outcome::success()
//!         }
//!     }));
//!
//! let form = Registration {
//!     password: "hunter2".to_owned(),
//!     confirmation: "hunter3".to_owned(),
//! };
//! let summary = validator.validate(&form);
//!
//! assert_eq!(summary.severity(), Severity::Error);
//! assert_eq!(summary.failures().count(), 2);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
