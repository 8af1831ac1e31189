//! Domain model for validation results.
//!
//! Severities rank outcomes, outcomes record single rule checks, and
//! summaries aggregate outcomes into one severity-ordered result. All
//! values are immutable after construction and free of infrastructure
//! concerns.

mod error;
mod outcome;
mod severity;
mod summary;

pub use error::{OutcomeError, ParseSeverityError, SeverityError};
pub use outcome::{Failure, IntoFailure, Outcome};
pub use severity::{CustomSeverity, FailureSeverity, Severity};
pub use summary::{Summary, SummaryBuilder};
