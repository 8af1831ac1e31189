//! Aggregated, severity-ordered collections of outcomes.

use super::{Failure, FailureSeverity, Outcome, Severity};
use serde::Serialize;

/// An immutable, severity-sorted collection of outcomes.
///
/// Outcomes are stored in descending severity order. The sort is stable, so
/// outcomes of equal severity keep the order in which they were supplied.
/// The summary severity is the highest outcome severity, or
/// [`Severity::Success`] when there are no outcomes.
///
/// Summaries are never changed after construction; [`Summary::merge`]
/// builds a new summary from the outcomes of several others.
///
/// # Examples
///
/// ```
/// use rulebook::domain::{FailureSeverity, Outcome, Severity, Summary};
///
/// let summary = Summary::new([
///     Outcome::success(),
///     Outcome::failure(FailureSeverity::Warning, "weak password"),
///     Outcome::failure(FailureSeverity::Error, "passwords differ"),
/// ]);
///
/// assert_eq!(summary.severity(), Severity::Error);
/// assert_eq!(
///     summary.outcomes().first().and_then(|outcome| outcome.message()),
///     Some("passwords differ")
/// );
/// assert_eq!(summary.failures().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    severity: Severity,
    outcomes: Vec<Outcome>,
}

impl Summary {
    /// Creates a summary without outcomes.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            severity: Severity::Success,
            outcomes: Vec::new(),
        }
    }

    /// Creates a summary from raw outcomes.
    #[must_use]
    pub fn new(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut sorted: Vec<Outcome> = outcomes.into_iter().collect();
        // `sort_by` is stable, which keeps equal severities in input order.
        sorted.sort_by(|left, right| right.severity().cmp(&left.severity()));
        let severity = sorted.first().map_or(Severity::Success, Outcome::severity);
        Self {
            severity,
            outcomes: sorted,
        }
    }

    /// Flattens several summaries into one, re-sorting the combined outcomes.
    #[must_use]
    pub fn merge(summaries: impl IntoIterator<Item = Self>) -> Self {
        Self::new(summaries.into_iter().flat_map(Self::into_outcomes))
    }

    /// Returns the highest severity among the outcomes.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns all outcomes, most severe first.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the outcomes that carry a message and an error-class severity.
    ///
    /// Information outcomes are included: every severity except success is
    /// error-class.
    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.outcomes
            .iter()
            .filter_map(Outcome::as_failure)
            .filter(|failure| failure.severity().is_error())
    }

    /// Returns `true` when no outcome is an error.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !self.severity.is_error()
    }

    /// Returns the number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` when the summary holds no outcomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Consumes the summary and returns its sorted outcomes.
    #[must_use]
    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes
    }
}

impl From<Outcome> for Summary {
    fn from(outcome: Outcome) -> Self {
        Self::new([outcome])
    }
}

impl FromIterator<Outcome> for Summary {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl FromIterator<Self> for Summary {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::merge(iter)
    }
}

/// Collects outcomes step by step and snapshots them into a [`Summary`].
///
/// The builder is never consumed: [`SummaryBuilder::build`] may be called
/// any number of times, and each summary is independent of later appends.
///
/// # Examples
///
/// ```
/// use rulebook::domain::{FailureSeverity, Outcome, Severity, SummaryBuilder};
///
/// let mut builder = SummaryBuilder::new();
/// builder
///     .append(Outcome::success())
///     .append_failure(FailureSeverity::Information, "account is new");
/// let first = builder.build();
///
/// builder.append_failure(FailureSeverity::Error, "account is locked");
///
/// assert_eq!(first.severity(), Severity::Information);
/// assert_eq!(builder.build().severity(), Severity::Error);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SummaryBuilder {
    outcomes: Vec<Outcome>,
}

impl SummaryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    /// Appends an outcome.
    pub fn append(&mut self, outcome: Outcome) -> &mut Self {
        self.outcomes.push(outcome);
        self
    }

    /// Appends a failure built from a severity and a message.
    pub fn append_failure(
        &mut self,
        severity: FailureSeverity,
        message: impl Into<String>,
    ) -> &mut Self {
        self.append(Outcome::failure(severity, message))
    }

    /// Appends every outcome of an existing summary.
    pub fn append_summary(&mut self, summary: &Summary) -> &mut Self {
        self.outcomes.extend(summary.outcomes().iter().cloned());
        self
    }

    /// Returns the number of appended outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` when nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Snapshots the appended outcomes into a summary.
    #[must_use]
    pub fn build(&self) -> Summary {
        Summary::new(self.outcomes.iter().cloned())
    }
}

impl From<Outcome> for SummaryBuilder {
    fn from(outcome: Outcome) -> Self {
        let mut builder = Self::new();
        builder.append(outcome);
        builder
    }
}
