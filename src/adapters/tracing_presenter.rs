//! A non-interactive presenter that reports summaries through `tracing`.

use crate::{
    domain::{Severity, Summary},
    ports::{PresentationPolicy, SummaryPresenter},
};

/// Logs summaries and answers for an absent user.
///
/// The decision follows the summary severity's cancel attributes:
///
/// - severities that cause cancellation never proceed;
/// - severities that merely allow cancellation proceed only when the
///   policy accepts warnings;
/// - everything else proceeds.
///
/// # Examples
///
/// ```
/// use rulebook::adapters::TracingPresenter;
/// use rulebook::domain::{FailureSeverity, Outcome, Summary};
/// use rulebook::ports::{PresentationPolicy, SummaryPresenter, SummaryPresenterExt};
///
/// let warning = Summary::from(Outcome::failure(FailureSeverity::Warning, "weak password"));
///
/// assert!(!TracingPresenter.show(&warning));
/// assert!(TracingPresenter.present(&warning, &PresentationPolicy::default().accepting_warnings()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPresenter;

impl SummaryPresenter for TracingPresenter {
    fn present(&self, summary: &Summary, policy: &PresentationPolicy) -> bool {
        if policy.show_only_on_failures && summary.is_success() {
            return true;
        }
        log_summary(summary, policy);
        may_proceed(summary.severity(), policy.accept_warnings)
    }
}

fn may_proceed(severity: Severity, accept_warnings: bool) -> bool {
    if severity.causes_cancel() {
        return false;
    }
    if severity.allows_cancel() {
        return accept_warnings;
    }
    true
}

fn log_summary(summary: &Summary, policy: &PresentationPolicy) {
    let header = policy.header.as_deref().unwrap_or("validation summary");
    let severity = summary.severity();
    let failures = summary.failures().count();

    if severity.causes_cancel() {
        tracing::error!(%severity, failures, "{header}");
    } else if severity.allows_cancel() {
        tracing::warn!(%severity, failures, "{header}");
    } else {
        tracing::info!(%severity, failures, "{header}");
    }

    for failure in summary.failures() {
        tracing::info!(
            severity = %failure.severity(),
            detail = failure.message(),
            "validation failure"
        );
    }

    if let Some(how_to_proceed) = policy.how_to_proceed.as_deref() {
        tracing::info!(how_to_proceed, "validation guidance");
    }
}
