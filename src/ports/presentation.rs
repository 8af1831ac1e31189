//! Presentation port: hands a completed summary to whoever shows it.
//!
//! The validation core never presents anything itself. It produces a
//! [`Summary`] and a caller passes it to a [`SummaryPresenter`], which
//! decides whether the user may proceed.

use crate::domain::Summary;

/// Shows a completed summary and reports whether the user may proceed.
#[cfg_attr(test, mockall::automock)]
pub trait SummaryPresenter: Send + Sync {
    /// Presents `summary` according to `policy`.
    ///
    /// Returns `true` when the process may continue: either nothing blocking
    /// was found, or the user confirmed the reported problems.
    fn present(&self, summary: &Summary, policy: &PresentationPolicy) -> bool;
}

/// Convenience entry points matching the common presentation call shapes.
pub trait SummaryPresenterExt: SummaryPresenter {
    /// Presents `summary` with the default policy.
    fn show(&self, summary: &Summary) -> bool {
        self.present(summary, &PresentationPolicy::default())
    }

    /// Presents `summary`, optionally skipping successful summaries.
    fn show_only_on_failures(&self, summary: &Summary, show_only_on_failures: bool) -> bool {
        let policy = PresentationPolicy {
            show_only_on_failures,
            ..PresentationPolicy::default()
        };
        self.present(summary, &policy)
    }

    /// Presents `summary` under a header.
    fn show_with_header(
        &self,
        summary: &Summary,
        show_only_on_failures: bool,
        header: &str,
    ) -> bool {
        let policy = PresentationPolicy {
            show_only_on_failures,
            ..PresentationPolicy::default()
        }
        .with_header(header);
        self.present(summary, &policy)
    }

    /// Presents `summary` under a header, followed by guidance on how to proceed.
    fn show_with_guidance(
        &self,
        summary: &Summary,
        show_only_on_failures: bool,
        header: &str,
        how_to_proceed: &str,
    ) -> bool {
        let policy = PresentationPolicy {
            show_only_on_failures,
            ..PresentationPolicy::default()
        }
        .with_header(header)
        .with_how_to_proceed(how_to_proceed);
        self.present(summary, &policy)
    }
}

impl<P: SummaryPresenter + ?Sized> SummaryPresenterExt for P {}

/// Configuration for presenting a summary.
///
/// # Examples
///
/// ```
/// use rulebook::ports::PresentationPolicy;
///
/// let policy = PresentationPolicy::failures_only().with_header("Registration");
/// assert!(policy.show_only_on_failures);
/// assert_eq!(policy.header.as_deref(), Some("Registration"));
/// assert!(!policy.accept_warnings);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationPolicy {
    /// Skip presentation entirely when the summary is a success.
    pub show_only_on_failures: bool,
    /// Text shown above the outcomes.
    pub header: Option<String>,
    /// Text shown below the outcomes, telling the user how to continue.
    pub how_to_proceed: Option<String>,
    /// Whether a non-interactive presenter treats cancellable severities
    /// (warnings) as confirmed.
    pub accept_warnings: bool,
}

impl PresentationPolicy {
    /// Creates a policy that only presents summaries containing errors.
    #[must_use]
    pub fn failures_only() -> Self {
        Self {
            show_only_on_failures: true,
            ..Self::default()
        }
    }

    /// Sets the header text.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets the guidance text.
    #[must_use]
    pub fn with_how_to_proceed(mut self, how_to_proceed: impl Into<String>) -> Self {
        self.how_to_proceed = Some(how_to_proceed.into());
        self
    }

    /// Treats cancellable severities as confirmed by the user.
    #[must_use]
    pub const fn accepting_warnings(mut self) -> Self {
        self.accept_warnings = true;
        self
    }
}
