//! Severity levels attached to validation outcomes.
//!
//! Severities form a strict total order by rank. The four base levels are
//! fixed; callers may declare additional levels above [`Severity::Error`]
//! through [`CustomSeverity`].

use super::{ParseSeverityError, SeverityError};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

const SUCCESS_RANK: u16 = 0;
const INFORMATION_RANK: u16 = 10;
const WARNING_RANK: u16 = 20;
const ERROR_RANK: u16 = 30;

/// How serious the result of applying a rule is.
///
/// Equality, ordering and hashing are all defined by [`Severity::rank`], so
/// two custom severities declared with the same rank are the same level.
#[derive(Debug, Clone, Copy, Default)]
pub enum Severity {
    /// The object conforms to the rule.
    #[default]
    Success,
    /// The object conforms, but the user should be told something.
    Information,
    /// A violation the user must acknowledge before proceeding.
    Warning,
    /// A violation that stops the process.
    Error,
    /// A caller-declared level ranked above [`Severity::Error`].
    Custom(CustomSeverity),
}

impl Severity {
    /// Returns the comparison rank of this severity.
    #[must_use]
    pub const fn rank(self) -> u16 {
        match self {
            Self::Success => SUCCESS_RANK,
            Self::Information => INFORMATION_RANK,
            Self::Warning => WARNING_RANK,
            Self::Error => ERROR_RANK,
            Self::Custom(custom) => custom.rank,
        }
    }

    /// Returns `true` for every severity except [`Severity::Success`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::Success)
    }

    /// Returns `true` when a presenter should offer the user a way to cancel.
    #[must_use]
    pub const fn allows_cancel(self) -> bool {
        match self {
            Self::Success | Self::Information => false,
            Self::Warning | Self::Error => true,
            Self::Custom(custom) => custom.allows_cancel,
        }
    }

    /// Returns `true` when the process must be cancelled regardless of the user.
    #[must_use]
    pub const fn causes_cancel(self) -> bool {
        match self {
            Self::Success | Self::Information | Self::Warning => false,
            Self::Error => true,
            Self::Custom(custom) => custom.causes_cancel,
        }
    }

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Custom(custom) => custom.name,
        }
    }
}

impl PartialEq for Severity {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for Severity {}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Hash for Severity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl TryFrom<&str> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: &str) -> Result<Self, ParseSeverityError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "success" => Ok(Self::Success),
            "information" => Ok(Self::Information),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError(value.to_owned())),
        }
    }
}

impl From<CustomSeverity> for Severity {
    fn from(custom: CustomSeverity) -> Self {
        Self::Custom(custom)
    }
}

/// A caller-declared severity ranked above [`Severity::Error`].
///
/// Custom severities are always error-class and allow cancellation. They
/// force cancellation unless built with
/// [`CustomSeverity::without_forced_cancel`].
///
/// # Examples
///
/// ```
/// use rulebook::domain::{CustomSeverity, Severity};
///
/// let fatal = CustomSeverity::new("fatal", 40).expect("rank above error");
/// assert!(Severity::from(fatal) > Severity::Error);
/// assert!(CustomSeverity::new("minor", 15).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CustomSeverity {
    name: &'static str,
    rank: u16,
    allows_cancel: bool,
    causes_cancel: bool,
}

impl CustomSeverity {
    /// Declares a new severity level.
    ///
    /// # Errors
    ///
    /// Returns [`SeverityError::EmptyName`] when `name` is blank and
    /// [`SeverityError::RankNotAboveError`] when `rank` does not exceed the
    /// rank of [`Severity::Error`].
    pub fn new(name: &'static str, rank: u16) -> Result<Self, SeverityError> {
        if name.trim().is_empty() {
            return Err(SeverityError::EmptyName);
        }
        if rank <= ERROR_RANK {
            return Err(SeverityError::RankNotAboveError {
                name: name.to_owned(),
                rank,
            });
        }
        Ok(Self {
            name,
            rank,
            allows_cancel: true,
            causes_cancel: true,
        })
    }

    /// Lets the user decide whether to proceed instead of forcing cancellation.
    #[must_use]
    pub const fn without_forced_cancel(mut self) -> Self {
        self.causes_cancel = false;
        self
    }

    /// Returns the severity name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the comparison rank.
    #[must_use]
    pub const fn rank(&self) -> u16 {
        self.rank
    }
}

/// The predefined failure classes a rule can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureSeverity {
    /// Informational; never prevents the user from proceeding.
    Information,
    /// Must be confirmed by the user before proceeding.
    Warning,
    /// Prevents the user from proceeding.
    Error,
}

impl From<FailureSeverity> for Severity {
    fn from(value: FailureSeverity) -> Self {
        match value {
            FailureSeverity::Information => Self::Information,
            FailureSeverity::Warning => Self::Warning,
            FailureSeverity::Error => Self::Error,
        }
    }
}
