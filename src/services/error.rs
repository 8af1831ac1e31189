//! Configuration errors raised when assembling validators.

use thiserror::Error;

/// Invalid combination of options on a collection validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionConfigError {
    /// Rules-first iteration needs direct access to individual rules.
    #[error("rules-first iteration requires a collection validator built from rules")]
    RulesFirstRequiresRules,
}
