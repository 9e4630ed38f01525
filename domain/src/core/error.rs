//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Outcome for provider '{0}' was already recorded")]
    DuplicateOutcome(String),

    #[error("Invalid provider config: {0}")]
    InvalidProviderConfig(String),
}
