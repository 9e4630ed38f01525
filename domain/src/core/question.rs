//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A query to be answered by the panel (Value Object)
///
/// Represents the input that will be fanned out to every enabled provider
/// and later handed to the judge together with their answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question, rejecting empty or whitespace-only content
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("What is Rust?").unwrap();
        assert_eq!(q.content(), "What is Rust?");
    }

    #[test]
    fn test_question_try_from_str() {
        let q: Question = "What is Rust?".try_into().unwrap();
        assert_eq!(q.to_string(), "What is Rust?");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert!(Question::try_new("").is_err());
        assert!(matches!(
            Question::try_new("   \n"),
            Err(DomainError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn test_into_content_preserves_whitespace() {
        let q = Question::try_new("  padded  ").unwrap();
        assert_eq!(q.into_content(), "  padded  ");
    }
}
