//! Per-provider outcomes of the fan-out phase.
//!
//! - [`ProviderOutcome`] - one provider's answer or error
//! - [`ProviderOutcomes`] - all outcomes of a query, keyed by provider name
//!   and kept in registration order

use crate::core::error::DomainError;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Result of asking one provider.
///
/// Either the provider answered (`error` is `None`, `text` may legitimately
/// be empty) or it failed (`error` holds a non-empty message and `text` is
/// empty). The two states are only reachable through [`ProviderOutcome::success`]
/// and [`ProviderOutcome::failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutcome {
    provider_name: String,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ProviderOutcome {
    /// Creates a successful outcome.
    pub fn success(provider_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            provider_name: provider_name.into(),
            text: text.into(),
            error: None,
        }
    }

    /// Creates a failed outcome. An empty message is replaced so that a
    /// failure can never be mistaken for an empty answer.
    pub fn failure(provider_name: impl Into<String>, error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            error
        };
        Self {
            provider_name: provider_name.into(),
            text: String::new(),
            error: Some(error),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` if the provider call completed without error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` if this outcome carries usable answer text.
    pub fn has_answer(&self) -> bool {
        self.is_success() && !self.text.is_empty()
    }
}

/// Ordered mapping provider name → [`ProviderOutcome`].
///
/// Keys are unique and an existing entry is never overwritten. Iteration
/// order is insertion order, which the orchestrator keeps equal to provider
/// registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOutcomes {
    entries: Vec<ProviderOutcome>,
}

impl ProviderOutcomes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome; fails if the provider already has one.
    pub fn insert(&mut self, outcome: ProviderOutcome) -> Result<(), DomainError> {
        if self.get(outcome.provider_name()).is_some() {
            return Err(DomainError::DuplicateOutcome(
                outcome.provider_name().to_string(),
            ));
        }
        self.entries.push(outcome);
        Ok(())
    }

    pub fn get(&self, provider_name: &str) -> Option<&ProviderOutcome> {
        self.entries
            .iter()
            .find(|o| o.provider_name() == provider_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderOutcome> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First outcome, in registration order, that carries an answer.
    pub fn first_answer(&self) -> Option<&ProviderOutcome> {
        self.entries.iter().find(|o| o.has_answer())
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|o| o.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }
}

impl<'a> IntoIterator for &'a ProviderOutcomes {
    type Item = &'a ProviderOutcome;
    type IntoIter = std::slice::Iter<'a, ProviderOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ProviderOutcomes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for outcome in &self.entries {
            map.serialize_entry(outcome.provider_name(), outcome)?;
        }
        map.end()
    }
}
