//! The value returned to callers for one processed query.

use super::outcome::{ProviderOutcome, ProviderOutcomes};
use serde::Serialize;

/// Complete result of a panel query
#[derive(Debug, Clone, Serialize)]
pub struct QuerySession {
    /// The original query
    pub query: String,
    /// Per-provider outcomes in registration order
    pub outcomes: ProviderOutcomes,
    /// Judge output, or the fallback text when the judge failed
    pub final_response: String,
    /// Name of the judge provider
    pub judge_name: String,
    /// Names of the enabled providers, in registration order
    pub providers_used: Vec<String>,
}

impl QuerySession {
    pub fn new(
        query: impl Into<String>,
        outcomes: ProviderOutcomes,
        final_response: impl Into<String>,
        judge_name: impl Into<String>,
        providers_used: Vec<String>,
    ) -> Self {
        Self {
            query: query.into(),
            outcomes,
            final_response: final_response.into(),
            judge_name: judge_name.into(),
            providers_used,
        }
    }

    /// Returns an iterator over only the successful outcomes.
    pub fn successful_outcomes(&self) -> impl Iterator<Item = &ProviderOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Returns an iterator over only the failed outcomes.
    pub fn failed_outcomes(&self) -> impl Iterator<Item = &ProviderOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}
