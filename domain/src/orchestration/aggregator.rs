//! Renders collected outcomes into the labeled report given to the judge.

use super::outcome::ProviderOutcomes;

/// Builds the numbered, order-stable provider report.
pub struct ResponseAggregator;

impl ResponseAggregator {
    /// Render outcomes in registration order, numbered from 1.
    ///
    /// Failures render as `"<i>. <name>: ERROR - <error>"`, answers as
    /// `"<i>. <name>:\n<text>"`; entries are separated by a blank line.
    pub fn render(outcomes: &ProviderOutcomes) -> String {
        outcomes
            .iter()
            .enumerate()
            .map(|(i, outcome)| match outcome.error() {
                Some(error) => format!("{}. {}: ERROR - {}", i + 1, outcome.provider_name(), error),
                None => format!("{}. {}:\n{}", i + 1, outcome.provider_name(), outcome.text()),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
