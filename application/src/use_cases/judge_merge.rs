//! Judge Merge use case
//!
//! Hands the rendered provider report to the judge and applies the fallback
//! policy when the judge call fails.

use super::provider_client::ProviderClient;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use panel_domain::{FallbackPolicy, Phase, PromptTemplate, ProviderOutcomes, ResponseAggregator};
use tracing::{info, warn};

/// Evaluates provider outcomes through the designated judge.
pub struct JudgeMerger {
    judge: ProviderClient,
}

impl JudgeMerger {
    pub fn new(judge: ProviderClient) -> Self {
        Self { judge }
    }

    pub fn judge_name(&self) -> &str {
        self.judge.name()
    }

    /// The exact prompt the judge receives for `query` and `outcomes`
    pub fn evaluation_prompt(query: &str, outcomes: &ProviderOutcomes) -> String {
        PromptTemplate::judge_prompt(query, &ResponseAggregator::render(outcomes))
    }

    /// Merge with default (no-op) progress
    pub async fn merge_and_evaluate(&self, query: &str, outcomes: &ProviderOutcomes) -> String {
        self.merge_and_evaluate_with_progress(query, outcomes, &NoProgress)
            .await
    }

    /// Call the judge exactly once and return its text, or the fallback text
    /// if the judge call fails.
    pub async fn merge_and_evaluate_with_progress(
        &self,
        query: &str,
        outcomes: &ProviderOutcomes,
        progress: &dyn ProgressNotifier,
    ) -> String {
        info!("Phase 2: judge {} evaluating {} outcomes", self.judge_name(), outcomes.len());
        progress.on_phase_start(&Phase::Judge, 1);

        let prompt = Self::evaluation_prompt(query, outcomes);
        let verdict = self.judge.complete(&prompt).await;

        progress.on_task_complete(&Phase::Judge, self.judge_name(), verdict.is_success());
        progress.on_phase_complete(&Phase::Judge);

        match verdict.error() {
            None => verdict.text().to_string(),
            Some(error) => {
                warn!("Judge {} failed, applying fallback: {}", self.judge_name(), error);
                FallbackPolicy::resolve(error, outcomes)
            }
        }
    }
}
