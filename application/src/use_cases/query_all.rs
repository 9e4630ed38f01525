//! Query All use case
//!
//! Fans one prompt out to every enabled provider and joins all outcomes.

use super::provider_client::ProviderClient;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use futures::stream::{FuturesUnordered, StreamExt};
use panel_domain::{Phase, ProviderConfig, ProviderOutcome, ProviderOutcomes};
use std::sync::Arc;
use tracing::{info, warn};

/// Concurrent fan-out over the enabled providers.
///
/// Every provider call runs as its own task. The join waits for all of them
/// to settle; a failing or slow provider never cancels its siblings.
pub struct QueryOrchestrator<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    providers: Vec<ProviderConfig>,
}

impl<G: LlmGateway + 'static> QueryOrchestrator<G> {
    pub fn new(gateway: Arc<G>, providers: Vec<ProviderConfig>) -> Self {
        Self { gateway, providers }
    }

    pub fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }

    /// Query all providers with default (no-op) progress
    pub async fn query_all(&self, prompt: &str) -> ProviderOutcomes {
        self.query_all_with_progress(prompt, &NoProgress).await
    }

    /// Query all providers with progress callbacks
    pub async fn query_all_with_progress(
        &self,
        prompt: &str,
        progress: &dyn ProgressNotifier,
    ) -> ProviderOutcomes {
        let clients: Vec<ProviderClient> = self
            .providers
            .iter()
            .filter_map(
                |config| match ProviderClient::connect(self.gateway.as_ref(), config) {
                    Ok(client) => Some(client),
                    Err(e) => {
                        warn!("Not dispatching provider {}: {}", config.name(), e);
                        None
                    }
                },
            )
            .collect();

        info!("Phase 1: querying {} providers", clients.len());
        progress.on_phase_start(&Phase::FanOut, clients.len());

        let mut slots: Vec<Option<ProviderOutcome>> = vec![None; clients.len()];

        let mut pending: FuturesUnordered<_> = clients
            .into_iter()
            .enumerate()
            .map(|(index, client)| {
                let name = client.name().to_string();
                let prompt = prompt.to_string();
                let handle = tokio::spawn(async move { client.complete(&prompt).await });
                async move { (index, name, handle.await) }
            })
            .collect();

        while let Some((index, name, joined)) = pending.next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Provider {} task did not complete: {}", name, e);
                    ProviderOutcome::failure(name.as_str(), format!("Unexpected error: {}", e))
                }
            };
            progress.on_task_complete(&Phase::FanOut, &name, outcome.is_success());
            slots[index] = Some(outcome);
        }

        let mut outcomes = ProviderOutcomes::new();
        for outcome in slots.into_iter().flatten() {
            if let Err(e) = outcomes.insert(outcome) {
                warn!("{}", e);
            }
        }

        info!(
            "Phase 1 complete: {} succeeded, {} failed",
            outcomes.success_count(),
            outcomes.failure_count()
        );
        progress.on_phase_complete(&Phase::FanOut);
        outcomes
    }
}
