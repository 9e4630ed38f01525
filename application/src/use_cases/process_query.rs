//! Process Query use case
//!
//! The panel engine: fan-out to every enabled provider, then one judge call.

use super::judge_merge::JudgeMerger;
use super::provider_client::ProviderClient;
use super::query_all::QueryOrchestrator;
use crate::config::ProviderRegistry;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use panel_domain::QuerySession;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that prevent the engine from being built. No query is attempted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("No providers enabled: set the credential of at least one enabled provider")]
    NoProvidersEnabled,

    #[error("Judge provider '{judge}' is unavailable: {reason}")]
    JudgeUnavailable { judge: String, reason: String },
}

/// Use case for answering one query with the whole panel
pub struct ProcessQueryUseCase<G: LlmGateway + 'static> {
    orchestrator: QueryOrchestrator<G>,
    merger: JudgeMerger,
    providers_used: Vec<String>,
}

impl<G: LlmGateway + 'static> ProcessQueryUseCase<G> {
    /// Build the engine from the registry.
    ///
    /// Fails before any network call if no provider is enabled or the judge
    /// has no credential.
    pub fn new(gateway: Arc<G>, registry: &ProviderRegistry) -> Result<Self, EngineError> {
        let providers = registry.enabled_providers();
        if providers.is_empty() {
            return Err(EngineError::NoProvidersEnabled);
        }

        let configured_judge = registry.config().judge();
        let judge_config = registry
            .judge_provider()
            .ok_or_else(|| EngineError::JudgeUnavailable {
                judge: configured_judge.name().to_string(),
                reason: format!("credential '{}' is not set", configured_judge.credential_ref()),
            })?;
        let judge = ProviderClient::connect(gateway.as_ref(), &judge_config).map_err(|e| {
            EngineError::JudgeUnavailable {
                judge: judge_config.name().to_string(),
                reason: e.to_string(),
            }
        })?;

        let providers_used = providers.iter().map(|p| p.name().to_string()).collect();
        info!(
            "Panel ready: providers [{}], judge {}",
            providers
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", "),
            judge.name()
        );

        Ok(Self {
            orchestrator: QueryOrchestrator::new(gateway, providers),
            merger: JudgeMerger::new(judge),
            providers_used,
        })
    }

    pub fn providers_used(&self) -> &[String] {
        &self.providers_used
    }

    pub fn judge_name(&self) -> &str {
        self.merger.judge_name()
    }

    /// Process a query with default (no-op) progress
    pub async fn process_query(&self, prompt: &str) -> QuerySession {
        self.process_query_with_progress(prompt, &NoProgress).await
    }

    /// Process a query with progress callbacks.
    ///
    /// Phase 1 settles completely before the single judge call of phase 2.
    pub async fn process_query_with_progress(
        &self,
        prompt: &str,
        progress: &dyn ProgressNotifier,
    ) -> QuerySession {
        let outcomes = self
            .orchestrator
            .query_all_with_progress(prompt, progress)
            .await;

        let final_response = self
            .merger
            .merge_and_evaluate_with_progress(prompt, &outcomes, progress)
            .await;

        QuerySession::new(
            prompt,
            outcomes,
            final_response,
            self.judge_name(),
            self.providers_used.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MapCredentials, Script, ScriptedGateway, panel};

    fn engine(
        gateway: ScriptedGateway,
        names: &[&str],
        keys: &[&str],
    ) -> (Arc<ScriptedGateway>, Result<ProcessQueryUseCase<ScriptedGateway>, EngineError>) {
        let gateway = Arc::new(gateway);
        let registry = ProviderRegistry::new(panel(names), MapCredentials::with_keys(keys));
        let engine = ProcessQueryUseCase::new(Arc::clone(&gateway), &registry);
        (gateway, engine)
    }

    const ALL_KEYS: &[&str] = &["KEY_A", "KEY_B", "KEY_C", "KEY_X", "KEY_Judge"];

    #[tokio::test]
    async fn all_succeed_returns_judge_output() {
        let (gateway, engine) = engine(
            ScriptedGateway::new().with("Judge", Script::reply("merged answer")),
            &["A", "B", "C"],
            ALL_KEYS,
        );
        let session = engine.unwrap().process_query("What is Rust?").await;

        assert_eq!(session.final_response, "merged answer");
        assert_eq!(session.query, "What is Rust?");
        assert_eq!(session.judge_name, "Judge");
        assert_eq!(session.providers_used, vec!["A", "B", "C"]);
        assert_eq!(session.outcomes.len(), 3);
        assert!(session.outcomes.get("Judge").is_none());
        assert_eq!(gateway.calls_to("Judge").len(), 1);
    }

    #[tokio::test]
    async fn failed_provider_is_reported_to_the_judge() {
        let (gateway, engine) = engine(
            ScriptedGateway::new()
                .with("X", Script::fail("timeout"))
                .with("Judge", Script::reply("judge says")),
            &["X", "A", "B"],
            ALL_KEYS,
        );
        let session = engine.unwrap().process_query("q").await;

        let judge_prompts = gateway.calls_to("Judge");
        assert_eq!(judge_prompts.len(), 1);
        assert!(judge_prompts[0].contains("1. X: ERROR - OpenAI error: timeout"));
        assert_eq!(session.final_response, "judge says");
    }

    #[tokio::test]
    async fn judge_failure_falls_back_to_first_registered_answer() {
        let (_, engine) = engine(
            ScriptedGateway::new()
                .with("A", Script::delayed(40, Script::reply("foo")))
                .with("B", Script::fail("boom"))
                .with("Judge", Script::fail("rate limited")),
            &["A", "B"],
            ALL_KEYS,
        );
        let session = engine.unwrap().process_query("q").await;

        assert_eq!(
            session.final_response,
            "Judge LLM failed (Anthropic error: rate limited). Best response from A:\n\nfoo"
        );
    }

    #[tokio::test]
    async fn total_failure_yields_descriptive_text() {
        let (gateway, engine) = engine(
            ScriptedGateway::new()
                .with("A", Script::fail("x"))
                .with("B", Script::fail("y"))
                .with("Judge", Script::fail("down")),
            &["A", "B"],
            ALL_KEYS,
        );
        let session = engine.unwrap().process_query("q").await;

        assert_eq!(
            session.final_response,
            "All LLMs failed or Judge LLM error: Anthropic error: down"
        );
        assert_eq!(gateway.calls_to("Judge").len(), 1);
    }

    #[tokio::test]
    async fn judge_is_called_exactly_once_per_query() {
        let (gateway, engine) = engine(ScriptedGateway::new(), &["A", "B"], ALL_KEYS);
        let engine = engine.unwrap();

        engine.process_query("first").await;
        engine.process_query("second").await;

        let prompts = gateway.calls_to("Judge");
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("first"));
        assert!(prompts[1].contains("second"));
    }

    #[tokio::test]
    async fn fan_out_settles_before_judge_is_called() {
        let (gateway, engine) = engine(
            ScriptedGateway::new().with("A", Script::delayed(50, Script::reply("slow"))),
            &["A", "B"],
            ALL_KEYS,
        );
        engine.unwrap().process_query("q").await;

        let order: Vec<String> = gateway.calls().into_iter().map(|(p, _)| p).collect();
        assert_eq!(order.last().unwrap(), "Judge");
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn no_credentials_fails_construction_without_building_clients() {
        let (gateway, engine) = engine(ScriptedGateway::new(), &["A", "B"], &[]);

        assert_eq!(engine.err(), Some(EngineError::NoProvidersEnabled));
        assert_eq!(gateway.builds(), 0);
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn missing_judge_credential_fails_construction() {
        let (gateway, engine) = engine(ScriptedGateway::new(), &["A"], &["KEY_A"]);

        assert!(matches!(
            engine.err(),
            Some(EngineError::JudgeUnavailable { judge, reason })
                if judge == "Judge" && reason.contains("KEY_Judge")
        ));
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn judge_client_construction_error_is_judge_unavailable() {
        let (_, engine) = engine(
            ScriptedGateway::new().unbuildable("Judge"),
            &["A"],
            &["KEY_A", "KEY_Judge"],
        );
        assert!(matches!(
            engine.err(),
            Some(EngineError::JudgeUnavailable { .. })
        ));
    }

    #[test]
    fn providers_without_credentials_are_not_used() {
        let (_, engine) = engine(
            ScriptedGateway::new(),
            &["A", "B", "C"],
            &["KEY_A", "KEY_C", "KEY_Judge"],
        );
        assert_eq!(engine.unwrap().providers_used(), ["A", "C"]);
    }
}
