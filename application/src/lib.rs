//! Application layer for llm-panel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, ProviderRegistry, ProviderStatus};
pub use ports::{
    credentials::CredentialStore,
    llm_gateway::{CompletionRequest, GatewayError, LlmClient, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::judge_merge::JudgeMerger;
pub use use_cases::process_query::{EngineError, ProcessQueryUseCase};
pub use use_cases::provider_client::ProviderClient;
pub use use_cases::query_all::QueryOrchestrator;
