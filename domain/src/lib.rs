//! Domain layer for llm-panel
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! A panel is a set of independent LLM providers that all receive the same
//! query at once:
//!
//! - **Fan-out**: every enabled provider answers concurrently, each outcome
//!   recorded separately ([`ProviderOutcome`])
//! - **Judge**: one designated provider evaluates the collected answers and
//!   writes the merged final response
//! - **Fallback**: if the judge fails, a deterministic rule picks the final
//!   text ([`FallbackPolicy`])

pub mod config;
pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question};
pub use orchestration::{
    aggregator::ResponseAggregator,
    entities::Phase,
    fallback::FallbackPolicy,
    outcome::{ProviderOutcome, ProviderOutcomes},
    session::QuerySession,
};
pub use prompt::PromptTemplate;
pub use providers::{PanelConfig, ProviderConfig, ProviderFamily};
