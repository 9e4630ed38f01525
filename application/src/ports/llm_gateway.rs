//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use panel_domain::{PromptTemplate, ProviderConfig};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Credential '{credential_ref}' for provider '{provider}' is not set")]
    CredentialMissing {
        provider: String,
        credential_ref: String,
    },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, GatewayError::CredentialMissing { .. })
    }
}

/// One completion call as sent to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: String,
}

impl CompletionRequest {
    /// Build a request from a provider's configured limits and the fixed
    /// system instruction.
    pub fn for_provider(config: &ProviderConfig, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: config.model().to_string(),
            max_tokens: config.max_tokens(),
            temperature: config.temperature(),
            system: PromptTemplate::SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

/// A client bound to one provider and credential.
///
/// Implementations (adapters) live in the infrastructure layer. Timeouts are
/// the implementation's responsibility.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a completion request and return the response text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}

/// Gateway for LLM communication
///
/// Builds a client for a provider config by dispatching on its family. Fails
/// synchronously with [`GatewayError::CredentialMissing`] when the provider's
/// credential is absent, so no client exists without a verified credential.
pub trait LlmGateway: Send + Sync {
    fn client_for(&self, config: &ProviderConfig) -> Result<Arc<dyn LlmClient>, GatewayError>;
}
