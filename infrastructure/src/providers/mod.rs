//! HTTP provider adapters and the family-dispatching gateway.

pub mod anthropic;
pub mod cohere;
pub mod gemini;
mod http;
pub mod openai;

use anthropic::AnthropicClient;
use cohere::CohereClient;
use gemini::GeminiClient;
use openai::OpenAiClient;
use panel_application::{BehaviorConfig, CredentialStore, GatewayError, LlmClient, LlmGateway};
use panel_domain::{ProviderConfig, ProviderFamily};
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

/// Gateway that builds an HTTP client per provider, dispatching on the
/// family tag stored in the provider's config.
pub struct HttpLlmGateway {
    http: Client,
    credentials: Arc<dyn CredentialStore>,
}

impl HttpLlmGateway {
    /// Create a gateway sharing one connection pool across providers.
    ///
    /// The behavior timeout applies to every completion call.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        behavior: &BehaviorConfig,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = behavior.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, credentials })
    }
}

impl LlmGateway for HttpLlmGateway {
    fn client_for(&self, config: &ProviderConfig) -> Result<Arc<dyn LlmClient>, GatewayError> {
        let api_key = self
            .credentials
            .resolve(config.credential_ref())
            .ok_or_else(|| GatewayError::CredentialMissing {
                provider: config.name().to_string(),
                credential_ref: config.credential_ref().to_string(),
            })?;

        let http = self.http.clone();
        let base_url = config.base_url();
        let client: Arc<dyn LlmClient> = match config.family() {
            ProviderFamily::OpenAi => Arc::new(OpenAiClient::new(http, api_key, base_url)),
            ProviderFamily::Anthropic => Arc::new(AnthropicClient::new(http, api_key, base_url)),
            ProviderFamily::Gemini => Arc::new(GeminiClient::new(http, api_key, base_url)),
            ProviderFamily::Cohere => Arc::new(CohereClient::new(http, api_key, base_url)),
        };

        debug!(
            "Built {} client for provider {} (model {})",
            config.family(),
            config.name(),
            config.model()
        );
        Ok(client)
    }
}
