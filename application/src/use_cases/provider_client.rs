//! Provider client: one provider's completion call turned into an outcome.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmClient, LlmGateway};
use panel_domain::{ProviderConfig, ProviderOutcome};
use std::sync::Arc;
use tracing::{debug, warn};

/// A connected provider.
///
/// [`ProviderClient::complete`] never fails: any gateway error is converted
/// into a failed [`ProviderOutcome`] whose message is prefixed with the
/// provider family name.
#[derive(Clone)]
pub struct ProviderClient {
    config: ProviderConfig,
    inner: Arc<dyn LlmClient>,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig, inner: Arc<dyn LlmClient>) -> Self {
        Self { config, inner }
    }

    /// Build the client for `config` through the gateway.
    ///
    /// Fails with [`GatewayError::CredentialMissing`] if the credential is absent.
    pub fn connect<G: LlmGateway + ?Sized>(
        gateway: &G,
        config: &ProviderConfig,
    ) -> Result<Self, GatewayError> {
        let inner = gateway.client_for(config)?;
        Ok(Self::new(config.clone(), inner))
    }

    pub fn name(&self) -> &str {
        self.config.name()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Send `prompt` with the configured model, limits and system instruction
    pub async fn complete(&self, prompt: &str) -> ProviderOutcome {
        let request = CompletionRequest::for_provider(&self.config, prompt);

        match self.inner.complete(&request).await {
            Ok(text) => {
                debug!("Provider {} returned {} bytes", self.name(), text.len());
                ProviderOutcome::success(self.name(), text)
            }
            Err(e) => {
                warn!("Provider {} failed: {}", self.name(), e);
                ProviderOutcome::failure(
                    self.name(),
                    format!("{} error: {}", self.config.family().display_name(), e),
                )
            }
        }
    }
}
