//! Provider entries from TOML (`[[providers]]` and `[judge]`)

use panel_domain::{DomainError, ProviderConfig, ProviderFamily};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Raw provider entry
///
/// `family` is optional; when absent it is inferred from the name and model
/// while converting to a [`ProviderConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Display name, unique within the panel
    pub name: String,
    /// Model identifier sent to the provider
    pub model: String,
    /// Environment variable holding the API key
    pub credential_env: String,
    /// Explicit family tag (`openai`, `anthropic`, `gemini`, `cohere`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub enabled: bool,
    /// Override for the provider's API base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            model: String::new(),
            credential_env: String::new(),
            family: None,
            max_tokens: ProviderConfig::DEFAULT_MAX_TOKENS,
            temperature: ProviderConfig::DEFAULT_TEMPERATURE,
            enabled: true,
            base_url: None,
        }
    }
}

impl FileProviderConfig {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        credential_env: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            credential_env: credential_env.into(),
            ..Self::default()
        }
    }

    /// Built-in panel: one provider per supported family, a second OpenAI
    /// model, and xAI Grok through its OpenAI-compatible endpoint
    pub fn default_panel() -> Vec<Self> {
        vec![
            Self::new("OpenAI", "gpt-4o", "OPENAI_API_KEY"),
            Self::new("Anthropic", "claude-3-5-sonnet-20241022", "ANTHROPIC_API_KEY"),
            Self::new("Gemini", "gemini-1.5-pro", "GOOGLE_API_KEY"),
            Self::new("Cohere", "command-r-plus", "COHERE_API_KEY"),
            Self::new("OpenAI GPT-3.5", "gpt-3.5-turbo", "OPENAI_API_KEY"),
            Self {
                family: Some("openai".to_string()),
                base_url: Some("https://api.x.ai".to_string()),
                ..Self::new("xAI Grok", "grok-beta", "GROK_API_KEY")
            },
        ]
    }

    /// Built-in judge: Anthropic at a lower temperature with a larger budget
    pub fn default_judge() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.3,
            ..Self::new("Judge", "claude-3-5-sonnet-20241022", "ANTHROPIC_API_KEY")
        }
    }

    /// Resolve the family: the explicit tag wins, then inference, then OpenAI.
    pub fn resolve_family(&self) -> Result<ProviderFamily, DomainError> {
        if let Some(family) = &self.family {
            return family.parse();
        }
        Ok(ProviderFamily::infer(&self.name, &self.model).unwrap_or_else(|| {
            warn!(
                "Could not infer provider family for '{}' (model '{}'), defaulting to {}",
                self.name,
                self.model,
                ProviderFamily::default().display_name()
            );
            ProviderFamily::default()
        }))
    }

    pub fn to_provider_config(&self) -> Result<ProviderConfig, DomainError> {
        let family = self.resolve_family()?;
        Ok(
            ProviderConfig::new(&self.name, family, &self.model, &self.credential_env)
                .with_max_tokens(self.max_tokens)
                .with_temperature(self.temperature)
                .with_enabled(self.enabled)
                .with_base_url(self.base_url.clone()),
        )
    }
}
