//! Provider configuration types (provider-neutral).
//!
//! These types describe which providers exist and how to call them, without
//! depending on any serialization format or on credential values. The
//! credential itself is resolved through `credential_ref` by the application
//! layer.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Family of wire protocol a provider speaks.
///
/// Dispatch to a concrete client always matches on this tag. The tag is
/// stored in [`ProviderConfig`]; [`ProviderFamily::infer`] only exists to
/// fill it in when a configuration entry leaves it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFamily {
    #[default]
    OpenAi,
    Anthropic,
    Gemini,
    Cohere,
}

/// Substring rules used by [`ProviderFamily::infer`], checked in order.
const INFERENCE_RULES: &[(&[&str], ProviderFamily)] = &[
    (&["gpt", "openai"], ProviderFamily::OpenAi),
    (&["claude", "anthropic"], ProviderFamily::Anthropic),
    (&["gemini", "google"], ProviderFamily::Gemini),
    (&["command", "cohere"], ProviderFamily::Cohere),
];

impl ProviderFamily {
    pub const ALL: [ProviderFamily; 4] = [
        ProviderFamily::OpenAi,
        ProviderFamily::Anthropic,
        ProviderFamily::Gemini,
        ProviderFamily::Cohere,
    ];

    /// Infer the family from a provider's model identifier and display name.
    ///
    /// Case-insensitive substring match against both fields, rules checked in
    /// a fixed order. Returns `None` when nothing matches so the caller can
    /// decide (and log) the default; see [`ProviderFamily::infer_or_default`].
    pub fn infer(name: &str, model: &str) -> Option<Self> {
        let name = name.to_lowercase();
        let model = model.to_lowercase();
        INFERENCE_RULES.iter().find_map(|(needles, family)| {
            needles
                .iter()
                .any(|n| model.contains(n) || name.contains(n))
                .then_some(*family)
        })
    }

    /// Like [`ProviderFamily::infer`] but total: unknown identifiers map to
    /// the default family (OpenAI).
    pub fn infer_or_default(name: &str, model: &str) -> Self {
        Self::infer(name, model).unwrap_or_default()
    }

    /// Stable lowercase identifier (used in config files)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderFamily::OpenAi => "openai",
            ProviderFamily::Anthropic => "anthropic",
            ProviderFamily::Gemini => "gemini",
            ProviderFamily::Cohere => "cohere",
        }
    }

    /// Human-readable name, also used to prefix converted call errors
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderFamily::OpenAi => "OpenAI",
            ProviderFamily::Anthropic => "Anthropic",
            ProviderFamily::Gemini => "Gemini",
            ProviderFamily::Cohere => "Cohere",
        }
    }
}

impl std::fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ProviderFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" | "gpt" => Ok(ProviderFamily::OpenAi),
            "anthropic" | "claude" => Ok(ProviderFamily::Anthropic),
            "gemini" | "google" => Ok(ProviderFamily::Gemini),
            "cohere" | "command" => Ok(ProviderFamily::Cohere),
            other => Err(DomainError::InvalidProviderConfig(format!(
                "unknown provider family '{}'",
                other
            ))),
        }
    }
}

/// Static description of one provider.
///
/// Immutable once constructed; the `with_*` methods consume and return a new
/// value. Identity is [`ProviderConfig::name`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderConfig {
    name: String,
    family: ProviderFamily,
    credential_ref: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
}

impl ProviderConfig {
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    pub fn new(
        name: impl Into<String>,
        family: ProviderFamily,
        model: impl Into<String>,
        credential_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            credential_ref: credential_ref.into(),
            model: model.into(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            temperature: Self::DEFAULT_TEMPERATURE,
            enabled: true,
            base_url: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> ProviderFamily {
        self.family
    }

    pub fn credential_ref(&self) -> &str {
        &self.credential_ref
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

/// Immutable panel configuration: the ordered provider list plus the judge.
///
/// Built once at process start and handed to the engine; provider order is
/// the registration order used for rendering and fallback selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelConfig {
    providers: Vec<ProviderConfig>,
    judge: ProviderConfig,
}

impl PanelConfig {
    /// Create a panel config, rejecting duplicate provider names
    pub fn new(providers: Vec<ProviderConfig>, judge: ProviderConfig) -> Result<Self, DomainError> {
        for (i, provider) in providers.iter().enumerate() {
            if providers[..i].iter().any(|p| p.name == provider.name) {
                return Err(DomainError::InvalidProviderConfig(format!(
                    "duplicate provider name '{}'",
                    provider.name
                )));
            }
        }
        Ok(Self { providers, judge })
    }

    pub fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }

    pub fn judge(&self) -> &ProviderConfig {
        &self.judge
    }
}
