//! Provider registry: the configured panel filtered by credential presence.

use crate::ports::credentials::CredentialStore;
use panel_domain::{PanelConfig, ProviderConfig};
use std::sync::Arc;
use tracing::debug;

/// Why a configured provider is or is not part of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    Enabled,
    Disabled,
    MissingCredential,
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderStatus::Enabled => "enabled",
            ProviderStatus::Disabled => "disabled",
            ProviderStatus::MissingCredential => "missing credential",
        }
    }
}

/// Configured providers and judge, resolved against a credential store.
pub struct ProviderRegistry {
    config: PanelConfig,
    credentials: Arc<dyn CredentialStore>,
}

impl ProviderRegistry {
    pub fn new(config: PanelConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn status_of(&self, provider: &ProviderConfig) -> ProviderStatus {
        if !provider.is_enabled() {
            ProviderStatus::Disabled
        } else if !self.credentials.contains(provider.credential_ref()) {
            ProviderStatus::MissingCredential
        } else {
            ProviderStatus::Enabled
        }
    }

    /// Providers with `enabled = true` and a present credential, in
    /// declaration order.
    pub fn enabled_providers(&self) -> Vec<ProviderConfig> {
        self.config
            .providers()
            .iter()
            .filter(|p| match self.status_of(p) {
                ProviderStatus::Enabled => true,
                status => {
                    debug!("Skipping provider {}: {}", p.name(), status.as_str());
                    false
                }
            })
            .cloned()
            .collect()
    }

    /// The judge config, only if its credential is present.
    pub fn judge_provider(&self) -> Option<ProviderConfig> {
        let judge = self.config.judge();
        self.credentials
            .contains(judge.credential_ref())
            .then(|| judge.clone())
    }

    /// Every configured provider with its status (for listings)
    pub fn provider_statuses(&self) -> Vec<(ProviderConfig, ProviderStatus)> {
        self.config
            .providers()
            .iter()
            .map(|p| (p.clone(), self.status_of(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::ProviderFamily;
    use std::collections::HashMap;

    struct MapCredentials(HashMap<String, String>);

    impl CredentialStore for MapCredentials {
        fn get(&self, credential_ref: &str) -> Option<String> {
            self.0.get(credential_ref).cloned()
        }
    }

    fn credentials(keys: &[(&str, &str)]) -> Arc<dyn CredentialStore> {
        Arc::new(MapCredentials(
            keys.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    fn panel() -> PanelConfig {
        PanelConfig::new(
            vec![
                ProviderConfig::new("OpenAI", ProviderFamily::OpenAi, "gpt-4o", "OPENAI"),
                ProviderConfig::new("Claude", ProviderFamily::Anthropic, "claude-3", "ANTHROPIC"),
                ProviderConfig::new("Gemini", ProviderFamily::Gemini, "gemini-1.5", "GOOGLE")
                    .with_enabled(false),
                ProviderConfig::new("Cohere", ProviderFamily::Cohere, "command-r", "COHERE"),
            ],
            ProviderConfig::new("Judge", ProviderFamily::Anthropic, "claude-3", "JUDGE"),
        )
        .unwrap()
    }

    #[test]
    fn enabled_providers_filters_and_keeps_order() {
        let registry = ProviderRegistry::new(
            panel(),
            credentials(&[("COHERE", "c"), ("OPENAI", "o"), ("GOOGLE", "g")]),
        );

        let names: Vec<_> = registry
            .enabled_providers()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["OpenAI", "Cohere"]);
    }

    #[test]
    fn blank_credentials_count_as_missing() {
        let registry = ProviderRegistry::new(panel(), credentials(&[("OPENAI", "  ")]));
        assert!(registry.enabled_providers().is_empty());
    }

    #[test]
    fn judge_requires_its_own_credential() {
        let registry = ProviderRegistry::new(panel(), credentials(&[("ANTHROPIC", "a")]));
        assert!(registry.judge_provider().is_none());

        let registry = ProviderRegistry::new(panel(), credentials(&[("JUDGE", "j")]));
        assert_eq!(registry.judge_provider().unwrap().name(), "Judge");
    }

    #[test]
    fn statuses_cover_every_configured_provider() {
        let registry = ProviderRegistry::new(panel(), credentials(&[("OPENAI", "o")]));
        let statuses: Vec<_> = registry
            .provider_statuses()
            .into_iter()
            .map(|(p, s)| (p.name().to_string(), s))
            .collect();

        assert_eq!(
            statuses,
            vec![
                ("OpenAI".to_string(), ProviderStatus::Enabled),
                ("Claude".to_string(), ProviderStatus::MissingCredential),
                ("Gemini".to_string(), ProviderStatus::Disabled),
                ("Cohere".to_string(), ProviderStatus::MissingCredential),
            ]
        );
    }
}
