//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. They are deserialized
//! directly and converted to domain types by [`FileConfig::to_panel_config`].

mod http;
mod output;
mod provider;

pub use http::FileHttpConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::FileProviderConfig;

use panel_domain::{DomainError, PanelConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A single problem found by [`FileConfig::validate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{section}: provider name cannot be empty")]
    EmptyName { section: String },

    #[error("{section} '{name}': model cannot be empty")]
    EmptyModel { section: String, name: String },

    #[error("{section} '{name}': credential_env cannot be empty")]
    EmptyCredentialEnv { section: String, name: String },

    #[error("duplicate provider name '{0}'")]
    DuplicateName(String),

    #[error("{section} '{name}': unknown family '{family}'")]
    UnknownFamily {
        section: String,
        name: String,
        family: String,
    },

    #[error("{section} '{name}': temperature {value} is outside 0.0..=2.0")]
    TemperatureOutOfRange {
        section: String,
        name: String,
        value: f32,
    },

    #[error("{section} '{name}': max_tokens cannot be 0")]
    ZeroMaxTokens { section: String, name: String },
}

/// Failure turning a loaded [`FileConfig`] into a [`PanelConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {}", join_issues(.0))]
    Invalid(Vec<ConfigValidationError>),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn join_issues(issues: &[ConfigValidationError]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Panel members, in registration order
    pub providers: Vec<FileProviderConfig>,
    /// The provider that evaluates and merges the panel's answers
    pub judge: FileProviderConfig,
    pub http: FileHttpConfig,
    pub output: FileOutputConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            providers: FileProviderConfig::default_panel(),
            judge: FileProviderConfig::default_judge(),
            http: FileHttpConfig::default(),
            output: FileOutputConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for entry in &self.providers {
            validate_entry("providers", entry, &mut issues);
            if !entry.name.is_empty() && !seen.insert(entry.name.as_str()) {
                issues.push(ConfigValidationError::DuplicateName(entry.name.clone()));
            }
        }
        validate_entry("judge", &self.judge, &mut issues);

        issues
    }

    /// Convert to the domain configuration, inferring missing families.
    pub fn to_panel_config(&self) -> Result<PanelConfig, ConfigError> {
        let issues = self.validate();
        if !issues.is_empty() {
            return Err(ConfigError::Invalid(issues));
        }

        let providers = self
            .providers
            .iter()
            .map(FileProviderConfig::to_provider_config)
            .collect::<Result<Vec<_>, _>>()?;
        let judge = self.judge.to_provider_config()?;

        Ok(PanelConfig::new(providers, judge)?)
    }
}

fn validate_entry(
    section: &str,
    entry: &FileProviderConfig,
    issues: &mut Vec<ConfigValidationError>,
) {
    let section = section.to_string();
    let name = entry.name.clone();

    if entry.name.trim().is_empty() {
        issues.push(ConfigValidationError::EmptyName { section });
        return;
    }
    if entry.model.trim().is_empty() {
        issues.push(ConfigValidationError::EmptyModel {
            section: section.clone(),
            name: name.clone(),
        });
    }
    if entry.credential_env.trim().is_empty() {
        issues.push(ConfigValidationError::EmptyCredentialEnv {
            section: section.clone(),
            name: name.clone(),
        });
    }
    if let Some(family) = &entry.family {
        if entry.resolve_family().is_err() {
            issues.push(ConfigValidationError::UnknownFamily {
                section: section.clone(),
                name: name.clone(),
                family: family.clone(),
            });
        }
    }
    if !(0.0..=2.0).contains(&entry.temperature) {
        issues.push(ConfigValidationError::TemperatureOutOfRange {
            section: section.clone(),
            name: name.clone(),
            value: entry.temperature,
        });
    }
    if entry.max_tokens == 0 {
        issues.push(ConfigValidationError::ZeroMaxTokens { section, name });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::{OutputFormat, ProviderFamily};

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        let names: Vec<_> = config.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "OpenAI",
                "Anthropic",
                "Gemini",
                "Cohere",
                "OpenAI GPT-3.5",
                "xAI Grok"
            ]
        );
        assert_eq!(config.judge.name, "Judge");
        assert_eq!(config.http.timeout_seconds, 60);
        assert!(config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config_converts_with_inferred_families() {
        let panel = FileConfig::default().to_panel_config().unwrap();
        let families: Vec<_> = panel.providers().iter().map(|p| p.family()).collect();
        assert_eq!(
            families,
            [
                ProviderFamily::OpenAi,
                ProviderFamily::Anthropic,
                ProviderFamily::Gemini,
                ProviderFamily::Cohere,
                ProviderFamily::OpenAi,
                ProviderFamily::OpenAi
            ]
        );
        assert_eq!(panel.judge().family(), ProviderFamily::Anthropic);
        assert_eq!(panel.judge().temperature(), 0.3);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[[providers]]
name = "Fast"
model = "gpt-4o-mini"
credential_env = "OPENAI_API_KEY"
max_tokens = 400

[[providers]]
name = "Local"
family = "openai"
model = "llama3"
credential_env = "LOCAL_KEY"
base_url = "http://localhost:11434"
enabled = false

[judge]
name = "Referee"
model = "gemini-1.5-pro"
credential_env = "GOOGLE_API_KEY"

[http]
timeout_seconds = 15

[output]
format = "json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.len(), 2);
        assert_eq!(config.providers[0].max_tokens, 400);
        assert_eq!(config.providers[0].temperature, 0.7);
        assert!(!config.providers[1].enabled);
        assert_eq!(config.judge.name, "Referee");
        assert_eq!(config.http.timeout_seconds, 15);
        assert_eq!(config.output.format, Some(OutputFormat::Json));

        let panel = config.to_panel_config().unwrap();
        assert_eq!(panel.providers()[1].base_url(), Some("http://localhost:11434"));
        assert_eq!(panel.judge().family(), ProviderFamily::Gemini);
    }

    #[test]
    fn test_partial_config_keeps_default_panel() {
        let config: FileConfig = toml::from_str("[http]\ntimeout_seconds = 5\n").unwrap();
        assert_eq!(config.providers.len(), 6);
        assert_eq!(config.judge, FileProviderConfig::default_judge());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.providers.push(FileProviderConfig::new("OpenAI", "gpt-4o", "X"));
        config.providers.push(FileProviderConfig {
            temperature: 3.0,
            max_tokens: 0,
            ..FileProviderConfig::new("Hot", "", "")
        });
        config.judge.family = Some("watson".to_string());

        let issues = config.validate();
        assert!(issues.contains(&ConfigValidationError::DuplicateName("OpenAI".to_string())));
        assert!(issues.iter().any(|i| matches!(i, ConfigValidationError::EmptyModel { name, .. } if name == "Hot")));
        assert!(issues.iter().any(|i| matches!(i, ConfigValidationError::EmptyCredentialEnv { .. })));
        assert!(issues.iter().any(|i| matches!(i, ConfigValidationError::TemperatureOutOfRange { .. })));
        assert!(issues.iter().any(|i| matches!(i, ConfigValidationError::ZeroMaxTokens { .. })));
        assert!(issues.iter().any(|i| matches!(i, ConfigValidationError::UnknownFamily { section, .. } if section == "judge")));
    }

    #[test]
    fn test_invalid_config_does_not_convert() {
        let mut config = FileConfig::default();
        config.providers[0].model.clear();

        let err = config.to_panel_config().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref issues) if issues.len() == 1));
        assert!(err.to_string().contains("providers 'OpenAI': model cannot be empty"));
    }

    #[test]
    fn test_empty_panel_is_allowed_by_config() {
        let config: FileConfig = toml::from_str("providers = []\n").unwrap();
        let panel = config.to_panel_config().unwrap();
        assert!(panel.providers().is_empty());
    }
}
