//! Credential store adapters

use panel_application::CredentialStore;
use std::collections::HashMap;

/// Reads credentials from the process environment, keyed by variable name.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialStore;

impl CredentialStore for EnvCredentialStore {
    fn get(&self, credential_ref: &str) -> Option<String> {
        std::env::var(credential_ref).ok()
    }
}

/// In-memory credentials, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    values: HashMap<String, String>,
}

impl StaticCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn insert(&mut self, credential_ref: impl Into<String>, value: impl Into<String>) {
        self.values.insert(credential_ref.into(), value.into());
    }
}

impl CredentialStore for StaticCredentialStore {
    fn get(&self, credential_ref: &str) -> Option<String> {
        self.values.get(credential_ref).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_store_treats_blank_as_absent() {
        let mut store = StaticCredentialStore::from_pairs([("A", "key"), ("B", "   ")]);
        store.insert("C", "other");

        assert!(store.contains("A"));
        assert!(!store.contains("B"));
        assert!(store.contains("C"));
        assert!(!store.contains("D"));
        assert_eq!(store.get("B"), Some("   ".to_string()));
        assert_eq!(store.resolve("B"), None);
    }

    #[test]
    fn env_store_reads_process_environment() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LLM_PANEL_TEST_CREDENTIAL", "sk-test");
            assert_eq!(
                EnvCredentialStore.resolve("LLM_PANEL_TEST_CREDENTIAL"),
                Some("sk-test".to_string())
            );
            assert!(!EnvCredentialStore.contains("LLM_PANEL_TEST_UNSET_CREDENTIAL"));
            Ok(())
        });
    }
}
