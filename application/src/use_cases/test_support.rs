//! Scripted gateway and credential doubles shared by use case tests.

use crate::ports::credentials::CredentialStore;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmClient, LlmGateway};
use async_trait::async_trait;
use panel_domain::{PanelConfig, ProviderConfig, ProviderFamily};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What a scripted client does when asked to complete
#[derive(Clone)]
pub(crate) enum Script {
    Reply(String),
    Fail(GatewayError),
    Delayed(Duration, Box<Script>),
    Panic,
}

impl Script {
    pub(crate) fn reply(text: &str) -> Self {
        Script::Reply(text.to_string())
    }

    pub(crate) fn fail(message: &str) -> Self {
        Script::Fail(GatewayError::Other(message.to_string()))
    }

    pub(crate) fn delayed(ms: u64, inner: Script) -> Self {
        Script::Delayed(Duration::from_millis(ms), Box::new(inner))
    }
}

/// A recorded completion call: (provider name, prompt)
pub(crate) type CallLog = Arc<Mutex<Vec<(String, String)>>>;

struct ScriptedClient {
    provider: String,
    script: Script,
    calls: CallLog,
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((self.provider.clone(), request.prompt.clone()));

        let mut script = self.script.clone();
        loop {
            match script {
                Script::Reply(text) => return Ok(text),
                Script::Fail(err) => return Err(err),
                Script::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    script = *inner;
                }
                Script::Panic => panic!("client exploded"),
            }
        }
    }
}

/// Gateway returning scripted clients keyed by provider name.
///
/// Providers without a script reply `"<name> answer"`.
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    scripts: HashMap<String, Script>,
    unbuildable: HashSet<String>,
    builds: AtomicUsize,
    calls: CallLog,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, provider: &str, script: Script) -> Self {
        self.scripts.insert(provider.to_string(), script);
        self
    }

    pub(crate) fn unbuildable(mut self, provider: &str) -> Self {
        self.unbuildable.insert(provider.to_string());
        self
    }

    pub(crate) fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_to(&self, provider: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(p, _)| p == provider)
            .map(|(_, prompt)| prompt)
            .collect()
    }
}

impl LlmGateway for ScriptedGateway {
    fn client_for(&self, config: &ProviderConfig) -> Result<Arc<dyn LlmClient>, GatewayError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        if self.unbuildable.contains(config.name()) {
            return Err(GatewayError::CredentialMissing {
                provider: config.name().to_string(),
                credential_ref: config.credential_ref().to_string(),
            });
        }
        let script = self
            .scripts
            .get(config.name())
            .cloned()
            .unwrap_or_else(|| Script::Reply(format!("{} answer", config.name())));
        Ok(Arc::new(ScriptedClient {
            provider: config.name().to_string(),
            script,
            calls: Arc::clone(&self.calls),
        }))
    }
}

pub(crate) struct MapCredentials(pub(crate) HashMap<String, String>);

impl MapCredentials {
    pub(crate) fn with_keys(keys: &[&str]) -> Arc<dyn CredentialStore> {
        Arc::new(Self(
            keys.iter()
                .map(|k| (k.to_string(), format!("secret-{}", k)))
                .collect(),
        ))
    }
}

impl CredentialStore for MapCredentials {
    fn get(&self, credential_ref: &str) -> Option<String> {
        self.0.get(credential_ref).cloned()
    }
}

/// Provider named `name` whose credential reference is `KEY_<name>`
pub(crate) fn provider(name: &str) -> ProviderConfig {
    ProviderConfig::new(
        name,
        ProviderFamily::OpenAi,
        "gpt-4o",
        format!("KEY_{}", name),
    )
}

pub(crate) fn judge() -> ProviderConfig {
    ProviderConfig::new("Judge", ProviderFamily::Anthropic, "claude-3", "KEY_Judge")
        .with_temperature(0.3)
}

pub(crate) fn panel(names: &[&str]) -> PanelConfig {
    PanelConfig::new(names.iter().map(|n| provider(n)).collect(), judge()).unwrap()
}
