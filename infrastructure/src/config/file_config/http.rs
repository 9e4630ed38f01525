//! HTTP configuration from TOML (`[http]` section)

use panel_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Per-request timeout; 0 disables it
    pub timeout_seconds: u64,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 60,
        }
    }
}

impl FileHttpConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(Some(self.timeout_seconds))
    }
}
