//! Output configuration from TOML (`[output]` section)

use panel_domain::OutputFormat;
use serde::{Deserialize, Serialize};

pub use panel_domain::OutputFormat as FileOutputFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format; the CLI flag takes precedence when given
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
