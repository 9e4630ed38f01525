//! Configuration file loading for llm-panel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LLM_PANEL_*` environment variables (`__` separates nested keys)
//! 2. `--config <path>` specified file
//! 3. Project root: `./panel.toml` or `./.panel.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/llm-panel/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, ConfigValidationError, FileConfig, FileHttpConfig, FileOutputConfig,
    FileOutputFormat, FileProviderConfig,
};
pub use loader::ConfigLoader;
