//! Infrastructure layer for llm-panel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP provider clients, credential stores,
//! and configuration file loading.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileHttpConfig,
    FileOutputConfig, FileOutputFormat, FileProviderConfig,
};
pub use credentials::{EnvCredentialStore, StaticCredentialStore};
pub use providers::HttpLlmGateway;
