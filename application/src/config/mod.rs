//! Application-level configuration.
//!
//! - [`BehaviorConfig`]: runtime behavior of provider clients (timeouts)
//! - [`ProviderRegistry`]: configured providers resolved against credentials

pub mod behavior;
pub mod registry;

pub use behavior::BehaviorConfig;
pub use registry::{ProviderRegistry, ProviderStatus};
