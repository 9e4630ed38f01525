//! Use cases (application services)
//!
//! - [`process_query`]: the panel engine: fan-out, then judge merge
//! - [`query_all`]: concurrent fan-out over enabled providers
//! - [`judge_merge`]: judge evaluation with fallback
//! - [`provider_client`]: one provider's call converted into an outcome

pub mod judge_merge;
pub mod process_query;
pub mod provider_client;
pub mod query_all;

#[cfg(test)]
pub(crate) mod test_support;
