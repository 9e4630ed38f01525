//! Prompt domain
//!
//! Fixed instructions sent to providers and the judge evaluation template.

mod template;

pub use template::PromptTemplate;
