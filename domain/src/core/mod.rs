//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated query to pose to the panel
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: small text helpers

pub mod error;
pub mod question;
pub mod string;
