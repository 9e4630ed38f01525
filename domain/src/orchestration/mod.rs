//! Panel orchestration domain
//!
//! Value objects and pure policies for a single panel query: per-provider
//! outcomes, the rendered report handed to the judge, the judge fallback
//! rule, and the session returned to callers.

pub mod aggregator;
pub mod entities;
pub mod fallback;
pub mod outcome;
pub mod session;
