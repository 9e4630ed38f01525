//! Orchestration domain entities

use serde::{Deserialize, Serialize};

/// Phase of a panel query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Every enabled provider answers the query concurrently
    FanOut,
    /// The judge evaluates and merges the collected answers
    Judge,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::FanOut => "fan_out",
            Phase::Judge => "judge",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::FanOut => "Provider Fan-out",
            Phase::Judge => "Judge Merge",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::FanOut.as_str(), "fan_out");
        assert_eq!(Phase::Judge.to_string(), "Judge Merge");
    }
}
