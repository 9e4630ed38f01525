//! Final-answer selection when the judge call itself fails.

use super::outcome::ProviderOutcomes;

/// Deterministic fallback rule applied after a judge error.
pub struct FallbackPolicy;

impl FallbackPolicy {
    /// Choose the final response given the judge's error message.
    ///
    /// Picks the first provider in registration order that produced answer
    /// text; if none did, reports the total failure.
    pub fn resolve(judge_error: &str, outcomes: &ProviderOutcomes) -> String {
        match outcomes.first_answer() {
            Some(best) => format!(
                "Judge LLM failed ({}). Best response from {}:\n\n{}",
                judge_error,
                best.provider_name(),
                best.text()
            ),
            None => format!("All LLMs failed or Judge LLM error: {}", judge_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestration::outcome::ProviderOutcome;

    #[test]
    fn picks_first_successful_provider() {
        let mut outcomes = ProviderOutcomes::new();
        outcomes.insert(ProviderOutcome::success("A", "foo")).unwrap();
        outcomes.insert(ProviderOutcome::failure("B", "boom")).unwrap();

        assert_eq!(
            FallbackPolicy::resolve("rate limited", &outcomes),
            "Judge LLM failed (rate limited). Best response from A:\n\nfoo"
        );
    }

    #[test]
    fn skips_failed_and_empty_outcomes() {
        let mut outcomes = ProviderOutcomes::new();
        outcomes.insert(ProviderOutcome::failure("A", "boom")).unwrap();
        outcomes.insert(ProviderOutcome::success("B", "")).unwrap();
        outcomes.insert(ProviderOutcome::success("C", "bar")).unwrap();

        assert_eq!(
            FallbackPolicy::resolve("x", &outcomes),
            "Judge LLM failed (x). Best response from C:\n\nbar"
        );
    }

    #[test]
    fn reports_total_failure() {
        let mut outcomes = ProviderOutcomes::new();
        outcomes.insert(ProviderOutcome::failure("A", "boom")).unwrap();
        outcomes.insert(ProviderOutcome::failure("B", "bust")).unwrap();

        assert_eq!(
            FallbackPolicy::resolve("down", &outcomes),
            "All LLMs failed or Judge LLM error: down"
        );
    }

    #[test]
    fn no_outcomes_is_total_failure() {
        assert_eq!(
            FallbackPolicy::resolve("down", &ProviderOutcomes::new()),
            "All LLMs failed or Judge LLM error: down"
        );
    }
}
