//! Console output formatter for panel sessions

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use panel_application::{ProviderRegistry, ProviderStatus};
use panel_domain::QuerySession;
use std::time::Duration;

/// Formats panel sessions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete session
    pub fn format(session: &QuerySession) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("LLM Panel Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Query:".cyan().bold(),
            session.query
        ));

        output.push_str(&format!(
            "{} {}\n",
            "Providers:".cyan().bold(),
            session.providers_used.join(", ")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Judge:".cyan().bold(),
            session.judge_name
        ));

        // Phase 1: Provider answers
        output.push_str(&Self::section_header(&format!(
            "Phase 1: Provider Answers ({} ok, {} failed)",
            session.outcomes.success_count(),
            session.outcomes.failure_count()
        )));
        for outcome in &session.outcomes {
            match outcome.error() {
                None => output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", outcome.provider_name()).yellow().bold(),
                    outcome.text()
                )),
                Some(error) => output.push_str(&format!(
                    "\n{}\nError: {}\n",
                    format!("── {} ──", outcome.provider_name()).red().bold(),
                    error
                )),
            }
        }

        // Phase 2: Judge
        output.push_str(&Self::section_header("Phase 2: Final Response"));
        output.push_str(&format!(
            "\n{}\n\n{}\n",
            format!("Judge: {}", session.judge_name).yellow().bold(),
            session.final_response
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(session: &QuerySession) -> String {
        serde_json::to_string_pretty(session).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final response only (concise output)
    pub fn format_final_only(session: &QuerySession) -> String {
        let mut output = session.final_response.clone();
        output.push('\n');
        output
    }

    /// Format the wall-clock time a query took
    pub fn format_elapsed(elapsed: Duration) -> String {
        format!(
            "{} {:.2} seconds",
            "Query completed in".dimmed(),
            elapsed.as_secs_f64()
        )
    }

    /// Format the configured providers with their status
    pub fn format_provider_list(registry: &ProviderRegistry) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Providers:".cyan().bold()));

        for (provider, status) in registry.provider_statuses() {
            output.push_str(&format!(
                "  {} {:<12} {} / {}\n",
                Self::status_marker(status),
                provider.name(),
                provider.family().display_name(),
                provider.model()
            ));
            if status == ProviderStatus::MissingCredential {
                output.push_str(&format!(
                    "      {}\n",
                    format!("set {} to enable", provider.credential_ref()).dimmed()
                ));
            }
        }

        let judge = registry.config().judge();
        let judge_status = registry.status_of(judge);
        output.push_str(&format!(
            "\n{} {} ({} / {}) {}\n",
            "Judge:".cyan().bold(),
            judge.name(),
            judge.family().display_name(),
            judge.model(),
            Self::status_label(judge_status)
        ));

        output
    }

    fn status_marker(status: ProviderStatus) -> String {
        match status {
            ProviderStatus::Enabled => "v".green().to_string(),
            ProviderStatus::Disabled => "-".dimmed().to_string(),
            ProviderStatus::MissingCredential => "x".red().to_string(),
        }
    }

    fn status_label(status: ProviderStatus) -> String {
        let label = format!("[{}]", status.as_str());
        match status {
            ProviderStatus::Enabled => label.green().to_string(),
            ProviderStatus::Disabled => label.dimmed().to_string(),
            ProviderStatus::MissingCredential => label.red().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, session: &QuerySession) -> String {
        Self::format(session)
    }

    fn format_json(&self, session: &QuerySession) -> String {
        Self::format_json(session)
    }

    fn format_final_only(&self, session: &QuerySession) -> String {
        Self::format_final_only(session)
    }

    fn format_elapsed(&self, elapsed: Duration) -> String {
        Self::format_elapsed(elapsed)
    }
}
