//! Output formatter trait

use panel_domain::QuerySession;
use std::time::Duration;

/// Trait for formatting panel sessions
pub trait OutputFormatter {
    /// Format the complete session
    fn format(&self, session: &QuerySession) -> String;

    /// Format as JSON
    fn format_json(&self, session: &QuerySession) -> String;

    /// Format the final response only (concise output)
    fn format_final_only(&self, session: &QuerySession) -> String;

    /// Format the wall-clock time a query took
    fn format_elapsed(&self, elapsed: Duration) -> String;
}
