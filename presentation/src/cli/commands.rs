//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for panel results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every provider's answer, then the judged response
    Full,
    /// Only the final response
    Final,
    /// JSON output
    Json,
}

impl From<panel_domain::OutputFormat> for OutputFormat {
    fn from(format: panel_domain::OutputFormat) -> Self {
        match format {
            panel_domain::OutputFormat::Full => OutputFormat::Full,
            panel_domain::OutputFormat::Final => OutputFormat::Final,
            panel_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for llm-panel
#[derive(Parser, Debug)]
#[command(name = "llm-panel")]
#[command(author, version, about = "Ask a panel of LLMs at once and let a judge merge the answers")]
#[command(long_about = r#"
llm-panel sends one query to several LLM providers concurrently and asks a
judge model to evaluate the answers and write one merged response.

The process has two phases:
1. Fan-out: every enabled provider answers the query in parallel
2. Judge: the judge evaluates the answers and produces the final response

If the judge fails, the first successful provider answer is used instead.

Configuration files are loaded from (in priority order):
1. LLM_PANEL_* environment variables
2. --config <path>     Explicit config file
3. ./panel.toml        Project-level config
4. ~/.config/llm-panel/config.toml   Global config

Example:
  llm-panel "What's the best way to handle errors in Rust?"
  llm-panel -o final "Summarize the CAP theorem"
  llm-panel --list-providers
"#)]
pub struct Cli {
    /// The query to send to the panel
    pub query: Option<String>,

    /// Output format (defaults to the config file's, then full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List configured providers with their status and exit
    #[arg(long)]
    pub list_providers: bool,
}

impl Cli {
    /// Effective output format: the flag, then the config file, then full
    pub fn output_format(&self, configured: Option<panel_domain::OutputFormat>) -> OutputFormat {
        self.output
            .or(configured.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Full)
    }
}
