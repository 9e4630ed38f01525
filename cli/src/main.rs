//! CLI entrypoint for llm-panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use panel_application::{ProcessQueryUseCase, ProviderRegistry};
use panel_domain::Question;
use panel_infrastructure::{ConfigLoader, EnvCredentialStore, FileConfig, HttpLlmGateway};
use panel_presentation::{Cli, ConsoleFormatter, OutputFormat, OutputFormatter, ProgressReporter};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = load_config(&cli)?;
    if !file_config.output.color {
        colored::control::set_override(false);
    }

    let panel_config = file_config
        .to_panel_config()
        .context("Failed to build provider panel from configuration")?;

    // === Dependency Injection ===
    let credentials = Arc::new(EnvCredentialStore);
    let registry = ProviderRegistry::new(panel_config, credentials.clone());

    if cli.list_providers {
        print!("{}", ConsoleFormatter::format_provider_list(&registry));
        return Ok(());
    }

    let question = match cli.query.as_deref() {
        Some(q) => Question::try_new(q)?,
        None => bail!("A query is required. Use --list-providers to inspect the panel."),
    };

    let behavior = file_config.http.to_behavior_config();
    let gateway = Arc::new(HttpLlmGateway::new(credentials, &behavior)?);
    let use_case = ProcessQueryUseCase::new(gateway, &registry)?;

    info!(
        "Querying {} provider(s), judge: {}",
        use_case.providers_used().len(),
        use_case.judge_name()
    );

    let started = Instant::now();
    let session = if cli.quiet {
        use_case.process_query(question.content()).await
    } else {
        let progress = ProgressReporter::new();
        use_case
            .process_query_with_progress(question.content(), &progress)
            .await
    };

    let elapsed = started.elapsed();

    let formatter: &dyn OutputFormatter = &ConsoleFormatter;
    match cli.output_format(file_config.output.format) {
        OutputFormat::Full => {
            println!("{}", formatter.format(&session));
            println!("{}", formatter.format_elapsed(elapsed));
        }
        OutputFormat::Final => println!("{}", formatter.format_final_only(&session)),
        OutputFormat::Json => println!("{}", formatter.format_json(&session)),
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    Ok(config)
}
