//! CLI entrypoint for gravestone
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use gravestone_application::LookupLifespanUseCase;
use gravestone_domain::{OutputFormat, TieBreak, ZoneShift};
use gravestone_infrastructure::{ConfigLoader, ReqwestJsonTransport};
use gravestone_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::sync::Arc;
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
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    let issues = file_config.validate();
    for issue in &issues {
        warn!("{}", issue.message);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue.message);
    }

    ConsoleFormatter::set_color(file_config.output.color);

    // CLI flags take precedence over file settings
    let mut lookup_config = file_config.to_lookup_config();
    if cli.no_zone_shift {
        lookup_config = lookup_config.with_zone_shift(ZoneShift::None);
    }
    if cli.preferred_rank {
        lookup_config = lookup_config.with_claim_selection(TieBreak::PreferredRank);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(file_config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let transport = Arc::new(ReqwestJsonTransport::new(file_config.timeout())?);
    let use_case = LookupLifespanUseCase::new(transport, lookup_config);

    let name = cli.joined_name();
    info!("Looking up {}", name);

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(&name).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&name, &progress).await?
    };

    // Output results
    let output = match (result, format) {
        (Some(lifespan), OutputFormat::Text) => ConsoleFormatter::format_text(&lifespan),
        (Some(lifespan), OutputFormat::Json) => ConsoleFormatter::format_json(&lifespan),
        (None, OutputFormat::Text) => ConsoleFormatter::format_not_found(&name),
        (None, OutputFormat::Json) => ConsoleFormatter::format_not_found_json(&name),
    };

    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
