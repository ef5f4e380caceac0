//! Clinview CLI Binary
//!
//! Command-line interface for browsing patients, visit forms, and visit summaries.

use clap::Parser;
use clinview::cli::{Cli, RunContext};
use clinview::config::{ClinviewConfig, ConfigLoader};
use clinview::error::ApiError;
use clinview::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", clinview::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Build logging config from CLI args on top of the loaded config
    let logging_config = build_logging_config(&cli, config.logging.clone());

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(api = %config.api.base_url, "Clinview CLI starting");

    let context = match RunContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing session store: {}", e);
            eprintln!("{}", clinview::cli::map_error(&e));
            process::exit(1);
        }
    };
    let context = if cli.no_color {
        context.with_color(false)
    } else {
        context
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", clinview::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load layered config; `--api-url` wins over every other source.
fn load_config(cli: &Cli) -> Result<ClinviewConfig, ApiError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(ref url) = cli.api_url {
        config.api.base_url = url.clone();
        config = config.validated()?;
    }
    Ok(config)
}

/// Apply CLI logging flags on top of the configured logging section.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
        // Keep verbose output visible when logs otherwise go only to a file.
        if config.output == "file" {
            config.output = "file+stderr".to_string();
        }
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if cli.no_color {
        config.color = false;
    }

    if config.enabled && config.uses_file() {
        let resolved =
            clinview::logging::resolve_log_file_path(cli.log_file.clone(), config.file.clone());
        if let Ok(path) = resolved {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
