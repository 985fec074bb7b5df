//! Vigil CLI Binary
//!
//! Command-line interface for the vigil file integrity engine.

use clap::Parser;
use std::process;
use tracing::{error, info};
use vigil::cli::{Cli, RunContext};
use vigil::config::VigilConfig;
use vigil::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(2);
    }

    info!("Vigil CLI starting");

    let context = match RunContext::new(cli.root.clone(), cli.baseline.clone(), cli.config.clone())
    {
        Ok(ctx) => {
            info!("Engine context initialized");
            ctx
        }
        Err(e) => {
            error!("Error initializing engine: {}", e);
            eprintln!("{}", vigil::cli::map_error(&e));
            process::exit(2);
        }
    };

    match context.execute(&cli.command) {
        Ok(outcome) => {
            info!("Command completed");
            println!("{}", outcome.output);
            process::exit(outcome.exit_code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", vigil::cli::map_error(&e));
            process::exit(2);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = VigilConfig::load(cli.config.as_deref())
        .ok()
        .map(|c| c.logging)
        .unwrap_or_default();

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
