// relay-confgen - Reference configuration generator for relay
// Copyright (c) 2025 Relay Contributors
// Licensed under the MIT License

use clap::Parser;
use relay_confgen::cli::Cli;
use relay_confgen::config::load_from_env;
use relay_confgen::domain::ConfgenError;
use relay_confgen::log_error_with_context;
use relay_confgen::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %cli.dir.display(),
        "relay-confgen - Reference configuration generator for relay"
    );

    let exit_code = match cli.execute(&config) {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(format!("{e:#}"), "Generation failed");
            eprintln!("Error: {e:#}");
            e.downcast_ref::<ConfgenError>()
                .map(ConfgenError::exit_code)
                .unwrap_or(5)
        }
    };

    process::exit(exit_code);
}
