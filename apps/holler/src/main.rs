//! # Holler
//!
//! Entry point for the Holler command-line logging filter.
//!
//! ## Usage
//!
//! ```bash
//! # Show what a level expression allows
//! holler check --level info --modify lt:fatal
//!
//! # Route a log file through the production logger
//! HOLLER_ENV=production holler filter --config holler.toml app.log
//! ```
//!
//! Diagnostics go to stderr; `HOLLER_LOG_FORMAT=json` switches them to JSON.

use clap::Parser;
use holler::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Stdout carries filtered log lines, so diagnostics stay on stderr.
    let log_format = std::env::var("HOLLER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "holler=debug"
    } else {
        "holler=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
