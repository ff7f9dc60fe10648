//! # Holler CLI Module
//!
//! This module implements the CLI interface for Holler.
//!
//! ## Available Commands
//!
//! - `severities` - List the severity scale
//! - `check` - Show which severities a level expression allows
//! - `filter` - Route log lines through a configured logger

mod commands;

use clap::{Parser, Subcommand};
use holler_core::{HollerError, LevelModifier, LevelSeed};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Holler - severity-filtered log routing
///
/// Build level filters from seeds and modifiers, and route log lines to the
/// outputs whose filters allow them.
#[derive(Parser, Debug)]
#[command(name = "holler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress the run summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the severity scale with ranks
    Severities,

    /// Show which severities a level expression allows
    Check {
        /// Level seed: all, a severity, a list (debug,fatal) or a range (info..error)
        #[arg(short, long, default_value = "all", value_parser = parse_seed)]
        level: LevelSeed,

        /// Modifier applied after the seed, e.g. lt:error (repeatable)
        #[arg(short = 'm', long = "modify")]
        modifiers: Vec<LevelModifier>,
    },

    /// Route log lines through a logger
    Filter {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Environment section of the config (defaults to HOLLER_ENV / APP_ENV)
        #[arg(short, long)]
        env: Option<String>,

        /// Pick a logger by name from any environment of the config
        #[arg(long)]
        logger: Option<String>,

        /// Override the logger's level seed
        #[arg(short, long, value_parser = parse_seed)]
        level: Option<LevelSeed>,

        /// Modifier appended to the logger's chain (repeatable)
        #[arg(short = 'm', long = "modify")]
        modifiers: Vec<LevelModifier>,

        /// Input file (stdin when omitted)
        input: Option<PathBuf>,
    },
}

/// Seed arguments go through the full text syntax, not the single-name shortcut.
fn parse_seed(text: &str) -> Result<LevelSeed, HollerError> {
    text.parse()
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), HollerError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Severities) | None => cmd_severities(json_mode),
        Some(Commands::Check { level, modifiers }) => cmd_check(&level, &modifiers, json_mode),
        Some(Commands::Filter {
            config,
            env,
            logger,
            level,
            modifiers,
            input,
        }) => cmd_filter(
            config.as_deref(),
            env,
            logger,
            level,
            modifiers,
            input.as_deref(),
            json_mode,
            cli.quiet,
        ),
    }
}
