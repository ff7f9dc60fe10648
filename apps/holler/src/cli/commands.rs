//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::{Config, LoggerConfig};
use crate::env::detect_environment;
use crate::logger::LogStats;
use crate::repository::Repository;
use holler_core::{HollerError, LevelFilter, LevelModifier, LevelSeed, SeverityScale};
use std::io::BufReader;
use std::path::Path;

// =============================================================================
// SEVERITIES COMMAND
// =============================================================================

/// List the severity scale.
pub fn cmd_severities(json_mode: bool) -> Result<(), HollerError> {
    let scale = SeverityScale::standard();

    if json_mode {
        let output: Vec<_> = scale
            .names()
            .enumerate()
            .map(|(rank, name)| serde_json::json!({ "rank": rank, "name": name }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Rank  Severity");
    println!("====  ========");
    for (rank, name) in scale.names().enumerate() {
        println!("{:>4}  {}", rank, name);
    }
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Build a filter from a seed and modifiers.
pub fn build_filter(seed: &LevelSeed, modifiers: &[LevelModifier]) -> LevelFilter {
    LevelFilter::from_seed(seed).apply_all(modifiers)
}

/// Show which severities a level expression allows.
pub fn cmd_check(
    seed: &LevelSeed,
    modifiers: &[LevelModifier],
    json_mode: bool,
) -> Result<(), HollerError> {
    let filter = build_filter(seed, modifiers);

    if json_mode {
        let output = serde_json::json!({
            "modifiers": modifiers.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
            "allowed": filter.allowed_names().collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    for (rank, name) in filter.scale().names().enumerate() {
        let mark = if filter.allows_rank(rank) { "allow" } else { "deny" };
        println!("{:<8} {}", name, mark);
    }
    println!();
    println!("Allowed: {}", filter);
    Ok(())
}

// =============================================================================
// FILTER COMMAND
// =============================================================================

/// Resolve the logger definition for a filter run.
///
/// Without a config file the default definition (everything to stdout) is
/// used. With `logger_name` the definition is looked up by name across the
/// config's environments, preferring the selected one. `level` replaces the
/// configured seed; `modifiers` are appended to the configured chain.
pub fn resolve_logger_config(
    config: Option<&Path>,
    env: Option<String>,
    logger_name: Option<&str>,
    level: Option<LevelSeed>,
    modifiers: Vec<LevelModifier>,
) -> Result<LoggerConfig, HollerError> {
    let mut logger = match (config, logger_name) {
        (Some(path), name) => {
            let environment = env.unwrap_or_else(detect_environment);
            tracing::debug!(environment = %environment, "selecting environment");
            let config = Config::load(path)?;
            match name {
                Some(name) => Repository::from_config(&config, &environment)
                    .definition(name)?
                    .clone(),
                None => config.logger_for(&environment)?.clone(),
            }
        }
        (None, Some(name)) => return Err(HollerError::LoggerNotFound(name.to_string())),
        (None, None) => LoggerConfig::default(),
    };

    if let Some(level) = level {
        logger.level = level;
    }
    logger.modifiers.extend(modifiers);
    Ok(logger)
}

/// Route log lines through the resolved logger.
#[allow(clippy::too_many_arguments)]
pub fn cmd_filter(
    config: Option<&Path>,
    env: Option<String>,
    logger_name: Option<String>,
    level: Option<LevelSeed>,
    modifiers: Vec<LevelModifier>,
    input: Option<&Path>,
    json_mode: bool,
    quiet: bool,
) -> Result<(), HollerError> {
    let mut logger =
        resolve_logger_config(config, env, logger_name.as_deref(), level, modifiers)?.build()?;

    let stats: LogStats = match input {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| {
                HollerError::IoError(format!("Cannot open input '{}': {}", path.display(), e))
            })?;
            logger.consume(BufReader::new(file))?
        }
        None => logger.consume(std::io::stdin().lock())?,
    };

    tracing::info!(
        logger = logger.name(),
        events = stats.events,
        accepted = stats.accepted,
        writes = stats.writes,
        "filter run complete"
    );

    if !quiet {
        if json_mode {
            eprintln!("{}", serde_json::to_string(&stats).unwrap_or_default());
        } else {
            eprintln!(
                "{} events, {} accepted by '{}', {} writes",
                stats.events,
                stats.accepted,
                logger.name(),
                stats.writes
            );
        }
    }
    Ok(())
}
