//! # Error Types
//!
//! The level filter itself never fails: unresolvable severities are silent
//! no-ops. Errors only arise from parsing configuration text (seeds,
//! modifiers, scales, config files) and from the I/O performed by callers.

use thiserror::Error;

/// Errors that can occur in the Holler system.
///
/// - Filtering never produces an error
/// - Use `Result<T, HollerError>` for parsing and configuration
/// - The CORE should never panic; all errors must be recoverable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HollerError {
    /// A level seed could not be parsed (e.g. `info..`).
    #[error("Invalid level seed: {0}")]
    InvalidSeed(String),

    /// A modifier could not be parsed (e.g. `between:info`).
    #[error("Invalid level modifier: {0}")]
    InvalidModifier(String),

    /// A severity scale definition is unusable (empty or duplicate names).
    #[error("Invalid severity scale: {0}")]
    InvalidScale(String),

    /// A configuration document is malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The requested environment has no logger definition.
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    /// No logger is registered under the requested name.
    #[error("Logger not found: {0}")]
    LoggerNotFound(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}
