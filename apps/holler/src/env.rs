//! # Environment Detection
//!
//! Picks which section of a config file applies to the running process.

/// Variables consulted in order; the first non-empty one wins.
pub const ENVIRONMENT_VARIABLES: [&str; 2] = ["HOLLER_ENV", "APP_ENV"];

/// Environment used when no variable is set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Detect the current environment from the process environment.
pub fn detect_environment() -> String {
    detect_environment_with(|key| std::env::var(key).ok())
}

/// Detect the current environment through an injected variable lookup.
pub fn detect_environment_with(lookup: impl Fn(&str) -> Option<String>) -> String {
    ENVIRONMENT_VARIABLES
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}
