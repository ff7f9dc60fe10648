//! # Innate Primitives
//!
//! Hardcoded constants for the Holler CORE.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Names of the standard severities, lowest to highest urgency.
///
/// The position of a name in this table is its rank.
pub const STANDARD_SEVERITIES: [&str; 6] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL", "UNKNOWN"];

/// Separator between the low and high bound of a range seed (`info..error`).
pub const RANGE_SEPARATOR: &str = "..";

/// Separator between the entries of a list seed (`debug,fatal`).
pub const LIST_SEPARATOR: char = ',';

/// Separator between operator and severity in a modifier (`gte:info`).
pub const MODIFIER_SEPARATOR: char = ':';

/// Seed text that explicitly means "every severity allowed".
pub const ALL_KEYWORD: &str = "all";
