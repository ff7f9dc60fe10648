//! # holler-core
//!
//! The severity-level filter for Holler - THE LOGIC.
//!
//! This crate decides, for a logger or an adapter, whether an event at a
//! given severity should be processed at all. It owns:
//! - the ordered severity scale and name/rank resolution (`severity`)
//! - the per-rank allow flags and their directional modifiers (`level`)
//! - the seeds a filter is built from, in code and in config text (`seed`)
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Performs no I/O and formats nothing
//! - Never fails on a bad severity; it resolves to nothing and the filter
//!   either ignores it (modifiers) or rejects it (`allows`)
//! - Is configured once and then shared read-only across threads
//!
//! ## Example
//!
//! ```
//! use holler_core::{LevelFilter, Severity};
//!
//! let filter = LevelFilter::new()
//!     .greater_or_equal(Severity::Info)
//!     .less_or_equal("error");
//!
//! assert!(filter.allows("warn"));
//! assert!(!filter.allows(Severity::Fatal));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod error;
pub mod level;
pub mod primitives;
pub mod seed;
pub mod severity;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::HollerError;
pub use level::{LevelFilter, LevelModifier, Modifier};
pub use seed::LevelSeed;
pub use severity::{Severity, SeverityId, SeverityScale};

/// Shortcut for [`LevelFilter::from_seed`] on the standard scale.
///
/// A `&str` is taken as one severity name. Parse seed text such as
/// `"info..error"` or `"debug,fatal"` with `str::parse::<LevelSeed>()` first.
#[must_use]
pub fn level(seed: impl Into<LevelSeed>) -> LevelFilter {
    LevelFilter::from_seed(seed)
}
