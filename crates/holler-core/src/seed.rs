//! # Level Seeds
//!
//! The initial constraint a filter is built from.
//!
//! | Seed | Text | Resulting filter |
//! |------|------|------------------|
//! | `All` | `""`, `all` | every severity |
//! | `Single(s)` | `warn`, `2` | `s` and above |
//! | `List(xs)` | `debug,fatal` | exactly the listed severities |
//! | `Range { low, high }` | `info..error` | `low` through `high`, inclusive |
//!
//! Seed text is strict about syntax and lenient about names: `info..` is an
//! error, `info..loud` is a valid range whose upper bound never resolves.

use crate::level::LevelFilter;
use crate::primitives::{ALL_KEYWORD, LIST_SEPARATOR, RANGE_SEPARATOR};
use crate::severity::{Severity, SeverityId};
use crate::HollerError;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Initial constraint for a [`LevelFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawSeed")]
pub enum LevelSeed {
    /// No constraint.
    #[default]
    All,
    /// This severity and everything above it.
    Single(SeverityId),
    /// Exactly these severities.
    List(Vec<SeverityId>),
    /// Inclusive range between two severities.
    Range { low: SeverityId, high: SeverityId },
}

impl LevelSeed {
    /// Apply this seed to a filter.
    #[must_use]
    pub fn apply(&self, filter: LevelFilter) -> LevelFilter {
        match self {
            LevelSeed::All => filter,
            LevelSeed::Single(severity) => filter.greater_or_equal(severity),
            LevelSeed::List(severities) => severities
                .iter()
                .fold(filter.suppress_all(), |filter, severity| {
                    filter.exactly(severity)
                }),
            LevelSeed::Range { low, high } => filter.greater_or_equal(low).less_or_equal(high),
        }
    }
}

// =============================================================================
// TEXT FORM
// =============================================================================

impl FromStr for LevelSeed {
    type Err = HollerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if text.is_empty() || text.eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(LevelSeed::All);
        }

        if let Some((low, high)) = text.split_once(RANGE_SEPARATOR) {
            if low.trim().is_empty() || high.trim().is_empty() {
                return Err(HollerError::InvalidSeed(format!(
                    "range '{}' needs both bounds",
                    text
                )));
            }
            return Ok(LevelSeed::Range {
                low: SeverityId::parse(low),
                high: SeverityId::parse(high),
            });
        }

        if text.contains(LIST_SEPARATOR) {
            let severities = text
                .split(LIST_SEPARATOR)
                .map(|entry| {
                    if entry.trim().is_empty() {
                        Err(HollerError::InvalidSeed(format!(
                            "empty entry in list '{}'",
                            text
                        )))
                    } else {
                        Ok(SeverityId::parse(entry))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(LevelSeed::List(severities));
        }

        Ok(LevelSeed::Single(SeverityId::parse(text)))
    }
}

// =============================================================================
// CONFIG FORM
// =============================================================================

/// Shapes a seed may take in a config document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeed {
    Rank(i64),
    Text(String),
    List(Vec<SeverityId>),
    Range {
        #[serde(alias = "low")]
        from: SeverityId,
        #[serde(alias = "high")]
        to: SeverityId,
    },
}

impl TryFrom<RawSeed> for LevelSeed {
    type Error = HollerError;

    fn try_from(raw: RawSeed) -> Result<Self, Self::Error> {
        match raw {
            RawSeed::Rank(rank) => Ok(LevelSeed::Single(SeverityId::Rank(rank))),
            RawSeed::Text(text) => text.parse(),
            RawSeed::List(severities) => Ok(LevelSeed::List(severities)),
            RawSeed::Range { from, to } => Ok(LevelSeed::Range { low: from, high: to }),
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<SeverityId> for LevelSeed {
    fn from(severity: SeverityId) -> Self {
        LevelSeed::Single(severity)
    }
}

impl From<Severity> for LevelSeed {
    fn from(severity: Severity) -> Self {
        LevelSeed::Single(severity.into())
    }
}

/// One severity name, taken verbatim. Use [`FromStr`] for list and range text.
impl From<&str> for LevelSeed {
    fn from(name: &str) -> Self {
        LevelSeed::Single(name.into())
    }
}

impl From<i64> for LevelSeed {
    fn from(rank: i64) -> Self {
        LevelSeed::Single(rank.into())
    }
}

impl<S: Into<SeverityId>> From<Vec<S>> for LevelSeed {
    fn from(severities: Vec<S>) -> Self {
        LevelSeed::List(severities.into_iter().map(Into::into).collect())
    }
}

impl From<RangeInclusive<Severity>> for LevelSeed {
    fn from(range: RangeInclusive<Severity>) -> Self {
        let (low, high) = range.into_inner();
        LevelSeed::Range {
            low: low.into(),
            high: high.into(),
        }
    }
}

impl From<&LevelSeed> for LevelSeed {
    fn from(seed: &LevelSeed) -> Self {
        seed.clone()
    }
}

// =============================================================================
// TESTS
// =============================================================================
