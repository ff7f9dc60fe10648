//! # Level Filter
//!
//! The allow/deny predicate over a severity scale.
//!
//! A filter holds one flag per rank. Modifiers are applied at configuration
//! time and the filter is then queried per event with [`LevelFilter::allows`].
//!
//! ## Composition Rules
//!
//! | Modifier | Effect |
//! |----------|--------|
//! | `exactly(s)` | sets the flag of `s`; never clears anything |
//! | `greater_than(s)` | allowed ranks `<= s` become suppressed |
//! | `greater_or_equal(s)` | allowed ranks `< s` become suppressed |
//! | `less_than(s)` | allowed ranks `>= s` become suppressed |
//! | `less_or_equal(s)` | allowed ranks `> s` become suppressed |
//!
//! Directional modifiers only look at ranks that are currently allowed, so
//! chaining them intersects, while repeated `exactly` calls union. A severity
//! that does not resolve on the scale turns any modifier into a no-op.

use crate::primitives::MODIFIER_SEPARATOR;
use crate::seed::LevelSeed;
use crate::severity::{SeverityId, SeverityScale};
use crate::HollerError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// LEVEL FILTER
// =============================================================================

/// Per-rank allow flags over a shared severity scale.
///
/// `flags.len() == scale.len()` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    scale: Arc<SeverityScale>,
    flags: Vec<bool>,
}

impl LevelFilter {
    /// Filter over the standard scale with every severity allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scale(SeverityScale::standard())
    }

    /// Filter over `scale` with every severity allowed.
    #[must_use]
    pub fn with_scale(scale: Arc<SeverityScale>) -> Self {
        let flags = vec![true; scale.len()];
        Self { scale, flags }
    }

    /// Filter over the standard scale, constrained by `seed`.
    ///
    /// A `&str` seed is a single severity name; seed text (`"info..error"`,
    /// `"debug,fatal"`) goes through `str::parse::<LevelSeed>()`.
    #[must_use]
    pub fn from_seed(seed: impl Into<LevelSeed>) -> Self {
        Self::with_seed(SeverityScale::standard(), seed)
    }

    /// Filter over `scale`, constrained by `seed`.
    #[must_use]
    pub fn with_seed(scale: Arc<SeverityScale>, seed: impl Into<LevelSeed>) -> Self {
        let seed: LevelSeed = seed.into();
        seed.apply(Self::with_scale(scale))
    }

    /// Allow exactly this severity, leaving every other rank as it is.
    #[must_use]
    pub fn exactly(mut self, severity: impl Into<SeverityId>) -> Self {
        if let Some(rank) = self.scale.rank_of(&severity.into()) {
            self.flags[rank] = true;
        }
        self
    }

    /// Keep only allowed ranks strictly above `severity`.
    #[must_use]
    pub fn greater_than(self, severity: impl Into<SeverityId>) -> Self {
        self.narrow(&severity.into(), |rank, threshold| rank > threshold)
    }

    /// Keep only allowed ranks at or above `severity`.
    #[must_use]
    pub fn greater_or_equal(self, severity: impl Into<SeverityId>) -> Self {
        self.narrow(&severity.into(), |rank, threshold| rank >= threshold)
    }

    /// Keep only allowed ranks strictly below `severity`.
    #[must_use]
    pub fn less_than(self, severity: impl Into<SeverityId>) -> Self {
        self.narrow(&severity.into(), |rank, threshold| rank < threshold)
    }

    /// Keep only allowed ranks at or below `severity`.
    #[must_use]
    pub fn less_or_equal(self, severity: impl Into<SeverityId>) -> Self {
        self.narrow(&severity.into(), |rank, threshold| rank <= threshold)
    }

    /// Apply a modifier described as data.
    #[must_use]
    pub fn apply(self, modifier: &LevelModifier) -> Self {
        let severity = &modifier.severity;
        match modifier.op {
            Modifier::Exactly => self.exactly(severity),
            Modifier::GreaterThan => self.greater_than(severity),
            Modifier::GreaterOrEqual => self.greater_or_equal(severity),
            Modifier::LessThan => self.less_than(severity),
            Modifier::LessOrEqual => self.less_or_equal(severity),
        }
    }

    /// Apply every modifier in order.
    #[must_use]
    pub fn apply_all<'a>(self, modifiers: impl IntoIterator<Item = &'a LevelModifier>) -> Self {
        modifiers
            .into_iter()
            .fold(self, |filter, modifier| filter.apply(modifier))
    }

    /// Whether an event at `severity` should be processed.
    ///
    /// False when the severity does not resolve on the scale.
    #[must_use]
    pub fn allows(&self, severity: impl Into<SeverityId>) -> bool {
        self.scale
            .rank_of(&severity.into())
            .is_some_and(|rank| self.flags[rank])
    }

    /// Rank-only query for hot paths that already hold a rank.
    #[must_use]
    pub fn allows_rank(&self, rank: usize) -> bool {
        self.flags.get(rank).copied().unwrap_or(false)
    }

    /// Ranks currently allowed, ascending.
    pub fn allowed_ranks(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(rank, allowed)| allowed.then_some(rank))
    }

    /// Names of the severities currently allowed, ascending.
    pub fn allowed_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.allowed_ranks()
            .filter_map(|rank| self.scale.name_of(rank))
    }

    /// True when nothing is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|allowed| *allowed)
    }

    /// The scale this filter is defined over.
    #[must_use]
    pub fn scale(&self) -> &Arc<SeverityScale> {
        &self.scale
    }

    /// Suppress every rank. Used by list seeds before their `exactly` calls.
    pub(crate) fn suppress_all(mut self) -> Self {
        self.flags.iter_mut().for_each(|allowed| *allowed = false);
        self
    }

    fn narrow(mut self, severity: &SeverityId, keep: impl Fn(usize, usize) -> bool) -> Self {
        let Some(threshold) = self.scale.rank_of(severity) else {
            return self;
        };

        for (rank, allowed) in self.flags.iter_mut().enumerate() {
            if *allowed {
                *allowed = keep(rank, threshold);
            }
        }
        self
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.allowed_names().collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

// =============================================================================
// MODIFIERS AS DATA
// =============================================================================

/// The five directional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Exactly,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl Modifier {
    /// Short operator used in text form.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Modifier::Exactly => "at",
            Modifier::GreaterThan => "gt",
            Modifier::GreaterOrEqual => "gte",
            Modifier::LessThan => "lt",
            Modifier::LessOrEqual => "lte",
        }
    }
}

impl FromStr for Modifier {
    type Err = HollerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "at" | "eq" => Ok(Modifier::Exactly),
            "gt" => Ok(Modifier::GreaterThan),
            "gte" => Ok(Modifier::GreaterOrEqual),
            "lt" => Ok(Modifier::LessThan),
            "lte" => Ok(Modifier::LessOrEqual),
            other => Err(HollerError::InvalidModifier(format!(
                "unknown operator '{}'",
                other
            ))),
        }
    }
}

/// A modifier bound to the severity it is relative to, e.g. `gte:info`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelModifier {
    pub op: Modifier,
    pub severity: SeverityId,
}

impl LevelModifier {
    #[must_use]
    pub fn new(op: Modifier, severity: impl Into<SeverityId>) -> Self {
        Self {
            op,
            severity: severity.into(),
        }
    }
}

impl FromStr for LevelModifier {
    type Err = HollerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, severity) = s
            .split_once(MODIFIER_SEPARATOR)
            .ok_or_else(|| HollerError::InvalidModifier(format!("expected op:severity, got '{}'", s)))?;

        if severity.trim().is_empty() {
            return Err(HollerError::InvalidModifier(format!(
                "missing severity in '{}'",
                s
            )));
        }

        Ok(Self {
            op: op.parse()?,
            severity: SeverityId::parse(severity),
        })
    }
}

impl<'de> serde::Deserialize<'de> for LevelModifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for LevelModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.op.symbol(), MODIFIER_SEPARATOR, self.severity)
    }
}

// =============================================================================
// TESTS
// =============================================================================
