//! # Severity Scale
//!
//! The ordered, fixed list of severities and the lookup that resolves a
//! severity identifier (name or rank) to a rank.
//!
//! - Ranks are zero-based and follow declaration order
//! - Names are matched case-insensitively
//! - Resolution never fails loudly: an unknown name or an out-of-range rank
//!   resolves to `None`, and callers decide what that means

use crate::HollerError;
use crate::primitives::STANDARD_SEVERITIES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

// =============================================================================
// STANDARD SEVERITIES
// =============================================================================

/// The standard severities, lowest to highest urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Unknown,
}

impl Severity {
    /// Every standard severity in rank order.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Unknown,
    ];

    /// Zero-based rank on the standard scale.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Upper-case name as it appears on the standard scale.
    #[must_use]
    pub const fn name(self) -> &'static str {
        STANDARD_SEVERITIES[self as usize]
    }

    /// Severity at the given standard rank, if any.
    #[must_use]
    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = HollerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HollerError::InvalidSeed(format!("unknown severity '{}'", s)))
    }
}

// =============================================================================
// SEVERITY IDENTIFIER
// =============================================================================

/// A severity addressed by name, by rank, or as a typed standard severity.
///
/// Ranks are signed so that negative values coming from configuration can be
/// represented and then resolved to nothing, rather than rejected up front.
///
/// A typed [`Severity`] resolves by name, so on a custom scale it lands on the
/// entry of the same name (or nowhere), never on whatever shares its rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeverityId {
    /// Zero-based rank on the scale.
    Rank(i64),
    /// Case-insensitive severity name.
    Name(String),
    /// One of the standard severities.
    #[serde(skip_deserializing)]
    Standard(Severity),
}

impl SeverityId {
    /// Parse a token as a rank when it is an integer, otherwise as a name.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(rank) => Self::Rank(rank),
            Err(_) => Self::Name(token.to_string()),
        }
    }
}

impl From<Severity> for SeverityId {
    fn from(severity: Severity) -> Self {
        Self::Standard(severity)
    }
}

impl From<&str> for SeverityId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SeverityId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<i64> for SeverityId {
    fn from(rank: i64) -> Self {
        Self::Rank(rank)
    }
}

impl From<&SeverityId> for SeverityId {
    fn from(id: &SeverityId) -> Self {
        id.clone()
    }
}

impl fmt::Display for SeverityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "{}", rank),
            Self::Name(name) => f.write_str(name),
            Self::Standard(severity) => f.write_str(severity.name()),
        }
    }
}

// =============================================================================
// SEVERITY SCALE
// =============================================================================

static STANDARD: LazyLock<Arc<SeverityScale>> = LazyLock::new(|| {
    Arc::new(SeverityScale {
        names: STANDARD_SEVERITIES.iter().map(|s| s.to_string()).collect(),
    })
});

/// An immutable, ordered table of severity names.
///
/// The table is built once and shared between filters through `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityScale {
    names: Vec<String>,
}

impl SeverityScale {
    /// The process-wide standard scale (`DEBUG` .. `UNKNOWN`).
    #[must_use]
    pub fn standard() -> Arc<SeverityScale> {
        Arc::clone(&STANDARD)
    }

    /// Build a custom scale from names listed lowest to highest urgency.
    ///
    /// Names are stored upper-cased. Empty scales, blank names and
    /// case-insensitive duplicates are rejected.
    pub fn new<I, S>(names: I) -> Result<Self, HollerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim().to_ascii_uppercase();
            if name.is_empty() {
                return Err(HollerError::InvalidScale("blank severity name".to_string()));
            }
            if table.contains(&name) {
                return Err(HollerError::InvalidScale(format!(
                    "duplicate severity '{}'",
                    name
                )));
            }
            table.push(name);
        }

        if table.is_empty() {
            return Err(HollerError::InvalidScale("no severities".to_string()));
        }

        Ok(Self { names: table })
    }

    /// Number of severities on the scale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed scale; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at the given rank.
    #[must_use]
    pub fn name_of(&self, rank: usize) -> Option<&str> {
        self.names.get(rank).map(String::as_str)
    }

    /// Names in rank order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Resolve an identifier to a rank.
    ///
    /// Returns `None` for unknown names and for ranks outside `0..len`.
    #[must_use]
    pub fn rank_of(&self, id: &SeverityId) -> Option<usize> {
        match id {
            SeverityId::Rank(rank) => usize::try_from(*rank)
                .ok()
                .filter(|rank| *rank < self.names.len()),
            SeverityId::Name(name) => {
                let name = name.trim();
                self.names
                    .iter()
                    .position(|candidate| candidate.eq_ignore_ascii_case(name))
            }
            // Names are stored upper-cased; the standard scale matches at the standard rank.
            SeverityId::Standard(severity) => {
                let name = severity.name();
                match self.names.get(severity.rank()) {
                    Some(candidate) if candidate == name => Some(severity.rank()),
                    _ => self.names.iter().position(|candidate| candidate == name),
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
