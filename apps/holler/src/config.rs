//! # Configuration
//!
//! TOML configuration: one logger definition per environment.
//!
//! ```toml
//! [production]
//! name = "app"
//! level = "info"
//! modifiers = ["lt:unknown"]
//!
//! [[production.adapters]]
//! type = "stdout"
//! level = "info..error"
//!
//! [[production.adapters]]
//! type = "file"
//! path = "errors.log"
//! level = ["error", "fatal"]
//! format = "%d [%5L] %p : %m"
//! ```

use crate::adapter::{Adapter, StreamAdapter};
use crate::deprecation::deprecate;
use crate::format::Formatter;
use crate::logger::Logger;
use holler_core::{HollerError, LevelFilter, LevelModifier, LevelSeed};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Logger name used when a definition omits one.
pub const DEFAULT_LOGGER_NAME: &str = "default";

// =============================================================================
// CONFIG DOCUMENT
// =============================================================================

/// A parsed config file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    environments: BTreeMap<String, LoggerConfig>,
}

impl Config {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, HollerError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            HollerError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text)?;

        tracing::info!(
            path = %path.display(),
            environments = config.environments.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Parse a config document.
    pub fn from_toml_str(text: &str) -> Result<Self, HollerError> {
        let environments: BTreeMap<String, LoggerConfig> =
            toml::from_str(text).map_err(|e| HollerError::ConfigError(e.to_string()))?;
        Ok(Self { environments })
    }

    /// Logger definition for an environment.
    pub fn logger_for(&self, environment: &str) -> Result<&LoggerConfig, HollerError> {
        self.environments
            .get(environment)
            .ok_or_else(|| HollerError::UnknownEnvironment(environment.to_string()))
    }

    /// Environment names, sorted.
    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }
}

// =============================================================================
// LOGGER DEFINITION
// =============================================================================

/// Definition of one logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default = "default_logger_name")]
    pub name: String,
    #[serde(default)]
    pub level: LevelSeed,
    #[serde(default)]
    pub modifiers: Vec<LevelModifier>,
    #[serde(default)]
    pub adapters: Vec<AdapterConfig>,
}

fn default_logger_name() -> String {
    DEFAULT_LOGGER_NAME.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: default_logger_name(),
            level: LevelSeed::All,
            modifiers: Vec::new(),
            adapters: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// The logger's own filter: seed, then modifiers in order.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_seed(&self.level).apply_all(&self.modifiers)
    }

    /// Build the logger and open its adapters.
    ///
    /// A definition without adapters writes everything it accepts to stdout.
    pub fn build(&self) -> Result<Logger, HollerError> {
        let mut logger = Logger::new(self.name.clone(), self.level_filter());

        if self.adapters.is_empty() {
            logger = logger.with_adapter(AdapterConfig::stdout().build()?);
        }
        for adapter in &self.adapters {
            logger = logger.with_adapter(adapter.build()?);
        }

        tracing::debug!(
            logger = %self.name,
            level = %logger.level(),
            adapters = logger.adapter_count(),
            "logger built"
        );
        Ok(logger)
    }
}

// =============================================================================
// ADAPTER DEFINITION
// =============================================================================

/// Kind of output an adapter writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    Stdout,
    Stderr,
    File,
}

/// Definition of one adapter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    #[serde(rename = "type")]
    pub kind: Option<AdapterKind>,
    /// Deprecated spelling of `type`.
    pub adapter: Option<AdapterKind>,
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub level: LevelSeed,
    #[serde(default)]
    pub modifiers: Vec<LevelModifier>,
    /// Message pattern, see [`crate::format`].
    pub format: Option<String>,
    /// Date pattern used by `%d`.
    pub date_format: Option<String>,
}

impl AdapterConfig {
    /// Stdout adapter that allows everything.
    pub fn stdout() -> Self {
        Self {
            kind: Some(AdapterKind::Stdout),
            ..Self::default()
        }
    }

    /// Resolve the adapter kind, warning on the deprecated key.
    pub fn resolved_kind(&self) -> Result<AdapterKind, HollerError> {
        match (self.kind, self.adapter) {
            (Some(kind), _) => Ok(kind),
            (None, Some(kind)) => {
                deprecate(
                    "0.2.0",
                    "the `adapter` key is deprecated, use `type`",
                    Some("adapter = \"file\""),
                    Some("type = \"file\""),
                );
                Ok(kind)
            }
            (None, None) => Err(HollerError::ConfigError(
                "adapter definition needs a `type`".to_string(),
            )),
        }
    }

    /// The adapter's filter: seed, then modifiers in order.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_seed(&self.level).apply_all(&self.modifiers)
    }

    /// The adapter's message formatter.
    pub fn formatter(&self) -> Result<Formatter, HollerError> {
        match (&self.format, &self.date_format) {
            (None, None) => Ok(Formatter::default()),
            (pattern, date_pattern) => Formatter::new(
                pattern.as_deref().unwrap_or(crate::format::DEFAULT_PATTERN),
                date_pattern.as_deref(),
            ),
        }
    }

    /// Open the adapter.
    pub fn build(&self) -> Result<Box<dyn Adapter>, HollerError> {
        let level = self.level_filter();
        let formatter = self.formatter()?;

        let adapter: Box<dyn Adapter> = match self.resolved_kind()? {
            AdapterKind::Stdout => Box::new(
                StreamAdapter::new("stdout", level, std::io::stdout()).with_formatter(formatter),
            ),
            AdapterKind::Stderr => Box::new(
                StreamAdapter::new("stderr", level, std::io::stderr()).with_formatter(formatter),
            ),
            AdapterKind::File => {
                let path = self.path.as_ref().ok_or_else(|| {
                    HollerError::ConfigError("file adapter needs a `path`".to_string())
                })?;
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        HollerError::IoError(format!(
                            "Cannot open log file '{}': {}",
                            path.display(),
                            e
                        ))
                    })?;
                Box::new(
                    StreamAdapter::new(
                        path.display().to_string(),
                        level,
                        std::io::LineWriter::new(file),
                    )
                    .with_formatter(formatter),
                )
            }
        };
        Ok(adapter)
    }
}

// =============================================================================
// TESTS
// =============================================================================
