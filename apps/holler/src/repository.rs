//! # Logger Repository
//!
//! Named loggers, looked up by name and shared between callers.
//!
//! A repository is seeded with logger definitions from a [`Config`] and
//! builds each logger the first time it is asked for, so adapters of loggers
//! nobody uses are never opened. Loggers built elsewhere can be registered
//! directly with [`Repository::insert`].
//!
//! Logger names are global across environments. When several environments
//! define the same name, the active environment's definition wins, then the
//! first environment in name order.

use crate::config::{Config, LoggerConfig};
use crate::logger::Logger;
use holler_core::HollerError;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};

/// A logger shared through the repository.
pub type SharedLogger = Arc<Mutex<Logger>>;

#[derive(Debug, Default)]
pub struct Repository {
    definitions: BTreeMap<String, LoggerConfig>,
    loggers: RwLock<BTreeMap<String, SharedLogger>>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every logger definition in `config`, preferring `environment`.
    pub fn from_config(config: &Config, environment: &str) -> Self {
        let mut definitions = BTreeMap::new();

        if let Ok(active) = config.logger_for(environment) {
            definitions.insert(active.name.clone(), active.clone());
        }
        for name in config.environments() {
            let Ok(definition) = config.logger_for(name) else {
                continue;
            };
            if definitions.contains_key(&definition.name) {
                tracing::debug!(
                    logger = %definition.name,
                    environment = name,
                    "logger name already defined, skipping"
                );
                continue;
            }
            definitions.insert(definition.name.clone(), definition.clone());
        }

        Self {
            definitions,
            loggers: RwLock::new(BTreeMap::new()),
        }
    }

    /// The definition registered under `name`, if any.
    pub fn definition(&self, name: &str) -> Result<&LoggerConfig, HollerError> {
        self.definitions
            .get(name)
            .ok_or_else(|| HollerError::LoggerNotFound(name.to_string()))
    }

    /// Register `logger` under `name`, returning the logger it replaces.
    pub fn insert(&self, name: impl Into<String>, logger: Logger) -> Option<SharedLogger> {
        self.loggers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.into(), Arc::new(Mutex::new(logger)))
    }

    /// Register `logger` under its own name.
    pub fn register(&self, logger: Logger) -> Option<SharedLogger> {
        let name = logger.name().to_string();
        self.insert(name, logger)
    }

    /// The logger registered under `name`, building it from its definition
    /// on first use.
    pub fn get(&self, name: &str) -> Result<SharedLogger, HollerError> {
        if let Some(logger) = self
            .loggers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
        {
            return Ok(Arc::clone(logger));
        }

        let definition = self.definition(name)?;
        let mut loggers = self.loggers.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have built it between the two locks.
        if let Some(logger) = loggers.get(name) {
            return Ok(Arc::clone(logger));
        }

        let logger = Arc::new(Mutex::new(definition.build()?));
        tracing::debug!(logger = name, "logger built on first lookup");
        loggers.insert(name.to_string(), Arc::clone(&logger));
        Ok(logger)
    }

    /// Whether `name` is registered or defined.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
            || self
                .loggers
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .contains_key(name)
    }

    /// Every known logger name, sorted.
    pub fn names(&self) -> Vec<String> {
        let loggers = self.loggers.read().unwrap_or_else(|e| e.into_inner());
        let mut names: Vec<String> = self
            .definitions
            .keys()
            .chain(loggers.keys())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
