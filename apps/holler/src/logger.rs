//! # Logger
//!
//! A named logger with its own level filter and a set of adapters.
//!
//! An event reaches an adapter only when both the logger's filter and the
//! adapter's filter allow its severity. Dropped events are not errors.

use crate::adapter::Adapter;
use crate::event::Event;
use holler_core::{HollerError, LevelFilter, Severity};
use serde::Serialize;
use std::io::BufRead;

/// Counters from a run over many events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    /// Events seen.
    pub events: usize,
    /// Events that passed the logger's own filter.
    pub accepted: usize,
    /// Adapter writes performed.
    pub writes: usize,
}

pub struct Logger {
    name: String,
    level: LevelFilter,
    adapters: Vec<Box<dyn Adapter>>,
}

impl Logger {
    pub fn new(name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            name: name.into(),
            level,
            adapters: Vec::new(),
        }
    }

    /// Attach an adapter.
    #[must_use]
    pub fn with_adapter(mut self, adapter: Box<dyn Adapter>) -> Self {
        self.adapters.push(adapter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> &LevelFilter {
        &self.level
    }

    /// Number of attached adapters.
    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }

    /// Whether the logger's own filter lets `severity` through.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.level.allows(severity)
    }

    /// Dispatch one event. Returns the number of adapters written to.
    pub fn log(&mut self, event: &Event) -> Result<usize, HollerError> {
        if !self.enabled(event.severity) {
            tracing::debug!(
                logger = %self.name,
                severity = %event.severity,
                "event dropped by logger level"
            );
            return Ok(0);
        }

        let mut written = 0;
        for adapter in &mut self.adapters {
            if adapter.level().allows(event.severity) {
                adapter.write(event)?;
                written += 1;
            } else {
                tracing::trace!(
                    logger = %self.name,
                    adapter = adapter.name(),
                    severity = %event.severity,
                    "event dropped by adapter level"
                );
            }
        }
        Ok(written)
    }

    /// Read events line by line and dispatch each one.
    pub fn consume<R: BufRead>(&mut self, reader: R) -> Result<LogStats, HollerError> {
        let mut stats = LogStats::default();

        for line in reader.lines() {
            let line = line.map_err(|e| HollerError::IoError(format!("read failed: {}", e)))?;
            let event = Event::parse_line(&line);

            stats.events += 1;
            if self.enabled(event.severity) {
                stats.accepted += 1;
            }
            stats.writes += self.log(&event)?;
        }

        self.flush()?;
        Ok(stats)
    }

    /// Flush every adapter.
    pub fn flush(&mut self) -> Result<(), HollerError> {
        for adapter in &mut self.adapters {
            adapter.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level.to_string())
            .field(
                "adapters",
                &self.adapters.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
