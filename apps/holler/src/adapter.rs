//! # Output Adapters
//!
//! An adapter owns a level filter and a destination. The logger asks each
//! adapter's filter before handing it an event.

use crate::event::Event;
use crate::format::Formatter;
use holler_core::{HollerError, LevelFilter};
use std::io::Write;

/// A destination for log events with its own level filter.
pub trait Adapter: Send {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// The filter that decides which events this adapter receives.
    fn level(&self) -> &LevelFilter;

    /// Write one event. Only called for events the filter allows.
    fn write(&mut self, event: &Event) -> Result<(), HollerError>;

    /// Flush buffered output.
    fn flush(&mut self) -> Result<(), HollerError>;
}

/// Adapter over any byte stream: stdout, stderr, a file, or a buffer.
pub struct StreamAdapter<W: Write + Send> {
    name: String,
    level: LevelFilter,
    formatter: Formatter,
    writer: W,
}

impl<W: Write + Send> StreamAdapter<W> {
    pub fn new(name: impl Into<String>, level: LevelFilter, writer: W) -> Self {
        Self {
            name: name.into(),
            level,
            formatter: Formatter::default(),
            writer,
        }
    }

    /// Replace the default `%-7L %m` pattern.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Consume the adapter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Adapter for StreamAdapter<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> &LevelFilter {
        &self.level
    }

    fn write(&mut self, event: &Event) -> Result<(), HollerError> {
        writeln!(self.writer, "{}", self.formatter.format(event))
            .map_err(|e| HollerError::IoError(format!("{}: {}", self.name, e)))
    }

    fn flush(&mut self) -> Result<(), HollerError> {
        self.writer
            .flush()
            .map_err(|e| HollerError::IoError(format!("{}: {}", self.name, e)))
    }
}
