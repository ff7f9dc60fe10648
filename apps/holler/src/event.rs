//! # Log Events
//!
//! A log event is a severity plus a message. Events read from text carry
//! their severity as the first token of the line (`WARN disk almost full`,
//! `[error] boom`, `info: started`). Lines without a recognisable token are
//! `UNKNOWN` and keep their full text as the message.

use holler_core::Severity;
use std::fmt;

/// A single log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub severity: Severity,
    pub message: String,
}

impl Event {
    /// Create a new event.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Read an event from one line of text.
    pub fn parse_line(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (token, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        let name = token.trim_start_matches('[').trim_end_matches([']', ':', ',']);

        match name.parse::<Severity>() {
            Ok(severity) => Self::new(severity, rest.trim_start()),
            Err(_) => Self::new(Severity::Unknown, line),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7} {}", self.severity.name(), self.message)
    }
}
