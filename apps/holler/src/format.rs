//! # Message Patterns
//!
//! Turns an event into one line of output.
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%m` | message |
//! | `%L` | severity name (`WARN`) |
//! | `%l` | first letter of the severity (`W`) |
//! | `%d` | local time, rendered with the date pattern |
//! | `%p` | process id |
//! | `%%` | a literal `%` |
//!
//! A directive may carry a width: `%5L` pads on the left, `%-7L` on the right.

use crate::event::Event;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use holler_core::HollerError;

/// Pattern used when an adapter does not name one.
pub const DEFAULT_PATTERN: &str = "%-7L %m";

/// Date pattern used by `%d` when none is given (ISO 8601).
pub const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%:z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Message,
    Severity,
    SeverityLetter,
    Date,
    Pid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field {
        field: Field,
        width: usize,
        left_align: bool,
    },
}

/// A compiled message pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    pattern: String,
    date_pattern: String,
    segments: Vec<Segment>,
}

impl Formatter {
    /// Compile `pattern`, with `date_pattern` for `%d` (defaults to ISO 8601).
    pub fn new(pattern: &str, date_pattern: Option<&str>) -> Result<Self, HollerError> {
        let date_pattern = date_pattern.unwrap_or(DEFAULT_DATE_PATTERN);
        if StrftimeItems::new(date_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(HollerError::ConfigError(format!(
                "invalid date pattern '{}'",
                date_pattern
            )));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            date_pattern: date_pattern.to_string(),
            segments: compile(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render an event stamped with the current local time.
    pub fn format(&self, event: &Event) -> String {
        self.format_at(event, &Local::now())
    }

    /// Render an event stamped with `time`.
    pub fn format_at(&self, event: &Event, time: &DateTime<Local>) -> String {
        let mut line = String::new();

        for segment in &self.segments {
            let (field, width, left_align) = match segment {
                Segment::Literal(text) => {
                    line.push_str(text);
                    continue;
                }
                Segment::Field {
                    field,
                    width,
                    left_align,
                } => (*field, *width, *left_align),
            };

            let value = match field {
                Field::Message => event.message.clone(),
                Field::Severity => event.severity.name().to_string(),
                Field::SeverityLetter => event.severity.name().chars().take(1).collect(),
                Field::Date => time.format(&self.date_pattern).to_string(),
                Field::Pid => std::process::id().to_string(),
            };

            if left_align {
                line.push_str(&format!("{:<width$}", value));
            } else {
                line.push_str(&format!("{:>width$}", value));
            }
        }
        line
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
            segments: vec![
                Segment::Field {
                    field: Field::Severity,
                    width: 7,
                    left_align: true,
                },
                Segment::Literal(" ".to_string()),
                Segment::Field {
                    field: Field::Message,
                    width: 0,
                    left_align: false,
                },
            ],
        }
    }
}

fn compile(pattern: &str) -> Result<Vec<Segment>, HollerError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }

        let left_align = chars.next_if_eq(&'-').is_some();
        let mut width = 0usize;
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            width = width
                .saturating_mul(10)
                .saturating_add(digit.to_digit(10).unwrap_or(0) as usize);
        }

        let field = match chars.next() {
            Some('%') if !left_align && width == 0 => {
                literal.push('%');
                continue;
            }
            Some('m') => Field::Message,
            Some('L') => Field::Severity,
            Some('l') => Field::SeverityLetter,
            Some('d') => Field::Date,
            Some('p') => Field::Pid,
            Some(other) => {
                return Err(HollerError::ConfigError(format!(
                    "unknown directive '%{}' in pattern '{}'",
                    other, pattern
                )));
            }
            None => {
                return Err(HollerError::ConfigError(format!(
                    "pattern '{}' ends inside a directive",
                    pattern
                )));
            }
        };

        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Field {
            field,
            width,
            left_align,
        });
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
