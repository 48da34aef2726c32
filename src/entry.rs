//! This module defines the structure for a single merged log entry.
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used both to parse input timestamps and to render padded output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// How a timestamp is written back out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimestampStyle {
    /// `2023-01-05 09:03:02.005`, the same shape as the input pattern.
    #[default]
    Padded,
    /// `2023-1-5 9:3:2.5`, every field printed as a bare number.
    Compact,
}

/// Represents a single log entry with its timestamp and message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The moment the entry was logged, to millisecond precision.
    pub timestamp: NaiveDateTime,
    /// Everything between this entry's timestamp and the next one.
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// Returns a value that renders this entry as a single output line.
    pub fn display(&self, style: TimestampStyle) -> RenderedEntry<'_> {
        RenderedEntry { entry: self, style }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display(TimestampStyle::default()).fmt(f)
    }
}

/// A `LogEntry` paired with the timestamp style used to print it.
pub struct RenderedEntry<'a> {
    entry: &'a LogEntry,
    style: TimestampStyle,
}

impl fmt::Display for RenderedEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = &self.entry.timestamp;
        match self.style {
            TimestampStyle::Padded => write!(f, "{}", ts.format(TIMESTAMP_FORMAT))?,
            TimestampStyle::Compact => {
                // chrono stores a leap second as second 59 with nanos >= 1s.
                let (second, nanos) = match ts.nanosecond() {
                    n if n >= 1_000_000_000 => (ts.second() + 1, n - 1_000_000_000),
                    n => (ts.second(), n),
                };
                write!(
                    f,
                    "{}-{}-{} {}:{}:{}.{}",
                    ts.year(),
                    ts.month(),
                    ts.day(),
                    ts.hour(),
                    ts.minute(),
                    second,
                    nanos / 1_000_000
                )?
            }
        }
        write!(f, " {}", self.entry.message.trim())
    }
}
