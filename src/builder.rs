//! Turns segmented log text into `LogEntry` values.
use crate::entry::{LogEntry, TIMESTAMP_FORMAT};
use crate::error::{MergeError, MergeResult};
use crate::segment::{self, Section};
use chrono::NaiveDateTime;
use tracing::trace;

/// Parses a single timestamp section.
///
/// # Errors
///
/// Returns `MergeError::MalformedTimestamp` when the text has the right shape
/// but does not name a real date and time.
pub fn parse_timestamp(text: &str) -> MergeResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
        MergeError::MalformedTimestamp {
            text: text.to_string(),
            path: None,
            source,
        }
    })
}

/// Pairs every timestamp section with the body that follows it.
///
/// Bodies that do not follow a timestamp (a file header) are skipped. A
/// timestamp followed directly by another timestamp, or by nothing, gets an
/// empty message.
///
/// # Errors
///
/// Fails on the first timestamp that cannot be parsed; no entries are
/// returned in that case.
pub fn build_entries(sections: &[Section<'_>]) -> MergeResult<Vec<LogEntry>> {
    let mut entries = Vec::with_capacity(sections.len() / 2);
    let mut i = 0;

    while i < sections.len() {
        let Section::Timestamp(text) = sections[i] else {
            if entries.is_empty() && !sections[i].as_str().is_empty() {
                trace!(bytes = sections[i].as_str().len(), "skipping text before first timestamp");
            }
            i += 1;
            continue;
        };

        let timestamp = parse_timestamp(text)?;

        let message = match sections.get(i + 1) {
            Some(next) if !next.is_timestamp() && !segment::is_timestamp(next.as_str()) => {
                i += 1;
                next.as_str()
            }
            _ => "",
        };

        entries.push(LogEntry::new(timestamp, message));
        i += 1;
    }

    Ok(entries)
}

/// Segments `text` and builds its entries in file order.
pub fn parse_log_text(text: &str) -> MergeResult<Vec<LogEntry>> {
    build_entries(&segment::split_sections(text))
}
