//! Splits raw log text into alternating timestamp and body sections.
use once_cell::sync::Lazy;
use regex::Regex;

const TIMESTAMP_PATTERN: &str =
    r"[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}";

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is a valid regex")
});

static WHOLE_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{TIMESTAMP_PATTERN}$")).expect("timestamp pattern is a valid regex")
});

/// A contiguous slice of the input, tagged by whether it is a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    Timestamp(&'a str),
    Body(&'a str),
}

impl<'a> Section<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Section::Timestamp(text) | Section::Body(text) => text,
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Section::Timestamp(_))
    }
}

/// Returns true when `text` is exactly one timestamp and nothing else.
pub fn is_timestamp(text: &str) -> bool {
    WHOLE_TIMESTAMP.is_match(text)
}

/// Splits `text` on every timestamp match.
///
/// The result always starts and ends with a `Body` section and alternates in
/// between, so two adjacent timestamps are separated by an empty body.
/// Concatenating every section reproduces `text` exactly.
pub fn split_sections(text: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut last = 0;

    for found in TIMESTAMP.find_iter(text) {
        sections.push(Section::Body(&text[last..found.start()]));
        sections.push(Section::Timestamp(found.as_str()));
        last = found.end();
    }
    sections.push(Section::Body(&text[last..]));

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_bodies_alternate_with_timestamps() {
        let text = "header\n2023-01-01 10:00:00.000 first\n2023-01-01 12:00:00.000 third\n";
        let sections = split_sections(text);

        assert_eq!(
            sections,
            vec![
                Section::Body("header\n"),
                Section::Timestamp("2023-01-01 10:00:00.000"),
                Section::Body(" first\n"),
                Section::Timestamp("2023-01-01 12:00:00.000"),
                Section::Body(" third\n"),
            ]
        );
    }

    #[test]
    fn adjacent_timestamps_keep_an_empty_body_between_them() {
        let sections = split_sections("2023-01-01 10:00:00.0002023-01-01 10:00:01.000");

        assert_eq!(
            sections,
            vec![
                Section::Body(""),
                Section::Timestamp("2023-01-01 10:00:00.000"),
                Section::Body(""),
                Section::Timestamp("2023-01-01 10:00:01.000"),
                Section::Body(""),
            ]
        );
    }

    #[test]
    fn no_characters_are_lost() {
        let text = "x 2023-01-01 10:00:00.000 a\n\n2024-02-29 23:59:59.999 multi\nline\ntrailer";
        let joined: String = split_sections(text).iter().map(Section::as_str).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn text_without_timestamps_is_one_body() {
        assert_eq!(
            split_sections("no dates here"),
            vec![Section::Body("no dates here")]
        );
        assert_eq!(split_sections(""), vec![Section::Body("")]);
    }

    #[test]
    fn short_fields_do_not_match() {
        assert!(split_sections("2023-1-01 10:00:00.000").iter().all(|s| !s.is_timestamp()));
        assert!(!is_timestamp("2023-01-01 10:00:00.00"));
        assert!(!is_timestamp(" 2023-01-01 10:00:00.000"));
        assert!(is_timestamp("2023-01-01 10:00:00.000"));
    }
}
