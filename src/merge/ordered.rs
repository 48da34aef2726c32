//! A sequence of entries that stays sorted by timestamp as it grows.
use crate::entry::LogEntry;

/// Entries kept in non-decreasing timestamp order.
///
/// An inserted entry is placed before the first entry with a strictly later
/// timestamp, so entries sharing a timestamp stay in arrival order.
#[derive(Debug, Default)]
pub struct OrderedEntries {
    entries: Vec<LogEntry>,
}

impl OrderedEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `entry` after every entry whose timestamp is not later than its own.
    pub fn insert(&mut self, entry: LogEntry) {
        // Fast path for already-sorted input.
        if self
            .entries
            .last()
            .map_or(true, |last| last.timestamp <= entry.timestamp)
        {
            self.entries.push(entry);
            return;
        }

        let at = self
            .entries
            .partition_point(|existing| existing.timestamp <= entry.timestamp);
        self.entries.insert(at, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<LogEntry> {
        self.entries
    }
}

impl Extend<LogEntry> for OrderedEntries {
    fn extend<I: IntoIterator<Item = LogEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn messages(ordered: &OrderedEntries) -> Vec<&str> {
        ordered.as_slice().iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn first_insert_goes_in_as_is() {
        let mut ordered = OrderedEntries::new();
        assert!(ordered.is_empty());
        ordered.insert(LogEntry::new(at(5), "only"));
        assert_eq!(ordered.len(), 1);
    }

    #[test]
    fn earlier_entry_lands_before_later_ones() {
        let mut ordered = OrderedEntries::new();
        ordered.insert(LogEntry::new(at(10), "first"));
        ordered.insert(LogEntry::new(at(12), "third"));
        ordered.insert(LogEntry::new(at(11), "second"));
        ordered.insert(LogEntry::new(at(9), "zeroth"));

        assert_eq!(messages(&ordered), ["zeroth", "first", "second", "third"]);
    }

    #[test]
    fn equal_timestamps_keep_arrival_order() {
        let mut ordered = OrderedEntries::new();
        ordered.insert(LogEntry::new(at(10), "a"));
        ordered.insert(LogEntry::new(at(12), "late"));
        ordered.insert(LogEntry::new(at(10), "b"));
        ordered.insert(LogEntry::new(at(10), "c"));

        assert_eq!(messages(&ordered), ["a", "b", "c", "late"]);
    }

    #[test]
    fn stays_sorted_after_every_insert() {
        let hours = [7, 3, 3, 9, 1, 7, 0, 12, 3];
        let mut ordered = OrderedEntries::new();
        for (i, h) in hours.into_iter().enumerate() {
            ordered.insert(LogEntry::new(at(h), i.to_string()));
            assert!(ordered
                .as_slice()
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp));
        }
        assert_eq!(ordered.len(), hours.len());
    }
}
