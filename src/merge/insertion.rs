//! Merges entries by inserting each one into an always-sorted sequence.
use super::{MergeStrategy, OrderedEntries};
use crate::entry::LogEntry;
use async_trait::async_trait;
use tracing::debug;

/// Inserts entries one at a time, file by file, into `OrderedEntries`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionMerge;

#[async_trait]
impl MergeStrategy for InsertionMerge {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn merge_and_sort(&self, per_file: Vec<Vec<LogEntry>>) -> Vec<LogEntry> {
        let total = per_file.iter().map(Vec::len).sum();
        let mut ordered = OrderedEntries::with_capacity(total);

        for (index, entries) in per_file.into_iter().enumerate() {
            let count = entries.len();
            ordered.extend(entries);
            debug!(file = index, entries = count, merged = ordered.len(), "inserted file entries");
        }

        ordered.into_vec()
    }
}
