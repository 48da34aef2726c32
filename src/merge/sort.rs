//! Merges entries by collecting everything and sorting once.
use super::MergeStrategy;
use crate::entry::LogEntry;
use async_trait::async_trait;

/// Concatenates all files in order, then applies one stable sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct SortMerge;

#[async_trait]
impl MergeStrategy for SortMerge {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn merge_and_sort(&self, per_file: Vec<Vec<LogEntry>>) -> Vec<LogEntry> {
        let mut merged: Vec<LogEntry> = per_file.into_iter().flatten().collect();
        // `sort_by_key` is stable, which keeps equal timestamps in arrival order.
        merged.sort_by_key(|entry| entry.timestamp);
        merged
    }
}
