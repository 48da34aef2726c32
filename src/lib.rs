//! Merge timestamped log files into one chronologically ordered log.
//!
//! Each input is split on a fixed `YYYY-MM-DD HH:MM:SS.mmm` timestamp
//! pattern, the text after every timestamp becomes that entry's message, and
//! entries from all inputs are merged by timestamp. Entries sharing a
//! timestamp keep their arrival order: earlier files first, then file order.
pub mod app;
pub mod builder;
pub mod config;
pub mod entry;
pub mod error;
pub mod merge;
pub mod segment;
pub mod writer;

pub use entry::{LogEntry, TimestampStyle};
pub use error::{MergeError, MergeResult};
pub use merge::{InsertionMerge, MergePlan, MergeReport, MergeStrategy, SortMerge, StrategyKind};
