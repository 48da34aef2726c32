//! Strategies for merging several log files into one time-ordered file.
//!
//! Every strategy runs the same four steps: work out the input and output
//! paths, parse each input into entries, merge the entries into one ordered
//! sequence, and write that sequence out. Only the merge step differs between
//! implementations.
pub mod insertion;
pub mod ordered;
pub mod sort;

pub use insertion::InsertionMerge;
pub use ordered::OrderedEntries;
pub use sort::SortMerge;

use crate::builder;
use crate::entry::{LogEntry, TimestampStyle};
use crate::error::{MergeError, MergeResult};
use crate::writer;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Where to read from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

impl MergePlan {
    /// Splits a path list into inputs and output: the last path is the output.
    ///
    /// # Errors
    ///
    /// Fails if fewer than two paths are given, if an input is not an
    /// existing file, or if the output's directory does not exist.
    pub fn from_paths(paths: &[PathBuf]) -> MergeResult<Self> {
        let Some((output, inputs)) = paths.split_last().filter(|(_, inputs)| !inputs.is_empty())
        else {
            return Err(MergeError::InvalidArguments(
                "expected at least one input log file followed by an output log file".into(),
            ));
        };

        for input in inputs {
            if !input.is_file() {
                return Err(MergeError::InputNotFound(input.clone()));
            }
        }

        let directory = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !directory.is_dir() {
            return Err(MergeError::OutputDirectoryNotFound(directory.to_path_buf()));
        }

        Ok(Self {
            inputs: inputs.to_vec(),
            output: output.clone(),
        })
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub files: usize,
    pub entries: usize,
    pub elapsed: Duration,
}

/// Reads one log file and parses it into entries, in file order.
///
/// # Errors
///
/// Returns `MergeError::Io` if the file cannot be read as UTF-8 text, or
/// `MergeError::MalformedTimestamp` naming this file.
pub async fn read_log_file(path: &Path) -> MergeResult<Vec<LogEntry>> {
    let started = Instant::now();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| MergeError::io(path, e))?;
    debug!(
        path = %path.display(),
        bytes = text.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "read log file into memory"
    );

    let started = Instant::now();
    let entries = builder::parse_log_text(&text).map_err(|e| e.in_file(path))?;
    debug!(
        path = %path.display(),
        entries = entries.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "parsed log entries"
    );

    Ok(entries)
}

/// A way of turning a list of log files into one merged, ordered file.
#[async_trait]
pub trait MergeStrategy: Send + Sync {
    /// Short name used in logs and on the command line.
    fn name(&self) -> &'static str;

    /// Interprets the path list as `input1 ... inputN output`.
    fn parse_inputs(&self, paths: &[PathBuf]) -> MergeResult<MergePlan> {
        MergePlan::from_paths(paths)
    }

    /// Parses each input file, in the order given.
    ///
    /// Files are processed one after another; the result holds one entry list
    /// per input.
    async fn parse_log_files(&self, inputs: &[PathBuf]) -> MergeResult<Vec<Vec<LogEntry>>> {
        let mut per_file = Vec::with_capacity(inputs.len());
        for path in inputs {
            let entries = read_log_file(path).await?;
            info!(path = %path.display(), entries = entries.len(), "parsed log file");
            per_file.push(entries);
        }
        Ok(per_file)
    }

    /// Combines per-file entries into one sequence ordered by timestamp.
    ///
    /// Entries with equal timestamps must come out in arrival order: earlier
    /// files first, then position within the file.
    fn merge_and_sort(&self, per_file: Vec<Vec<LogEntry>>) -> Vec<LogEntry>;

    /// Writes the merged sequence to `output`.
    async fn write_to_file(
        &self,
        output: &Path,
        entries: &[LogEntry],
        style: TimestampStyle,
    ) -> MergeResult<()> {
        writer::write_entries(output, entries, style).await
    }

    /// Runs all four steps. Nothing is written unless every input parsed.
    async fn run(&self, paths: &[PathBuf], style: TimestampStyle) -> MergeResult<MergeReport> {
        let started = Instant::now();
        let plan = self.parse_inputs(paths)?;
        debug!(strategy = self.name(), inputs = plan.inputs.len(), output = %plan.output.display(), "merge plan ready");

        let per_file = self.parse_log_files(&plan.inputs).await?;

        let merge_started = Instant::now();
        let merged = self.merge_and_sort(per_file);
        info!(
            strategy = self.name(),
            entries = merged.len(),
            elapsed_ms = merge_started.elapsed().as_millis() as u64,
            "merged log entries"
        );

        let write_started = Instant::now();
        self.write_to_file(&plan.output, &merged, style).await?;
        info!(
            path = %plan.output.display(),
            elapsed_ms = write_started.elapsed().as_millis() as u64,
            "wrote merged log"
        );

        Ok(MergeReport {
            files: plan.inputs.len(),
            entries: merged.len(),
            elapsed: started.elapsed(),
        })
    }
}

/// The merge strategies that can be picked at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Insert each entry into an always-sorted sequence as it is parsed.
    Insertion,
    /// Collect every entry, then sort once.
    #[default]
    Sort,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn MergeStrategy> {
        match self {
            StrategyKind::Insertion => Box::new(InsertionMerge),
            StrategyKind::Sort => Box::new(SortMerge),
        }
    }
}
