//! Error types for parsing, merging and writing log files.
use std::path::{Path, PathBuf};

/// Errors that can occur while merging log files.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A section matched the timestamp pattern but is not a valid date/time.
    #[error("malformed timestamp '{text}'{}", describe_path(.path))]
    MalformedTimestamp {
        text: String,
        path: Option<PathBuf>,
        #[source]
        source: chrono::ParseError,
    },

    /// Reading an input or writing the output failed.
    #[error("I/O error{}: {source}", describe_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// The path list does not name at least one input and one output.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("the specified input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("the output log file directory '{}' does not exist", .0.display())]
    OutputDirectoryNotFound(PathBuf),
}

impl MergeError {
    /// Wraps an I/O error together with the file it concerns.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Attaches a file path to errors that were raised without one.
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            Self::MalformedTimestamp {
                text,
                path: None,
                source,
            } => Self::MalformedTimestamp {
                text,
                path: Some(file.to_path_buf()),
                source,
            },
            Self::Io { path: None, source } => Self::Io {
                path: Some(file.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
