//! The main entry point for the log-merge application.
use anyhow::Result;

/// The main function of the application.
///
/// Parses the command line, merges the given log files and writes the
/// result.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, an input cannot be read or
/// parsed, or the output cannot be written. No output file is produced in
/// any of these cases.
#[tokio::main]
async fn main() -> Result<()> {
    log_merge::app::launch().await
}
