//! Writes merged entries to the output file.
use crate::entry::{LogEntry, TimestampStyle};
use crate::error::{MergeError, MergeResult};
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

/// Renders one entry as an output line, without the line terminator.
pub fn render_line(entry: &LogEntry, style: TimestampStyle) -> String {
    entry.display(style).to_string()
}

/// Renders every entry, one per line, each terminated by `\n`.
pub fn render_entries(entries: &[LogEntry], style: TimestampStyle) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&render_line(entry, style));
        out.push('\n');
    }
    out
}

/// Writes `entries` to `output`, replacing whatever was there.
///
/// Lines are written to a uniquely named temporary file next to `output`,
/// which is only renamed into place once everything has been flushed to disk.
/// The temporary file is removed on every failure path.
///
/// # Errors
///
/// Returns `MergeError::Io` if the temporary file cannot be written or renamed.
/// The destination is left untouched in that case.
pub async fn write_entries(
    output: &Path,
    entries: &[LogEntry],
    style: TimestampStyle,
) -> MergeResult<()> {
    let tmp = temp_file_for(output).map_err(|e| MergeError::io(output, e))?;
    debug!(path = %tmp.path().display(), "writing to temporary output");

    let file = tmp
        .as_file()
        .try_clone()
        .map_err(|e| MergeError::io(output, e))?;
    write_lines(fs::File::from_std(file), entries, style)
        .await
        .map_err(|e| MergeError::io(output, e))?;

    tmp.persist(output)
        .map_err(|e| MergeError::io(output, e.error))?;

    debug!(path = %output.display(), lines = entries.len(), "output written");
    Ok(())
}

async fn write_lines(
    file: fs::File,
    entries: &[LogEntry],
    style: TimestampStyle,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(file);

    for entry in entries {
        writer.write_all(render_line(entry, style).as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    writer.into_inner().sync_all().await
}

/// Creates `.<name>.<random>.tmp` in the output's directory.
fn temp_file_for(output: &Path) -> std::io::Result<NamedTempFile> {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    tempfile::Builder::new()
        .prefix(&format!(".{name}."))
        .suffix(".tmp")
        .tempfile_in(dir)
}
