//! Persistence for [`DatasetSummary`] documents.
//!
//! The summary is written as pretty-printed UTF-8 JSON and read back by the
//! report composer; the file on disk is the handoff between the two stages.

use crate::error::{Result, ResultExt as _};
use crate::summary::DatasetSummary;
use std::fs;
use std::path::Path;

/// File name of the summary document inside the output directory.
pub const SUMMARY_FILE: &str = "summary.json";

/// Write `summary` to `path`, creating missing parent directories.
///
/// Overwrites an existing file.
///
/// # Errors
///
/// Returns [`crate::error::ProfilerError::Io`] if the directory or file cannot be written.
pub fn save_summary(summary: &DatasetSummary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Summary written to {}", path.display());
    Ok(())
}

/// Read a summary document previously written by [`save_summary`].
///
/// # Errors
///
/// I/O error if the file cannot be read, parse error if it is not a summary document.
pub fn load_summary(path: &Path) -> Result<DatasetSummary> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read summary file: {}", path.display()))?;

    serde_json::from_str(&json).context("Failed to deserialize summary")
}
