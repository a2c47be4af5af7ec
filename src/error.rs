//! Centralized error handling for dataprof.
//!
//! Every stage of a profiling run reports failures through [`ProfilerError`].
//! The variants follow the stages that can fail:
//!
//! | Variant    | Raised by                                          |
//! |------------|----------------------------------------------------|
//! | `File`     | the loader, when the input path is missing/unreadable |
//! | `Parse`    | the loader (malformed CSV) or the summary read-back |
//! | `Io`       | any output write, directory creation or copy       |
//! | `Render`   | the plotting backend                               |
//! | `Config`   | configuration loading and validation               |
//!
//! ## Conversions
//!
//! `From` is implemented for the error types of the libraries we call, so
//! the `?` operator works without explicit mapping:
//!
//! ```no_run
//! use dataprof::error::Result;
//! use std::fs;
//!
//! fn read_summary(path: &str) -> Result<String> {
//!     // std::io::Error automatically converts to ProfilerError::Io
//!     let content = fs::read_to_string(path)?;
//!     Ok(content)
//! }
//! ```
//!
//! ## Context Extension Trait
//!
//! [`ResultExt`] adds `.context()` to any `Result` whose error converts into
//! [`ProfilerError`]:
//!
//! ```no_run
//! use dataprof::error::ResultExt as _;
//! use std::fs;
//!
//! fn write_report(html: &str) -> dataprof::error::Result<()> {
//!     fs::write("report.html", html).context("Failed to write report")?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::path::Path;

/// Main error type for profiling operations.
#[derive(Debug)]
pub enum ProfilerError {
    /// I/O errors while writing outputs (files, directories, copies)
    Io(std::io::Error),

    /// Input file missing or unreadable
    File(String),

    /// Malformed delimited text or malformed summary document
    Parse(String),

    /// Plotting backend failure
    Render(String),

    /// Invalid configuration
    Config(String),

    /// Generic error with context
    Other(String),
}

impl ProfilerError {
    /// Builds a [`ProfilerError::File`] for `path`, keeping the OS reason.
    pub fn file(path: &Path, err: &std::io::Error) -> Self {
        Self::File(format!("{}: {err}", path.display()))
    }
}

impl fmt::Display for ProfilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::File(msg) => write!(f, "Cannot read input file {msg}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ProfilerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProfilerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for ProfilerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for ProfilerError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::Parse(format!("JSON error: {err}"))
        }
    }
}

impl From<polars::error::PolarsError> for ProfilerError {
    fn from(err: polars::error::PolarsError) -> Self {
        match err {
            // reading the input failed, as opposed to its content being malformed
            polars::error::PolarsError::IO { error, .. } => Self::File(error.to_string()),
            other => Self::Parse(other.to_string()),
        }
    }
}

/// Result type alias for dataprof operations.
pub type Result<T> = std::result::Result<T, ProfilerError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ProfilerError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(msg.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

/// Prefixes `msg` while keeping the variant, so callers can still tell an
/// I/O failure from a parse failure after context was added.
fn wrap(msg: String, err: ProfilerError) -> ProfilerError {
    match err {
        ProfilerError::Io(e) => ProfilerError::Io(std::io::Error::new(e.kind(), format!("{msg}: {e}"))),
        ProfilerError::File(m) => ProfilerError::File(format!("{m} ({msg})")),
        ProfilerError::Parse(m) => ProfilerError::Parse(format!("{msg}: {m}")),
        ProfilerError::Render(m) => ProfilerError::Render(format!("{msg}: {m}")),
        ProfilerError::Config(m) => ProfilerError::Config(format!("{msg}: {m}")),
        ProfilerError::Other(m) => ProfilerError::Other(format!("{msg}: {m}")),
    }
}
