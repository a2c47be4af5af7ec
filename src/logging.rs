//! Logging infrastructure for dataprof.
//!
//! Console output always goes to stderr, so stdout only carries the final
//! report path. When a log directory is configured a second, daily-rotating
//! file layer is added.
//!
//! ## Usage
//!
//! ```no_run
//! use dataprof::logging::{self, LogOptions};
//!
//! // Initialize once at startup
//! logging::init(&LogOptions::default()).expect("Failed to initialize logging");
//!
//! tracing::info!("Profiling started");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Clone, Debug, Default)]
pub struct LogOptions {
    /// `-v` count minus `-q` count
    pub verbosity: i8,
    /// Rotating log file directory
    pub dir: Option<PathBuf>,
}

impl LogOptions {
    /// Default filter directive when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        match self.verbosity {
            i8::MIN..=-2 => "error",
            -1 => "warn",
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Initializes the global subscriber with a stderr layer and, optionally, a file layer.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the file appender fails
pub fn init(options: &LogOptions) -> Result<()> {
    // RUST_LOG wins over -v/-q
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(options.default_directive()))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = match &options.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(10)
                .filename_prefix("dataprof")
                .filename_suffix("log")
                .build(dir)
                .context("Failed to create log file appender")?;

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Logging already initialized")?;

    if let Some(dir) = &options.dir {
        tracing::debug!("Logging to {}", dir.display());
    }

    Ok(())
}
