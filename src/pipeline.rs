//! One profiling run, from CSV file to HTML report.
//!
//! Stages run strictly in order and the first failing stage ends the run:
//!
//! ```text
//! load CSV ─> create outdir ─> summarize ─> summary.json ─> images/ ─> report.html
//! ```
//!
//! Outputs of an aborted run are left on disk as they are.
//!
//! # Example
//!
//! ```no_run
//! use dataprof::config::ProfileConfig;
//! use dataprof::pipeline::{RunOptions, run};
//!
//! let outputs = run(&RunOptions {
//!     input: "data.csv".into(),
//!     outdir: "results".into(),
//!     nrows: None,
//!     config: ProfileConfig::default(),
//! })?;
//! println!("Report saved: {}", outputs.report_path.display());
//! # Ok::<(), dataprof::error::ProfilerError>(())
//! ```

use crate::config::ProfileConfig;
use crate::error::{Result, ResultExt as _};
use crate::loader::load_table;
use crate::plots::PlotRenderer;
use crate::report::{REPORT_FILE, compose_report};
use crate::storage::{SUMMARY_FILE, save_summary};
use crate::summary::summarize_table;
use std::path::PathBuf;

/// Directory under the output directory that receives the plots.
pub const IMAGES_DIR: &str = "images";

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// CSV file to profile
    pub input: PathBuf,

    /// Output directory, created if missing
    pub outdir: PathBuf,

    /// Read at most this many data rows
    pub nrows: Option<usize>,

    pub config: ProfileConfig,
}

/// Files produced by a successful run.
#[derive(Clone, Debug)]
pub struct RunOutputs {
    pub summary_path: PathBuf,

    /// Numeric histograms first, then categorical bar charts
    pub image_paths: Vec<PathBuf>,

    pub report_path: PathBuf,
}

/// Runs every stage for `options.input`.
///
/// # Errors
///
/// Returns the error of the first stage that fails; see [`crate::error::ProfilerError`].
pub fn run(options: &RunOptions) -> Result<RunOutputs> {
    let start = std::time::Instant::now();
    tracing::info!("Profiling {}", options.input.display());

    let table = load_table(&options.input, options.nrows)?;

    std::fs::create_dir_all(&options.outdir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.outdir.display()
        )
    })?;

    let summary = summarize_table(&table, options.config.top_n);
    let summary_path = options.outdir.join(SUMMARY_FILE);
    save_summary(&summary, &summary_path)?;

    let renderer = PlotRenderer::from_config(&options.config);
    let image_paths = renderer.render_all(&table, &options.outdir.join(IMAGES_DIR))?;

    let report_path = compose_report(
        &summary_path,
        &image_paths,
        &options.outdir.join(REPORT_FILE),
    )?;

    tracing::info!(
        "Profiled {} columns in {:.2}s",
        summary.column_count(),
        start.elapsed().as_secs_f64()
    );

    Ok(RunOutputs {
        summary_path,
        image_paths,
        report_path,
    })
}
