//! # dataprof - CSV profiling library
//!
//! dataprof reads one delimited text file and describes it: per-column
//! statistics saved as JSON, one distribution plot per column, and a static
//! HTML report that bundles both.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dataprof::loader::load_table;
//! use dataprof::summary::{DEFAULT_TOP_N, summarize_table};
//! use std::path::Path;
//!
//! let table = load_table(Path::new("data.csv"), None)?;
//! let summary = summarize_table(&table, DEFAULT_TOP_N);
//! println!("Dataset shape: {:?}", summary.shape);
//!
//! for col in &summary.columns {
//!     println!("{}: {} missing ({:.2}%)", col.name, col.n_missing, col.pct_missing * 100.0);
//! }
//! # Ok::<(), dataprof::error::ProfilerError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`loader`]: CSV file to [`table::Table`]
//! - [`summary`]: per-column statistics
//!   - [`summary::stats`]: numeric moments and top-N value counts
//! - [`storage`]: `summary.json` write and read-back
//! - [`plots`]: histograms and bar charts
//! - [`report`]: the HTML report
//! - [`pipeline`]: all of the above, in order
//! - [`config`], [`logging`], [`error`]: ambient plumbing
//!
//! ## Pipeline
//!
//! ```text
//! Loader ─> Summarizer ─> summary.json ─> Plot Renderer ─> Report Composer
//! ```
//!
//! The report composer reads the summary back from disk instead of taking it
//! from memory, so the report always matches the JSON next to it.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod plots;
pub mod report;
pub mod storage;
pub mod summary;
pub mod table;
