//! Per-column descriptive statistics.
//!
//! [`summarize_table`] walks the columns of a [`Table`] in order and produces
//! one [`ColumnSummary`] each:
//!
//! - missing count and missing fraction, for every column
//! - count / mean / std / min / max for numeric columns
//! - the top-N most frequent values for every other column
//!
//! The computation is pure; nothing here touches the filesystem.

pub mod stats;
pub mod types;

pub use stats::{numeric_stats, top_values};
pub use types::{ColumnStats, ColumnSummary, DatasetSummary, NumericStats, TopValues};

use crate::table::{Column, Table};

/// Default number of top values kept per non-numeric column.
pub const DEFAULT_TOP_N: usize = 5;

pub fn summarize_table(table: &Table, top_n: usize) -> DatasetSummary {
    let columns = table
        .columns()
        .iter()
        .map(|col| summarize_column(col, top_n))
        .collect();

    DatasetSummary {
        shape: table.shape(),
        columns,
    }
}

pub fn summarize_column(col: &Column, top_n: usize) -> ColumnSummary {
    let n_missing = col.values.null_count();
    let pct_missing = if col.values.is_empty() {
        0.0
    } else {
        n_missing as f64 / col.values.len() as f64
    };

    let stats = if col.values.is_numeric() {
        ColumnStats::Numeric(numeric_stats(&col.values.present_numbers()))
    } else {
        ColumnStats::Categorical {
            top: top_values(col.values.present_text(), top_n),
        }
    };

    tracing::debug!(
        "Summarised '{}': {n_missing} missing ({:.1}%)",
        col.name,
        pct_missing * 100.0
    );

    ColumnSummary {
        name: col.name.clone(),
        dtype: col.dtype.clone(),
        n_missing,
        pct_missing,
        stats,
    }
}
