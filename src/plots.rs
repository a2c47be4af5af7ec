//! Distribution plots for every column of a [`Table`].
//!
//! Numeric columns get a histogram; text and boolean columns a bar chart of
//! their most frequent values. Images land in one directory, numeric columns first, then
//! text columns, each group in table order.

pub mod charts;
pub mod histogram;
pub mod naming;

use crate::config::{ImageConfig, ProfileConfig};
use crate::error::{Result, ResultExt as _};
use crate::summary::stats::top_values;
use crate::table::{Column, Table};
use charts::{BarChart, HistogramChart, render_to_file};
use histogram::compute_bins;
use naming::FileNames;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct PlotRenderer {
    pub bins: usize,
    pub max_categories: usize,
    pub image: ImageConfig,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self::from_config(&ProfileConfig::default())
    }
}

impl PlotRenderer {
    pub fn from_config(config: &ProfileConfig) -> Self {
        Self {
            bins: config.histogram_bins,
            max_categories: config.max_categories,
            image: config.image.clone(),
        }
    }

    /// Renders one image per column that has at least one present value.
    ///
    /// A column that fails to render is logged and skipped; the others are
    /// still written.
    ///
    /// # Errors
    ///
    /// Returns error only if `out_dir` cannot be created.
    pub fn render_all(&self, table: &Table, out_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create image directory {}", out_dir.display()))?;

        let mut names = FileNames::default();
        let mut written = Vec::new();

        let (text, numeric): (Vec<&Column>, Vec<&Column>) =
            table.columns().iter().partition(|c| c.values.is_categorical());

        for column in numeric {
            let values = column.values.present_numbers();
            if values.is_empty() {
                tracing::debug!("Skipping histogram for '{}': no values", column.name);
                continue;
            }
            let chart = HistogramChart {
                title: column.name.clone(),
                bins: compute_bins(&values, self.bins),
            };
            let file = names.claim(&column.name, "hist", self.image.format.extension());
            written.extend(self.write(&chart, &column.name, out_dir.join(file)));
        }

        for column in text {
            let top = top_values(column.values.present_text(), self.max_categories);
            if top.is_empty() {
                tracing::debug!("Skipping bar chart for '{}': no values", column.name);
                continue;
            }
            let chart = BarChart {
                title: column.name.clone(),
                bars: top.into_iter().collect(),
            };
            let file = names.claim(&column.name, "bar", self.image.format.extension());
            written.extend(self.write(&chart, &column.name, out_dir.join(file)));
        }

        tracing::info!("Rendered {} plots into {}", written.len(), out_dir.display());
        Ok(written)
    }

    fn write<C: charts::Chart>(&self, chart: &C, column: &str, path: PathBuf) -> Option<PathBuf> {
        match render_to_file(chart, &path, &self.image) {
            Ok(()) => {
                tracing::debug!("Wrote {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::warn!("Skipping plot for column '{column}': {e}");
                // no half-written image may outlive a failed render
                std::fs::remove_file(&path).ok();
                None
            }
        }
    }
}
