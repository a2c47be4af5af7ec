//! Chart drawing, independent of the output backend.
//!
//! Each chart draws into a [`DrawingArea`] handed to it by
//! [`render_to_file`], which owns the backend for exactly one image: it is
//! created, drawn into and presented inside that call and dropped on return,
//! whether drawing succeeded or not.

use super::histogram::Bin;
use crate::config::{ImageConfig, ImageFormat};
use crate::error::{ProfilerError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use std::sync::OnceLock;

const TITLE_FONT: (&str, u32) = ("sans-serif", 20);

static SANS_SERIF: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Registers the bundled font under the family name every chart uses.
fn ensure_fonts() -> Result<()> {
    static REGISTERED: OnceLock<std::result::Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            plotters::style::register_font(
                "sans-serif",
                plotters::style::FontStyle::Normal,
                SANS_SERIF,
            )
            .map_err(|_| "invalid font data".to_owned())
        })
        .clone()
        .map_err(|e| ProfilerError::Render(format!("Failed to load chart font: {e}")))
}

/// Something that can be drawn onto any plotters backend.
pub trait Chart {
    /// # Errors
    ///
    /// [`ProfilerError::Render`] if the backend rejects a drawing operation.
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>;
}

fn render_error<E: std::fmt::Display>(err: E) -> ProfilerError {
    ProfilerError::Render(err.to_string())
}

/// Draws `chart` into a fresh image at `path`.
///
/// # Errors
///
/// [`ProfilerError::Render`] if drawing or encoding the image fails.
pub fn render_to_file<C: Chart>(chart: &C, path: &Path, image: &ImageConfig) -> Result<()> {
    ensure_fonts()?;
    let size = (image.width, image.height);
    match image.format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            chart.draw(&root)?;
            root.present().map_err(render_error)
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            chart.draw(&root)?;
            root.present().map_err(render_error)
        }
    }
}

/// Histogram of a numeric column.
#[derive(Clone, Debug)]
pub struct HistogramChart {
    pub title: String,
    pub bins: Vec<Bin>,
}

impl Chart for HistogramChart {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let (Some(first), Some(last)) = (self.bins.first(), self.bins.last()) else {
            return Err(ProfilerError::Render(format!("'{}' has no bins", self.title)));
        };
        let y_max = self.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);

        root.fill(&WHITE).map_err(render_error)?;
        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, TITLE_FONT)
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(first.start..last.end, 0u32..y_max + y_max / 10 + 1)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("count")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(self.bins.iter().map(|b| {
                let mut bar = Rectangle::new([(b.start, 0), (b.end, b.count)], BLUE.mix(0.7).filled());
                bar.set_margin(0, 0, 1, 1);
                bar
            }))
            .map_err(render_error)?;

        Ok(())
    }
}

/// Bar chart of the most frequent values of a text column.
#[derive(Clone, Debug)]
pub struct BarChart {
    pub title: String,
    /// `(label, count)` in the order the bars are drawn
    pub bars: Vec<(String, usize)>,
}

impl Chart for BarChart {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        if self.bars.is_empty() {
            return Err(ProfilerError::Render(format!("'{}' has no bars", self.title)));
        }
        let n = self.bars.len() as u32;
        let y_max = self.bars.iter().map(|(_, c)| *c as u32).max().unwrap_or(0).max(1);
        let label_of = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => self
                .bars
                .get(*i as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            SegmentValue::Exact(_) | SegmentValue::Last => String::new(),
        };

        root.fill(&WHITE).map_err(render_error)?;
        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, TITLE_FONT)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max + y_max / 10 + 1)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(self.bars.len())
            .x_label_formatter(&label_of)
            .y_desc("count")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.mix(0.7).filled())
                    .margin(6)
                    .data(self.bars.iter().enumerate().map(|(i, (_, c))| (i as u32, *c as u32))),
            )
            .map_err(render_error)?;

        Ok(())
    }
}
