//! Static HTML report.
//!
//! The report is built from the summary document on disk, not from the
//! in-memory summary, so it always shows exactly what `summary.json` holds.
//! Images are referenced by file name and copied next to the HTML file,
//! which keeps the output directory relocatable.

use crate::error::{Result, ResultExt as _};
use crate::storage::load_summary;
use crate::summary::{ColumnStats, ColumnSummary, DatasetSummary};
use std::path::{Path, PathBuf};

pub const REPORT_FILE: &str = "report.html";

/// Builds the report at `out_html` from the summary at `summary_path`.
///
/// Images that cannot be copied are logged and the report is still written.
///
/// # Errors
///
/// Returns error if the summary cannot be read back or the HTML file cannot
/// be written.
pub fn compose_report(summary_path: &Path, images: &[PathBuf], out_html: &Path) -> Result<PathBuf> {
    let summary = load_summary(summary_path)?;

    let out_dir = match out_html.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create report directory {}", out_dir.display()))?;

    let names: Vec<String> = images
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();

    std::fs::write(out_html, render_html(&summary, &names))
        .with_context(|| format!("Failed to write report {}", out_html.display()))?;

    for image in images {
        copy_beside(image, &out_dir);
    }

    tracing::info!("Report written to {}", out_html.display());
    Ok(out_html.to_path_buf())
}

fn copy_beside(image: &Path, out_dir: &Path) {
    let Some(name) = image.file_name() else {
        tracing::warn!("Not copying {}: no file name", image.display());
        return;
    };
    let target = out_dir.join(name);
    if is_same_file(image, &target) {
        return;
    }
    if let Err(e) = std::fs::copy(image, &target) {
        tracing::warn!(
            "Failed to copy {} to {}: {e}",
            image.display(),
            target.display()
        );
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Renders the report document. `images` are file names relative to the report.
pub fn render_html(summary: &DatasetSummary, images: &[String]) -> String {
    let (rows, cols) = summary.shape;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html><head><meta charset='utf-8'><title>Profile report</title></head><body>\n");
    html.push_str(&format!("<h1>Dataset shape: [{rows}, {cols}]</h1>\n"));

    html.push_str("<h2>Columns</h2><ul>\n");
    for col in &summary.columns {
        html.push_str(&format!(
            "<li><strong>{}</strong> (dtype: {}) - missing: {} ({:.2}%)</li>\n",
            escape_html(&col.name),
            escape_html(&col.dtype),
            col.n_missing,
            col.pct_missing * 100.0
        ));
    }
    html.push_str("</ul>\n");

    if !summary.columns.is_empty() {
        html.push_str("<h2>Statistics</h2>\n");
        render_stats_table(&mut html, &summary.columns);
    }

    html.push_str("<h2>Plots</h2>\n");
    for name in images {
        html.push_str(&format!(
            "<div><img src='{}' style='max-width:700px'></div>\n",
            escape_html(name)
        ));
    }

    html.push_str("</body></html>\n");
    html
}

fn render_stats_table(html: &mut String, columns: &[ColumnSummary]) {
    html.push_str("<table border='1' cellpadding='4'>\n");
    html.push_str(
        "<tr><th>column</th><th>count</th><th>mean</th><th>std</th><th>min</th><th>max</th><th>top values</th></tr>\n",
    );

    for col in columns {
        html.push_str(&format!("<tr><td>{}</td>", escape_html(&col.name)));
        match &col.stats {
            ColumnStats::Numeric(stats) => {
                html.push_str(&format!(
                    "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td></td>",
                    stats.count,
                    fmt_stat(stats.mean),
                    fmt_stat(stats.std),
                    fmt_stat(stats.min),
                    fmt_stat(stats.max)
                ));
            }
            ColumnStats::Categorical { top } => {
                let listed: Vec<String> = top
                    .iter()
                    .map(|(value, count)| format!("{}: {count}", escape_html(value)))
                    .collect();
                html.push_str(&format!(
                    "<td></td><td></td><td></td><td></td><td></td><td>{}</td>",
                    listed.join(", ")
                ));
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");
}

fn fmt_stat(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_default()
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::save_summary;
    use crate::summary::{NumericStats, TopValues};
    use tempfile::tempdir;

    fn sample() -> DatasetSummary {
        let mut top = TopValues::new();
        top.insert("NY".to_owned(), 2);
        top.insert("LA".to_owned(), 2);
        top.insert("<SF>".to_owned(), 1);
        DatasetSummary {
            shape: (5, 2),
            columns: vec![
                ColumnSummary {
                    name: "age".to_owned(),
                    dtype: "i64".to_owned(),
                    n_missing: 1,
                    pct_missing: 0.2,
                    stats: ColumnStats::Numeric(NumericStats {
                        count: 4,
                        mean: Some(35.0),
                        std: Some(12.909944487358056),
                        min: Some(20.0),
                        max: Some(50.0),
                    }),
                },
                ColumnSummary {
                    name: "city".to_owned(),
                    dtype: "str".to_owned(),
                    n_missing: 0,
                    pct_missing: 0.0,
                    stats: ColumnStats::Categorical { top },
                },
            ],
        }
    }

    #[test]
    fn test_render_html_layout() {
        let html = render_html(&sample(), &["age_hist.png".to_owned(), "city_bar.png".to_owned()]);

        assert!(html.contains("<title>Profile report</title>"));
        assert!(html.contains("Dataset shape: [5, 2]"));
        assert!(html.contains("<strong>age</strong> (dtype: i64) - missing: 1 (20.00%)"));
        assert!(html.contains("<strong>city</strong> (dtype: str) - missing: 0 (0.00%)"));
        assert!(html.contains("<td>35.0000</td>"));
        assert!(html.contains("NY: 2, LA: 2, &lt;SF&gt;: 1"));
        assert_eq!(html.matches("<img ").count(), 2);
        assert!(html.contains("src='age_hist.png'"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&'c\""), "a&lt;b&gt;&amp;&#39;c&quot;");
        assert_eq!(escape_html("São Paulo"), "São Paulo");
    }

    #[test]
    fn test_compose_copies_images_next_to_report() -> Result<()> {
        let dir = tempdir()?;
        let summary_path = dir.path().join("summary.json");
        save_summary(&sample(), &summary_path)?;

        let images_dir = dir.path().join("images");
        std::fs::create_dir_all(&images_dir)?;
        let image = images_dir.join("age_hist.png");
        std::fs::write(&image, b"png")?;

        let out_html = dir.path().join("report").join("report.html");
        let written = compose_report(&summary_path, &[image], &out_html)?;

        assert_eq!(written, out_html);
        assert!(std::fs::read_to_string(&out_html)?.contains("src='age_hist.png'"));
        assert_eq!(std::fs::read(dir.path().join("report").join("age_hist.png"))?, b"png");
        Ok(())
    }

    #[test]
    fn test_missing_image_is_not_fatal() -> Result<()> {
        let dir = tempdir()?;
        let summary_path = dir.path().join("summary.json");
        save_summary(&sample(), &summary_path)?;

        let out_html = dir.path().join("report.html");
        let missing = dir.path().join("images").join("gone_hist.png");
        compose_report(&summary_path, &[missing], &out_html)?;

        let html = std::fs::read_to_string(&out_html)?;
        assert!(html.contains("src='gone_hist.png'"));
        Ok(())
    }

    #[test]
    fn test_image_already_beside_report() -> Result<()> {
        let dir = tempdir()?;
        let summary_path = dir.path().join("summary.json");
        save_summary(&sample(), &summary_path)?;
        let image = dir.path().join("city_bar.png");
        std::fs::write(&image, b"png")?;

        compose_report(&summary_path, &[image.clone()], &dir.path().join("report.html"))?;
        assert_eq!(std::fs::read(&image)?, b"png");
        Ok(())
    }

    #[test]
    fn test_unreadable_summary_fails() {
        let dir = tempdir().unwrap();
        let result = compose_report(
            &dir.path().join("nope.json"),
            &[],
            &dir.path().join("report.html"),
        );
        assert!(result.is_err());
    }
}
