use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use dataprof::config::{ImageFormat, ProfileConfig};
use dataprof::logging::LogOptions;
use dataprof::pipeline::{self, RunOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dataprof",
    version,
    about = "Simple data profiler: per-column statistics, plots and an HTML report for a CSV file"
)]
pub struct Cli {
    /// CSV input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output folder
    #[arg(short, long, default_value = "results")]
    pub outdir: PathBuf,

    /// Read only the first NROWS data rows
    #[arg(long)]
    pub nrows: Option<usize>,

    /// Path to a JSON configuration file
    #[arg(long, env = "DATAPROF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Most frequent values kept per non-numeric column
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Bars drawn per categorical chart
    #[arg(long)]
    pub max_categories: Option<usize>,

    /// Bins per numeric histogram
    #[arg(long)]
    pub bins: Option<usize>,

    /// Image format for the plots (png or svg)
    #[arg(long)]
    pub format: Option<ImageFormat>,

    /// Also write daily-rotating log files to this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

impl Cli {
    /// Config file values with command-line overrides applied.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is unreadable or a value is out of range.
    pub fn profile_config(&self) -> Result<ProfileConfig> {
        let mut config = ProfileConfig::load(self.config.as_deref())?;

        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(max_categories) = self.max_categories {
            config.max_categories = max_categories;
        }
        if let Some(bins) = self.bins {
            config.histogram_bins = bins;
        }
        if let Some(format) = self.format {
            config.image.format = format;
        }
        if let Some(dir) = &self.log_dir {
            config.logging.dir = Some(dir.clone());
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_options(&self, config: &ProfileConfig) -> LogOptions {
        let count = |n: u8| i8::try_from(n).unwrap_or(i8::MAX);
        LogOptions {
            verbosity: count(self.verbose).saturating_sub(count(self.quiet)),
            dir: config.logging.dir.clone(),
        }
    }
}

/// Runs the pipeline and prints the report location.
///
/// # Errors
///
/// Returns the first pipeline error, with the input path as context.
pub fn run(cli: &Cli, config: ProfileConfig) -> Result<()> {
    let outputs = pipeline::run(&RunOptions {
        input: cli.input.clone(),
        outdir: cli.outdir.clone(),
        nrows: cli.nrows,
        config,
    })
    .with_context(|| format!("Failed to profile {}", cli.input.display()))?;

    println!("Report saved: {}", outputs.report_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dataprof", "-i", "data.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("data.csv"));
        assert_eq!(cli.outdir, PathBuf::from("results"));
        assert_eq!(cli.nrows, None);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["dataprof", "--outdir", "out"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "dataprof", "--input", "data.csv", "--nrows", "100", "--top-n", "3", "--bins", "12",
            "--format", "svg",
        ])
        .unwrap();
        assert_eq!(cli.nrows, Some(100));

        let config = cli.profile_config().unwrap();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.histogram_bins, 12);
        assert_eq!(config.max_categories, 10);
        assert_eq!(config.image.format, ImageFormat::Svg);
    }

    #[test]
    fn test_zero_override_rejected() {
        let cli = Cli::try_parse_from(["dataprof", "-i", "data.csv", "--max-categories", "0"]).unwrap();
        assert!(cli.profile_config().is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["dataprof", "-i", "d.csv", "-vv"]).unwrap();
        assert_eq!(cli.log_options(&ProfileConfig::default()).default_directive(), "trace");

        let cli = Cli::try_parse_from(["dataprof", "-i", "d.csv", "-q"]).unwrap();
        assert_eq!(cli.log_options(&ProfileConfig::default()).default_directive(), "warn");
    }
}
