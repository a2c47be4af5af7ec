//! # dataprof command-line entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Load config file, apply flag overrides
//!   ├─> Initialize logging (stderr, optional rolling file)
//!   └─> Run the profiling pipeline, print the report path
//! ```
//!
//! ```bash
//! dataprof --input data.csv --outdir results
//! dataprof -i data.csv --nrows 1000 --format svg -v
//! ```
//!
//! Log output goes to stderr; stdout only carries `Report saved: <path>`.
//! Any failure ends the process with a non-zero status and the error chain.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Config errors are reported before logging exists, through anyhow's Debug output
    let config = cli.profile_config()?;
    dataprof::logging::init(&cli.log_options(&config))?;

    cli::run(&cli, config)
}
