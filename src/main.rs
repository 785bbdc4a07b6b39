//! Interest Comparison CLI
//!
//! Compares actual monthly interest against the products on offer and prints
//! the month-by-month, latest-month and future comparison tables.

use anyhow::{Context, Result};
use clap::Parser;
use interest_comparison::{run, OutputFormat, RunConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "interest")]
#[command(about = "A tool to compare financial products and interests.")]
struct Cli {
    /// Path to the monthly interest JSON file
    #[arg(long = "jsondata", value_name = "PATH", default_value = "interest_data.json")]
    snapshot_file: PathBuf,

    /// Path to the monthly products JSON file
    #[arg(long = "productsdata", value_name = "PATH", default_value = "products_data.json")]
    catalog_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output tables in CSV format (same as --format csv)
    #[arg(long, conflicts_with = "format")]
    csv: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            snapshot_file: self.snapshot_file,
            catalog_file: self.catalog_file,
            output_format: if self.csv { OutputFormat::Csv } else { self.format },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config();
    log::debug!("Running with {:?}", config);

    let stdout = io::stdout();
    run(&config, stdout.lock()).with_context(|| {
        format!(
            "comparison failed for {} and {}",
            config.snapshot_file.display(),
            config.catalog_file.display()
        )
    })?;

    Ok(())
}
