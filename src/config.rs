//! Run configuration passed into the pipeline

use crate::data::loader::{DEFAULT_CATALOG_FILE, DEFAULT_SNAPSHOT_FILE};
use std::path::PathBuf;

/// How the report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text tables
    #[default]
    Table,
    /// One CSV block (header + rows) per table
    Csv,
    /// The whole report as a single JSON document
    Json,
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// JSON document of monthly snapshots, oldest first
    pub snapshot_file: PathBuf,

    /// JSON document of monthly product catalogs
    pub catalog_file: PathBuf,

    pub output_format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            snapshot_file: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            catalog_file: PathBuf::from(DEFAULT_CATALOG_FILE),
            output_format: OutputFormat::Table,
        }
    }
}
