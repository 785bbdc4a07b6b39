//! Interest Comparison - compare savings products against the one actually held
//!
//! This library provides:
//! - JSON loading of monthly account snapshots and product catalogs
//! - Month-by-month comparison of actual interest against the carried capital
//! - Product comparison for the latest month on the implied capital
//! - Future scenario projections for catalogs dated after the last snapshot
//! - Table, CSV and JSON report output

pub mod error;
pub mod data;
pub mod catalog;
pub mod projection;
pub mod scenario;
pub mod config;
pub mod report;
pub mod pipeline;

// Re-export commonly used types
pub use error::{Error, Result};
pub use data::{Product, MonthlySnapshot, MonthlyCatalog};
pub use catalog::{CatalogIndex, PeriodKey};
pub use projection::{ComparisonEngine, Diagnostic, InterestRow, ProductRow, ProductTable};
pub use scenario::{FutureScenarioProjector, FutureProjection};
pub use config::{OutputFormat, RunConfig};
pub use report::{ComparisonReport, write_report};
pub use pipeline::{build_report, run};
