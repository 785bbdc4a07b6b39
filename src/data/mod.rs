//! Input records and JSON document loading

mod records;
pub mod loader;

pub use records::{Product, MonthlySnapshot, MonthlyCatalog, parse_period, PeriodError};
pub use loader::{load_snapshots, load_catalogs, snapshots_from_reader, catalogs_from_reader};
