//! Recoverable conditions reported while building the comparison tables

use crate::data::PeriodError;
use serde::Serialize;
use thiserror::Error;

/// A row- or table-level condition that skips output without aborting the run
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No catalog exists for the snapshot's month
    #[error("Products not found for {month} {year}")]
    ProductsNotFound { year: i32, month: String },

    /// The catalog exists but does not list the held product
    #[error("Current product '{product}' not found for {month} {year}")]
    CurrentProductNotFound {
        year: i32,
        month: String,
        product: String,
    },

    /// The held product has a 0% rate, so no capital can be implied from its interest
    #[error("Current product '{product}' has a zero annual rate for {month} {year}; capital cannot be derived")]
    ZeroRate {
        year: i32,
        month: String,
        product: String,
    },

    #[error("No monthly data available")]
    NoSnapshots,

    /// No catalog is dated after the last snapshot
    #[error("No future products found.")]
    NoFutureProducts,

    #[error("Error parsing date '{value}': {reason}")]
    UnparseableDate { value: String, reason: String },
}

impl Diagnostic {
    pub(crate) fn unparseable_date(year: i32, month: &str, err: PeriodError) -> Self {
        Diagnostic::UnparseableDate {
            value: format!("{}-{}", year, month),
            reason: err.to_string(),
        }
    }

    /// Log through the `log` facade and hand the diagnostic back for collection
    pub(crate) fn report(self) -> Self {
        log::warn!("{}", self);
        self
    }
}
