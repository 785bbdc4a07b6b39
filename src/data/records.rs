//! Record types matching the snapshot and catalog JSON documents

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A savings product offered in a given month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,

    /// Annual interest rate in percent (5.0 means 5%)
    pub annual_rate: f64,

    /// Fixed monthly cost of holding the product
    pub monthly_cost: f64,
}

impl Product {
    /// Monthly rate as a fraction: annual percent / 100 / 12
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate)
    }
}

/// The account holder's real position for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySnapshot {
    pub year: i32,

    /// Full English month name, e.g. "January"
    pub month: String,

    /// Interest actually credited this month
    pub actual_interest: f64,

    /// Name of the product held this month
    pub current_product_name: String,
}

impl MonthlySnapshot {
    /// Calendar date of the first day of this snapshot's month
    pub fn period(&self) -> Result<NaiveDate, PeriodError> {
        parse_period(self.year, &self.month)
    }
}

/// Products on offer in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCatalog {
    pub year: i32,
    pub month: String,
    pub products: Vec<Product>,
}

/// Convert an annual percentage rate to a monthly fraction
pub(crate) fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / 100.0 / 12.0
}

/// A year and month name that do not form a valid period
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeriodError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    /// chrono's `%B` also accepts "Mar" for "March"; only full names are periods
    #[error("'{0}' is not a full month name")]
    NotFullMonthName(String),
}

/// Parse a "Year-MonthName" pair into the first day of that month
///
/// The month must be the full English name, compared without regard to case.
pub fn parse_period(year: i32, month: &str) -> Result<NaiveDate, PeriodError> {
    let date = NaiveDate::parse_from_str(&format!("{}-{}-01", year, month), "%Y-%B-%d")?;
    if !date.format("%B").to_string().eq_ignore_ascii_case(month) {
        return Err(PeriodError::NotFullMonthName(month.to_string()));
    }
    Ok(date)
}
