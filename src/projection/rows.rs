//! Output rows for the comparison tables

use serde::Serialize;

/// Column headers for the month-by-month interest comparison
pub const INTEREST_HEADERS: [&str; 11] = [
    "Year",
    "Month",
    "Plan Rate",
    "Current Plan Cost",
    "Actual Interest",
    "Interest After Costs",
    "Estimated Interest",
    "Interest Diff.",
    "Capital",
    "Capital Diff.",
    "Estimated Deposit",
];

/// Column headers for a product comparison table
pub const PRODUCT_HEADERS: [&str; 5] = [
    "Product",
    "Annual Rate",
    "Monthly Cost",
    "Projected Interest",
    "Net Gain",
];

/// Currency amount with two decimals
pub(crate) fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Percentage rate with two decimals and a trailing "%"
pub(crate) fn format_rate(value: f64) -> String {
    format!("{:.2}%", value)
}

/// One month of the actual-versus-estimated interest comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterestRow {
    pub year: i32,
    pub month: String,

    /// Annual rate of the held product, in percent
    pub rate: f64,
    pub monthly_cost: f64,
    pub actual_interest: f64,
    pub interest_after_cost: f64,

    /// Interest the previous capital would have earned at this month's rate
    pub estimated_interest: f64,
    pub interest_difference: f64,

    /// Balance implied by actual interest and the held rate
    pub capital: f64,
    pub capital_difference: f64,

    /// Capital change not explained by this month's interest
    pub estimated_deposit: f64,
}

impl InterestRow {
    /// Text cells in header order
    pub fn record(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            self.month.clone(),
            format_rate(self.rate),
            format_amount(self.monthly_cost),
            format_amount(self.actual_interest),
            format_amount(self.interest_after_cost),
            format_amount(self.estimated_interest),
            format_amount(self.interest_difference),
            format_amount(self.capital),
            format_amount(self.capital_difference),
            format_amount(self.estimated_deposit),
        ]
    }
}

/// One product's projected outcome on a fixed capital basis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub name: String,
    pub annual_rate: f64,
    pub monthly_cost: f64,
    pub projected_interest: f64,
    pub net_gain: f64,

    /// Net gain equals the table maximum
    pub is_best: bool,
    pub is_negative_gain: bool,

    /// Product name matches the one currently held
    pub is_current: bool,
}

impl ProductRow {
    /// Text cells in header order
    pub fn record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_rate(self.annual_rate),
            format_amount(self.monthly_cost),
            format_amount(self.projected_interest),
            format_amount(self.net_gain),
        ]
    }

    /// Annotation labels for renderers without colour
    pub fn notes(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();
        if self.is_best {
            notes.push("best");
        }
        if self.is_negative_gain {
            notes.push("negative");
        }
        if self.is_current {
            notes.push("current");
        }
        notes
    }
}

/// Product comparison for a single month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTable {
    pub year: i32,
    pub month: String,

    /// Capital basis every row was projected from
    pub capital: f64,
    pub current_product: String,
    pub rows: Vec<ProductRow>,
}

impl ProductTable {
    /// The row for the held product, if this month offers it
    pub fn current(&self) -> Option<&ProductRow> {
        self.rows.iter().find(|row| row.is_current)
    }
}
