//! Core comparison engine: implied capital, carried basis, and product tables

use crate::catalog::CatalogIndex;
use crate::data::{MonthlySnapshot, Product};
use super::comparison::compare_products;
use super::diagnostics::Diagnostic;
use super::rows::{InterestRow, ProductTable};
use super::state::CarryForward;
use serde::Serialize;

/// The held product located in its month's catalog
#[derive(Debug, Clone, Copy)]
pub struct ResolvedProduct<'a> {
    pub product: &'a Product,

    /// Every product offered that month, in catalog order
    pub catalog: &'a [Product],
}

impl ResolvedProduct<'_> {
    /// Balance implied by `actual_interest` earned at the held product's rate
    pub fn implied_capital(&self, actual_interest: f64) -> f64 {
        actual_interest / self.product.monthly_rate()
    }
}

/// Capital implied by one snapshot, used as a fixed basis for product projections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapitalBasis {
    pub year: i32,
    pub month: String,
    pub product: String,
    pub annual_rate: f64,
    pub capital: f64,
}

/// Result of the month-by-month pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlyComparison {
    pub rows: Vec<InterestRow>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Comparison engine over a pre-built catalog index
#[derive(Debug, Clone, Copy)]
pub struct ComparisonEngine<'a> {
    index: &'a CatalogIndex,
}

impl<'a> ComparisonEngine<'a> {
    pub fn new(index: &'a CatalogIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a CatalogIndex {
        self.index
    }

    /// Find the snapshot's held product in its month's catalog
    ///
    /// A held product with a zero rate is reported separately from a missing one,
    /// since capital cannot be implied from it.
    pub fn resolve(&self, snapshot: &MonthlySnapshot) -> Result<ResolvedProduct<'a>, Diagnostic> {
        let catalog = self
            .index
            .get(snapshot.year, &snapshot.month)
            .ok_or_else(|| Diagnostic::ProductsNotFound {
                year: snapshot.year,
                month: snapshot.month.clone(),
            })?;

        let product = catalog
            .iter()
            .find(|product| product.name == snapshot.current_product_name)
            .ok_or_else(|| Diagnostic::CurrentProductNotFound {
                year: snapshot.year,
                month: snapshot.month.clone(),
                product: snapshot.current_product_name.clone(),
            })?;

        if product.annual_rate == 0.0 {
            return Err(Diagnostic::ZeroRate {
                year: snapshot.year,
                month: snapshot.month.clone(),
                product: product.name.clone(),
            });
        }

        Ok(ResolvedProduct { product, catalog })
    }

    /// Capital implied by a snapshot's actual interest and held rate
    pub fn capital_basis(&self, snapshot: &MonthlySnapshot) -> Result<CapitalBasis, Diagnostic> {
        let resolved = self.resolve(snapshot)?;
        Ok(CapitalBasis {
            year: snapshot.year,
            month: snapshot.month.clone(),
            product: resolved.product.name.clone(),
            annual_rate: resolved.product.annual_rate,
            capital: resolved.implied_capital(snapshot.actual_interest),
        })
    }

    /// Compare actual interest against the interest the carried capital would have earned
    ///
    /// Snapshots must already be in chronological order. Months that cannot be
    /// resolved are skipped and do not move the carried capital.
    pub fn month_by_month(&self, snapshots: &[MonthlySnapshot]) -> MonthlyComparison {
        let mut result = MonthlyComparison::default();
        let mut carry = CarryForward::new();

        for snapshot in snapshots {
            let resolved = match self.resolve(snapshot) {
                Ok(resolved) => resolved,
                Err(diagnostic) => {
                    result.diagnostics.push(diagnostic.report());
                    continue;
                }
            };

            let product = resolved.product;
            let monthly_rate = product.monthly_rate();
            let actual_interest = snapshot.actual_interest;
            let capital = resolved.implied_capital(actual_interest);

            let mut row = InterestRow {
                year: snapshot.year,
                month: snapshot.month.clone(),
                rate: product.annual_rate,
                monthly_cost: product.monthly_cost,
                actual_interest,
                interest_after_cost: actual_interest - product.monthly_cost,
                estimated_interest: 0.0,
                interest_difference: 0.0,
                capital,
                capital_difference: 0.0,
                estimated_deposit: 0.0,
            };

            // No prior basis on the first processed month: deltas stay zero
            if let Some(previous_capital) = carry.advance(capital) {
                row.estimated_interest = previous_capital * monthly_rate;
                row.interest_difference = actual_interest - row.estimated_interest;
                row.capital_difference = capital - previous_capital;
                row.estimated_deposit = row.capital_difference - actual_interest;
            }

            result.rows.push(row);
        }

        result
    }

    /// Compare every product offered in the last snapshot's month
    pub fn current_month(&self, snapshots: &[MonthlySnapshot]) -> Result<ProductTable, Diagnostic> {
        let last = snapshots.last().ok_or(Diagnostic::NoSnapshots)?;
        let resolved = self.resolve(last)?;
        let capital = resolved.implied_capital(last.actual_interest);

        Ok(ProductTable {
            year: last.year,
            month: last.month.clone(),
            capital,
            current_product: last.current_product_name.clone(),
            rows: compare_products(capital, resolved.catalog, &last.current_product_name),
        })
    }
}
