//! Future scenario projector
//!
//! Projects every catalog dated after the last snapshot onto the capital implied
//! by that snapshot. The basis is fixed: it is not rolled forward month to month,
//! so each future table answers "what would my current balance earn with this
//! month's offers".

use crate::catalog::{CatalogIndex, PeriodKey};
use crate::data::{parse_period, MonthlySnapshot, Product};
use crate::projection::{compare_products, CapitalBasis, ComparisonEngine, Diagnostic, ProductTable};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Product tables for every month after the last snapshot
#[derive(Debug, Clone, Default, Serialize)]
pub struct FutureProjection {
    /// Capital every table was projected from; absent if it could not be derived
    pub basis: Option<CapitalBasis>,

    /// One table per future month, ascending by date
    pub tables: Vec<ProductTable>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Projects future catalogs against the latest known capital
#[derive(Debug, Clone, Copy)]
pub struct FutureScenarioProjector<'a> {
    engine: ComparisonEngine<'a>,
}

impl<'a> FutureScenarioProjector<'a> {
    pub fn new(index: &'a CatalogIndex) -> Self {
        Self {
            engine: ComparisonEngine::new(index),
        }
    }

    /// Build product tables for catalogs strictly after the last snapshot's month
    pub fn project(&self, snapshots: &[MonthlySnapshot]) -> FutureProjection {
        let mut result = FutureProjection::default();

        let Some(last) = snapshots.last() else {
            result.diagnostics.push(Diagnostic::NoSnapshots.report());
            return result;
        };

        let last_date = match last.period() {
            Ok(date) => date,
            Err(err) => {
                result
                    .diagnostics
                    .push(Diagnostic::unparseable_date(last.year, &last.month, err).report());
                return result;
            }
        };

        let basis = match self.engine.capital_basis(last) {
            Ok(basis) => basis,
            Err(diagnostic) => {
                result.diagnostics.push(diagnostic.report());
                return result;
            }
        };

        let mut future: Vec<(NaiveDate, &PeriodKey, &[Product])> = Vec::new();
        for (key, products) in self.engine.index().periods() {
            match parse_period(key.year, &key.month) {
                Ok(date) if date > last_date => future.push((date, key, products)),
                Ok(_) => {}
                Err(err) => result
                    .diagnostics
                    .push(Diagnostic::unparseable_date(key.year, &key.month, err).report()),
            }
        }

        if future.is_empty() {
            result.diagnostics.push(Diagnostic::NoFutureProducts.report());
            result.basis = Some(basis);
            return result;
        }

        future.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        log::debug!(
            "Projecting {} future months from capital {:.2}",
            future.len(),
            basis.capital
        );

        result.tables = future
            .into_iter()
            .map(|(date, _, products)| ProductTable {
                year: date.year(),
                month: date.format("%B").to_string(),
                capital: basis.capital,
                current_product: last.current_product_name.clone(),
                rows: compare_products(basis.capital, products, &last.current_product_name),
            })
            .collect();
        result.basis = Some(basis);

        result
    }
}
