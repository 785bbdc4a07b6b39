//! Pipeline entry point: load, index, compare, project, emit

use crate::catalog::CatalogIndex;
use crate::config::RunConfig;
use crate::data::{load_catalogs, load_snapshots, MonthlyCatalog, MonthlySnapshot};
use crate::error::Result;
use crate::projection::{ComparisonEngine, Diagnostic};
use crate::report::{write_report, ComparisonReport};
use crate::scenario::FutureScenarioProjector;
use std::io::Write;

/// Compute every table from in-memory documents
///
/// Snapshots must be in chronological order; catalogs may be in any order.
pub fn build_report(snapshots: &[MonthlySnapshot], catalogs: Vec<MonthlyCatalog>) -> ComparisonReport {
    let mut report = ComparisonReport::default();
    if snapshots.is_empty() {
        report.diagnostics.push(Diagnostic::NoSnapshots.report());
        return report;
    }

    let index = CatalogIndex::build(catalogs);
    log::debug!("Indexed {} catalog months", index.len());

    let engine = ComparisonEngine::new(&index);

    let monthly = engine.month_by_month(snapshots);
    report.monthly = monthly.rows;
    report.diagnostics.extend(monthly.diagnostics);

    match engine.current_month(snapshots) {
        Ok(table) => report.current = Some(table),
        Err(diagnostic) => report.diagnostics.push(diagnostic.report()),
    }

    let future = FutureScenarioProjector::new(&index).project(snapshots);
    report.future_basis = future.basis;
    report.future = future.tables;
    report.diagnostics.extend(future.diagnostics);

    log::info!(
        "Built {} monthly rows, {} product tables, {} diagnostics",
        report.monthly.len(),
        report.product_tables().count(),
        report.diagnostics.len()
    );

    report
}

/// Load both documents, build the report and write it in the configured format
///
/// Load failures are fatal; everything else surfaces as diagnostics in the report.
pub fn run<W: Write>(config: &RunConfig, out: W) -> Result<ComparisonReport> {
    let snapshots = load_snapshots(&config.snapshot_file)?;
    let catalogs = load_catalogs(&config.catalog_file)?;

    let report = build_report(&snapshots, catalogs);
    write_report(&report, config.output_format, out)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::data::{catalogs_from_reader, snapshots_from_reader};
    use crate::error::Error;
    use approx::assert_relative_eq;

    const SNAPSHOTS: &str = r#"[
        {"year": 2024, "month": "January", "actualInterest": 100, "currentProductName": "A"},
        {"year": 2024, "month": "February", "actualInterest": 105, "currentProductName": "A"},
        {"year": 2024, "month": "March", "actualInterest": 110, "currentProductName": "A"},
        {"year": 2024, "month": "April", "actualInterest": 120, "currentProductName": "A"}
    ]"#;

    const CATALOGS: &str = r#"[
        {"year": 2024, "month": "June", "products": [
            {"name": "A", "annualRate": 5.0, "monthlyCost": 10},
            {"name": "B", "annualRate": 5.5, "monthlyCost": 0}
        ]},
        {"year": 2024, "month": "January", "products": [{"name": "A", "annualRate": 5.0, "monthlyCost": 10}]},
        {"year": 2024, "month": "February", "products": [{"name": "A", "annualRate": 5.0, "monthlyCost": 10}]},
        {"year": 2024, "month": "April", "products": [
            {"name": "A", "annualRate": 6.0, "monthlyCost": 10},
            {"name": "B", "annualRate": 5.0, "monthlyCost": 0}
        ]},
        {"year": 2024, "month": "May", "products": [{"name": "B", "annualRate": 7.2, "monthlyCost": 0}]}
    ]"#;

    fn sample_report() -> ComparisonReport {
        let snapshots = snapshots_from_reader(SNAPSHOTS.as_bytes()).unwrap();
        let catalogs = catalogs_from_reader(CATALOGS.as_bytes()).unwrap();
        build_report(&snapshots, catalogs)
    }

    #[test]
    fn test_build_report_end_to_end() {
        let report = sample_report();

        // March has no catalog: skipped, April carries February's capital
        let months: Vec<_> = report.monthly.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["January", "February", "April"]);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::ProductsNotFound {
                year: 2024,
                month: "March".to_string(),
            }]
        );

        let april = &report.monthly[2];
        assert_relative_eq!(april.capital, 24_000.0, epsilon = 1e-9);
        assert_relative_eq!(april.capital_difference, 24_000.0 - 25_200.0, epsilon = 1e-9);
        assert_relative_eq!(april.estimated_interest, 25_200.0 * 0.005, epsilon = 1e-9);

        // Latest month: A = 120 - 10 = 110, B = 24000 * 5% / 12 = 100
        let current = report.current.as_ref().unwrap();
        assert_eq!(current.month, "April");
        assert!(current.rows[0].is_best && current.rows[0].is_current);

        // Future: May then June, both on April's capital
        let future: Vec<_> = report.future.iter().map(|t| t.month.as_str()).collect();
        assert_eq!(future, vec!["May", "June"]);
        assert!(report.future.iter().all(|t| t.capital == current.capital));
        assert_relative_eq!(report.future[0].rows[0].net_gain, 144.0, epsilon = 1e-9);
        assert!(report.future[0].current().is_none());
        assert_relative_eq!(report.future_basis.as_ref().unwrap().capital, 24_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_snapshots_do_not_panic() {
        let catalogs = catalogs_from_reader(CATALOGS.as_bytes()).unwrap();
        let report = build_report(&[], catalogs);

        assert!(report.monthly.is_empty());
        assert!(report.current.is_none());
        assert!(report.future.is_empty());
        assert_eq!(report.diagnostics, vec![Diagnostic::NoSnapshots]);
    }

    #[test]
    fn test_run_fails_on_missing_document() {
        let config = RunConfig {
            snapshot_file: "missing/interest_data.json".into(),
            catalog_file: "missing/products_data.json".into(),
            output_format: OutputFormat::Csv,
        };

        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(out.is_empty());
    }
}
