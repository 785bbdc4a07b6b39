//! Report emitter: renders computed tables as text, CSV or JSON
//!
//! Nothing here computes; rows arrive fully projected and annotated.

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use crate::projection::{
    CapitalBasis, Diagnostic, InterestRow, ProductTable, INTEREST_HEADERS, PRODUCT_HEADERS,
};
use serde::Serialize;
use std::io::{self, Write};

/// Everything one run produces
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonReport {
    /// Month-by-month actual versus estimated interest
    pub monthly: Vec<InterestRow>,

    /// Product comparison for the last snapshot's month
    pub current: Option<ProductTable>,

    /// Capital basis shared by all future tables
    pub future_basis: Option<CapitalBasis>,

    /// Product comparisons for months after the last snapshot, ascending
    pub future: Vec<ProductTable>,

    /// Conditions that skipped rows or tables, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

impl ComparisonReport {
    /// Current and future product tables in output order
    pub fn product_tables(&self) -> impl Iterator<Item = &ProductTable> {
        self.current.iter().chain(self.future.iter())
    }
}

/// Write the report in the requested format
pub fn write_report<W: Write>(report: &ComparisonReport, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Table => write_tables(report, &mut out)?,
        OutputFormat::Csv => write_csv(report, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report).map_err(Error::Json)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_tables<W: Write>(report: &ComparisonReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Interest Comparison Table:")?;
    let rows: Vec<Vec<String>> = report.monthly.iter().map(InterestRow::record).collect();
    write_text_table(out, &INTEREST_HEADERS, &rows, 2, 0)?;

    for table in report.product_tables() {
        writeln!(out)?;
        writeln!(out, "Product Comparison Table for {} {}:", table.month, table.year)?;

        let mut headers = PRODUCT_HEADERS.to_vec();
        headers.push("Notes");
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                let mut cells = row.record();
                cells.push(row.notes().join(", "));
                cells
            })
            .collect();
        write_text_table(out, &headers, &rows, 1, 1)?;
    }

    Ok(())
}

/// Aligned plain-text table
///
/// The first `leading_left` and last `trailing_left` columns are left aligned;
/// everything in between is numeric and right aligned.
fn write_text_table<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
    leading_left: usize,
    trailing_left: usize,
) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let trailing_start = headers.len().saturating_sub(trailing_left);
    let render = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                if i < leading_left || i >= trailing_start {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    writeln!(out, "{}", render(&header_cells))?;
    let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    writeln!(out, "{}", separator.join("-+-"))?;

    for row in rows {
        writeln!(out, "{}", render(row))?;
    }

    Ok(())
}

fn write_csv<W: Write>(report: &ComparisonReport, out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);

    writer.write_record(INTEREST_HEADERS)?;
    for row in &report.monthly {
        writer.write_record(row.record())?;
    }

    for table in report.product_tables() {
        writer.write_record(PRODUCT_HEADERS)?;
        for row in &table.rows {
            writer.write_record(row.record())?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProductRow;

    fn sample_report() -> ComparisonReport {
        let product = |name: &str, net_gain: f64, is_best: bool, is_current: bool| ProductRow {
            name: name.to_string(),
            annual_rate: 5.0,
            monthly_cost: 10.0,
            projected_interest: net_gain + 10.0,
            net_gain,
            is_best,
            is_negative_gain: net_gain < 0.0,
            is_current,
        };

        ComparisonReport {
            monthly: vec![InterestRow {
                year: 2024,
                month: "January".to_string(),
                rate: 5.0,
                monthly_cost: 10.0,
                actual_interest: 100.0,
                interest_after_cost: 90.0,
                estimated_interest: 0.0,
                interest_difference: 0.0,
                capital: 24000.0,
                capital_difference: 0.0,
                estimated_deposit: 0.0,
            }],
            current: Some(ProductTable {
                year: 2024,
                month: "January".to_string(),
                capital: 24000.0,
                current_product: "A".to_string(),
                rows: vec![product("A", 90.0, true, true), product("B", -5.0, false, false)],
            }),
            future_basis: None,
            future: vec![ProductTable {
                year: 2024,
                month: "March".to_string(),
                capital: 24000.0,
                current_product: "A".to_string(),
                rows: vec![product("C", 12.5, true, false)],
            }],
            diagnostics: vec![Diagnostic::NoSnapshots],
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_report(&sample_report(), format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_output() {
        let text = render(OutputFormat::Table);

        assert!(text.starts_with("Interest Comparison Table:\n"));
        assert!(text.contains("Product Comparison Table for January 2024:"));
        assert!(text.contains("Product Comparison Table for March 2024:"));
        assert!(text.contains("24000.00"));
        assert!(text.contains("best, current"));
        assert!(text.contains("negative"));

        let jan = text.find("for January 2024").unwrap();
        let mar = text.find("for March 2024").unwrap();
        assert!(jan < mar);
    }

    #[test]
    fn test_table_columns_align() {
        let text = render(OutputFormat::Table);
        let lines: Vec<&str> = text.lines().skip(1).take(3).collect();

        // Header, separator and the single data row share column boundaries
        let header_bars: Vec<usize> = lines[0].match_indices(" | ").map(|(i, _)| i).collect();
        let row_bars: Vec<usize> = lines[2].match_indices(" | ").map(|(i, _)| i).collect();
        assert_eq!(header_bars, row_bars);
        assert!(lines[1].chars().all(|c| c == '-' || c == '+'));
    }

    #[test]
    fn test_trailing_columns_left_aligned() {
        let headers = ["Name", "Amount", "Comment"];
        let rows = vec![
            vec!["A".to_string(), "1.00".to_string(), "x".to_string()],
            vec!["Long".to_string(), "100.00".to_string(), "longer".to_string()],
        ];

        let mut buf = Vec::new();
        write_text_table(&mut buf, &headers, &rows, 1, 1).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name | Amount | Comment");
        assert_eq!(lines[2], "A    |   1.00 | x");
        assert_eq!(lines[3], "Long | 100.00 | longer");

        let mut buf = Vec::new();
        write_text_table(&mut buf, &headers, &rows, 1, 0).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().nth(2), Some("A    |   1.00 |       x"));
    }

    #[test]
    fn test_csv_output() {
        let text = render(OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], INTEREST_HEADERS.join(","));
        assert_eq!(lines[1], "2024,January,5.00%,10.00,100.00,90.00,0.00,0.00,24000.00,0.00,0.00");
        assert_eq!(lines[2], "Product,Annual Rate,Monthly Cost,Projected Interest,Net Gain");
        assert_eq!(lines[3], "A,5.00%,10.00,100.00,90.00");
        assert_eq!(lines[4], "B,5.00%,10.00,5.00,-5.00");
        assert_eq!(lines[6], "C,5.00%,10.00,22.50,12.50");
    }

    #[test]
    fn test_json_output() {
        let text = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["monthly"][0]["capital"], 24000.0);
        assert_eq!(value["current"]["rows"][0]["is_best"], true);
        assert_eq!(value["future"][0]["month"], "March");
        assert_eq!(value["diagnostics"][0]["kind"], "no_snapshots");
    }
}
