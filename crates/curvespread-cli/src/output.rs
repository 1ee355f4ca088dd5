//! Output formatting utilities.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use curvespread_ext_file::{write_spreads_to_curve, write_yield_spreads};
use curvespread_spreads::{CurveSpread, YieldSpread};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Table row of the yield spread report.
#[derive(Debug, Clone, Tabled)]
pub struct YieldSpreadRow {
    #[tabled(rename = "Bond")]
    pub bond: String,
    #[tabled(rename = "Benchmark")]
    pub benchmark: String,
    #[tabled(rename = "Spread")]
    pub spread: String,
}

impl YieldSpreadRow {
    fn new(row: &YieldSpread, precision: usize) -> Self {
        Self {
            bond: row.bond.clone(),
            benchmark: row.benchmark.clone(),
            spread: format_percent(row.spread_to_benchmark, precision),
        }
    }
}

/// Table row of the spread-to-curve report.
#[derive(Debug, Clone, Tabled)]
pub struct CurveSpreadRow {
    #[tabled(rename = "Bond")]
    pub bond: String,
    #[tabled(rename = "Spread to Curve")]
    pub spread: String,
}

impl CurveSpreadRow {
    fn new(row: &CurveSpread, precision: usize) -> Self {
        Self {
            bond: row.bond.clone(),
            spread: format_percent(row.spread_to_curve, precision),
        }
    }
}

#[derive(Serialize)]
struct CombinedReport<'a> {
    yield_spread: &'a [YieldSpread],
    spread_to_curve: &'a [CurveSpread],
}

/// Prints the yield spread report in the given format.
pub fn print_yield_spreads<W: Write>(
    out: &mut W,
    rows: &[YieldSpread],
    format: OutputFormat,
    precision: usize,
) -> CliResult<()> {
    match format {
        OutputFormat::Csv => write_yield_spreads(out, rows, precision)?,
        OutputFormat::Table => {
            let table: Vec<_> = rows.iter().map(|r| YieldSpreadRow::new(r, precision)).collect();
            print_table(out, &table)?;
        }
        OutputFormat::Json => print_json(out, rows)?,
    }
    Ok(())
}

/// Prints the spread-to-curve report in the given format.
pub fn print_spreads_to_curve<W: Write>(
    out: &mut W,
    rows: &[CurveSpread],
    format: OutputFormat,
    precision: usize,
) -> CliResult<()> {
    match format {
        OutputFormat::Csv => write_spreads_to_curve(out, rows, precision)?,
        OutputFormat::Table => {
            let table: Vec<_> = rows.iter().map(|r| CurveSpreadRow::new(r, precision)).collect();
            print_table(out, &table)?;
        }
        OutputFormat::Json => print_json(out, rows)?,
    }
    Ok(())
}

/// Prints both reports as a single JSON object.
pub fn print_combined_json<W: Write>(
    out: &mut W,
    yield_spread: &[YieldSpread],
    spread_to_curve: &[CurveSpread],
) -> CliResult<()> {
    print_json(
        out,
        &CombinedReport {
            yield_spread,
            spread_to_curve,
        },
    )
}

/// Prints data as a formatted table.
fn print_table<W: Write, T: Tabled>(out: &mut W, data: &[T]) -> CliResult<()> {
    if data.is_empty() {
        writeln!(out, "No results.")?;
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    writeln!(out, "{}", table)?;
    Ok(())
}

/// Prints data as pretty JSON.
fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, data: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)?;
    Ok(())
}

/// Formats a spread in percent.
pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{:.prec$}%", value, prec = precision)
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yield_rows() -> Vec<YieldSpread> {
        vec![YieldSpread {
            bond: "C1".into(),
            benchmark: "G1".into(),
            spread_to_benchmark: 1.6,
        }]
    }

    fn curve_rows() -> Vec<CurveSpread> {
        vec![CurveSpread {
            bond: "C1".into(),
            spread_to_curve: 1.428_571,
        }]
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_output() {
        let text = render(|out| print_yield_spreads(out, &yield_rows(), OutputFormat::Csv, 2));
        assert_eq!(text, "bond,benchmark,spread_to_benchmark\nC1,G1,1.60%\n");
    }

    #[test]
    fn test_table_output() {
        let text = render(|out| print_spreads_to_curve(out, &curve_rows(), OutputFormat::Table, 3));
        assert!(text.contains("Spread to Curve"));
        assert!(text.contains("1.429%"));
    }

    #[test]
    fn test_empty_table() {
        let text = render(|out| print_yield_spreads(out, &[], OutputFormat::Table, 2));
        assert_eq!(text, "No results.\n");
    }

    #[test]
    fn test_json_output() {
        let text = render(|out| print_yield_spreads(out, &yield_rows(), OutputFormat::Json, 2));
        let parsed: Vec<YieldSpread> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, yield_rows());
    }

    #[test]
    fn test_combined_json() {
        let text = render(|out| print_combined_json(out, &yield_rows(), &curve_rows()));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["yield_spread"][0]["benchmark"], "G1");
        assert_eq!(value["spread_to_curve"][0]["bond"], "C1");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(-0.5, 2), "-0.50%");
        assert_eq!(format_percent(1.5, 0), "2%");
    }
}
