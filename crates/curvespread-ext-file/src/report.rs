//! Plain-text spread reports.
//!
//! Each report is a header line followed by one line per corporate bond,
//! spreads in percent with a trailing `%`:
//!
//! ```text
//! bond,benchmark,spread_to_benchmark
//! C1,G1,1.60%
//! ```
//!
//! ```text
//! bond,spread_to_curve
//! C1,1.43%
//! ```

use std::io::Write;

use curvespread_spreads::{CurveSpread, YieldSpread};

use crate::error::FileResult;

/// Header line of the yield spread report.
pub const YIELD_SPREAD_HEADER: &str = "bond,benchmark,spread_to_benchmark";

/// Header line of the spread-to-curve report.
pub const CURVE_SPREAD_HEADER: &str = "bond,spread_to_curve";

/// Decimal places used when no precision is configured.
pub const DEFAULT_PRECISION: usize = 2;

fn yield_spread_line(row: &YieldSpread, precision: usize) -> String {
    format!(
        "{},{},{:.prec$}%",
        row.bond,
        row.benchmark,
        row.spread_to_benchmark,
        prec = precision
    )
}

fn curve_spread_line(row: &CurveSpread, precision: usize) -> String {
    format!("{},{:.prec$}%", row.bond, row.spread_to_curve, prec = precision)
}

fn render<T>(header: &str, rows: &[T], line: impl Fn(&T) -> String) -> String {
    let mut out = String::with_capacity((rows.len() + 1) * 24);
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

fn write<T, W: Write>(
    out: &mut W,
    header: &str,
    rows: &[T],
    line: impl Fn(&T) -> String,
) -> FileResult<()> {
    writeln!(out, "{header}")?;
    for row in rows {
        writeln!(out, "{}", line(row))?;
    }
    Ok(())
}

/// Renders the yield spread report.
pub fn render_yield_spreads(rows: &[YieldSpread], precision: usize) -> String {
    render(YIELD_SPREAD_HEADER, rows, |r| yield_spread_line(r, precision))
}

/// Renders the spread-to-curve report.
pub fn render_spreads_to_curve(rows: &[CurveSpread], precision: usize) -> String {
    render(CURVE_SPREAD_HEADER, rows, |r| curve_spread_line(r, precision))
}

/// Streams the yield spread report to a writer.
pub fn write_yield_spreads<W: Write>(
    out: &mut W,
    rows: &[YieldSpread],
    precision: usize,
) -> FileResult<()> {
    write(out, YIELD_SPREAD_HEADER, rows, |r| yield_spread_line(r, precision))
}

/// Streams the spread-to-curve report to a writer.
pub fn write_spreads_to_curve<W: Write>(
    out: &mut W,
    rows: &[CurveSpread],
    precision: usize,
) -> FileResult<()> {
    write(out, CURVE_SPREAD_HEADER, rows, |r| curve_spread_line(r, precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yield_rows() -> Vec<YieldSpread> {
        vec![
            YieldSpread {
                bond: "C1".into(),
                benchmark: "G1".into(),
                spread_to_benchmark: 1.6,
            },
            YieldSpread {
                bond: "C2".into(),
                benchmark: "G2".into(),
                spread_to_benchmark: 1.499_999_999_999_999_8,
            },
        ]
    }

    #[test]
    fn test_yield_spread_report() {
        assert_eq!(
            render_yield_spreads(&yield_rows(), DEFAULT_PRECISION),
            "bond,benchmark,spread_to_benchmark\nC1,G1,1.60%\nC2,G2,1.50%\n"
        );
    }

    #[test]
    fn test_curve_report_precision() {
        let rows = vec![CurveSpread {
            bond: "C1".into(),
            spread_to_curve: 1.428_571_428_571_428_6,
        }];
        assert_eq!(
            render_spreads_to_curve(&rows, 2),
            "bond,spread_to_curve\nC1,1.43%\n"
        );
        assert_eq!(
            render_spreads_to_curve(&rows, 4),
            "bond,spread_to_curve\nC1,1.4286%\n"
        );
        assert_eq!(render_spreads_to_curve(&rows, 0), "bond,spread_to_curve\nC1,1%\n");
    }

    #[test]
    fn test_negative_spread() {
        let rows = vec![CurveSpread {
            bond: "C9".into(),
            spread_to_curve: -0.755,
        }];
        assert!(render_spreads_to_curve(&rows, 1).ends_with("C9,-0.8%\n"));
    }

    #[test]
    fn test_empty_report_is_header_only() {
        assert_eq!(render_yield_spreads(&[], 2), format!("{YIELD_SPREAD_HEADER}\n"));
        assert_eq!(render_spreads_to_curve(&[], 2), format!("{CURVE_SPREAD_HEADER}\n"));
    }

    #[test]
    fn test_write_matches_render() {
        let mut out = Vec::new();
        write_yield_spreads(&mut out, &yield_rows(), 3).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            render_yield_spreads(&yield_rows(), 3)
        );
    }
}
