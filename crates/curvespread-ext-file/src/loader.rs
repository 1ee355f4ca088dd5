//! CSV ingestion of bond rows.
//!
//! The first row is a header and is skipped. Columns are positional:
//! `id, category, term, yield`. Extra trailing columns are ignored.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use curvespread_spreads::{PartitionOptions, RawBondRow, SpreadSession};

use crate::error::{FileError, FileResult};
use crate::normalize::{normalize_term, normalize_yield};

const COLUMNS: [&str; 4] = ["id", "category", "term", "yield"];

/// Reads bond rows from a CSV file.
pub fn load_rows(path: impl AsRef<Path>) -> FileResult<Vec<RawBondRow>> {
    let path = path.as_ref();
    let reader = builder()
        .from_path(path)
        .map_err(|source| FileError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), "reading bond file");
    collect(reader)
}

/// Reads bond rows from any CSV source.
///
/// ```rust
/// use curvespread_ext_file::read_rows;
///
/// let data = "bond,type,term,yield\nC1,corporate,1.3 years,3.30%\n";
/// let rows = read_rows(data.as_bytes()).unwrap();
///
/// assert_eq!(rows[0].id, "C1");
/// assert_eq!(rows[0].term, 1.3);
/// assert_eq!(rows[0].yield_rate, 3.3);
/// ```
pub fn read_rows<R: Read>(reader: R) -> FileResult<Vec<RawBondRow>> {
    collect(builder().from_reader(reader))
}

/// Reads a CSV file and builds a spread session from it.
pub fn load_session(
    path: impl AsRef<Path>,
    options: &PartitionOptions,
) -> FileResult<SpreadSession> {
    let rows = load_rows(path)?;
    Ok(SpreadSession::from_rows(rows, options)?)
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true).trim(Trim::All);
    builder
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> FileResult<Vec<RawBondRow>> {
    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        rows.push(parse_record(&record, rows.len() + 1)?);
    }

    debug!(rows = rows.len(), "bond rows read");
    Ok(rows)
}

fn parse_record(record: &StringRecord, row: usize) -> FileResult<RawBondRow> {
    let field = |index: usize| {
        record.get(index).ok_or(FileError::MissingColumn {
            row,
            column: COLUMNS[index],
        })
    };

    let id = field(0)?;
    let category = field(1)?;
    let term = normalize_term(field(2)?).map_err(|e| e.at(row, COLUMNS[2]))?;
    let yield_rate = normalize_yield(field(3)?).map_err(|e| e.at(row, COLUMNS[3]))?;

    Ok(RawBondRow::new(id, category, term, yield_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
bond,type,term,yield
C1,corporate,10.3 years,5.30%
G1,government,9.4 years,3.70%
C2,corporate,15.2 years,8.30%
";

    #[test]
    fn test_read_sample() {
        let rows = read_rows(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], RawBondRow::new("G1", "government", 9.4, 3.7));
        assert_eq!(rows[2].id, "C2");
    }

    #[test]
    fn test_header_only() {
        assert!(read_rows("bond,type,term,yield\n".as_bytes()).unwrap().is_empty());
        assert!(read_rows("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_fields_trimmed() {
        let data = "bond,type,term,yield\n  C1 , corporate ,  2 years , 3.5% \n";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0], RawBondRow::new("C1", "corporate", 2.0, 3.5));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let data = "bond,type,term,yield,rating\nG1,government,1 year,1.00%,AAA\n";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0].yield_rate, 1.0);
    }

    #[test]
    fn test_missing_column() {
        let data = "bond,type,term,yield\nC1,corporate,1 year,2%\nC2,corporate\n";
        let err = read_rows(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            FileError::MissingColumn { row: 2, column: "term" }
        ));
    }

    #[test]
    fn test_invalid_field_reports_row() {
        let data = "bond,type,term,yield\nC1,corporate,1 year,2%\nC2,corporate,soon,2%\n";
        let err = read_rows(data.as_bytes()).unwrap_err();
        match err {
            FileError::InvalidField {
                row, column, text, ..
            } => {
                assert_eq!(row, 2);
                assert_eq!(column, "term");
                assert_eq!(text, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_rows("/nonexistent/bonds.csv").unwrap_err();
        assert!(matches!(err, FileError::Open { .. }));
    }
}
