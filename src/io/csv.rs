//! CSV ingestion.
//!
//! The reader locates the predictor and response columns by header name and
//! parses every data row. A row with a missing or non-numeric field aborts the
//! whole read; rows are never skipped silently.

use crate::core::Point;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Default header of the predictor column.
pub const DEFAULT_X_COLUMN: &str = "Assessed Value";

/// Default header of the response column.
pub const DEFAULT_Y_COLUMN: &str = "Sale Amount";

/// Errors that can occur while ingesting a point set.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    #[error("row {row}: missing field for column '{column}'")]
    MissingField { row: usize, column: String },

    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: column '{column}' is not finite")]
    NonFinite { row: usize, column: String },
}

/// Configurable CSV point reader.
///
/// # Example
///
/// ```rust
/// use ols_reduce::io::PointReader;
///
/// let data = "Assessed Value,Sale Amount\n100,150\n200,310\n";
/// let points = PointReader::new().read(data.as_bytes())?;
/// assert_eq!(points.len(), 2);
/// # Ok::<(), ols_reduce::io::IngestionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PointReader {
    x_column: String,
    y_column: String,
    limit: Option<usize>,
}

impl Default for PointReader {
    fn default() -> Self {
        Self {
            x_column: DEFAULT_X_COLUMN.to_string(),
            y_column: DEFAULT_Y_COLUMN.to_string(),
            limit: None,
        }
    }
}

impl PointReader {
    /// Reader for the default `Assessed Value` / `Sale Amount` columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predictor column header.
    pub fn x_column(mut self, name: impl Into<String>) -> Self {
        self.x_column = name.into();
        self
    }

    /// Set the response column header.
    pub fn y_column(mut self, name: impl Into<String>) -> Self {
        self.y_column = name.into();
        self
    }

    /// Keep only the first `limit` points.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Read points from any byte source.
    pub fn read<R: Read>(&self, source: R) -> Result<Vec<Point>, IngestionError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .trim(::csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let x_idx = column_index(&headers, &self.x_column)?;
        let y_idx = column_index(&headers, &self.y_column)?;

        let mut points = Vec::new();
        for (i, record) in reader.records().enumerate() {
            if self.limit.is_some_and(|limit| points.len() >= limit) {
                break;
            }
            let record = record?;
            let row = i + 1;
            let x = parse_field(&record, x_idx, &self.x_column, row)?;
            let y = parse_field(&record, y_idx, &self.y_column, row)?;
            points.push(Point::new(x, y));
        }

        tracing::debug!(
            rows = points.len(),
            x_column = %self.x_column,
            y_column = %self.y_column,
            "read point set"
        );
        Ok(points)
    }

    /// Read points from a file on disk.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Vec<Point>, IngestionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestionError::Open {
            path: path.display().to_string(),
            source,
        })?;
        self.read(BufReader::new(file))
    }
}

/// Read points with the default column headers.
pub fn read_points<R: Read>(source: R) -> Result<Vec<Point>, IngestionError> {
    PointReader::new().read(source)
}

/// Read points from a file with the default column headers.
pub fn read_points_path(path: impl AsRef<Path>) -> Result<Vec<Point>, IngestionError> {
    PointReader::new().read_path(path)
}

/// Keep only the first `limit` points. A limit past the end is a no-op.
pub fn truncate(points: &mut Vec<Point>, limit: Option<usize>) {
    if let Some(limit) = limit {
        points.truncate(limit);
    }
}

fn column_index(headers: &::csv::StringRecord, name: &str) -> Result<usize, IngestionError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IngestionError::MissingColumn(name.to_string()))
}

fn parse_field(
    record: &::csv::StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> Result<f64, IngestionError> {
    let raw = record.get(idx).ok_or_else(|| IngestionError::MissingField {
        row,
        column: column.to_string(),
    })?;

    let value: f64 = raw.parse().map_err(|_| IngestionError::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(IngestionError::NonFinite {
            row,
            column: column.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Serial Number,Assessed Value,Sale Amount,Town
1,100.0,150.0,Ashford
2, 200.5 ,310.25,Avon
3,50,80,Bethel
";

    #[test]
    fn test_read_by_header_name() {
        let points = read_points(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            points,
            vec![
                Point::new(100.0, 150.0),
                Point::new(200.5, 310.25),
                Point::new(50.0, 80.0),
            ]
        );
    }

    #[test]
    fn test_header_only_yields_empty() {
        let points = read_points("Assessed Value,Sale Amount\n".as_bytes()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = read_points("Assessed Value,Price\n1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestionError::MissingColumn(ref c) if c == "Sale Amount"));
    }

    #[test]
    fn test_non_numeric_value() {
        let data = "Assessed Value,Sale Amount\n1,2\nabc,4\n";
        let err = read_points(data.as_bytes()).unwrap_err();

        match err {
            IngestionError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Assessed Value");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_field_is_invalid() {
        let data = "Assessed Value,Sale Amount\n1,\n";
        let err = read_points(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestionError::InvalidNumber { row: 1, .. }));
    }

    #[test]
    fn test_non_finite_value() {
        let data = "Assessed Value,Sale Amount\nNaN,2\n";
        let err = read_points(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestionError::NonFinite { row: 1, .. }));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let data = "Assessed Value,Sale Amount\n1,2\n3\n";
        let err = read_points(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestionError::Csv(_)));
    }

    #[test]
    fn test_custom_columns_and_limit() {
        let data = "a,b\n1,2\n3,4\n5,6\n";
        let points = PointReader::new()
            .x_column("b")
            .y_column("a")
            .limit(2)
            .read(data.as_bytes())
            .unwrap();

        assert_eq!(points, vec![Point::new(2.0, 1.0), Point::new(4.0, 3.0)]);
    }

    #[test]
    fn test_limit_skips_trailing_bad_rows() {
        let data = "Assessed Value,Sale Amount\n1,2\nbad,4\n";
        let points = PointReader::new().limit(1).read(data.as_bytes()).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = read_points_path("/nonexistent/ols-reduce/data.csv").unwrap_err();
        assert!(matches!(err, IngestionError::Open { .. }));
    }

    #[test]
    fn test_truncate() {
        let mut points = vec![Point::new(1.0, 1.0); 5];
        truncate(&mut points, Some(10));
        assert_eq!(points.len(), 5);
        truncate(&mut points, Some(2));
        assert_eq!(points.len(), 2);
        truncate(&mut points, None);
        assert_eq!(points.len(), 2);
    }
}
