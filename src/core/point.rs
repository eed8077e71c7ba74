//! Observation type consumed by the reducers.

use faer::Col;
use thiserror::Error;

/// A single (assessed value, sale amount) observation.
///
/// Points carry no identity beyond their value and are never mutated after
/// ingestion. Collections of points are passed to the reducers as borrowed
/// slices (`&[Point]`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Predictor: the assessed value of the property.
    pub x: f64,
    /// Response: the recorded sale amount.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Error returned when two columns cannot be zipped into points.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("column length mismatch: x has {x_len} elements but y has {y_len}")]
pub struct ColumnMismatch {
    pub x_len: usize,
    pub y_len: usize,
}

/// Build a point set from a predictor column and a response column.
///
/// # Arguments
/// * `x` - Assessed values
/// * `y` - Sale amounts, same length as `x`
pub fn points_from_columns(x: &Col<f64>, y: &Col<f64>) -> Result<Vec<Point>, ColumnMismatch> {
    if x.nrows() != y.nrows() {
        return Err(ColumnMismatch {
            x_len: x.nrows(),
            y_len: y.nrows(),
        });
    }

    Ok((0..x.nrows()).map(|i| Point::new(x[i], y[i])).collect())
}
