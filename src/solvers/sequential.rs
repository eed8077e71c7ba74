//! Single-threaded reduction.

use crate::core::{Point, SufficientStats};
use crate::solvers::traits::Reducer;

/// Accumulates the sufficient statistics in one linear scan.
///
/// Every point is visited exactly once, in slice order, so repeated calls on
/// the same input return bit-identical sums.
///
/// # Example
///
/// ```rust
/// use ols_reduce::prelude::*;
///
/// let points = [Point::new(1.0, 2.0), Point::new(2.0, 4.0), Point::new(3.0, 6.0)];
/// let fitted = SequentialReducer::new().fit(&points);
///
/// assert!((fitted.slope - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialReducer;

impl SequentialReducer {
    /// Create a new sequential reducer.
    pub fn new() -> Self {
        Self
    }
}

impl Reducer for SequentialReducer {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn reduce(&self, points: &[Point]) -> SufficientStats {
        SufficientStats::from_points(points)
    }
}
