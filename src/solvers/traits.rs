//! Core traits for reduction strategies.

use crate::core::{Point, RegressionResult, SufficientStats};
use crate::solvers::closed_form::RegressionSolver;
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Error, PartialEq)]
pub enum RegressionError {
    #[error("degenerate input: denominator is zero for {n_observations} observations (all x equal or too few points)")]
    DegenerateInput { n_observations: usize },
}

/// A strategy for accumulating sufficient statistics over a point set.
///
/// Implementors only decide *how* the four sums are obtained. Turning them
/// into a slope and intercept is always delegated to [`RegressionSolver`], so
/// two reducers given the same points differ only by floating-point
/// reassociation.
pub trait Reducer {
    /// Short human-readable name used in reports.
    fn name(&self) -> &'static str;

    /// Accumulate Σx, Σy, Σxy and Σx² over `points`.
    ///
    /// The point set is only borrowed for the duration of the call.
    fn reduce(&self, points: &[Point]) -> SufficientStats;

    /// Fit a line through `points`.
    ///
    /// Degenerate input yields a flagged `(0, 0)` result rather than an error.
    fn fit(&self, points: &[Point]) -> RegressionResult {
        RegressionSolver::solve(points.len(), self.reduce(points))
    }

    /// Fit a line through `points`, returning an error on degenerate input.
    fn try_fit(&self, points: &[Point]) -> Result<RegressionResult, RegressionError> {
        RegressionSolver::solve_strict(points.len(), self.reduce(points))
    }
}
