//! Regression result structures.

use super::stats::SufficientStats;
use std::fmt;

/// Result of a simple linear regression fit.
///
/// Besides the line itself, the result keeps the sums it was derived from and
/// the number of observations, so callers can compare how two reduction
/// strategies arrived at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    /// Estimated slope. Zero when the fit is degenerate.
    pub slope: f64,

    /// Estimated intercept. Zero when the fit is degenerate.
    pub intercept: f64,

    /// Number of observations the sums were accumulated over.
    pub n_observations: usize,

    /// Sufficient statistics the coefficients were derived from.
    pub stats: SufficientStats,

    /// True when the regression denominator was exactly zero
    /// (no variance in x, or no observations).
    pub degenerate: bool,
}

impl RegressionResult {
    /// Sentinel result for degenerate input: `(0, 0)` with the sums unchanged.
    pub(crate) fn degenerate(n_observations: usize, stats: SufficientStats) -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            n_observations,
            stats,
            degenerate: true,
        }
    }

    /// Returns `(slope, intercept)`.
    pub fn coefficients(&self) -> (f64, f64) {
        (self.slope, self.intercept)
    }

    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Returns true if the fit produced a usable line.
    pub fn is_valid(&self) -> bool {
        !self.degenerate
    }
}

impl fmt::Display for RegressionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slope = {:.2}, intercept = {:.2}",
            self.slope, self.intercept
        )?;
        if self.degenerate {
            write!(f, " (degenerate input)")?;
        }
        Ok(())
    }
}
