//! Closed-form ordinary least squares from sufficient statistics.

use crate::core::{RegressionResult, SufficientStats};
use crate::solvers::traits::RegressionError;

/// Converts accumulated sums into a slope and intercept.
///
/// ```text
/// denom     = n·Σx² − (Σx)²
/// slope     = (n·Σxy − Σx·Σy) / denom
/// intercept = (Σy − slope·Σx) / n
/// ```
///
/// Degeneracy is detected with an exact `denom == 0.0` comparison. A
/// near-zero denominator (nearly constant x) passes the check and can produce
/// very large, unstable slopes. The same holds for a constant x that is not
/// exactly representable in binary (e.g. `0.1`): rounding in Σx and Σx² can
/// leave a tiny nonzero denominator, and whether it does depends on the
/// accumulation order, so the sequential and parallel reducers may disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegressionSolver;

impl RegressionSolver {
    /// Solve for `n` observations.
    ///
    /// A zero denominator (including `n == 0`) is reported through a
    /// `tracing` warning and a result with `degenerate = true`, slope and
    /// intercept `0.0` and the sums unchanged.
    pub fn solve(n: usize, stats: SufficientStats) -> RegressionResult {
        match Self::solve_strict(n, stats) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    n_observations = n,
                    sum_x = stats.sum_x,
                    sum_x2 = stats.sum_x2,
                    "{err}; check the input data"
                );
                RegressionResult::degenerate(n, stats)
            }
        }
    }

    /// Solve for `n` observations, returning an error on a zero denominator.
    pub fn solve_strict(
        n: usize,
        stats: SufficientStats,
    ) -> Result<RegressionResult, RegressionError> {
        if !stats.is_finite() {
            tracing::warn!(
                n_observations = n,
                ?stats,
                "sums overflowed or contain non-finite values; coefficients will not be finite"
            );
        }

        let denom = stats.denominator(n);
        if denom == 0.0 {
            return Err(RegressionError::DegenerateInput { n_observations: n });
        }

        let nf = n as f64;
        let slope = (nf * stats.sum_xy - stats.sum_x * stats.sum_y) / denom;
        let intercept = (stats.sum_y - slope * stats.sum_x) / nf;

        Ok(RegressionResult {
            slope,
            intercept,
            n_observations: n,
            stats,
            degenerate: false,
        })
    }
}
