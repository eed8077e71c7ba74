//! Data-parallel reduction over a fixed number of workers.
//!
//! A call proceeds in three phases:
//!
//! 1. **Partition**: the point slice is split into `workers` contiguous
//!    segments with [`partition_bounds`]; the last segment absorbs the
//!    remainder and segments may be empty.
//! 2. **Map**: one scoped thread per segment scans its segment into a local
//!    [`SufficientStats`]. Workers share nothing mutable; each publishes a
//!    single value through its join handle.
//! 3. **Reduce**: the caller joins every worker, stores the partials by
//!    segment index and folds them in index order, so the combined sums do
//!    not depend on which worker finished first.

use crate::core::{OptionsError, Point, ReducerOptions, SufficientStats};
use crate::solvers::traits::Reducer;
use crate::utils::partition_bounds;
use std::panic;
use std::thread;

/// Reducer that splits the input across a fixed pool of worker threads.
///
/// # Example
///
/// ```rust
/// use ols_reduce::prelude::*;
///
/// let points: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 1.0 + 3.0 * i as f64)).collect();
/// let reducer = ParallelReducer::builder().workers(4).build()?;
/// let fitted = reducer.fit(&points);
///
/// assert!((fitted.slope - 3.0).abs() < 1e-9);
/// assert!((fitted.intercept - 1.0).abs() < 1e-9);
/// # Ok::<(), ols_reduce::core::OptionsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParallelReducer {
    options: ReducerOptions,
}

impl ParallelReducer {
    /// Create a new parallel reducer, validating the options.
    pub fn new(options: ReducerOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Create a builder for configuring the reducer.
    pub fn builder() -> ParallelReducerBuilder {
        ParallelReducerBuilder::default()
    }

    /// Number of segments / worker threads used per call.
    pub fn workers(&self) -> usize {
        self.options.workers
    }

    /// Compute the partial statistics of every segment, indexed by segment.
    ///
    /// Returns after all workers have completed. A segment whose worker
    /// thread cannot be spawned is scanned on the calling thread instead,
    /// which yields the same partial.
    pub fn partials(&self, points: &[Point]) -> Vec<SufficientStats> {
        let bounds = partition_bounds(points.len(), self.options.workers);
        tracing::trace!(
            n_points = points.len(),
            workers = bounds.len(),
            last_segment = bounds.last().map_or(0, |r| r.len()),
            "partitioned point set"
        );

        thread::scope(|scope| {
            let handles: Vec<_> = bounds
                .into_iter()
                .enumerate()
                .map(|(index, range)| {
                    let segment = &points[range];
                    thread::Builder::new()
                        .spawn_scoped(scope, move || SufficientStats::from_points(segment))
                        .map_err(|err| {
                            tracing::warn!(
                                segment = index,
                                %err,
                                "failed to spawn worker, reducing segment on the calling thread"
                            );
                            segment
                        })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle {
                    Ok(handle) => handle.join().unwrap_or_else(|err| panic::resume_unwind(err)),
                    Err(segment) => SufficientStats::from_points(segment),
                })
                .collect()
        })
    }
}

impl Reducer for ParallelReducer {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn reduce(&self, points: &[Point]) -> SufficientStats {
        self.partials(points)
            .into_iter()
            .fold(SufficientStats::ZERO, SufficientStats::combine)
    }
}

/// Builder for `ParallelReducer`.
#[derive(Debug, Clone, Default)]
pub struct ParallelReducerBuilder {
    options: ReducerOptions,
}

impl ParallelReducerBuilder {
    /// Set the number of workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.options.workers = workers;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: ReducerOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the reducer.
    pub fn build(self) -> Result<ParallelReducer, OptionsError> {
        ParallelReducer::new(self.options)
    }
}
