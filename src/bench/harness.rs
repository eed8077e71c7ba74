//! Repeated timed runs of both reducers.

use super::dataset::Dataset;
use super::report::{Comparison, DatasetOutcome, RunSample, Stage, StrategySummary};
use crate::core::{HarnessOptions, OptionsError, Point, ReducerOptions, RegressionResult};
use crate::solvers::{ParallelReducer, Reducer, SequentialReducer};
use std::time::{Duration, Instant};

/// Runs the sequential and parallel reducers side by side.
///
/// # Example
///
/// ```rust
/// use ols_reduce::bench::Harness;
/// use ols_reduce::core::{HarnessOptions, Point, ReducerOptions};
///
/// let harness = Harness::new(
///     HarnessOptions::builder().runs(5).build()?,
///     ReducerOptions::with_workers(2),
/// )?;
/// let points: Vec<Point> = (0..100).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
/// let comparison = harness.compare(&points);
///
/// assert!(comparison.slope_difference() < 1e-9);
/// # Ok::<(), ols_reduce::core::OptionsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Harness {
    options: HarnessOptions,
    sequential: SequentialReducer,
    parallel: ParallelReducer,
}

impl Harness {
    /// Create a harness, validating both option sets.
    pub fn new(options: HarnessOptions, reducer: ReducerOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            sequential: SequentialReducer::new(),
            parallel: ParallelReducer::new(reducer)?,
        })
    }

    /// Harness options in effect.
    pub fn options(&self) -> &HarnessOptions {
        &self.options
    }

    /// Time `runs` fits of each reducer over `points`, alternating strategies.
    pub fn compare(&self, points: &[Point]) -> Comparison {
        let mut seq = Accumulator::new(self.sequential.name());
        let mut par = Accumulator::new(self.parallel.name());

        for run in 1..=self.options.runs {
            let keep = run <= self.options.display_runs;
            seq.record(run, keep, time_fit(&self.sequential, points));
            par.record(run, keep, time_fit(&self.parallel, points));
        }

        let runs = self.options.runs;
        let comparison = Comparison {
            n_points: points.len(),
            workers: self.parallel.workers(),
            runs,
            sequential: seq.finish(runs),
            parallel: par.finish(runs),
        };

        tracing::info!(
            n_points = comparison.n_points,
            workers = comparison.workers,
            runs,
            sequential_slope = comparison.sequential.mean_slope,
            parallel_slope = comparison.parallel.mean_slope,
            sequential_time = ?comparison.sequential.total_time,
            parallel_time = ?comparison.parallel.total_time,
            "compared reducers"
        );
        comparison
    }

    /// Load `dataset` and compare both reducers over it.
    ///
    /// An ingestion failure is returned as [`DatasetOutcome::Failed`].
    pub fn evaluate(&self, dataset: &Dataset) -> DatasetOutcome {
        let description = dataset.description.clone();

        let points = match dataset.load() {
            Ok(points) => points,
            Err(error) => {
                tracing::error!(
                    dataset = %description,
                    stage = %Stage::Ingestion,
                    %error,
                    "dataset aborted"
                );
                return DatasetOutcome::Failed {
                    description,
                    stage: Stage::Ingestion,
                    error,
                };
            }
        };

        let preview: Vec<Point> = points
            .iter()
            .take(self.options.preview_points)
            .copied()
            .collect();
        for (i, p) in preview.iter().enumerate() {
            tracing::debug!(dataset = %description, point = i + 1, x = p.x, y = p.y, "preview");
        }

        let comparison = self.compare(&points);
        DatasetOutcome::Completed {
            description,
            preview,
            comparison,
        }
    }

    /// Evaluate every dataset in order, continuing past failures.
    pub fn evaluate_all(&self, datasets: &[Dataset]) -> Vec<DatasetOutcome> {
        datasets.iter().map(|d| self.evaluate(d)).collect()
    }
}

fn time_fit<R: Reducer>(reducer: &R, points: &[Point]) -> (RegressionResult, Duration) {
    let start = Instant::now();
    let result = reducer.fit(points);
    (result, start.elapsed())
}

struct Accumulator {
    name: &'static str,
    slope: f64,
    intercept: f64,
    total_time: Duration,
    degenerate_runs: usize,
    samples: Vec<RunSample>,
}

impl Accumulator {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            slope: 0.0,
            intercept: 0.0,
            total_time: Duration::ZERO,
            degenerate_runs: 0,
            samples: Vec::new(),
        }
    }

    fn record(
        &mut self,
        run: usize,
        keep: bool,
        (result, elapsed): (RegressionResult, Duration),
    ) {
        self.slope += result.slope;
        self.intercept += result.intercept;
        self.total_time += elapsed;
        if result.degenerate {
            self.degenerate_runs += 1;
        }
        if keep {
            self.samples.push(RunSample {
                run,
                result,
                elapsed,
            });
        }
    }

    fn finish(self, runs: usize) -> StrategySummary {
        let divisor = runs.max(1) as f64;
        StrategySummary {
            name: self.name,
            mean_slope: self.slope / divisor,
            mean_intercept: self.intercept / divisor,
            runs,
            total_time: self.total_time,
            degenerate_runs: self.degenerate_runs,
            samples: self.samples,
        }
    }
}
