//! Benchmark report structures.

use crate::core::{Point, RegressionResult};
use crate::io::IngestionError;
use std::fmt;
use std::time::Duration;

/// One timed fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSample {
    /// 1-based run number.
    pub run: usize,
    /// Result of the fit.
    pub result: RegressionResult,
    /// Wall-clock time of the call.
    pub elapsed: Duration,
}

/// Aggregated timings and coefficients of one reduction strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    /// Strategy name (`sequential` or `parallel`).
    pub name: &'static str,
    /// Mean slope over all runs.
    pub mean_slope: f64,
    /// Mean intercept over all runs.
    pub mean_intercept: f64,
    /// Number of timed runs.
    pub runs: usize,
    /// Sum of the elapsed time of all runs.
    pub total_time: Duration,
    /// Number of runs that hit the degenerate-input path.
    pub degenerate_runs: usize,
    /// The first few runs, kept for display.
    pub samples: Vec<RunSample>,
}

impl StrategySummary {
    /// Mean elapsed time per run.
    pub fn mean_time(&self) -> Duration {
        if self.runs == 0 {
            return Duration::ZERO;
        }
        self.total_time.div_f64(self.runs as f64)
    }
}

/// Side-by-side result of running both reducers over the same points.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Number of points fitted.
    pub n_points: usize,
    /// Worker count of the parallel reducer.
    pub workers: usize,
    /// Number of timed runs per strategy.
    pub runs: usize,
    /// Summary of the single-threaded reducer.
    pub sequential: StrategySummary,
    /// Summary of the multi-threaded reducer.
    pub parallel: StrategySummary,
}

impl Comparison {
    /// Absolute difference between the mean slopes of the two strategies.
    pub fn slope_difference(&self) -> f64 {
        (self.sequential.mean_slope - self.parallel.mean_slope).abs()
    }

    /// Absolute difference between the mean intercepts of the two strategies.
    pub fn intercept_difference(&self) -> f64 {
        (self.sequential.mean_intercept - self.parallel.mean_intercept).abs()
    }

    /// Sequential time divided by parallel time, if the latter is nonzero.
    pub fn speedup(&self) -> Option<f64> {
        let parallel = self.parallel.total_time.as_secs_f64();
        (parallel > 0.0).then(|| self.sequential.total_time.as_secs_f64() / parallel)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} points, {} workers, {} runs",
            self.n_points, self.workers, self.runs
        )?;
        for (seq, par) in self.sequential.samples.iter().zip(&self.parallel.samples) {
            writeln!(
                f,
                "  run {:>3} - sequential: {}, time = {:?}",
                seq.run, seq.result, seq.elapsed
            )?;
            writeln!(
                f,
                "  run {:>3} - parallel:   {}, time = {:?}",
                par.run, par.result, par.elapsed
            )?;
        }
        for summary in [&self.sequential, &self.parallel] {
            writeln!(
                f,
                "  mean {:<10} - slope = {:.2}, intercept = {:.2}, total time = {:?}",
                summary.name, summary.mean_slope, summary.mean_intercept, summary.total_time
            )?;
        }
        if let Some(speedup) = self.speedup() {
            write!(f, "  speedup: {speedup:.2}x")?;
        }
        Ok(())
    }
}

/// Pipeline stage at which a dataset evaluation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Ingestion,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Ingestion => f.write_str("ingestion"),
        }
    }
}

/// Outcome of evaluating one dataset.
#[derive(Debug)]
pub enum DatasetOutcome {
    /// Both reducers ran over the dataset.
    Completed {
        description: String,
        /// The first few points of the (limited) dataset.
        preview: Vec<Point>,
        comparison: Comparison,
    },
    /// The dataset was abandoned; other datasets are unaffected.
    Failed {
        description: String,
        stage: Stage,
        error: IngestionError,
    },
}

impl DatasetOutcome {
    /// Dataset label.
    pub fn description(&self) -> &str {
        match self {
            DatasetOutcome::Completed { description, .. }
            | DatasetOutcome::Failed { description, .. } => description,
        }
    }

    /// The comparison, if the dataset completed.
    pub fn comparison(&self) -> Option<&Comparison> {
        match self {
            DatasetOutcome::Completed { comparison, .. } => Some(comparison),
            DatasetOutcome::Failed { .. } => None,
        }
    }

    /// Returns true if the dataset failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, DatasetOutcome::Failed { .. })
    }
}

impl fmt::Display for DatasetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetOutcome::Completed {
                description,
                comparison,
                ..
            } => write!(f, "[{description}] {comparison}"),
            DatasetOutcome::Failed {
                description,
                stage,
                error,
            } => write!(f, "[{description}] failed during {stage}: {error}"),
        }
    }
}
