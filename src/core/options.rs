//! Reducer and harness configuration.

use thiserror::Error;

/// Default number of workers used by the parallel reducer.
pub const DEFAULT_WORKERS: usize = 4;

/// Configuration for the reducers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducerOptions {
    /// Number of contiguous segments / worker threads (default: 4).
    pub workers: usize,
}

impl Default for ReducerOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Configuration for the benchmark harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Number of timed repetitions per strategy (default: 1000).
    pub runs: usize,
    /// Number of leading runs whose individual results are kept (default: 10).
    pub display_runs: usize,
    /// Number of leading points included in the dataset preview (default: 100).
    pub preview_points: usize,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            runs: 1000,
            display_runs: 10,
            preview_points: 100,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("workers must be at least 1, got {0}")]
    InvalidWorkers(usize),
    #[error("runs must be at least 1, got {0}")]
    InvalidRuns(usize),
}

impl ReducerOptions {
    /// Create a new builder for reducer options.
    pub fn builder() -> ReducerOptionsBuilder {
        ReducerOptionsBuilder::default()
    }

    /// Options with the given worker count.
    pub fn with_workers(workers: usize) -> Self {
        Self { workers }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.workers < 1 {
            return Err(OptionsError::InvalidWorkers(self.workers));
        }
        Ok(())
    }
}

impl HarnessOptions {
    /// Create a new builder for harness options.
    pub fn builder() -> HarnessOptionsBuilder {
        HarnessOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.runs < 1 {
            return Err(OptionsError::InvalidRuns(self.runs));
        }
        Ok(())
    }
}

/// Builder for `ReducerOptions`.
#[derive(Debug, Clone, Default)]
pub struct ReducerOptionsBuilder {
    options: ReducerOptions,
}

impl ReducerOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of workers.
    pub fn workers(mut self, workers: usize) -> Self {
        self.options.workers = workers;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<ReducerOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> ReducerOptions {
        self.options
    }
}

/// Builder for `HarnessOptions`.
#[derive(Debug, Clone, Default)]
pub struct HarnessOptionsBuilder {
    options: HarnessOptions,
}

impl HarnessOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of timed repetitions.
    pub fn runs(mut self, runs: usize) -> Self {
        self.options.runs = runs;
        self
    }

    /// Set how many individual runs are kept for display.
    pub fn display_runs(mut self, display_runs: usize) -> Self {
        self.options.display_runs = display_runs;
        self
    }

    /// Set how many points are included in the dataset preview.
    pub fn preview_points(mut self, preview_points: usize) -> Self {
        self.options.preview_points = preview_points;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<HarnessOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> HarnessOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ReducerOptions::default();
        assert_eq!(opts.workers, 4);

        let harness = HarnessOptions::default();
        assert_eq!(harness.runs, 1000);
        assert_eq!(harness.display_runs, 10);
        assert_eq!(harness.preview_points, 100);
    }

    #[test]
    fn test_builder() {
        let opts = ReducerOptions::builder().workers(8).build().unwrap();
        assert_eq!(opts.workers, 8);
    }

    #[test]
    fn test_validation_zero_workers() {
        let result = ReducerOptions::builder().workers(0).build();
        assert_eq!(result, Err(OptionsError::InvalidWorkers(0)));
    }

    #[test]
    fn test_with_workers() {
        let opts = ReducerOptions::with_workers(2);
        assert_eq!(opts.workers, 2);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_harness_builder() {
        let opts = HarnessOptions::builder()
            .runs(5)
            .display_runs(2)
            .preview_points(3)
            .build()
            .unwrap();

        assert_eq!(opts.runs, 5);
        assert_eq!(opts.display_runs, 2);
        assert_eq!(opts.preview_points, 3);
    }

    #[test]
    fn test_harness_validation_zero_runs() {
        let result = HarnessOptions::builder().runs(0).build();
        assert!(matches!(result, Err(OptionsError::InvalidRuns(0))));
    }

    #[test]
    fn test_build_unchecked_skips_validation() {
        let opts = ReducerOptionsBuilder::new().workers(0).build_unchecked();
        assert_eq!(opts.workers, 0);
    }
}
