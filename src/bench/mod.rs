//! Timing harness comparing the sequential and parallel reducers.
//!
//! The harness is a thin layer around the core: it loads datasets, repeats
//! each fit a configurable number of times under a timer, averages the
//! coefficients and reports through `tracing`. It never aborts a batch
//! because one dataset failed to load.

mod dataset;
mod harness;
mod report;

pub use dataset::{DataSource, Dataset};
pub use harness::Harness;
pub use report::{Comparison, DatasetOutcome, RunSample, Stage, StrategySummary};
