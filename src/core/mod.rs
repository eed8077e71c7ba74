//! Core types for regression analysis.

mod options;
mod point;
mod result;
mod stats;

pub use options::{
    HarnessOptions, HarnessOptionsBuilder, OptionsError, ReducerOptions, ReducerOptionsBuilder,
    DEFAULT_WORKERS,
};
pub use point::{points_from_columns, ColumnMismatch, Point};
pub use result::RegressionResult;
pub use stats::SufficientStats;
