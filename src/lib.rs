//! Sequential and data-parallel simple linear regression.
//!
//! This library fits an ordinary least-squares line through (assessed value,
//! sale amount) pairs in two ways and makes the two directly comparable:
//!
//! * [`SequentialReducer`](solvers::SequentialReducer) accumulates the
//!   sufficient statistics Σx, Σy, Σxy, Σx² in one linear scan.
//! * [`ParallelReducer`](solvers::ParallelReducer) splits the points into a
//!   fixed number of contiguous segments, scans them on scoped worker threads
//!   and folds the partial sums in segment order.
//!
//! Both hand their sums to the same closed-form
//! [`RegressionSolver`](solvers::RegressionSolver), so results differ only by
//! floating-point reassociation.
//!
//! # Example
//!
//! ```rust
//! use ols_reduce::prelude::*;
//!
//! let points: Vec<Point> = (0..1_000)
//!     .map(|i| Point::new(i as f64, 3.0 + 0.5 * i as f64))
//!     .collect();
//!
//! let sequential = SequentialReducer::new().fit(&points);
//! let parallel = ParallelReducer::builder().workers(4).build()?.fit(&points);
//!
//! assert!((sequential.slope - parallel.slope).abs() < 1e-9);
//! assert!((parallel.intercept - 3.0).abs() < 1e-9);
//! # Ok::<(), OptionsError>(())
//! ```

pub mod bench;
pub mod core;
pub mod io;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        HarnessOptions, OptionsError, Point, ReducerOptions, RegressionResult, SufficientStats,
    };
    pub use crate::solvers::{
        ParallelReducer, Reducer, RegressionError, RegressionSolver, SequentialReducer,
    };
}

pub use crate::core::{Point, RegressionResult, SufficientStats};
pub use crate::solvers::{ParallelReducer, Reducer, RegressionSolver, SequentialReducer};
