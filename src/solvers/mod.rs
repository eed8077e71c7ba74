//! Reduction strategies and the closed-form solver they share.

mod closed_form;
mod parallel;
mod sequential;
mod traits;

pub use closed_form::RegressionSolver;
pub use parallel::{ParallelReducer, ParallelReducerBuilder};
pub use sequential::SequentialReducer;
pub use traits::{Reducer, RegressionError};
