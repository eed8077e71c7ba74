//! Utility functions.

mod partition;

pub use partition::{partition_bounds, segment_sizes};
