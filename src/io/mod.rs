//! Ingestion of point sets from delimited text.

mod csv;

pub use self::csv::{
    read_points, read_points_path, truncate, IngestionError, PointReader, DEFAULT_X_COLUMN,
    DEFAULT_Y_COLUMN,
};
