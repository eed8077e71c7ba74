//! Dataset descriptors.

use crate::core::Point;
use crate::io::{truncate, IngestionError, PointReader};
use std::path::PathBuf;

/// Where a dataset's CSV text comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// A file on disk.
    Path(PathBuf),
    /// CSV text already held in memory.
    Text(String),
}

/// A named dataset with an optional input-size limit.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Label used in reports.
    pub description: String,
    /// CSV source.
    pub source: DataSource,
    /// Keep only the first `limit` points.
    pub limit: Option<usize>,
    /// Column configuration used when reading the source.
    pub reader: PointReader,
}

impl Dataset {
    /// Dataset backed by a CSV file.
    pub fn from_path(description: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(description, DataSource::Path(path.into()))
    }

    /// Dataset backed by in-memory CSV text.
    pub fn from_text(description: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(description, DataSource::Text(text.into()))
    }

    fn new(description: impl Into<String>, source: DataSource) -> Self {
        Self {
            description: description.into(),
            source,
            limit: None,
            reader: PointReader::new(),
        }
    }

    /// Keep only the first `limit` points.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Use a custom column configuration.
    pub fn with_reader(mut self, reader: PointReader) -> Self {
        self.reader = reader;
        self
    }

    /// Ingest the whole source, then keep the first `limit` points.
    ///
    /// Every row is validated even when a limit is set.
    pub fn load(&self) -> Result<Vec<Point>, IngestionError> {
        let mut points = match &self.source {
            DataSource::Path(path) => self.reader.read_path(path)?,
            DataSource::Text(text) => self.reader.read(text.as_bytes())?,
        };
        truncate(&mut points, self.limit);
        Ok(points)
    }
}
