//! Snapshot store
//!
//! Discovers Parquet files under the snapshot directory, scans them into a
//! single `DataFrame` and memoizes the result. The table is read-only after
//! the one-time load, so readers need no further synchronization.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use polars::prelude::*;

use crate::error::{DatasetError, Result};
use crate::schema;

/// In-memory sales table, loaded from a Parquet snapshot on first access
pub struct SalesStore {
    /// Snapshot directory
    path: PathBuf,

    /// One-time-initialization guard around the loaded table
    frame: OnceLock<DataFrame>,
}

impl std::fmt::Debug for SalesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesStore")
            .field("path", &self.path)
            .field("loaded", &self.frame.get().is_some())
            .finish()
    }
}

impl SalesStore {
    /// Create a store over a snapshot directory. Nothing is read until
    /// `frame()` is first called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            frame: OnceLock::new(),
        }
    }

    /// Snapshot directory this store reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The sales table, loading the snapshot on first use.
    ///
    /// A failed load is not memoized; the next call retries the read.
    pub fn frame(&self) -> Result<&DataFrame> {
        if let Some(frame) = self.frame.get() {
            return Ok(frame);
        }
        let frame = self.read_snapshot()?;
        Ok(self.frame.get_or_init(|| frame))
    }

    /// Discover all Parquet files under the snapshot directory
    fn discover_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = format!("{}/**/*.parquet", self.path.display());

        let mut files: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(std::result::Result::ok)
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(DatasetError::SnapshotMissing(format!(
                "no parquet files found under {}",
                self.path.display()
            )));
        }

        tracing::debug!(
            file_count = files.len(),
            path = %self.path.display(),
            "discovered snapshot files"
        );

        Ok(files)
    }

    /// Scan all snapshot files as one table, normalize the date column and
    /// check the schema contract.
    fn read_snapshot(&self) -> Result<DataFrame> {
        let files = self.discover_files()?;

        let mut lf = LazyFrame::scan_parquet_files(files.into(), ScanArgsParquet::default())?;

        let snapshot_schema = lf.collect_schema()?;
        for column in schema::REQUIRED_COLUMNS {
            if snapshot_schema.get(column).is_none() {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        // Date filters compare typed dates; normalize here so the query
        // layer never sees a datetime or string column.
        let frame = lf
            .with_column(col(schema::COL_DATE).cast(DataType::Date))
            .collect()?;

        tracing::info!(
            rows = frame.height(),
            path = %self.path.display(),
            "sales snapshot loaded"
        );

        Ok(frame)
    }
}
