//! CSV reader for the movie dataset.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::{MovieDataset, MovieRecord};

/// Errors raised while reading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV data at record {record}")]
    Csv {
        record: usize,
        #[source]
        source: csv::Error,
    },
}

/// Reads movie rows from a CSV file.
///
/// A leading UTF-8 byte order mark is ignored.
pub struct MovieFileReader {
    path: PathBuf,
}

impl MovieFileReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every row of the file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read and
    /// [`DatasetError::Csv`] on the first malformed row.
    pub fn read_records(&self) -> Result<Vec<MovieRecord>, DatasetError> {
        let content = fs::read_to_string(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records = Self::read_records_from(content.trim_start_matches('\u{feff}').as_bytes())?;
        info!(path = %self.path.display(), records = records.len(), "Movie file read");

        Ok(records)
    }

    /// Reads rows from any CSV source with a header line.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Csv`] on the first malformed row. `record` is 1-based and
    /// does not count the header.
    pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<MovieRecord>, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        reader
            .deserialize()
            .enumerate()
            .map(|(index, row)| {
                row.map_err(|source| DatasetError::Csv {
                    record: index + 1,
                    source,
                })
            })
            .collect()
    }

    /// Reads the file and builds the movie dataset from it.
    pub fn read_dataset(&self) -> Result<MovieDataset, DatasetError> {
        Ok(MovieDataset::from_records(&self.read_records()?))
    }
}
