use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by dataset loading and validation.
///
/// A `ValidationReport` is only ever produced from a snapshot that loaded
/// cleanly; any of these variants aborts the run instead, so a zero-mismatch
/// report can never mean "could not check".
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing table file: {0}")]
    MissingTable(PathBuf),
    #[error("invalid row in table `{table}`: {source}")]
    InvalidRow {
        table: &'static str,
        source: csv::Error,
    },
    #[error("store unavailable: {0}")]
    Store(String),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for ValidationError {
    fn from(err: rocksdb::Error) -> Self {
        ValidationError::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
