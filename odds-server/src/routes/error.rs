//! Route store errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::planner::SearchError;

/// Error raised when reading routes from storage.
#[derive(Debug, Error)]
pub enum RouteStoreError {
    /// The database file does not exist.
    #[error("route database {path} does not exist")]
    NotFound {
        /// Location of the missing database.
        path: PathBuf,
    },

    /// Opening the SQLite database failed.
    #[error("failed to open route database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },

    /// Generic SQLite error when reading route rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

impl From<RouteStoreError> for SearchError {
    fn from(e: RouteStoreError) -> Self {
        SearchError::RouteSource(e.to_string())
    }
}
