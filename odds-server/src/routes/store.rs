//! SQLite-backed route store.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::domain::RouteRecord;
use crate::planner::{RouteProvider, SearchError};

use super::RouteStoreError;

const LIST_ROUTES: &str = "SELECT origin, destination, travel_time FROM routes ORDER BY rowid";

/// Read-only route store over a SQLite database with a `routes` table.
///
/// A fresh connection is opened for every listing, so the store can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct SqliteRouteStore {
    path: PathBuf,
}

impl SqliteRouteStore {
    /// Open the store at `path`, checking that the database is readable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RouteStoreError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(RouteStoreError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let store = Self {
            path: path.to_path_buf(),
        };
        store.connect()?;

        Ok(store)
    }

    /// Path of the underlying database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored route, in insertion order.
    pub fn routes(&self) -> Result<Vec<RouteRecord>, RouteStoreError> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(LIST_ROUTES)?;
        let records = statement
            .query_map([], |row| {
                Ok(RouteRecord {
                    origin: row.get(0)?,
                    destination: row.get(1)?,
                    travel_time: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(path = %self.path.display(), routes = records.len(), "loaded routes");
        Ok(records)
    }

    fn connect(&self) -> Result<Connection, RouteStoreError> {
        Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
            |source| RouteStoreError::OpenDatabase {
                path: self.path.clone(),
                source,
            },
        )
    }
}

impl RouteProvider for SqliteRouteStore {
    fn list(&self) -> Result<Vec<RouteRecord>, SearchError> {
        Ok(self.routes()?)
    }
}
