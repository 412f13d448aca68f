//! Store location configuration and one-time initialization.
//!
//! # Responsibility
//! - Resolve the on-disk location of the petition database.
//! - Create the containing directory and apply migrations up front.
//!
//! # Invariants
//! - `init_store` is idempotent; pre-existing directories, files and
//!   tables are never an error.
//! - Repository code receives a [`StoreHandle`], never a raw path guess.

use crate::db::{open_db, DbResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "project_db";
const DEFAULT_FILE_NAME: &str = "legal_petitions.db";

/// Where the petition database lives.
///
/// An explicit value passed in by the caller; there is no process-wide
/// default path lookup, so tests can point at an isolated temporary
/// directory per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory that holds the database file. Created if missing.
    pub data_dir: PathBuf,
    /// Database file name inside `data_dir`.
    pub file_name: String,
}

impl Default for StoreConfig {
    /// The historical store location (`project_db/legal_petitions.db`),
    /// relative to the process working directory.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    /// Builds a config rooted at `data_dir` with the default file name.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

/// Opaque handle to an initialized petition store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHandle {
    path: PathBuf,
}

impl StoreHandle {
    /// Path of the initialized database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Ensures the store directory and schema exist, returning a handle.
///
/// Safe to call repeatedly; a second call against the same location is a
/// no-op beyond re-checking the schema version.
///
/// # Errors
/// - [`DbError::Io`](crate::db::DbError::Io) when the directory cannot
///   be created.
/// - [`DbError::Sqlite`](crate::db::DbError::Sqlite) when the database
///   file cannot be opened or migrated.
pub fn init_store(config: &StoreConfig) -> DbResult<StoreHandle> {
    fs::create_dir_all(&config.data_dir)?;

    let path = config.db_path();
    // Opening runs the migrations; the connection itself is not kept.
    let conn = open_db(&path)?;
    drop(conn);

    info!(
        "event=store_init module=store status=ok path={}",
        path.display()
    );

    Ok(StoreHandle { path })
}
