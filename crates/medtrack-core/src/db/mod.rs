//! Database layer for the medicine inventory.
//!
//! The [`Database`] handle only remembers where the file lives. Each operation
//! opens its own connection and drops it before returning, so every mutation
//! is committed by the time the call completes.

mod medicines;
mod schema;

pub use schema::*;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A medicine with code '{0}' already exists")]
    DuplicateKey(String),

    #[error("No medicine with code '{0}' was found")]
    NotFound(String),

    #[error("Medicine code must not be empty")]
    EmptyCode,
}

pub type DbResult<T> = Result<T, DbError>;

/// File-backed medicine store.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open the database at `path`, creating the file and table if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Self { path };
        db.initialize()?;
        tracing::info!("Opened medicine database at {:?}", db.path);
        Ok(db)
    }

    /// Create the medicine table if it does not exist. Safe to call repeatedly.
    pub fn initialize(&self) -> DbResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Open a fresh connection for a single operation.
    fn connect(&self) -> DbResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_table() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("medicine.db")).unwrap();

        let tables: Vec<String> = db
            .connect()
            .unwrap()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert_eq!(tables, vec!["medicine".to_string()]);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("medicine.db")).unwrap();
        assert!(db.initialize().is_ok());
        assert!(db.initialize().is_ok());
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("medicine.db");
        Database::open(&path).unwrap();
        assert!(path.exists());
    }
}
