//! SQLite-backed key-value store.
//!
//! The schedule persists as two flat JSON blobs, mirroring the original
//! device-local layout: `time_blocks` and `time_block_templates`. Values
//! are whole-collection snapshots written best-effort after every
//! mutation; last write wins, no multi-device sync.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::data_dir;
use crate::error::StorageError;

/// Key holding the JSON array of `TimeBlock` records.
pub const TIME_BLOCKS: &str = "time_blocks";

/// Key holding the JSON array of `DayTemplate` records.
pub const TIME_BLOCK_TEMPLATES: &str = "time_block_templates";

/// Single-table key-value store over SQLite.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Open the store at `data_dir()/focos.db`, creating the table if
    /// it doesn't exist.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("focos.db");
        Self::open_at(&path)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (non-persistent; primarily for tests).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Read the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Make every subsequent write fail, leaving reads of nothing.
    /// Simulates a broken backing store (quota, corruption) in tests.
    #[cfg(test)]
    pub(crate) fn drop_backing_table(&self) {
        self.conn
            .execute_batch("DROP TABLE kv")
            .expect("drop kv table");
    }

    /// Write `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = KvStore::open_in_memory().unwrap();
        assert_eq!(store.get(TIME_BLOCKS).unwrap(), None);

        store.set(TIME_BLOCKS, "[]").unwrap();
        assert_eq!(store.get(TIME_BLOCKS).unwrap().as_deref(), Some("[]"));

        store.set(TIME_BLOCKS, "[1]").unwrap();
        assert_eq!(store.get(TIME_BLOCKS).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("focos.db");

        {
            let store = KvStore::open_at(&path).unwrap();
            store.set(TIME_BLOCK_TEMPLATES, "[\"t\"]").unwrap();
        }

        let store = KvStore::open_at(&path).unwrap();
        assert_eq!(
            store.get(TIME_BLOCK_TEMPLATES).unwrap().as_deref(),
            Some("[\"t\"]")
        );
    }
}
