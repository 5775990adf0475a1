//! Key-value store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the `get`/`set` adapter API the list controller persists through.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `set` overwrites the whole value under the key, no partial updates.
//! - Construction validates that the connection has been migrated first.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Adapter error for key-value persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Connection was opened without running migrations first.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is not initialized (expected {expected_version})"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Opaque single-value-per-key durable store.
///
/// The controller treats this as the whole persistence surface: one read at
/// startup, one whole-value write after each mutation.
pub trait KvStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed key-value store over the `kv` table.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Wraps a migrated connection after verifying the expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is still 0.
    /// - `MissingRequiredTable` when the `kv` table is absent.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version == 0 {
            return Err(StoreError::UninitializedConnection {
                expected_version: latest_version(),
                actual_version,
            });
        }

        let kv_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv'
            );",
            [],
            |row| row.get(0),
        )?;
        if kv_exists == 0 {
            return Err(StoreError::MissingRequiredTable("kv"));
        }

        Ok(Self { conn })
    }

    /// Releases the underlying connection.
    pub fn into_connection(self) -> Connection {
        self.conn
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;

        Ok(())
    }
}
