//! SQLite-backed store: one `kv` table, WAL journal on file databases.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use locus_core::config::defaults::DEFAULT_DB_FILENAME;
use locus_core::config::StorageConfig;
use locus_core::errors::{LocusResult, StorageError};
use locus_core::traits::IKeyValueStore;

use crate::to_storage_err;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS kv (
        key        TEXT PRIMARY KEY NOT NULL,
        value      TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );
";

/// Key-value store persisted in a SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> LocusResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Self::initialize(conn)
    }

    /// Open the database named by `config.sqlite_path`, or an in-memory one
    /// when no path is configured. A directory path gets the default file name.
    pub fn from_config(config: &StorageConfig) -> LocusResult<Self> {
        let Some(path) = config.sqlite_path.as_deref() else {
            info!("no sqlite_path configured, using in-memory database");
            return Self::open_in_memory();
        };
        let path = Path::new(path);
        let path = if path.is_dir() {
            path.join(DEFAULT_DB_FILENAME)
        } else {
            path.to_path_buf()
        };
        info!(path = %path.display(), "opening sqlite store");
        Self::open(&path)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> LocusResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> LocusResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> LocusResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StorageError::LockPoisoned.into())
    }

    fn get_sync(&self, key: &str) -> LocusResult<Option<String>> {
        let conn = self.lock()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
    }

    fn set_sync(&self, key: &str, value: &str) -> LocusResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
            params![key, value],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    }

    fn remove_many_sync(&self, keys: &[String]) -> LocusResult<()> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        {
            let mut stmt = tx
                .prepare_cached("DELETE FROM kv WHERE key = ?1")
                .map_err(|e| to_storage_err(e.to_string()))?;
            for key in keys {
                stmt.execute(params![key])
                    .map_err(|e| to_storage_err(e.to_string()))?;
            }
        }
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    }

    fn list_keys_sync(&self) -> LocusResult<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT key FROM kv ORDER BY key")
            .map_err(|e| to_storage_err(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| to_storage_err(e.to_string()))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| to_storage_err(e.to_string()))
    }
}

impl IKeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> LocusResult<Option<String>> {
        self.get_sync(key)
    }

    async fn set(&self, key: &str, value: &str) -> LocusResult<()> {
        self.set_sync(key, value)
    }

    async fn remove(&self, key: &str) -> LocusResult<()> {
        self.remove_many_sync(&[key.to_string()])
    }

    async fn remove_many(&self, keys: &[String]) -> LocusResult<()> {
        self.remove_many_sync(keys)
    }

    async fn list_keys(&self) -> LocusResult<Vec<String>> {
        self.list_keys_sync()
    }
}

/// WAL journal, NORMAL sync, 5s busy timeout.
fn apply_pragmas(conn: &Connection) -> LocusResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
