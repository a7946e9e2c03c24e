use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::{Context, Result};
use log::{error, info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

mod planner;
mod preferences;
mod sessions;
mod tasks;

/// Durable key-value storage behind every collection adapter. Each
/// collection lives under its own key as one self-describing JSON
/// document; adapters for the individual collections are implemented in
/// the sibling files of this module.
///
/// Writes may be lossy: encode or write failures are logged and swallowed,
/// so callers must not assume "save implies the next load reflects it"
/// across a failure boundary. Unreadable or undecodable values load as
/// empty/default, never as an error.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
    db_path: Arc<Option<PathBuf>>,
}

impl Store {
    pub fn open(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create storage directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&db_path)
            .with_context(|| format!("failed to open storage at {}", db_path.display()))?;

        if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
            error!("Failed to enable WAL mode: {err}");
        }

        init_schema(&conn)?;

        info!("Storage initialized at {}", db_path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: Arc::new(Some(db_path)),
        })
    }

    /// Backing store that lives only as long as the handle. Used in tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory storage")?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: Arc::new(None),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.db_path.as_ref().as_deref()
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        let conn = self.lock();
        let result = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional();

        match result {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to read key '{key}': {err}");
                None
            }
        }
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT (key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .with_context(|| format!("failed to write key '{key}'"))?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn put_raw(&self, key: &str, value: &str) {
        self.write_raw(key, value).expect("raw write failed");
    }

    /// Decode the value under `key`, falling back to the type's default
    /// when the key is missing or the value no longer decodes.
    fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.read_raw(key) else {
            return T::default();
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("Discarding undecodable value under '{key}': {err}");
                T::default()
            }
        }
    }

    /// Encode and write `value` under `key`. Failures are logged and
    /// swallowed; durable storage is allowed to lose a write.
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!("Failed to encode value for '{key}': {err}");
                return;
            }
        };

        if let Err(err) = self.write_raw(key, &encoded) {
            error!("Failed to persist '{key}': {err}");
        }
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create kv table")?;
    Ok(())
}
