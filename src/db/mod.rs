/// Key-value persistence for small records such as the pick history.
mod kv;
mod memory;
mod migrations;

use anyhow::Result;
use rusqlite::Connection;

pub use kv::SqliteStore;
pub use memory::MemoryStore;

/// A string-blob store addressed by key.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./palettr.db` when no data dir is found.
pub fn default_db_path() -> String {
    match crate::config::data_dir() {
        Some(dir) => dir.join("palettr.db").to_string_lossy().into_owned(),
        None => "palettr.db".to_string(),
    }
}
