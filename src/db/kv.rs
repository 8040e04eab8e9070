/// SQLite-backed key-value store.
use anyhow::Result;
use rusqlite::Connection;

use super::KvStore;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the database at `db_path`, creating the schema when needed.
    pub fn open(db_path: &str) -> Result<Self> {
        Ok(Self {
            conn: super::init(db_path)?,
        })
    }

    #[cfg(test)]
    pub fn from_connection(conn: Connection) -> Result<Self> {
        super::migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;
        Ok(())
    }
}
