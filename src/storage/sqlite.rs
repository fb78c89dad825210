use super::OptionStore;
use anyhow::Context;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;

/// Option store backed by a single SQLite table.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory sqlite")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(
            r#"
CREATE TABLE IF NOT EXISTS options (
  name TEXT PRIMARY KEY,
  value TEXT NOT NULL,
  updated_at INTEGER NOT NULL
);
"#,
        )
        .context("init schema")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("sqlite connection poisoned"))
    }
}

impl OptionStore for SqliteStore {
    fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT value FROM options WHERE name=?1")
            .context("prepare option read")?;
        let mut rows = stmt.query(params![name]).context("query option")?;
        if let Some(row) = rows.next().context("read option row")? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    fn set(&self, name: &str, value: &str) -> anyhow::Result<()> {
        let now_unix = time::OffsetDateTime::now_utc().unix_timestamp();
        self.conn()?
            .execute(
                r#"
INSERT INTO options(name, value, updated_at)
VALUES(?1, ?2, ?3)
ON CONFLICT(name) DO UPDATE SET
  value=excluded.value,
  updated_at=excluded.updated_at
"#,
                params![name, value, now_unix],
            )
            .context("write option")?;
        Ok(())
    }
}
