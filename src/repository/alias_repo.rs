// ==========================================
// Guild Assign - alias repository
// ==========================================
// Dedup policy: a display name maps to at most one character id,
// last write wins (UPSERT on clean_name).
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::alias::{AliasEntry, AliasMap};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// ==========================================
// AliasRepository
// ==========================================
pub struct AliasRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AliasRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Insert or overwrite one mapping.
    pub fn upsert(&self, clean_name: &str, character_id: &str) -> RepositoryResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO aliases (clean_name, character_id) VALUES (?1, ?2) \
             ON CONFLICT(clean_name) DO UPDATE SET character_id = ?2",
            params![clean_name, character_id],
        )?;
        Ok(())
    }

    /// Upsert a batch of entries in one transaction.
    ///
    /// # Returns
    /// Number of entries processed.
    pub fn upsert_many(&self, entries: &[AliasEntry]) -> RepositoryResult<usize> {
        let conn = self.lock()?;

        conn.execute("BEGIN TRANSACTION", [])?;
        let result = (|| -> RepositoryResult<usize> {
            let mut stmt = conn.prepare(
                "INSERT INTO aliases (clean_name, character_id) VALUES (?1, ?2) \
                 ON CONFLICT(clean_name) DO UPDATE SET character_id = ?2",
            )?;
            for entry in entries {
                stmt.execute(params![entry.clean_name, entry.character_id])?;
            }
            Ok(entries.len())
        })();

        match result {
            Ok(count) => {
                conn.execute("COMMIT", [])?;
                Ok(count)
            }
            Err(e) => {
                let _ = conn.execute("ROLLBACK", []);
                Err(e)
            }
        }
    }

    /// Load the whole table as a lookup map for an allocation run.
    pub fn load_map(&self) -> RepositoryResult<AliasMap> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT clean_name, character_id FROM aliases")?;

        let rows = stmt.query_map([], |row| {
            Ok(AliasEntry {
                clean_name: row.get(0)?,
                character_id: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(AliasMap::from_entries(entries))
    }

    /// Case-insensitive substring search over names and ids.
    pub fn search(&self, pattern: &str) -> RepositoryResult<Vec<AliasEntry>> {
        let like = format!("%{}%", pattern.trim().to_lowercase());

        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT clean_name, character_id FROM aliases \
             WHERE LOWER(clean_name) LIKE ?1 OR LOWER(character_id) LIKE ?1 \
             ORDER BY clean_name",
        )?;

        let rows = stmt.query_map(params![like], |row| {
            Ok(AliasEntry {
                clean_name: row.get(0)?,
                character_id: row.get(1)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}
