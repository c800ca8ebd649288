// ==========================================
// Guild Assign - requirement repository
// ==========================================
// Demand records: one row per (character, day, mission) slot request.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::requirement::Requirement;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// RequirementRepository
// ==========================================
pub struct RequirementRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RequirementRepository {
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

    /// Insert a batch of demand records in one transaction.
    ///
    /// # Returns
    /// Number of rows inserted.
    pub fn insert_many(&self, requirements: &[Requirement]) -> RepositoryResult<usize> {
        let conn = self.lock()?;

        conn.execute("BEGIN TRANSACTION", [])?;
        let result = (|| -> RepositoryResult<usize> {
            let mut stmt = conn.prepare(
                "INSERT INTO requirements (character_name, day, mission, type, level) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for req in requirements {
                stmt.execute(params![
                    req.character_name,
                    req.day,
                    req.mission,
                    req.kind_code,
                    req.level,
                ])?;
            }
            Ok(requirements.len())
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

    /// Demand records for one day, in mission then character order.
    ///
    /// NOTE: this is a presentation order; the allocation run re-sorts
    /// by its own priority rules.
    pub fn list_by_day(&self, day: i32) -> RepositoryResult<Vec<Requirement>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT character_name, day, mission, type, level FROM requirements \
             WHERE day = ?1 ORDER BY mission, character_name",
        )?;

        let rows = stmt.query_map(params![day], map_requirement)?;
        let mut requirements = Vec::new();
        for row in rows {
            requirements.push(row?);
        }
        Ok(requirements)
    }

    /// Demand records for one mission of one day, insertion order.
    ///
    /// Insertion order is load-bearing for the strict variant, which
    /// fills requirements exactly as entered.
    pub fn list_by_day_and_mission(
        &self,
        day: i32,
        mission: i32,
    ) -> RepositoryResult<Vec<Requirement>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT character_name, day, mission, type, level FROM requirements \
             WHERE day = ?1 AND mission = ?2 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![day, mission], map_requirement)?;
        let mut requirements = Vec::new();
        for row in rows {
            requirements.push(row?);
        }
        Ok(requirements)
    }

    /// Remove all demand records for one day.
    ///
    /// # Returns
    /// Number of rows deleted.
    pub fn delete_day(&self, day: i32) -> RepositoryResult<usize> {
        let conn = self.lock()?;
        let count = conn.execute("DELETE FROM requirements WHERE day = ?1", params![day])?;
        Ok(count)
    }

    /// Distinct days that currently have demand records, ascending.
    pub fn list_days(&self) -> RepositoryResult<Vec<i32>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT DISTINCT day FROM requirements ORDER BY day")?;

        let rows = stmt.query_map([], |row| row.get::<_, i32>(0))?;
        let mut days = Vec::new();
        for row in rows {
            days.push(row?);
        }
        Ok(days)
    }
}

fn map_requirement(row: &Row<'_>) -> rusqlite::Result<Requirement> {
    Ok(Requirement {
        character_name: row.get(0)?,
        day: row.get(1)?,
        mission: row.get(2)?,
        kind_code: row.get(3)?,
        level: row.get(4)?,
    })
}
