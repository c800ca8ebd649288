// ==========================================
// Guild Assign - roster repository
// ==========================================
// Red line: no allocation logic here, queries only.
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::member::GuildMember;
use crate::domain::types::DemandKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};

const MEMBER_COLUMNS: &str = "name, character_id, level, power, stars, red_stars, gear_tier, \
     basic, special, ultimate, passive, iso_class, guild_id";

// ==========================================
// RosterRepository
// ==========================================
pub struct RosterRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RosterRepository {
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

    /// Replace a guild's roster atomically: old rows for the guild are
    /// deleted, the new snapshot is inserted.
    ///
    /// # Returns
    /// Number of rows inserted.
    pub fn replace_guild_roster(
        &self,
        guild_id: i64,
        members: &[GuildMember],
    ) -> RepositoryResult<usize> {
        let conn = self.lock()?;
        let imported_at = Utc::now().to_rfc3339();

        conn.execute("BEGIN TRANSACTION", [])?;
        let result = (|| -> RepositoryResult<usize> {
            conn.execute("DELETE FROM roster WHERE guild_id = ?1", params![guild_id])?;

            let mut stmt = conn.prepare(
                "INSERT INTO roster (name, character_id, level, power, stars, red_stars, \
                 gear_tier, basic, special, ultimate, passive, iso_class, guild_id, imported_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            )?;
            for member in members {
                stmt.execute(params![
                    member.name,
                    member.character_id,
                    member.level,
                    member.power,
                    member.stars,
                    member.red_stars,
                    member.gear_tier,
                    member.basic,
                    member.special,
                    member.ultimate,
                    member.passive,
                    member.iso_class,
                    guild_id,
                    imported_at,
                ])?;
            }
            Ok(members.len())
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

    /// Full roster snapshot for a guild, in a stable order.
    pub fn list_by_guild(&self, guild_id: i64) -> RepositoryResult<Vec<GuildMember>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM roster WHERE guild_id = ?1 ORDER BY name, character_id",
            MEMBER_COLUMNS
        ))?;

        let rows = stmt.query_map(params![guild_id], map_member)?;
        let mut members = Vec::new();
        for row in rows {
            members.push(row?);
        }
        Ok(members)
    }

    /// Distinct member names for a guild, ascending.
    pub fn distinct_member_names(&self, guild_id: i64) -> RepositoryResult<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT name FROM roster WHERE guild_id = ?1 ORDER BY name",
        )?;

        let rows = stmt.query_map(params![guild_id], |row| row.get::<_, String>(0))?;
        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    /// Holders of one character meeting an attribute threshold,
    /// strongest first (presentation order of the roster search).
    pub fn search_holders(
        &self,
        guild_id: i64,
        character_id: &str,
        kind: DemandKind,
        threshold: i32,
    ) -> RepositoryResult<Vec<GuildMember>> {
        let column = match kind {
            DemandKind::Gear => "gear_tier",
            DemandKind::Star => "stars",
            DemandKind::RedStar => "red_stars",
        };

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM roster WHERE guild_id = ?1 AND character_id = ?2 AND {} >= ?3 \
             ORDER BY power DESC, name",
            MEMBER_COLUMNS, column
        ))?;

        let rows = stmt.query_map(params![guild_id, character_id, threshold], map_member)?;
        let mut members = Vec::new();
        for row in rows {
            members.push(row?);
        }
        Ok(members)
    }
}

/// Map a roster row (MEMBER_COLUMNS order) to a GuildMember.
fn map_member(row: &Row<'_>) -> rusqlite::Result<GuildMember> {
    Ok(GuildMember {
        name: row.get(0)?,
        character_id: row.get(1)?,
        level: row.get(2)?,
        power: row.get(3)?,
        stars: row.get(4)?,
        red_stars: row.get(5)?,
        gear_tier: row.get(6)?,
        basic: row.get(7)?,
        special: row.get(8)?,
        ultimate: row.get(9)?,
        passive: row.get(10)?,
        iso_class: row.get(11)?,
        guild_id: row.get(12)?,
    })
}
