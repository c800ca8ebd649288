// ==========================================
// Guild Assign - database schema bootstrap
// ==========================================
// Tables: roster (one row per member-character), aliases (display
// name → canonical id, unique per name), requirements (per-day demand
// records), config_kv (scoped key-value configuration).
// ==========================================

use crate::repository::error::RepositoryResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS roster (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    character_id TEXT NOT NULL,
    level INTEGER NOT NULL DEFAULT 0,
    power INTEGER NOT NULL DEFAULT 0,
    stars INTEGER NOT NULL DEFAULT 0,
    red_stars INTEGER NOT NULL DEFAULT 0,
    gear_tier INTEGER NOT NULL DEFAULT 0,
    basic INTEGER NOT NULL DEFAULT 0,
    special INTEGER NOT NULL DEFAULT 0,
    ultimate INTEGER NOT NULL DEFAULT 0,
    passive INTEGER NOT NULL DEFAULT 0,
    iso_class TEXT NOT NULL DEFAULT '',
    guild_id INTEGER NOT NULL,
    imported_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_roster_guild ON roster(guild_id);
CREATE INDEX IF NOT EXISTS idx_roster_character ON roster(guild_id, character_id);

CREATE TABLE IF NOT EXISTS aliases (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    clean_name TEXT NOT NULL UNIQUE,
    character_id TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS requirements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    character_name TEXT NOT NULL,
    day INTEGER NOT NULL,
    mission INTEGER NOT NULL,
    type TEXT NOT NULL,
    level INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_requirements_day ON requirements(day);

CREATE TABLE IF NOT EXISTS config_kv (
    scope_id TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    PRIMARY KEY (scope_id, key)
);
"#;

/// Create all tables and indexes (idempotent).
pub fn initialize_schema(conn: &Connection) -> RepositoryResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
