// ==========================================
// Test helpers
// ==========================================
// Role: temp database setup and domain record builders shared by the
// integration tests.
// ==========================================

#![allow(dead_code)]

use guild_assign::domain::{GuildMember, Requirement};
use guild_assign::repository::initialize_schema;
use rusqlite::Connection;
use std::error::Error;
use tempfile::NamedTempFile;

/// Create a temp database with the full schema.
///
/// # Returns
/// - NamedTempFile: temp database file (must stay alive)
/// - String: database file path
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    initialize_schema(&conn).map_err(|e| e.to_string())?;

    Ok((temp_file, db_path))
}

pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    Ok(Connection::open(db_path)?)
}

/// Roster row builder; attribute levels track power so ordering tests
/// stay readable.
pub fn member(name: &str, character_id: &str, power: i64, gear_tier: i32) -> GuildMember {
    GuildMember {
        name: name.to_string(),
        character_id: character_id.to_string(),
        guild_id: 1,
        level: 75,
        power,
        stars: 6,
        red_stars: 4,
        gear_tier,
        basic: 7,
        special: 7,
        ultimate: 7,
        passive: 5,
        iso_class: "Striker".to_string(),
    }
}

pub fn requirement(character_name: &str, day: i32, mission: i32, kind: &str, level: i32) -> Requirement {
    Requirement::new(character_name, day, mission, kind, level)
}
