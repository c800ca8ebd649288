// ==========================================
// Guild Assign - SQLite connection setup
// ==========================================
// Goals:
// - one place for PRAGMA behavior so every module's connection acts
//   the same (foreign keys, busy_timeout)
// - default database path resolution
// - whole-file backup/restore of the roster database
// ==========================================

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Database file name
pub const DB_FILE_NAME: &str = "roster.db";

/// Backup file name (single rolling backup)
pub const BACKUP_FILE_NAME: &str = "backup_roster.db";

/// Apply the unified PRAGMAs to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings, so every
/// open path must go through here.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a SQLite connection with the unified configuration.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Default database location: `<data dir>/guild-assign/roster.db`,
/// falling back to the working directory when no data dir exists.
pub fn default_db_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("guild-assign").join(DB_FILE_NAME),
        None => PathBuf::from(DB_FILE_NAME),
    }
}

/// Copy the database file to its rolling backup next to it.
///
/// # Returns
/// Path of the backup file.
pub fn backup_database(db_path: &Path) -> std::io::Result<PathBuf> {
    let backup_path = db_path.with_file_name(BACKUP_FILE_NAME);
    std::fs::copy(db_path, &backup_path)?;
    Ok(backup_path)
}

/// Restore the database file from its rolling backup.
///
/// Fails with NotFound when no backup exists.
pub fn restore_database(db_path: &Path) -> std::io::Result<()> {
    let backup_path = db_path.with_file_name(BACKUP_FILE_NAME);
    std::fs::copy(&backup_path, db_path)?;
    Ok(())
}
