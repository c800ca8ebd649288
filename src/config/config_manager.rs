// ==========================================
// Guild Assign - configuration manager
// ==========================================
// Role: load, query and overwrite run configuration.
// Storage: config_kv table (key-value + scope).
// ==========================================

use crate::config::allocation::{
    AllocationConfig, DEFAULT_MISSION_CAP, DEFAULT_SQUAD_SIZE, DEFAULT_TOTAL_CAP,
};
use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection};
use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Create a new ConfigManager instance.
    ///
    /// # Arguments
    /// - db_path: database file path
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create a ConfigManager over an existing connection.
    ///
    /// The shared PRAGMA set is re-applied (idempotent) so connection
    /// behaviour stays uniform regardless of who opened it.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| format!("lock acquisition failed: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// Read a config value from config_kv (scope_id='global').
    ///
    /// # Returns
    /// - Some(String): configured value
    /// - None: key not present
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Read a config value with a fallback default.
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Write a config value (UPSERT, scope_id='global').
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2) \
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;

        Ok(())
    }

    /// Snapshot of all global configuration as a JSON string.
    ///
    /// Recorded next to an allocation run so a proposal can be
    /// re-explained later with the exact parameters that produced it.
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key")?;

        let mut config_map: HashMap<String, String> = HashMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&config_map)?)
    }

    /// Restore global configuration from a snapshot JSON string.
    ///
    /// Overwrites the current global values.
    ///
    /// # Returns
    /// Number of keys restored.
    pub fn restore_config_from_snapshot(&self, snapshot_json: &str) -> Result<usize, Box<dyn Error>> {
        let config_map: HashMap<String, String> = serde_json::from_str(snapshot_json)?;

        let conn = self
            .conn
            .lock()
            .map_err(|e| format!("lock acquisition failed: {}", e))?;

        conn.execute("BEGIN TRANSACTION", [])?;

        let mut count = 0;
        for (key, value) in config_map.iter() {
            let affected = conn.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2) \
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
                params![key, value],
            )?;
            count += affected;
        }

        conn.execute("COMMIT", [])?;

        Ok(count)
    }

    // ===== Allocation parameters =====

    /// Squad size: members required to fulfil one requirement.
    pub fn get_squad_size(&self) -> Result<usize, Box<dyn Error>> {
        let value = self.get_config_or_default(
            config_keys::SQUAD_SIZE,
            &DEFAULT_SQUAD_SIZE.to_string(),
        )?;
        Ok(value.parse::<usize>().unwrap_or_else(|_| {
            tracing::warn!(
                config_key = config_keys::SQUAD_SIZE,
                raw_value = %value,
                "malformed squad size config, using default"
            );
            DEFAULT_SQUAD_SIZE
        }))
    }

    /// Total assignments one member may receive across a run.
    pub fn get_total_cap(&self) -> Result<u32, Box<dyn Error>> {
        let value =
            self.get_config_or_default(config_keys::TOTAL_CAP, &DEFAULT_TOTAL_CAP.to_string())?;
        Ok(value.parse::<u32>().unwrap_or_else(|_| {
            tracing::warn!(
                config_key = config_keys::TOTAL_CAP,
                raw_value = %value,
                "malformed total cap config, using default"
            );
            DEFAULT_TOTAL_CAP
        }))
    }

    /// Assignments one member may receive within a single mission.
    pub fn get_mission_cap(&self) -> Result<u32, Box<dyn Error>> {
        let value = self.get_config_or_default(
            config_keys::MISSION_CAP,
            &DEFAULT_MISSION_CAP.to_string(),
        )?;
        Ok(value.parse::<u32>().unwrap_or_else(|_| {
            tracing::warn!(
                config_key = config_keys::MISSION_CAP,
                raw_value = %value,
                "malformed mission cap config, using default"
            );
            DEFAULT_MISSION_CAP
        }))
    }

    /// Snapshot of all allocation parameters for one run.
    pub fn allocation_config(&self) -> Result<AllocationConfig, Box<dyn Error>> {
        Ok(AllocationConfig {
            squad_size: self.get_squad_size()?,
            total_cap: self.get_total_cap()?,
            mission_cap: self.get_mission_cap()?,
        })
    }
}

// ==========================================
// config_keys - canonical key names
// ==========================================
pub mod config_keys {
    pub const SQUAD_SIZE: &str = "allocation/squad_size";
    pub const TOTAL_CAP: &str = "allocation/total_cap";
    pub const MISSION_CAP: &str = "allocation/mission_cap";
}
