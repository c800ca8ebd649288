// ==========================================
// Guild Assign - alias map domain model
// ==========================================
// Translates human-readable character names into canonical character
// ids. Many display names may map to the same id; a display name maps
// to at most one id (last-write-wins on duplicates).
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// AliasEntry - one display-name mapping
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub clean_name: String,   // human-readable display name
    pub character_id: String, // canonical character identifier
}

// ==========================================
// AliasMap - deduplicated lookup table
// ==========================================
// Lookups are case-insensitive; keys are normalized to lowercase at
// insertion so a single map probe resolves any casing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AliasMap {
    entries: HashMap<String, String>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from entries; later entries win on duplicate names.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = AliasEntry>,
    {
        let mut map = Self::new();
        for entry in entries {
            map.insert(&entry.clean_name, &entry.character_id);
        }
        map
    }

    /// Insert or overwrite a mapping (last-write-wins).
    pub fn insert(&mut self, clean_name: &str, character_id: &str) {
        self.entries
            .insert(clean_name.trim().to_lowercase(), character_id.to_string());
    }

    /// Resolve a display name to its canonical character id.
    pub fn resolve(&self, clean_name: &str) -> Option<&str> {
        self.entries
            .get(&clean_name.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
