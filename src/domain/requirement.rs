// ==========================================
// Guild Assign - requirement domain model
// ==========================================
// One staffing requirement: a target character, the mission it belongs
// to, and the minimum attribute level demanded. Requirements are scoped
// to a day and imported from req.csv.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Requirement - one demand record
// ==========================================
// `kind_code` is kept as the raw single-letter code from the import.
// Resolution to a DemandKind happens at allocation time so an unknown
// code surfaces as a per-record diagnostic instead of an import error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub character_name: String, // display name of the required character
    pub day: i32,               // event day the requirement belongs to
    pub mission: i32,           // mission number (grouping / ordering key)
    pub kind_code: String,      // raw requirement-type code ('G'/'Y'/'R')
    pub level: i32,             // minimum attribute value
}

impl Requirement {
    pub fn new(character_name: &str, day: i32, mission: i32, kind_code: &str, level: i32) -> Self {
        Self {
            character_name: character_name.to_string(),
            day,
            mission,
            kind_code: kind_code.to_string(),
            level,
        }
    }
}
