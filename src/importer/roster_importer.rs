// ==========================================
// Guild Assign - roster importer
// ==========================================
// Role: roster CSV → Vec<GuildMember> snapshot rows.
// Input: the game's roster export, one row per (member, character).
// Numeric fields missing or malformed default to 0; identity fields
// (Name, Character Id) are mandatory per row.
// ==========================================

use crate::domain::member::GuildMember;
use crate::importer::csv_parser::CsvParser;
use crate::importer::error::ImportResult;
use crate::importer::report::ImportReport;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

// Header names as exported by the game.
const COL_NAME: &str = "Name";
const COL_CHARACTER_ID: &str = "Character Id";
const COL_LEVEL: &str = "Level";
const COL_POWER: &str = "Power";
const COL_STARS: &str = "Stars";
const COL_RED_STARS: &str = "Red Stars";
const COL_GEAR_TIER: &str = "Gear Tier";
const COL_BASIC: &str = "Basic";
const COL_SPECIAL: &str = "Special";
const COL_ULTIMATE: &str = "Ultimate";
const COL_PASSIVE: &str = "Passive";
const COL_ISO_CLASS: &str = "ISO Class";

// ==========================================
// RosterImporter
// ==========================================
pub struct RosterImporter;

impl RosterImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse a roster CSV into snapshot rows for one guild.
    ///
    /// # Returns
    /// Parsed members plus a report naming every skipped row.
    pub fn parse(
        &self,
        file_path: &Path,
        guild_id: i64,
    ) -> ImportResult<(Vec<GuildMember>, ImportReport)> {
        let parser = CsvParser;
        let records = parser.parse_to_raw_records(file_path)?;
        CsvParser::require_columns(&records, &[COL_NAME, COL_CHARACTER_ID])?;

        let mut report = ImportReport::new(&file_path.display().to_string(), records.len());
        let mut members = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 1;

            let name = field_str(record, COL_NAME);
            if name.is_empty() {
                report.skip(row_no, "empty member name");
                continue;
            }
            let character_id = field_str(record, COL_CHARACTER_ID);
            if character_id.is_empty() {
                report.skip(row_no, "empty character id");
                continue;
            }

            members.push(GuildMember {
                name,
                character_id,
                guild_id,
                level: field_i32(record, COL_LEVEL),
                power: field_i64(record, COL_POWER),
                stars: field_i32(record, COL_STARS),
                red_stars: field_i32(record, COL_RED_STARS),
                gear_tier: field_i32(record, COL_GEAR_TIER),
                basic: field_i32(record, COL_BASIC),
                special: field_i32(record, COL_SPECIAL),
                ultimate: field_i32(record, COL_ULTIMATE),
                passive: field_i32(record, COL_PASSIVE),
                iso_class: field_str(record, COL_ISO_CLASS),
            });
        }

        report.imported = members.len();
        info!(
            file = %file_path.display(),
            total = report.total_rows,
            imported = report.imported,
            skipped = report.skipped.len(),
            "roster CSV parsed"
        );

        Ok((members, report))
    }
}

impl Default for RosterImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn field_str(record: &HashMap<String, String>, key: &str) -> String {
    record.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn field_i32(record: &HashMap<String, String>, key: &str) -> i32 {
    record
        .get(key)
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(0)
}

fn field_i64(record: &HashMap<String, String>, key: &str) -> i64 {
    record
        .get(key)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0)
}
