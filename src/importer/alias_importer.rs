// ==========================================
// Guild Assign - alias importer
// ==========================================
// Role: alias CSV → Vec<AliasEntry> (display name → canonical id).
// Duplicate names are allowed in the file; downstream storage keeps
// the last occurrence.
// ==========================================

use crate::domain::alias::AliasEntry;
use crate::importer::csv_parser::CsvParser;
use crate::importer::error::ImportResult;
use crate::importer::report::ImportReport;
use std::path::Path;
use tracing::info;

const COL_CLEAN_NAME: &str = "clean_name";
const COL_CHARACTER_ID: &str = "character_id";

// ==========================================
// AliasImporter
// ==========================================
pub struct AliasImporter;

impl AliasImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, file_path: &Path) -> ImportResult<(Vec<AliasEntry>, ImportReport)> {
        let parser = CsvParser;
        let records = parser.parse_to_raw_records(file_path)?;
        CsvParser::require_columns(&records, &[COL_CLEAN_NAME, COL_CHARACTER_ID])?;

        let mut report = ImportReport::new(&file_path.display().to_string(), records.len());
        let mut entries = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 1;

            let clean_name = record
                .get(COL_CLEAN_NAME)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            if clean_name.is_empty() {
                report.skip(row_no, "empty alias name");
                continue;
            }

            let character_id = record
                .get(COL_CHARACTER_ID)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            if character_id.is_empty() {
                report.skip(row_no, "empty character id");
                continue;
            }

            entries.push(AliasEntry {
                clean_name,
                character_id,
            });
        }

        report.imported = entries.len();
        info!(
            file = %file_path.display(),
            total = report.total_rows,
            imported = report.imported,
            skipped = report.skipped.len(),
            "alias CSV parsed"
        );

        Ok((entries, report))
    }
}

impl Default for AliasImporter {
    fn default() -> Self {
        Self::new()
    }
}
