// ==========================================
// Guild Assign - requirement importer
// ==========================================
// Role: requirement CSV → Vec<Requirement> demand records.
// The type code column is carried raw; an unknown code is a per-record
// allocation diagnostic, not an import failure.
// ==========================================

use crate::domain::requirement::Requirement;
use crate::importer::csv_parser::CsvParser;
use crate::importer::error::ImportResult;
use crate::importer::report::ImportReport;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const COL_CHARACTER_NAME: &str = "CharacterName";
const COL_DAY: &str = "Day";
const COL_MISSION: &str = "Mission";
const COL_TYPE: &str = "Type";
const COL_LEVEL: &str = "Level";

// ==========================================
// RequirementImporter
// ==========================================
pub struct RequirementImporter;

impl RequirementImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, file_path: &Path) -> ImportResult<(Vec<Requirement>, ImportReport)> {
        let parser = CsvParser;
        let records = parser.parse_to_raw_records(file_path)?;
        CsvParser::require_columns(
            &records,
            &[COL_CHARACTER_NAME, COL_DAY, COL_MISSION, COL_TYPE, COL_LEVEL],
        )?;

        let mut report = ImportReport::new(&file_path.display().to_string(), records.len());
        let mut requirements = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 1;

            let character_name = record
                .get(COL_CHARACTER_NAME)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            if character_name.is_empty() {
                report.skip(row_no, "empty character name");
                continue;
            }

            let Some(day) = field_i32(record, COL_DAY) else {
                report.skip(row_no, "malformed day");
                continue;
            };
            let Some(mission) = field_i32(record, COL_MISSION) else {
                report.skip(row_no, "malformed mission");
                continue;
            };
            let Some(level) = field_i32(record, COL_LEVEL) else {
                report.skip(row_no, "malformed level");
                continue;
            };

            let kind_code = record
                .get(COL_TYPE)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();

            requirements.push(Requirement {
                character_name,
                day,
                mission,
                kind_code,
                level,
            });
        }

        report.imported = requirements.len();
        info!(
            file = %file_path.display(),
            total = report.total_rows,
            imported = report.imported,
            skipped = report.skipped.len(),
            "requirement CSV parsed"
        );

        Ok((requirements, report))
    }
}

impl Default for RequirementImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn field_i32(record: &HashMap<String, String>, key: &str) -> Option<i32> {
    record.get(key).and_then(|v| v.trim().parse::<i32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_parse_requirements() {
        let file = temp_csv(&[
            "CharacterName,Day,Mission,Type,Level",
            "Black Bolt,1,2,G,16",
            "Thor,1,2,Y,6",
        ]);

        let importer = RequirementImporter::new();
        let (reqs, report) = importer.parse(file.path()).unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(reqs[0].character_name, "Black Bolt");
        assert_eq!(reqs[0].day, 1);
        assert_eq!(reqs[0].mission, 2);
        assert_eq!(reqs[0].kind_code, "G");
        assert_eq!(reqs[0].level, 16);
    }

    #[test]
    fn test_parse_keeps_unknown_type_code() {
        // Unknown codes surface later as allocation diagnostics.
        let file = temp_csv(&["CharacterName,Day,Mission,Type,Level", "Thor,1,1,Q,5"]);

        let importer = RequirementImporter::new();
        let (reqs, _) = importer.parse(file.path()).unwrap();

        assert_eq!(reqs[0].kind_code, "Q");
    }

    #[test]
    fn test_parse_skips_malformed_numeric_fields() {
        let file = temp_csv(&[
            "CharacterName,Day,Mission,Type,Level",
            "Thor,one,1,G,15",
            "Loki,1,1,G,15",
        ]);

        let importer = RequirementImporter::new();
        let (reqs, report) = importer.parse(file.path()).unwrap();

        assert_eq!(reqs.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, "malformed day");
    }
}
