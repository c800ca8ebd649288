// ==========================================
// Guild Assign - import report
// ==========================================
// Every import returns one of these regardless of outcome, so callers
// can show exactly which rows were dropped and why.
// ==========================================

use chrono::Utc;
use serde::{Deserialize, Serialize};

// ==========================================
// SkippedRow - one dropped input row
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row_no: usize, // 1-based data row number (header excluded)
    pub reason: String,
}

// ==========================================
// ImportReport - per-file import summary
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub source_file: String,
    pub total_rows: usize,
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
    pub imported_at: String, // RFC 3339
}

impl ImportReport {
    pub fn new(source_file: &str, total_rows: usize) -> Self {
        Self {
            source_file: source_file.to_string(),
            total_rows,
            imported: 0,
            skipped: Vec::new(),
            imported_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn skip(&mut self, row_no: usize, reason: impl Into<String>) {
        self.skipped.push(SkippedRow {
            row_no,
            reason: reason.into(),
        });
    }
}
