// ==========================================
// Guild Assign - importer layer
// ==========================================
// Role: CSV files → validated domain records + per-file reports.
// Persistence stays in the repository layer; importers only parse.
// ==========================================

pub mod alias_importer;
pub mod csv_parser;
pub mod error;
pub mod report;
pub mod requirement_importer;
pub mod roster_importer;

pub use alias_importer::AliasImporter;
pub use csv_parser::CsvParser;
pub use error::{ImportError, ImportResult};
pub use report::{ImportReport, SkippedRow};
pub use requirement_importer::RequirementImporter;
pub use roster_importer::RosterImporter;
