// ==========================================
// Guild Assign - core library
// ==========================================
// Stack: Rust + SQLite
// Positioning: decision support for guild event staffing - the tool
// proposes assignments, officers keep the final say.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - allocation rules
pub mod engine;

// Importer layer - external data
pub mod importer;

// Config layer - run parameters
pub mod config;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// API layer - business interfaces
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{DemandKind, SkipReason};

// Domain entities
pub use domain::{
    AliasEntry, AliasMap, AllocationDiagnostic, AssignmentSlot, DayAssignment, GuildMember,
    MissionAssignment, MissionOutcome, Requirement,
};

// Engine
pub use engine::{
    AllocationPolicy, CapacityLedger, EligibilityEngine, EngineError, EngineResult,
    ResultAggregator,
};

// Config
pub use config::{AllocationConfig, ConfigManager};

// API
pub use api::{AssignApi, RosterApi};

// ==========================================
// Constants
// ==========================================

// System version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Guild Assign";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
