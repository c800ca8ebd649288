// ==========================================
// Guild Assign - repository layer
// ==========================================
// Role: SQLite persistence behind the engine. Each repository wraps a
// shared connection; no allocation logic lives here.
// ==========================================

pub mod alias_repo;
pub mod error;
pub mod requirement_repo;
pub mod roster_repo;
pub mod schema;

pub use alias_repo::AliasRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use requirement_repo::RequirementRepository;
pub use roster_repo::RosterRepository;
pub use schema::initialize_schema;
