// ==========================================
// Guild Assign - API layer
// ==========================================
// Role: orchestrate repositories + engine for callers (CLI, tests).
// ==========================================

pub mod assign_api;
pub mod error;
pub mod roster_api;

pub use assign_api::AssignApi;
pub use error::{ApiError, ApiResult};
pub use roster_api::RosterApi;
