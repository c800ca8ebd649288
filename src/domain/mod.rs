// ==========================================
// Guild Assign - domain model layer
// ==========================================
// Role: entities and closed types shared by every layer.
// Red line: no data access logic, no engine logic.
// ==========================================

pub mod alias;
pub mod assignment;
pub mod member;
pub mod requirement;
pub mod types;

// Re-export core types
pub use alias::{AliasEntry, AliasMap};
pub use assignment::{
    AllocationDiagnostic, AssignmentSlot, DayAssignment, MissionAssignment, MissionOutcome,
};
pub use member::GuildMember;
pub use requirement::Requirement;
pub use types::{DemandKind, SkipReason};
