// ==========================================
// Guild Assign - engine layer
// ==========================================
// Role: allocation rules. No SQL, no I/O; inputs are materialized
// snapshots and every skip or abort carries a reason.
// ==========================================

pub mod capacity;
pub mod eligibility;
pub mod error;
pub mod policy;
pub mod report;

// Re-export core engines
pub use capacity::CapacityLedger;
pub use eligibility::EligibilityEngine;
pub use error::{EngineError, EngineResult};
pub use policy::AllocationPolicy;
pub use report::{CharacterAssignment, MemberLoad, MissionView, ResultAggregator};
