// ==========================================
// Guild Assign - assignment domain model
// ==========================================
// Output side of the allocation engine: committed slots plus the
// per-requirement diagnostics collected alongside them.
// Red line: slots are never mutated after creation.
// ==========================================

use crate::domain::types::SkipReason;
use serde::{Deserialize, Serialize};

// ==========================================
// AssignmentSlot - one resolved requirement-to-member pairing
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSlot {
    pub character_name: String, // target character (display name)
    pub mission: i32,           // mission the requirement belongs to
    pub member_name: String,    // committed member
}

// ==========================================
// AllocationDiagnostic - one per-requirement skip report
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationDiagnostic {
    pub character_name: String,
    pub mission: i32,
    pub reason: SkipReason,
    pub detail: String, // machine-readable reason string, e.g. "INSUFFICIENT_ELIGIBLE: eligible=3, required=5"
}

// ==========================================
// DayAssignment - Variant A output (partial success allowed)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAssignment {
    pub run_id: String, // allocation run identifier (UUID v4)
    pub day: i32,
    pub slots: Vec<AssignmentSlot>,
    pub diagnostics: Vec<AllocationDiagnostic>,
}

// ==========================================
// MissionAssignment - Variant B output (all-or-nothing)
// ==========================================
// An aborted mission surfaces no slots at all; only the diagnostic
// naming the offending requirement is returned. Unresolved targets stay
// recoverable and are collected in `diagnostics` either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionAssignment {
    pub run_id: String,
    pub day: i32,
    pub mission: i32,
    pub outcome: MissionOutcome,
    pub diagnostics: Vec<AllocationDiagnostic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionOutcome {
    Fulfilled { slots: Vec<AssignmentSlot> },
    Aborted { failure: AllocationDiagnostic },
}

impl MissionOutcome {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, MissionOutcome::Fulfilled { .. })
    }

    /// Slots of a fulfilled outcome; empty for an aborted mission.
    pub fn slots(&self) -> &[AssignmentSlot] {
        match self {
            MissionOutcome::Fulfilled { slots } => slots,
            MissionOutcome::Aborted { .. } => &[],
        }
    }
}
