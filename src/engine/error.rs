// ==========================================
// Guild Assign - engine error types
// ==========================================
// UnresolvedTarget / UnknownDemandKind are recoverable per requirement:
// the policy converts them into diagnostics and keeps allocating.
// CapacityExceeded is an internal invariant failure - the policy checks
// remaining capacity before every commit, so reaching it is a defect
// and it aborts the whole run.
// ==========================================

use thiserror::Error;

/// Engine-layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unresolved target: '{name}' has no alias mapping")]
    UnresolvedTarget { name: String },

    #[error("unknown demand kind: '{code}'")]
    UnknownDemandKind { code: String },

    #[error("capacity exceeded: member={member}, mission={mission}")]
    CapacityExceeded { member: String, mission: i32 },
}

/// Result type alias
pub type EngineResult<T> = Result<T, EngineError>;
