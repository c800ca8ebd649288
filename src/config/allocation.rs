// ==========================================
// Guild Assign - allocation configuration
// ==========================================
// Plain snapshot handed to the allocation policy. The engine never
// reads ambient state; whoever builds the snapshot (ConfigManager,
// tests, CLI flags) owns where the values come from.
// ==========================================

use serde::{Deserialize, Serialize};

/// Members required to fulfil one requirement.
///
/// The source domain hard-codes 5 slots per requirement; do not change
/// without product confirmation.
pub const DEFAULT_SQUAD_SIZE: usize = 5;

/// Total assignments one member may receive in a run scope.
pub const DEFAULT_TOTAL_CAP: u32 = 12;

/// Assignments one member may receive within a single mission
/// (enforced by the strict single-mission policy only).
pub const DEFAULT_MISSION_CAP: u32 = 2;

// ==========================================
// AllocationConfig - per-run policy parameters
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationConfig {
    pub squad_size: usize,
    pub total_cap: u32,
    pub mission_cap: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            squad_size: DEFAULT_SQUAD_SIZE,
            total_cap: DEFAULT_TOTAL_CAP,
            mission_cap: DEFAULT_MISSION_CAP,
        }
    }
}
