// ==========================================
// Guild Assign - capacity ledger
// ==========================================
// Role: per-run workload counters, one ledger per allocation run.
// Red line: capacity constraints win over requirement priority.
// The ledger is ephemeral - it is created at the start of a run,
// mutated only through commit(), and dropped with the run. It is
// never persisted and never shared between runs.
// ==========================================

use crate::engine::error::{EngineError, EngineResult};
use std::collections::HashMap;

// ==========================================
// CapacityLedger - total and per-mission counters
// ==========================================
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    total_cap: u32,
    mission_cap: u32,
    total_used: HashMap<String, u32>,
    mission_used: HashMap<(String, i32), u32>,
}

impl CapacityLedger {
    /// New ledger with the given caps; all counters start at zero.
    pub fn new(total_cap: u32, mission_cap: u32) -> Self {
        Self {
            total_cap,
            mission_cap,
            total_used: HashMap::new(),
            mission_used: HashMap::new(),
        }
    }

    /// Remaining total assignments for a member.
    pub fn remaining_total(&self, member: &str) -> u32 {
        self.total_cap
            .saturating_sub(*self.total_used.get(member).unwrap_or(&0))
    }

    /// Remaining assignments for a member within one mission.
    pub fn remaining_mission(&self, member: &str, mission: i32) -> u32 {
        self.mission_cap.saturating_sub(
            *self
                .mission_used
                .get(&(member.to_string(), mission))
                .unwrap_or(&0),
        )
    }

    /// Total assignments already committed for a member.
    pub fn total_used(&self, member: &str) -> u32 {
        *self.total_used.get(member).unwrap_or(&0)
    }

    /// Commit one assignment, incrementing both counters.
    ///
    /// Fails with `CapacityExceeded` when either cap is already
    /// saturated. The policy checks remaining capacity before calling,
    /// so an error here is an internal invariant failure, not a
    /// user-facing condition.
    pub fn commit(&mut self, member: &str, mission: i32) -> EngineResult<()> {
        if self.remaining_total(member) == 0 || self.remaining_mission(member, mission) == 0 {
            return Err(EngineError::CapacityExceeded {
                member: member.to_string(),
                mission,
            });
        }

        *self.total_used.entry(member.to_string()).or_insert(0) += 1;
        *self
            .mission_used
            .entry((member.to_string(), mission))
            .or_insert(0) += 1;
        Ok(())
    }
}
