// ==========================================
// Guild Assign - eligibility engine
// ==========================================
// Role: pure filter from one requirement to the subset of roster rows
// satisfying it. Red line: stateless, no side effects, no I/O.
// Capacity is NOT consulted here; that belongs to the allocation
// policy, which owns the ledger.
// ==========================================

use crate::domain::alias::AliasMap;
use crate::domain::member::GuildMember;
use crate::domain::requirement::Requirement;
use crate::domain::types::DemandKind;
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// EligibilityEngine - pure requirement filter
// ==========================================
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Eligible roster rows for one requirement (kind-dispatched attribute).
    ///
    /// # Rules
    /// 1. Resolve `character_name` through the alias map; a missing
    ///    mapping signals `UnresolvedTarget` (caller decides skip/abort).
    /// 2. Resolve `kind_code`; an unknown code signals `UnknownDemandKind`.
    /// 3. A row is eligible iff its `character_id` equals the resolved id
    ///    AND the kind-selected attribute >= the requirement level.
    ///
    /// # Returns
    /// Eligible rows in roster order.
    pub fn eligible<'a>(
        &self,
        requirement: &Requirement,
        roster: &'a [GuildMember],
        aliases: &AliasMap,
    ) -> EngineResult<Vec<&'a GuildMember>> {
        let character_id = self.resolve_target(requirement, aliases)?;

        let kind = DemandKind::from_code(&requirement.kind_code).ok_or_else(|| {
            EngineError::UnknownDemandKind {
                code: requirement.kind_code.clone(),
            }
        })?;

        Ok(roster
            .iter()
            .filter(|row| row.character_id == character_id && row.attribute(kind) >= requirement.level)
            .collect())
    }

    /// Eligible roster rows using the member level uniformly, regardless
    /// of the requirement kind.
    ///
    /// Documented quirk of the single-mission strict policy: the kind
    /// code still selects nothing here, only `level` is compared. The
    /// character match itself is unchanged.
    pub fn eligible_by_level<'a>(
        &self,
        requirement: &Requirement,
        roster: &'a [GuildMember],
        aliases: &AliasMap,
    ) -> EngineResult<Vec<&'a GuildMember>> {
        let character_id = self.resolve_target(requirement, aliases)?;

        Ok(roster
            .iter()
            .filter(|row| row.character_id == character_id && row.level >= requirement.level)
            .collect())
    }

    /// Resolve a requirement's target name to a canonical character id.
    fn resolve_target(
        &self,
        requirement: &Requirement,
        aliases: &AliasMap,
    ) -> EngineResult<String> {
        aliases
            .resolve(&requirement.character_name)
            .map(str::to_string)
            .ok_or_else(|| EngineError::UnresolvedTarget {
                name: requirement.character_name.clone(),
            })
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
