// ==========================================
// Guild Assign - allocation policy
// ==========================================
// Role: orchestrate requirement processing order, invoke the
// eligibility engine, apply the capacity ledger, and produce the final
// assignment or a failure report.
//
// Two policy variants exist in the domain and are kept as explicit,
// named entry points rather than unified:
// - assign_day: day-wide, scarcity-first, partial results allowed
// - assign_mission_strict: single mission, level-only eligibility,
//   per-mission caps, all-or-nothing
//
// Red line: every skip carries a reason; recoverable conditions are
// returned as diagnostics, never as errors.
// ==========================================

use crate::config::allocation::AllocationConfig;
use crate::domain::alias::AliasMap;
use crate::domain::assignment::{
    AllocationDiagnostic, AssignmentSlot, DayAssignment, MissionAssignment, MissionOutcome,
};
use crate::domain::member::GuildMember;
use crate::domain::requirement::Requirement;
use crate::domain::types::SkipReason;
use crate::engine::capacity::CapacityLedger;
use crate::engine::eligibility::EligibilityEngine;
use crate::engine::error::{EngineError, EngineResult};
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// AllocationPolicy - policy orchestrator
// ==========================================
pub struct AllocationPolicy {
    eligibility: EligibilityEngine,
    config: AllocationConfig,
}

impl AllocationPolicy {
    pub fn new(config: AllocationConfig) -> Self {
        Self {
            eligibility: EligibilityEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    // ==========================================
    // Variant A - day-wide balancing
    // ==========================================

    /// Allocate all of a day's requirements across missions.
    ///
    /// # Rules
    /// 1. Keep only requirements of `day`; compute each eligible set.
    ///    Unresolved targets and unknown kinds become diagnostics and
    ///    the record is excluded (non-fatal).
    /// 2. Process records scarcest-first: ascending eligible-set size,
    ///    ties by (mission, character_name) so output is a pure
    ///    function of the inputs.
    /// 3. A record with fewer than squad_size eligible rows is reported
    ///    as INSUFFICIENT_ELIGIBLE and skipped whole (non-fatal).
    /// 4. Candidates are ordered by power ascending (keep strong
    ///    members free for harder records), then remaining total
    ///    capacity descending, then member name.
    /// 5. Walk the ordered candidates, committing members with
    ///    remaining capacity until squad_size are committed; a member
    ///    is never committed twice to the same (character, mission).
    /// 6. Fewer than squad_size commits is allowed: the committed slots
    ///    stay and the shortfall is reported.
    pub fn assign_day(
        &self,
        day: i32,
        roster: &[GuildMember],
        requirements: &[Requirement],
        aliases: &AliasMap,
    ) -> EngineResult<DayAssignment> {
        let run_id = Uuid::new_v4().to_string();
        let day_requirements: Vec<&Requirement> =
            requirements.iter().filter(|r| r.day == day).collect();

        info!(
            run_id = %run_id,
            day,
            requirements_count = day_requirements.len(),
            roster_rows = roster.len(),
            aliases = aliases.len(),
            "starting day-wide allocation run"
        );

        // Step 1: eligible sets, unresolvable records filtered out
        let mut diagnostics = Vec::new();
        let mut pending: Vec<(&Requirement, Vec<&GuildMember>)> = Vec::new();

        for requirement in day_requirements {
            match self.eligibility.eligible(requirement, roster, aliases) {
                Ok(eligible) => pending.push((requirement, eligible)),
                Err(err) => diagnostics.push(Self::recoverable_diagnostic(requirement, err)?),
            }
        }

        debug!(
            resolvable = pending.len(),
            skipped = diagnostics.len(),
            "eligibility evaluation complete"
        );

        // Step 2: scarcest requirement first
        pending.sort_by(|a, b| {
            (a.1.len(), a.0.mission, a.0.character_name.as_str())
                .cmp(&(b.1.len(), b.0.mission, b.0.character_name.as_str()))
        });

        // Step 3-6: commit against the ledger
        // Variant A enforces the total cap only; the mission cap is set
        // to the total cap so it can never bind first.
        let mut ledger = CapacityLedger::new(self.config.total_cap, self.config.total_cap);
        let mut slots = Vec::new();
        let mut committed_pairs: HashSet<(String, i32, String)> = HashSet::new();

        for (requirement, eligible) in pending {
            if eligible.len() < self.config.squad_size {
                debug!(
                    character = %requirement.character_name,
                    mission = requirement.mission,
                    eligible = eligible.len(),
                    "not enough eligible members, skipping requirement"
                );
                diagnostics.push(AllocationDiagnostic {
                    character_name: requirement.character_name.clone(),
                    mission: requirement.mission,
                    reason: SkipReason::InsufficientEligible,
                    detail: format!(
                        "INSUFFICIENT_ELIGIBLE: eligible={}, required={}",
                        eligible.len(),
                        self.config.squad_size
                    ),
                });
                continue;
            }

            let committed = self.commit_squad(
                requirement,
                eligible,
                &mut ledger,
                &mut committed_pairs,
                &mut slots,
            )?;

            if committed < self.config.squad_size {
                diagnostics.push(AllocationDiagnostic {
                    character_name: requirement.character_name.clone(),
                    mission: requirement.mission,
                    reason: SkipReason::InsufficientEligible,
                    detail: format!(
                        "INSUFFICIENT_ELIGIBLE: capacity exhausted, committed={}, required={}",
                        committed, self.config.squad_size
                    ),
                });
            }
        }

        info!(
            run_id = %run_id,
            slots_count = slots.len(),
            diagnostics_count = diagnostics.len(),
            "day-wide allocation run complete"
        );

        Ok(DayAssignment {
            run_id,
            day,
            slots,
            diagnostics,
        })
    }

    /// Order candidates and commit up to squad_size of them.
    ///
    /// # Returns
    /// Number of members committed for this requirement.
    fn commit_squad(
        &self,
        requirement: &Requirement,
        mut candidates: Vec<&GuildMember>,
        ledger: &mut CapacityLedger,
        committed_pairs: &mut HashSet<(String, i32, String)>,
        slots: &mut Vec<AssignmentSlot>,
    ) -> EngineResult<usize> {
        // Step 4 ordering: weakest first, then most remaining capacity,
        // then name for a stable total order.
        candidates.sort_by(|a, b| {
            (a.power, Reverse(ledger.remaining_total(&a.name)), a.name.as_str()).cmp(&(
                b.power,
                Reverse(ledger.remaining_total(&b.name)),
                b.name.as_str(),
            ))
        });

        let target_key = requirement.character_name.to_lowercase();
        let mut committed = 0usize;

        for member in candidates {
            if committed >= self.config.squad_size {
                break;
            }
            if ledger.remaining_total(&member.name) == 0 {
                continue;
            }
            // one member never holds two slots of the same
            // (character, mission) pair, even across duplicate records
            let pair = (target_key.clone(), requirement.mission, member.name.clone());
            if committed_pairs.contains(&pair) {
                continue;
            }

            ledger.commit(&member.name, requirement.mission)?;
            committed_pairs.insert(pair);
            slots.push(AssignmentSlot {
                character_name: requirement.character_name.clone(),
                mission: requirement.mission,
                member_name: member.name.clone(),
            });
            committed += 1;
        }

        Ok(committed)
    }

    // ==========================================
    // Variant B - single mission, all-or-nothing
    // ==========================================

    /// Allocate one mission's requirements with per-mission caps and
    /// all-or-nothing semantics.
    ///
    /// # Rules
    /// 1. Requirements are processed in their natural order, no
    ///    scarcity sort.
    /// 2. Eligibility compares the member level uniformly, whatever the
    ///    requirement kind says (preserved domain quirk; the kind code
    ///    is never inspected, so UNKNOWN_DEMAND_KIND cannot occur here).
    /// 3. A candidate must also have remaining total AND remaining
    ///    mission capacity, and must not already hold a slot of the
    ///    same (character, mission) pair.
    /// 4. Candidates are ordered by power ascending (name as
    ///    tie-break), squad_size are committed per requirement.
    /// 5. If any requirement cannot reach squad_size commits, the whole
    ///    mission is aborted: no slots are surfaced, only the failure
    ///    diagnostic naming the offending requirement.
    ///
    /// Unresolved targets remain recoverable: the record is skipped
    /// with a diagnostic and does not abort the mission.
    pub fn assign_mission_strict(
        &self,
        day: i32,
        mission: i32,
        roster: &[GuildMember],
        requirements: &[Requirement],
        aliases: &AliasMap,
    ) -> EngineResult<MissionAssignment> {
        let run_id = Uuid::new_v4().to_string();
        let mission_requirements: Vec<&Requirement> = requirements
            .iter()
            .filter(|r| r.day == day && r.mission == mission)
            .collect();

        info!(
            run_id = %run_id,
            day,
            mission,
            requirements_count = mission_requirements.len(),
            roster_rows = roster.len(),
            "starting strict mission allocation run"
        );

        let mut ledger = CapacityLedger::new(self.config.total_cap, self.config.mission_cap);
        let mut staged: Vec<AssignmentSlot> = Vec::new();
        let mut diagnostics = Vec::new();
        let mut committed_pairs: HashSet<(String, String)> = HashSet::new();

        for requirement in mission_requirements {
            let eligible = match self.eligibility.eligible_by_level(requirement, roster, aliases) {
                Ok(eligible) => eligible,
                Err(err) => {
                    diagnostics.push(Self::recoverable_diagnostic(requirement, err)?);
                    continue;
                }
            };

            let target_key = requirement.character_name.to_lowercase();
            let mut candidates: Vec<&GuildMember> = eligible
                .into_iter()
                .filter(|m| {
                    ledger.remaining_total(&m.name) > 0
                        && ledger.remaining_mission(&m.name, mission) > 0
                        && !committed_pairs.contains(&(target_key.clone(), m.name.clone()))
                })
                .collect();
            candidates.sort_by(|a, b| (a.power, a.name.as_str()).cmp(&(b.power, b.name.as_str())));

            if candidates.len() < self.config.squad_size {
                info!(
                    run_id = %run_id,
                    character = %requirement.character_name,
                    eligible = candidates.len(),
                    "requirement unfulfillable, aborting mission"
                );
                return Ok(MissionAssignment {
                    run_id,
                    day,
                    mission,
                    outcome: MissionOutcome::Aborted {
                        failure: AllocationDiagnostic {
                            character_name: requirement.character_name.clone(),
                            mission,
                            reason: SkipReason::InsufficientEligible,
                            detail: format!(
                                "INSUFFICIENT_ELIGIBLE: eligible={}, required={}",
                                candidates.len(),
                                self.config.squad_size
                            ),
                        },
                    },
                    diagnostics,
                });
            }

            for member in candidates.into_iter().take(self.config.squad_size) {
                ledger.commit(&member.name, mission)?;
                committed_pairs.insert((target_key.clone(), member.name.clone()));
                staged.push(AssignmentSlot {
                    character_name: requirement.character_name.clone(),
                    mission,
                    member_name: member.name.clone(),
                });
            }
        }

        info!(
            run_id = %run_id,
            slots_count = staged.len(),
            diagnostics_count = diagnostics.len(),
            "strict mission allocation run complete"
        );

        Ok(MissionAssignment {
            run_id,
            day,
            mission,
            outcome: MissionOutcome::Fulfilled { slots: staged },
            diagnostics,
        })
    }

    // ==========================================
    // Helpers
    // ==========================================

    /// Convert a recoverable eligibility error into a diagnostic;
    /// anything else propagates as a run-fatal error.
    fn recoverable_diagnostic(
        requirement: &Requirement,
        err: EngineError,
    ) -> EngineResult<AllocationDiagnostic> {
        let (reason, detail) = match &err {
            EngineError::UnresolvedTarget { name } => (
                SkipReason::UnresolvedTarget,
                format!("UNRESOLVED_TARGET: no alias for '{}'", name),
            ),
            EngineError::UnknownDemandKind { code } => (
                SkipReason::UnknownDemandKind,
                format!("UNKNOWN_DEMAND_KIND: '{}'", code),
            ),
            EngineError::CapacityExceeded { .. } => return Err(err),
        };

        Ok(AllocationDiagnostic {
            character_name: requirement.character_name.clone(),
            mission: requirement.mission,
            reason,
            detail,
        })
    }
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::new(AllocationConfig::default())
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alias::AliasMap;

    // ==========================================
    // Test helpers
    // ==========================================

    fn row(name: &str, character_id: &str, power: i64, level: i32, gear: i32) -> GuildMember {
        GuildMember {
            name: name.to_string(),
            character_id: character_id.to_string(),
            guild_id: 1,
            level,
            power,
            stars: 5,
            red_stars: 3,
            gear_tier: gear,
            basic: 0,
            special: 0,
            ultimate: 0,
            passive: 0,
            iso_class: String::new(),
        }
    }

    fn aliases() -> AliasMap {
        let mut map = AliasMap::new();
        map.insert("Black Bolt", "BlackBolt");
        map.insert("Medusa", "Medusa");
        map
    }

    fn policy() -> AllocationPolicy {
        AllocationPolicy::new(AllocationConfig::default())
    }

    // ==========================================
    // Variant A
    // ==========================================

    #[test]
    fn test_assign_day_picks_five_lowest_power() {
        // roster of 6 eligible rows with powers 50..5, ample capacity:
        // exactly the 5 lowest powers are committed
        let roster = vec![
            row("P50", "BlackBolt", 50, 70, 15),
            row("P40", "BlackBolt", 40, 70, 15),
            row("P30", "BlackBolt", 30, 70, 15),
            row("P20", "BlackBolt", 20, 70, 15),
            row("P10", "BlackBolt", 10, 70, 15),
            row("P5", "BlackBolt", 5, 70, 15),
        ];
        let requirements = vec![Requirement::new("Black Bolt", 1, 3, "G", 7)];

        let result = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        assert_eq!(result.slots.len(), 5);
        let committed: Vec<&str> = result.slots.iter().map(|s| s.member_name.as_str()).collect();
        assert_eq!(committed, vec!["P5", "P10", "P20", "P30", "P40"]);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_assign_day_unresolved_target_is_recoverable() {
        let roster = vec![
            row("A", "BlackBolt", 10, 70, 15),
            row("B", "BlackBolt", 20, 70, 15),
            row("C", "BlackBolt", 30, 70, 15),
            row("D", "BlackBolt", 40, 70, 15),
            row("E", "BlackBolt", 50, 70, 15),
        ];
        let requirements = vec![
            Requirement::new("Unknown Hero", 1, 1, "G", 7),
            Requirement::new("Black Bolt", 1, 2, "G", 7),
        ];

        let result = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        // the resolvable record still allocates normally
        assert_eq!(result.slots.len(), 5);
        assert!(result.slots.iter().all(|s| s.mission == 2));

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].reason, SkipReason::UnresolvedTarget);
        assert_eq!(result.diagnostics[0].character_name, "Unknown Hero");
    }

    #[test]
    fn test_assign_day_unknown_kind_is_recoverable() {
        let roster = vec![row("A", "BlackBolt", 10, 70, 15)];
        let requirements = vec![Requirement::new("Black Bolt", 1, 1, "Q", 7)];

        let result = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        assert!(result.slots.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].reason, SkipReason::UnknownDemandKind);
    }

    #[test]
    fn test_assign_day_insufficient_eligible_is_reported() {
        // only 3 rows meet the threshold
        let roster = vec![
            row("A", "BlackBolt", 10, 70, 15),
            row("B", "BlackBolt", 20, 70, 15),
            row("C", "BlackBolt", 30, 70, 15),
            row("D", "BlackBolt", 40, 70, 6),
        ];
        let requirements = vec![Requirement::new("Black Bolt", 1, 1, "G", 7)];

        let result = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        assert!(result.slots.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].reason, SkipReason::InsufficientEligible);
        assert!(result.diagnostics[0].detail.contains("eligible=3"));
    }

    #[test]
    fn test_assign_day_scarcity_first_protects_hard_requirement() {
        // Medusa has exactly 5 holders; the same 5 members also hold
        // Black Bolt along with many others. With total cap 1 each, the
        // scarce Medusa requirement must be filled first and Black Bolt
        // draws from the remaining pool.
        let mut roster = Vec::new();
        for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            roster.push(row(name, "Medusa", 10 + i as i64, 70, 15));
            roster.push(row(name, "BlackBolt", 10 + i as i64, 70, 15));
        }
        for (i, name) in ["F", "G", "H", "I", "J"].iter().enumerate() {
            roster.push(row(name, "BlackBolt", 100 + i as i64, 70, 15));
        }
        let requirements = vec![
            Requirement::new("Black Bolt", 1, 1, "G", 7),
            Requirement::new("Medusa", 1, 2, "G", 7),
        ];

        let config = AllocationConfig {
            total_cap: 1,
            ..AllocationConfig::default()
        };
        let result = AllocationPolicy::new(config)
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        let medusa: Vec<&str> = result
            .slots
            .iter()
            .filter(|s| s.character_name == "Medusa")
            .map(|s| s.member_name.as_str())
            .collect();
        let bolt: Vec<&str> = result
            .slots
            .iter()
            .filter(|s| s.character_name == "Black Bolt")
            .map(|s| s.member_name.as_str())
            .collect();

        // Medusa got its only possible squad
        assert_eq!(medusa, vec!["A", "B", "C", "D", "E"]);
        // Black Bolt had to settle for the leftover pool
        assert_eq!(bolt, vec!["F", "G", "H", "I", "J"]);
    }

    #[test]
    fn test_assign_day_respects_total_cap() {
        let mut roster = Vec::new();
        for m in 1..=3 {
            for name in ["A", "B", "C", "D", "E"] {
                roster.push(row(name, &format!("Char{}", m), 10, 70, 15));
            }
        }
        let mut aliases = AliasMap::new();
        for m in 1..=3 {
            aliases.insert(&format!("Char {}", m), &format!("Char{}", m));
        }
        let requirements: Vec<Requirement> = (1..=3)
            .map(|m| Requirement::new(&format!("Char {}", m), 1, m, "G", 7))
            .collect();

        // cap 2: each member fits only two of the three requirements
        let config = AllocationConfig {
            total_cap: 2,
            ..AllocationConfig::default()
        };
        let result = AllocationPolicy::new(config)
            .assign_day(1, &roster, &requirements, &aliases)
            .unwrap();

        // 5 members x cap 2 = 10 commits, third requirement left short
        assert_eq!(result.slots.len(), 10);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].reason, SkipReason::InsufficientEligible);
        assert!(result.diagnostics[0].detail.contains("capacity exhausted"));

        for name in ["A", "B", "C", "D", "E"] {
            let count = result.slots.iter().filter(|s| s.member_name == name).count();
            assert!(count <= 2, "member {} over cap: {}", name, count);
        }
    }

    #[test]
    fn test_assign_day_duplicate_records_never_reuse_a_member() {
        // the same (character, mission) demanded twice with only 5
        // holders: the first record takes the full squad, the second
        // finds nobody left for that pair and reports the shortfall
        let roster: Vec<GuildMember> = ["A", "B", "C", "D", "E"]
            .iter()
            .enumerate()
            .map(|(i, name)| row(name, "BlackBolt", 10 + i as i64, 70, 15))
            .collect();
        let requirements = vec![
            Requirement::new("Black Bolt", 1, 3, "G", 7),
            Requirement::new("Black Bolt", 1, 3, "G", 7),
        ];

        let result = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        assert_eq!(result.slots.len(), 5);
        let unique: HashSet<&str> = result.slots.iter().map(|s| s.member_name.as_str()).collect();
        assert_eq!(unique.len(), 5);

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].reason, SkipReason::InsufficientEligible);
        assert!(result.diagnostics[0].detail.contains("committed=0"));
    }

    #[test]
    fn test_assign_day_duplicate_records_draw_disjoint_squads() {
        // with 10 holders the duplicated record is still fillable, but
        // from the other half of the pool
        let roster: Vec<GuildMember> = (0..10)
            .map(|i| row(&format!("M{}", i), "BlackBolt", 10 + i as i64, 70, 15))
            .collect();
        let requirements = vec![
            Requirement::new("Black Bolt", 1, 3, "G", 7),
            Requirement::new("Black Bolt", 1, 3, "G", 7),
        ];

        let result = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        assert_eq!(result.slots.len(), 10);
        assert!(result.diagnostics.is_empty());
        let unique: HashSet<&str> = result.slots.iter().map(|s| s.member_name.as_str()).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_assign_day_is_deterministic() {
        let mut roster = Vec::new();
        for i in 0..12 {
            roster.push(row(&format!("M{:02}", i), "BlackBolt", 100 - i as i64, 70, 15));
            roster.push(row(&format!("M{:02}", i), "Medusa", 100 - i as i64, 70, 15));
        }
        let requirements = vec![
            Requirement::new("Black Bolt", 1, 1, "G", 7),
            Requirement::new("Medusa", 1, 2, "Y", 3),
            Requirement::new("Black Bolt", 1, 2, "R", 2),
        ];

        let first = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();
        let second = policy()
            .assign_day(1, &roster, &requirements, &aliases())
            .unwrap();

        assert_eq!(first.slots, second.slots);
        assert_eq!(first.diagnostics, second.diagnostics);
    }

    // ==========================================
    // Variant B
    // ==========================================

    #[test]
    fn test_assign_mission_strict_all_or_nothing() {
        // one satisfiable requirement and one with only 3 eligible rows:
        // zero slots surface, one failure diagnostic for the mission
        let mut roster = Vec::new();
        for name in ["A", "B", "C", "D", "E"] {
            roster.push(row(name, "BlackBolt", 10, 70, 15));
        }
        roster.push(row("X", "Medusa", 10, 70, 15));
        roster.push(row("Y", "Medusa", 20, 70, 15));
        roster.push(row("Z", "Medusa", 30, 70, 15));

        let requirements = vec![
            Requirement::new("Black Bolt", 1, 3, "G", 65),
            Requirement::new("Medusa", 1, 3, "G", 65),
        ];

        let result = policy()
            .assign_mission_strict(1, 3, &roster, &requirements, &aliases())
            .unwrap();

        match &result.outcome {
            MissionOutcome::Aborted { failure } => {
                assert_eq!(failure.character_name, "Medusa");
                assert_eq!(failure.reason, SkipReason::InsufficientEligible);
            }
            MissionOutcome::Fulfilled { .. } => panic!("mission should have aborted"),
        }
        assert!(result.outcome.slots().is_empty());
    }

    #[test]
    fn test_assign_mission_strict_fulfilled_sorted_by_power() {
        let roster = vec![
            row("P60", "BlackBolt", 60, 70, 1),
            row("P10", "BlackBolt", 10, 70, 1),
            row("P30", "BlackBolt", 30, 70, 1),
            row("P20", "BlackBolt", 20, 70, 1),
            row("P50", "BlackBolt", 50, 70, 1),
            row("P40", "BlackBolt", 40, 70, 1),
        ];
        // Gear kind, but only level is compared (gear tiers are all 1)
        let requirements = vec![Requirement::new("Black Bolt", 1, 3, "G", 65)];

        let result = policy()
            .assign_mission_strict(1, 3, &roster, &requirements, &aliases())
            .unwrap();

        assert!(result.outcome.is_fulfilled());
        let committed: Vec<&str> = result
            .outcome
            .slots()
            .iter()
            .map(|s| s.member_name.as_str())
            .collect();
        assert_eq!(committed, vec!["P10", "P20", "P30", "P40", "P50"]);
    }

    #[test]
    fn test_assign_mission_strict_enforces_mission_cap() {
        // 3 requirements in one mission over the same 6 members with
        // mission cap 2: 6 members x 2 = 12 slots < 15 needed, so the
        // third requirement aborts the run
        let mut roster = Vec::new();
        for (i, name) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
            for c in ["Char1", "Char2", "Char3"] {
                roster.push(row(name, c, 10 + i as i64, 70, 15));
            }
        }
        let mut aliases = AliasMap::new();
        for c in ["Char1", "Char2", "Char3"] {
            aliases.insert(c, c);
        }
        let requirements: Vec<Requirement> = ["Char1", "Char2", "Char3"]
            .iter()
            .map(|c| Requirement::new(c, 1, 5, "G", 60))
            .collect();

        let result = policy()
            .assign_mission_strict(1, 5, &roster, &requirements, &aliases)
            .unwrap();

        match &result.outcome {
            MissionOutcome::Aborted { failure } => {
                assert_eq!(failure.character_name, "Char3");
                // A..E were committed twice and are mission-saturated,
                // leaving only F
                assert!(failure.detail.contains("eligible=1"));
            }
            MissionOutcome::Fulfilled { .. } => panic!("mission cap should have aborted the run"),
        }
    }

    #[test]
    fn test_assign_mission_strict_unresolved_target_is_recoverable() {
        let mut roster = Vec::new();
        for name in ["A", "B", "C", "D", "E"] {
            roster.push(row(name, "BlackBolt", 10, 70, 15));
        }
        let requirements = vec![
            Requirement::new("Unknown Hero", 1, 3, "G", 65),
            Requirement::new("Black Bolt", 1, 3, "G", 65),
        ];

        let result = policy()
            .assign_mission_strict(1, 3, &roster, &requirements, &aliases())
            .unwrap();

        assert!(result.outcome.is_fulfilled());
        assert_eq!(result.outcome.slots().len(), 5);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].reason, SkipReason::UnresolvedTarget);
    }

    #[test]
    fn test_assign_mission_strict_no_duplicate_pair() {
        // the same (character, mission) demanded twice: second squad
        // must not reuse the first squad's members
        let mut roster = Vec::new();
        for i in 0..10 {
            roster.push(row(&format!("M{}", i), "BlackBolt", 10 + i as i64, 70, 15));
        }
        let requirements = vec![
            Requirement::new("Black Bolt", 1, 3, "G", 65),
            Requirement::new("Black Bolt", 1, 3, "G", 65),
        ];

        let result = policy()
            .assign_mission_strict(1, 3, &roster, &requirements, &aliases())
            .unwrap();

        assert!(result.outcome.is_fulfilled());
        let slots = result.outcome.slots();
        assert_eq!(slots.len(), 10);
        let unique: HashSet<&str> = slots.iter().map(|s| s.member_name.as_str()).collect();
        assert_eq!(unique.len(), 10);
    }
}
