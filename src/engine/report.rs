// ==========================================
// Guild Assign - result aggregator
// ==========================================
// Role: read-only presentation views over committed slots.
// Red line: never mutates slots or the ledger; pure transformation.
// ==========================================

use crate::domain::assignment::AssignmentSlot;
use crate::domain::member::GuildMember;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// Mission view - slots grouped by mission, then character
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionView {
    pub mission: i32,
    pub characters: Vec<CharacterAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAssignment {
    pub character_name: String,
    pub members: Vec<String>, // in commit order
}

// ==========================================
// Member view - workload per member
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLoad {
    pub member_name: String,
    pub assignments: Vec<(String, i32)>, // (character_name, mission), in commit order
    pub total: usize,
}

// ==========================================
// ResultAggregator
// ==========================================
pub struct ResultAggregator;

impl ResultAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Group slots by mission (numeric ascending), then by character
    /// name within a mission. Members keep their commit order.
    pub fn by_mission(&self, slots: &[AssignmentSlot]) -> Vec<MissionView> {
        let mut grouped: BTreeMap<i32, BTreeMap<String, Vec<String>>> = BTreeMap::new();

        for slot in slots {
            grouped
                .entry(slot.mission)
                .or_default()
                .entry(slot.character_name.clone())
                .or_default()
                .push(slot.member_name.clone());
        }

        grouped
            .into_iter()
            .map(|(mission, characters)| MissionView {
                mission,
                characters: characters
                    .into_iter()
                    .map(|(character_name, members)| CharacterAssignment {
                        character_name,
                        members,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Per-member workload summary, member names ascending.
    ///
    /// Every distinct roster member appears, including members with
    /// zero assignments, so the view doubles as a balance check.
    pub fn member_loads(&self, roster: &[GuildMember], slots: &[AssignmentSlot]) -> Vec<MemberLoad> {
        let mut loads: BTreeMap<String, Vec<(String, i32)>> = BTreeMap::new();

        for name in roster.iter().map(|m| m.name.clone()).collect::<BTreeSet<_>>() {
            loads.insert(name, Vec::new());
        }
        for slot in slots {
            loads
                .entry(slot.member_name.clone())
                .or_default()
                .push((slot.character_name.clone(), slot.mission));
        }

        loads
            .into_iter()
            .map(|(member_name, assignments)| MemberLoad {
                total: assignments.len(),
                member_name,
                assignments,
            })
            .collect()
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn slot(character: &str, mission: i32, member: &str) -> AssignmentSlot {
        AssignmentSlot {
            character_name: character.to_string(),
            mission,
            member_name: member.to_string(),
        }
    }

    fn roster_row(name: &str) -> GuildMember {
        GuildMember {
            name: name.to_string(),
            character_id: "BlackBolt".to_string(),
            guild_id: 1,
            level: 70,
            power: 1,
            stars: 0,
            red_stars: 0,
            gear_tier: 0,
            basic: 0,
            special: 0,
            ultimate: 0,
            passive: 0,
            iso_class: String::new(),
        }
    }

    #[test]
    fn test_by_mission_orders_numerically_and_by_character() {
        let slots = vec![
            slot("Medusa", 10, "A"),
            slot("Black Bolt", 2, "B"),
            slot("Black Bolt", 2, "A"),
            slot("Karnak", 2, "C"),
        ];

        let views = ResultAggregator::new().by_mission(&slots);

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].mission, 2);
        assert_eq!(views[1].mission, 10);

        let names: Vec<&str> = views[0]
            .characters
            .iter()
            .map(|c| c.character_name.as_str())
            .collect();
        assert_eq!(names, vec!["Black Bolt", "Karnak"]);
        // commit order kept within a character
        assert_eq!(views[0].characters[0].members, vec!["B", "A"]);
    }

    #[test]
    fn test_member_loads_include_idle_members() {
        let roster = vec![roster_row("A"), roster_row("B"), roster_row("A")];
        let slots = vec![slot("Black Bolt", 1, "A"), slot("Medusa", 2, "A")];

        let loads = ResultAggregator::new().member_loads(&roster, &slots);

        assert_eq!(loads.len(), 2); // duplicate roster rows collapse
        assert_eq!(loads[0].member_name, "A");
        assert_eq!(loads[0].total, 2);
        assert_eq!(
            loads[0].assignments,
            vec![("Black Bolt".to_string(), 1), ("Medusa".to_string(), 2)]
        );
        assert_eq!(loads[1].member_name, "B");
        assert_eq!(loads[1].total, 0);
    }
}
