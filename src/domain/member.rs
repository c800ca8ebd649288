// ==========================================
// Guild Assign - roster domain model
// ==========================================
// One row per (member, owned character), as exported by the game's
// roster CSV. The engine treats rows as immutable snapshot input and
// never mutates the source roster.
// ==========================================

use crate::domain::types::DemandKind;
use serde::{Deserialize, Serialize};

// ==========================================
// GuildMember - one member's copy of a character
// ==========================================
// `name` identifies the member; `character_id` is the canonical id of
// the character this row describes, so the same member appears once per
// owned character and the same character_id repeats across members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildMember {
    // ===== Identity =====
    pub name: String,         // member display name
    pub character_id: String, // canonical character identifier
    pub guild_id: i64,        // owning guild scope

    // ===== Comparison attributes =====
    pub level: i32,     // character level
    pub power: i64,     // character power (ordering key)
    pub stars: i32,     // yellow stars
    pub red_stars: i32, // red stars
    pub gear_tier: i32, // gear tier

    // ===== Ability levels (carried for roster queries, unused by the engine) =====
    pub basic: i32,
    pub special: i32,
    pub ultimate: i32,
    pub passive: i32,
    pub iso_class: String,
}

impl GuildMember {
    /// Attribute selected by a demand kind.
    ///
    /// # Mapping
    /// - Gear → gear_tier
    /// - Star → stars
    /// - RedStar → red_stars
    pub fn attribute(&self, kind: DemandKind) -> i32 {
        match kind {
            DemandKind::Gear => self.gear_tier,
            DemandKind::Star => self.stars,
            DemandKind::RedStar => self.red_stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> GuildMember {
        GuildMember {
            name: "Alice".to_string(),
            character_id: "BlackBolt".to_string(),
            guild_id: 1,
            level: 75,
            power: 120_000,
            stars: 6,
            red_stars: 4,
            gear_tier: 15,
            basic: 7,
            special: 7,
            ultimate: 7,
            passive: 5,
            iso_class: "Striker".to_string(),
        }
    }

    #[test]
    fn test_attribute_dispatch() {
        let m = member();
        assert_eq!(m.attribute(DemandKind::Gear), 15);
        assert_eq!(m.attribute(DemandKind::Star), 6);
        assert_eq!(m.attribute(DemandKind::RedStar), 4);
    }
}
