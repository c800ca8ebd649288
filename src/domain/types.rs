// ==========================================
// Guild Assign - domain type definitions
// ==========================================
// Closed tag sets used across the engine. A demand kind is a
// tagged selector over roster attributes, never a column index.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Demand kind (requirement type)
// ==========================================
// Storage format: single-letter codes 'G' / 'Y' / 'R', as imported
// from req.csv. Unknown codes are kept raw on the requirement row and
// reported at allocation time, never dropped at import time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandKind {
    Gear,    // gear tier
    Star,    // yellow stars
    RedStar, // red stars
}

impl fmt::Display for DemandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandKind::Gear => write!(f, "GEAR"),
            DemandKind::Star => write!(f, "STAR"),
            DemandKind::RedStar => write!(f, "RED_STAR"),
        }
    }
}

impl DemandKind {
    /// Parse a requirement-type code as stored in the requirements table.
    ///
    /// # Codes
    /// - "G" → Gear
    /// - "Y" → Star
    /// - "R" → RedStar
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "G" => Some(DemandKind::Gear),
            "Y" => Some(DemandKind::Star),
            "R" => Some(DemandKind::RedStar),
            _ => None,
        }
    }

    /// Code stored in the database for this kind.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DemandKind::Gear => "G",
            DemandKind::Star => "Y",
            DemandKind::RedStar => "R",
        }
    }

    /// Parse a roster search criterion such as "g16", "y5" or "r7".
    ///
    /// # Returns
    /// (kind, threshold), or None when the prefix or number is invalid.
    pub fn from_search_criterion(criterion: &str) -> Option<(Self, i32)> {
        let trimmed = criterion.trim();
        let mut chars = trimmed.chars();
        let prefix = chars.next()?;
        let threshold = chars.as_str().parse::<i32>().ok()?;

        let kind = match prefix.to_ascii_lowercase() {
            'g' => DemandKind::Gear,
            'y' => DemandKind::Star,
            'r' => DemandKind::RedStar,
            _ => return None,
        };

        Some((kind, threshold))
    }
}

// ==========================================
// Skip reason (per-requirement diagnostics)
// ==========================================
// Red line: recoverable conditions travel as data, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    UnresolvedTarget,     // character name missing from the alias map
    UnknownDemandKind,    // requirement-type code not in {G, Y, R}
    InsufficientEligible, // fewer than squad-size members available
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnresolvedTarget => write!(f, "UNRESOLVED_TARGET"),
            SkipReason::UnknownDemandKind => write!(f, "UNKNOWN_DEMAND_KIND"),
            SkipReason::InsufficientEligible => write!(f, "INSUFFICIENT_ELIGIBLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_kinds() {
        assert_eq!(DemandKind::from_code("G"), Some(DemandKind::Gear));
        assert_eq!(DemandKind::from_code("y"), Some(DemandKind::Star));
        assert_eq!(DemandKind::from_code(" r "), Some(DemandKind::RedStar));
    }

    #[test]
    fn test_from_code_unknown_kind() {
        assert_eq!(DemandKind::from_code("X"), None);
        assert_eq!(DemandKind::from_code(""), None);
    }

    #[test]
    fn test_search_criterion_parsing() {
        assert_eq!(
            DemandKind::from_search_criterion("g16"),
            Some((DemandKind::Gear, 16))
        );
        assert_eq!(
            DemandKind::from_search_criterion("Y5"),
            Some((DemandKind::Star, 5))
        );
        assert_eq!(
            DemandKind::from_search_criterion("r7"),
            Some((DemandKind::RedStar, 7))
        );
        assert_eq!(DemandKind::from_search_criterion("q3"), None);
        assert_eq!(DemandKind::from_search_criterion("g"), None);
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(DemandKind::Gear.to_string(), "GEAR");
        assert_eq!(DemandKind::RedStar.to_db_str(), "R");
        assert_eq!(SkipReason::UnresolvedTarget.to_string(), "UNRESOLVED_TARGET");
    }
}
