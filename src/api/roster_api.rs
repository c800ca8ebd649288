// ==========================================
// Guild Assign - roster query API
// ==========================================
// Role: read-side queries over roster, aliases and requirements.
// Target names are run through the alias map first; an unmapped query
// is treated as a raw character id.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::alias::AliasEntry;
use crate::domain::member::GuildMember;
use crate::domain::requirement::Requirement;
use crate::domain::types::DemandKind;
use crate::repository::alias_repo::AliasRepository;
use crate::repository::requirement_repo::RequirementRepository;
use crate::repository::roster_repo::RosterRepository;
use std::sync::Arc;
use tracing::debug;

// ==========================================
// RosterApi
// ==========================================
pub struct RosterApi {
    roster_repo: Arc<RosterRepository>,
    alias_repo: Arc<AliasRepository>,
    requirement_repo: Arc<RequirementRepository>,
}

impl RosterApi {
    pub fn new(
        roster_repo: Arc<RosterRepository>,
        alias_repo: Arc<AliasRepository>,
        requirement_repo: Arc<RequirementRepository>,
    ) -> Self {
        Self {
            roster_repo,
            alias_repo,
            requirement_repo,
        }
    }

    /// Members holding a character at or above a threshold, strongest
    /// first.
    ///
    /// # Arguments
    /// - target: character display name (alias) or raw character id
    /// - criterion: kind code + threshold, e.g. "g16", "y5", "r7"
    pub fn search_members(
        &self,
        guild_id: i64,
        target: &str,
        criterion: &str,
    ) -> ApiResult<Vec<GuildMember>> {
        let (kind, threshold) = DemandKind::from_search_criterion(criterion).ok_or_else(|| {
            ApiError::InvalidInput(format!(
                "malformed search criterion '{}' (expected e.g. g16, y5, r7)",
                criterion
            ))
        })?;

        let aliases = self.alias_repo.load_map()?;
        let character_id = aliases
            .resolve(target)
            .map(|id| id.to_string())
            .unwrap_or_else(|| target.to_string());

        debug!(
            guild_id,
            target,
            character_id = %character_id,
            kind = %kind,
            threshold,
            "roster search"
        );

        Ok(self
            .roster_repo
            .search_holders(guild_id, &character_id, kind, threshold)?)
    }

    /// Alias mappings matching a substring pattern.
    pub fn search_aliases(&self, pattern: &str) -> ApiResult<Vec<AliasEntry>> {
        Ok(self.alias_repo.search(pattern)?)
    }

    /// Demand records of one day, mission then character order.
    pub fn list_requirements(&self, day: i32) -> ApiResult<Vec<Requirement>> {
        Ok(self.requirement_repo.list_by_day(day)?)
    }

    /// Distinct member names of one guild.
    pub fn list_member_names(&self, guild_id: i64) -> ApiResult<Vec<String>> {
        Ok(self.roster_repo.distinct_member_names(guild_id)?)
    }
}
