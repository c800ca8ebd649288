// ==========================================
// Guild Assign - allocation API
// ==========================================
// Role: load the roster/requirement/alias snapshots, run the
// allocation policy, shape the result for presentation.
// Red line: the engine itself never touches the database; everything
// it sees is loaded here first.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::config_manager::ConfigManager;
use crate::domain::assignment::{DayAssignment, MissionAssignment};
use crate::engine::policy::AllocationPolicy;
use crate::engine::report::{MemberLoad, MissionView, ResultAggregator};
use crate::repository::alias_repo::AliasRepository;
use crate::repository::requirement_repo::RequirementRepository;
use crate::repository::roster_repo::RosterRepository;
use std::sync::Arc;
use tracing::info;

// ==========================================
// AssignApi
// ==========================================
pub struct AssignApi {
    roster_repo: Arc<RosterRepository>,
    alias_repo: Arc<AliasRepository>,
    requirement_repo: Arc<RequirementRepository>,
    config_manager: Arc<ConfigManager>,
}

impl AssignApi {
    pub fn new(
        roster_repo: Arc<RosterRepository>,
        alias_repo: Arc<AliasRepository>,
        requirement_repo: Arc<RequirementRepository>,
        config_manager: Arc<ConfigManager>,
    ) -> Self {
        Self {
            roster_repo,
            alias_repo,
            requirement_repo,
            config_manager,
        }
    }

    /// Run the day-wide allocation (partial success allowed).
    pub fn assign_day(&self, guild_id: i64, day: i32) -> ApiResult<DayAssignment> {
        let roster = self.roster_repo.list_by_guild(guild_id)?;
        if roster.is_empty() {
            return Err(ApiError::NotFound(format!(
                "no roster rows for guild {}",
                guild_id
            )));
        }

        let requirements = self.requirement_repo.list_by_day(day)?;
        if requirements.is_empty() {
            return Err(ApiError::NotFound(format!(
                "no requirements recorded for day {}",
                day
            )));
        }

        let aliases = self.alias_repo.load_map()?;
        let config = self
            .config_manager
            .allocation_config()
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;

        let policy = AllocationPolicy::new(config);
        let result = policy.assign_day(day, &roster, &requirements, &aliases)?;

        info!(
            run_id = %result.run_id,
            guild_id,
            day,
            slots = result.slots.len(),
            diagnostics = result.diagnostics.len(),
            "day allocation completed"
        );

        Ok(result)
    }

    /// Run the strict single-mission allocation (all-or-nothing).
    pub fn assign_mission(
        &self,
        guild_id: i64,
        day: i32,
        mission: i32,
    ) -> ApiResult<MissionAssignment> {
        let roster = self.roster_repo.list_by_guild(guild_id)?;
        if roster.is_empty() {
            return Err(ApiError::NotFound(format!(
                "no roster rows for guild {}",
                guild_id
            )));
        }

        let requirements = self.requirement_repo.list_by_day_and_mission(day, mission)?;
        if requirements.is_empty() {
            return Err(ApiError::NotFound(format!(
                "no requirements recorded for day {} mission {}",
                day, mission
            )));
        }

        let aliases = self.alias_repo.load_map()?;
        let config = self
            .config_manager
            .allocation_config()
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;

        let policy = AllocationPolicy::new(config);
        let result = policy.assign_mission_strict(day, mission, &roster, &requirements, &aliases)?;

        info!(
            run_id = %result.run_id,
            guild_id,
            day,
            mission,
            fulfilled = result.outcome.is_fulfilled(),
            diagnostics = result.diagnostics.len(),
            "mission allocation completed"
        );

        Ok(result)
    }

    /// Mission-grouped presentation of a day result.
    pub fn mission_views(&self, result: &DayAssignment) -> Vec<MissionView> {
        ResultAggregator::new().by_mission(&result.slots)
    }

    /// Per-member load summary for a day result.
    pub fn member_loads(&self, guild_id: i64, result: &DayAssignment) -> ApiResult<Vec<MemberLoad>> {
        let roster = self.roster_repo.list_by_guild(guild_id)?;
        Ok(ResultAggregator::new().member_loads(&roster, &result.slots))
    }
}
