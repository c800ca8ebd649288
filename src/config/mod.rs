// ==========================================
// Guild Assign - configuration layer
// ==========================================

pub mod allocation;
pub mod config_manager;

pub use allocation::{
    AllocationConfig, DEFAULT_MISSION_CAP, DEFAULT_SQUAD_SIZE, DEFAULT_TOTAL_CAP,
};
pub use config_manager::{config_keys, ConfigManager};
