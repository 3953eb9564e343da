//! Operators Manager Shared - Persisted data formats and their mapping to the domain
//!
//! This crate contains the JSON records the application stores on disk:
//! - Operator master data (`operators_master.json`)
//! - Game data name tables (`game_data_master.json`)
//! - The player's save file (`operators_user.json`)
//!
//! and the mapper that turns them into `opsmgr_domain::Operator` aggregates.
//!
//! # Design Principles
//!
//! 1. **Records are lenient** - Missing fields fall back to defaults
//! 2. **Domain is strict** - Ranges are checked once, while mapping
//! 3. **One bad record never sinks the roster** - failures are collected per operator

pub mod error;
pub mod game_data;
pub mod mapping;
pub mod master_data;
pub mod user_data;

/// Version string written into newly created data files.
pub const DATA_VERSION: &str = "1.0.0";

pub use error::MappingError;
pub use game_data::{GameDataMaster, UNKNOWN_NAME};
pub use mapping::{map_operator, map_roster, RosterMapping, DEFAULT_LANGUAGE};
pub use master_data::{CostTable, MasterOperatorEntry, OperatorMasterData, DEFAULT_SKILL_COUNT};
pub use user_data::{OperatorStateData, OperatorUserData, UserOperatorEntry};
