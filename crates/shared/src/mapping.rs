//! Builds `Operator` aggregates from master, game and user records.

use tracing::{debug, warn};

use opsmgr_domain::{
    DomainError, ModuleKind, Operator, OperatorClass, OperatorCode, ProgressionState, RarityTier,
    Sex,
};

use crate::error::MappingError;
use crate::game_data::GameDataMaster;
use crate::master_data::{MasterOperatorEntry, OperatorMasterData};
use crate::user_data::{OperatorUserData, UserOperatorEntry};

/// Language used for race and faction names when none is configured.
pub const DEFAULT_LANGUAGE: &str = "ja-JP";

/// Map one operator.
///
/// Available modules come from the keys of the master record's module cost
/// table; keys that are not a known module kind are skipped with a warning.
/// Without a user entry the operator is unowned with initial current and
/// target states.
///
/// # Errors
///
/// - `MappingError::InvalidMaster` if the code is blank, the rarity is not 1 to 6
///   stars, the class index is unknown or the skill count is outside `[1, 3]`
/// - `MappingError::InvalidUser` if a saved state holds an out-of-range tier or
///   potential/trust are out of range
pub fn map_operator(
    master: &MasterOperatorEntry,
    game_data: &GameDataMaster,
    user: Option<&UserOperatorEntry>,
    language: &str,
) -> Result<Operator, MappingError> {
    let mut operator = map_master(master, game_data, language)
        .map_err(|source| MappingError::invalid_master(&master.code, source))?;
    if let Some(user) = user {
        apply_user_entry(&mut operator, user)?;
    }
    Ok(operator)
}

fn map_master(
    master: &MasterOperatorEntry,
    game_data: &GameDataMaster,
    language: &str,
) -> Result<Operator, DomainError> {
    let code = OperatorCode::new(master.code.as_str())?;
    let rarity = RarityTier::new(master.rarity_value())?;
    let class = OperatorClass::from_index(master.class)?;
    let modules = available_modules(&code, master);

    Ok(
        Operator::new(code, master.name.clone(), rarity, class, master.skill_count())?
            .with_faction(game_data.faction_name(master.faction, language))
            .with_race(game_data.race_name(master.race, language))
            .with_available_modules(modules)
            .with_add_date(master.add_date.clone())
            .with_sex(Sex::from_index(master.sex))
            .with_place(master.place)
            .with_page(master.page)
            .with_paradox_dates(master.paradox.clone().unwrap_or_default())
            .with_module_add_dates(master.module_add_dates.clone().unwrap_or_default())
            .with_alternates(master.alternates.clone().unwrap_or_default()),
    )
}

fn available_modules(code: &OperatorCode, master: &MasterOperatorEntry) -> Vec<ModuleKind> {
    master
        .modules
        .keys()
        .filter_map(|key| match key.parse::<ModuleKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                warn!(operator = %code, module = %key, "Skipping unknown module kind in master data");
                None
            }
        })
        .collect()
}

fn apply_user_entry(operator: &mut Operator, user: &UserOperatorEntry) -> Result<(), MappingError> {
    let code = operator.code().to_string();

    let current = ProgressionState::try_from(user.current_state)
        .map_err(|source| MappingError::invalid_user(&code, "currentState", source))?;
    let target = ProgressionState::try_from(user.target_state)
        .map_err(|source| MappingError::invalid_user(&code, "targetState", source))?;
    operator
        .update_potential(user.potential)
        .map_err(|source| MappingError::invalid_user(&code, "potential", source))?;
    operator
        .update_trust(user.trust)
        .map_err(|source| MappingError::invalid_user(&code, "trust", source))?;

    operator.update_current_state(current);
    operator.update_target_state(target);
    operator.update_paradox_cleared(user.paradox_cleared);
    operator.update_group(user.group.clone());
    operator.update_priority(user.priority);
    operator.update_memo(user.memo.clone());
    Ok(())
}

/// Result of mapping a whole roster: the operators that mapped, and one
/// error per operator that did not.
#[derive(Debug, Default)]
pub struct RosterMapping {
    pub operators: Vec<Operator>,
    pub failures: Vec<MappingError>,
}

impl RosterMapping {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Map every master record in code order, pairing each with the user entry
/// stored under the same code. A failing operator is recorded and skipped.
pub fn map_roster(
    master_data: &OperatorMasterData,
    game_data: &GameDataMaster,
    user_data: &OperatorUserData,
    language: &str,
) -> RosterMapping {
    let mut mapping = RosterMapping::default();

    for (code, master) in &master_data.operators {
        match map_operator(master, game_data, user_data.operators.get(code), language) {
            Ok(operator) => mapping.operators.push(operator),
            Err(e) => {
                warn!(operator = %code, error = %e, "Failed to map operator");
                mapping.failures.push(e);
            }
        }
    }

    for code in user_data
        .operators
        .keys()
        .filter(|code| !master_data.operators.contains_key(*code))
    {
        warn!(operator = %code, "User data references an operator missing from master data");
    }

    debug!(
        mapped = mapping.operators.len(),
        failed = mapping.failures.len(),
        "Mapped operator roster"
    );
    mapping
}
