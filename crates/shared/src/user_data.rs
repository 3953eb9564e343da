//! Player save-file records (`operators_user.json`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsmgr_domain::{
    DomainError, ModuleTier, Operator, ProgressionState, PromotionTier, SkillMasteryTier,
};

/// Raw progression numbers as stored on disk.
///
/// Missing fields take the initial-state values, so an empty object reads as
/// a freshly recruited operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorStateData {
    pub promotion: i32,
    pub level: i32,
    pub skill_level: i32,
    pub skill1_mastery: i32,
    pub skill2_mastery: i32,
    pub skill3_mastery: i32,
    pub module_x: i32,
    pub module_y: i32,
    pub module_d: i32,
    pub module_a: i32,
}

impl Default for OperatorStateData {
    fn default() -> Self {
        Self::from(&ProgressionState::initial())
    }
}

impl TryFrom<OperatorStateData> for ProgressionState {
    type Error = DomainError;

    fn try_from(data: OperatorStateData) -> Result<Self, Self::Error> {
        Ok(ProgressionState::new(
            PromotionTier::new(data.promotion)?,
            data.level,
            data.skill_level,
            SkillMasteryTier::new(data.skill1_mastery)?,
            SkillMasteryTier::new(data.skill2_mastery)?,
            SkillMasteryTier::new(data.skill3_mastery)?,
            ModuleTier::new(data.module_x)?,
            ModuleTier::new(data.module_y)?,
            ModuleTier::new(data.module_d)?,
            ModuleTier::new(data.module_a)?,
        ))
    }
}

impl From<&ProgressionState> for OperatorStateData {
    fn from(state: &ProgressionState) -> Self {
        Self {
            promotion: state.promotion().into(),
            level: state.level(),
            skill_level: state.skill_level(),
            skill1_mastery: state.skill1_mastery().into(),
            skill2_mastery: state.skill2_mastery().into(),
            skill3_mastery: state.skill3_mastery().into(),
            module_x: state.module_x().into(),
            module_y: state.module_y().into(),
            module_d: state.module_d().into(),
            module_a: state.module_a().into(),
        }
    }
}

/// The player's record for one operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserOperatorEntry {
    pub current_state: OperatorStateData,
    pub target_state: OperatorStateData,
    pub potential: i32,
    pub trust: i32,
    pub paradox_cleared: bool,
    pub group: Option<String>,
    pub priority: i32,
    pub memo: Option<String>,
}

impl From<&Operator> for UserOperatorEntry {
    fn from(operator: &Operator) -> Self {
        Self {
            current_state: operator.current_state().into(),
            target_state: operator.target_state().into(),
            potential: operator.potential().into(),
            trust: operator.trust().into(),
            paradox_cleared: operator.paradox_cleared(),
            group: operator.group().map(str::to_string),
            priority: operator.priority(),
            memo: operator.memo().map(str::to_string),
        }
    }
}

/// Whole save file, keyed by operator code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorUserData {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    pub operators: BTreeMap<String, UserOperatorEntry>,
}

impl Default for OperatorUserData {
    fn default() -> Self {
        Self {
            version: crate::DATA_VERSION.to_string(),
            last_modified: None,
            operators: BTreeMap::new(),
        }
    }
}

impl OperatorUserData {
    /// Store the operator's user fields under its code, replacing any previous entry.
    pub fn record(&mut self, operator: &Operator, now: DateTime<Utc>) {
        self.operators
            .insert(operator.code().to_string(), UserOperatorEntry::from(operator));
        self.last_modified = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsmgr_domain::{LocalizedName, ModuleKind, OperatorClass, OperatorCode, RarityTier};

    #[test]
    fn empty_object_is_initial_state() {
        let data: OperatorStateData = serde_json::from_str("{}").unwrap();
        assert_eq!(
            ProgressionState::try_from(data).unwrap(),
            ProgressionState::initial()
        );
    }

    #[test]
    fn reads_camel_case_fields() {
        let data: OperatorStateData = serde_json::from_str(
            r#"{"promotion":2,"level":90,"skillLevel":7,"skill3Mastery":3,"moduleY":2}"#,
        )
        .unwrap();
        let state = ProgressionState::try_from(data).unwrap();
        assert_eq!(state.promotion(), PromotionTier::ELITE2);
        assert_eq!(state.level(), 90);
        assert_eq!(state.skill3_mastery(), SkillMasteryTier::M3);
        assert_eq!(state.module(ModuleKind::Y), ModuleTier::STAGE2);
    }

    #[test]
    fn out_of_range_tier_is_rejected() {
        let data = OperatorStateData {
            skill2_mastery: 4,
            ..OperatorStateData::default()
        };
        let err = ProgressionState::try_from(data).unwrap_err();
        assert_eq!(err, DomainError::range("SkillMasteryTier", 4, 0, 3));
    }

    #[test]
    fn level_is_carried_unchecked() {
        let data = OperatorStateData {
            level: 500,
            ..OperatorStateData::default()
        };
        assert_eq!(ProgressionState::try_from(data).unwrap().level(), 500);
    }

    #[test]
    fn record_writes_operator_user_fields() {
        let mut operator = Operator::new(
            OperatorCode::new("R001").unwrap(),
            LocalizedName::default(),
            RarityTier::new(5).unwrap(),
            OperatorClass::Caster,
            3,
        )
        .unwrap();
        operator.update_potential(3).unwrap();
        operator.update_memo(Some("main".to_string()));

        let mut user_data = OperatorUserData::default();
        let now = Utc::now();
        user_data.record(&operator, now);

        let entry = &user_data.operators["R001"];
        assert_eq!(entry.potential, 3);
        assert_eq!(entry.memo.as_deref(), Some("main"));
        assert_eq!(entry.current_state, OperatorStateData::default());
        assert_eq!(user_data.last_modified, Some(now));
    }
}
