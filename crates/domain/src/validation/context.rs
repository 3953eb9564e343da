//! Validation context - a progression state paired with the static attributes
//! of the operator it belongs to.

use std::collections::BTreeSet;

use crate::aggregates::Operator;
use crate::error::{check_range, DomainError};
use crate::value_objects::{ModuleKind, ProgressionState, RarityTier};

/// Everything the progression rules need to judge one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    state: ProgressionState,
    rarity: RarityTier,
    skill_count: u8,
    available_modules: BTreeSet<ModuleKind>,
}

impl ValidationContext {
    pub const MIN_SKILLS: i32 = 1;
    pub const MAX_SKILLS: i32 = 3;

    /// # Errors
    ///
    /// Returns `DomainError::RangeViolation` if `skill_count` is outside `[1, 3]`.
    pub fn new(
        state: ProgressionState,
        rarity: RarityTier,
        skill_count: i32,
        available_modules: impl IntoIterator<Item = ModuleKind>,
    ) -> Result<Self, DomainError> {
        let skill_count =
            check_range("SkillCount", skill_count, Self::MIN_SKILLS, Self::MAX_SKILLS)?;
        Ok(Self {
            state,
            rarity,
            skill_count: skill_count as u8,
            available_modules: available_modules.into_iter().collect(),
        })
    }

    /// Context for judging `state` as a state of `operator`.
    pub fn for_operator(operator: &Operator, state: ProgressionState) -> Self {
        Self {
            state,
            rarity: operator.rarity(),
            skill_count: operator.skill_count(),
            available_modules: operator.available_modules().clone(),
        }
    }

    pub fn builder() -> ValidationContextBuilder {
        ValidationContextBuilder::default()
    }

    #[inline]
    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    #[inline]
    pub fn rarity(&self) -> RarityTier {
        self.rarity
    }

    #[inline]
    pub fn skill_count(&self) -> u8 {
        self.skill_count
    }

    #[inline]
    pub fn available_modules(&self) -> &BTreeSet<ModuleKind> {
        &self.available_modules
    }

    pub fn has_module(&self, kind: ModuleKind) -> bool {
        self.available_modules.contains(&kind)
    }
}

/// Piecewise assembly of a [`ValidationContext`].
///
/// State and rarity are mandatory; the skill count defaults to 3 and the
/// module set to empty.
#[derive(Debug, Clone, Default)]
pub struct ValidationContextBuilder {
    state: Option<ProgressionState>,
    rarity: Option<RarityTier>,
    skill_count: Option<i32>,
    available_modules: BTreeSet<ModuleKind>,
}

impl ValidationContextBuilder {
    pub fn state(mut self, state: ProgressionState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn rarity(mut self, rarity: RarityTier) -> Self {
        self.rarity = Some(rarity);
        self
    }

    pub fn skill_count(mut self, skill_count: i32) -> Self {
        self.skill_count = Some(skill_count);
        self
    }

    pub fn module(mut self, kind: ModuleKind) -> Self {
        self.available_modules.insert(kind);
        self
    }

    pub fn modules(mut self, kinds: impl IntoIterator<Item = ModuleKind>) -> Self {
        self.available_modules.extend(kinds);
        self
    }

    /// # Errors
    ///
    /// - `DomainError::MissingField` if the state or rarity was never set
    /// - `DomainError::RangeViolation` if the skill count is outside `[1, 3]`
    pub fn build(self) -> Result<ValidationContext, DomainError> {
        let state = self.state.ok_or_else(|| DomainError::missing_field("state"))?;
        let rarity = self.rarity.ok_or_else(|| DomainError::missing_field("rarity"))?;
        ValidationContext::new(
            state,
            rarity,
            self.skill_count.unwrap_or(ValidationContext::MAX_SKILLS),
            self.available_modules,
        )
    }
}
