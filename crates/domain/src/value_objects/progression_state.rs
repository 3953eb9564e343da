//! Progression state - the ten jointly-constrained training fields of an
//! operator, used both for where an operator *is* and where it should *end up*.
//!
//! A `ProgressionState` is an immutable value: every `with_*` method returns a
//! new state and leaves the receiver untouched. It only carries what the
//! component types already guarantee (each tier is in range); whether the
//! combination is legal for a given operator is decided by
//! [`ProgressionValidator`](crate::validation::ProgressionValidator).

use serde::{Deserialize, Serialize};

use super::{ModuleKind, ModuleTier, PromotionTier, SkillMasteryTier};

/// Which of an operator's (up to three) skills a mastery refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSlot {
    First,
    Second,
    Third,
}

impl SkillSlot {
    pub const ALL: [SkillSlot; 3] = [Self::First, Self::Second, Self::Third];

    /// 1-based skill number.
    pub fn number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

/// Training progress of one operator.
///
/// Equality and hashing cover all ten fields, so two states built from the
/// same values are interchangeable (this is what `Operator::is_completed`
/// relies on).
///
/// # Example
///
/// ```
/// use opsmgr_domain::value_objects::{ProgressionState, PromotionTier};
///
/// let start = ProgressionState::initial();
/// let next = start.with_promotion(PromotionTier::ELITE1).with_level(40);
///
/// assert_eq!(start.level(), 1);
/// assert_eq!(next.level(), 40);
/// assert_eq!(next.promotion(), PromotionTier::ELITE1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    promotion: PromotionTier,
    level: i32,
    skill_level: i32,
    skill1_mastery: SkillMasteryTier,
    skill2_mastery: SkillMasteryTier,
    skill3_mastery: SkillMasteryTier,
    module_x: ModuleTier,
    module_y: ModuleTier,
    module_d: ModuleTier,
    module_a: ModuleTier,
}

impl ProgressionState {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a state from all ten components.
    ///
    /// `level` and `skill_level` are not bounded here; out-of-range values are
    /// reported by the validator so that every problem surfaces at once.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        promotion: PromotionTier,
        level: i32,
        skill_level: i32,
        skill1_mastery: SkillMasteryTier,
        skill2_mastery: SkillMasteryTier,
        skill3_mastery: SkillMasteryTier,
        module_x: ModuleTier,
        module_y: ModuleTier,
        module_d: ModuleTier,
        module_a: ModuleTier,
    ) -> Self {
        Self {
            promotion,
            level,
            skill_level,
            skill1_mastery,
            skill2_mastery,
            skill3_mastery,
            module_x,
            module_y,
            module_d,
            module_a,
        }
    }

    /// Freshly recruited: Elite 0, level 1, skill level 1, nothing else.
    pub fn initial() -> Self {
        Self::new(
            PromotionTier::ELITE0,
            1,
            1,
            SkillMasteryTier::NONE,
            SkillMasteryTier::NONE,
            SkillMasteryTier::NONE,
            ModuleTier::NONE,
            ModuleTier::NONE,
            ModuleTier::NONE,
            ModuleTier::NONE,
        )
    }

    /// Fully trained 6-star operator: Elite 2 level 90, skill level 7,
    /// every mastery at M3 and every module at Stage 3.
    pub fn max_for_6_star() -> Self {
        Self::new(
            PromotionTier::ELITE2,
            90,
            7,
            SkillMasteryTier::M3,
            SkillMasteryTier::M3,
            SkillMasteryTier::M3,
            ModuleTier::STAGE3,
            ModuleTier::STAGE3,
            ModuleTier::STAGE3,
            ModuleTier::STAGE3,
        )
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn promotion(&self) -> PromotionTier {
        self.promotion
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[inline]
    pub fn skill_level(&self) -> i32 {
        self.skill_level
    }

    #[inline]
    pub fn skill1_mastery(&self) -> SkillMasteryTier {
        self.skill1_mastery
    }

    #[inline]
    pub fn skill2_mastery(&self) -> SkillMasteryTier {
        self.skill2_mastery
    }

    #[inline]
    pub fn skill3_mastery(&self) -> SkillMasteryTier {
        self.skill3_mastery
    }

    #[inline]
    pub fn module_x(&self) -> ModuleTier {
        self.module_x
    }

    #[inline]
    pub fn module_y(&self) -> ModuleTier {
        self.module_y
    }

    #[inline]
    pub fn module_d(&self) -> ModuleTier {
        self.module_d
    }

    #[inline]
    pub fn module_a(&self) -> ModuleTier {
        self.module_a
    }

    /// Mastery of the given skill slot.
    pub fn mastery(&self, slot: SkillSlot) -> SkillMasteryTier {
        match slot {
            SkillSlot::First => self.skill1_mastery,
            SkillSlot::Second => self.skill2_mastery,
            SkillSlot::Third => self.skill3_mastery,
        }
    }

    /// Stage of the given module kind.
    pub fn module(&self, kind: ModuleKind) -> ModuleTier {
        match kind {
            ModuleKind::X => self.module_x,
            ModuleKind::Y => self.module_y,
            ModuleKind::D => self.module_d,
            ModuleKind::A => self.module_a,
        }
    }

    /// True if any mastery is above None.
    pub fn has_any_mastery(&self) -> bool {
        SkillSlot::ALL.iter().any(|slot| self.mastery(*slot).is_set())
    }

    /// True if any module is above None.
    pub fn has_any_module(&self) -> bool {
        ModuleKind::ALL.iter().any(|kind| self.module(*kind).is_set())
    }

    // =========================================================================
    // Copy-with-change
    // =========================================================================

    /// Returns a copy with `promotion` replaced.
    #[must_use]
    pub fn with_promotion(self, promotion: PromotionTier) -> Self {
        Self { promotion, ..self }
    }

    /// Returns a copy with `level` replaced.
    #[must_use]
    pub fn with_level(self, level: i32) -> Self {
        Self { level, ..self }
    }

    /// Returns a copy with `skill_level` replaced.
    #[must_use]
    pub fn with_skill_level(self, skill_level: i32) -> Self {
        Self {
            skill_level,
            ..self
        }
    }

    /// Returns a copy with the mastery of `slot` replaced.
    #[must_use]
    pub fn with_mastery(self, slot: SkillSlot, tier: SkillMasteryTier) -> Self {
        match slot {
            SkillSlot::First => Self {
                skill1_mastery: tier,
                ..self
            },
            SkillSlot::Second => Self {
                skill2_mastery: tier,
                ..self
            },
            SkillSlot::Third => Self {
                skill3_mastery: tier,
                ..self
            },
        }
    }

    /// Returns a copy with the stage of module `kind` replaced.
    #[must_use]
    pub fn with_module(self, kind: ModuleKind, tier: ModuleTier) -> Self {
        match kind {
            ModuleKind::X => Self {
                module_x: tier,
                ..self
            },
            ModuleKind::Y => Self {
                module_y: tier,
                ..self
            },
            ModuleKind::D => Self {
                module_d: tier,
                ..self
            },
            ModuleKind::A => Self {
                module_a: tier,
                ..self
            },
        }
    }
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProgressionState {
        ProgressionState::new(
            PromotionTier::ELITE2,
            55,
            7,
            SkillMasteryTier::M1,
            SkillMasteryTier::M2,
            SkillMasteryTier::NONE,
            ModuleTier::STAGE1,
            ModuleTier::NONE,
            ModuleTier::STAGE2,
            ModuleTier::NONE,
        )
    }

    mod presets {
        use super::*;

        #[test]
        fn initial_is_minimum_everywhere() {
            let state = ProgressionState::initial();
            assert_eq!(state.promotion(), PromotionTier::ELITE0);
            assert_eq!(state.level(), 1);
            assert_eq!(state.skill_level(), 1);
            assert!(!state.has_any_mastery());
            assert!(!state.has_any_module());
            assert_eq!(ProgressionState::default(), state);
        }

        #[test]
        fn max_for_6_star_is_maximum_everywhere() {
            let state = ProgressionState::max_for_6_star();
            assert_eq!(state.promotion(), PromotionTier::ELITE2);
            assert_eq!(state.level(), 90);
            assert_eq!(state.skill_level(), 7);
            for slot in SkillSlot::ALL {
                assert_eq!(state.mastery(slot), SkillMasteryTier::M3);
            }
            for kind in ModuleKind::ALL {
                assert_eq!(state.module(kind), ModuleTier::STAGE3);
            }
        }
    }

    mod copy_with_change {
        use super::*;

        #[test]
        fn with_level_changes_only_level() {
            let original = sample();
            let changed = original.with_level(70);

            assert_eq!(changed.level(), 70);
            assert_eq!(original.level(), 55);
            assert_eq!(changed.with_level(55), original);
            assert_eq!(changed.promotion(), original.promotion());
            assert_eq!(changed.skill_level(), original.skill_level());
            for slot in SkillSlot::ALL {
                assert_eq!(changed.mastery(slot), original.mastery(slot));
            }
            for kind in ModuleKind::ALL {
                assert_eq!(changed.module(kind), original.module(kind));
            }
        }

        #[test]
        fn with_promotion_and_skill_level_preserve_the_rest() {
            let original = sample();
            let changed = original
                .with_promotion(PromotionTier::ELITE1)
                .with_skill_level(4);

            assert_eq!(changed.promotion(), PromotionTier::ELITE1);
            assert_eq!(changed.skill_level(), 4);
            assert_eq!(
                changed
                    .with_promotion(PromotionTier::ELITE2)
                    .with_skill_level(7),
                original
            );
        }

        #[test]
        fn with_mastery_targets_one_slot() {
            let changed = sample().with_mastery(SkillSlot::Third, SkillMasteryTier::M3);
            assert_eq!(changed.skill1_mastery(), SkillMasteryTier::M1);
            assert_eq!(changed.skill2_mastery(), SkillMasteryTier::M2);
            assert_eq!(changed.skill3_mastery(), SkillMasteryTier::M3);
        }

        #[test]
        fn with_module_targets_one_kind() {
            let changed = sample().with_module(ModuleKind::A, ModuleTier::STAGE3);
            assert_eq!(changed.module_x(), ModuleTier::STAGE1);
            assert_eq!(changed.module_y(), ModuleTier::NONE);
            assert_eq!(changed.module_d(), ModuleTier::STAGE2);
            assert_eq!(changed.module_a(), ModuleTier::STAGE3);
        }
    }

    #[test]
    fn equality_covers_every_field() {
        let base = sample();
        assert_eq!(base, sample());
        assert_ne!(base, base.with_module(ModuleKind::Y, ModuleTier::STAGE1));
        assert_ne!(base, base.with_mastery(SkillSlot::First, SkillMasteryTier::NONE));
    }

    #[test]
    fn serde_uses_camel_case_and_rejects_bad_tiers() {
        let json = serde_json::to_value(ProgressionState::initial()).unwrap();
        assert_eq!(json["skillLevel"], 1);
        assert_eq!(json["skill1Mastery"], 0);
        assert_eq!(json["moduleX"], 0);

        let mut bad = json.clone();
        bad["moduleA"] = serde_json::json!(4);
        assert!(serde_json::from_value::<ProgressionState>(bad).is_err());

        let back: ProgressionState = serde_json::from_value(json).unwrap();
        assert_eq!(back, ProgressionState::initial());
    }
}
