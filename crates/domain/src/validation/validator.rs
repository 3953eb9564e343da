//! Progression validator - the fixed, ordered rule set for progression states.
//!
//! Every rule is an independent predicate over a [`ValidationContext`] paired
//! with a message builder. All rules run on every call; a failing rule never
//! prevents later ones from being evaluated. Rules that depend on an earlier
//! rule's precondition (the level ceiling needs a legal promotion) treat the
//! broken precondition as "satisfied here" and leave the report to that
//! earlier rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationContext;
use crate::error::DomainError;
use crate::value_objects::{ModuleKind, SkillSlot};

/// Lowest skill level an operator can have.
pub const MIN_SKILL_LEVEL: i32 = 1;
/// Highest skill level before mastery.
pub const MAX_SKILL_LEVEL: i32 = 7;
/// Lowest operator level.
pub const MIN_LEVEL: i32 = 1;

/// Identifies one progression rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionRule {
    /// Promotion may not exceed the rarity's ceiling.
    PromotionCeiling,
    /// Level may not exceed the cap for rarity and promotion.
    LevelCeiling,
    /// Level is at least 1.
    LevelFloor,
    /// Skill level may not exceed the promotion's cap.
    SkillLevelCeiling,
    /// Skill level lies within 1-7.
    SkillLevelBounds,
    /// Mastery requires Elite 2.
    MasteryGate,
    /// No mastery on skills the operator does not have.
    SkillCountGate,
    /// Modules require Elite 2.
    ModuleGate,
    /// No stage on modules the operator does not have.
    ModuleOwnership,
    /// Modules require the rarity-specific Elite 2 level.
    ModuleLevelRequirement,
}

impl ProgressionRule {
    /// All rules in evaluation order.
    pub const ALL: [ProgressionRule; 10] = [
        Self::PromotionCeiling,
        Self::LevelCeiling,
        Self::LevelFloor,
        Self::SkillLevelCeiling,
        Self::SkillLevelBounds,
        Self::MasteryGate,
        Self::SkillCountGate,
        Self::ModuleGate,
        Self::ModuleOwnership,
        Self::ModuleLevelRequirement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PromotionCeiling => "promotion_ceiling",
            Self::LevelCeiling => "level_ceiling",
            Self::LevelFloor => "level_floor",
            Self::SkillLevelCeiling => "skill_level_ceiling",
            Self::SkillLevelBounds => "skill_level_bounds",
            Self::MasteryGate => "mastery_gate",
            Self::SkillCountGate => "skill_count_gate",
            Self::ModuleGate => "module_gate",
            Self::ModuleOwnership => "module_ownership",
            Self::ModuleLevelRequirement => "module_level_requirement",
        }
    }
}

impl fmt::Display for ProgressionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One failed rule with a message carrying the offending values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    rule: ProgressionRule,
    message: String,
}

impl Violation {
    pub fn rule(&self) -> ProgressionRule {
        self.rule
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of validating one progression state. Empty means valid.
///
/// This is an ordinary result, not an error: a non-empty report means "reject
/// this state", not that anything went wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in rule order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Rules that failed, in rule order.
    pub fn failed_rules(&self) -> Vec<ProgressionRule> {
        self.violations.iter().map(Violation::rule).collect()
    }

    pub fn has_violation(&self, rule: ProgressionRule) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    /// Messages in rule order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(Violation::message).collect()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.violations.into_iter().map(|v| v.message).collect()
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

// ============================================================================
// Rules
// ============================================================================

struct Rule {
    kind: ProgressionRule,
    holds: fn(&ValidationContext) -> bool,
    message: fn(&ValidationContext) -> String,
}

const RULES: [Rule; 10] = [
    Rule {
        kind: ProgressionRule::PromotionCeiling,
        holds: |ctx| ctx.state().promotion() <= ctx.rarity().max_promotion(),
        message: |ctx| {
            format!(
                "Promotion {} exceeds maximum {} for rarity {}",
                ctx.state().promotion(),
                ctx.rarity().max_promotion(),
                ctx.rarity()
            )
        },
    },
    Rule {
        kind: ProgressionRule::LevelCeiling,
        holds: |ctx| match level_cap(ctx) {
            None => true,
            Some(Ok(cap)) => ctx.state().level() <= cap,
            Some(Err(_)) => false,
        },
        message: |ctx| match level_cap(ctx) {
            Some(Ok(cap)) => format!(
                "Level {} exceeds maximum {} for rarity {} at promotion {}",
                ctx.state().level(),
                cap,
                ctx.rarity(),
                ctx.state().promotion()
            ),
            Some(Err(err)) => format!("Level {} cannot be checked: {}", ctx.state().level(), err),
            None => "Level validation skipped due to invalid promotion".to_string(),
        },
    },
    Rule {
        kind: ProgressionRule::LevelFloor,
        holds: |ctx| ctx.state().level() >= MIN_LEVEL,
        message: |ctx| {
            format!(
                "Level {} must be at least {}",
                ctx.state().level(),
                MIN_LEVEL
            )
        },
    },
    Rule {
        kind: ProgressionRule::SkillLevelCeiling,
        holds: |ctx| ctx.state().skill_level() <= ctx.state().promotion().max_skill_level(),
        message: |ctx| {
            format!(
                "Skill level {} exceeds maximum {} for promotion {}",
                ctx.state().skill_level(),
                ctx.state().promotion().max_skill_level(),
                ctx.state().promotion()
            )
        },
    },
    Rule {
        kind: ProgressionRule::SkillLevelBounds,
        holds: |ctx| (MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&ctx.state().skill_level()),
        message: |ctx| {
            format!(
                "Skill level {} must be between {} and {}",
                ctx.state().skill_level(),
                MIN_SKILL_LEVEL,
                MAX_SKILL_LEVEL
            )
        },
    },
    Rule {
        kind: ProgressionRule::MasteryGate,
        holds: |ctx| ctx.state().promotion().can_mastery() || !ctx.state().has_any_mastery(),
        message: |ctx| {
            format!(
                "Skill mastery can only be set at Elite 2, but promotion is {} ({})",
                ctx.state().promotion(),
                describe_masteries(ctx, &SkillSlot::ALL)
            )
        },
    },
    Rule {
        kind: ProgressionRule::SkillCountGate,
        holds: |ctx| excess_mastery_slots(ctx).is_empty(),
        message: |ctx| {
            format!(
                "Operator has {} skill(s), mastery must be 0 beyond that ({})",
                ctx.skill_count(),
                describe_masteries(ctx, &excess_mastery_slots(ctx))
            )
        },
    },
    Rule {
        kind: ProgressionRule::ModuleGate,
        holds: |ctx| ctx.state().promotion().can_module() || !ctx.state().has_any_module(),
        message: |ctx| {
            format!(
                "Modules can only be set at Elite 2, but promotion is {} ({})",
                ctx.state().promotion(),
                describe_modules(ctx, &ModuleKind::ALL)
            )
        },
    },
    Rule {
        kind: ProgressionRule::ModuleOwnership,
        holds: |ctx| unowned_modules_in_use(ctx).is_empty(),
        message: |ctx| {
            let kinds = unowned_modules_in_use(ctx);
            let noun = if kinds.len() == 1 { "module" } else { "modules" };
            format!(
                "Operator does not have {} {}",
                noun,
                describe_modules(ctx, &kinds)
            )
        },
    },
    Rule {
        kind: ProgressionRule::ModuleLevelRequirement,
        holds: |ctx| {
            let state = ctx.state();
            if !state.promotion().can_module() || !state.has_any_module() {
                return true;
            }
            ctx.rarity()
                .module_level_requirement()
                .is_some_and(|required| state.level() >= required)
        },
        message: |ctx| match ctx.rarity().module_level_requirement() {
            Some(required) => format!(
                "Modules require Elite 2 level {} or higher for rarity {}, but level is {}",
                required,
                ctx.rarity(),
                ctx.state().level()
            ),
            None => format!("Modules are not available for rarity {}", ctx.rarity()),
        },
    },
];

/// Level cap for the context, or `None` when the promotion already breaks the
/// rarity ceiling (reported by the promotion rule instead).
fn level_cap(ctx: &ValidationContext) -> Option<Result<i32, DomainError>> {
    let promotion = ctx.state().promotion();
    if promotion > ctx.rarity().max_promotion() {
        return None;
    }
    Some(ctx.rarity().max_level(promotion))
}

/// Skill slots beyond the operator's skill count that carry a mastery.
fn excess_mastery_slots(ctx: &ValidationContext) -> Vec<SkillSlot> {
    SkillSlot::ALL
        .into_iter()
        .filter(|slot| slot.number() > ctx.skill_count() && ctx.state().mastery(*slot).is_set())
        .collect()
}

/// Module kinds with a stage set that the operator cannot use.
fn unowned_modules_in_use(ctx: &ValidationContext) -> Vec<ModuleKind> {
    ModuleKind::ALL
        .into_iter()
        .filter(|kind| !ctx.has_module(*kind) && ctx.state().module(*kind).is_set())
        .collect()
}

fn describe_masteries(ctx: &ValidationContext, slots: &[SkillSlot]) -> String {
    slots
        .iter()
        .filter(|slot| ctx.state().mastery(**slot).is_set())
        .map(|slot| format!("skill {}: M{}", slot.number(), ctx.state().mastery(*slot)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_modules(ctx: &ValidationContext, kinds: &[ModuleKind]) -> String {
    kinds
        .iter()
        .filter(|kind| ctx.state().module(**kind).is_set())
        .map(|kind| format!("{} stage {}", kind, ctx.state().module(*kind)))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Validator
// ============================================================================

/// Runs every progression rule against a context and collects the failures.
///
/// The validator is stateless; one instance can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use opsmgr_domain::validation::{ProgressionValidator, ValidationContext};
/// use opsmgr_domain::value_objects::{ProgressionState, RarityTier};
///
/// let ctx = ValidationContext::new(
///     ProgressionState::initial().with_level(45),
///     RarityTier::new(3).unwrap(),
///     2,
///     [],
/// )
/// .unwrap();
///
/// let report = ProgressionValidator::new().validate(&ctx);
/// assert_eq!(report.messages(), ["Level 45 exceeds maximum 40 for rarity 3 at promotion 0"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionValidator;

impl ProgressionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> [ProgressionRule; 10] {
        ProgressionRule::ALL
    }

    /// Evaluate every rule and return all violations in rule order.
    pub fn validate(&self, ctx: &ValidationContext) -> ValidationReport {
        let violations = RULES
            .iter()
            .filter(|rule| !(rule.holds)(ctx))
            .map(|rule| Violation {
                rule: rule.kind,
                message: (rule.message)(ctx),
            })
            .collect();
        ValidationReport { violations }
    }
}
