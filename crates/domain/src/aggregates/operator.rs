//! Operator aggregate - a collectible character with static master data and
//! the player's mutable progression.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `OperatorCode`, `RarityTier` and the tier types carry their own ranges
//! - **Valid by construction**: `new()` range-checks the skill count
//! - **Builder pattern**: Fluent API for optional master data
//! - **Narrow setters**: each `update_*` checks only its own argument; whether a
//!   progression state is legal for this operator is a separate question,
//!   answered by building a [`ValidationContext`] and running the validator

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{check_range, DomainError};
use crate::validation::{ProgressionValidator, ValidationContext, ValidationReport};
use crate::value_objects::{
    DateRange, LocalizedName, ModuleKind, OperatorClass, OperatorCode, ProgressionState,
    PromotionTier, RarityTier, Server, ServerDate, Sex,
};

/// A collectible operator and the player's progress on it.
///
/// # Invariants
///
/// - `skill_count` is within `[1, 3]`
/// - `potential` is within `[0, 6]` (0 = not owned)
/// - `trust` is within `[0, 200]`
///
/// # Example
///
/// ```
/// use opsmgr_domain::aggregates::Operator;
/// use opsmgr_domain::value_objects::{
///     LocalizedName, OperatorClass, OperatorCode, ProgressionState, RarityTier,
/// };
///
/// let mut amiya = Operator::new(
///     OperatorCode::new("R001").unwrap(),
///     LocalizedName::new("アーミヤ", "Amiya", "阿米娅"),
///     RarityTier::new(5).unwrap(),
///     OperatorClass::Caster,
///     3,
/// )
/// .unwrap();
///
/// assert!(amiya.is_unowned());
/// amiya.update_potential(1).unwrap();
/// assert!(!amiya.is_unowned());
/// assert!(amiya.is_completed());
///
/// amiya.update_target_state(ProgressionState::initial().with_level(50));
/// assert!(!amiya.is_completed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    // Identity
    code: OperatorCode,

    // Master data
    name: LocalizedName,
    rarity: RarityTier,
    class: OperatorClass,
    faction: String,
    race: String,
    tags: Vec<String>,
    skill_count: u8,
    available_modules: BTreeSet<ModuleKind>,
    add_date: ServerDate,
    sex: Sex,
    place: i32,
    page: i32,
    /// Paradox Simulation release date per stage
    paradox_dates: BTreeMap<String, ServerDate>,
    /// Release date per module kind
    module_add_dates: BTreeMap<String, ServerDate>,
    /// Codes of alternate forms of the same character
    alternates: Vec<String>,

    // User data
    current_state: ProgressionState,
    target_state: ProgressionState,
    potential: u8,
    trust: u8,
    paradox_cleared: bool,
    group: Option<String>,
    priority: i32,
    memo: Option<String>,
}

impl Operator {
    pub const MAX_POTENTIAL: i32 = 6;
    pub const MAX_TRUST: i32 = 200;
    pub const MIN_SKILLS: i32 = 1;
    pub const MAX_SKILLS: i32 = 3;

    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create an unowned operator at its initial progression.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RangeViolation` if `skill_count` is outside `[1, 3]`.
    pub fn new(
        code: OperatorCode,
        name: LocalizedName,
        rarity: RarityTier,
        class: OperatorClass,
        skill_count: i32,
    ) -> Result<Self, DomainError> {
        let skill_count =
            check_range("SkillCount", skill_count, Self::MIN_SKILLS, Self::MAX_SKILLS)?;
        Ok(Self {
            code,
            name,
            rarity,
            class,
            faction: String::new(),
            race: String::new(),
            tags: Vec::new(),
            skill_count: skill_count as u8,
            available_modules: BTreeSet::new(),
            add_date: ServerDate::default(),
            sex: Sex::Unknown,
            place: 0,
            page: 0,
            paradox_dates: BTreeMap::new(),
            module_add_dates: BTreeMap::new(),
            alternates: Vec::new(),
            current_state: ProgressionState::initial(),
            target_state: ProgressionState::initial(),
            potential: 0,
            trust: 0,
            paradox_cleared: false,
            group: None,
            priority: 0,
            memo: None,
        })
    }

    // =========================================================================
    // Builder Methods (master data)
    // =========================================================================

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = faction.into();
        self
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_available_modules(mut self, modules: impl IntoIterator<Item = ModuleKind>) -> Self {
        self.available_modules = modules.into_iter().collect();
        self
    }

    pub fn with_add_date(mut self, add_date: ServerDate) -> Self {
        self.add_date = add_date;
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_place(mut self, place: i32) -> Self {
        self.place = place;
        self
    }

    pub fn with_page(mut self, page: i32) -> Self {
        self.page = page;
        self
    }

    pub fn with_paradox_dates(mut self, dates: BTreeMap<String, ServerDate>) -> Self {
        self.paradox_dates = dates;
        self
    }

    pub fn with_module_add_dates(mut self, dates: BTreeMap<String, ServerDate>) -> Self {
        self.module_add_dates = dates;
        self
    }

    pub fn with_alternates(mut self, alternates: Vec<String>) -> Self {
        self.alternates = alternates;
        self
    }

    // =========================================================================
    // Master Data Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn code(&self) -> &OperatorCode {
        &self.code
    }

    #[inline]
    pub fn name(&self) -> &LocalizedName {
        &self.name
    }

    #[inline]
    pub fn rarity(&self) -> RarityTier {
        self.rarity
    }

    #[inline]
    pub fn class(&self) -> OperatorClass {
        self.class
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[inline]
    pub fn skill_count(&self) -> u8 {
        self.skill_count
    }

    pub fn available_modules(&self) -> &BTreeSet<ModuleKind> {
        &self.available_modules
    }

    pub fn add_date(&self) -> &ServerDate {
        &self.add_date
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn place(&self) -> i32 {
        self.place
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn paradox_dates(&self) -> &BTreeMap<String, ServerDate> {
        &self.paradox_dates
    }

    pub fn module_add_dates(&self) -> &BTreeMap<String, ServerDate> {
        &self.module_add_dates
    }

    pub fn alternates(&self) -> &[String] {
        &self.alternates
    }

    // =========================================================================
    // User Data Accessors
    // =========================================================================

    #[inline]
    pub fn current_state(&self) -> &ProgressionState {
        &self.current_state
    }

    #[inline]
    pub fn target_state(&self) -> &ProgressionState {
        &self.target_state
    }

    #[inline]
    pub fn potential(&self) -> u8 {
        self.potential
    }

    #[inline]
    pub fn trust(&self) -> u8 {
        self.trust
    }

    pub fn paradox_cleared(&self) -> bool {
        self.paradox_cleared
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Replace the current progression. Not validated against this operator.
    pub fn update_current_state(&mut self, state: ProgressionState) {
        self.current_state = state;
    }

    /// Replace the target progression. Not validated against this operator.
    pub fn update_target_state(&mut self, state: ProgressionState) {
        self.target_state = state;
    }

    /// # Errors
    ///
    /// Returns `DomainError::RangeViolation` if `potential` is outside `[0, 6]`;
    /// the stored value is left unchanged.
    pub fn update_potential(&mut self, potential: i32) -> Result<(), DomainError> {
        let potential = check_range("Potential", potential, 0, Self::MAX_POTENTIAL)?;
        self.potential = potential as u8;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DomainError::RangeViolation` if `trust` is outside `[0, 200]`;
    /// the stored value is left unchanged.
    pub fn update_trust(&mut self, trust: i32) -> Result<(), DomainError> {
        let trust = check_range("Trust", trust, 0, Self::MAX_TRUST)?;
        self.trust = trust as u8;
        Ok(())
    }

    pub fn update_paradox_cleared(&mut self, cleared: bool) {
        self.paradox_cleared = cleared;
    }

    pub fn update_group(&mut self, group: Option<String>) {
        self.group = group;
    }

    pub fn update_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    pub fn update_memo(&mut self, memo: Option<String>) {
        self.memo = memo;
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// Training is done when the current state equals the target state.
    pub fn is_completed(&self) -> bool {
        self.current_state == self.target_state
    }

    /// Potential 0 means the player does not own this operator.
    pub fn is_unowned(&self) -> bool {
        self.potential == 0
    }

    /// Whether `state` has modules unlocked for an operator of `rarity`:
    /// Elite 2 and at least the rarity's module level (6★ 60, 5★ 50, 4★ 40).
    /// Lower rarities never unlock modules.
    pub fn can_use_module(rarity: RarityTier, state: &ProgressionState) -> bool {
        if state.promotion() < PromotionTier::ELITE2 {
            return false;
        }
        rarity
            .module_level_requirement()
            .is_some_and(|required| state.level() >= required)
    }

    /// [`can_use_module`](Self::can_use_module) for this operator's current state.
    pub fn has_modules_unlocked(&self) -> bool {
        Self::can_use_module(self.rarity, &self.current_state)
    }

    /// True if the release date, any Paradox Simulation date or any module
    /// release date on `server` lies within `[start, end]`. Dates that do not
    /// parse for that server are ignored.
    pub fn has_date_in_range(&self, server: Server, start: NaiveDate, end: NaiveDate) -> bool {
        std::iter::once(&self.add_date)
            .chain(self.paradox_dates.values())
            .chain(self.module_add_dates.values())
            .any(|date| date.is_in_range(server, start, end))
    }

    pub fn has_date_in(&self, range: &DateRange) -> bool {
        self.has_date_in_range(range.server(), range.start(), range.end())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Context for judging `state` against this operator's attributes.
    pub fn validation_context(&self, state: ProgressionState) -> ValidationContext {
        ValidationContext::for_operator(self, state)
    }

    /// Run the progression rules on the current state.
    pub fn validate_current(&self) -> ValidationReport {
        ProgressionValidator::new().validate(&self.validation_context(self.current_state))
    }

    /// Run the progression rules on the target state.
    pub fn validate_target(&self) -> ValidationReport {
        ProgressionValidator::new().validate(&self.validation_context(self.target_state))
    }
}

// ============================================================================
// Tests
// ============================================================================
