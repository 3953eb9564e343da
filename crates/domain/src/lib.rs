//! Operator progression domain.
//!
//! Pure types and rules: no I/O, no logging. Loading master and user data
//! lives in `opsmgr-shared`; the runner binary wires everything together.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use aggregates::Operator;
pub use entities::{Material, MaterialCategory, MaterialPlan};
pub use error::DomainError;
pub use ids::MaterialPlanId;
pub use validation::{
    ProgressionRule, ProgressionValidator, ValidationContext, ValidationContextBuilder,
    ValidationReport, Violation,
};
pub use value_objects::{
    parse_server_date, DateRange, LocalizedName, MaterialInventory, MaterialRequirement,
    ModuleKind, ModuleTier, OperatorClass, OperatorCode, ProgressionState, PromotionTier,
    RarityTier, Server, ServerDate, Sex, SkillMasteryTier, SkillSlot,
};
