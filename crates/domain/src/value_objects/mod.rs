//! Value objects - Immutable objects defined by their attributes

mod material_requirement;
mod module_kind;
mod names;
mod operator_class;
mod progression_state;
mod promotion;
mod rarity;
mod server_date;
mod tier;

// Bounded progression tiers
pub use promotion::PromotionTier;
pub use rarity::RarityTier;
pub use tier::{ModuleTier, SkillMasteryTier};

pub use module_kind::ModuleKind;
pub use progression_state::{ProgressionState, SkillSlot};

pub use material_requirement::{MaterialInventory, MaterialRequirement};

// Operator master-data vocabulary
pub use names::{LocalizedName, OperatorCode};
pub use operator_class::{OperatorClass, Sex};
pub use server_date::{parse_server_date, DateRange, Server, ServerDate};
