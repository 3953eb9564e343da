//! Domain entities - Core business objects with identity

mod material;
mod material_plan;

pub use material::{Material, MaterialCategory};
pub use material_plan::MaterialPlan;
