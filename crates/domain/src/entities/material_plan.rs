//! MaterialPlan entity - materials the player expects to obtain later
//! (event shops, monthly cards), used to simulate future inventories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::ids::MaterialPlanId;
use crate::value_objects::MaterialRequirement;

/// A named, switchable list of planned material income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPlan {
    id: MaterialPlanId,
    name: String,
    is_enabled: bool,
    /// Material ID to planned amount; never holds a zero amount
    planned_materials: BTreeMap<String, u32>,
    created_at: DateTime<Utc>,
}

impl MaterialPlan {
    /// Start an empty, enabled plan.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `name` is blank.
    pub fn create(name: impl Into<String>, now: DateTime<Utc>) -> Result<Self, DomainError> {
        Self::from_parts(MaterialPlanId::new(), name, true, BTreeMap::new(), now)
    }

    /// Reconstruct a plan from stored parts. Zero amounts are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `name` is blank.
    pub fn from_parts(
        id: MaterialPlanId,
        name: impl Into<String>,
        is_enabled: bool,
        planned_materials: BTreeMap<String, u32>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let mut planned_materials = planned_materials;
        planned_materials.retain(|_, amount| *amount > 0);
        Ok(Self {
            id,
            name: non_blank_name(name.into())?,
            is_enabled,
            planned_materials,
            created_at,
        })
    }

    pub fn with_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    // Read accessors

    pub fn id(&self) -> MaterialPlanId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn planned_materials(&self) -> &BTreeMap<String, u32> {
        &self.planned_materials
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Planned amount of `material_id`, 0 if absent.
    pub fn material_amount(&self, material_id: &str) -> u32 {
        self.planned_materials.get(material_id).copied().unwrap_or(0)
    }

    /// The plan's materials as a requirement, e.g. to add onto an inventory forecast.
    pub fn as_requirement(&self) -> MaterialRequirement {
        MaterialRequirement::new(self.planned_materials.clone())
    }

    // Mutation methods

    pub fn enable(&mut self) {
        self.is_enabled = true;
    }

    pub fn disable(&mut self) {
        self.is_enabled = false;
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `name` is blank; the name is left unchanged.
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name = non_blank_name(name.into())?;
        Ok(())
    }

    /// Set the planned amount of a material. An amount of 0 removes the entry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `material_id` is blank.
    pub fn set_material(
        &mut self,
        material_id: impl Into<String>,
        amount: u32,
    ) -> Result<(), DomainError> {
        let material_id = material_id.into();
        if material_id.trim().is_empty() {
            return Err(DomainError::validation("Material ID cannot be empty"));
        }
        if amount == 0 {
            self.planned_materials.remove(&material_id);
        } else {
            self.planned_materials.insert(material_id, amount);
        }
        Ok(())
    }

    /// Returns whether the material was planned.
    pub fn remove_material(&mut self, material_id: &str) -> bool {
        self.planned_materials.remove(material_id).is_some()
    }

    pub fn clear_materials(&mut self) {
        self.planned_materials.clear();
    }
}

fn non_blank_name(name: String) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("Plan name cannot be empty"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn create_test_plan() -> MaterialPlan {
        MaterialPlan::create("Summer event", fixed_time()).unwrap()
    }

    #[test]
    fn create_starts_enabled_and_empty() {
        let plan = create_test_plan();
        assert_eq!(plan.name(), "Summer event");
        assert!(plan.is_enabled());
        assert!(plan.planned_materials().is_empty());
        assert_eq!(plan.created_at(), fixed_time());
    }

    #[test]
    fn create_rejects_blank_name() {
        assert!(MaterialPlan::create("   ", fixed_time()).is_err());
    }

    #[test]
    fn enable_and_disable() {
        let mut plan = create_test_plan().with_enabled(false);
        assert!(!plan.is_enabled());
        plan.enable();
        assert!(plan.is_enabled());
        plan.disable();
        assert!(!plan.is_enabled());
    }

    mod materials {
        use super::*;

        #[test]
        fn set_material_inserts_and_overwrites() {
            let mut plan = create_test_plan();
            plan.set_material("30012", 10).unwrap();
            plan.set_material("30012", 25).unwrap();
            assert_eq!(plan.material_amount("30012"), 25);
            assert_eq!(plan.material_amount("30013"), 0);
        }

        #[test]
        fn zero_amount_removes_entry() {
            let mut plan = create_test_plan();
            plan.set_material("30012", 10).unwrap();
            plan.set_material("30012", 0).unwrap();
            assert!(plan.planned_materials().is_empty());
        }

        #[test]
        fn blank_material_id_is_rejected() {
            let mut plan = create_test_plan();
            assert!(plan.set_material("", 5).is_err());
            assert!(plan.planned_materials().is_empty());
        }

        #[test]
        fn remove_and_clear() {
            let mut plan = create_test_plan();
            plan.set_material("a", 1).unwrap();
            plan.set_material("b", 2).unwrap();

            assert!(plan.remove_material("a"));
            assert!(!plan.remove_material("a"));
            assert_eq!(plan.planned_materials().len(), 1);

            plan.clear_materials();
            assert!(plan.planned_materials().is_empty());
        }

        #[test]
        fn as_requirement_feeds_shortage_calculation() {
            let mut plan = create_test_plan();
            plan.set_material("30012", 5).unwrap();
            let inventory = BTreeMap::from([("30012".to_string(), 2)]);

            let shortage = plan.as_requirement().calculate_shortage(&inventory);
            assert_eq!(shortage.required_amount("30012"), 3);
        }
    }

    #[test]
    fn from_parts_drops_zero_amounts() {
        let plan = MaterialPlan::from_parts(
            MaterialPlanId::new(),
            "Stored",
            false,
            BTreeMap::from([("a".to_string(), 0), ("b".to_string(), 4)]),
            fixed_time(),
        )
        .unwrap();
        assert_eq!(plan.planned_materials().len(), 1);
        assert!(!plan.is_enabled());
    }
}
