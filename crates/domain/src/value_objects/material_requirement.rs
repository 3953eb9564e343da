//! Material requirement value object - material ID to quantity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What the player currently owns, material ID to quantity.
pub type MaterialInventory = BTreeMap<String, u32>;

/// Quantities of materials needed for some piece of training.
///
/// Keys are unique material IDs. Equality ignores insertion order.
///
/// # Example
///
/// ```
/// use opsmgr_domain::value_objects::{MaterialInventory, MaterialRequirement};
///
/// let need = MaterialRequirement::from_iter([("A".to_string(), 5), ("B".to_string(), 2)]);
/// let owned = MaterialInventory::from([("A".to_string(), 3)]);
///
/// let short = need.calculate_shortage(&owned);
/// assert_eq!(short.required_amount("A"), 2);
/// assert_eq!(short.required_amount("B"), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialRequirement {
    materials: BTreeMap<String, u32>,
}

impl MaterialRequirement {
    pub fn new(materials: BTreeMap<String, u32>) -> Self {
        Self { materials }
    }

    /// A requirement with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// What is still missing after taking `inventory` into account.
    ///
    /// Only materials with a positive shortfall are kept; a material absent
    /// from the inventory counts as zero owned.
    pub fn calculate_shortage(&self, inventory: &MaterialInventory) -> Self {
        self.materials
            .iter()
            .filter_map(|(id, required)| {
                let owned = inventory.get(id).copied().unwrap_or(0);
                required
                    .checked_sub(owned)
                    .filter(|missing| *missing > 0)
                    .map(|missing| (id.clone(), missing))
            })
            .collect()
    }

    /// Merge with `other`, summing quantities of shared materials.
    #[must_use]
    pub fn add(&self, other: &MaterialRequirement) -> Self {
        let mut combined = self.materials.clone();
        for (id, amount) in &other.materials {
            combined
                .entry(id.clone())
                .and_modify(|existing| *existing = existing.saturating_add(*amount))
                .or_insert(*amount);
        }
        Self::new(combined)
    }

    /// Required quantity of one material (0 if not listed).
    pub fn required_amount(&self, material_id: &str) -> u32 {
        self.materials.get(material_id).copied().unwrap_or(0)
    }

    /// True when nothing is listed or every listed quantity is zero.
    pub fn is_empty(&self) -> bool {
        self.materials.values().all(|amount| *amount == 0)
    }

    /// Number of listed materials, zero-quantity entries included.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.materials.iter().map(|(id, amount)| (id.as_str(), *amount))
    }

    pub fn as_map(&self) -> &BTreeMap<String, u32> {
        &self.materials
    }
}

impl FromIterator<(String, u32)> for MaterialRequirement {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(entries: &[(&str, u32)]) -> MaterialRequirement {
        entries
            .iter()
            .map(|(id, amount)| (id.to_string(), *amount))
            .collect()
    }

    fn inventory(entries: &[(&str, u32)]) -> MaterialInventory {
        entries
            .iter()
            .map(|(id, amount)| (id.to_string(), *amount))
            .collect()
    }

    mod shortage {
        use super::*;

        #[test]
        fn missing_inventory_entries_count_as_zero() {
            let shortage = req(&[("A", 5), ("B", 2)]).calculate_shortage(&inventory(&[("A", 3)]));
            assert_eq!(shortage, req(&[("A", 2), ("B", 2)]));
        }

        #[test]
        fn covered_and_overstocked_materials_are_omitted() {
            let shortage = req(&[("A", 5), ("B", 2), ("C", 1)])
                .calculate_shortage(&inventory(&[("A", 5), ("B", 10)]));
            assert_eq!(shortage, req(&[("C", 1)]));
        }

        #[test]
        fn zero_requirements_never_report_shortage() {
            let shortage = req(&[("A", 0)]).calculate_shortage(&inventory(&[]));
            assert_eq!(shortage.len(), 0);
        }
    }

    mod add {
        use super::*;

        #[test]
        fn sums_shared_and_keeps_disjoint() {
            let total = req(&[("A", 5)]).add(&req(&[("A", 3), ("B", 1)]));
            assert_eq!(total, req(&[("A", 8), ("B", 1)]));
        }

        #[test]
        fn adding_empty_is_identity() {
            let base = req(&[("A", 5), ("B", 1)]);
            assert_eq!(base.add(&MaterialRequirement::empty()), base);
            assert_eq!(MaterialRequirement::empty().add(&base), base);
        }
    }

    #[test]
    fn is_empty_treats_all_zero_as_empty() {
        assert!(MaterialRequirement::empty().is_empty());
        assert!(req(&[("A", 0), ("B", 0)]).is_empty());
        assert!(!req(&[("A", 0), ("B", 1)]).is_empty());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        assert_eq!(req(&[("A", 1), ("B", 2)]), req(&[("B", 2), ("A", 1)]));
    }

    #[test]
    fn required_amount_defaults_to_zero() {
        let base = req(&[("A", 4)]);
        assert_eq!(base.required_amount("A"), 4);
        assert_eq!(base.required_amount("Z"), 0);
    }

    #[test]
    fn serializes_as_plain_map() {
        let json = serde_json::to_string(&req(&[("B", 2), ("A", 1)])).unwrap();
        assert_eq!(json, r#"{"A":1,"B":2}"#);
    }
}
