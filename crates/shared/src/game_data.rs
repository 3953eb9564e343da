//! Lookup tables that turn numeric IDs in master records into display names.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsmgr_domain::LocalizedName;

/// Returned for any ID missing from its table.
pub const UNKNOWN_NAME: &str = "Unknown";

type NameTable = BTreeMap<String, LocalizedName>;

/// Name tables keyed by the stringified numeric ID used in master records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameDataMaster {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub sex: NameTable,
    pub class: NameTable,
    /// Sub-class tables per class name
    pub sub_class: BTreeMap<String, NameTable>,
    pub race: NameTable,
    pub faction: NameTable,
    pub place: NameTable,
}

impl Default for GameDataMaster {
    fn default() -> Self {
        Self {
            version: crate::DATA_VERSION.to_string(),
            last_updated: None,
            sex: NameTable::new(),
            class: NameTable::new(),
            sub_class: BTreeMap::new(),
            race: NameTable::new(),
            faction: NameTable::new(),
            place: NameTable::new(),
        }
    }
}

impl GameDataMaster {
    pub fn sex_name(&self, id: i32, language: &str) -> &str {
        lookup(&self.sex, id, language)
    }

    pub fn class_name(&self, id: i32, language: &str) -> &str {
        lookup(&self.class, id, language)
    }

    pub fn sub_class_name(&self, class_name: &str, id: i32, language: &str) -> &str {
        self.sub_class
            .get(class_name)
            .map_or(UNKNOWN_NAME, |table| lookup(table, id, language))
    }

    pub fn race_name(&self, id: i32, language: &str) -> &str {
        lookup(&self.race, id, language)
    }

    pub fn faction_name(&self, id: i32, language: &str) -> &str {
        lookup(&self.faction, id, language)
    }

    pub fn place_name(&self, id: i32, language: &str) -> &str {
        lookup(&self.place, id, language)
    }
}

fn lookup<'a>(table: &'a NameTable, id: i32, language: &str) -> &'a str {
    table
        .get(&id.to_string())
        .map_or(UNKNOWN_NAME, |name| name.get(language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game_data() -> GameDataMaster {
        serde_json::from_value(json!({
            "race": {"3": {"ja": "フェリーン", "en": "Feline", "ch": "菲林"}},
            "faction": {"0": {"ja": "ロドス", "en": "Rhodes Island", "ch": "罗德岛"}},
            "subClass": {
                "Guard": {"1": {"ja": "領主", "en": "Lord", "ch": "领主"}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn resolves_names_per_language() {
        let data = game_data();
        assert_eq!(data.race_name(3, "ja-JP"), "フェリーン");
        assert_eq!(data.race_name(3, "en"), "Feline");
        assert_eq!(data.race_name(3, "zh-CN"), "菲林");
        assert_eq!(data.faction_name(0, "fr"), "Rhodes Island");
    }

    #[test]
    fn missing_ids_are_unknown() {
        let data = game_data();
        assert_eq!(data.race_name(99, "en"), UNKNOWN_NAME);
        assert_eq!(data.place_name(0, "en"), UNKNOWN_NAME);
        assert_eq!(data.sex_name(0, "ja"), UNKNOWN_NAME);
        assert_eq!(data.class_name(1, "ja"), UNKNOWN_NAME);
    }

    #[test]
    fn sub_class_is_scoped_by_class() {
        let data = game_data();
        assert_eq!(data.sub_class_name("Guard", 1, "en"), "Lord");
        assert_eq!(data.sub_class_name("Caster", 1, "en"), UNKNOWN_NAME);
    }
}
