//! Operator master records (`operators_master.json`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use opsmgr_domain::{LocalizedName, ServerDate};

/// Skill count assumed when a master record does not carry one.
pub const DEFAULT_SKILL_COUNT: i32 = 3;

/// Material costs per upgrade step, each step mapping material ID to amount.
pub type CostTable = Vec<BTreeMap<String, u32>>;

/// Static data for one operator as shipped in the master file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterOperatorEntry {
    pub code: String,
    pub name: LocalizedName,
    /// Star string such as `"☆☆☆☆☆☆"`; see [`rarity_value`](Self::rarity_value)
    pub rarity: String,
    pub sex: i32,
    pub class: i32,
    pub sub_class: i32,
    pub race: i32,
    pub faction: i32,
    pub place: i32,
    pub add_date: ServerDate,
    pub paradox: Option<BTreeMap<String, ServerDate>>,
    pub module_add_dates: Option<BTreeMap<String, ServerDate>>,
    #[serde(alias = "alternate", with = "alternates")]
    pub alternates: Option<Vec<String>>,
    pub page: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_count: Option<i32>,
    /// Promotion costs (E0 to E1, E1 to E2)
    pub elite: CostTable,
    /// Shared skill-level costs (1 to 7)
    pub skill: CostTable,
    /// Mastery costs per skill number
    pub skill_mastery: BTreeMap<String, CostTable>,
    /// Module stage costs per module kind (`"X"`, `"Y"`, ...)
    pub modules: BTreeMap<String, CostTable>,
}

impl MasterOperatorEntry {
    /// Rarity is the number of `☆` characters in the rarity string.
    pub fn rarity_value(&self) -> i32 {
        self.rarity.chars().filter(|c| *c == '☆').count() as i32
    }

    pub fn skill_count(&self) -> i32 {
        self.skill_count.unwrap_or(DEFAULT_SKILL_COUNT)
    }
}

/// Whole master file, keyed by operator code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorMasterData {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub operators: BTreeMap<String, MasterOperatorEntry>,
}

impl Default for OperatorMasterData {
    fn default() -> Self {
        Self {
            version: crate::DATA_VERSION.to_string(),
            last_updated: None,
            operators: BTreeMap::new(),
        }
    }
}

/// Older master files store a single alternate as a bare string; newer ones
/// use an array. Empty strings are dropped and an empty list reads as `None`.
/// Always written as an array, or `null` when there are none.
mod alternates {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        One(String),
        Many(Vec<Option<String>>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let codes: Vec<String> = match Option::<Raw>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(Raw::One(code)) => vec![code],
            Some(Raw::Many(codes)) => codes.into_iter().flatten().collect(),
        };
        let codes: Vec<String> = codes.into_iter().filter(|code| !code.is_empty()).collect();
        Ok((!codes.is_empty()).then_some(codes))
    }

    pub fn serialize<S>(value: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(codes) if !codes.is_empty() => serializer.collect_seq(codes),
            _ => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> MasterOperatorEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn rarity_counts_stars() {
        let entry = parse(json!({"code": "R001", "rarity": "☆☆☆☆☆"}));
        assert_eq!(entry.rarity_value(), 5);

        let entry = parse(json!({"code": "R002", "rarity": ""}));
        assert_eq!(entry.rarity_value(), 0);
    }

    #[test]
    fn skill_count_defaults_to_three() {
        assert_eq!(parse(json!({"code": "A"})).skill_count(), 3);
        assert_eq!(parse(json!({"code": "A", "skillCount": 2})).skill_count(), 2);
    }

    #[test]
    fn reads_full_record() {
        let entry = parse(json!({
            "code": "LM04",
            "name": {"ja": "シルバーアッシュ", "en": "SilverAsh", "ch": "银灰"},
            "rarity": "☆☆☆☆☆☆",
            "class": 1,
            "addDate": {"china": "2019/04/30", "global": "2020/01/16"},
            "moduleAddDates": {"X": {"china": "2021/09/17", "global": "2022/05/01"}},
            "elite": [{"3261": 5}, {"3213": 4}],
            "modules": {"X": [{"mod_unlock_token": 1}], "Y": []}
        }));
        assert_eq!(entry.name.en(), "SilverAsh");
        assert_eq!(entry.add_date.raw(opsmgr_domain::Server::Global), "2020/01/16");
        assert_eq!(entry.elite.len(), 2);
        assert_eq!(entry.elite[0]["3261"], 5);
        assert_eq!(entry.modules.keys().collect::<Vec<_>>(), ["X", "Y"]);
        assert!(entry.paradox.is_none());
        assert_eq!(entry.module_add_dates.map(|m| m.len()), Some(1));
    }

    mod alternates {
        use super::*;

        #[test]
        fn accepts_legacy_string() {
            let entry = parse(json!({"code": "R111", "alternates": "R112"}));
            assert_eq!(entry.alternates, Some(vec!["R112".to_string()]));

            let entry = parse(json!({"code": "R111", "alternate": "R112"}));
            assert_eq!(entry.alternates, Some(vec!["R112".to_string()]));
        }

        #[test]
        fn accepts_array_and_drops_empties() {
            let entry = parse(json!({"code": "R111", "alternates": ["R112", "", "R113"]}));
            assert_eq!(
                entry.alternates,
                Some(vec!["R112".to_string(), "R113".to_string()])
            );
        }

        #[test]
        fn empty_forms_read_as_none() {
            for value in [json!(null), json!(""), json!([])] {
                let entry = parse(json!({"code": "R111", "alternates": value}));
                assert_eq!(entry.alternates, None);
            }
            assert_eq!(parse(json!({"code": "R111"})).alternates, None);
        }

        #[test]
        fn always_writes_array_or_null() {
            let mut entry = parse(json!({"code": "R111", "alternates": "R112"}));
            let written = serde_json::to_value(&entry).unwrap();
            assert_eq!(written["alternates"], json!(["R112"]));

            entry.alternates = Some(Vec::new());
            let written = serde_json::to_value(&entry).unwrap();
            assert_eq!(written["alternates"], json!(null));
        }
    }
}
