//! Runner configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use opsmgr_domain::{parse_server_date, DateRange, Server};
use opsmgr_shared::DEFAULT_LANGUAGE;

/// Runner configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Operator master data file
    pub master_path: PathBuf,
    /// Player save file; a missing file means an empty roster
    pub user_path: PathBuf,
    /// Optional name tables for race/faction lookups
    pub game_data_path: Option<PathBuf>,
    /// Language code for looked-up names
    pub language: String,
    /// Server whose release dates the date filter uses
    pub server: Server,
    /// Inclusive lower bound of the release-date filter
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound of the release-date filter
    pub date_to: Option<NaiveDate>,
}

impl RunnerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            master_path: var("OPSMGR_MASTER_PATH")
                .unwrap_or_else(|| "./data/operators_master.json".to_string())
                .into(),
            user_path: var("OPSMGR_USER_PATH")
                .unwrap_or_else(|| "./data/operators_user.json".to_string())
                .into(),
            game_data_path: var("OPSMGR_GAME_DATA_PATH").map(PathBuf::from),
            language: var("OPSMGR_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            server: var("OPSMGR_SERVER")
                .map(|s| s.parse::<Server>())
                .transpose()
                .context("OPSMGR_SERVER must be China or Global")?
                .unwrap_or_default(),
            date_from: parse_date_var("OPSMGR_DATE_FROM", var("OPSMGR_DATE_FROM"))?,
            date_to: parse_date_var("OPSMGR_DATE_TO", var("OPSMGR_DATE_TO"))?,
        })
    }

    /// Release-date filter, if either bound is configured. An open bound
    /// extends to the earliest or latest representable date.
    pub fn date_range(&self) -> Option<DateRange> {
        if self.date_from.is_none() && self.date_to.is_none() {
            return None;
        }
        Some(DateRange::new(
            self.server,
            self.date_from.unwrap_or(NaiveDate::MIN),
            self.date_to.unwrap_or(NaiveDate::MAX),
        ))
    }
}

fn parse_date_var(key: &str, value: Option<String>) -> Result<Option<NaiveDate>> {
    value
        .map(|raw| {
            parse_server_date(&raw)
                .with_context(|| format!("{key} must be a yyyy/MM/dd date, got {raw:?}"))
        })
        .transpose()
}
