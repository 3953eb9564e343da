//! Validated identifiers and localized display names.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// OperatorCode
// ============================================================================

/// Official game code of an operator (e.g. `"LM04"`), non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperatorCode(String);

impl OperatorCode {
    /// Create a new validated operator code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the code is empty after trimming.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Operator code cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for OperatorCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<OperatorCode> for String {
    fn from(code: OperatorCode) -> String {
        code.0
    }
}

// ============================================================================
// LocalizedName
// ============================================================================

/// A name in the three languages the game data ships with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedName {
    ja: String,
    en: String,
    ch: String,
}

impl LocalizedName {
    pub fn new(ja: impl Into<String>, en: impl Into<String>, ch: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            en: en.into(),
            ch: ch.into(),
        }
    }

    pub fn ja(&self) -> &str {
        &self.ja
    }

    pub fn en(&self) -> &str {
        &self.en
    }

    pub fn ch(&self) -> &str {
        &self.ch
    }

    /// Name for a language code (`ja-JP`/`ja`, `en-US`/`en`, `zh-CN`/`zh`/`ch`).
    /// Unknown codes fall back to English.
    pub fn get(&self, language: &str) -> &str {
        match language {
            "ja-JP" | "ja" => &self.ja,
            "en-US" | "en" => &self.en,
            "zh-CN" | "zh" | "ch" => &self.ch,
            _ => &self.en,
        }
    }
}

impl fmt::Display for LocalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ja)
    }
}
