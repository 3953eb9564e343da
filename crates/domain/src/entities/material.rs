//! Material entity - an item consumed by operator progression, keyed by its
//! official game ID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Broad grouping used to lay out inventories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaterialCategory {
    /// Currency (Lungmen Dollars)
    #[serde(rename = "LMD")]
    Lmd,
    /// Battle records
    #[serde(rename = "EXP")]
    Exp,
    SkillSummary,
    /// Module data blocks
    Module,
    Chip,
    Material,
    #[default]
    Other,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 7] = [
        MaterialCategory::Lmd,
        MaterialCategory::Exp,
        MaterialCategory::SkillSummary,
        MaterialCategory::Module,
        MaterialCategory::Chip,
        MaterialCategory::Material,
        MaterialCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCategory::Lmd => "LMD",
            MaterialCategory::Exp => "EXP",
            MaterialCategory::SkillSummary => "SkillSummary",
            MaterialCategory::Module => "Module",
            MaterialCategory::Chip => "Chip",
            MaterialCategory::Material => "Material",
            MaterialCategory::Other => "Other",
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown material category: {s}")))
    }
}

/// A progression material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    id: String,
    name: String,
    category: MaterialCategory,
    /// Tier within the category (T1 to T5 for crafting materials)
    rarity: u32,
    icon_path: Option<String>,
}

impl Material {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `id` or `name` is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: MaterialCategory,
        rarity: u32,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("Material ID cannot be empty"));
        }
        let name = non_blank_name(name.into())?;
        Ok(Self {
            id,
            name,
            category,
            rarity,
            icon_path: None,
        })
    }

    pub fn with_icon_path(mut self, icon_path: impl Into<String>) -> Self {
        self.icon_path = Some(icon_path.into());
        self
    }

    // Read accessors

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> MaterialCategory {
        self.category
    }

    pub fn rarity(&self) -> u32 {
        self.rarity
    }

    pub fn icon_path(&self) -> Option<&str> {
        self.icon_path.as_deref()
    }

    // Mutation methods

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `name` is blank; the name is left unchanged.
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.name = non_blank_name(name.into())?;
        Ok(())
    }

    pub fn update_icon_path(&mut self, icon_path: Option<String>) {
        self.icon_path = icon_path;
    }
}

fn non_blank_name(name: String) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("Material name cannot be empty"));
    }
    Ok(name)
}
