//! Operator class and sex as stored in master data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Combat class of an operator. Master data stores it as an index 0-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorClass {
    Vanguard,
    Guard,
    Defender,
    Sniper,
    Caster,
    Medic,
    Supporter,
    Specialist,
}

impl OperatorClass {
    pub const ALL: [OperatorClass; 8] = [
        Self::Vanguard,
        Self::Guard,
        Self::Defender,
        Self::Sniper,
        Self::Caster,
        Self::Medic,
        Self::Supporter,
        Self::Specialist,
    ];

    /// Class for its master-data index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RangeViolation` for indices outside `[0, 7]`.
    pub fn from_index(index: i32) -> Result<Self, DomainError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| DomainError::range("OperatorClass", index, 0, 7))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vanguard => "Vanguard",
            Self::Guard => "Guard",
            Self::Defender => "Defender",
            Self::Sniper => "Sniper",
            Self::Caster => "Caster",
            Self::Medic => "Medic",
            Self::Supporter => "Supporter",
            Self::Specialist => "Specialist",
        }
    }
}

impl fmt::Display for OperatorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Sex as recorded in master data (0 = male, 1 = female).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Self::Male,
            1 => Self::Female,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_index_follows_declaration_order() {
        assert_eq!(OperatorClass::from_index(0), Ok(OperatorClass::Vanguard));
        assert_eq!(OperatorClass::from_index(4), Ok(OperatorClass::Caster));
        assert_eq!(OperatorClass::from_index(7), Ok(OperatorClass::Specialist));
    }

    #[test]
    fn class_index_out_of_range() {
        assert_eq!(
            OperatorClass::from_index(8),
            Err(DomainError::range("OperatorClass", 8, 0, 7))
        );
        assert!(OperatorClass::from_index(-1).is_err());
    }

    #[test]
    fn sex_from_index() {
        assert_eq!(Sex::from_index(0), Sex::Male);
        assert_eq!(Sex::from_index(1), Sex::Female);
        assert_eq!(Sex::from_index(9), Sex::Unknown);
    }
}
