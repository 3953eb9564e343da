//! Module kinds an operator may support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the four module branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModuleKind {
    X,
    Y,
    /// Delta
    D,
    /// Alpha
    A,
}

impl ModuleKind {
    /// All kinds in declaration order.
    pub const ALL: [ModuleKind; 4] = [Self::X, Self::Y, Self::D, Self::A];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::D => "D",
            Self::A => "A",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            "D" => Ok(Self::D),
            "A" => Ok(Self::A),
            _ => Err(DomainError::parse(format!("Unknown module kind: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("x".parse::<ModuleKind>(), Ok(ModuleKind::X));
        assert_eq!(" D ".parse::<ModuleKind>(), Ok(ModuleKind::D));
        assert!("Z".parse::<ModuleKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in ModuleKind::ALL {
            assert_eq!(kind.to_string().parse::<ModuleKind>(), Ok(kind));
        }
    }
}
