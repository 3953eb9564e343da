//! Plain 0-3 tiers: skill mastery and module stage.
//!
//! Both are bounded integers with four named levels and no derived behavior,
//! so they share one definition.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{check_range, DomainError};

macro_rules! define_tier {
    ($(#[$meta:meta])* $name:ident, [$zero:ident, $one:ident, $two:ident, $three:ident]) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(u8);

        impl $name {
            pub const $zero: Self = Self(0);
            pub const $one: Self = Self(1);
            pub const $two: Self = Self(2);
            pub const $three: Self = Self(3);

            pub const MIN: i32 = 0;
            pub const MAX: i32 = 3;

            /// # Errors
            ///
            /// Returns `DomainError::RangeViolation` if `value` is outside `[0, 3]`.
            pub fn new(value: i32) -> Result<Self, DomainError> {
                let value = check_range(stringify!($name), value, Self::MIN, Self::MAX)?;
                Ok(Self(value as u8))
            }

            #[inline]
            pub fn value(&self) -> u8 {
                self.0
            }

            /// True for any tier above the zero level.
            #[inline]
            pub fn is_set(&self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = DomainError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(tier: $name) -> i32 {
                tier.0.into()
            }
        }
    };
}

define_tier!(
    /// Per-skill mastery tier (None, M1, M2, M3).
    SkillMasteryTier,
    [NONE, M1, M2, M3]
);

define_tier!(
    /// Module upgrade stage (None, Stage 1-3).
    ModuleTier,
    [NONE, STAGE1, STAGE2, STAGE3]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mastery_constants_match_factory() {
        assert_eq!(SkillMasteryTier::new(0), Ok(SkillMasteryTier::NONE));
        assert_eq!(SkillMasteryTier::new(1), Ok(SkillMasteryTier::M1));
        assert_eq!(SkillMasteryTier::new(2), Ok(SkillMasteryTier::M2));
        assert_eq!(SkillMasteryTier::new(3), Ok(SkillMasteryTier::M3));
    }

    #[test]
    fn module_constants_match_factory() {
        assert_eq!(ModuleTier::new(0), Ok(ModuleTier::NONE));
        assert_eq!(ModuleTier::new(1), Ok(ModuleTier::STAGE1));
        assert_eq!(ModuleTier::new(2), Ok(ModuleTier::STAGE2));
        assert_eq!(ModuleTier::new(3), Ok(ModuleTier::STAGE3));
    }

    #[test]
    fn out_of_range_names_the_type() {
        assert_eq!(
            SkillMasteryTier::new(4),
            Err(DomainError::range("SkillMasteryTier", 4, 0, 3))
        );
        assert_eq!(
            ModuleTier::new(-2),
            Err(DomainError::range("ModuleTier", -2, 0, 3))
        );
    }

    #[test]
    fn default_is_zero_level() {
        assert_eq!(SkillMasteryTier::default(), SkillMasteryTier::NONE);
        assert_eq!(ModuleTier::default(), ModuleTier::NONE);
        assert!(!ModuleTier::NONE.is_set());
        assert!(ModuleTier::STAGE1.is_set());
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert_eq!(
            serde_json::from_str::<ModuleTier>("3").unwrap(),
            ModuleTier::STAGE3
        );
        assert!(serde_json::from_str::<SkillMasteryTier>("9").is_err());
    }
}
