//! Promotion (Elite) tier, 0-2.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{check_range, DomainError};

/// Elite promotion stage of an operator, always within `[0, 2]`.
///
/// Elite 2 is the only stage that unlocks skill mastery and modules.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct PromotionTier(u8);

impl PromotionTier {
    pub const ELITE0: Self = Self(0);
    pub const ELITE1: Self = Self(1);
    pub const ELITE2: Self = Self(2);

    /// Lowest valid promotion.
    pub const MIN: i32 = 0;
    /// Highest valid promotion.
    pub const MAX: i32 = 2;

    /// Create a promotion tier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RangeViolation` if `value` is outside `[0, 2]`.
    pub fn new(value: i32) -> Result<Self, DomainError> {
        let value = check_range("PromotionTier", value, Self::MIN, Self::MAX)?;
        Ok(Self(value as u8))
    }

    /// Returns the raw promotion stage.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Skill mastery can only be trained at Elite 2.
    pub fn can_mastery(&self) -> bool {
        self.0 == 2
    }

    /// Modules can only be equipped at Elite 2.
    pub fn can_module(&self) -> bool {
        self.0 == 2
    }

    /// Highest skill level reachable at this promotion.
    pub fn max_skill_level(&self) -> i32 {
        if self.0 == 0 {
            4
        } else {
            7
        }
    }
}

impl fmt::Display for PromotionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for PromotionTier {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PromotionTier> for i32 {
    fn from(promotion: PromotionTier) -> i32 {
        promotion.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_factory() {
        assert_eq!(PromotionTier::new(0), Ok(PromotionTier::ELITE0));
        assert_eq!(PromotionTier::new(1), Ok(PromotionTier::ELITE1));
        assert_eq!(PromotionTier::new(2), Ok(PromotionTier::ELITE2));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            PromotionTier::new(3),
            Err(DomainError::range("PromotionTier", 3, 0, 2))
        );
        assert_eq!(
            PromotionTier::new(-1),
            Err(DomainError::range("PromotionTier", -1, 0, 2))
        );
    }

    #[test]
    fn only_elite2_unlocks_mastery_and_modules() {
        assert!(!PromotionTier::ELITE0.can_mastery());
        assert!(!PromotionTier::ELITE1.can_mastery());
        assert!(PromotionTier::ELITE2.can_mastery());
        assert!(!PromotionTier::ELITE0.can_module());
        assert!(!PromotionTier::ELITE1.can_module());
        assert!(PromotionTier::ELITE2.can_module());
    }

    #[test]
    fn max_skill_level_is_four_before_first_promotion() {
        assert_eq!(PromotionTier::ELITE0.max_skill_level(), 4);
        assert_eq!(PromotionTier::ELITE1.max_skill_level(), 7);
        assert_eq!(PromotionTier::ELITE2.max_skill_level(), 7);
    }

    #[test]
    fn ordering_follows_stage() {
        assert!(PromotionTier::ELITE0 < PromotionTier::ELITE1);
        assert!(PromotionTier::ELITE2 > PromotionTier::ELITE1);
    }
}
