//! Rarity tier (1-6 stars) and the progression caps derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PromotionTier;
use crate::error::{check_range, DomainError};

/// Star rarity of an operator, always within `[1, 6]`.
///
/// Rarity drives the promotion ceiling, the per-promotion level cap and the
/// level an Elite 2 operator must reach before modules unlock.
///
/// # Example
///
/// ```
/// use opsmgr_domain::value_objects::{PromotionTier, RarityTier};
///
/// let rarity = RarityTier::new(5).unwrap();
/// assert_eq!(rarity.max_promotion(), PromotionTier::ELITE2);
/// assert_eq!(rarity.max_level(PromotionTier::ELITE1), Ok(70));
/// assert!(RarityTier::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct RarityTier(u8);

impl RarityTier {
    /// Lowest valid rarity.
    pub const MIN: i32 = 1;
    /// Highest valid rarity.
    pub const MAX: i32 = 6;

    /// Create a rarity tier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RangeViolation` if `value` is outside `[1, 6]`.
    pub fn new(value: i32) -> Result<Self, DomainError> {
        let value = check_range("RarityTier", value, Self::MIN, Self::MAX)?;
        Ok(Self(value as u8))
    }

    /// Returns the raw star count.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Highest promotion reachable at this rarity.
    pub fn max_promotion(&self) -> PromotionTier {
        match self.0 {
            1 | 2 => PromotionTier::ELITE0,
            3 => PromotionTier::ELITE1,
            _ => PromotionTier::ELITE2,
        }
    }

    /// Level cap for this rarity at `promotion`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LookupGap` when `promotion` exceeds
    /// [`max_promotion`](Self::max_promotion); the table has no row for it.
    pub fn max_level(&self, promotion: PromotionTier) -> Result<i32, DomainError> {
        let cap = match (self.0, promotion.value()) {
            (1, 0) | (2, 0) => 30,
            (3, 0) => 40,
            (3, 1) => 55,
            (4, 0) => 45,
            (4, 1) => 60,
            (4, 2) => 70,
            (5, 0) => 50,
            (5, 1) => 70,
            (5, 2) => 80,
            (6, 0) => 50,
            (6, 1) => 80,
            (6, 2) => 90,
            (rarity, promotion) => return Err(DomainError::lookup_gap(rarity, promotion)),
        };
        Ok(cap)
    }

    /// Elite 2 level at which modules unlock, or `None` for rarities that
    /// never get modules (3 stars and below).
    pub fn module_level_requirement(&self) -> Option<i32> {
        match self.0 {
            6 => Some(60),
            5 => Some(50),
            4 => Some(40),
            _ => None,
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for RarityTier {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RarityTier> for i32 {
    fn from(rarity: RarityTier) -> i32 {
        rarity.0.into()
    }
}
