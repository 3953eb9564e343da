//! Unified error types for the domain layer
//!
//! Construction-time failures (range checks, table gaps, malformed identifiers)
//! are reported through [`DomainError`]. Constraint validation of a whole
//! progression state is *not* an error: it produces a
//! [`ValidationReport`](crate::validation::ValidationReport).

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An integer was offered to a bounded type (or a range-checked setter)
    /// outside its closed range. Never clamped.
    #[error("{type_name} value {value} is out of range [{min}, {max}]")]
    RangeViolation {
        type_name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The rarity/promotion level-cap table has no entry for this pair.
    #[error("No level cap defined for rarity {rarity} at promotion {promotion}")]
    LookupGap { rarity: u8, promotion: u8 },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A required field was never supplied to a builder
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a range violation for `type_name` with the offending value and
    /// the inclusive bounds it should have respected.
    pub fn range(type_name: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Self::RangeViolation {
            type_name,
            value: value.into(),
            min,
            max,
        }
    }

    /// Creates a lookup gap error for the level-cap table.
    pub fn lookup_gap(rarity: u8, promotion: u8) -> Self {
        Self::LookupGap { rarity, promotion }
    }

    /// Creates a validation error for business rule violations.
    ///
    /// Use this when an invariant that is not a plain numeric range is broken:
    /// - Required text fields are empty
    /// - Amounts are negative where only non-negative values make sense
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Material name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a missing field error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns true if this error is a range violation.
    pub fn is_range_violation(&self) -> bool {
        matches!(self, Self::RangeViolation { .. })
    }
}

/// Checks `value` against the inclusive range `[min, max]`.
pub(crate) fn check_range(
    type_name: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<i32, DomainError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::range(type_name, value, min.into(), max.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_violation_message_names_type_value_and_bounds() {
        let err = DomainError::range("RarityTier", 7, 1, 6);
        assert!(err.is_range_violation());
        assert_eq!(err.to_string(), "RarityTier value 7 is out of range [1, 6]");
    }

    #[test]
    fn test_lookup_gap_message() {
        let err = DomainError::lookup_gap(3, 2);
        assert_eq!(
            err.to_string(),
            "No level cap defined for rarity 3 at promotion 2"
        );
    }

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_missing_field_error() {
        let err = DomainError::missing_field("rarity");
        assert_eq!(err.to_string(), "Missing required field: rarity");
    }

    #[test]
    fn test_check_range_bounds_are_inclusive() {
        assert_eq!(check_range("Trust", 0, 0, 200), Ok(0));
        assert_eq!(check_range("Trust", 200, 0, 200), Ok(200));
        assert_eq!(
            check_range("Trust", 201, 0, 200),
            Err(DomainError::range("Trust", 201, 0, 200))
        );
        assert_eq!(
            check_range("Trust", -1, 0, 200),
            Err(DomainError::range("Trust", -1, 0, 200))
        );
    }
}
