//! Errors raised while turning persisted records into domain objects.

use opsmgr_domain::DomainError;

/// A single operator's records could not be mapped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// Master data for the operator violates a domain range or format.
    #[error("Invalid master data for operator {code}: {source}")]
    InvalidMaster { code: String, source: DomainError },

    /// The player's saved entry for the operator violates a domain range.
    #[error("Invalid user data for operator {code} ({field}): {source}")]
    InvalidUser {
        code: String,
        field: &'static str,
        source: DomainError,
    },
}

impl MappingError {
    pub fn invalid_master(code: impl ToString, source: DomainError) -> Self {
        Self::InvalidMaster {
            code: code.to_string(),
            source,
        }
    }

    pub fn invalid_user(code: impl ToString, field: &'static str, source: DomainError) -> Self {
        Self::InvalidUser {
            code: code.to_string(),
            field,
            source,
        }
    }

    /// Code of the operator that failed to map.
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidMaster { code, .. } | Self::InvalidUser { code, .. } => code,
        }
    }

    pub fn domain_error(&self) -> &DomainError {
        match self {
            Self::InvalidMaster { source, .. } | Self::InvalidUser { source, .. } => source,
        }
    }
}
