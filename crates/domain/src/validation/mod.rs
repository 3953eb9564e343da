//! Progression-state validation: the context a state is judged in and the
//! rule set that judges it.

mod context;
mod validator;

pub use context::{ValidationContext, ValidationContextBuilder};
pub use validator::{
    ProgressionRule, ProgressionValidator, ValidationReport, Violation, MAX_SKILL_LEVEL,
    MIN_LEVEL, MIN_SKILL_LEVEL,
};
