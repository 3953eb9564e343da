//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//!
//! # Rustic DDD Principles
//!
//! | Concern | Rustic Equivalent |
//! |---------|-------------------|
//! | Bounded numbers | Newtypes valid by construction |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `Copy` values + consuming `with_*` methods |
//! | Factory pattern | `::new()` + builder pattern |
//! | Rule checks | Reports returned from validation, never panics |

pub mod operator;

pub use operator::Operator;
