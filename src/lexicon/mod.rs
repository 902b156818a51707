//! Static lookup tables for symptoms and body-part aliases.
//!
//! Both tables are built once at first use and are immutable afterwards, so
//! they are safe to share across threads without synchronization. Lookups are
//! case-insensitive and exact (no fuzzy matching, no stemming).

pub mod body_parts;
pub mod muscle;
pub mod symptoms;

pub use body_parts::{body_aliases, groups_of};
pub use muscle::MuscleGroup;
pub use symptoms::{Severity, severity_of, symptom_keywords};
