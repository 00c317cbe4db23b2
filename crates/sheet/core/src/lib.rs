//! Deterministic resource derivation for character sheets.
//!
//! `sheet-core` turns a raw character description plus declarative rule tables
//! into the casting and superiority stat blocks consumed by presentation layers.
//! Every calculator is a pure function of its inputs: ability scores,
//! proficiency bonus and content catalogs are supplied by the upstream
//! character-assembly stage, and nothing here performs I/O.
//!
//! Content references that cannot be resolved are never fatal. They are
//! dropped from the output, reported as [`ResolutionIssue`]s alongside the
//! derived value, and logged through `tracing`.
pub mod casting;
pub mod catalog;
pub mod character;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod sheet;
pub mod superiority;

#[cfg(feature = "serde")]
mod serde_helpers;

pub use casting::{
    CastingFraction, CastingMap, CastingSheet, ClassProgression, ForceCasting, TechCasting,
    Tradition, derive_casting,
};
pub use catalog::{Catalog, CatalogEntry, Maneuver, Power};
pub use character::{
    Ability, AbilityScore, AbilityScores, CurrentStats, RawArchetype, RawCharacter, RawClass,
};
pub use config::RulesConfig;
pub use diagnostics::{ContentKind, Derived, ResolutionIssue};
pub use error::{ErrorSeverity, SheetError};
pub use sheet::{ResourceSheet, SheetInputs, derive_resources};
pub use superiority::{DieSize, RuleSet, Superiority, derive_superiority};
