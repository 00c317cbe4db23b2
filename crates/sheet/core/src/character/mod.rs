//! Character inputs supplied by the upstream character-assembly stage.
//!
//! Nothing in this module is computed here: raw class entries come straight
//! from the stored character, ability modifiers from the ability-score
//! derivation, and current pools from externally tracked resource state.

pub mod ability;
pub mod raw;

pub use ability::{Ability, AbilityScore, AbilityScores};
pub use raw::{CurrentStats, RawArchetype, RawCharacter, RawClass};
