//! Ability identifiers and the computed ability-score block.

use std::collections::HashMap;

use crate::error::SheetError;

/// The six abilities a character sheet tracks.
///
/// Names match the keys used by the ability-score block exactly
/// (`"Strength"`, `"Wisdom"`, ...); lookups are case-sensitive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

/// Computed score for one ability. Only the modifier is read by this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScore {
    pub modifier: i32,
}

impl AbilityScore {
    pub const fn new(modifier: i32) -> Self {
        Self { modifier }
    }
}

/// Ability-score block keyed by ability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityScores {
    scores: HashMap<Ability, AbilityScore>,
}

impl AbilityScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a modifier.
    #[must_use]
    pub fn with_modifier(mut self, ability: Ability, modifier: i32) -> Self {
        self.set_modifier(ability, modifier);
        self
    }

    pub fn set_modifier(&mut self, ability: Ability, modifier: i32) {
        self.scores.insert(ability, AbilityScore::new(modifier));
    }

    /// Modifier for `ability`, or [`SheetError::MissingAbility`].
    pub fn modifier(&self, ability: Ability) -> Result<i32, SheetError> {
        self.scores
            .get(&ability)
            .map(|score| score.modifier)
            .ok_or(SheetError::MissingAbility(ability))
    }

    /// Highest modifier among `abilities`, `None` when the slice is empty.
    pub fn best_modifier(&self, abilities: &[Ability]) -> Result<Option<i32>, SheetError> {
        let mut best: Option<i32> = None;
        for &ability in abilities {
            let modifier = self.modifier(ability)?;
            best = Some(best.map_or(modifier, |current| current.max(modifier)));
        }
        Ok(best)
    }
}

impl FromIterator<(Ability, i32)> for AbilityScores {
    fn from_iter<I: IntoIterator<Item = (Ability, i32)>>(iter: I) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|(ability, modifier)| (ability, AbilityScore::new(modifier)))
                .collect(),
        }
    }
}
