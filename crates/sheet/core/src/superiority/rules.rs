//! Superiority dice formulas per rule set.
//!
//! Formulas (level = levels in the primary superiority class):
//! - Fighter / Scout dice: ⌈(level + 2) / 8⌉ + 1
//! - Tactical dice: 2 × (⌈(level + 2) / 8⌉ + 1)
//! - Scholar dice: min(2 × ⌈(level + 2) / 4⌉, 10)
//! - Fighter die: d4
//! - Tactical / Scholar / Scout die: min(2 × ⌈(level − 2) / 4⌉ + 4, 12)

use crate::character::Ability;
use crate::config::RulesConfig;

/// Superiority progression a character follows.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleSet {
    Fighter,
    Tactical,
    Scholar,
    Scout,
    /// No superiority aptitude: zero dice, zero die size.
    #[default]
    None,
}

impl RuleSet {
    /// Rule set keyed by a class's own name; unknown classes get [`RuleSet::None`].
    pub fn for_class(class_name: &str) -> Self {
        match class_name {
            "Fighter" => Self::Fighter,
            "Scholar" => Self::Scholar,
            "Scout" => Self::Scout,
            _ => Self::None,
        }
    }

    pub fn max_dice(self, level: u32) -> u32 {
        match self {
            Self::Fighter | Self::Scout => martial_dice(level),
            Self::Tactical => martial_dice(level).saturating_mul(2),
            Self::Scholar => level
                .saturating_add(2)
                .div_ceil(4)
                .saturating_mul(2)
                .min(RulesConfig::MAX_SCHOLAR_DICE),
            Self::None => 0,
        }
    }

    /// Die size in faces; zero for [`RuleSet::None`].
    pub fn dice_size(self, level: u32) -> u32 {
        match self {
            Self::Fighter => 4,
            Self::Tactical | Self::Scholar | Self::Scout => growing_die(level),
            Self::None => 0,
        }
    }

    /// Abilities whose best modifier sets the maneuver save DC.
    pub const fn save_dc_abilities(self) -> &'static [Ability] {
        match self {
            Self::Fighter | Self::Tactical => &[Ability::Strength, Ability::Dexterity],
            Self::Scholar => &[Ability::Intelligence],
            Self::Scout => &[Ability::Dexterity],
            Self::None => &[],
        }
    }
}

// One extra die at level 7, another at 15.
fn martial_dice(level: u32) -> u32 {
    level.saturating_add(2).div_ceil(8).saturating_add(1)
}

// d4 through level 2, then one step every 4 levels up to d12.
fn growing_die(level: u32) -> u32 {
    level
        .saturating_sub(2)
        .div_ceil(4)
        .saturating_mul(2)
        .saturating_add(4)
        .min(RulesConfig::MAX_SUPERIORITY_DIE)
}
