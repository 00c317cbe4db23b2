//! Superiority (maneuver) statistics.
//!
//! The primary superiority class decides the dice formulas, every further
//! eligible class adds one die, and the block is absent when the selected
//! rule set has no die size.

pub mod rules;
pub mod selection;

pub use rules::RuleSet;
pub use selection::{PrimaryClass, is_superiority_class, multiclass_dice_bonus, rule_set_for};

use std::fmt;

use crate::catalog::{Catalog, Maneuver};
use crate::character::{AbilityScores, RawCharacter};
use crate::config::RulesConfig;
use crate::diagnostics::{Derived, ResolutionIssue};
use crate::error::SheetError;

/// Superiority die, rendered as `d{faces}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieSize(pub u32);

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

impl std::str::FromStr for DieSize {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('d').unwrap_or(s).parse().map(DieSize)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DieSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DieSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Superiority block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Superiority {
    pub current_dice: i32,
    pub max_dice: u32,
    pub dice_size: DieSize,
    #[cfg_attr(feature = "serde", serde(rename = "maneuverSaveDC"))]
    pub maneuver_save_dc: i32,
    pub maneuvers: Vec<Maneuver>,
}

/// Resolves class and archetype maneuvers against the maneuver catalog.
pub fn maneuvers_known(
    character: &RawCharacter,
    catalog: &Catalog<'_, Maneuver>,
    issues: &mut Vec<ResolutionIssue>,
) -> Vec<Maneuver> {
    let mut resolved = Vec::new();
    for class in &character.classes {
        catalog.resolve_into(
            &class.name,
            class.known_maneuver_names(),
            &mut resolved,
            issues,
        );
    }
    resolved
}

/// Derives the superiority block, or `None` for characters without aptitude.
pub fn derive_superiority(
    character: &RawCharacter,
    ability_scores: &AbilityScores,
    proficiency_bonus: i32,
    maneuvers: &[Maneuver],
) -> Result<Derived<Option<Superiority>>, SheetError> {
    let primary = PrimaryClass::select(character);
    let dice_size = primary.dice_size();
    tracing::debug!(
        class = primary.class.map(|class| class.name.as_str()),
        rule_set = %primary.rule_set,
        dice_size,
        "superiority rule set selected"
    );

    if dice_size == 0 {
        return Ok(Derived::clean(None));
    }

    let best_modifier = ability_scores
        .best_modifier(primary.rule_set.save_dc_abilities())?
        .unwrap_or_default();

    let catalog = Catalog::new(maneuvers);
    let mut issues = Vec::new();
    let maneuvers = maneuvers_known(character, &catalog, &mut issues);

    let superiority = Superiority {
        current_dice: character.current_stats.superiority_dice,
        max_dice: primary
            .max_dice()
            .saturating_add(multiclass_dice_bonus(character)),
        dice_size: DieSize(dice_size),
        maneuver_save_dc: RulesConfig::save_dc(best_modifier, proficiency_bonus),
        maneuvers,
    };

    Ok(Derived::new(Some(superiority), issues))
}
