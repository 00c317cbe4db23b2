//! Tech and force casting statistics.
//!
//! A tradition's block is populated only when at least one known power of that
//! tradition resolves against the power catalog; otherwise the character is a
//! non-caster of the tradition and the block is absent.

pub mod fraction;
pub mod map;
pub mod progression;

pub use fraction::CastingFraction;
pub use map::{CastingMap, ClassProgression};
pub use progression::{Tradition, max_power_level, max_power_points, tier_points};

use crate::catalog::{Catalog, Power};
use crate::character::{Ability, AbilityScores, RawCharacter};
use crate::config::RulesConfig;
use crate::diagnostics::{Derived, ResolutionIssue};
use crate::error::SheetError;

/// Tech casting block. Tech casting keys off Intelligence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TechCasting {
    pub current_points: i32,
    pub max_points: i32,
    pub attack_modifier: i32,
    #[cfg_attr(feature = "serde", serde(rename = "saveDC"))]
    pub save_dc: i32,
    pub max_power_level: u32,
    pub powers_known: Vec<Power>,
}

/// Force casting block with light (Wisdom), dark (Charisma) and universal
/// (the better of the two) attack/DC pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForceCasting {
    pub current_points: i32,
    pub max_points: i32,
    pub light_attack_modifier: i32,
    #[cfg_attr(feature = "serde", serde(rename = "lightSaveDC"))]
    pub light_save_dc: i32,
    pub dark_attack_modifier: i32,
    #[cfg_attr(feature = "serde", serde(rename = "darkSaveDC"))]
    pub dark_save_dc: i32,
    pub universal_attack_modifier: i32,
    #[cfg_attr(feature = "serde", serde(rename = "universalSaveDC"))]
    pub universal_save_dc: i32,
    pub max_power_level: u32,
    pub powers_known: Vec<Power>,
}

/// Both casting blocks; `None` serializes as an empty object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CastingSheet {
    #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_helpers::empty_object"))]
    pub tech_casting: Option<TechCasting>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_helpers::empty_object"))]
    pub force_casting: Option<ForceCasting>,
}

/// Resolves the powers a character knows in `tradition`, class by class.
pub fn powers_known(
    character: &RawCharacter,
    catalog: &Catalog<'_, Power>,
    tradition: Tradition,
    issues: &mut Vec<ResolutionIssue>,
) -> Vec<Power> {
    let mut resolved = Vec::new();
    for class in &character.classes {
        catalog.resolve_into(
            &class.name,
            class.known_power_names(tradition),
            &mut resolved,
            issues,
        );
    }
    tracing::debug!(%tradition, resolved = resolved.len(), "powers resolved");
    resolved
}

/// Derives tech and force casting blocks for a character.
///
/// Unresolved power names are dropped and reported in the returned issues.
/// Ability modifiers are only read for traditions whose block is populated.
pub fn derive_casting(
    character: &RawCharacter,
    ability_scores: &AbilityScores,
    powers: &[Power],
    proficiency_bonus: i32,
    tech_map: &CastingMap,
    force_map: &CastingMap,
) -> Result<Derived<CastingSheet>, SheetError> {
    let catalog = Catalog::new(powers);
    let mut issues = Vec::new();

    let tech_powers = powers_known(character, &catalog, Tradition::Tech, &mut issues);
    let force_powers = powers_known(character, &catalog, Tradition::Force, &mut issues);

    let tech_casting = if tech_powers.is_empty() {
        None
    } else {
        Some(build_tech_casting(
            character,
            ability_scores,
            proficiency_bonus,
            tech_map,
            tech_powers,
        )?)
    };

    let force_casting = if force_powers.is_empty() {
        None
    } else {
        Some(build_force_casting(
            character,
            ability_scores,
            proficiency_bonus,
            force_map,
            force_powers,
        )?)
    };

    Ok(Derived::new(
        CastingSheet {
            tech_casting,
            force_casting,
        },
        issues,
    ))
}

fn build_tech_casting(
    character: &RawCharacter,
    ability_scores: &AbilityScores,
    proficiency_bonus: i32,
    map: &CastingMap,
    powers_known: Vec<Power>,
) -> Result<TechCasting, SheetError> {
    let modifier = ability_scores.modifier(Ability::Intelligence)?;
    let max_power_level = max_power_level(&character.classes, map);
    tracing::debug!(max_power_level, known = powers_known.len(), "tech casting derived");

    Ok(TechCasting {
        current_points: character.current_stats.tech_points,
        max_points: max_power_points(Tradition::Tech, &character.classes, map, modifier)?,
        attack_modifier: RulesConfig::attack_modifier(modifier, proficiency_bonus),
        save_dc: RulesConfig::save_dc(modifier, proficiency_bonus),
        max_power_level,
        powers_known,
    })
}

fn build_force_casting(
    character: &RawCharacter,
    ability_scores: &AbilityScores,
    proficiency_bonus: i32,
    map: &CastingMap,
    powers_known: Vec<Power>,
) -> Result<ForceCasting, SheetError> {
    let light = ability_scores.modifier(Ability::Wisdom)?;
    let dark = ability_scores.modifier(Ability::Charisma)?;
    let universal = light.max(dark);
    let max_power_level = max_power_level(&character.classes, map);
    tracing::debug!(max_power_level, known = powers_known.len(), "force casting derived");

    Ok(ForceCasting {
        current_points: character.current_stats.force_points,
        max_points: max_power_points(Tradition::Force, &character.classes, map, universal)?,
        light_attack_modifier: RulesConfig::attack_modifier(light, proficiency_bonus),
        light_save_dc: RulesConfig::save_dc(light, proficiency_bonus),
        dark_attack_modifier: RulesConfig::attack_modifier(dark, proficiency_bonus),
        dark_save_dc: RulesConfig::save_dc(dark, proficiency_bonus),
        universal_attack_modifier: RulesConfig::attack_modifier(universal, proficiency_bonus),
        universal_save_dc: RulesConfig::save_dc(universal, proficiency_bonus),
        max_power_level,
        powers_known,
    })
}
