//! Combined resource sheet for the character engine.

use crate::casting::{CastingMap, ForceCasting, TechCasting, derive_casting};
use crate::catalog::{Maneuver, Power};
use crate::character::{AbilityScores, RawCharacter};
use crate::diagnostics::Derived;
use crate::error::SheetError;
use crate::superiority::{Superiority, derive_superiority};

/// Everything the calculators read, already assembled upstream.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SheetInputs {
    pub character: RawCharacter,
    pub ability_scores: AbilityScores,
    pub proficiency_bonus: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub powers: Vec<Power>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maneuvers: Vec<Maneuver>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech_casting_map: CastingMap,
    #[cfg_attr(feature = "serde", serde(default))]
    pub force_casting_map: CastingMap,
}

/// Casting and superiority blocks; absent blocks serialize as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResourceSheet {
    #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_helpers::empty_object"))]
    pub tech_casting: Option<TechCasting>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_helpers::empty_object"))]
    pub force_casting: Option<ForceCasting>,
    #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_helpers::empty_object"))]
    pub superiority: Option<Superiority>,
}

/// Runs both calculators and merges their resolution issues.
pub fn derive_resources(inputs: &SheetInputs) -> Result<Derived<ResourceSheet>, SheetError> {
    let (casting, mut issues) = derive_casting(
        &inputs.character,
        &inputs.ability_scores,
        &inputs.powers,
        inputs.proficiency_bonus,
        &inputs.tech_casting_map,
        &inputs.force_casting_map,
    )?
    .into_parts();

    let (superiority, superiority_issues) = derive_superiority(
        &inputs.character,
        &inputs.ability_scores,
        inputs.proficiency_bonus,
        &inputs.maneuvers,
    )?
    .into_parts();
    issues.extend(superiority_issues);

    Ok(Derived::new(
        ResourceSheet {
            tech_casting: casting.tech_casting,
            force_casting: casting.force_casting,
            superiority,
        },
        issues,
    ))
}
