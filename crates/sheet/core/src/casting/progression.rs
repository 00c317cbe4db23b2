//! Casting level, power level and power point formulas.
//!
//! Formulas:
//! - casting_level = Σ levels × multiplier
//! - max_power_level = min(9, ⌈casting_level / 2⌉)
//! - max_points = ability modifier + Σ per-class tier points

use super::fraction::CastingFraction;
use super::map::CastingMap;
use crate::character::RawClass;
use crate::config::RulesConfig;
use crate::error::SheetError;

/// One of the two independent power systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tradition {
    Tech,
    Force,
}

/// Aggregate casting level across classes, in sixths of a level.
pub fn casting_level_sixths(classes: &[RawClass], map: &CastingMap) -> u64 {
    classes
        .iter()
        .map(|class| {
            let fraction = map.multiplier(&class.name, class.archetype_name());
            u64::from(class.levels) * u64::from(fraction.sixths())
        })
        .sum()
}

/// Highest power level the classes can cast, capped at 9.
pub fn max_power_level(classes: &[RawClass], map: &CastingMap) -> u32 {
    // ⌈(sixths / 6) / 2⌉ == ⌈sixths / 12⌉
    let level = casting_level_sixths(classes, map).div_ceil(12);
    u32::try_from(level)
        .unwrap_or(u32::MAX)
        .min(RulesConfig::MAX_POWER_LEVEL)
}

/// Points one class entry contributes at the given tier.
///
/// Dispatch is exact per tier; the non-casting tier contributes nothing.
pub fn tier_points(tradition: Tradition, fraction: CastingFraction, levels: u32) -> Option<u32> {
    match (fraction, tradition) {
        (CastingFraction::None, _) => Some(0),
        (CastingFraction::Third, Tradition::Tech) => Some(levels.div_ceil(2)),
        (CastingFraction::Third, Tradition::Force) => Some(levels),
        (CastingFraction::Half, Tradition::Tech) => Some(levels),
        (CastingFraction::Half, Tradition::Force) => levels.checked_mul(2),
        (CastingFraction::TwoThirds, _) => levels.checked_mul(3),
        (CastingFraction::Full, Tradition::Tech) => levels.checked_mul(2),
        (CastingFraction::Full, Tradition::Force) => levels.checked_mul(4),
    }
}

/// Maximum power points, starting from the tradition's casting modifier.
pub fn max_power_points(
    tradition: Tradition,
    classes: &[RawClass],
    map: &CastingMap,
    ability_modifier: i32,
) -> Result<i32, SheetError> {
    const CONTEXT: &str = "power points";

    classes.iter().try_fold(ability_modifier, |total, class| {
        let fraction = map.multiplier(&class.name, class.archetype_name());
        let points = tier_points(tradition, fraction, class.levels)
            .and_then(|points| i32::try_from(points).ok())
            .ok_or(SheetError::Overflow(CONTEXT))?;
        total.checked_add(points).ok_or(SheetError::Overflow(CONTEXT))
    })
}
