//! Casting progression tiers.
//!
//! A class advances its casting level at one of five fixed rates. Rates are
//! held as an exact count of sixths so that both the aggregate casting level
//! and the per-tier point dispatch stay integral.

use std::fmt;
use std::str::FromStr;

use crate::error::SheetError;

/// Fractional casting-progression rate of a class or archetype.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CastingFraction {
    /// No casting progression.
    #[default]
    None,
    /// 1/3 caster.
    Third,
    /// 1/2 caster.
    Half,
    /// 2/3 caster.
    TwoThirds,
    /// Full caster.
    Full,
}

impl CastingFraction {
    pub const ALL: [CastingFraction; 5] = [
        Self::None,
        Self::Third,
        Self::Half,
        Self::TwoThirds,
        Self::Full,
    ];

    /// The rate expressed in sixths (0, 2, 3, 4, 6).
    pub const fn sixths(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Third => 2,
            Self::Half => 3,
            Self::TwoThirds => 4,
            Self::Full => 6,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Third => "1/3",
            Self::Half => "1/2",
            Self::TwoThirds => "2/3",
            Self::Full => "1",
        }
    }

    /// Snaps a floating rate from legacy rule tables onto its tier.
    ///
    /// Values further than `1e-6` from every tier are rejected.
    pub fn from_f64(value: f64) -> Result<Self, SheetError> {
        const TOLERANCE: f64 = 1e-6;
        Self::ALL
            .into_iter()
            .find(|tier| (f64::from(tier.sixths()) / 6.0 - value).abs() < TOLERANCE)
            .ok_or_else(|| SheetError::InvalidFraction(value.to_string()))
    }
}

impl fmt::Display for CastingFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CastingFraction {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::None),
            "1/3" => Ok(Self::Third),
            "1/2" => Ok(Self::Half),
            "2/3" => Ok(Self::TwoThirds),
            "1" => Ok(Self::Full),
            other => Err(SheetError::InvalidFraction(other.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CastingFraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CastingFraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(f64),
        }

        let fraction = match <Repr as serde::Deserialize>::deserialize(deserializer)? {
            Repr::Text(text) => text.parse(),
            Repr::Number(value) => Self::from_f64(value),
        };
        fraction.map_err(serde::de::Error::custom)
    }
}
