//! Raw character data as stored for a player character.

use crate::casting::Tradition;

/// Archetype (sub-specialization) chosen within a class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawArchetype {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maneuvers: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech_powers: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub force_powers: Vec<String>,
}

impl RawArchetype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_maneuvers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.maneuvers.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_powers<I, S>(mut self, tradition: Tradition, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = match tradition {
            Tradition::Tech => &mut self.tech_powers,
            Tradition::Force => &mut self.force_powers,
        };
        list.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn powers(&self, tradition: Tradition) -> &[String] {
        match tradition {
            Tradition::Tech => &self.tech_powers,
            Tradition::Force => &self.force_powers,
        }
    }
}

/// One class entry on a character, in class-selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawClass {
    pub name: String,
    pub levels: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub archetype: Option<RawArchetype>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maneuvers: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech_powers: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub force_powers: Vec<String>,
}

impl RawClass {
    pub fn new(name: impl Into<String>, levels: u32) -> Self {
        Self {
            name: name.into(),
            levels,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_archetype(mut self, archetype: RawArchetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    #[must_use]
    pub fn with_maneuvers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.maneuvers.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_powers<I, S>(mut self, tradition: Tradition, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = match tradition {
            Tradition::Tech => &mut self.tech_powers,
            Tradition::Force => &mut self.force_powers,
        };
        list.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn archetype_name(&self) -> Option<&str> {
        self.archetype.as_ref().map(|archetype| archetype.name.as_str())
    }

    /// Class power names followed by archetype power names for `tradition`.
    pub fn known_power_names(&self, tradition: Tradition) -> impl Iterator<Item = &str> {
        let own = match tradition {
            Tradition::Tech => &self.tech_powers,
            Tradition::Force => &self.force_powers,
        };
        let granted = self
            .archetype
            .as_ref()
            .map(|archetype| archetype.powers(tradition))
            .unwrap_or_default();
        own.iter().chain(granted).map(String::as_str)
    }

    /// Class maneuver names followed by archetype maneuver names.
    pub fn known_maneuver_names(&self) -> impl Iterator<Item = &str> {
        let granted = self
            .archetype
            .as_ref()
            .map(|archetype| archetype.maneuvers.as_slice())
            .unwrap_or_default();
        self.maneuvers.iter().chain(granted).map(String::as_str)
    }
}

/// Externally tracked resource pools, passed through to the stat blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CurrentStats {
    pub tech_points: i32,
    pub force_points: i32,
    pub superiority_dice: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawCharacter {
    pub classes: Vec<RawClass>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_stats: CurrentStats,
}

impl RawCharacter {
    pub fn new(classes: Vec<RawClass>) -> Self {
        Self {
            classes,
            current_stats: CurrentStats::default(),
        }
    }

    #[must_use]
    pub fn with_current_stats(mut self, current_stats: CurrentStats) -> Self {
        self.current_stats = current_stats;
        self
    }
}
