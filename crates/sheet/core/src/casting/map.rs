//! Casting multiplier maps, one per tradition.

use std::collections::HashMap;

use super::fraction::CastingFraction;

/// Progression rates declared for one class.
///
/// `base` applies to every character with the class; `archetypes` lets a
/// sub-specialization grant a rate to an otherwise non-casting class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassProgression {
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: CastingFraction,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub archetypes: HashMap<String, CastingFraction>,
}

impl ClassProgression {
    pub fn new(base: CastingFraction) -> Self {
        Self {
            base,
            archetypes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_archetype(mut self, name: impl Into<String>, fraction: CastingFraction) -> Self {
        self.archetypes.insert(name.into(), fraction);
        self
    }

    /// Base rate when it is nonzero, else the archetype's rate, else none.
    pub fn multiplier(&self, archetype: Option<&str>) -> CastingFraction {
        if !self.base.is_none() {
            return self.base;
        }
        archetype
            .and_then(|name| self.archetypes.get(name))
            .copied()
            .unwrap_or_default()
    }
}

/// Class name to progression table for a single casting tradition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CastingMap {
    classes: HashMap<String, ClassProgression>,
}

impl CastingMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(mut self, name: impl Into<String>, progression: ClassProgression) -> Self {
        self.insert(name, progression);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, progression: ClassProgression) {
        self.classes.insert(name.into(), progression);
    }

    pub fn get(&self, class_name: &str) -> Option<&ClassProgression> {
        self.classes.get(class_name)
    }

    /// Progression rate for a class entry; unknown classes do not cast.
    pub fn multiplier(&self, class_name: &str, archetype: Option<&str>) -> CastingFraction {
        self.get(class_name)
            .map(|progression| progression.multiplier(archetype))
            .unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<(S, ClassProgression)> for CastingMap {
    fn from_iter<I: IntoIterator<Item = (S, ClassProgression)>>(iter: I) -> Self {
        Self {
            classes: iter
                .into_iter()
                .map(|(name, progression)| (name.into(), progression))
                .collect(),
        }
    }
}
