//! Content catalogs keyed by unique name.
//!
//! Catalogs are produced by the content-loading stage; this crate only joins
//! raw name references against them. Lookups are exact-string and
//! case-sensitive.

use std::collections::HashMap;
#[cfg(feature = "serde")]
use std::collections::BTreeMap;

use crate::diagnostics::{ContentKind, ResolutionIssue};

/// A catalog entry addressable by its unique name.
pub trait CatalogEntry: Clone {
    const KIND: ContentKind;

    fn name(&self) -> &str;
}

/// A tech or force power.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Power {
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub power_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Content fields this crate does not read, echoed back unchanged.
    #[cfg(feature = "serde")]
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Power {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

impl CatalogEntry for Power {
    const KIND: ContentKind = ContentKind::Power;

    fn name(&self) -> &str {
        &self.name
    }
}

/// A superiority maneuver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Maneuver {
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub maneuver_type: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Content fields this crate does not read, echoed back unchanged.
    #[cfg(feature = "serde")]
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Maneuver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl CatalogEntry for Maneuver {
    const KIND: ContentKind = ContentKind::Maneuver;

    fn name(&self) -> &str {
        &self.name
    }
}

/// Name-indexed view over a content list.
///
/// When a list repeats a name, the first entry wins.
#[derive(Clone, Debug)]
pub struct Catalog<'a, T: CatalogEntry> {
    index: HashMap<&'a str, &'a T>,
}

impl<'a, T: CatalogEntry> Catalog<'a, T> {
    pub fn new(entries: &'a [T]) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for entry in entries {
            index.entry(entry.name()).or_insert(entry);
        }
        Self { index }
    }

    pub fn get(&self, name: &str) -> Option<&'a T> {
        self.index.get(name).copied()
    }

    /// Resolves `names` in order, appending hits to `resolved`.
    ///
    /// Each miss is logged and recorded in `issues` once per occurrence.
    pub fn resolve_into<'n>(
        &self,
        class_name: &str,
        names: impl IntoIterator<Item = &'n str>,
        resolved: &mut Vec<T>,
        issues: &mut Vec<ResolutionIssue>,
    ) {
        for name in names {
            match self.get(name) {
                Some(entry) => resolved.push(entry.clone()),
                None => {
                    tracing::warn!(
                        kind = %T::KIND,
                        class = class_name,
                        "{} not found: {}",
                        T::KIND,
                        name
                    );
                    issues.push(ResolutionIssue::new(T::KIND, name, class_name));
                }
            }
        }
    }
}
