//! Reference-integrity diagnostics collected during derivation.
//!
//! A name that does not resolve against its catalog is a recoverable data
//! problem. Resolvers drop the entry, log a warning and hand back one
//! [`ResolutionIssue`] per occurrence so callers decide how to surface it.

/// Which catalog a reference was resolved against.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContentKind {
    Power,
    Maneuver,
}

/// A content reference that was dropped because its catalog has no entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResolutionIssue {
    pub kind: ContentKind,
    /// The unresolved name, verbatim.
    pub name: String,
    /// Class whose entry (or archetype) referenced the name.
    pub class_name: String,
}

impl ResolutionIssue {
    pub fn new(kind: ContentKind, name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            class_name: class_name.into(),
        }
    }
}

impl std::fmt::Display for ResolutionIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} not found: {} (referenced by {})",
            self.kind, self.name, self.class_name
        )
    }
}

/// A derived value together with the resolution issues met while computing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derived<T> {
    pub value: T,
    pub issues: Vec<ResolutionIssue>,
}

impl<T> Derived<T> {
    pub fn new(value: T, issues: Vec<ResolutionIssue>) -> Self {
        Self { value, issues }
    }

    pub fn clean(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_parts(self) -> (T, Vec<ResolutionIssue>) {
        (self.value, self.issues)
    }
}
