//! Error infrastructure for sheet-core.
//!
//! Calculators have no fatal paths of their own. The errors here describe
//! contract violations by the caller: an ability the populated block needs is
//! missing from the ability-score block, or a multiplier map carries a
//! fraction outside the canonical casting tiers.

use crate::character::Ability;

/// Severity level of an error, used for categorization by callers.
///
/// - **Validation**: invalid input, should not retry without changes
/// - **Internal**: unexpected inconsistency that should be investigated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Malformed caller input (missing ability, bad rule table entry).
    Validation,

    /// A derived value could not be represented.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

/// Errors raised while deriving resource blocks or building rule tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    /// The ability-score block has no entry for an ability the rules read.
    #[error("ability score '{0}' is missing from the ability-score block")]
    MissingAbility(Ability),

    /// A casting multiplier is not one of 0, 1/3, 1/2, 2/3 or 1.
    #[error("casting multiplier '{0}' is not a canonical tier (0, 1/3, 1/2, 2/3, 1)")]
    InvalidFraction(String),

    /// A pool or level total overflowed its integer representation.
    #[error("derived value overflowed while computing {0}")]
    Overflow(&'static str),
}

impl SheetError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingAbility(_) | Self::InvalidFraction(_) => ErrorSeverity::Validation,
            Self::Overflow(_) => ErrorSeverity::Internal,
        }
    }

    /// Stable identifier for this error variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAbility(_) => "SHEET_MISSING_ABILITY",
            Self::InvalidFraction(_) => "SHEET_INVALID_FRACTION",
            Self::Overflow(_) => "SHEET_OVERFLOW",
        }
    }
}
