//! Errors raised while linking content definitions.

use crate::error::{ErrorSeverity, GameError};

/// Kind of entity a name refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Trait,
    Resource,
    Event,
    Item,
    Objective,
    Character,
    Decision,
    Choice,
}

/// Broken content. Every variant aborts startup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkError {
    #[error("unknown {kind} '{name}' referenced by {referenced_by}")]
    Unresolved {
        kind: EntityKind,
        name: String,
        referenced_by: String,
    },

    #[error("duplicate {kind} name '{name}'")]
    Duplicate { kind: EntityKind, name: String },

    #[error("{owner} has no {kind} to select from")]
    EmptyPool { kind: EntityKind, owner: String },

    #[error("{kind} '{name}' has zero selection weight")]
    ZeroWeight { kind: EntityKind, name: String },

    #[error("chance {chance}% out of range in {referenced_by}")]
    ChanceOutOfRange { chance: u32, referenced_by: String },

    #[error("cohort size {cohort_size} exceeds roster of {roster} characters")]
    CohortTooLarge { cohort_size: usize, roster: usize },

    #[error("cohort size must be at least 1")]
    EmptyCohort,
}

impl GameError for LinkError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unresolved { .. } => "LINK_UNRESOLVED",
            Self::Duplicate { .. } => "LINK_DUPLICATE",
            Self::EmptyPool { .. } => "LINK_EMPTY_POOL",
            Self::ZeroWeight { .. } => "LINK_ZERO_WEIGHT",
            Self::ChanceOutOfRange { .. } => "LINK_CHANCE_OUT_OF_RANGE",
            Self::CohortTooLarge { .. } => "LINK_COHORT_TOO_LARGE",
            Self::EmptyCohort => "LINK_EMPTY_COHORT",
        }
    }
}
