//! Errors surfaced while driving the day cycle.

use super::phase::{Input, Phase};
use crate::error::{ErrorSeverity, GameError};
use crate::selector::SelectorError;

/// Rejected input or a broken selection. Rejected input leaves the cycle in
/// the phase it was in.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleError {
    #[error("{input} is not accepted while {phase}")]
    UnexpectedInput { phase: Phase, input: Input },

    #[error("choice {index} out of range: the decision offers {available} choices")]
    ChoiceOutOfRange { index: usize, available: usize },

    #[error("choice {index} costs more than the treasury holds")]
    Unaffordable { index: usize },

    #[error("selection failed: {0}")]
    Selection(#[from] SelectorError),
}

impl GameError for CycleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnexpectedInput { .. } | Self::ChoiceOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::Unaffordable { .. } => ErrorSeverity::Recoverable,
            Self::Selection(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnexpectedInput { .. } => "CYCLE_UNEXPECTED_INPUT",
            Self::ChoiceOutOfRange { .. } => "CYCLE_CHOICE_OUT_OF_RANGE",
            Self::Unaffordable { .. } => "CYCLE_UNAFFORDABLE",
            Self::Selection(_) => "CYCLE_SELECTION",
        }
    }
}
