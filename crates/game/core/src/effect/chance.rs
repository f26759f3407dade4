//! Chance effects: a percentage roll choosing between two resource outcomes.

use super::resource::{ResourceChange, ResourceEffect};
use crate::env::RngOracle;
use crate::resources::ResourceLedger;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ChanceOutcome {
    Success,
    Fail,
}

/// A gamble attached to a choice.
///
/// The nested resource effects always resolve at multiplier 1.0; the opinion
/// tier of the current character never reaches them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChanceEffect {
    pub success_text: String,
    pub fail_text: String,
    /// Success chance in percent, 0..=100.
    pub chance: u8,
    pub on_success: Vec<ResourceEffect>,
    pub on_fail: Vec<ResourceEffect>,
    #[cfg_attr(feature = "serde", serde(skip))]
    last_outcome: Option<ChanceOutcome>,
}

impl ChanceEffect {
    pub fn new(
        success_text: impl Into<String>,
        fail_text: impl Into<String>,
        chance: u8,
        on_success: Vec<ResourceEffect>,
        on_fail: Vec<ResourceEffect>,
    ) -> Self {
        Self {
            success_text: success_text.into(),
            fail_text: fail_text.into(),
            chance,
            on_success,
            on_fail,
            last_outcome: None,
        }
    }

    /// Outcome of the most recent `apply`, if any.
    pub fn last_outcome(&self) -> Option<ChanceOutcome> {
        self.last_outcome
    }

    /// Rolls `[0, 100)`; success iff the roll is below `chance`.
    pub fn apply(&mut self, ledger: &mut ResourceLedger, rng: &mut dyn RngOracle) -> ChanceResult {
        let roll = rng.percent();
        let outcome = if roll < u32::from(self.chance) {
            ChanceOutcome::Success
        } else {
            ChanceOutcome::Fail
        };
        self.last_outcome = Some(outcome);
        tracing::debug!(chance = self.chance, roll, %outcome, "chance effect rolled");

        let (text, effects) = match outcome {
            ChanceOutcome::Success => (&self.success_text, &self.on_success),
            ChanceOutcome::Fail => (&self.fail_text, &self.on_fail),
        };
        let changes = effects
            .iter()
            .map(|effect| effect.apply_flat(ledger))
            .collect();

        ChanceResult {
            outcome,
            text: text.clone(),
            changes,
        }
    }

    /// The two odds lines shown before the choice is taken.
    pub fn odds_lines(&self) -> [String; 2] {
        [
            format!("{}% - {}", self.chance, self.success_text),
            format!("{}% - {}", 100 - u32::from(self.chance).min(100), self.fail_text),
        ]
    }

    /// Flat previews of both branches.
    pub fn preview(&self, ledger: &ResourceLedger) -> ChancePreview {
        ChancePreview {
            odds: self.odds_lines(),
            on_success: self.on_success.iter().map(|e| e.preview_flat(ledger)).collect(),
            on_fail: self.on_fail.iter().map(|e| e.preview_flat(ledger)).collect(),
        }
    }
}

/// What a chance effect did when applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChanceResult {
    pub outcome: ChanceOutcome,
    pub text: String,
    pub changes: Vec<ResourceChange>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChancePreview {
    pub odds: [String; 2],
    pub on_success: Vec<ResourceChange>,
    pub on_fail: Vec<ResourceChange>,
}
