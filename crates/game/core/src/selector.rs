//! Adaptive weighted selection.
//!
//! Used for both the daily cohort (pool = every character) and the decision a
//! character brings (pool = that character's decisions). After each pick the
//! selected entry loses `step` weight (floored at [`GameConfig::MIN_WEIGHT`])
//! and every other entry gains `step`, so recent picks become less likely
//! without ever becoming impossible.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};

/// Anything carrying a selection weight.
pub trait Weighted {
    fn weight(&self) -> u32;
    fn set_weight(&mut self, weight: u32);
}

impl<T> Weighted for (T, u32) {
    fn weight(&self) -> u32 {
        self.1
    }

    fn set_weight(&mut self, weight: u32) {
        self.1 = weight;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectorError {
    #[error("cannot select from an empty pool")]
    EmptyPool,

    #[error("no candidate selected for draw {draw} out of total weight {total}")]
    NoCandidate { draw: u64, total: u64 },
}

impl GameError for SelectorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyPool => "SELECTOR_EMPTY_POOL",
            Self::NoCandidate { .. } => "SELECTOR_NO_CANDIDATE",
        }
    }
}

pub fn total_weight<T: Weighted>(pool: &[T]) -> u64 {
    pool.iter().map(|entry| u64::from(entry.weight())).sum()
}

/// Walks the pool subtracting weights until `draw` falls inside one entry.
///
/// `draw` must be below [`total_weight`]; anything else is reported as
/// [`SelectorError::NoCandidate`].
pub fn pick<T: Weighted>(pool: &[T], draw: u64) -> Result<usize, SelectorError> {
    if pool.is_empty() {
        return Err(SelectorError::EmptyPool);
    }
    let mut remaining = draw;
    for (index, entry) in pool.iter().enumerate() {
        let weight = u64::from(entry.weight());
        if remaining < weight {
            return Ok(index);
        }
        remaining -= weight;
    }
    Err(SelectorError::NoCandidate {
        draw,
        total: total_weight(pool),
    })
}

/// Adaptive reweighting after `selected` was picked.
pub fn reweight<T: Weighted>(pool: &mut [T], selected: usize, step: u32) {
    for (index, entry) in pool.iter_mut().enumerate() {
        let weight = entry.weight();
        let next = if index == selected {
            weight.saturating_sub(step).max(GameConfig::MIN_WEIGHT)
        } else {
            weight.saturating_add(step)
        };
        entry.set_weight(next);
    }
}

/// Draws one entry proportionally to weight, then reweights the pool.
pub fn select<T: Weighted>(
    pool: &mut [T],
    step: u32,
    rng: &mut dyn RngOracle,
) -> Result<usize, SelectorError> {
    if pool.is_empty() {
        return Err(SelectorError::EmptyPool);
    }
    let total = total_weight(pool);
    let draw = rng.below(total);
    let selected = pick(pool, draw)?;
    tracing::debug!(draw, total, selected, "weighted selection");
    reweight(pool, selected, step);
    Ok(selected)
}
