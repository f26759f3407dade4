//! Direct opinion change attached to a choice.

use crate::opinion::Opinion;

/// Exempt from the opinion tier: the amount is added as-is, then clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpinionEffect {
    pub amount: i32,
}

impl OpinionEffect {
    pub const fn new(amount: i32) -> Self {
        Self { amount }
    }

    /// Returns the change actually applied after clamping.
    pub fn apply(&self, opinion: &mut Opinion) -> i32 {
        opinion.add(self.amount)
    }
}
