//! Resource effects: signed changes to a resource pool.

use crate::opinion::OpinionTier;
use crate::registry::ResourceId;
use crate::resources::ResourceLedger;

/// Scales an amount by a multiplier, rounding half to even.
///
/// Every tier multiplier is a power of two, so the product is exact and the
/// only rounding that happens is on `.5` results (`-2.5 -> -2`, `3.5 -> 4`).
pub fn scale_amount(amount: i32, multiplier: f64) -> i32 {
    let scaled = (amount as f64 * multiplier).round_ties_even();
    scaled.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// A signed change to one resource.
///
/// `tier` and `adjustment` are transient: the tier is set when the owning
/// decision is presented and the adjustment while a constant item is active.
/// Neither is part of the content definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceEffect {
    pub resource: ResourceId,
    pub amount: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    adjustment: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    tier: OpinionTier,
}

impl ResourceEffect {
    pub fn new(resource: ResourceId, amount: i32) -> Self {
        Self {
            resource,
            amount,
            adjustment: 0,
            tier: OpinionTier::Neutral,
        }
    }

    /// Base amount plus any active constant-item adjustment.
    pub fn effective_amount(&self) -> i32 {
        self.amount.saturating_add(self.adjustment)
    }

    pub fn tier(&self) -> OpinionTier {
        self.tier
    }

    /// Chosen by the sign of the base amount; an item adjustment that flips
    /// the sign does not turn a cost into a gain for tiering.
    pub fn multiplier(&self) -> f64 {
        self.tier.multiplier_for(self.amount)
    }

    /// The amount that `apply` would add right now.
    pub fn multiplied_amount(&self) -> i32 {
        scale_amount(self.effective_amount(), self.multiplier())
    }

    pub(crate) fn set_tier(&mut self, tier: OpinionTier) {
        self.tier = tier;
    }

    pub(crate) fn adjust(&mut self, delta: i32) {
        self.adjustment = self.adjustment.saturating_add(delta);
    }

    /// Gains are never blocked; a cost needs at least its unmultiplied size
    /// in the pool.
    pub fn can_afford(&self, ledger: &ResourceLedger) -> bool {
        let amount = self.effective_amount();
        amount >= 0 || amount.unsigned_abs() <= ledger.amount(self.resource).max(0) as u32
    }

    /// Applies the multiplied amount and reports the change.
    pub fn apply(&self, ledger: &mut ResourceLedger) -> ResourceChange {
        self.apply_amount(ledger, self.multiplied_amount())
    }

    /// Applies at multiplier 1.0 regardless of the stored tier.
    pub fn apply_flat(&self, ledger: &mut ResourceLedger) -> ResourceChange {
        self.apply_amount(ledger, self.effective_amount())
    }

    /// Describes the change `apply` would make without making it.
    pub fn preview(&self, ledger: &ResourceLedger) -> ResourceChange {
        ResourceChange {
            resource: ledger.name(self.resource).to_string(),
            amount: self.multiplied_amount(),
        }
    }

    /// Describes the change `apply_flat` would make without making it.
    pub fn preview_flat(&self, ledger: &ResourceLedger) -> ResourceChange {
        ResourceChange {
            resource: ledger.name(self.resource).to_string(),
            amount: self.effective_amount(),
        }
    }

    fn apply_amount(&self, ledger: &mut ResourceLedger, amount: i32) -> ResourceChange {
        ledger.add(self.resource, amount);
        ResourceChange {
            resource: ledger.name(self.resource).to_string(),
            amount,
        }
    }
}

/// A resolved (or previewed) resource change, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceChange {
    pub resource: String,
    pub amount: i32,
}

impl core::fmt::Display for ResourceChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let verb = if self.amount >= 0 { "gained" } else { "lost" };
        write!(f, "{} {} {}.", self.amount, self.resource, verb)
    }
}
