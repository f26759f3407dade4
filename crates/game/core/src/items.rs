//! Unlockable items.
//!
//! Daily items fire once at the end of every day. Constant items modify each
//! interaction while it lasts: they are enabled after the decision is picked
//! and disabled once the choice has resolved, so nothing stacks across
//! interactions.

use crate::catalog::Decision;
use crate::effect::{ResourceChange, ResourceEffect};
use crate::link::EntityKind;
use crate::objectives::ObjectiveRegistry;
use crate::opinion::Opinion;
use crate::registry::{ItemId, ObjectiveId, Registry};
use crate::resources::ResourceLedger;

/// Behavior of a constant item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantEffect {
    /// Flat opinion change on the current character.
    ///
    /// Only the change that survives clamping is reverted afterwards, not the
    /// full amount, so a character at the bound does not lose opinion each
    /// time the bonus is switched off.
    OpinionBonus(i32),
    /// Flat change to every resource effect of every choice on offer.
    ChoiceAmountDelta(i32),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Daily(ResourceEffect),
    Constant(ConstantEffect),
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily(_) => "daily",
            Self::Constant(_) => "constant",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    pub owned: bool,
    /// Objective whose reward this item is, set while linking objectives.
    pub unlocked_by: Option<ObjectiveId>,
}

/// Point-in-time view of one item for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntry {
    pub name: String,
    pub description: String,
    pub kind: String,
    pub owned: bool,
    pub unlocked_by: Option<String>,
}

impl core::fmt::Display for ItemEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.owned {
            return write!(f, "{}\n{}", self.name, self.description);
        }
        match &self.unlocked_by {
            Some(objective) => write!(f, "Locked!\nComplete: {objective}"),
            None => f.write_str("Locked!"),
        }
    }
}

/// Deltas applied by the constant items for the current interaction.
///
/// Returned by [`ItemRegistry::enable_constant`] and consumed by
/// [`ActiveModifiers::disable`], which undoes exactly what was done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct ActiveModifiers {
    opinion: i32,
    choice_delta: i32,
}

impl ActiveModifiers {
    pub fn opinion(&self) -> i32 {
        self.opinion
    }

    pub fn choice_delta(&self) -> i32 {
        self.choice_delta
    }

    pub fn disable(self, opinion: &mut Opinion, decision: &mut Decision) {
        if self.opinion != 0 {
            opinion.add(-self.opinion);
        }
        if self.choice_delta != 0 {
            for effect in decision.resource_effects_mut() {
                effect.adjust(-self.choice_delta);
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ItemRegistry {
    items: Registry<ItemId, Item>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: Registry::new(EntityKind::Item),
        }
    }

    pub fn registry(&self) -> &Registry<ItemId, Item> {
        &self.items
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<ItemId, Item> {
        &mut self.items
    }

    pub fn get(&self, id: ItemId) -> &Item {
        self.items.get(id)
    }

    /// Marks an item as owned. Returns `false` if it already was.
    pub fn grant(&mut self, id: ItemId) -> bool {
        let item = self.items.get_mut(id);
        let newly = !item.owned;
        item.owned = true;
        newly
    }

    /// Applies every owned daily item at multiplier 1.0.
    pub fn apply_daily(&self, ledger: &mut ResourceLedger) -> Vec<ResourceChange> {
        self.items
            .iter()
            .filter(|(_, item)| item.owned)
            .filter_map(|(_, item)| match &item.kind {
                ItemKind::Daily(effect) => Some(effect.apply_flat(ledger)),
                ItemKind::Constant(_) => None,
            })
            .collect()
    }

    fn owned_constants(&self) -> impl Iterator<Item = ConstantEffect> + '_ {
        self.items.iter().filter_map(|(_, item)| match item.kind {
            ItemKind::Constant(effect) if item.owned => Some(effect),
            _ => None,
        })
    }

    /// Applies every owned constant item to the current interaction.
    pub fn enable_constant(&self, opinion: &mut Opinion, decision: &mut Decision) -> ActiveModifiers {
        let mut active = ActiveModifiers::default();
        for effect in self.owned_constants() {
            match effect {
                ConstantEffect::OpinionBonus(amount) => {
                    active.opinion += opinion.add(amount);
                }
                ConstantEffect::ChoiceAmountDelta(amount) => {
                    for resource in decision.resource_effects_mut() {
                        resource.adjust(amount);
                    }
                    active.choice_delta += amount;
                }
            }
        }
        if active != ActiveModifiers::default() {
            tracing::debug!(
                opinion = active.opinion,
                choice_delta = active.choice_delta,
                "constant items enabled"
            );
        }
        active
    }

    pub fn snapshot(&self, objectives: &ObjectiveRegistry) -> Vec<ItemEntry> {
        self.items
            .iter()
            .map(|(_, item)| ItemEntry {
                name: item.name.clone(),
                description: item.description.clone(),
                kind: item.kind.label().to_string(),
                owned: item.owned,
                unlocked_by: item.unlocked_by.map(|id| objectives.get(id).name.clone()),
            })
            .collect()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
