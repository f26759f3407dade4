//! Resource ledger.
//!
//! Named integer pools (gold, food, soldiers, ...). Amounts are unbounded in
//! both directions; only [`crate::effect::ResourceEffect`] writes to them
//! during play.

use crate::link::EntityKind;
use crate::registry::{Registry, ResourceId};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub name: String,
    pub amount: i32,
}

/// Point-in-time view of one resource for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceEntry {
    pub name: String,
    pub amount: i32,
}

#[derive(Clone, Debug)]
pub struct ResourceLedger {
    resources: Registry<ResourceId, Resource>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self {
            resources: Registry::new(EntityKind::Resource),
        }
    }

    pub fn registry(&self) -> &Registry<ResourceId, Resource> {
        &self.resources
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<ResourceId, Resource> {
        &mut self.resources
    }

    pub fn amount(&self, id: ResourceId) -> i32 {
        self.resources.get(id).amount
    }

    pub fn name(&self, id: ResourceId) -> &str {
        &self.resources.get(id).name
    }

    /// Adds a signed delta. Saturates instead of wrapping on absurd content.
    pub(crate) fn add(&mut self, id: ResourceId, delta: i32) {
        let resource = self.resources.get_mut(id);
        resource.amount = resource.amount.saturating_add(delta);
    }

    pub fn snapshot(&self) -> Vec<ResourceEntry> {
        self.resources
            .iter()
            .map(|(_, resource)| ResourceEntry {
                name: resource.name.clone(),
                amount: resource.amount,
            })
            .collect()
    }
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_signed_deltas() {
        let mut ledger = ResourceLedger::new();
        let gold = ledger
            .registry_mut()
            .insert(
                "Gold",
                Resource {
                    name: "Gold".into(),
                    amount: 100,
                },
            )
            .unwrap();

        ledger.add(gold, -130);
        assert_eq!(ledger.amount(gold), -30);
        ledger.add(gold, 45);
        assert_eq!(ledger.amount(gold), 15);
        assert_eq!(
            ledger.snapshot(),
            vec![ResourceEntry {
                name: "Gold".into(),
                amount: 15
            }]
        );
    }
}
