//! The linked world: every registry the simulation reads and mutates.

use crate::catalog::Roster;
use crate::config::GameConfig;
use crate::events::EventRegistry;
use crate::items::{ItemEntry, ItemRegistry};
use crate::objectives::{ObjectiveEntry, ObjectiveRegistry};
use crate::resources::{ResourceEntry, ResourceLedger};
use crate::traits::TraitRegistry;

/// Output of [`crate::link::link`]. Owned by the day cycle while it runs.
#[derive(Clone, Debug)]
pub struct World {
    pub config: GameConfig,
    pub traits: TraitRegistry,
    pub resources: ResourceLedger,
    pub events: EventRegistry,
    pub items: ItemRegistry,
    pub objectives: ObjectiveRegistry,
    pub roster: Roster,
}

impl World {
    pub(crate) fn new(
        config: GameConfig,
        traits: TraitRegistry,
        resources: ResourceLedger,
        events: EventRegistry,
        items: ItemRegistry,
        objectives: ObjectiveRegistry,
        roster: Roster,
    ) -> Self {
        Self {
            config,
            traits,
            resources,
            events,
            items,
            objectives,
            roster,
        }
    }

    pub fn resource_snapshot(&self) -> Vec<ResourceEntry> {
        self.resources.snapshot()
    }

    pub fn item_snapshot(&self) -> Vec<ItemEntry> {
        self.items.snapshot(&self.objectives)
    }

    pub fn objective_snapshot(&self) -> Vec<ObjectiveEntry> {
        self.objectives.snapshot(&self.items)
    }
}
