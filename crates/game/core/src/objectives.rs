//! Objectives: one-shot goals that unlock items.

use crate::config::ThresholdMatch;
use crate::items::ItemRegistry;
use crate::link::EntityKind;
use crate::registry::{ItemId, ObjectiveId, Registry, ResourceId};
use crate::resources::ResourceLedger;

/// What an objective measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveTarget {
    /// The resource amount reaches the threshold (`>=`).
    Resource { resource: ResourceId, threshold: i32 },
    /// Total people served; compared per [`ThresholdMatch`].
    People { threshold: u32 },
    /// The day counter lands exactly on the threshold.
    Days { threshold: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub name: String,
    pub description: String,
    pub target: ObjectiveTarget,
    pub reward: ItemId,
    pub completed: bool,
}

/// Counters an objective check is evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub days: u32,
    pub people_served: u32,
    pub people_match: ThresholdMatch,
}

impl Objective {
    pub fn is_met(&self, progress: Progress, ledger: &ResourceLedger) -> bool {
        match self.target {
            ObjectiveTarget::Resource {
                resource,
                threshold,
            } => ledger.amount(resource) >= threshold,
            ObjectiveTarget::People { threshold } => progress
                .people_match
                .matches(progress.people_served, threshold),
            ObjectiveTarget::Days { threshold } => progress.days == threshold,
        }
    }
}

/// Point-in-time view of one objective for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveEntry {
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub reward: String,
}

impl core::fmt::Display for ObjectiveEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}\n{}\n", self.name, self.description)?;
        if self.completed {
            f.write_str("Completed!")
        } else {
            write!(f, "Reward: {}", self.reward)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ObjectiveRegistry {
    objectives: Registry<ObjectiveId, Objective>,
}

impl ObjectiveRegistry {
    pub fn new() -> Self {
        Self {
            objectives: Registry::new(EntityKind::Objective),
        }
    }

    pub fn registry(&self) -> &Registry<ObjectiveId, Objective> {
        &self.objectives
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<ObjectiveId, Objective> {
        &mut self.objectives
    }

    pub fn get(&self, id: ObjectiveId) -> &Objective {
        self.objectives.get(id)
    }

    /// Completes every pending objective whose condition holds and grants its
    /// reward. Completed objectives are never checked again.
    pub fn check_all(
        &mut self,
        progress: Progress,
        ledger: &ResourceLedger,
        items: &mut ItemRegistry,
    ) -> Vec<ObjectiveId> {
        let mut completed = Vec::new();
        for (id, objective) in self.objectives.iter_mut() {
            if objective.completed || !objective.is_met(progress, ledger) {
                continue;
            }
            objective.completed = true;
            items.grant(objective.reward);
            tracing::info!(
                objective = %objective.name,
                reward = %items.get(objective.reward).name,
                "objective completed"
            );
            completed.push(id);
        }
        completed
    }

    pub fn snapshot(&self, items: &ItemRegistry) -> Vec<ObjectiveEntry> {
        self.objectives
            .iter()
            .map(|(_, objective)| ObjectiveEntry {
                name: objective.name.clone(),
                description: objective.description.clone(),
                completed: objective.completed,
                reward: items.get(objective.reward).name.clone(),
            })
            .collect()
    }
}

impl Default for ObjectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
