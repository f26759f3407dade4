use crate::effect::{ChanceEffect, EventEffect, OpinionEffect, ResourceEffect};
use crate::registry::TraitId;
use crate::resources::ResourceLedger;

/// One option of a decision.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub description: String,
    /// Text shown once the choice has been taken.
    pub result: String,
    pub traits: Vec<TraitId>,
    pub resource_effects: Vec<ResourceEffect>,
    pub event_effects: Vec<EventEffect>,
    pub chance_effects: Vec<ChanceEffect>,
    pub opinion_effect: OpinionEffect,
}

impl Choice {
    pub fn new(description: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            result: result.into(),
            traits: Vec::new(),
            resource_effects: Vec::new(),
            event_effects: Vec::new(),
            chance_effects: Vec::new(),
            opinion_effect: OpinionEffect::default(),
        }
    }

    /// Every resource effect must be affordable. Chance branches are not
    /// checked: they may or may not happen.
    pub fn can_afford(&self, ledger: &ResourceLedger) -> bool {
        self.resource_effects
            .iter()
            .all(|effect| effect.can_afford(ledger))
    }
}
