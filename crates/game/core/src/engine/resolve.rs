//! Choice previews and choice resolution.

use super::presentation::{ChoiceOutcome, ChoicePreview, InteractionView, TraitTag, TraitView};
use crate::catalog::{Character, Choice};
use crate::env::RngOracle;
use crate::events::EventRegistry;
use crate::registry::CharacterId;
use crate::resources::ResourceLedger;
use crate::traits::TraitRegistry;
use crate::world::World;

/// Position of the current interaction inside the day.
#[derive(Clone, Copy, Debug)]
pub(super) struct Slot {
    pub day: u32,
    pub position: usize,
    pub cohort_size: usize,
}

pub(super) fn interaction_view(
    world: &World,
    character: CharacterId,
    decision: usize,
    slot: Slot,
) -> InteractionView {
    let character = world.roster.get(character);
    let decision = &character.decisions[decision];
    InteractionView {
        day: slot.day,
        position: slot.position,
        cohort_size: slot.cohort_size,
        character: character.name.clone(),
        opinion: character.opinion.value(),
        tier: character.tier(),
        traits: character
            .traits
            .iter()
            .map(|id| {
                let held = world.traits.get(*id);
                TraitView {
                    name: held.name.clone(),
                    description: held.description.clone(),
                }
            })
            .collect(),
        decision: decision.name.clone(),
        description: decision.description.clone(),
        choices: decision
            .choices
            .iter()
            .enumerate()
            .map(|(index, choice)| preview_choice(world, character, index, choice))
            .collect(),
    }
}

fn preview_choice(world: &World, character: &Character, index: usize, choice: &Choice) -> ChoicePreview {
    ChoicePreview {
        index,
        description: choice.description.clone(),
        traits: choice
            .traits
            .iter()
            .map(|id| TraitTag {
                name: world.traits.name(*id).to_string(),
                relation: world.traits.relation_to_character(&character.traits, *id),
            })
            .collect(),
        resources: choice
            .resource_effects
            .iter()
            .map(|effect| effect.preview(&world.resources))
            .collect(),
        events: choice
            .event_effects
            .iter()
            .map(|effect| effect.preview(&world.events))
            .collect(),
        chances: choice
            .chance_effects
            .iter()
            .map(|effect| effect.preview(&world.resources))
            .collect(),
        affordable: choice.can_afford(&world.resources),
    }
}

/// Mutable pieces of the world a resolution touches.
pub(super) struct Resolver<'w> {
    pub traits: &'w TraitRegistry,
    pub resources: &'w mut ResourceLedger,
    pub events: &'w mut EventRegistry,
    pub trait_step: i32,
}

impl Resolver<'_> {
    /// Applies one choice in fixed order: resource effects, event effects,
    /// chance effects, the opinion effect, then the trait comparison.
    pub fn resolve(
        &mut self,
        character: &mut Character,
        decision: usize,
        choice: usize,
        rng: &mut dyn RngOracle,
    ) -> ChoiceOutcome {
        let Character {
            name,
            opinion,
            traits: held,
            decisions,
            ..
        } = character;
        let choice = &mut decisions[decision].choices[choice];

        let resources = choice
            .resource_effects
            .iter()
            .map(|effect| effect.apply(self.resources))
            .collect();
        let events = choice
            .event_effects
            .iter()
            .map(|effect| effect.apply(self.events))
            .collect();
        let chances = choice
            .chance_effects
            .iter_mut()
            .map(|effect| effect.apply(self.resources, rng))
            .collect();

        let mut opinion_change = choice.opinion_effect.apply(opinion);
        let trait_delta = self
            .traits
            .opinion_delta(held, &choice.traits, self.trait_step);
        opinion_change += opinion.add(trait_delta);

        tracing::debug!(
            character = %name,
            choice = %choice.description,
            opinion = opinion.value(),
            opinion_change,
            "choice resolved"
        );

        ChoiceOutcome {
            character: name.clone(),
            result: choice.result.clone(),
            chances,
            resources,
            events,
            opinion_change,
        }
    }
}
