//! The one-time link pass: name-based definitions in, handle-based world out.
//!
//! Registries are built leaf first (traits, resources, events, items,
//! objectives, characters) so every reference resolves against a registry
//! that is already complete. Trait opposites refer to traits cyclically and
//! are resolved in a second pass over the finished trait registry.
//!
//! Any failure aborts linking; there is no partially linked world.
mod error;

pub use error::{EntityKind, LinkError};

use crate::catalog::{Character, Choice, Decision, Roster};
use crate::config::GameConfig;
use crate::definition::{
    CatalogDefinition, ChanceEffectDef, CharacterDef, ChoiceDef, DecisionDef, ItemKindDef,
    ObjectiveTargetDef, ResourceEffectDef,
};
use crate::effect::{ChanceEffect, EventEffect, OpinionEffect, ResourceEffect};
use crate::events::{EventEntity, EventRegistry};
use crate::items::{Item, ItemKind, ItemRegistry};
use crate::objectives::{Objective, ObjectiveRegistry, ObjectiveTarget};
use crate::resources::{Resource, ResourceLedger};
use crate::traits::{Trait, TraitRegistry};
use crate::world::World;

/// Links a full content set into a playable world.
///
/// # Errors
///
/// Returns the first [`LinkError`] found: an unresolved or duplicate name, a
/// character without decisions, a decision without choices, a zero weight,
/// a chance outside `[0, 100]`, or a cohort size the roster cannot fill.
pub fn link(definition: &CatalogDefinition, config: &GameConfig) -> Result<World, LinkError> {
    let traits = link_traits(definition)?;
    let resources = link_resources(definition)?;
    let events = link_events(definition, &resources)?;
    let mut items = link_items(definition, &resources)?;
    let objectives = link_objectives(definition, &resources, &mut items)?;
    let roster = link_roster(definition, &traits, &resources, &events)?;

    if config.cohort_size == 0 {
        return Err(LinkError::EmptyCohort);
    }
    if config.cohort_size > roster.len() {
        return Err(LinkError::CohortTooLarge {
            cohort_size: config.cohort_size,
            roster: roster.len(),
        });
    }

    tracing::debug!(
        traits = traits.registry().len(),
        resources = resources.registry().len(),
        events = events.registry().len(),
        items = items.registry().len(),
        objectives = objectives.registry().len(),
        characters = roster.len(),
        "content linked"
    );

    Ok(World::new(
        config.clone(),
        traits,
        resources,
        events,
        items,
        objectives,
        roster,
    ))
}

fn link_traits(definition: &CatalogDefinition) -> Result<TraitRegistry, LinkError> {
    let mut traits = TraitRegistry::new();
    for def in &definition.traits {
        traits.registry_mut().insert(
            &def.name,
            Trait {
                name: def.name.clone(),
                description: def.description.clone(),
                opposite: None,
            },
        )?;
    }

    // Second pass: every trait exists now, so opposites can refer to any of them.
    for def in &definition.traits {
        let Some(opposite) = def.opposite.as_deref() else {
            continue;
        };
        let referenced_by = format!("trait '{}'", def.name);
        let opposite = traits.registry().require(opposite, &referenced_by)?;
        let id = traits.registry().require(&def.name, &referenced_by)?;
        traits.registry_mut().get_mut(id).opposite = Some(opposite);
    }
    Ok(traits)
}

fn link_resources(definition: &CatalogDefinition) -> Result<ResourceLedger, LinkError> {
    let mut ledger = ResourceLedger::new();
    for def in &definition.resources {
        ledger.registry_mut().insert(
            &def.name,
            Resource {
                name: def.name.clone(),
                amount: def.amount,
            },
        )?;
    }
    Ok(ledger)
}

fn resource_effects(
    defs: &[ResourceEffectDef],
    resources: &ResourceLedger,
    referenced_by: &str,
) -> Result<Vec<ResourceEffect>, LinkError> {
    defs.iter()
        .map(|def| {
            let resource = resources.registry().require(&def.resource, referenced_by)?;
            Ok(ResourceEffect::new(resource, def.amount))
        })
        .collect()
}

fn link_events(
    definition: &CatalogDefinition,
    resources: &ResourceLedger,
) -> Result<EventRegistry, LinkError> {
    let mut events = EventRegistry::new();
    for def in &definition.events {
        let referenced_by = format!("event '{}'", def.name);
        let effects = resource_effects(&def.effects, resources, &referenced_by)?;
        events.registry_mut().insert(
            &def.name,
            EventEntity::new(&def.name, &def.description, def.kind, def.counter, effects),
        )?;
    }
    Ok(events)
}

fn link_items(
    definition: &CatalogDefinition,
    resources: &ResourceLedger,
) -> Result<ItemRegistry, LinkError> {
    let mut items = ItemRegistry::new();
    for def in &definition.items {
        let referenced_by = format!("item '{}'", def.name);
        let kind = match &def.kind {
            ItemKindDef::Daily(effect) => {
                let resource = resources.registry().require(&effect.resource, &referenced_by)?;
                ItemKind::Daily(ResourceEffect::new(resource, effect.amount))
            }
            ItemKindDef::Constant(effect) => ItemKind::Constant(*effect),
        };
        items.registry_mut().insert(
            &def.name,
            Item {
                name: def.name.clone(),
                description: def.description.clone(),
                kind,
                owned: false,
                unlocked_by: None,
            },
        )?;
    }
    Ok(items)
}

/// Links objectives and records on each reward item which objective unlocks it.
fn link_objectives(
    definition: &CatalogDefinition,
    resources: &ResourceLedger,
    items: &mut ItemRegistry,
) -> Result<ObjectiveRegistry, LinkError> {
    let mut objectives = ObjectiveRegistry::new();
    for def in &definition.objectives {
        let referenced_by = format!("objective '{}'", def.name);
        let target = match &def.target {
            ObjectiveTargetDef::Resource {
                resource,
                threshold,
            } => ObjectiveTarget::Resource {
                resource: resources.registry().require(resource, &referenced_by)?,
                threshold: *threshold,
            },
            ObjectiveTargetDef::People { threshold } => ObjectiveTarget::People {
                threshold: *threshold,
            },
            ObjectiveTargetDef::Days { threshold } => ObjectiveTarget::Days {
                threshold: *threshold,
            },
        };
        let reward = items.registry().require(&def.reward, &referenced_by)?;
        let id = objectives.registry_mut().insert(
            &def.name,
            Objective {
                name: def.name.clone(),
                description: def.description.clone(),
                target,
                reward,
                completed: false,
            },
        )?;
        items.registry_mut().get_mut(reward).unlocked_by = Some(id);
    }
    Ok(objectives)
}

fn link_roster(
    definition: &CatalogDefinition,
    traits: &TraitRegistry,
    resources: &ResourceLedger,
    events: &EventRegistry,
) -> Result<Roster, LinkError> {
    let mut roster = Roster::new();
    for def in &definition.characters {
        let character = link_character(def, traits, resources, events)?;
        roster.registry_mut().insert(&def.name, character)?;
    }
    Ok(roster)
}

fn link_character(
    def: &CharacterDef,
    traits: &TraitRegistry,
    resources: &ResourceLedger,
    events: &EventRegistry,
) -> Result<Character, LinkError> {
    let owner = format!("character '{}'", def.name);
    if def.weight == 0 {
        return Err(LinkError::ZeroWeight {
            kind: EntityKind::Character,
            name: def.name.clone(),
        });
    }
    if def.decisions.is_empty() {
        return Err(LinkError::EmptyPool {
            kind: EntityKind::Decision,
            owner,
        });
    }

    let mut character = Character::new(&def.name, def.opinion, def.weight);
    character.traits = def
        .traits
        .iter()
        .map(|name| traits.registry().require(name, &owner))
        .collect::<Result<_, _>>()?;
    character.decisions = def
        .decisions
        .iter()
        .map(|decision| link_decision(decision, &owner, traits, resources, events))
        .collect::<Result<_, _>>()?;
    Ok(character)
}

fn link_decision(
    def: &DecisionDef,
    owner: &str,
    traits: &TraitRegistry,
    resources: &ResourceLedger,
    events: &EventRegistry,
) -> Result<Decision, LinkError> {
    let path = format!("decision '{}' of {owner}", def.name);
    if def.weight == 0 {
        return Err(LinkError::ZeroWeight {
            kind: EntityKind::Decision,
            name: def.name.clone(),
        });
    }
    if def.choices.is_empty() {
        return Err(LinkError::EmptyPool {
            kind: EntityKind::Choice,
            owner: path,
        });
    }

    let choices = def
        .choices
        .iter()
        .map(|choice| link_choice(choice, &path, traits, resources, events))
        .collect::<Result<_, _>>()?;
    Ok(Decision::new(&def.name, &def.description, def.weight, choices))
}

fn link_choice(
    def: &ChoiceDef,
    decision: &str,
    traits: &TraitRegistry,
    resources: &ResourceLedger,
    events: &EventRegistry,
) -> Result<Choice, LinkError> {
    let path = format!("choice '{}' in {decision}", def.description);

    let mut choice = Choice::new(&def.description, &def.result);
    choice.traits = def
        .traits
        .iter()
        .map(|name| traits.registry().require(name, &path))
        .collect::<Result<_, _>>()?;
    choice.resource_effects = resource_effects(&def.resources, resources, &path)?;
    choice.event_effects = def
        .events
        .iter()
        .map(|effect| {
            let event = events.registry().require(&effect.event, &path)?;
            Ok(EventEffect::new(event, effect.amount))
        })
        .collect::<Result<_, LinkError>>()?;
    choice.chance_effects = def
        .chances
        .iter()
        .map(|chance| link_chance(chance, resources, &path))
        .collect::<Result<_, _>>()?;
    choice.opinion_effect = OpinionEffect::new(def.opinion);
    Ok(choice)
}

fn link_chance(
    def: &ChanceEffectDef,
    resources: &ResourceLedger,
    referenced_by: &str,
) -> Result<ChanceEffect, LinkError> {
    let chance = u8::try_from(def.chance)
        .ok()
        .filter(|chance| *chance <= 100)
        .ok_or_else(|| LinkError::ChanceOutOfRange {
            chance: def.chance,
            referenced_by: referenced_by.to_string(),
        })?;
    Ok(ChanceEffect::new(
        &def.success_text,
        &def.fail_text,
        chance,
        resource_effects(&def.on_success, resources, referenced_by)?,
        resource_effects(&def.on_fail, resources, referenced_by)?,
    ))
}
