//! Character and choice traits.
//!
//! Traits are plain named labels with an optional opposite. Characters carry
//! traits describing their views; choices carry traits describing what the
//! choice stands for. Comparing the two drives the opinion adjustment after
//! every resolved choice.

use crate::link::EntityKind;
use crate::registry::{Registry, TraitId};

/// A named trait with an optional opposite, resolved after all traits exist.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait {
    pub name: String,
    pub description: String,
    pub opposite: Option<TraitId>,
}

/// How a choice trait relates to a character trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TraitRelation {
    /// Same trait: the character approves.
    Matching,
    /// The character trait's opposite: the character disapproves.
    Opposing,
    Neutral,
}

impl TraitRelation {
    /// Opinion change for one trait pair at the given step size.
    pub const fn opinion_delta(self, step: i32) -> i32 {
        match self {
            Self::Matching => step,
            Self::Opposing => -step,
            Self::Neutral => 0,
        }
    }
}

/// Registry of all traits, linked in two passes (names, then opposites).
#[derive(Clone, Debug)]
pub struct TraitRegistry {
    traits: Registry<TraitId, Trait>,
}

impl TraitRegistry {
    pub fn new() -> Self {
        Self {
            traits: Registry::new(EntityKind::Trait),
        }
    }

    pub fn registry(&self) -> &Registry<TraitId, Trait> {
        &self.traits
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<TraitId, Trait> {
        &mut self.traits
    }

    pub fn get(&self, id: TraitId) -> &Trait {
        self.traits.get(id)
    }

    pub fn name(&self, id: TraitId) -> &str {
        &self.traits.get(id).name
    }

    /// Relation of `choice_trait` as seen by a character holding `character_trait`.
    pub fn relation(&self, character_trait: TraitId, choice_trait: TraitId) -> TraitRelation {
        if character_trait == choice_trait {
            TraitRelation::Matching
        } else if self.traits.get(character_trait).opposite == Some(choice_trait) {
            TraitRelation::Opposing
        } else {
            TraitRelation::Neutral
        }
    }

    /// Summed opinion change over the full cross product of both trait lists.
    pub fn opinion_delta(&self, character_traits: &[TraitId], choice_traits: &[TraitId], step: i32) -> i32 {
        character_traits
            .iter()
            .flat_map(|held| {
                choice_traits
                    .iter()
                    .map(move |offered| self.relation(*held, *offered).opinion_delta(step))
            })
            .sum()
    }

    /// Strongest relation of a choice trait against a whole character:
    /// opposing wins over matching, matching over neutral.
    pub fn relation_to_character(&self, character_traits: &[TraitId], choice_trait: TraitId) -> TraitRelation {
        let mut relation = TraitRelation::Neutral;
        for held in character_traits {
            match self.relation(*held, choice_trait) {
                TraitRelation::Opposing => return TraitRelation::Opposing,
                TraitRelation::Matching => relation = TraitRelation::Matching,
                TraitRelation::Neutral => {}
            }
        }
        relation
    }
}

impl Default for TraitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> (TraitRegistry, TraitId, TraitId, TraitId) {
        let mut traits = TraitRegistry::new();
        let kind = traits
            .registry_mut()
            .insert(
                "Kind",
                Trait {
                    name: "Kind".into(),
                    description: "Cares for others".into(),
                    opposite: None,
                },
            )
            .unwrap();
        let cruel = traits
            .registry_mut()
            .insert(
                "Cruel",
                Trait {
                    name: "Cruel".into(),
                    description: "Enjoys suffering".into(),
                    opposite: None,
                },
            )
            .unwrap();
        let pious = traits
            .registry_mut()
            .insert(
                "Pious",
                Trait {
                    name: "Pious".into(),
                    description: "Devout".into(),
                    opposite: None,
                },
            )
            .unwrap();
        traits.registry_mut().get_mut(kind).opposite = Some(cruel);
        traits.registry_mut().get_mut(cruel).opposite = Some(kind);
        (traits, kind, cruel, pious)
    }

    #[test]
    fn relation_matches_and_opposes() {
        let (traits, kind, cruel, pious) = registry();
        assert_eq!(traits.relation(kind, kind), TraitRelation::Matching);
        assert_eq!(traits.relation(kind, cruel), TraitRelation::Opposing);
        assert_eq!(traits.relation(kind, pious), TraitRelation::Neutral);
        // A trait without an opposite never opposes anything.
        assert_eq!(traits.relation(pious, kind), TraitRelation::Neutral);
    }

    #[test]
    fn opinion_delta_compounds_over_cross_product() {
        let (traits, kind, cruel, pious) = registry();
        // kind+pious character, choice offering kind+pious: two matches.
        assert_eq!(traits.opinion_delta(&[kind, pious], &[kind, pious], 5), 10);
        // kind character, choice offering cruel twice: two oppositions.
        assert_eq!(traits.opinion_delta(&[kind], &[cruel, cruel], 5), -10);
        // mixed cancels out
        assert_eq!(traits.opinion_delta(&[kind], &[kind, cruel], 5), 0);
        assert_eq!(traits.opinion_delta(&[], &[kind], 5), 0);
    }

    #[test]
    fn relation_to_character_prefers_opposition() {
        let (traits, kind, cruel, pious) = registry();
        assert_eq!(
            traits.relation_to_character(&[pious, kind], cruel),
            TraitRelation::Opposing
        );
        assert_eq!(
            traits.relation_to_character(&[pious, kind], kind),
            TraitRelation::Matching
        );
        assert_eq!(traits.relation_to_character(&[cruel], pious), TraitRelation::Neutral);
    }
}
