use super::choice::Choice;
use crate::effect::ResourceEffect;
use crate::opinion::OpinionTier;
use crate::selector::Weighted;

/// A matter a character brings to court.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub name: String,
    pub description: String,
    pub weight: u32,
    pub choices: Vec<Choice>,
}

impl Decision {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        weight: u32,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
            choices,
        }
    }

    /// Direct resource effects of every choice. Chance branches are excluded.
    pub fn resource_effects_mut(&mut self) -> impl Iterator<Item = &mut ResourceEffect> {
        self.choices
            .iter_mut()
            .flat_map(|choice| choice.resource_effects.iter_mut())
    }

    /// Propagates the presenting character's tier to every choice.
    pub fn set_tier(&mut self, tier: OpinionTier) {
        for effect in self.resource_effects_mut() {
            effect.set_tier(tier);
        }
    }
}

impl Weighted for Decision {
    fn weight(&self) -> u32 {
        self.weight
    }

    fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }
}
