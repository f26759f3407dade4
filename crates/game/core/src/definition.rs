//! Unlinked content definitions.
//!
//! These mirror the linked types but refer to other content by name. Loaders
//! produce a [`CatalogDefinition`]; [`crate::link::link`] turns it into a
//! [`crate::World`].

use crate::events::EventKind;
use crate::items::ConstantEffect;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub opposite: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceEffectDef {
    pub resource: String,
    pub amount: i32,
}

impl ResourceEffectDef {
    pub fn new(resource: impl Into<String>, amount: i32) -> Self {
        Self {
            resource: resource.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventEffectDef {
    pub event: String,
    pub amount: i32,
}

impl EventEffectDef {
    pub fn new(event: impl Into<String>, amount: i32) -> Self {
        Self {
            event: event.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChanceEffectDef {
    pub success_text: String,
    pub fail_text: String,
    /// Percent; anything above 100 is rejected while linking.
    pub chance: u32,
    pub on_success: Vec<ResourceEffectDef>,
    pub on_fail: Vec<ResourceEffectDef>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: EventKind,
    /// Starting counter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub counter: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<ResourceEffectDef>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKindDef {
    Daily(ResourceEffectDef),
    Constant(ConstantEffect),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: ItemKindDef,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveTargetDef {
    Resource { resource: String, threshold: i32 },
    People { threshold: u32 },
    Days { threshold: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub target: ObjectiveTargetDef,
    pub reward: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChoiceDef {
    pub description: String,
    pub result: String,
    pub traits: Vec<String>,
    pub resources: Vec<ResourceEffectDef>,
    pub events: Vec<EventEffectDef>,
    pub chances: Vec<ChanceEffectDef>,
    pub opinion: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub weight: u32,
    pub choices: Vec<ChoiceDef>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterDef {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub opinion: i32,
    pub weight: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: Vec<String>,
    pub decisions: Vec<DecisionDef>,
}

/// The complete unlinked content set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogDefinition {
    pub traits: Vec<TraitDef>,
    pub resources: Vec<ResourceDef>,
    pub events: Vec<EventDef>,
    pub items: Vec<ItemDef>,
    pub objectives: Vec<ObjectiveDef>,
    pub characters: Vec<CharacterDef>,
}
