//! Deterministic simulation engine for a turn-based royal court.
//!
//! Each day the ruler receives a cohort of characters. Every character brings
//! a decision; the chosen option moves resources, feeds world events, rolls
//! gambles and shifts the character's opinion, which in turn scales the cost
//! and gain of the next decision they bring. Events fire at the end of the
//! day, items unlock through objectives.
//!
//! Content is defined by name in [`definition`], linked once into a
//! handle-based [`World`] by [`link::link`], and played through
//! [`engine::DayCycle`], which talks to the outside world only through
//! [`engine::PresentationSink`] and its input methods.
pub mod catalog;
pub mod config;
pub mod definition;
pub mod effect;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod items;
pub mod link;
pub mod objectives;
pub mod opinion;
pub mod registry;
pub mod resources;
pub mod selector;
pub mod traits;
pub mod world;

pub use catalog::{Character, Choice, Decision, Roster};
pub use config::{GameConfig, ThresholdMatch};
pub use definition::CatalogDefinition;
pub use effect::{ChanceEffect, EventEffect, OpinionEffect, ResourceEffect};
pub use engine::{
    ChoiceOutcome, ChoicePreview, CycleError, DayCycle, DaySummary, EventSummary, Input,
    InteractionView, Phase, PresentationSink,
};
pub use env::{PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use events::{EventEntity, EventKind, EventRegistry, Trigger};
pub use items::{ConstantEffect, Item, ItemEntry, ItemKind, ItemRegistry};
pub use link::{EntityKind, LinkError, link};
pub use objectives::{Objective, ObjectiveEntry, ObjectiveRegistry, ObjectiveTarget};
pub use opinion::{Opinion, OpinionTier};
pub use registry::{
    CharacterId, EventId, Handle, ItemId, Lookup, ObjectiveId, Registry, ResourceId, TraitId,
};
pub use resources::{Resource, ResourceEntry, ResourceLedger};
pub use selector::{SelectorError, Weighted};
pub use traits::{Trait, TraitRegistry, TraitRelation};
pub use world::World;
