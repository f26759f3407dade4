//! Court catalog loader.
//!
//! Each registry lives in its own RON file as a plain list of definitions:
//!
//! ```ron
//! [
//!     (name: "Kind", description: "Cares for the weak", opposite: Some("Cruel")),
//!     (name: "Cruel", description: "Rules by fear", opposite: Some("Kind")),
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use game_core::CatalogDefinition;
use serde::de::DeserializeOwned;

use crate::loaders::{LoadResult, read_file};

pub const TRAITS_FILE: &str = "traits.ron";
pub const RESOURCES_FILE: &str = "resources.ron";
pub const EVENTS_FILE: &str = "events.ron";
pub const ITEMS_FILE: &str = "items.ron";
pub const OBJECTIVES_FILE: &str = "objectives.ron";
pub const CHARACTERS_FILE: &str = "characters.ron";

/// Loader for the unlinked catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load every registry file from `dir` into one [`CatalogDefinition`].
    pub fn load(dir: &Path) -> LoadResult<CatalogDefinition> {
        let catalog = CatalogDefinition {
            traits: Self::load_list(&dir.join(TRAITS_FILE))?,
            resources: Self::load_list(&dir.join(RESOURCES_FILE))?,
            events: Self::load_list(&dir.join(EVENTS_FILE))?,
            items: Self::load_list(&dir.join(ITEMS_FILE))?,
            objectives: Self::load_list(&dir.join(OBJECTIVES_FILE))?,
            characters: Self::load_list(&dir.join(CHARACTERS_FILE))?,
        };
        Ok(catalog)
    }

    /// Load a single RON list of definitions.
    pub fn load_list<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
        let content = read_file(path)?;
        Self::parse_list(&content).with_context(|| format!("Failed to parse RON {}", path.display()))
    }

    pub fn parse_list<T: DeserializeOwned>(content: &str) -> LoadResult<Vec<T>> {
        Ok(ron::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use game_core::definition::{CharacterDef, EventDef, ItemDef, ItemKindDef, ObjectiveDef, TraitDef};
    use game_core::{ConstantEffect, EventKind};

    use super::*;

    #[test]
    fn traits_parse_with_optional_opposite() {
        let traits: Vec<TraitDef> = CatalogLoader::parse_list(
            r#"[
                (name: "Kind", description: "Cares for the weak", opposite: Some("Cruel")),
                (name: "Pious"),
            ]"#,
        )
        .unwrap();
        assert_eq!(traits[0].opposite.as_deref(), Some("Cruel"));
        assert_eq!(traits[1].opposite, None);
        assert!(traits[1].description.is_empty());
    }

    #[test]
    fn event_kinds_parse() {
        let events: Vec<EventDef> = CatalogLoader::parse_list(
            r#"[
                (name: "Riot", kind: Chance, effects: [(resource: "Gold", amount: -50)]),
                (name: "Harvest", kind: Goal(goal: 100), counter: 20),
            ]"#,
        )
        .unwrap();
        assert_eq!(events[0].kind, EventKind::Chance);
        assert_eq!(events[0].counter, 0);
        assert_eq!(events[1].kind, EventKind::Goal { goal: 100 });
        assert_eq!(events[1].counter, 20);
    }

    #[test]
    fn constant_items_name_their_behavior() {
        let items: Vec<ItemDef> = CatalogLoader::parse_list(
            r#"[
                (name: "Excalibur", kind: Constant(OpinionBonus(10))),
                (name: "Granary", kind: Daily((resource: "Food", amount: 5))),
            ]"#,
        )
        .unwrap();
        assert_eq!(items[0].kind, ItemKindDef::Constant(ConstantEffect::OpinionBonus(10)));
        assert!(matches!(items[1].kind, ItemKindDef::Daily(ref effect) if effect.amount == 5));
    }

    #[test]
    fn objective_targets_parse() {
        let objectives: Vec<ObjectiveDef> = CatalogLoader::parse_list(
            r#"[
                (name: "Treasury", target: Resource(resource: "Gold", threshold: 2000), reward: "Crown"),
                (name: "Audience", target: People(threshold: 25), reward: "Excalibur"),
            ]"#,
        )
        .unwrap();
        assert_eq!(objectives.len(), 2);
        assert_eq!(objectives[1].reward, "Excalibur");
    }

    #[test]
    fn choices_default_every_effect_list() {
        let characters: Vec<CharacterDef> = CatalogLoader::parse_list(
            r#"[
                (
                    name: "Jester",
                    weight: 10,
                    decisions: [
                        (name: "Joke", weight: 10, choices: [(description: "Laugh", result: "He bows.")]),
                    ],
                ),
            ]"#,
        )
        .unwrap();
        let choice = &characters[0].decisions[0].choices[0];
        assert!(choice.resources.is_empty());
        assert!(choice.chances.is_empty());
        assert_eq!(choice.opinion, 0);
        assert_eq!(characters[0].opinion, 0);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TRAITS_FILE);
        std::fs::write(&path, "[ (name: ) ]").unwrap();

        let err = CatalogLoader::load_list::<TraitDef>(&path).unwrap_err();
        assert!(format!("{err:#}").contains(TRAITS_FILE));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogLoader::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(TRAITS_FILE));
    }
}
