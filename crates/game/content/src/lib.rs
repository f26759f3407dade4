//! Loaders for the court's static content.
//!
//! A data directory holds one TOML file for the tunable rules and one RON
//! file per registry:
//! - `config.toml` (cohort size, reweighting step, threshold mode, seed)
//! - `traits.ron`, `resources.ron`, `events.ron`
//! - `items.ron`, `objectives.ron`, `characters.ron`
//!
//! Loaders produce the unlinked [`game_core::CatalogDefinition`]. Resolving
//! names into handles is left to [`game_core::link`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
