//! Content factory for building a court from a data directory.

use std::path::{Path, PathBuf};

use game_core::{CatalogDefinition, GameConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Loads all court content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── traits.ron
/// ├── resources.ron
/// ├── events.ron
/// ├── items.ron
/// ├── objectives.ron
/// └── characters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the unlinked catalog from the RON registry files.
    pub fn load_catalog(&self) -> LoadResult<CatalogDefinition> {
        CatalogLoader::load(&self.data_dir)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
