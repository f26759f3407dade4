//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file.
    ///
    /// Keys left out of the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to parse config TOML {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        Ok(toml::from_str(content)?)
    }
}
