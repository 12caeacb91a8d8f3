//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every field is optional in the file; missing ones keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    /// Load from `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> LoadResult<GameConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(GameConfig::default()),
        }
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)?;
        // NaN fails the comparison too.
        if !(config.attack_cost > 0.0 && config.door_open_cost > 0.0) {
            anyhow::bail!("action costs must be positive");
        }
        Ok(config)
    }
}
