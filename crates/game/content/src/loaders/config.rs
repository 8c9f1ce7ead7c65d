//! Rules configuration loader.

use std::path::Path;

use anyhow::Context;
use rules_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for the rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so an empty file yields
    /// [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig =
            toml::from_str(content).context("Failed to parse config TOML")?;
        anyhow::ensure!(
            config.progression.max_level >= 1,
            "progression.max_level must be at least 1"
        );
        anyhow::ensure!(
            config.progression.growth_rate.is_finite() && config.progression.growth_rate > 1.0,
            "progression.growth_rate must be greater than 1"
        );
        anyhow::ensure!(
            config.progression.base_experience >= 1,
            "progression.base_experience must be at least 1"
        );
        Ok(config)
    }
}
