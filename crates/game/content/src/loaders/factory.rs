//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rules_core::{ContentCatalog, GameConfig, GameError};

use crate::loaders::{
    AttackLoader, ConfigLoader, EnemyLoader, EquipmentLoader, LoadResult, RaceLoader,
    UnlockLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── races.ron
/// ├── skills.ron
/// ├── perks.ron
/// ├── attacks.ron
/// ├── enemies.ron
/// └── equipment.ron
/// ```
///
/// Every file is optional. A missing file contributes nothing (or the default config);
/// a present but malformed file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const RACES_FILE: &'static str = "races.ron";
    pub const SKILLS_FILE: &'static str = "skills.ron";
    pub const PERKS_FILE: &'static str = "perks.ron";
    pub const ATTACKS_FILE: &'static str = "attacks.ron";
    pub const ENEMIES_FILE: &'static str = "enemies.ron";
    pub const EQUIPMENT_FILE: &'static str = "equipment.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rules configuration from `config.toml`, or the defaults if it is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing(Self::CONFIG_FILE) {
            Some(path) => ConfigLoader::load(&path),
            None => Ok(GameConfig::default()),
        }
    }

    /// Load every definition file and build a validated catalog.
    pub fn load_catalog(&self) -> LoadResult<ContentCatalog> {
        let races = self.load_list(Self::RACES_FILE, RaceLoader::load)?;
        let skills = self.load_list(Self::SKILLS_FILE, UnlockLoader::load_skills)?;
        let perks = self.load_list(Self::PERKS_FILE, UnlockLoader::load_perks)?;
        let attacks = self.load_list(Self::ATTACKS_FILE, AttackLoader::load)?;
        let enemies = self.load_list(Self::ENEMIES_FILE, EnemyLoader::load)?;
        let equipment = self.load_list(Self::EQUIPMENT_FILE, EquipmentLoader::load)?;

        ContentCatalog::builder()
            .races(races)
            .skills(skills)
            .perks(perks)
            .attacks(attacks)
            .enemies(enemies)
            .equipment_items(equipment)
            .build()
            .inspect_err(|err| {
                tracing::error!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "content catalog rejected: {err}"
                );
            })
            .with_context(|| format!("Invalid content in {}", self.data_dir.display()))
    }

    /// Load both the configuration and the catalog.
    pub fn load_all(&self) -> LoadResult<(GameConfig, ContentCatalog)> {
        Ok((self.load_config()?, self.load_catalog()?))
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(file);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(path = %path.display(), "content file not found, skipping");
            None
        }
    }

    fn load_list<T>(
        &self,
        file: &str,
        load: impl FnOnce(&Path) -> LoadResult<Vec<T>>,
    ) -> LoadResult<Vec<T>> {
        match self.existing(file) {
            Some(path) => load(&path),
            None => Ok(Vec::new()),
        }
    }
}
