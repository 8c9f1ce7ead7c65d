//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into core definitions; [`ContentFactory`] ties
//! them together into a validated catalog.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{AttackLoader, EnemyLoader, EquipmentLoader, RaceLoader, UnlockLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Reads and parses a RON file.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .with_context(|| format!("Failed to parse {} RON in {}", what, path.display()))
}
