//! Data-driven content for the rules engine.
//!
//! This crate reads the static game content from RON/TOML data files:
//! - Races with their stat bonuses and starting perks (RON)
//! - Skills and perks (RON)
//! - Attacks and enemy templates (RON)
//! - Equipment (RON)
//! - Rules configuration (TOML)
//!
//! Everything is assembled into a validated [`rules_core::ContentCatalog`], which the
//! engine consumes read-only through its catalog oracle.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AttackLoader, ConfigLoader, ContentFactory, EnemyLoader, EquipmentLoader, LoadResult,
    RaceLoader, UnlockLoader,
};
