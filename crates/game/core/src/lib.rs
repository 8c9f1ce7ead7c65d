//! Deterministic character and combat rules.
//!
//! `rules-core` defines what a character may become (stats, progression, skills, perks,
//! equipment), how attacks and status effects resolve, and how enemies pick their next
//! move. Content comes from an injected [`env::CatalogOracle`] and every roll from an
//! injected [`env::RandomSource`], so the same seed replays the same encounter.
//! Presentation code reads state through accessors and changes it through
//! [`engine::RulesEngine`] commands, which return structured reports.
pub mod character;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod equipment;
pub mod error;
pub mod gate;
pub mod npc;
pub mod progression;
pub mod race;
pub mod stats;
pub mod status;
pub mod unlock;

pub use character::{
    Character, CharacterBuilder, CharacterSnapshot, EquipReport, SNAPSHOT_VERSION, SnapshotError,
    UpgradeReport,
};
pub use combat::{AttackCategory, AttackDefinition, AttackOutcome, AttackReport, Combatant};
pub use config::{GameConfig, ProgressionConfig};
pub use engine::{
    CommandError, Encounter, EncounterStatus, RoundReport, RulesEngine, TurnAction, TurnReport,
};
pub use env::{CatalogError, CatalogOracle, ContentCatalog, PcgRng, RandomSource};
pub use equipment::{EquipmentBonuses, EquipmentDefinition, EquipmentSlot};
pub use error::{ErrorSeverity, GameError};
pub use gate::{GateFailure, Requirements};
pub use npc::{Enemy, EnemyMove, EnemyTemplate};
pub use progression::{LevelUpReport, PointPool, ProgressionLedger};
pub use race::{Race, RaceDefinition};
pub use stats::{Attribute, ResourceKind, ResourceMaximums, ResourceMeter, StatBlock};
pub use status::{ActiveEffects, StatusEffect, StatusKind};
pub use unlock::{UnlockDefinition, UnlockKind, UnlockProgress};
