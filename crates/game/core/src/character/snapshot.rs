//! Flat, versioned save record for a character.
//!
//! Only authored state is stored: base stats, progression, ranks, equipped item ids,
//! current resources and active effects. Bonuses are never stored; restoring rebuilds
//! them from the catalog (race + ranks × per-rank bonus + equipped items) and
//! recomputes maximums.

use std::collections::BTreeMap;

use super::Character;
use crate::config::ProgressionConfig;
use crate::env::CatalogOracle;
use crate::equipment::EquipmentSlot;
use crate::error::{ErrorSeverity, GameError};
use crate::progression::{ExperienceCurve, PointPool, ProgressionLedger};
use crate::race::Race;
use crate::stats::{Attribute, ResourceMeter, ResourceMeters};
use crate::status::{ActiveEffects, StatusEffect};
use crate::unlock::{UnlockKind, UnlockProgress};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot {
    pub version: u32,
    pub name: String,
    pub race: Race,
    pub base_stats: BTreeMap<Attribute, i32>,
    pub level: u32,
    pub experience: u64,
    pub stat_points: u32,
    pub perk_points: u32,
    pub skill_points: u32,
    pub skill_ranks: BTreeMap<String, u32>,
    pub perk_ranks: BTreeMap<String, u32>,
    pub equipment: BTreeMap<EquipmentSlot, String>,
    pub health: i32,
    pub energy: i32,
    pub magic: i32,
    pub friendship: i32,
    pub effects: Vec<StatusEffect>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot version {found} is not supported (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    /// The saved experience already pays for the next level.
    #[error("level {level} with {experience} experience should have leveled (needs {required})")]
    PendingLevelUp {
        level: u32,
        experience: u64,
        required: u64,
    },

    #[error("unknown {kind} '{id}'")]
    UnknownUnlock { kind: UnlockKind, id: String },

    #[error("'{id}' rank {rank} exceeds max rank {max_rank}")]
    RankOutOfRange { id: String, rank: u32, max_rank: u32 },

    #[error("unknown equipment '{0}'")]
    UnknownEquipment(String),

    #[error("equipment '{item}' does not fit slot {slot}")]
    SlotMismatch { item: String, slot: EquipmentSlot },
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::VersionMismatch { .. } => "SNAPSHOT_VERSION_MISMATCH",
            Self::PendingLevelUp { .. } => "SNAPSHOT_PENDING_LEVEL_UP",
            Self::UnknownUnlock { .. } => "SNAPSHOT_UNKNOWN_UNLOCK",
            Self::RankOutOfRange { .. } => "SNAPSHOT_RANK_OUT_OF_RANGE",
            Self::UnknownEquipment(_) => "SNAPSHOT_UNKNOWN_EQUIPMENT",
            Self::SlotMismatch { .. } => "SNAPSHOT_SLOT_MISMATCH",
        }
    }
}

impl Character {
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            version: SNAPSHOT_VERSION,
            name: self.name.clone(),
            race: self.race,
            base_stats: Attribute::ALL
                .into_iter()
                .map(|a| (a, self.stats.base(a)))
                .collect(),
            level: self.ledger.level(),
            experience: self.ledger.experience(),
            stat_points: self.ledger.points(PointPool::Stat),
            perk_points: self.ledger.points(PointPool::Perk),
            skill_points: self.ledger.points(PointPool::Skill),
            skill_ranks: ranks(&self.skills),
            perk_ranks: ranks(&self.perks),
            equipment: self
                .loadout
                .iter()
                .map(|(slot, item)| (slot, item.item_id.clone()))
                .collect(),
            health: self.resources.health.current(),
            energy: self.resources.energy.current(),
            magic: self.resources.magic.current(),
            friendship: self.resources.friendship.current(),
            effects: self.effects.iter().copied().collect(),
        }
    }
}

fn ranks(progress: &UnlockProgress) -> BTreeMap<String, u32> {
    progress.iter().map(|(id, r)| (id.to_owned(), r)).collect()
}

impl CharacterSnapshot {
    /// Rebuilds a character against `catalog`.
    ///
    /// # Errors
    ///
    /// [`SnapshotError`] on a version mismatch, experience that already pays for the next
    /// level, or any id the catalog does not know.
    pub fn restore(
        &self,
        catalog: &(impl CatalogOracle + ?Sized),
        progression: ProgressionConfig,
    ) -> Result<Character, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let mut character = Character::builder(self.name.clone(), self.race)
            .progression(progression)
            .build(&crate::env::ContentCatalog::empty());

        for (attr, value) in &self.base_stats {
            character.stats.set_base(*attr, *value);
        }
        character.ledger = ProgressionLedger::from_parts(
            ExperienceCurve::new(progression),
            self.level,
            self.experience,
            [self.stat_points, self.perk_points, self.skill_points],
        );
        if let Some(required) = character
            .ledger
            .experience_to_next()
            .filter(|required| character.ledger.experience() >= *required)
        {
            return Err(SnapshotError::PendingLevelUp {
                level: character.ledger.level(),
                experience: self.experience,
                required,
            });
        }

        if let Some(race) = catalog.race(self.race) {
            character.stats.add_bonuses(&race.stat_bonuses, 1);
        }

        for (kind, saved) in [
            (UnlockKind::Skill, &self.skill_ranks),
            (UnlockKind::Perk, &self.perk_ranks),
        ] {
            for (id, rank) in saved {
                let def = catalog
                    .unlock(kind, id)
                    .ok_or_else(|| SnapshotError::UnknownUnlock {
                        kind,
                        id: id.clone(),
                    })?;
                if *rank > def.max_rank {
                    return Err(SnapshotError::RankOutOfRange {
                        id: id.clone(),
                        rank: *rank,
                        max_rank: def.max_rank,
                    });
                }
                character.progress_mut(kind).set_rank(id.clone(), *rank);
                character.apply_rank_bonus(&def.per_rank, *rank as i32);
            }
        }

        for (slot, item_id) in &self.equipment {
            let item = catalog
                .equipment(item_id)
                .ok_or_else(|| SnapshotError::UnknownEquipment(item_id.clone()))?;
            if item.slot != *slot {
                return Err(SnapshotError::SlotMismatch {
                    item: item_id.clone(),
                    slot: *slot,
                });
            }
            character.force_equip(item);
        }

        let max = character.maximums();
        character.resources = ResourceMeters {
            health: ResourceMeter::new(self.health, max.health),
            energy: ResourceMeter::new(self.energy, max.energy),
            magic: ResourceMeter::new(self.magic, max.magic),
            friendship: ResourceMeter::new(self.friendship, max.friendship),
        };

        character.effects = ActiveEffects::empty();
        for effect in &self.effects {
            character.effects.add(*effect);
        }

        tracing::debug!(name = %character.name, level = character.level(), "character restored");
        Ok(character)
    }
}
