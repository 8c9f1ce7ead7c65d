//! Content catalog oracle and its validated in-memory implementation.
//!
//! The catalog is the read-only collaborator that owns every template: races, skills,
//! perks, attacks, enemies and equipment. It is built once at startup, validated as a
//! whole, and then shared by reference. Lookups of unknown ids return `None`.

use std::collections::BTreeMap;

use super::error::CatalogError;
use crate::combat::AttackDefinition;
use crate::config::GameConfig;
use crate::equipment::EquipmentDefinition;
use crate::npc::EnemyTemplate;
use crate::race::{Race, RaceDefinition};
use crate::unlock::{UnlockDefinition, UnlockKind, find_cycle};

/// Oracle providing static content by id.
pub trait CatalogOracle: Send + Sync {
    fn race(&self, race: Race) -> Option<&RaceDefinition>;
    fn skill(&self, id: &str) -> Option<&UnlockDefinition>;
    fn perk(&self, id: &str) -> Option<&UnlockDefinition>;
    fn attack(&self, id: &str) -> Option<&AttackDefinition>;
    fn enemy(&self, id: &str) -> Option<&EnemyTemplate>;
    fn equipment(&self, id: &str) -> Option<&EquipmentDefinition>;

    fn races(&self) -> Box<dyn Iterator<Item = &RaceDefinition> + '_>;
    fn skills(&self) -> Box<dyn Iterator<Item = &UnlockDefinition> + '_>;
    fn perks(&self) -> Box<dyn Iterator<Item = &UnlockDefinition> + '_>;
    fn attacks(&self) -> Box<dyn Iterator<Item = &AttackDefinition> + '_>;
    fn enemies(&self) -> Box<dyn Iterator<Item = &EnemyTemplate> + '_>;
    fn equipment_items(&self) -> Box<dyn Iterator<Item = &EquipmentDefinition> + '_>;

    fn unlock(&self, kind: UnlockKind, id: &str) -> Option<&UnlockDefinition> {
        match kind {
            UnlockKind::Skill => self.skill(id),
            UnlockKind::Perk => self.perk(id),
        }
    }

    /// Attacks whose race list admits `race`.
    fn attacks_for_race(&self, race: Race) -> Vec<&AttackDefinition> {
        self.attacks().filter(|a| a.usable_by(race)).collect()
    }

    /// Exact id first, then a case-insensitive match on id or display name.
    fn find_enemy(&self, key: &str) -> Option<&EnemyTemplate> {
        self.enemy(key).or_else(|| {
            self.enemies()
                .find(|e| e.id.eq_ignore_ascii_case(key) || e.name.eq_ignore_ascii_case(key))
        })
    }
}

/// Validated catalog held in ordered maps.
#[derive(Clone, Debug, Default)]
pub struct ContentCatalog {
    races: BTreeMap<Race, RaceDefinition>,
    skills: BTreeMap<String, UnlockDefinition>,
    perks: BTreeMap<String, UnlockDefinition>,
    attacks: BTreeMap<String, AttackDefinition>,
    enemies: BTreeMap<String, EnemyTemplate>,
    equipment: BTreeMap<String, EquipmentDefinition>,
}

impl ContentCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            races: self.races.len(),
            skills: self.skills.len(),
            perks: self.perks.len(),
            attacks: self.attacks.len(),
            enemies: self.enemies.len(),
            equipment: self.equipment.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub races: usize,
    pub skills: usize,
    pub perks: usize,
    pub attacks: usize,
    pub enemies: usize,
    pub equipment: usize,
}

impl CatalogOracle for ContentCatalog {
    fn race(&self, race: Race) -> Option<&RaceDefinition> {
        self.races.get(&race)
    }

    fn skill(&self, id: &str) -> Option<&UnlockDefinition> {
        self.skills.get(id)
    }

    fn perk(&self, id: &str) -> Option<&UnlockDefinition> {
        self.perks.get(id)
    }

    fn attack(&self, id: &str) -> Option<&AttackDefinition> {
        self.attacks.get(id)
    }

    fn enemy(&self, id: &str) -> Option<&EnemyTemplate> {
        self.enemies.get(id)
    }

    fn equipment(&self, id: &str) -> Option<&EquipmentDefinition> {
        self.equipment.get(id)
    }

    fn races(&self) -> Box<dyn Iterator<Item = &RaceDefinition> + '_> {
        Box::new(self.races.values())
    }

    fn skills(&self) -> Box<dyn Iterator<Item = &UnlockDefinition> + '_> {
        Box::new(self.skills.values())
    }

    fn perks(&self) -> Box<dyn Iterator<Item = &UnlockDefinition> + '_> {
        Box::new(self.perks.values())
    }

    fn attacks(&self) -> Box<dyn Iterator<Item = &AttackDefinition> + '_> {
        Box::new(self.attacks.values())
    }

    fn enemies(&self) -> Box<dyn Iterator<Item = &EnemyTemplate> + '_> {
        Box::new(self.enemies.values())
    }

    fn equipment_items(&self) -> Box<dyn Iterator<Item = &EquipmentDefinition> + '_> {
        Box::new(self.equipment.values())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects definitions and validates them together.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    races: Vec<RaceDefinition>,
    skills: Vec<UnlockDefinition>,
    perks: Vec<UnlockDefinition>,
    attacks: Vec<AttackDefinition>,
    enemies: Vec<EnemyTemplate>,
    equipment: Vec<EquipmentDefinition>,
}

impl CatalogBuilder {
    pub fn race(mut self, def: RaceDefinition) -> Self {
        self.races.push(def);
        self
    }

    pub fn skill(mut self, def: UnlockDefinition) -> Self {
        self.skills.push(def);
        self
    }

    pub fn perk(mut self, def: UnlockDefinition) -> Self {
        self.perks.push(def);
        self
    }

    pub fn attack(mut self, def: AttackDefinition) -> Self {
        self.attacks.push(def);
        self
    }

    pub fn enemy(mut self, def: EnemyTemplate) -> Self {
        self.enemies.push(def);
        self
    }

    pub fn equipment(mut self, def: EquipmentDefinition) -> Self {
        self.equipment.push(def);
        self
    }

    pub fn races(mut self, defs: impl IntoIterator<Item = RaceDefinition>) -> Self {
        self.races.extend(defs);
        self
    }

    pub fn skills(mut self, defs: impl IntoIterator<Item = UnlockDefinition>) -> Self {
        self.skills.extend(defs);
        self
    }

    pub fn perks(mut self, defs: impl IntoIterator<Item = UnlockDefinition>) -> Self {
        self.perks.extend(defs);
        self
    }

    pub fn attacks(mut self, defs: impl IntoIterator<Item = AttackDefinition>) -> Self {
        self.attacks.extend(defs);
        self
    }

    pub fn enemies(mut self, defs: impl IntoIterator<Item = EnemyTemplate>) -> Self {
        self.enemies.extend(defs);
        self
    }

    pub fn equipment_items(mut self, defs: impl IntoIterator<Item = EquipmentDefinition>) -> Self {
        self.equipment.extend(defs);
        self
    }

    /// Validates every cross-reference and returns the catalog.
    ///
    /// # Errors
    ///
    /// The first [`CatalogError`] found, in this order: duplicate ids, unlock kinds and
    /// ranks, prerequisites (unknown, cross-kind, cycles), race starting perks, attack
    /// probabilities, enemy moves.
    pub fn build(self) -> Result<ContentCatalog, CatalogError> {
        let races = index_races(self.races)?;
        let skills = index_by_id("skill", self.skills, |d| &d.id)?;
        let perks = index_by_id("perk", self.perks, |d| &d.id)?;
        let attacks = index_by_id("attack", self.attacks, |d| &d.id)?;
        let enemies = index_by_id("enemy", self.enemies, |d| &d.id)?;
        let equipment = index_by_id("equipment", self.equipment, |d| &d.id)?;

        validate_unlocks(UnlockKind::Skill, &skills, &perks)?;
        validate_unlocks(UnlockKind::Perk, &perks, &skills)?;

        for def in races.values() {
            if let Some(perk) = def.starting_perks.iter().find(|p| !perks.contains_key(*p)) {
                return Err(CatalogError::UnknownStartingPerk {
                    race: def.race,
                    perk: perk.clone(),
                });
            }
        }

        if let Some(attack) = attacks.values().find(|a| !a.has_valid_probabilities()) {
            return Err(CatalogError::InvalidProbability {
                attack: attack.id.clone(),
            });
        }

        for enemy in enemies.values() {
            if enemy.moves.len() > GameConfig::MAX_ENEMY_MOVES {
                return Err(CatalogError::TooManyMoves {
                    enemy: enemy.id.clone(),
                    count: enemy.moves.len(),
                    max: GameConfig::MAX_ENEMY_MOVES,
                });
            }
            if let Some(mv) = enemy
                .moves
                .iter()
                .find(|m| !attacks.contains_key(&m.attack_id))
            {
                return Err(CatalogError::UnknownAttack {
                    enemy: enemy.id.clone(),
                    attack: mv.attack_id.clone(),
                });
            }
        }

        let catalog = ContentCatalog {
            races,
            skills,
            perks,
            attacks,
            enemies,
            equipment,
        };
        let summary = catalog.summary();
        tracing::info!(
            races = summary.races,
            skills = summary.skills,
            perks = summary.perks,
            attacks = summary.attacks,
            enemies = summary.enemies,
            equipment = summary.equipment,
            "content catalog validated"
        );
        Ok(catalog)
    }
}

fn index_races(defs: Vec<RaceDefinition>) -> Result<BTreeMap<Race, RaceDefinition>, CatalogError> {
    let mut map = BTreeMap::new();
    for def in defs {
        let race = def.race;
        if map.insert(race, def).is_some() {
            return Err(CatalogError::DuplicateId {
                kind: "race",
                id: race.to_string(),
            });
        }
    }
    Ok(map)
}

fn index_by_id<T>(
    kind: &'static str,
    defs: Vec<T>,
    id_of: impl Fn(&T) -> &String,
) -> Result<BTreeMap<String, T>, CatalogError> {
    let mut map = BTreeMap::new();
    for def in defs {
        let id = id_of(&def).clone();
        if map.contains_key(&id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
        map.insert(id, def);
    }
    Ok(map)
}

fn validate_unlocks(
    kind: UnlockKind,
    defs: &BTreeMap<String, UnlockDefinition>,
    other_kind: &BTreeMap<String, UnlockDefinition>,
) -> Result<(), CatalogError> {
    let expected = match kind {
        UnlockKind::Skill => "skill",
        UnlockKind::Perk => "perk",
    };

    for def in defs.values() {
        if def.kind != kind {
            return Err(CatalogError::WrongKind {
                id: def.id.clone(),
                expected,
            });
        }
        if def.max_rank == 0 {
            return Err(CatalogError::ZeroMaxRank { id: def.id.clone() });
        }
        if kind == UnlockKind::Perk && def.max_rank != 1 {
            return Err(CatalogError::MultiRankPerk {
                id: def.id.clone(),
                max_rank: def.max_rank,
            });
        }
        for prerequisite in &def.prerequisites {
            if defs.contains_key(prerequisite) {
                continue;
            }
            let err = if other_kind.contains_key(prerequisite) {
                CatalogError::CrossKindPrerequisite {
                    id: def.id.clone(),
                    prerequisite: prerequisite.clone(),
                }
            } else {
                CatalogError::UnknownPrerequisite {
                    id: def.id.clone(),
                    prerequisite: prerequisite.clone(),
                }
            };
            return Err(err);
        }
    }

    match find_cycle(defs) {
        Some(id) => Err(CatalogError::PrerequisiteCycle { id }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};

    fn base() -> CatalogBuilder {
        ContentCatalog::builder()
            .race(RaceDefinition::new(Race::Unicorn, "Unicorn").with_starting_perk("horn_glow"))
            .perk(UnlockDefinition::perk("horn_glow", "Horn Glow"))
            .skill(UnlockDefinition::skill("bolt", "Bolt").with_max_rank(3))
            .attack(AttackDefinition::new("tackle", "Tackle", 8))
            .attack(AttackDefinition::new("zap", "Zap", 12).allow_race(Race::Unicorn))
            .enemy(EnemyTemplate::new("wolf", "Timberwolf", 2).with_move("tackle", 1, 0))
    }

    #[test]
    fn valid_catalog_builds_and_answers_lookups() {
        let catalog = base().build().unwrap();
        assert!(catalog.race(Race::Unicorn).is_some());
        assert!(catalog.race(Race::Dragon).is_none());
        assert!(catalog.skill("bolt").is_some());
        assert!(catalog.skill("horn_glow").is_none());
        assert!(catalog.unlock(UnlockKind::Perk, "horn_glow").is_some());
        assert!(catalog.attack("nope").is_none());
        assert_eq!(catalog.attacks_for_race(Race::Unicorn).len(), 2);
        assert_eq!(catalog.attacks_for_race(Race::Pegasus).len(), 1);
    }

    #[test]
    fn enemy_lookup_falls_back_to_name() {
        let catalog = base().build().unwrap();
        assert_eq!(catalog.find_enemy("wolf").map(|e| e.id.as_str()), Some("wolf"));
        assert_eq!(catalog.find_enemy("TIMBERWOLF").map(|e| e.id.as_str()), Some("wolf"));
        assert_eq!(catalog.find_enemy("Wolf").map(|e| e.id.as_str()), Some("wolf"));
        assert!(catalog.find_enemy("dragon").is_none());
    }

    #[test]
    fn duplicate_ids_are_fatal() {
        let err = base()
            .skill(UnlockDefinition::skill("bolt", "Bolt Again"))
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_DUPLICATE_ID");
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn self_prerequisite_is_a_cycle() {
        let err = base()
            .skill(UnlockDefinition::skill("loop", "Loop").with_prerequisite("loop"))
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::PrerequisiteCycle { id: "loop".into() });
    }

    #[test]
    fn prerequisites_must_exist_and_share_kind() {
        let unknown = base()
            .skill(UnlockDefinition::skill("a", "A").with_prerequisite("ghost"))
            .build()
            .unwrap_err();
        assert_eq!(unknown.error_code(), "CATALOG_UNKNOWN_PREREQUISITE");

        let cross = base()
            .skill(UnlockDefinition::skill("a", "A").with_prerequisite("horn_glow"))
            .build()
            .unwrap_err();
        assert_eq!(cross.error_code(), "CATALOG_CROSS_KIND_PREREQUISITE");
    }

    #[test]
    fn content_references_are_checked() {
        let err = base()
            .enemy(EnemyTemplate::new("imp", "Imp", 1).with_move("fireball", 1, 0))
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_UNKNOWN_ATTACK");

        let err = base()
            .race(RaceDefinition::new(Race::Dragon, "Dragon").with_starting_perk("scales"))
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_UNKNOWN_STARTING_PERK");

        let err = base()
            .attack(AttackDefinition::new("wild", "Wild", 1).with_accuracy(1.5))
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_INVALID_PROBABILITY");

        let err = base()
            .perk(UnlockDefinition::perk("empty", "Empty").with_max_rank(0))
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_ZERO_MAX_RANK");

        let err = base()
            .perk(UnlockDefinition::perk("stacking", "Stacking").with_max_rank(3))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::MultiRankPerk {
                id: "stacking".into(),
                max_rank: 3
            }
        );

        let err = base()
            .perk(UnlockDefinition::skill("misfiled", "Misfiled"))
            .build()
            .unwrap_err();
        assert_eq!(err.error_code(), "CATALOG_WRONG_KIND");
    }
}
