//! RON loaders for catalog definitions.
//!
//! Every file is a single struct wrapping a list, e.g.
//!
//! ```ron
//! (
//!     attacks: [
//!         (id: "buck", name: "Buck", base_damage: 12),
//!     ],
//! )
//! ```

use std::path::Path;

use rules_core::{
    AttackDefinition, EnemyTemplate, EquipmentDefinition, RaceDefinition, UnlockDefinition,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceCatalog {
    pub races: Vec<RaceDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<UnlockDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerkCatalog {
    pub perks: Vec<UnlockDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackCatalog {
    pub attacks: Vec<AttackDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub items: Vec<EquipmentDefinition>,
}

/// Loader for race definitions.
pub struct RaceLoader;

impl RaceLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<RaceDefinition>> {
        let catalog: RaceCatalog = read_ron(path, "race catalog")?;
        Ok(catalog.races)
    }
}

/// Loader for skill and perk definitions.
///
/// Each entry still names its own `kind`; a perk in the skill file is caught when the
/// catalog is built.
pub struct UnlockLoader;

impl UnlockLoader {
    pub fn load_skills(path: &Path) -> LoadResult<Vec<UnlockDefinition>> {
        let catalog: SkillCatalog = read_ron(path, "skill catalog")?;
        Ok(catalog.skills)
    }

    pub fn load_perks(path: &Path) -> LoadResult<Vec<UnlockDefinition>> {
        let catalog: PerkCatalog = read_ron(path, "perk catalog")?;
        Ok(catalog.perks)
    }
}

/// Loader for attack definitions.
pub struct AttackLoader;

impl AttackLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<AttackDefinition>> {
        let catalog: AttackCatalog = read_ron(path, "attack catalog")?;
        Ok(catalog.attacks)
    }
}

/// Loader for enemy templates.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = read_ron(path, "enemy catalog")?;
        Ok(catalog.enemies)
    }
}

/// Loader for equipment definitions.
pub struct EquipmentLoader;

impl EquipmentLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EquipmentDefinition>> {
        let catalog: EquipmentCatalog = read_ron(path, "equipment catalog")?;
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rules_core::{Attribute, EquipmentSlot, Race, StatusKind, UnlockKind};

    use super::*;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn races_with_bonuses_and_perks() {
        let file = write(
            r#"(
                races: [
                    (
                        race: Unicorn,
                        name: "Unicorn",
                        stat_bonuses: { Intelligence: 2, Wisdom: 1 },
                        starting_perks: ["spark"],
                    ),
                    (race: Human, name: "Human"),
                ],
            )"#,
        );
        let races = RaceLoader::load(file.path()).unwrap();
        assert_eq!(races.len(), 2);
        assert_eq!(races[0].race, Race::Unicorn);
        assert_eq!(races[0].stat_bonuses.get(&Attribute::Intelligence), Some(&2));
        assert_eq!(races[0].starting_perks, vec!["spark".to_owned()]);
        assert!(races[1].stat_bonuses.is_empty());
    }

    #[test]
    fn unlock_defaults_fill_in() {
        let file = write(
            r#"(
                skills: [
                    (
                        id: "dash",
                        name: "Dash",
                        kind: Skill,
                        max_rank: 3,
                        requirements: (level: 2, stats: { Dexterity: 12 }),
                        per_rank: (stats: { Dexterity: 1 }, resources: { Energy: 5 }),
                    ),
                ],
            )"#,
        );
        let skills = UnlockLoader::load_skills(file.path()).unwrap();
        let dash = &skills[0];
        assert_eq!(dash.kind, UnlockKind::Skill);
        assert_eq!(dash.max_rank, 3);
        assert_eq!(dash.base_cost, 1);
        assert_eq!(dash.requirements.level, 2);
        assert!(dash.prerequisites.is_empty());
    }

    #[test]
    fn attack_defaults_and_on_hit() {
        let file = write(
            r#"(
                attacks: [
                    (
                        id: "venom",
                        name: "Venom Fang",
                        base_damage: 6,
                        on_hit: [(kind: Poison, chance: 0.4, duration: 3, value: 2)],
                    ),
                ],
            )"#,
        );
        let attacks = AttackLoader::load(file.path()).unwrap();
        let venom = &attacks[0];
        assert_eq!(venom.accuracy, 0.95);
        assert_eq!(venom.crit_chance, 0.05);
        assert_eq!(venom.crit_multiplier, 1.5);
        assert_eq!(venom.on_hit[0].kind, StatusKind::Poison);
    }

    #[test]
    fn enemies_and_equipment() {
        let enemies = write(
            r#"(
                enemies: [
                    (
                        id: "rat",
                        name: "Giant Rat",
                        base_level: 1,
                        base_health: 20,
                        moves: [(attack_id: "bite"), (attack_id: "lunge", weight: 3, cooldown: 2)],
                    ),
                ],
            )"#,
        );
        let rat = &EnemyLoader::load(enemies.path()).unwrap()[0];
        assert_eq!(rat.moves[0].weight, 1);
        assert_eq!(rat.moves[1].cooldown, 2);

        let equipment = write(
            r#"(
                items: [
                    (
                        id: "helm",
                        name: "Iron Helm",
                        slot: Head,
                        bonuses: (defense: 2, resources: { Health: 10 }),
                    ),
                ],
            )"#,
        );
        let helm = &EquipmentLoader::load(equipment.path()).unwrap()[0];
        assert_eq!(helm.slot, EquipmentSlot::Head);
        assert_eq!(helm.bonuses.defense, 2);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let file = write("(attacks: [(id: \"x\")])");
        let err = AttackLoader::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("attack catalog"));
    }
}
