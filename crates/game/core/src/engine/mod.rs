//! Command surface for presentation and tooling.
//!
//! The [`RulesEngine`] pairs an injected, read-only catalog with the rules
//! configuration and resolves ids into definitions before delegating to the character,
//! combat and NPC modules. Commands return structured reports; logging is a side
//! channel only.

mod encounter;
mod errors;

pub use encounter::{Encounter, EncounterStatus, RoundReport, TurnAction, TurnReport};
pub use errors::CommandError;

use crate::character::{
    Character, CharacterBuilder, CharacterSnapshot, EquipReport, SnapshotError, UpgradeReport,
};
use crate::combat::{AttackDefinition, AttackReport, Combatant, resolve_attack};
use crate::config::GameConfig;
use crate::env::{CatalogOracle, RandomSource};
use crate::equipment::{EquipmentSlot, EquippedItem};
use crate::npc::{Enemy, EnemyMove};
use crate::progression::LevelUpReport;
use crate::race::Race;
use crate::unlock::{UnlockDefinition, UnlockKind};

pub struct RulesEngine<'a> {
    catalog: &'a dyn CatalogOracle,
    config: GameConfig,
}

impl<'a> RulesEngine<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle, config: GameConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // ========================================================================
    // Characters
    // ========================================================================

    /// Builder preloaded with this engine's progression settings.
    pub fn character_builder(&self, name: impl Into<String>, race: Race) -> CharacterBuilder {
        CharacterBuilder::new(name, race).progression(self.config.progression)
    }

    pub fn create_character(&self, name: impl Into<String>, race: Race) -> Character {
        self.character_builder(name, race).build(self.catalog)
    }

    pub fn restore(&self, snapshot: &CharacterSnapshot) -> Result<Character, SnapshotError> {
        snapshot.restore(self.catalog, self.config.progression)
    }

    pub fn add_experience(&self, character: &mut Character, amount: i64) -> LevelUpReport {
        character.add_experience(amount)
    }

    // ========================================================================
    // Unlocks
    // ========================================================================

    fn unlock_def(&self, kind: UnlockKind, id: &str) -> Result<&'a UnlockDefinition, CommandError> {
        let kind_name = match kind {
            UnlockKind::Skill => "skill",
            UnlockKind::Perk => "perk",
        };
        self.catalog
            .unlock(kind, id)
            .ok_or_else(|| CommandError::unknown(kind_name, id))
    }

    /// Unknown ids are simply not unlockable.
    pub fn can_unlock(&self, character: &Character, kind: UnlockKind, id: &str) -> bool {
        self.catalog
            .unlock(kind, id)
            .is_some_and(|def| character.can_unlock(def))
    }

    pub fn check_unlock(
        &self,
        character: &Character,
        kind: UnlockKind,
        id: &str,
    ) -> Result<(), CommandError> {
        let def = self.unlock_def(kind, id)?;
        Ok(character.check_unlock(def)?)
    }

    pub fn upgrade(
        &self,
        character: &mut Character,
        kind: UnlockKind,
        id: &str,
    ) -> Result<UpgradeReport, CommandError> {
        let def = self.unlock_def(kind, id)?;
        Ok(character.upgrade(def)?)
    }

    pub fn upgrade_skill(
        &self,
        character: &mut Character,
        id: &str,
    ) -> Result<UpgradeReport, CommandError> {
        self.upgrade(character, UnlockKind::Skill, id)
    }

    pub fn acquire_perk(
        &self,
        character: &mut Character,
        id: &str,
    ) -> Result<UpgradeReport, CommandError> {
        self.upgrade(character, UnlockKind::Perk, id)
    }

    /// Definitions of `kind` the character could buy right now.
    pub fn available_unlocks(&self, character: &Character, kind: UnlockKind) -> Vec<&'a UnlockDefinition> {
        let all = match kind {
            UnlockKind::Skill => self.catalog.skills(),
            UnlockKind::Perk => self.catalog.perks(),
        };
        all.filter(|def| character.can_unlock(def)).collect()
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    pub fn can_equip(&self, character: &Character, item_id: &str) -> bool {
        self.catalog
            .equipment(item_id)
            .is_some_and(|item| character.can_equip(item))
    }

    pub fn equip(&self, character: &mut Character, item_id: &str) -> Result<EquipReport, CommandError> {
        let item = self
            .catalog
            .equipment(item_id)
            .ok_or_else(|| CommandError::unknown("equipment", item_id))?;
        Ok(character.equip(item)?)
    }

    pub fn unequip(&self, character: &mut Character, slot: EquipmentSlot) -> Option<EquippedItem> {
        character.unequip(slot)
    }

    // ========================================================================
    // Combat
    // ========================================================================

    pub fn attack(&self, id: &str) -> Option<&'a AttackDefinition> {
        self.catalog.attack(id)
    }

    /// Attacks the character's race may use.
    pub fn attacks_for(&self, character: &Character) -> Vec<&'a AttackDefinition> {
        self.catalog.attacks_for_race(character.race())
    }

    /// Resolves `attack_id` from `attacker` against `target`. `None` for an unknown attack.
    pub fn resolve_attack<A, T, R>(
        &self,
        attacker: &A,
        target: &mut T,
        attack_id: &str,
        rng: &mut R,
    ) -> Option<AttackReport>
    where
        A: Combatant + ?Sized,
        T: Combatant + ?Sized,
        R: RandomSource + ?Sized,
    {
        let attack = self.catalog.attack(attack_id)?;
        Some(resolve_attack(attacker, target, attack, rng))
    }

    /// Spawns an enemy scaled to `player_level`. Looks up by id, then by name.
    pub fn spawn_enemy(&self, key: &str, player_level: u32) -> Option<Enemy> {
        let template = self.catalog.find_enemy(key)?;
        let enemy = Enemy::spawn(template, player_level);
        tracing::debug!(enemy = %enemy.name, level = enemy.level, "enemy spawned");
        Some(enemy)
    }

    /// The move `enemy` would pick now. Does not touch cooldowns.
    pub fn choose_move<'e, R: RandomSource + ?Sized>(
        &self,
        enemy: &'e Enemy,
        rng: &mut R,
    ) -> Option<&'e EnemyMove> {
        enemy.choose_move(rng).map(|i| &enemy.moves[i])
    }

    /// Starts an encounter against the given enemy ids. Unknown ids are logged and skipped.
    pub fn start_encounter(&self, player: Character, enemy_keys: &[&str]) -> Encounter {
        let level = player.level();
        let enemies = enemy_keys
            .iter()
            .filter_map(|key| {
                let enemy = self.spawn_enemy(key, level);
                if enemy.is_none() {
                    tracing::warn!(enemy = %key, "unknown enemy, skipping");
                }
                enemy
            })
            .collect();
        Encounter::new(player, enemies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ContentCatalog, PcgRng};
    use crate::gate::GateFailure;
    use crate::npc::EnemyTemplate;
    use crate::progression::PointPool;

    fn catalog() -> ContentCatalog {
        ContentCatalog::builder()
            .skill(UnlockDefinition::skill("dash", "Dash").with_max_rank(2))
            .perk(UnlockDefinition::perk("lucky", "Lucky"))
            .attack(AttackDefinition::new("bite", "Bite", 6))
            .enemy(
                EnemyTemplate::new("rat", "Giant Rat", 1)
                    .with_health(20)
                    .with_move("bite", 1, 0),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn unknown_ids_are_unavailable_not_errors_of_state() {
        let catalog = catalog();
        let engine = RulesEngine::new(&catalog, GameConfig::default());
        let mut hero = engine.create_character("Pip", Race::Human);
        let before = hero.clone();

        assert!(!engine.can_unlock(&hero, UnlockKind::Skill, "ghost"));
        assert_eq!(
            engine.upgrade_skill(&mut hero, "ghost"),
            Err(CommandError::UnknownDefinition {
                kind: "skill",
                id: "ghost".into()
            })
        );
        assert!(engine.equip(&mut hero, "ghost_armor").is_err());
        assert!(engine.spawn_enemy("ghost", 1).is_none());
        assert!(engine.attack("ghost").is_none());
        assert_eq!(hero, before);
    }

    #[test]
    fn perk_purchase_uses_perk_points() {
        let catalog = catalog();
        let engine = RulesEngine::new(&catalog, GameConfig::default());
        let mut hero = engine.create_character("Pip", Race::Human);

        assert_eq!(
            engine.acquire_perk(&mut hero, "lucky"),
            Err(CommandError::Gate(GateFailure::Points {
                pool: PointPool::Perk,
                required: 1,
                available: 0
            }))
        );
        engine.add_experience(&mut hero, 1000);
        let report = engine.acquire_perk(&mut hero, "lucky").unwrap();
        assert_eq!(report.new_rank, 1);
        assert!(engine.available_unlocks(&hero, UnlockKind::Perk).is_empty());
        assert_eq!(engine.available_unlocks(&hero, UnlockKind::Skill).len(), 1);
    }

    #[test]
    fn encounter_skips_unknown_enemies() {
        let catalog = catalog();
        let engine = RulesEngine::new(&catalog, GameConfig::default());
        let hero = engine.create_character("Pip", Race::Human);
        let fight = engine.start_encounter(hero, &["rat", "ghost", "GIANT RAT"]);
        assert_eq!(fight.enemies().len(), 2);
        assert!(fight.enemies().iter().all(|e| e.template_id == "rat"));
    }

    #[test]
    fn spawn_and_choose() {
        let catalog = catalog();
        let engine = RulesEngine::new(&catalog, GameConfig::default());
        let rat = engine.spawn_enemy("Giant Rat", 3).unwrap();
        assert_eq!(rat.health.maximum(), 40);
        let mv = engine.choose_move(&rat, &mut PcgRng::seeded(5)).unwrap();
        assert_eq!(mv.attack_id, "bite");
    }
}
