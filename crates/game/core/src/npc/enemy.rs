//! Enemy templates and level-scaled spawning.

use arrayvec::ArrayVec;

use super::moves::{EnemyMove, MoveEntry};
use super::policy;
use crate::combat::Combatant;
use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::stats::ResourceMeter;
use crate::status::ActiveEffects;

/// Static enemy definition, authored at `base_level`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub base_level: u32,
    pub base_health: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_defense: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub experience_reward: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bits_reward: i32,
    pub moves: Vec<MoveEntry>,
}

impl EnemyTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_level: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_level,
            base_health: 1,
            base_defense: 0,
            experience_reward: 0,
            bits_reward: 0,
            moves: Vec::new(),
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.base_health = health;
        self
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.base_defense = defense;
        self
    }

    pub fn with_rewards(mut self, experience: i32, bits: i32) -> Self {
        self.experience_reward = experience;
        self.bits_reward = bits;
        self
    }

    pub fn with_move(mut self, attack_id: impl Into<String>, weight: i32, cooldown: i32) -> Self {
        self.moves.push(MoveEntry::new(attack_id, weight, cooldown));
        self
    }
}

/// A live enemy in an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub template_id: String,
    pub name: String,
    pub level: u32,
    pub health: ResourceMeter,
    pub defense: i32,
    pub experience_reward: i32,
    pub bits_reward: i32,
    pub moves: ArrayVec<EnemyMove, { GameConfig::MAX_ENEMY_MOVES }>,
    pub effects: ActiveEffects,
}

impl Enemy {
    const HEALTH_PER_LEVEL: i32 = 10;
    const DEFENSE_PER_LEVEL: i32 = 1;
    const EXPERIENCE_PER_LEVEL: i32 = 5;
    const BITS_PER_LEVEL: i32 = 3;

    /// Spawns `template` scaled to `player_level`.
    ///
    /// With `delta = player_level - base_level`:
    ///
    /// ```text
    /// health  = max(1, base_health + 10·delta)
    /// defense = max(0, base_defense + delta)
    /// xp      = max(0, xp + 5·max(0, delta))
    /// bits    = max(0, bits + 3·max(0, delta))
    /// ```
    ///
    /// Moves beyond the move-set capacity are dropped; catalog validation rejects such
    /// templates up front.
    pub fn spawn(template: &EnemyTemplate, player_level: u32) -> Self {
        let delta = player_level as i32 - template.base_level as i32;
        let gain = delta.max(0);

        let moves = template
            .moves
            .iter()
            .take(GameConfig::MAX_ENEMY_MOVES)
            .map(EnemyMove::from_entry)
            .collect();

        Self {
            template_id: template.id.clone(),
            name: template.name.clone(),
            level: player_level.max(1),
            health: ResourceMeter::full(
                (template.base_health + Self::HEALTH_PER_LEVEL * delta).max(1),
            ),
            defense: (template.base_defense + Self::DEFENSE_PER_LEVEL * delta).max(0),
            experience_reward: (template.experience_reward + Self::EXPERIENCE_PER_LEVEL * gain)
                .max(0),
            bits_reward: (template.bits_reward + Self::BITS_PER_LEVEL * gain).max(0),
            moves,
            effects: ActiveEffects::empty(),
        }
    }

    /// Index of the move this enemy would pick now.
    pub fn choose_move<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        policy::choose_move(&self.moves, rng)
    }

    pub fn apply_cooldown(&mut self, index: usize) {
        if let Some(mv) = self.moves.get_mut(index) {
            policy::apply_cooldown(mv);
        }
    }

    pub fn tick_cooldowns(&mut self) {
        policy::tick_cooldowns(&mut self.moves);
    }

    /// One enemy turn of move bookkeeping: tick, choose, start the chosen cooldown.
    ///
    /// Returns the chosen attack id.
    pub fn next_move<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        self.tick_cooldowns();
        let index = self.choose_move(rng)?;
        self.apply_cooldown(index);
        let attack_id = self.moves[index].attack_id.clone();
        tracing::debug!(enemy = %self.name, attack = %attack_id, "move chosen");
        Some(attack_id)
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &ResourceMeter {
        &self.health
    }

    fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    fn defense(&self) -> i32 {
        self.defense
    }

    fn vitals_mut(&mut self) -> (&mut ResourceMeter, &mut ActiveEffects) {
        (&mut self.health, &mut self.effects)
    }
}
