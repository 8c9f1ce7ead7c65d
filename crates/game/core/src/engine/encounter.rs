//! Turn loop for one player character against a group of enemies.
//!
//! Every turn opens with the acting combatant's status effect tick. A combatant that is
//! stunned when its turn opens, or that does not survive the tick, forfeits the action.
//! Enemy turns then tick move cooldowns, choose a move, start its cooldown, and resolve it
//! against the player.

use crate::character::Character;
use crate::combat::{AttackReport, Combatant, resolve_attack};
use crate::env::{CatalogOracle, RandomSource};
use crate::npc::Enemy;
use crate::status::TickReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EncounterStatus {
    Ongoing,
    Victory,
    Defeat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Attacked(AttackReport),
    /// Stunned at the start of the turn.
    Stunned,
    /// Went down during the start-of-turn tick.
    Defeated,
    /// Could not pay the attack's energy or magic cost.
    Exhausted { attack_id: String },
    /// The enemy has no usable move.
    NoMoves,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub actor: String,
    pub tick: TickReport,
    pub action: TurnAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub turns: Vec<TurnReport>,
    pub status: EncounterStatus,
}

#[derive(Clone, Debug)]
pub struct Encounter {
    player: Character,
    enemies: Vec<Enemy>,
    round: u32,
}

impl Encounter {
    pub fn new(player: Character, enemies: Vec<Enemy>) -> Self {
        Self {
            player,
            enemies,
            round: 0,
        }
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy_mut(&mut self, index: usize) -> Option<&mut Enemy> {
        self.enemies.get_mut(index)
    }

    /// Completed rounds.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn status(&self) -> EncounterStatus {
        if !self.player.is_alive() {
            EncounterStatus::Defeat
        } else if self.enemies.iter().all(|e| !e.is_alive()) {
            EncounterStatus::Victory
        } else {
            EncounterStatus::Ongoing
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != EncounterStatus::Ongoing
    }

    pub fn first_living_enemy(&self) -> Option<usize> {
        self.enemies.iter().position(|e| e.is_alive())
    }

    /// Total experience from every enemy, available once the encounter is won.
    pub fn experience_reward(&self) -> Option<i64> {
        (self.status() == EncounterStatus::Victory)
            .then(|| self.enemies.iter().map(|e| e.experience_reward as i64).sum())
    }

    /// Total bits from every enemy, available once the encounter is won.
    pub fn bits_reward(&self) -> Option<i64> {
        (self.status() == EncounterStatus::Victory)
            .then(|| self.enemies.iter().map(|e| e.bits_reward as i64).sum())
    }

    pub fn into_player(self) -> Character {
        self.player
    }

    /// Player attacks `target` with `attack_id`.
    ///
    /// `None` (and no state change) if the encounter is over, the target is missing or
    /// already down, or the attack is unknown.
    pub fn player_turn<C, R>(
        &mut self,
        catalog: &C,
        attack_id: &str,
        target: usize,
        rng: &mut R,
    ) -> Option<TurnReport>
    where
        C: CatalogOracle + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.is_over() || !self.enemies.get(target)?.is_alive() {
            return None;
        }
        let attack = catalog.attack(attack_id)?;

        let stunned = !self.player.effects().can_act();
        let tick = self.player.tick_effects();
        let actor = self.player.name().to_owned();

        let action = if !self.player.is_alive() {
            TurnAction::Defeated
        } else if stunned {
            TurnAction::Stunned
        } else if !self.player.pay_attack_cost(attack) {
            TurnAction::Exhausted {
                attack_id: attack.id.clone(),
            }
        } else {
            TurnAction::Attacked(resolve_attack(
                &self.player,
                &mut self.enemies[target],
                attack,
                rng,
            ))
        };

        Some(TurnReport { actor, tick, action })
    }

    /// Enemy `index` takes its turn against the player. `None` if it cannot take one.
    pub fn enemy_turn<C, R>(&mut self, catalog: &C, index: usize, rng: &mut R) -> Option<TurnReport>
    where
        C: CatalogOracle + ?Sized,
        R: RandomSource + ?Sized,
    {
        if self.is_over() || !self.enemies.get(index)?.is_alive() {
            return None;
        }

        let enemy = &mut self.enemies[index];
        let stunned = !enemy.effects().can_act();
        let tick = enemy.tick_effects();
        let actor = enemy.name.clone();

        let action = if !enemy.is_alive() {
            TurnAction::Defeated
        } else if stunned {
            TurnAction::Stunned
        } else {
            match enemy
                .next_move(rng)
                .and_then(|id| catalog.attack(&id))
            {
                Some(attack) => TurnAction::Attacked(resolve_attack(
                    &self.enemies[index],
                    &mut self.player,
                    attack,
                    rng,
                )),
                None => TurnAction::NoMoves,
            }
        };

        Some(TurnReport { actor, tick, action })
    }

    /// Every living enemy acts in order until the player goes down.
    pub fn enemy_turns<C, R>(&mut self, catalog: &C, rng: &mut R) -> Vec<TurnReport>
    where
        C: CatalogOracle + ?Sized,
        R: RandomSource + ?Sized,
    {
        let mut turns = Vec::new();
        for index in 0..self.enemies.len() {
            if !self.player.is_alive() {
                break;
            }
            if let Some(turn) = self.enemy_turn(catalog, index, rng) {
                turns.push(turn);
            }
        }
        turns
    }

    /// Player attacks the first living enemy, then every enemy responds.
    ///
    /// `None` if the encounter is already over or the attack is unknown.
    pub fn play_round<C, R>(&mut self, catalog: &C, attack_id: &str, rng: &mut R) -> Option<RoundReport>
    where
        C: CatalogOracle + ?Sized,
        R: RandomSource + ?Sized,
    {
        let target = self.first_living_enemy()?;
        let mut turns = vec![self.player_turn(catalog, attack_id, target, rng)?];
        turns.extend(self.enemy_turns(catalog, rng));
        self.round += 1;

        let status = self.status();
        tracing::debug!(round = self.round, %status, "round complete");
        Some(RoundReport {
            round: self.round,
            turns,
            status,
        })
    }
}
