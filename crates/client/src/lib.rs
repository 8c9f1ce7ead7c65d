//! Headless encounter runner.
//!
//! # Architecture
//!
//! ```text
//! Skirmish (composition root)
//!   ├─→ SkirmishConfig (environment)
//!   ├─→ GameConfig + ContentCatalog (rules-content loaders)
//!   └─→ RulesEngine + Encounter (rules-core)
//! ```
//!
//! One character is created from the configuration and fights the configured enemies,
//! one round at a time, until somebody wins or the round limit runs out. A win feeds the
//! encounter's experience reward back into the character's progression.

mod builder;
pub mod config;

pub use builder::SkirmishBuilder;
pub use config::SkirmishConfig;

use anyhow::{Result, bail};
use rules_core::{
    Character, ContentCatalog, EncounterStatus, GameConfig, LevelUpReport, PcgRng, RoundReport,
    RulesEngine, TurnAction, TurnReport,
};

/// A configured encounter, ready to run.
pub struct Skirmish {
    config: SkirmishConfig,
    rules: GameConfig,
    catalog: ContentCatalog,
}

/// How a skirmish ended.
#[derive(Clone, Debug)]
pub struct SkirmishOutcome {
    pub status: EncounterStatus,
    pub rounds: u32,
    pub attack_id: String,
    /// Set only on victory.
    pub level_up: Option<LevelUpReport>,
    pub bits: i64,
    pub player: Character,
}

impl Skirmish {
    pub fn builder() -> SkirmishBuilder {
        SkirmishBuilder::new()
    }

    pub fn config(&self) -> &SkirmishConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Runs the encounter to completion or to the round limit.
    ///
    /// # Errors
    ///
    /// Returns an error if none of the configured enemies exist, or if the player has no
    /// attack their race may use.
    pub fn run(&self) -> Result<SkirmishOutcome> {
        let engine = RulesEngine::new(&self.catalog, self.rules.clone());
        let player = engine
            .character_builder(self.config.name.clone(), self.config.race)
            .level(self.config.level)
            .build(engine.catalog());

        let attack_id = self.pick_attack(&engine, &player)?;

        let keys: Vec<&str> = self.config.enemies.iter().map(String::as_str).collect();
        let mut encounter = engine.start_encounter(player, &keys);
        if encounter.enemies().is_empty() {
            bail!("None of the configured enemies exist: {}", self.config.enemies.join(", "));
        }

        tracing::info!(
            player = %encounter.player().name(),
            race = %self.config.race,
            attack = %attack_id,
            enemies = encounter.enemies().len(),
            seed = self.config.seed,
            "encounter started"
        );

        let mut rng = PcgRng::seeded(self.config.seed);
        while encounter.round() < self.config.max_rounds {
            let Some(round) = encounter.play_round(engine.catalog(), &attack_id, &mut rng) else {
                break;
            };
            log_round(&round);
            if round.status != EncounterStatus::Ongoing {
                break;
            }
        }

        let status = encounter.status();
        let rounds = encounter.round();
        let experience = encounter.experience_reward();
        let bits = encounter.bits_reward().unwrap_or(0);
        let mut player = encounter.into_player();

        let level_up = experience.map(|xp| engine.add_experience(&mut player, xp));
        if let Some(report) = &level_up {
            tracing::info!(
                experience = report.experience,
                level = report.new_level,
                gained = report.levels_gained(),
                "experience awarded"
            );
        }

        Ok(SkirmishOutcome {
            status,
            rounds,
            attack_id,
            level_up,
            bits,
            player,
        })
    }

    fn pick_attack(&self, engine: &RulesEngine<'_>, player: &Character) -> Result<String> {
        match &self.config.attack {
            Some(id) => match engine.attack(id) {
                Some(attack) if attack.usable_by(player.race()) => Ok(attack.id.clone()),
                Some(_) => bail!("Attack '{}' is not available to {}", id, player.race()),
                None => bail!("Unknown attack '{}'", id),
            },
            None => engine
                .attacks_for(player)
                .first()
                .map(|attack| attack.id.clone())
                .ok_or_else(|| anyhow::anyhow!("No attack available to {}", player.race())),
        }
    }
}

fn log_round(round: &RoundReport) {
    for turn in &round.turns {
        log_turn(round.round, turn);
    }
    tracing::debug!(round = round.round, status = %round.status, "round over");
}

fn log_turn(round: u32, turn: &TurnReport) {
    if turn.tick.damage_taken > 0 || turn.tick.healed > 0 {
        tracing::info!(
            round,
            actor = %turn.actor,
            damage = turn.tick.damage_taken,
            healed = turn.tick.healed,
            "status effects"
        );
    }
    match &turn.action {
        TurnAction::Attacked(report) => tracing::info!(
            round,
            actor = %turn.actor,
            attack = %report.attack_id,
            outcome = %report.outcome,
            damage = report.applied,
            defeated = report.target_defeated,
            "attack"
        ),
        TurnAction::Stunned => tracing::info!(round, actor = %turn.actor, "stunned"),
        TurnAction::Defeated => tracing::info!(round, actor = %turn.actor, "went down"),
        TurnAction::Exhausted { attack_id } => {
            tracing::info!(round, actor = %turn.actor, attack = %attack_id, "too tired to attack")
        }
        TurnAction::NoMoves => tracing::info!(round, actor = %turn.actor, "no usable move"),
    }
}
