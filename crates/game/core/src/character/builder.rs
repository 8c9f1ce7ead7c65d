use std::collections::BTreeMap;

use super::Character;
use crate::config::ProgressionConfig;
use crate::env::CatalogOracle;
use crate::equipment::Loadout;
use crate::progression::{ExperienceCurve, ProgressionLedger};
use crate::race::Race;
use crate::stats::{Attribute, ResourceBonuses, ResourceMaximums, ResourceMeters, StatBlock};
use crate::status::ActiveEffects;
use crate::unlock::UnlockProgress;

/// Builder for constructing a new character.
///
/// `build` applies the race's stat bonuses, grants its starting perks for free, and
/// starts every resource full.
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    name: String,
    race: Race,
    base: BTreeMap<Attribute, i32>,
    progression: ProgressionConfig,
    level: u32,
}

impl CharacterBuilder {
    pub fn new(name: impl Into<String>, race: Race) -> Self {
        Self {
            name: name.into(),
            race,
            base: BTreeMap::new(),
            progression: ProgressionConfig::default(),
            level: 1,
        }
    }

    pub fn base_stat(mut self, attr: Attribute, value: i32) -> Self {
        self.base.insert(attr, value);
        self
    }

    pub fn progression(mut self, config: ProgressionConfig) -> Self {
        self.progression = config;
        self
    }

    /// Starting level. Earlier levels grant no points.
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn build(self, catalog: &(impl CatalogOracle + ?Sized)) -> Character {
        let mut stats = StatBlock::new();
        for (attr, value) in &self.base {
            stats.set_base(*attr, *value);
        }

        let mut ledger = ProgressionLedger::new(ExperienceCurve::new(self.progression));
        if self.level > 1 {
            ledger.set_level(self.level);
        }

        let mut character = Character {
            name: self.name,
            race: self.race,
            stats,
            ledger,
            skills: UnlockProgress::new(),
            perks: UnlockProgress::new(),
            loadout: Loadout::new(),
            resource_bonuses: ResourceBonuses::new(),
            resources: ResourceMeters::full(&ResourceMaximums::compute(
                &StatBlock::new(),
                &ResourceBonuses::new(),
            )),
            effects: ActiveEffects::empty(),
        };

        if let Some(race) = catalog.race(self.race) {
            character.stats.add_bonuses(&race.stat_bonuses, 1);
            for perk_id in &race.starting_perks {
                if let Some(perk) = catalog.perk(perk_id) {
                    character.grant_free_rank(perk);
                }
            }
        }

        let maximums = character.maximums();
        character.resources = ResourceMeters::full(&maximums);

        tracing::debug!(
            name = %character.name,
            race = %character.race,
            perks = character.perks.len(),
            "character created"
        );
        character
    }
}
