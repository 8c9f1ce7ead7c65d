//! Attack definitions.

use crate::race::Race;
use crate::status::{StatusEffect, StatusKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackCategory {
    #[default]
    Physical,
    Magical,
    Special,
}

/// Chance to inflict a status effect when the attack hits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectChance {
    pub kind: StatusKind,
    pub chance: f64,
    pub duration: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: i32,
}

impl EffectChance {
    pub fn effect(&self) -> StatusEffect {
        StatusEffect::new(self.kind, self.duration, self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: AttackCategory,
    pub base_damage: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub energy_cost: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_cost: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_accuracy"))]
    pub accuracy: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_crit_chance"))]
    pub crit_chance: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_crit_multiplier"))]
    pub crit_multiplier: f64,
    /// Empty means every race can learn it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_races: Vec<Race>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on_hit: Vec<EffectChance>,
}

#[cfg(feature = "serde")]
fn default_accuracy() -> f64 {
    AttackDefinition::DEFAULT_ACCURACY
}

#[cfg(feature = "serde")]
fn default_crit_chance() -> f64 {
    AttackDefinition::DEFAULT_CRIT_CHANCE
}

#[cfg(feature = "serde")]
fn default_crit_multiplier() -> f64 {
    AttackDefinition::DEFAULT_CRIT_MULTIPLIER
}

impl AttackDefinition {
    pub const DEFAULT_ACCURACY: f64 = 0.95;
    pub const DEFAULT_CRIT_CHANCE: f64 = 0.05;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;

    pub fn new(id: impl Into<String>, name: impl Into<String>, base_damage: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: AttackCategory::Physical,
            base_damage,
            energy_cost: 0,
            magic_cost: 0,
            accuracy: Self::DEFAULT_ACCURACY,
            crit_chance: Self::DEFAULT_CRIT_CHANCE,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            allowed_races: Vec::new(),
            on_hit: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: AttackCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_crit(mut self, chance: f64, multiplier: f64) -> Self {
        self.crit_chance = chance;
        self.crit_multiplier = multiplier;
        self
    }

    pub fn with_costs(mut self, energy: i32, magic: i32) -> Self {
        self.energy_cost = energy;
        self.magic_cost = magic;
        self
    }

    pub fn with_on_hit(mut self, kind: StatusKind, chance: f64, duration: i32, value: i32) -> Self {
        self.on_hit.push(EffectChance {
            kind,
            chance,
            duration,
            value,
        });
        self
    }

    pub fn allow_race(mut self, race: Race) -> Self {
        self.allowed_races.push(race);
        self
    }

    pub fn usable_by(&self, race: Race) -> bool {
        self.allowed_races.is_empty() || self.allowed_races.contains(&race)
    }

    /// Every probability lies in `[0, 1]`.
    pub fn has_valid_probabilities(&self) -> bool {
        let unit = |p: f64| (0.0..=1.0).contains(&p);
        unit(self.accuracy) && unit(self.crit_chance) && self.on_hit.iter().all(|e| unit(e.chance))
    }
}
