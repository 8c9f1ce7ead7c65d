//! Requirement gates shared by unlocks and equipment.
//!
//! A gate either passes or names the first requirement that failed. Checks never mutate
//! anything, so a caller may check as often as it likes before committing a command.

use std::collections::BTreeMap;

use crate::error::{ErrorSeverity, GameError};
use crate::progression::PointPool;
use crate::race::Race;
use crate::stats::{Attribute, StatBlock};

/// Level, race and stat requirements.
///
/// An empty `allowed_races` means every race may pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Requirements {
    pub level: u32,
    pub stats: BTreeMap<Attribute, i32>,
    pub allowed_races: Vec<Race>,
    pub forbidden_races: Vec<Race>,
}

impl Requirements {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_stat(mut self, attr: Attribute, minimum: i32) -> Self {
        self.stats.insert(attr, minimum);
        self
    }

    pub fn allow_race(mut self, race: Race) -> Self {
        self.allowed_races.push(race);
        self
    }

    pub fn forbid_race(mut self, race: Race) -> Self {
        self.forbidden_races.push(race);
        self
    }

    pub fn check_level(&self, level: u32) -> Result<(), GateFailure> {
        if level < self.level {
            return Err(GateFailure::Level {
                required: self.level,
                actual: level,
            });
        }
        Ok(())
    }

    pub fn check_race(&self, race: Race) -> Result<(), GateFailure> {
        if !self.allowed_races.is_empty() && !self.allowed_races.contains(&race) {
            return Err(GateFailure::RaceNotAllowed { race });
        }
        if self.forbidden_races.contains(&race) {
            return Err(GateFailure::RaceForbidden { race });
        }
        Ok(())
    }

    /// Compares against stat totals, i.e. after every existing bonus.
    pub fn check_stats(&self, stats: &StatBlock) -> Result<(), GateFailure> {
        for (attr, minimum) in &self.stats {
            let actual = stats.total(*attr);
            if actual < *minimum {
                return Err(GateFailure::Stat {
                    attribute: *attr,
                    required: *minimum,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Level, then race, then stats.
    pub fn check(&self, level: u32, race: Race, stats: &StatBlock) -> Result<(), GateFailure> {
        self.check_level(level)?;
        self.check_race(race)?;
        self.check_stats(stats)
    }
}

/// The first requirement a character failed to meet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateFailure {
    #[error("{id} is already at max rank {max_rank}")]
    MaxRank { id: String, max_rank: u32 },

    #[error("requires level {required} (current {actual})")]
    Level { required: u32, actual: u32 },

    #[error("requires {required} {pool} points ({available} available)")]
    Points {
        pool: PointPool,
        required: u32,
        available: u32,
    },

    #[error("not available to race {race}")]
    RaceNotAllowed { race: Race },

    #[error("forbidden for race {race}")]
    RaceForbidden { race: Race },

    #[error("requires {attribute} {required} (current {actual})")]
    Stat {
        attribute: Attribute,
        required: i32,
        actual: i32,
    },

    #[error("requires {id} to be unlocked first")]
    Prerequisite { id: String },
}

impl GameError for GateFailure {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RaceNotAllowed { .. } | Self::RaceForbidden { .. } | Self::MaxRank { .. } => {
                ErrorSeverity::Validation
            }
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MaxRank { .. } => "GATE_MAX_RANK",
            Self::Level { .. } => "GATE_LEVEL",
            Self::Points { .. } => "GATE_POINTS",
            Self::RaceNotAllowed { .. } => "GATE_RACE_NOT_ALLOWED",
            Self::RaceForbidden { .. } => "GATE_RACE_FORBIDDEN",
            Self::Stat { .. } => "GATE_STAT",
            Self::Prerequisite { .. } => "GATE_PREREQUISITE",
        }
    }
}
