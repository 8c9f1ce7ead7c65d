use crate::config::ProgressionConfig;

/// Experience required to advance from a given level.
///
/// `round(base * growth^(level - 1))`, raised where needed so every level costs at least
/// one more than the one before it. `None` once the level cap is reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExperienceCurve {
    config: ProgressionConfig,
}

impl ExperienceCurve {
    pub fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    pub fn max_level(&self) -> u32 {
        self.config.max_level.max(1)
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Experience needed to leave `level`. `None` means unreachable.
    ///
    /// Strictly increasing in `level` for any configuration, including flat or shrinking
    /// growth rates and bases small enough to be swallowed by rounding.
    pub fn experience_to_next(&self, level: u32) -> Option<u64> {
        if level >= self.max_level() {
            return None;
        }
        let mut required = self.nominal(1)?.max(1);
        for step in 2..=level {
            let floor = required.checked_add(1)?;
            required = self.nominal(step)?.max(floor);
        }
        Some(required)
    }

    fn nominal(&self, level: u32) -> Option<u64> {
        let exponent = i32::try_from(level.saturating_sub(1)).ok()?;
        let value =
            (self.config.base_experience as f64 * self.config.growth_rate.powi(exponent)).round();
        if !value.is_finite() || value >= u64::MAX as f64 {
            return None;
        }
        Some(value.max(0.0) as u64)
    }
}

impl Default for ExperienceCurve {
    fn default() -> Self {
        Self::new(ProgressionConfig::default())
    }
}

/// Points granted on reaching a level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointAward {
    pub stat: u32,
    pub perk: u32,
    pub skill: u32,
}

impl PointAward {
    /// Banded award for the level just reached.
    pub fn for_level(level: u32) -> Self {
        let stat = match level {
            0..=5 => 3,
            6..=10 => 2,
            _ => 1,
        };
        let skill = match level {
            0..=10 => 2,
            11..=20 => 3,
            _ => 4,
        };
        Self {
            stat,
            perk: 1,
            skill,
        }
    }

    pub fn merge(&mut self, other: PointAward) {
        self.stat += other.stat;
        self.perk += other.perk;
        self.skill += other.skill;
    }
}
