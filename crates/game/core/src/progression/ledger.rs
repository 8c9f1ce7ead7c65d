//! Level, experience and the three point pools.

use super::curve::{ExperienceCurve, PointAward};

/// Which point pool a purchase draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointPool {
    Stat,
    Perk,
    Skill,
}

/// Result of an experience grant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelUpReport {
    pub previous_level: u32,
    pub new_level: u32,
    pub experience: u64,
    pub points_awarded: PointAward,
}

impl LevelUpReport {
    pub fn levels_gained(&self) -> u32 {
        self.new_level - self.previous_level
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressionLedger {
    curve: ExperienceCurve,
    level: u32,
    experience: u64,
    stat_points: u32,
    perk_points: u32,
    skill_points: u32,
}

impl ProgressionLedger {
    pub fn new(curve: ExperienceCurve) -> Self {
        Self {
            curve,
            level: 1,
            experience: 0,
            stat_points: 0,
            perk_points: 0,
            skill_points: 0,
        }
    }

    /// Rebuilds a ledger from persisted values; level is clamped to the curve's range.
    ///
    /// Does not resolve level-ups; check [`Self::can_level_up`] when the values are untrusted.
    pub fn from_parts(
        curve: ExperienceCurve,
        level: u32,
        experience: u64,
        points: [u32; 3],
    ) -> Self {
        let [stat_points, perk_points, skill_points] = points;
        Self {
            level: level.clamp(1, curve.max_level()),
            curve,
            experience,
            stat_points,
            perk_points,
            skill_points,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn max_level(&self) -> u32 {
        self.curve.max_level()
    }

    pub fn curve(&self) -> &ExperienceCurve {
        &self.curve
    }

    /// `None` at the level cap.
    pub fn experience_to_next(&self) -> Option<u64> {
        self.curve.experience_to_next(self.level)
    }

    pub fn points(&self, pool: PointPool) -> u32 {
        match pool {
            PointPool::Stat => self.stat_points,
            PointPool::Perk => self.perk_points,
            PointPool::Skill => self.skill_points,
        }
    }

    fn pool_mut(&mut self, pool: PointPool) -> &mut u32 {
        match pool {
            PointPool::Stat => &mut self.stat_points,
            PointPool::Perk => &mut self.perk_points,
            PointPool::Skill => &mut self.skill_points,
        }
    }

    pub fn can_level_up(&self) -> bool {
        matches!(self.experience_to_next(), Some(required) if self.experience >= required)
    }

    /// Adds experience and resolves every level-up it pays for.
    ///
    /// Non-positive amounts are a no-op.
    pub fn add_experience(&mut self, amount: i64) -> LevelUpReport {
        let mut report = LevelUpReport {
            previous_level: self.level,
            new_level: self.level,
            experience: self.experience,
            points_awarded: PointAward::default(),
        };
        if amount <= 0 {
            return report;
        }

        self.experience = self.experience.saturating_add(amount as u64);
        while let Some(award) = self.level_up() {
            report.points_awarded.merge(award);
        }

        report.new_level = self.level;
        report.experience = self.experience;
        report
    }

    /// Advances one level if the experience threshold is met.
    ///
    /// The surplus carries forward. Returns the points granted for the new level.
    pub fn level_up(&mut self) -> Option<PointAward> {
        let required = self.experience_to_next()?;
        if self.experience < required {
            return None;
        }

        self.experience -= required;
        self.level += 1;

        let award = PointAward::for_level(self.level);
        self.stat_points += award.stat;
        self.perk_points += award.perk;
        self.skill_points += award.skill;

        tracing::debug!(
            level = self.level,
            stat = award.stat,
            perk = award.perk,
            skill = award.skill,
            "level up"
        );
        Some(award)
    }

    /// Jumps to `level` (clamped) and clears experience. Skipped levels grant nothing.
    pub fn set_level(&mut self, level: u32) {
        self.level = level.clamp(1, self.curve.max_level());
        self.experience = 0;
    }

    pub fn grant_points(&mut self, pool: PointPool, amount: u32) {
        let slot = self.pool_mut(pool);
        *slot = slot.saturating_add(amount);
    }

    /// Spends points if enough are available. Leaves the pool untouched otherwise.
    pub fn spend_points(&mut self, pool: PointPool, amount: u32) -> bool {
        let slot = self.pool_mut(pool);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }
}

impl Default for ProgressionLedger {
    fn default() -> Self {
        Self::new(ExperienceCurve::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_experience_is_ignored() {
        let mut ledger = ProgressionLedger::default();
        let report = ledger.add_experience(0);
        assert_eq!(report.levels_gained(), 0);
        ledger.add_experience(-50);
        assert_eq!(ledger.experience(), 0);
    }

    #[test]
    fn surplus_carries_forward() {
        let mut ledger = ProgressionLedger::default();
        let report = ledger.add_experience(1100);
        assert_eq!(report.new_level, 2);
        assert_eq!(ledger.experience(), 100);
        assert_eq!(ledger.points(PointPool::Stat), 3);
        assert_eq!(ledger.points(PointPool::Perk), 1);
        assert_eq!(ledger.points(PointPool::Skill), 2);
    }

    #[test]
    fn one_grant_can_cross_several_levels() {
        let mut ledger = ProgressionLedger::default();
        // 1000 + 1200 + 1440 = 3640
        let report = ledger.add_experience(3700);
        assert_eq!(report.new_level, 4);
        assert_eq!(report.levels_gained(), 3);
        assert_eq!(ledger.experience(), 60);
        assert!(ledger.experience() < ledger.experience_to_next().unwrap_or(u64::MAX));
        assert_eq!(report.points_awarded.stat, 9);
    }

    #[test]
    fn level_cap_stops_leveling() {
        let mut ledger = ProgressionLedger::default();
        ledger.set_level(49);
        ledger.add_experience(i64::MAX);
        assert_eq!(ledger.level(), 50);
        assert!(!ledger.can_level_up());
        assert_eq!(ledger.experience_to_next(), None);
    }

    #[test]
    fn set_level_resets_experience_without_backfill() {
        let mut ledger = ProgressionLedger::default();
        ledger.add_experience(500);
        ledger.set_level(10);
        assert_eq!(ledger.level(), 10);
        assert_eq!(ledger.experience(), 0);
        assert_eq!(ledger.points(PointPool::Stat), 0);

        ledger.set_level(0);
        assert_eq!(ledger.level(), 1);
        ledger.set_level(400);
        assert_eq!(ledger.level(), 50);
    }

    #[test]
    fn spending_more_than_available_is_rejected() {
        let mut ledger = ProgressionLedger::default();
        ledger.grant_points(PointPool::Skill, 2);
        assert!(!ledger.spend_points(PointPool::Skill, 3));
        assert_eq!(ledger.points(PointPool::Skill), 2);
        assert!(ledger.spend_points(PointPool::Skill, 2));
        assert_eq!(ledger.points(PointPool::Skill), 0);
    }
}
