/// Rules configuration: compile-time capacities and tunable progression parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Experience curve and level cap.
    pub progression: ProgressionConfig,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of simultaneously active status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 16;
    /// Maximum number of moves in an enemy move-set.
    pub const MAX_ENEMY_MOVES: usize = 8;

    pub fn new() -> Self {
        Self {
            progression: ProgressionConfig::default(),
        }
    }

    pub fn with_progression(progression: ProgressionConfig) -> Self {
        Self { progression }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the experience curve.
///
/// `experience_to_next(level) = round(base_experience * growth_rate^(level - 1))`, at least
/// one more than the previous level's cost, unreachable at `max_level`. Loaded
/// configurations must grow (`growth_rate > 1`) from a positive base.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    pub max_level: u32,
    pub base_experience: u64,
    pub growth_rate: f64,
}

impl ProgressionConfig {
    pub const DEFAULT_MAX_LEVEL: u32 = 50;
    pub const DEFAULT_BASE_EXPERIENCE: u64 = 1000;
    pub const DEFAULT_GROWTH_RATE: f64 = 1.2;
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_level: Self::DEFAULT_MAX_LEVEL,
            base_experience: Self::DEFAULT_BASE_EXPERIENCE,
            growth_rate: Self::DEFAULT_GROWTH_RATE,
        }
    }
}
