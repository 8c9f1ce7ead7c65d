/// Types of status effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Halves accuracy.
    Blind,

    /// `value` damage each turn, bypassing shields.
    Poison,

    /// `value` damage each turn, bypassing shields.
    Burn,

    /// Cannot act.
    Stun,

    /// Damage dealt multiplied by 0.7.
    Weakness,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Absorbs up to `value` incoming attack damage.
    Shield,

    /// Heals `value` each turn.
    Regeneration,
}

impl StatusKind {
    pub const BLIND_ACCURACY: f32 = 0.5;
    pub const WEAKNESS_DAMAGE: f32 = 0.7;

    pub fn accuracy_multiplier(self) -> f32 {
        match self {
            StatusKind::Blind => Self::BLIND_ACCURACY,
            _ => 1.0,
        }
    }

    pub fn damage_multiplier(self) -> f32 {
        match self {
            StatusKind::Weakness => Self::WEAKNESS_DAMAGE,
            _ => 1.0,
        }
    }
}

/// A single timed effect instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Turns left. Removed at the tick that brings it to zero or below.
    pub remaining_duration: i32,
    /// Damage or heal per turn, or absorb capacity; ignored by the other kinds.
    pub value: i32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, duration: i32, value: i32) -> Self {
        Self {
            kind,
            remaining_duration: duration,
            value,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_duration <= 0
    }
}
