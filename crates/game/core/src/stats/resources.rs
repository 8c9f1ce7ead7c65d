//! Derived resources.
//!
//! Resource pools (Health, Energy, Magic, Friendship) are partially stored:
//! - Maximum values: Computed from stat totals plus flat bonuses (NOT stored)
//! - Current values: Game state (MUST be stored)
//!
//! Formulas:
//! - Health_max = 30 + STR × 2 + CON × 3
//! - Energy_max = 30 + CON × 2 + DEX
//! - Magic_max = 30 + INT × 3 + WIS
//! - Friendship_max = 30 + CHA × 2 + WIS × 2

use std::collections::BTreeMap;

use super::attribute::Attribute;
use super::block::StatBlock;

// ============================================================================
// Resource Kind
// ============================================================================

/// Enum representing individual resource types.
///
/// Used by skill ranks and equipment to reference a specific maximum.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Health,
    Energy,
    Magic,
    Friendship,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Health,
        ResourceKind::Energy,
        ResourceKind::Magic,
        ResourceKind::Friendship,
    ];
}

/// Flat additions to resource maximums, accumulated from skill ranks and equipment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceBonuses {
    pub health: i32,
    pub energy: i32,
    pub magic: i32,
    pub friendship: i32,
}

impl ResourceBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Health => self.health,
            ResourceKind::Energy => self.energy,
            ResourceKind::Magic => self.magic,
            ResourceKind::Friendship => self.friendship,
        }
    }

    pub fn add(&mut self, kind: ResourceKind, delta: i32) {
        match kind {
            ResourceKind::Health => self.health += delta,
            ResourceKind::Energy => self.energy += delta,
            ResourceKind::Magic => self.magic += delta,
            ResourceKind::Friendship => self.friendship += delta,
        }
    }

    /// Adds every entry of a bonus map, scaled by `sign`.
    pub fn add_all(&mut self, bonuses: &BTreeMap<ResourceKind, i32>, sign: i32) {
        for (kind, delta) in bonuses {
            self.add(*kind, delta * sign);
        }
    }
}

/// Maximum resource values computed from stats.
///
/// These are NOT stored - always recomputed from the stat block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMaximums {
    pub health: i32,
    pub energy: i32,
    pub magic: i32,
    pub friendship: i32,
}

impl ResourceMaximums {
    const FLOOR: i32 = 30;

    /// Computes every maximum from stat totals, then adds the flat bonuses.
    ///
    /// Maximums never drop below 1.
    pub fn compute(stats: &StatBlock, bonuses: &ResourceBonuses) -> Self {
        let strength = stats.total(Attribute::Strength);
        let dex = stats.total(Attribute::Dexterity);
        let con = stats.total(Attribute::Constitution);
        let int = stats.total(Attribute::Intelligence);
        let wis = stats.total(Attribute::Wisdom);
        let cha = stats.total(Attribute::Charisma);

        Self {
            health: (Self::FLOOR + strength * 2 + con * 3 + bonuses.health).max(1),
            energy: (Self::FLOOR + con * 2 + dex + bonuses.energy).max(1),
            magic: (Self::FLOOR + int * 3 + wis + bonuses.magic).max(1),
            friendship: (Self::FLOOR + cha * 2 + wis * 2 + bonuses.friendship).max(1),
        }
    }

    pub fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Health => self.health,
            ResourceKind::Energy => self.energy,
            ResourceKind::Magic => self.magic,
            ResourceKind::Friendship => self.friendship,
        }
    }
}

// ============================================================================
// Meters
// ============================================================================

/// A current/maximum pair. `current` always stays within `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: i32,
    maximum: i32,
}

impl ResourceMeter {
    /// Creates a full meter.
    pub fn full(maximum: i32) -> Self {
        let maximum = maximum.max(0);
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Creates a meter with the given current value, clamped into range.
    pub fn new(current: i32, maximum: i32) -> Self {
        let maximum = maximum.max(0);
        Self {
            current: current.clamp(0, maximum),
            maximum,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount` and returns how much was actually removed.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        let applied = amount.max(0).min(self.current);
        self.current -= applied;
        applied
    }

    /// Restores up to `amount` and returns how much was actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let restored = amount.max(0).min(self.maximum - self.current);
        self.current += restored;
        restored
    }

    /// Replaces the maximum and clamps the current value into the new range.
    pub fn set_maximum(&mut self, maximum: i32) {
        self.maximum = maximum.max(0);
        self.current = self.current.min(self.maximum);
    }
}

/// All four meters of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeters {
    pub health: ResourceMeter,
    pub energy: ResourceMeter,
    pub magic: ResourceMeter,
    pub friendship: ResourceMeter,
}

impl ResourceMeters {
    pub fn full(maximums: &ResourceMaximums) -> Self {
        Self {
            health: ResourceMeter::full(maximums.health),
            energy: ResourceMeter::full(maximums.energy),
            magic: ResourceMeter::full(maximums.magic),
            friendship: ResourceMeter::full(maximums.friendship),
        }
    }

    /// Applies freshly computed maximums; current values are clamped, never refilled.
    pub fn apply_maximums(&mut self, maximums: &ResourceMaximums) {
        self.health.set_maximum(maximums.health);
        self.energy.set_maximum(maximums.energy);
        self.magic.set_maximum(maximums.magic);
        self.friendship.set_maximum(maximums.friendship);
    }

    pub fn get(&self, kind: ResourceKind) -> &ResourceMeter {
        match kind {
            ResourceKind::Health => &self.health,
            ResourceKind::Energy => &self.energy,
            ResourceKind::Magic => &self.magic,
            ResourceKind::Friendship => &self.friendship,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut ResourceMeter {
        match kind {
            ResourceKind::Health => &mut self.health,
            ResourceKind::Energy => &mut self.energy,
            ResourceKind::Magic => &mut self.magic,
            ResourceKind::Friendship => &mut self.friendship,
        }
    }
}
