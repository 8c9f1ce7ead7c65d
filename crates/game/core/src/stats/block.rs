//! StatBlock - base and bonus values per attribute.
//!
//! `base` is what the character has trained (clamped ≥ 0); `bonus` is the sum of every
//! contribution from race, skill ranks, perks, and equipment (may be negative).
//! Everything downstream reads [`StatBlock::total`].

use std::collections::BTreeMap;

use super::attribute::Attribute;

/// Per-attribute base and bonus values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    base: [i32; Attribute::COUNT],
    bonus: [i32; Attribute::COUNT],
}

impl StatBlock {
    pub const DEFAULT_BASE: i32 = 10;

    /// All attributes at the default base value, no bonuses.
    pub fn new() -> Self {
        Self {
            base: [Self::DEFAULT_BASE; Attribute::COUNT],
            bonus: [0; Attribute::COUNT],
        }
    }

    pub fn base(&self, attr: Attribute) -> i32 {
        self.base[attr.index()]
    }

    pub fn bonus(&self, attr: Attribute) -> i32 {
        self.bonus[attr.index()]
    }

    pub fn total(&self, attr: Attribute) -> i32 {
        self.base(attr) + self.bonus(attr)
    }

    /// Ability modifier: `floor((total - 10) / 2)`.
    pub fn modifier(&self, attr: Attribute) -> i32 {
        (self.total(attr) - 10).div_euclid(2)
    }

    /// Sets the base value, clamped to zero.
    pub fn set_base(&mut self, attr: Attribute, value: i32) {
        self.base[attr.index()] = value.max(0);
    }

    /// Accumulates a bonus delta. Net negative bonuses are legal.
    pub fn add_bonus(&mut self, attr: Attribute, delta: i32) {
        self.bonus[attr.index()] += delta;
    }

    /// Adds every entry of a bonus map, scaled by `sign` (1 to apply, -1 to reverse).
    pub fn add_bonuses(&mut self, bonuses: &BTreeMap<Attribute, i32>, sign: i32) {
        for (attr, delta) in bonuses {
            self.add_bonus(*attr, delta * sign);
        }
    }

    pub fn iter_totals(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.total(a)))
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new()
    }
}
