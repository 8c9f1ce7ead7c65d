use std::collections::BTreeMap;

use crate::gate::Requirements;
use crate::stats::{Attribute, ResourceKind};

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
pub enum EquipmentSlot {
    Head,
    Neck,
    Chest,
    Back,
    Hands,
    Legs,
    Feet,
    Weapon,
    OffHand,
    Accessory,
    Ring,
    Trinket,
}

/// Everything an item contributes while worn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipmentBonuses {
    pub stats: BTreeMap<Attribute, i32>,
    pub resources: BTreeMap<ResourceKind, i32>,
    pub defense: i32,
}

impl EquipmentBonuses {
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.resources.is_empty() && self.defense == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub slot: EquipmentSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Requirements,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: EquipmentBonuses,
}

impl EquipmentDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slot: EquipmentSlot) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            slot,
            requirements: Requirements::none(),
            bonuses: EquipmentBonuses::default(),
        }
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_stat_bonus(mut self, attr: Attribute, delta: i32) -> Self {
        self.bonuses.stats.insert(attr, delta);
        self
    }

    pub fn with_resource_bonus(mut self, kind: ResourceKind, delta: i32) -> Self {
        self.bonuses.resources.insert(kind, delta);
        self
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.bonuses.defense = defense;
        self
    }
}
