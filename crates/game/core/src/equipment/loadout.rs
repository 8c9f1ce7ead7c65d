//! Worn items and the exact deltas each one contributed.
//!
//! The loadout records the bonuses applied at equip time and hands that same record back
//! on unequip, so reversal never depends on the item's current nominal values.

use std::collections::BTreeMap;

use super::definition::{EquipmentBonuses, EquipmentSlot};

/// An item in a slot together with the delta it applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquippedItem {
    pub item_id: String,
    pub applied: EquipmentBonuses,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Loadout {
    slots: BTreeMap<EquipmentSlot, EquippedItem>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&EquippedItem> {
        self.slots.get(&slot)
    }

    pub fn item_id(&self, slot: EquipmentSlot) -> Option<&str> {
        self.slots.get(&slot).map(|e| e.item_id.as_str())
    }

    /// Places an item, returning whatever occupied the slot before.
    pub fn insert(&mut self, slot: EquipmentSlot, item: EquippedItem) -> Option<EquippedItem> {
        self.slots.insert(slot, item)
    }

    pub fn remove(&mut self, slot: EquipmentSlot) -> Option<EquippedItem> {
        self.slots.remove(&slot)
    }

    /// Sum of defense contributed by every worn item.
    pub fn defense(&self) -> i32 {
        self.slots.values().map(|e| e.applied.defense).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &EquippedItem)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
