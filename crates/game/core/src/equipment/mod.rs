//! Equipment definitions, wearability checks and the per-character loadout.

pub mod definition;
pub mod loadout;

pub use definition::{EquipmentBonuses, EquipmentDefinition, EquipmentSlot};
pub use loadout::{EquippedItem, Loadout};

use crate::gate::GateFailure;
use crate::race::Race;
use crate::stats::StatBlock;

/// Level, race and stat check for wearing `item`, against current totals.
pub fn check_equip(
    item: &EquipmentDefinition,
    level: u32,
    race: Race,
    stats: &StatBlock,
) -> Result<(), GateFailure> {
    item.requirements.check(level, race, stats)
}
