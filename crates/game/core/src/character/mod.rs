//! The player character aggregate.
//!
//! A [`Character`] composes every per-owner record: stat block, progression ledger, skill
//! and perk progress, loadout, flat resource bonuses, resource meters, and active effects.
//! Every command that changes a stat total ends with [`Character::recompute`], which
//! rebuilds maximums from totals and clamps current values.

mod builder;
mod snapshot;

pub use builder::CharacterBuilder;
pub use snapshot::{CharacterSnapshot, SNAPSHOT_VERSION, SnapshotError};

use crate::combat::{AttackDefinition, Combatant};
use crate::equipment::{self, EquipmentDefinition, EquipmentSlot, EquippedItem, Loadout};
use crate::gate::GateFailure;
use crate::progression::{LevelUpReport, PointPool, ProgressionLedger};
use crate::race::Race;
use crate::stats::{
    Attribute, ResourceBonuses, ResourceKind, ResourceMaximums, ResourceMeter, ResourceMeters,
    StatBlock,
};
use crate::status::ActiveEffects;
use crate::unlock::{self, RankBonus, UnlockDefinition, UnlockKind, UnlockOwner, UnlockProgress};

/// Result of a successful skill or perk purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeReport {
    pub id: String,
    pub kind: UnlockKind,
    pub new_rank: u32,
    pub cost: u32,
}

/// Result of a successful equip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipReport {
    pub slot: EquipmentSlot,
    pub item_id: String,
    /// Item that occupied the slot and was unequipped first.
    pub replaced: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    name: String,
    race: Race,
    stats: StatBlock,
    ledger: ProgressionLedger,
    skills: UnlockProgress,
    perks: UnlockProgress,
    loadout: Loadout,
    resource_bonuses: ResourceBonuses,
    resources: ResourceMeters,
    effects: ActiveEffects,
}

impl Character {
    pub fn builder(name: impl Into<String>, race: Race) -> CharacterBuilder {
        CharacterBuilder::new(name, race)
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn ledger(&self) -> &ProgressionLedger {
        &self.ledger
    }

    pub fn level(&self) -> u32 {
        self.ledger.level()
    }

    pub fn skills(&self) -> &UnlockProgress {
        &self.skills
    }

    pub fn perks(&self) -> &UnlockProgress {
        &self.perks
    }

    pub fn progress(&self, kind: UnlockKind) -> &UnlockProgress {
        match kind {
            UnlockKind::Skill => &self.skills,
            UnlockKind::Perk => &self.perks,
        }
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn resource_bonuses(&self) -> &ResourceBonuses {
        &self.resource_bonuses
    }

    pub fn resources(&self) -> &ResourceMeters {
        &self.resources
    }

    pub fn meter(&self, kind: ResourceKind) -> &ResourceMeter {
        self.resources.get(kind)
    }

    pub fn maximums(&self) -> ResourceMaximums {
        ResourceMaximums::compute(&self.stats, &self.resource_bonuses)
    }

    // ========================================================================
    // Stats & resources
    // ========================================================================

    /// Rebuilds derived maximums from stat totals and clamps current values.
    pub fn recompute(&mut self) {
        let maximums = self.maximums();
        self.resources.apply_maximums(&maximums);
    }

    pub fn set_base_stat(&mut self, attr: Attribute, value: i32) {
        self.stats.set_base(attr, value);
        self.recompute();
    }

    /// Moves `amount` points from the stat pool into `attr`'s base value.
    ///
    /// # Errors
    ///
    /// [`GateFailure::Points`] if the pool is short; nothing changes.
    pub fn allocate_stat_point(&mut self, attr: Attribute, amount: u32) -> Result<(), GateFailure> {
        if amount == 0 {
            return Ok(());
        }
        let available = self.ledger.points(PointPool::Stat);
        if !self.ledger.spend_points(PointPool::Stat, amount) {
            return Err(GateFailure::Points {
                pool: PointPool::Stat,
                required: amount,
                available,
            });
        }
        let raised = self.stats.base(attr).saturating_add(amount as i32);
        self.stats.set_base(attr, raised);
        self.recompute();
        tracing::debug!(character = %self.name, %attr, amount, "stat points allocated");
        Ok(())
    }

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.resources.health.apply_damage(amount)
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        self.resources.health.heal(amount)
    }

    pub fn effects_mut(&mut self) -> &mut ActiveEffects {
        &mut self.effects
    }

    /// Deducts an attack's energy and magic cost if both can be paid in full.
    pub fn pay_attack_cost(&mut self, attack: &AttackDefinition) -> bool {
        let energy = attack.energy_cost.max(0);
        let magic = attack.magic_cost.max(0);
        if self.resources.energy.current() < energy || self.resources.magic.current() < magic {
            return false;
        }
        self.resources.energy.apply_damage(energy);
        self.resources.magic.apply_damage(magic);
        true
    }

    // ========================================================================
    // Progression
    // ========================================================================

    pub fn add_experience(&mut self, amount: i64) -> LevelUpReport {
        let report = self.ledger.add_experience(amount);
        if report.levels_gained() > 0 {
            tracing::debug!(
                character = %self.name,
                from = report.previous_level,
                to = report.new_level,
                "character leveled"
            );
        }
        report
    }

    pub fn set_level(&mut self, level: u32) {
        self.ledger.set_level(level);
    }

    pub fn grant_points(&mut self, pool: PointPool, amount: u32) {
        self.ledger.grant_points(pool, amount);
    }

    // ========================================================================
    // Unlocks
    // ========================================================================

    pub fn check_unlock(&self, def: &UnlockDefinition) -> Result<(), GateFailure> {
        unlock::check_unlock(self, def)
    }

    pub fn can_unlock(&self, def: &UnlockDefinition) -> bool {
        unlock::can_unlock(self, def)
    }

    /// Buys the next rank of `def`.
    ///
    /// Re-runs the full gate first; on failure nothing changes. On success the cost is
    /// deducted, the rank increments, and this rank's bonus is applied once.
    pub fn upgrade(&mut self, def: &UnlockDefinition) -> Result<UpgradeReport, GateFailure> {
        self.check_unlock(def)?;

        let rank = self.progress(def.kind).rank(&def.id);
        let cost = def.next_rank_cost(rank);
        if !self.ledger.spend_points(def.pool(), cost) {
            return Err(GateFailure::Points {
                pool: def.pool(),
                required: cost,
                available: self.ledger.points(def.pool()),
            });
        }

        let new_rank = self.progress_mut(def.kind).increment(&def.id);
        self.apply_rank_bonus(&def.per_rank, 1);
        self.recompute();

        tracing::debug!(
            character = %self.name,
            kind = %def.kind,
            id = %def.id,
            rank = new_rank,
            cost,
            "unlock upgraded"
        );
        Ok(UpgradeReport {
            id: def.id.clone(),
            kind: def.kind,
            new_rank,
            cost,
        })
    }

    /// Grants rank 1 without gates or cost. Used for race starting perks.
    pub(crate) fn grant_free_rank(&mut self, def: &UnlockDefinition) -> bool {
        if self.progress(def.kind).rank(&def.id) >= def.max_rank {
            return false;
        }
        self.progress_mut(def.kind).increment(&def.id);
        self.apply_rank_bonus(&def.per_rank, 1);
        self.recompute();
        true
    }

    fn progress_mut(&mut self, kind: UnlockKind) -> &mut UnlockProgress {
        match kind {
            UnlockKind::Skill => &mut self.skills,
            UnlockKind::Perk => &mut self.perks,
        }
    }

    fn apply_rank_bonus(&mut self, bonus: &RankBonus, times: i32) {
        self.stats.add_bonuses(&bonus.stats, times);
        self.resource_bonuses.add_all(&bonus.resources, times);
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    /// Level, race and stat gates against current totals, minus whatever the item in the
    /// target slot contributes, since equipping removes it first.
    pub fn check_equip(&self, item: &EquipmentDefinition) -> Result<(), GateFailure> {
        match self.loadout.get(item.slot) {
            Some(occupant) => {
                let mut without = self.stats.clone();
                without.add_bonuses(&occupant.applied.stats, -1);
                equipment::check_equip(item, self.level(), self.race, &without)
            }
            None => equipment::check_equip(item, self.level(), self.race, &self.stats),
        }
    }

    pub fn can_equip(&self, item: &EquipmentDefinition) -> bool {
        self.check_equip(item).is_ok()
    }

    /// Wears `item`, unequipping the slot's occupant first.
    ///
    /// Gates are checked before anything changes, against the totals the character will
    /// have once the occupant is gone. A rejected swap leaves the occupant in place.
    pub fn equip(&mut self, item: &EquipmentDefinition) -> Result<EquipReport, GateFailure> {
        self.check_equip(item)?;

        let replaced = self.unequip(item.slot).map(|old| old.item_id);

        let applied = item.bonuses.clone();
        self.stats.add_bonuses(&applied.stats, 1);
        self.resource_bonuses.add_all(&applied.resources, 1);
        self.loadout.insert(
            item.slot,
            EquippedItem {
                item_id: item.id.clone(),
                applied,
            },
        );
        self.recompute();

        tracing::debug!(character = %self.name, slot = %item.slot, item = %item.id, "equipped");
        Ok(EquipReport {
            slot: item.slot,
            item_id: item.id.clone(),
            replaced,
        })
    }

    /// Removes the item in `slot` and reverses exactly the delta it applied.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<EquippedItem> {
        let removed = self.loadout.remove(slot)?;
        self.stats.add_bonuses(&removed.applied.stats, -1);
        self.resource_bonuses.add_all(&removed.applied.resources, -1);
        self.recompute();
        tracing::debug!(character = %self.name, %slot, item = %removed.item_id, "unequipped");
        Some(removed)
    }

    /// Equips without gates, using the item's current bonuses. Used by snapshot restore.
    pub(crate) fn force_equip(&mut self, item: &EquipmentDefinition) {
        let applied = item.bonuses.clone();
        self.stats.add_bonuses(&applied.stats, 1);
        self.resource_bonuses.add_all(&applied.resources, 1);
        self.loadout.insert(
            item.slot,
            EquippedItem {
                item_id: item.id.clone(),
                applied,
            },
        );
    }
}

impl UnlockOwner for Character {
    fn level(&self) -> u32 {
        self.ledger.level()
    }

    fn race(&self) -> Race {
        self.race
    }

    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn available_points(&self, kind: UnlockKind) -> u32 {
        self.ledger.points(kind.pool())
    }

    fn rank_of(&self, kind: UnlockKind, id: &str) -> u32 {
        self.progress(kind).rank(id)
    }
}

impl Combatant for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &ResourceMeter {
        &self.resources.health
    }

    fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    fn defense(&self) -> i32 {
        self.loadout.defense()
    }

    fn vitals_mut(&mut self) -> (&mut ResourceMeter, &mut ActiveEffects) {
        (&mut self.resources.health, &mut self.effects)
    }
}
