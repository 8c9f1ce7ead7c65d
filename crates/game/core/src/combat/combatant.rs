use crate::stats::ResourceMeter;
use crate::status::{ActiveEffects, TickReport};

/// Anything that can attack or be attacked: the player character or a spawned enemy.
pub trait Combatant {
    fn name(&self) -> &str;

    fn health(&self) -> &ResourceMeter;

    fn effects(&self) -> &ActiveEffects;

    /// Flat damage reduction applied after shields.
    fn defense(&self) -> i32;

    /// Health and effects borrowed together, so shields and damage can be applied in one
    /// pass.
    fn vitals_mut(&mut self) -> (&mut ResourceMeter, &mut ActiveEffects);

    fn is_alive(&self) -> bool {
        !self.health().is_depleted()
    }

    /// Alive and not stunned.
    fn can_act(&self) -> bool {
        self.is_alive() && self.effects().can_act()
    }

    /// Start-of-turn status effect tick.
    fn tick_effects(&mut self) -> TickReport {
        let (health, effects) = self.vitals_mut();
        effects.tick(health)
    }
}
