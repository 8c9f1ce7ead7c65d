//! Active status effects on a combatant.
//!
//! # Turn Tick
//!
//! Each tick decrements every effect by one turn, then applies its per-turn payload:
//! Poison and Burn damage health directly (shields do not intercept them), Regeneration
//! heals. Effects at zero or below are removed afterwards. Same-kind effects never merge;
//! each instance is ticked on its own.
//!
//! # Shields
//!
//! Shields intercept attack damage through [`ActiveEffects::absorb`]. A shield whose
//! capacity is spent has its duration forced to zero and is dropped at the next tick.

use arrayvec::ArrayVec;

use super::effect::{StatusEffect, StatusKind};
use crate::config::GameConfig;
use crate::stats::ResourceMeter;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffects {
    effects: ArrayVec<StatusEffect, { GameConfig::MAX_STATUS_EFFECTS }>,
}

/// What a tick did to its owner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub damage_taken: i32,
    pub healed: i32,
    pub expired: Vec<StatusKind>,
}

impl ActiveEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Adds an effect instance.
    ///
    /// Returns false (and drops the effect) when the duration is not positive or the
    /// list is full.
    pub fn add(&mut self, effect: StatusEffect) -> bool {
        if effect.remaining_duration <= 0 {
            return false;
        }
        if self.effects.try_push(effect).is_err() {
            tracing::debug!(kind = %effect.kind, "status effect dropped: list full");
            return false;
        }
        true
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn count(&self, kind: StatusKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }

    /// Product of every effect's accuracy multiplier; two Blinds give 0.25.
    pub fn accuracy_modifier(&self) -> f32 {
        self.effects
            .iter()
            .map(|e| e.kind.accuracy_multiplier())
            .product()
    }

    /// Product of every effect's damage multiplier.
    pub fn damage_modifier(&self) -> f32 {
        self.effects
            .iter()
            .map(|e| e.kind.damage_multiplier())
            .product()
    }

    /// No active Stun.
    pub fn can_act(&self) -> bool {
        !self.has(StatusKind::Stun)
    }

    /// Remaining absorb capacity across all live shields.
    pub fn shield_capacity(&self) -> i32 {
        self.effects
            .iter()
            .filter(|e| e.kind == StatusKind::Shield && !e.is_expired())
            .map(|e| e.value.max(0))
            .sum()
    }

    /// Runs `incoming` damage through shields in insertion order.
    ///
    /// Returns the amount absorbed. Each shield gives up `min(remaining, value)`.
    pub fn absorb(&mut self, incoming: i32) -> i32 {
        let mut remaining = incoming.max(0);
        let mut absorbed = 0;

        for shield in self
            .effects
            .iter_mut()
            .filter(|e| e.kind == StatusKind::Shield && !e.is_expired())
        {
            if remaining == 0 {
                break;
            }
            let taken = remaining.min(shield.value.max(0));
            shield.value -= taken;
            remaining -= taken;
            absorbed += taken;
            if shield.value <= 0 {
                shield.remaining_duration = 0;
            }
        }

        absorbed
    }

    /// Advances every effect by one turn against the owner's health.
    pub fn tick(&mut self, health: &mut ResourceMeter) -> TickReport {
        let mut report = TickReport::default();

        for effect in self.effects.iter_mut() {
            effect.remaining_duration -= 1;
            match effect.kind {
                StatusKind::Poison | StatusKind::Burn => {
                    report.damage_taken += health.apply_damage(effect.value);
                }
                StatusKind::Regeneration => {
                    report.healed += health.heal(effect.value);
                }
                _ => {}
            }
        }

        self.effects.retain(|e| {
            if e.is_expired() {
                report.expired.push(e.kind);
                false
            } else {
                true
            }
        });

        if !report.expired.is_empty() {
            tracing::debug!(expired = ?report.expired, "status effects expired");
        }
        report
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poison_ticks_then_expires() {
        let mut effects = ActiveEffects::empty();
        let mut health = ResourceMeter::full(50);
        assert!(effects.add(StatusEffect::new(StatusKind::Poison, 2, 4)));

        let first = effects.tick(&mut health);
        assert_eq!(first.damage_taken, 4);
        assert!(first.expired.is_empty());

        let second = effects.tick(&mut health);
        assert_eq!(second.damage_taken, 4);
        assert_eq!(second.expired, vec![StatusKind::Poison]);
        assert_eq!(health.current(), 42);
        assert!(effects.is_empty());
    }

    #[test]
    fn damage_over_time_bypasses_shield() {
        let mut effects = ActiveEffects::empty();
        let mut health = ResourceMeter::full(50);
        effects.add(StatusEffect::new(StatusKind::Shield, 5, 100));
        effects.add(StatusEffect::new(StatusKind::Burn, 3, 6));

        effects.tick(&mut health);
        assert_eq!(health.current(), 44);
        assert_eq!(effects.shield_capacity(), 100);
    }

    #[test]
    fn regeneration_is_capped_at_maximum() {
        let mut effects = ActiveEffects::empty();
        let mut health = ResourceMeter::new(45, 50);
        effects.add(StatusEffect::new(StatusKind::Regeneration, 3, 10));
        let report = effects.tick(&mut health);
        assert_eq!(report.healed, 5);
        assert_eq!(health.current(), 50);
    }

    #[test]
    fn modifiers_compound_multiplicatively() {
        let mut effects = ActiveEffects::empty();
        effects.add(StatusEffect::new(StatusKind::Blind, 3, 0));
        effects.add(StatusEffect::new(StatusKind::Blind, 3, 0));
        effects.add(StatusEffect::new(StatusKind::Weakness, 3, 0));
        assert!((effects.accuracy_modifier() - 0.25).abs() < 1e-6);
        assert!((effects.damage_modifier() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn same_kind_effects_do_not_merge() {
        let mut effects = ActiveEffects::empty();
        effects.add(StatusEffect::new(StatusKind::Poison, 1, 2));
        effects.add(StatusEffect::new(StatusKind::Poison, 3, 2));
        assert_eq!(effects.count(StatusKind::Poison), 2);

        let mut health = ResourceMeter::full(20);
        effects.tick(&mut health);
        assert_eq!(health.current(), 16);
        assert_eq!(effects.count(StatusKind::Poison), 1);
    }

    #[test]
    fn absorb_spans_shields_and_forces_expiry() {
        let mut effects = ActiveEffects::empty();
        effects.add(StatusEffect::new(StatusKind::Shield, 5, 10));
        effects.add(StatusEffect::new(StatusKind::Shield, 5, 10));

        assert_eq!(effects.absorb(15), 15);
        assert_eq!(effects.shield_capacity(), 5);

        let depleted: Vec<_> = effects.iter().map(|e| e.remaining_duration).collect();
        assert_eq!(depleted, vec![0, 5]);

        assert_eq!(effects.absorb(20), 5);
        assert_eq!(effects.shield_capacity(), 0);
    }

    #[test]
    fn stun_prevents_action() {
        let mut effects = ActiveEffects::empty();
        assert!(effects.can_act());
        effects.add(StatusEffect::new(StatusKind::Stun, 1, 0));
        assert!(!effects.can_act());
        effects.tick(&mut ResourceMeter::full(10));
        assert!(effects.can_act());
    }

    #[test]
    fn rejects_non_positive_duration_and_overflow() {
        let mut effects = ActiveEffects::empty();
        assert!(!effects.add(StatusEffect::new(StatusKind::Blind, 0, 0)));
        for _ in 0..GameConfig::MAX_STATUS_EFFECTS {
            assert!(effects.add(StatusEffect::new(StatusKind::Blind, 2, 0)));
        }
        assert!(!effects.add(StatusEffect::new(StatusKind::Blind, 2, 0)));
        assert_eq!(effects.len(), GameConfig::MAX_STATUS_EFFECTS);
    }
}
