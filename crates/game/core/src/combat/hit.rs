//! Hit and critical checks.

use crate::env::RandomSource;
use crate::status::ActiveEffects;

/// Effective hit chance: attack accuracy scaled by the attacker's accuracy modifier.
///
/// # Formula
///
/// ```text
/// hit_chance = accuracy × Π(effect accuracy multipliers)
/// clamped to [0, 1]
/// ```
pub fn calculate_hit_chance(accuracy: f64, attacker_effects: &ActiveEffects) -> f64 {
    (accuracy * attacker_effects.accuracy_modifier() as f64).clamp(0.0, 1.0)
}

/// Rolls the hit. Consumes one draw.
pub fn check_hit(
    accuracy: f64,
    attacker_effects: &ActiveEffects,
    rng: &mut (impl RandomSource + ?Sized),
) -> bool {
    rng.chance(calculate_hit_chance(accuracy, attacker_effects))
}

/// Rolls the crit. Consumes one draw; only called once the attack has hit.
pub fn check_crit(crit_chance: f64, rng: &mut (impl RandomSource + ?Sized)) -> bool {
    rng.chance(crit_chance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{StatusEffect, StatusKind};

    #[test]
    fn blind_halves_hit_chance() {
        let mut effects = ActiveEffects::empty();
        assert!((calculate_hit_chance(0.9, &effects) - 0.9).abs() < 1e-9);
        effects.add(StatusEffect::new(StatusKind::Blind, 2, 0));
        assert!((calculate_hit_chance(0.9, &effects) - 0.45).abs() < 1e-6);
    }
}
