//! Damage scaling and mitigation.

use crate::status::ActiveEffects;

/// Base damage scaled by the attacker's damage modifier, then by the crit multiplier.
///
/// Each scaling step rounds to the nearest integer and never goes below zero.
pub fn calculate_raw_damage(
    base_damage: i32,
    attacker_effects: &ActiveEffects,
    critical: bool,
    crit_multiplier: f64,
) -> i32 {
    let scaled = (base_damage as f64 * attacker_effects.damage_modifier() as f64).round();
    let scaled = if critical {
        (scaled * crit_multiplier).round()
    } else {
        scaled
    };
    (scaled as i32).max(0)
}

/// Breakdown of how incoming damage was reduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mitigation {
    pub absorbed: i32,
    pub mitigated: i32,
    /// What reaches health before clamping to current health.
    pub remaining: i32,
}

/// Shields first, then flat defense; the result is clamped at zero.
pub fn mitigate(raw: i32, target_effects: &mut ActiveEffects, defense: i32) -> Mitigation {
    let raw = raw.max(0);
    let absorbed = target_effects.absorb(raw);
    let after_shield = raw - absorbed;
    let mitigated = after_shield.min(defense.max(0));
    Mitigation {
        absorbed,
        mitigated,
        remaining: after_shield - mitigated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{StatusEffect, StatusKind};

    #[test]
    fn weakness_and_crit_scale_in_order() {
        let mut effects = ActiveEffects::empty();
        assert_eq!(calculate_raw_damage(20, &effects, false, 1.5), 20);
        assert_eq!(calculate_raw_damage(20, &effects, true, 1.5), 30);

        effects.add(StatusEffect::new(StatusKind::Weakness, 2, 0));
        // 20 × 0.7 = 14, × 1.5 = 21
        assert_eq!(calculate_raw_damage(20, &effects, true, 1.5), 21);
    }

    #[test]
    fn defense_never_heals() {
        let mut effects = ActiveEffects::empty();
        let m = mitigate(3, &mut effects, 10);
        assert_eq!(m.remaining, 0);
        assert_eq!(m.mitigated, 3);
    }

    #[test]
    fn shield_absorbs_before_defense() {
        let mut effects = ActiveEffects::empty();
        effects.add(StatusEffect::new(StatusKind::Shield, 3, 8));
        let m = mitigate(20, &mut effects, 5);
        assert_eq!(
            m,
            Mitigation {
                absorbed: 8,
                mitigated: 5,
                remaining: 7
            }
        );
    }
}
