//! Attack resolution.

use super::attack::AttackDefinition;
use super::combatant::Combatant;
use super::damage::{calculate_raw_damage, mitigate};
use super::hit::{check_crit, check_hit};
use crate::env::RandomSource;
use crate::status::StatusEffect;

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Miss,
    Hit,
    Critical,
}

impl AttackOutcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// Everything one attack did. `applied` is what actually left the target's health.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attack_id: String,
    pub outcome: AttackOutcome,
    /// Damage after attacker modifiers and crit, before shields and defense.
    pub nominal: i32,
    pub absorbed: i32,
    pub mitigated: i32,
    pub applied: i32,
    pub effects_applied: Vec<StatusEffect>,
    pub target_defeated: bool,
}

impl AttackReport {
    fn miss(attack_id: &str) -> Self {
        Self {
            attack_id: attack_id.to_owned(),
            outcome: AttackOutcome::Miss,
            nominal: 0,
            absorbed: 0,
            mitigated: 0,
            applied: 0,
            effects_applied: Vec::new(),
            target_defeated: false,
        }
    }
}

/// Resolve one attack from `attacker` against `target`.
///
/// # Sequence
///
/// 1. Hit roll against `accuracy × attacker accuracy modifier`
/// 2. Raw damage `base × attacker damage modifier`
/// 3. Crit roll (only on hit), multiplies by `crit_multiplier`
/// 4. Target shields absorb, then target defense subtracts, clamped at zero
/// 5. Remaining damage is applied to target health
/// 6. On-hit status effects roll independently, in definition order, if the target
///    survived
///
/// # Returns
///
/// A report carrying the applied damage rather than the nominal roll.
pub fn resolve_attack<A, T, R>(
    attacker: &A,
    target: &mut T,
    attack: &AttackDefinition,
    rng: &mut R,
) -> AttackReport
where
    A: Combatant + ?Sized,
    T: Combatant + ?Sized,
    R: RandomSource + ?Sized,
{
    if !check_hit(attack.accuracy, attacker.effects(), rng) {
        tracing::debug!(attacker = attacker.name(), attack = %attack.id, "miss");
        return AttackReport::miss(&attack.id);
    }

    let critical = check_crit(attack.crit_chance, rng);
    let nominal = calculate_raw_damage(
        attack.base_damage,
        attacker.effects(),
        critical,
        attack.crit_multiplier,
    );

    let defense = target.defense();
    let (health, effects) = target.vitals_mut();
    let mitigation = mitigate(nominal, effects, defense);
    let applied = health.apply_damage(mitigation.remaining);
    let target_defeated = health.is_depleted();

    let mut effects_applied = Vec::new();
    for on_hit in &attack.on_hit {
        if rng.chance(on_hit.chance) && !target_defeated {
            let effect = on_hit.effect();
            if effects.add(effect) {
                effects_applied.push(effect);
            }
        }
    }

    let report = AttackReport {
        attack_id: attack.id.clone(),
        outcome: if critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        nominal,
        absorbed: mitigation.absorbed,
        mitigated: mitigation.mitigated,
        applied,
        effects_applied,
        target_defeated,
    };

    tracing::debug!(
        attacker = attacker.name(),
        target = target.name(),
        attack = %attack.id,
        outcome = %report.outcome,
        applied = report.applied,
        "attack resolved"
    );
    report
}
