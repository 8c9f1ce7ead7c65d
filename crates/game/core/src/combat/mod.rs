//! Combat resolution system.
//!
//! This module provides the functions for resolving a single attack. Everything except
//! the final mutation of the target's health and effects is a pure function, and every
//! random decision is drawn from an injected [`RandomSource`](crate::env::RandomSource).
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (hit, crit, mitigation, on-hit effects)
//! - `calculate_hit_chance`: Accuracy scaled by the attacker's status effects
//! - `calculate_raw_damage`: Damage scaled by status effects and crits
//! - `mitigate`: Shield absorption then flat defense

pub mod attack;
pub mod combatant;
pub mod damage;
pub mod hit;
pub mod result;

pub use attack::{AttackCategory, AttackDefinition, EffectChance};
pub use combatant::Combatant;
pub use damage::{Mitigation, calculate_raw_damage, mitigate};
pub use hit::{calculate_hit_chance, check_crit, check_hit};
pub use result::{AttackOutcome, AttackReport, resolve_attack};
