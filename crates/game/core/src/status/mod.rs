//! Timed status effects.

pub mod active;
pub mod effect;

pub use active::{ActiveEffects, TickReport};
pub use effect::{StatusEffect, StatusKind};
