//! Skills and perks: immutable definitions, per-character progress, and the shared gate.

pub mod definition;
pub mod graph;
pub mod progress;

pub use definition::{RankBonus, UnlockDefinition, UnlockKind};
pub use graph::{UnlockOwner, can_unlock, check_unlock, find_cycle};
pub use progress::UnlockProgress;
