//! Enemy templates, spawning, and move selection.

pub mod enemy;
pub mod moves;
pub mod policy;

pub use enemy::{Enemy, EnemyTemplate};
pub use moves::{EnemyMove, MoveEntry};
pub use policy::{apply_cooldown, choose_move, tick_cooldowns};
