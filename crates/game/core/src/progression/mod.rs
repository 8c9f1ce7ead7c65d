//! Experience, levels and point pools.

pub mod curve;
pub mod ledger;

pub use curve::{ExperienceCurve, PointAward};
pub use ledger::{LevelUpReport, PointPool, ProgressionLedger};
