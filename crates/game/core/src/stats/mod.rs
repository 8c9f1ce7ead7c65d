//! Stat model.
//!
//! ```text
//! [ StatBlock (base + bonus per Attribute) ]
//!      ↓ total()
//! [ ResourceMaximums (+ flat ResourceBonuses) ]
//!      ↓ clamp
//! [ ResourceMeters (current values) ]
//! ```
//!
//! Maximums are always recomputed from totals, never patched incrementally.

pub mod attribute;
pub mod block;
pub mod resources;

pub use attribute::Attribute;
pub use block::StatBlock;
pub use resources::{
    ResourceBonuses, ResourceKind, ResourceMaximums, ResourceMeter, ResourceMeters,
};
