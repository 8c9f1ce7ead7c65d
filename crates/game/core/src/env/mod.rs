//! Traits describing read-only collaborators.
//!
//! The content catalog supplies every template by id; the random source supplies every
//! roll. Both are injected into the engine so nothing reads ambient global state.
mod catalog;
mod error;
mod rng;

pub use catalog::{CatalogBuilder, CatalogOracle, CatalogSummary, ContentCatalog};
pub use error::CatalogError;
pub use rng::{CHANCE_SCALE, PcgRng, RandomSource};
