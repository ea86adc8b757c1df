//! Authored world-progression content.
//!
//! This crate houses the static game-design data consumed by the progression
//! controller: encounter pools per biome/tier/time of day, and the weighted
//! biome links that drive next-biome selection. Data is expressed in code
//! against the `wilds-core` builders and constructed exactly once at startup
//! via [`world_tables`] - there are no globals and no import-time side
//! effects. Content never appears in game state; the core only reads it.

pub mod links;
pub mod pools;
pub mod species;

pub use links::biome_links;
pub use pools::encounter_pools;

use anyhow::Result;
use wilds_core::{BiomeGraph, EncounterTable};

/// Builds the full immutable content set.
///
/// Call once during application startup and hand the tables to consumers;
/// both are safe for unbounded concurrent readers afterward.
pub fn world_tables() -> Result<(EncounterTable, BiomeGraph)> {
    Ok((encounter_pools()?, biome_links()?))
}
