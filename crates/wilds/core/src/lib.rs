//! Deterministic wild-encounter and biome-progression queries.
//!
//! `wilds-core` defines the closed world enumerations, the encounter pool
//! table, and the weighted biome graph, and exposes pure read-only queries
//! over them. Both tables are built exactly once through the builders in
//! [`pool`] and [`graph`]; once built they are immutable and safe for any
//! number of concurrent readers. The crate owns no randomness: weighted
//! selection takes a caller-supplied draw, so every query is reproducible.
pub mod config;
pub mod error;
pub mod graph;
pub mod pool;
pub mod types;

pub use config::WorldConfig;
pub use error::{ErrorSeverity, WildsError};
pub use graph::{BiomeGraph, BiomeGraphBuilder, GraphError, WeightedLink};
pub use pool::{
    ChainStage, EncounterTable, EncounterTableBuilder, EvolutionChain, PoolEntry, PoolError,
};
pub use types::{Biome, PoolTier, SpeciesId, TimeOfDay};
