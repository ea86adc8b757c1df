//! Encounter pool table: which species can appear per biome, tier, and time.
//!
//! Content authors buckets of [`PoolEntry`] values through
//! [`EncounterTableBuilder`]; the finished [`EncounterTable`] answers
//! "what can appear here" by flattening a bucket into a plain species
//! sequence. Level thresholds inside evolution chains gate nothing at query
//! time - they exist for the encounter generator downstream and are dropped
//! by [`EncounterTable::resolve`].
mod entry;
mod error;
mod table;

pub use entry::{ChainStage, EvolutionChain, PoolEntry};
pub use error::PoolError;
pub use table::{EncounterTable, EncounterTableBuilder};
