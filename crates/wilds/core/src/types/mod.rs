//! Closed world enumerations and identifiers used as table keys.
//!
//! All three key enums carry explicit discriminants and expose
//! `COUNT`/`all()`/`as_index()` so tables can be stored as dense
//! ordinal-indexed arrays instead of nested maps.
mod biome;
mod species;
mod tier;
mod time;

pub use biome::Biome;
pub use species::SpeciesId;
pub use tier::PoolTier;
pub use time::TimeOfDay;
