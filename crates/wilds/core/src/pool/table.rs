//! Dense encounter pool table and the pool resolver.

use crate::pool::PoolEntry;
use crate::types::{Biome, PoolTier, SpeciesId, TimeOfDay};

/// Ordered entries authored for one (biome, tier, time) combination.
type Bucket = Vec<PoolEntry>;

/// All buckets of one biome, indexed by tier then time of day.
type BiomeBuckets = [[Bucket; TimeOfDay::COUNT]; PoolTier::COUNT];

fn empty_biome_buckets() -> BiomeBuckets {
    std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()))
}

/// Immutable encounter pool table keyed by biome, rarity tier, and time of day.
///
/// Storage is dense: every (biome, tier, time) bucket exists, so a
/// combination the design left unauthored is an ordinary empty bucket rather
/// than a missing map key. Built once through [`EncounterTableBuilder`];
/// afterward queries are pure and safe for unbounded concurrent readers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterTable {
    /// One [`BiomeBuckets`] block per biome, indexed by `Biome::as_index`.
    buckets: Box<[BiomeBuckets]>,
}

impl EncounterTable {
    /// Creates a builder with every bucket empty.
    pub fn builder() -> EncounterTableBuilder {
        EncounterTableBuilder::new()
    }

    /// Raw authored bucket for the given keys, in declaration order.
    pub fn bucket(&self, biome: Biome, tier: PoolTier, time: TimeOfDay) -> &[PoolEntry] {
        &self.buckets[biome.as_index()][tier.as_index()][time.as_index()]
    }

    /// Flattens a bucket into the species that can appear there.
    ///
    /// Entries contribute in declaration order: a bare entry contributes its
    /// species, a chain contributes every form of every stage in ascending
    /// threshold order with each stage's internal order preserved. Level
    /// thresholds are discarded - the answer is "what can appear here", not
    /// "what appears at what level". Duplicates are kept.
    ///
    /// An unauthored bucket resolves to an empty vec; that is not an error.
    /// The function is total and pure: equal arguments always yield equal
    /// sequences.
    pub fn resolve(&self, biome: Biome, tier: PoolTier, time: TimeOfDay) -> Vec<SpeciesId> {
        let bucket = self.bucket(biome, tier, time);
        let mut species = Vec::with_capacity(bucket.len());
        for entry in bucket {
            match entry {
                PoolEntry::Species(id) => species.push(*id),
                PoolEntry::Chain(chain) => species.extend(chain.species()),
            }
        }
        species
    }
}

/// Builder accumulating authored buckets for an [`EncounterTable`].
pub struct EncounterTableBuilder {
    buckets: Box<[BiomeBuckets]>,
}

impl EncounterTableBuilder {
    /// Creates a builder with every bucket empty.
    pub fn new() -> Self {
        Self {
            buckets: (0..Biome::COUNT).map(|_| empty_biome_buckets()).collect(),
        }
    }

    /// Sets the bucket at the given keys (builder pattern).
    ///
    /// Entry validity (chain thresholds, capacities) is enforced when the
    /// entries themselves are constructed, so the builder only places them.
    pub fn bucket(
        mut self,
        biome: Biome,
        tier: PoolTier,
        time: TimeOfDay,
        entries: Vec<PoolEntry>,
    ) -> Self {
        self.buckets[biome.as_index()][tier.as_index()][time.as_index()] = entries;
        self
    }

    /// Freezes the table.
    pub fn build(self) -> EncounterTable {
        EncounterTable {
            buckets: self.buckets,
        }
    }
}

impl Default for EncounterTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::EvolutionChain;

    const BARE_A: SpeciesId = SpeciesId(161);
    const BARE_B: SpeciesId = SpeciesId(165);
    const CHAIN_BASE: SpeciesId = SpeciesId(10);
    const CHAIN_EVOLVED: SpeciesId = SpeciesId(11);

    fn sample_table() -> EncounterTable {
        let chain = EvolutionChain::new(&[(1, &[CHAIN_BASE]), (7, &[CHAIN_EVOLVED])]).unwrap();
        EncounterTable::builder()
            .bucket(
                Biome::Town,
                PoolTier::Common,
                TimeOfDay::Dawn,
                vec![
                    PoolEntry::Species(BARE_A),
                    PoolEntry::Species(BARE_B),
                    PoolEntry::Chain(chain),
                ],
            )
            .build()
    }

    #[test]
    fn unauthored_bucket_resolves_empty() {
        let table = sample_table();
        assert!(table.resolve(Biome::Abyss, PoolTier::Rare, TimeOfDay::Night).is_empty());
        assert!(table.resolve(Biome::Town, PoolTier::Common, TimeOfDay::Night).is_empty());
        // The ALL bucket is its own key, never a fallback for Dawn.
        assert!(table.resolve(Biome::Town, PoolTier::Common, TimeOfDay::All).is_empty());
    }

    #[test]
    fn resolve_flattens_in_declaration_order() {
        let table = sample_table();
        let species = table.resolve(Biome::Town, PoolTier::Common, TimeOfDay::Dawn);
        // Bare entries first as declared, then the chain's stages ascending.
        assert_eq!(species, vec![BARE_A, BARE_B, CHAIN_BASE, CHAIN_EVOLVED]);
    }

    #[test]
    fn resolve_is_idempotent() {
        let table = sample_table();
        let first = table.resolve(Biome::Town, PoolTier::Common, TimeOfDay::Dawn);
        let second = table.resolve(Biome::Town, PoolTier::Common, TimeOfDay::Dawn);
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_keeps_duplicates() {
        let table = EncounterTable::builder()
            .bucket(
                Biome::Plains,
                PoolTier::Uncommon,
                TimeOfDay::All,
                vec![PoolEntry::Species(BARE_A), PoolEntry::Species(BARE_A)],
            )
            .build();
        let species = table.resolve(Biome::Plains, PoolTier::Uncommon, TimeOfDay::All);
        assert_eq!(species, vec![BARE_A, BARE_A]);
    }

    #[test]
    fn later_bucket_call_replaces_earlier() {
        let table = EncounterTable::builder()
            .bucket(
                Biome::Town,
                PoolTier::Rare,
                TimeOfDay::Day,
                vec![PoolEntry::Species(BARE_A)],
            )
            .bucket(
                Biome::Town,
                PoolTier::Rare,
                TimeOfDay::Day,
                vec![PoolEntry::Species(BARE_B)],
            )
            .build();
        assert_eq!(
            table.resolve(Biome::Town, PoolTier::Rare, TimeOfDay::Day),
            vec![BARE_B]
        );
    }

    #[test]
    fn table_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EncounterTable>();
    }
}
