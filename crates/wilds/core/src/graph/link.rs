use crate::types::Biome;

/// A directed, weighted connection from one biome to the next.
///
/// `cumulative_weight` is the running prefix sum of `weight` within the
/// source biome's link list: the first link's value equals its own weight,
/// and the final link's value is the source's total weight mass, which
/// bounds the valid draw range for selection. The builder computes and
/// checks these sums; authored data never supplies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedLink {
    /// Biome this link leads to.
    pub target: Biome,
    /// Relative selection weight. Always positive.
    pub weight: u32,
    /// Prefix sum of weights up to and including this link.
    pub cumulative_weight: u32,
}
