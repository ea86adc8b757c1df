//! Weighted biome-progression graph and next-biome selection.
//!
//! The graph maps each biome to an ordered list of [`WeightedLink`] values
//! whose cumulative weights are running prefix sums, enabling
//! O(out-degree) weighted sampling from a single caller-supplied draw. The
//! graph owns no randomness - determinism and testability follow from the
//! caller supplying the draw.
mod builder;
mod error;
mod link;

pub use builder::BiomeGraphBuilder;
pub use error::GraphError;
pub use link::WeightedLink;

use crate::types::Biome;

/// Immutable weighted transition graph over biomes.
///
/// A biome with no declared outgoing links is *terminal*: progression ends
/// there, and its queries yield the explicit no-transition result rather
/// than an error. Built once through [`BiomeGraphBuilder`]; afterward
/// queries are pure and safe for unbounded concurrent readers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiomeGraph {
    /// Validated link lists indexed by `Biome::as_index`; `None` = terminal.
    links: Box<[Option<Vec<WeightedLink>>]>,
}

impl BiomeGraph {
    /// Creates a builder with every biome terminal.
    pub fn builder() -> BiomeGraphBuilder {
        BiomeGraphBuilder::new()
    }

    /// Called by the builder once validation has passed.
    pub(crate) fn from_links(links: Box<[Option<Vec<WeightedLink>>]>) -> Self {
        Self { links }
    }

    /// Outgoing links of `biome` in authored order; empty if terminal.
    pub fn links_from(&self, biome: Biome) -> &[WeightedLink] {
        self.links[biome.as_index()].as_deref().unwrap_or(&[])
    }

    /// Returns true if `biome` has no outgoing links.
    pub fn is_terminal(&self, biome: Biome) -> bool {
        self.links[biome.as_index()].is_none()
    }

    /// Total weight mass of a biome's link list, or `None` if terminal.
    ///
    /// Valid draws for [`pick_next`](Self::pick_next) are `0..total`.
    pub fn total_weight(&self, biome: Biome) -> Option<u32> {
        let links = self.links[biome.as_index()].as_deref()?;
        links.last().map(|link| link.cumulative_weight)
    }

    /// Selects the next biome for a caller-supplied uniform draw.
    ///
    /// Scans the link list in order and returns the first link whose
    /// cumulative weight exceeds `draw`, so each link is chosen with
    /// probability `weight / total`: `draw = 0` always selects the first
    /// link, `draw = total - 1` the last, and a single-link biome is
    /// deterministic regardless of draw. Returns `None` for a terminal
    /// biome - deciding what "no further progression" means is the
    /// caller's concern.
    ///
    /// # Panics
    ///
    /// Panics if `draw` is not in `0..total_weight(biome)`. An out-of-range
    /// draw means the caller's random source is mis-ranged; clamping here
    /// would hide that bug.
    pub fn pick_next(&self, biome: Biome, draw: u32) -> Option<&WeightedLink> {
        let links = self.links[biome.as_index()].as_deref()?;
        // Link lists are non-empty by construction, so the last cumulative
        // weight is the total mass.
        let total = links.last().map_or(0, |link| link.cumulative_weight);
        assert!(
            draw < total,
            "draw {draw} out of range for {biome} (total weight {total})"
        );
        links.iter().find(|link| link.cumulative_weight > draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_way() -> BiomeGraph {
        // Equal weights: cumulative 1, 2, 3.
        BiomeGraph::builder()
            .links(
                Biome::Plains,
                &[(Biome::Grass, 1), (Biome::Metropolis, 1), (Biome::Lake, 1)],
            )
            .build()
            .unwrap()
    }

    #[test]
    fn equal_weights_map_draws_to_links_in_order() {
        let graph = three_way();
        let links = graph.links_from(Biome::Plains);
        assert_eq!(
            links.iter().map(|link| link.cumulative_weight).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(graph.pick_next(Biome::Plains, 0).unwrap().target, Biome::Grass);
        assert_eq!(
            graph.pick_next(Biome::Plains, 1).unwrap().target,
            Biome::Metropolis
        );
        assert_eq!(graph.pick_next(Biome::Plains, 2).unwrap().target, Biome::Lake);
    }

    #[test]
    fn skewed_weights_cover_draw_range_proportionally() {
        // Weights 1 and 3: draw 0 hits the first link, draws 1..=3 the second.
        let graph = BiomeGraph::builder()
            .links(Biome::Mountain, &[(Biome::Volcano, 1), (Biome::Wasteland, 3)])
            .build()
            .unwrap();
        assert_eq!(graph.total_weight(Biome::Mountain), Some(4));
        assert_eq!(
            graph.pick_next(Biome::Mountain, 0).unwrap().target,
            Biome::Volcano
        );
        for draw in 1..4 {
            assert_eq!(
                graph.pick_next(Biome::Mountain, draw).unwrap().target,
                Biome::Wasteland
            );
        }
    }

    #[test]
    fn boundary_draws_select_first_and_last() {
        let graph = three_way();
        let links = graph.links_from(Biome::Plains);
        let total = graph.total_weight(Biome::Plains).unwrap();
        assert_eq!(graph.pick_next(Biome::Plains, 0), Some(&links[0]));
        assert_eq!(graph.pick_next(Biome::Plains, total - 1), Some(&links[links.len() - 1]));
    }

    #[test]
    fn single_link_is_deterministic() {
        let graph = BiomeGraph::builder()
            .links(Biome::Town, &[(Biome::Plains, 1)])
            .build()
            .unwrap();
        assert_eq!(graph.pick_next(Biome::Town, 0).unwrap().target, Biome::Plains);
    }

    #[test]
    fn terminal_biome_yields_no_transition() {
        let graph = three_way();
        assert!(graph.is_terminal(Biome::End));
        assert!(graph.links_from(Biome::End).is_empty());
        assert_eq!(graph.pick_next(Biome::End, 0), None);
        assert_eq!(graph.total_weight(Biome::End), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_draw_panics() {
        let graph = three_way();
        let _ = graph.pick_next(Biome::Plains, 3);
    }

    #[test]
    fn every_valid_draw_selects_a_link() {
        let graph = three_way();
        let total = graph.total_weight(Biome::Plains).unwrap();
        for draw in 0..total {
            assert!(graph.pick_next(Biome::Plains, draw).is_some());
        }
    }

    #[test]
    fn graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BiomeGraph>();
    }
}
