//! Builder validating and prefix-summing authored biome links.

use crate::graph::{BiomeGraph, GraphError, WeightedLink};
use crate::types::Biome;

/// Builder accumulating `(target, weight)` declarations for a [`BiomeGraph`].
///
/// Declarations are kept raw until [`build`](Self::build), which validates
/// every list and computes the cumulative weights, so a finished graph holds
/// the strict-ascent invariant by construction.
pub struct BiomeGraphBuilder {
    declarations: Vec<(Biome, Vec<(Biome, u32)>)>,
}

impl BiomeGraphBuilder {
    /// Creates a builder with no declared sources.
    pub fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Declares the outgoing links of `source` in authored order (builder
    /// pattern).
    ///
    /// A biome that is never declared stays terminal.
    pub fn links(mut self, source: Biome, targets: &[(Biome, u32)]) -> Self {
        self.declarations.push((source, targets.to_vec()));
        self
    }

    /// Validates every declaration and freezes the graph.
    pub fn build(self) -> Result<BiomeGraph, GraphError> {
        let mut links: Box<[Option<Vec<WeightedLink>>]> =
            (0..Biome::COUNT).map(|_| None).collect();

        for (source, targets) in self.declarations {
            let slot = &mut links[source.as_index()];
            if slot.is_some() {
                return Err(GraphError::DuplicateSource(source));
            }
            if targets.is_empty() {
                return Err(GraphError::NoLinks(source));
            }

            let mut list = Vec::with_capacity(targets.len());
            let mut cumulative: u32 = 0;
            for (target, weight) in targets {
                if weight == 0 {
                    return Err(GraphError::ZeroWeight { source, target });
                }
                cumulative = cumulative
                    .checked_add(weight)
                    .ok_or(GraphError::WeightOverflow(source))?;
                list.push(WeightedLink {
                    target,
                    weight,
                    cumulative_weight: cumulative,
                });
            }

            // Positive weights make the prefix sums strictly ascend.
            debug_assert!(
                list.windows(2)
                    .all(|pair| pair[0].cumulative_weight < pair[1].cumulative_weight)
            );
            *slot = Some(list);
        }

        Ok(BiomeGraph::from_links(links))
    }
}

impl Default for BiomeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, WildsError};

    #[test]
    fn build_computes_running_prefix_sums() {
        let graph = BiomeGraphBuilder::new()
            .links(Biome::Beach, &[(Biome::Sea, 1), (Biome::Island, 4)])
            .build()
            .unwrap();
        let links = graph.links_from(Biome::Beach);
        assert_eq!(links.len(), 2);
        assert_eq!((links[0].weight, links[0].cumulative_weight), (1, 1));
        assert_eq!((links[1].weight, links[1].cumulative_weight), (4, 5));
        assert_eq!(graph.total_weight(Biome::Beach), Some(5));
    }

    #[test]
    fn build_rejects_zero_weight() {
        let result = BiomeGraphBuilder::new()
            .links(Biome::Town, &[(Biome::Plains, 0)])
            .build();
        assert_eq!(
            result.unwrap_err(),
            GraphError::ZeroWeight {
                source: Biome::Town,
                target: Biome::Plains,
            }
        );
    }

    #[test]
    fn build_rejects_duplicate_source() {
        let result = BiomeGraphBuilder::new()
            .links(Biome::Town, &[(Biome::Plains, 1)])
            .links(Biome::Town, &[(Biome::Grass, 1)])
            .build();
        assert_eq!(result.unwrap_err(), GraphError::DuplicateSource(Biome::Town));
    }

    #[test]
    fn build_rejects_empty_link_list() {
        let result = BiomeGraphBuilder::new().links(Biome::Town, &[]).build();
        assert_eq!(result.unwrap_err(), GraphError::NoLinks(Biome::Town));
    }

    #[test]
    fn build_rejects_weight_overflow() {
        let result = BiomeGraphBuilder::new()
            .links(Biome::Abyss, &[(Biome::Cave, u32::MAX), (Biome::Space, 1)])
            .build();
        assert_eq!(result.unwrap_err(), GraphError::WeightOverflow(Biome::Abyss));
    }

    #[test]
    fn graph_errors_classify_by_severity() {
        assert_eq!(
            GraphError::NoLinks(Biome::Town).severity(),
            ErrorSeverity::Validation
        );
        assert_eq!(
            GraphError::WeightOverflow(Biome::Town).severity(),
            ErrorSeverity::Fatal
        );
        assert_eq!(
            GraphError::ZeroWeight {
                source: Biome::Town,
                target: Biome::Plains,
            }
            .error_code(),
            "GRAPH_ZERO_WEIGHT"
        );
    }
}
