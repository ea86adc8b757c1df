//! Graph construction errors.

use crate::error::{ErrorSeverity, WildsError};
use crate::types::Biome;

/// Errors raised while building the biome transition graph.
///
/// All validation happens at construction; a finished graph upholds the
/// prefix-sum invariant and its queries never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphError {
    /// Outgoing links for one biome were declared more than once.
    DuplicateSource(Biome),

    /// A declared source carried no links.
    ///
    /// Terminal biomes are expressed by omission, never by an empty list,
    /// so an empty declaration is always an authoring mistake.
    NoLinks(Biome),

    /// A link weight of zero would break strict prefix-sum ascent.
    ZeroWeight { source: Biome, target: Biome },

    /// The total weight mass of one source overflowed the counter.
    WeightOverflow(Biome),
}

// `Display` is hand-written rather than derived via `thiserror::Error` because
// the `ZeroWeight` variant names a field `source`, which `thiserror` reserves
// for the error-source accessor (requiring `Biome: Error`). The messages below
// reproduce the original `#[error(...)]` formats verbatim.
impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GraphError::DuplicateSource(biome) => {
                write!(f, "links for {biome} declared twice")
            }
            GraphError::NoLinks(biome) => {
                write!(f, "{biome} declared with an empty link list")
            }
            GraphError::ZeroWeight { source, target } => {
                write!(f, "link {source} -> {target} has zero weight")
            }
            GraphError::WeightOverflow(biome) => {
                write!(f, "total link weight for {biome} overflows u32")
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl WildsError for GraphError {
    fn severity(&self) -> ErrorSeverity {
        use GraphError::*;
        match self {
            DuplicateSource(_) | NoLinks(_) | ZeroWeight { .. } => ErrorSeverity::Validation,
            WeightOverflow(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use GraphError::*;
        match self {
            DuplicateSource(_) => "GRAPH_DUPLICATE_SOURCE",
            NoLinks(_) => "GRAPH_NO_LINKS",
            ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
            WeightOverflow(_) => "GRAPH_WEIGHT_OVERFLOW",
        }
    }
}
