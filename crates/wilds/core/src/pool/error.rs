//! Pool construction errors.

use crate::config::WorldConfig;
use crate::error::{ErrorSeverity, WildsError};

/// Errors raised while constructing encounter pool data.
///
/// All variants are authoring mistakes caught before a table is built;
/// queries on a finished table never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolError {
    /// An evolution chain was declared with no stages.
    #[error("evolution chain has no stages")]
    EmptyChain,

    /// A chain stage was declared with no forms.
    #[error("chain stage at level {0} has no forms")]
    EmptyStage(u8),

    /// A stage threshold of zero would gate nothing.
    #[error("chain stage threshold must be at least 1")]
    ZeroThreshold,

    /// Stage thresholds must strictly ascend in declaration order.
    #[error("chain stage threshold {current} does not ascend past {previous}")]
    NonAscendingThreshold { previous: u8, current: u8 },

    /// A chain exceeded the stage capacity.
    #[error("evolution chain exceeds {} stages", WorldConfig::MAX_CHAIN_STAGES)]
    TooManyStages,

    /// A stage exceeded the form capacity.
    #[error(
        "chain stage at level {min_level} exceeds {} forms",
        WorldConfig::MAX_STAGE_FORMS
    )]
    TooManyForms { min_level: u8 },
}

impl WildsError for PoolError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use PoolError::*;
        match self {
            EmptyChain => "POOL_EMPTY_CHAIN",
            EmptyStage(_) => "POOL_EMPTY_STAGE",
            ZeroThreshold => "POOL_ZERO_THRESHOLD",
            NonAscendingThreshold { .. } => "POOL_NON_ASCENDING_THRESHOLD",
            TooManyStages => "POOL_TOO_MANY_STAGES",
            TooManyForms { .. } => "POOL_TOO_MANY_FORMS",
        }
    }
}
