//! Pool entries: bare species and level-gated evolution chains.

use arrayvec::ArrayVec;

use crate::config::WorldConfig;
use crate::pool::PoolError;
use crate::types::SpeciesId;

/// One authored entry in an encounter pool bucket.
///
/// The variant is fixed when the content is authored; nothing at query time
/// inspects an entry's shape beyond this tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEntry {
    /// A single species with no level gating.
    Species(SpeciesId),
    /// A lineage of level-gated forms, flattened together at resolution.
    Chain(EvolutionChain),
}

impl From<SpeciesId> for PoolEntry {
    fn from(species: SpeciesId) -> Self {
        Self::Species(species)
    }
}

impl From<EvolutionChain> for PoolEntry {
    fn from(chain: EvolutionChain) -> Self {
        Self::Chain(chain)
    }
}

/// One stage of an evolution chain: the forms valid from `min_level` upward.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainStage {
    /// Level threshold gating this stage. Always at least 1.
    pub min_level: u8,
    /// Forms co-occurring at this stage, in authored order.
    pub forms: ArrayVec<SpeciesId, { WorldConfig::MAX_STAGE_FORMS }>,
}

impl ChainStage {
    /// Creates a validated stage.
    pub fn new(min_level: u8, forms: &[SpeciesId]) -> Result<Self, PoolError> {
        if min_level == 0 {
            return Err(PoolError::ZeroThreshold);
        }
        if forms.is_empty() {
            return Err(PoolError::EmptyStage(min_level));
        }
        let mut stage_forms = ArrayVec::new();
        for &form in forms {
            stage_forms
                .try_push(form)
                .map_err(|_| PoolError::TooManyForms { min_level })?;
        }
        Ok(Self {
            min_level,
            forms: stage_forms,
        })
    }
}

/// Level-gated forms of one lineage, ordered by ascending stage threshold.
///
/// Invariant: at least one stage, every stage non-empty, thresholds at least
/// 1 and strictly ascending in declaration order. Upheld by [`Self::new`];
/// the stages are not otherwise reachable for mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionChain {
    stages: ArrayVec<ChainStage, { WorldConfig::MAX_CHAIN_STAGES }>,
}

impl EvolutionChain {
    /// Builds a chain from `(min_level, forms)` pairs in declaration order.
    pub fn new(stages: &[(u8, &[SpeciesId])]) -> Result<Self, PoolError> {
        if stages.is_empty() {
            return Err(PoolError::EmptyChain);
        }
        let mut built = ArrayVec::new();
        let mut previous: Option<u8> = None;
        for &(min_level, forms) in stages {
            let stage = ChainStage::new(min_level, forms)?;
            if let Some(previous) = previous {
                if min_level <= previous {
                    return Err(PoolError::NonAscendingThreshold {
                        previous,
                        current: min_level,
                    });
                }
            }
            built.try_push(stage).map_err(|_| PoolError::TooManyStages)?;
            previous = Some(min_level);
        }
        Ok(Self { stages: built })
    }

    /// Stages in ascending threshold order.
    pub fn stages(&self) -> &[ChainStage] {
        &self.stages
    }

    /// Every form of every stage, ascending by stage threshold, each stage's
    /// internal order preserved. Thresholds themselves are not reported.
    pub fn species(&self) -> impl Iterator<Item = SpeciesId> + '_ {
        self.stages
            .iter()
            .flat_map(|stage| stage.forms.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, WildsError};

    const A: SpeciesId = SpeciesId(10);
    const B: SpeciesId = SpeciesId(11);
    const C: SpeciesId = SpeciesId(12);

    #[test]
    fn chain_flattens_stages_in_threshold_order() {
        let chain = EvolutionChain::new(&[(1, &[A]), (7, &[B, C])]).unwrap();
        let species: Vec<_> = chain.species().collect();
        assert_eq!(species, vec![A, B, C]);
    }

    #[test]
    fn chain_rejects_empty_declarations() {
        assert_eq!(EvolutionChain::new(&[]), Err(PoolError::EmptyChain));
        assert_eq!(
            EvolutionChain::new(&[(5, &[])]),
            Err(PoolError::EmptyStage(5))
        );
    }

    #[test]
    fn chain_rejects_zero_threshold() {
        assert_eq!(
            EvolutionChain::new(&[(0, &[A])]),
            Err(PoolError::ZeroThreshold)
        );
    }

    #[test]
    fn chain_rejects_non_ascending_thresholds() {
        assert_eq!(
            EvolutionChain::new(&[(7, &[A]), (7, &[B])]),
            Err(PoolError::NonAscendingThreshold {
                previous: 7,
                current: 7
            })
        );
        assert_eq!(
            EvolutionChain::new(&[(7, &[A]), (3, &[B])]),
            Err(PoolError::NonAscendingThreshold {
                previous: 7,
                current: 3
            })
        );
    }

    #[test]
    fn chain_need_not_start_at_level_one() {
        // A lineage whose base form is absent from this pool is legal.
        let chain = EvolutionChain::new(&[(15, &[A]), (36, &[B])]).unwrap();
        assert_eq!(chain.stages().len(), 2);
    }

    #[test]
    fn chain_rejects_overflowing_capacity() {
        let forms = [A; WorldConfig::MAX_STAGE_FORMS + 1];
        assert_eq!(
            EvolutionChain::new(&[(1, &forms)]),
            Err(PoolError::TooManyForms { min_level: 1 })
        );

        const FORMS: &[SpeciesId] = &[A];
        let stages: Vec<(u8, &[SpeciesId])> = (0..WorldConfig::MAX_CHAIN_STAGES as u8 + 1)
            .map(|stage| (stage + 1, FORMS))
            .collect();
        assert_eq!(
            EvolutionChain::new(&stages),
            Err(PoolError::TooManyStages)
        );
    }

    #[test]
    fn pool_errors_classify_as_validation() {
        let error = PoolError::EmptyChain;
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "POOL_EMPTY_CHAIN");
    }
}
