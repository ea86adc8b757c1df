use std::fmt;

/// Opaque identifier for a creature species.
///
/// Carries no behavior: the core only moves these values between authored
/// tables and query results. Numbering follows the authored content's dex
/// ordering; regional forms encode a region offset added to the base number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesId(pub u16);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
