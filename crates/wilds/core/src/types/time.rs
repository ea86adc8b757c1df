/// Day-cycle gating key for encounter pools.
///
/// `All` is a cycle-independent bucket, not a union of the other four: it is
/// authored and queried as its own key, and the resolver never merges it with
/// a phase-specific bucket. Callers that want "current phase plus
/// phase-independent" encounters query both keys and combine the results
/// themselves.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TimeOfDay {
    Dawn = 0,
    #[default]
    Day = 1,
    Dusk = 2,
    Night = 3,
    /// Phase-independent bucket.
    All = 4,
}

impl TimeOfDay {
    /// Number of time-of-day keys.
    pub const COUNT: usize = 5;

    /// Every key in discriminant order.
    pub const fn all() -> [TimeOfDay; Self::COUNT] {
        [Self::Dawn, Self::Day, Self::Dusk, Self::Night, Self::All]
    }

    /// Dense table index of this key.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}
