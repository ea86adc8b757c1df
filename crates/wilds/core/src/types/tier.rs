/// Rarity/role classification of an encounter bucket.
///
/// Two parallel ladders share the enum: the wild ladder (`Common` through
/// `UltraRare`) and the boss ladder (`Boss` through `BossUltraRare`), each
/// strictly ascending in rarity. The ladders never mix inside one bucket;
/// a query names exactly one tier.
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
pub enum PoolTier {
    #[default]
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    SuperRare = 3,
    UltraRare = 4,
    Boss = 5,
    BossRare = 6,
    BossSuperRare = 7,
    BossUltraRare = 8,
}

impl PoolTier {
    /// Number of rarity tiers across both ladders.
    pub const COUNT: usize = 9;

    /// Every tier in discriminant order (wild ladder first).
    pub const fn all() -> [PoolTier; Self::COUNT] {
        [
            Self::Common,
            Self::Uncommon,
            Self::Rare,
            Self::SuperRare,
            Self::UltraRare,
            Self::Boss,
            Self::BossRare,
            Self::BossSuperRare,
            Self::BossUltraRare,
        ]
    }

    /// Dense table index of this tier.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Returns true if this tier belongs to the boss ladder.
    pub const fn is_boss(self) -> bool {
        matches!(
            self,
            Self::Boss | Self::BossRare | Self::BossSuperRare | Self::BossUltraRare
        )
    }

    /// Returns true if this tier belongs to the wild ladder.
    pub const fn is_wild(self) -> bool {
        !self.is_boss()
    }
}
