/// Discrete region category.
///
/// A biome is both an encounter-table key and a node in the progression
/// graph. The set is closed: content may leave any biome's pools empty or
/// its outgoing links undeclared, but it cannot invent new biomes.
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
pub enum Biome {
    #[default]
    Town = 0,
    Plains = 1,
    Grass = 2,
    TallGrass = 3,
    Metropolis = 4,
    Forest = 5,
    Sea = 6,
    Swamp = 7,
    Beach = 8,
    Lake = 9,
    Seabed = 10,
    Mountain = 11,
    Badlands = 12,
    Cave = 13,
    Desert = 14,
    IceCave = 15,
    Meadow = 16,
    PowerPlant = 17,
    Volcano = 18,
    Graveyard = 19,
    Dojo = 20,
    Factory = 21,
    Ruins = 22,
    Wasteland = 23,
    Abyss = 24,
    Space = 25,
    ConstructionSite = 26,
    Jungle = 27,
    FairyCave = 28,
    Temple = 29,
    Slum = 30,
    SnowyForest = 31,
    Island = 32,
    Laboratory = 33,
    /// Final-boss biome; the authored graph leaves it terminal.
    End = 34,
}

impl Biome {
    /// Number of biomes.
    pub const COUNT: usize = 35;

    /// Every biome in discriminant order.
    pub const fn all() -> [Biome; Self::COUNT] {
        [
            Self::Town,
            Self::Plains,
            Self::Grass,
            Self::TallGrass,
            Self::Metropolis,
            Self::Forest,
            Self::Sea,
            Self::Swamp,
            Self::Beach,
            Self::Lake,
            Self::Seabed,
            Self::Mountain,
            Self::Badlands,
            Self::Cave,
            Self::Desert,
            Self::IceCave,
            Self::Meadow,
            Self::PowerPlant,
            Self::Volcano,
            Self::Graveyard,
            Self::Dojo,
            Self::Factory,
            Self::Ruins,
            Self::Wasteland,
            Self::Abyss,
            Self::Space,
            Self::ConstructionSite,
            Self::Jungle,
            Self::FairyCave,
            Self::Temple,
            Self::Slum,
            Self::SnowyForest,
            Self::Island,
            Self::Laboratory,
            Self::End,
        ]
    }

    /// Dense table index of this biome.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_index_once() {
        let all = Biome::all();
        assert_eq!(all.len(), Biome::COUNT);
        for (position, biome) in all.iter().enumerate() {
            assert_eq!(biome.as_index(), position);
        }
    }

    #[test]
    fn names_round_trip() {
        use std::str::FromStr;
        assert_eq!(Biome::TallGrass.to_string(), "tall_grass");
        assert_eq!(Biome::from_str("tall_grass").unwrap(), Biome::TallGrass);
        assert_eq!(Biome::from_str("END").unwrap(), Biome::End);
    }
}
