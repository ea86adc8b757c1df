//! Weighted biome links driving next-biome selection.
//!
//! Each source biome lists its candidate successors in authored order with
//! relative weights; the builder turns the weights into running prefix sums.
//! `End` declares no links and is therefore terminal.

use anyhow::Result;
use wilds_core::{Biome, BiomeGraph};

/// Builds the immutable biome transition graph.
pub fn biome_links() -> Result<BiomeGraph> {
    use Biome::*;
    let graph = BiomeGraph::builder()
        .links(Town, &[(Plains, 1)])
        .links(Plains, &[(Grass, 1), (Metropolis, 1), (Lake, 1)])
        .links(Grass, &[(TallGrass, 1)])
        .links(TallGrass, &[(Forest, 1), (Cave, 1)])
        .links(Slum, &[(ConstructionSite, 1)])
        .links(Forest, &[(Jungle, 1), (Meadow, 1)])
        .links(Sea, &[(Seabed, 1), (IceCave, 1)])
        .links(Swamp, &[(Graveyard, 1), (TallGrass, 1)])
        .links(Beach, &[(Sea, 1), (Island, 4)])
        .links(Lake, &[(Beach, 1), (Swamp, 1), (ConstructionSite, 1)])
        .links(Seabed, &[(Cave, 1), (Volcano, 4)])
        .links(Mountain, &[(Volcano, 1), (Wasteland, 3)])
        .links(Badlands, &[(Desert, 1), (Mountain, 1)])
        .links(Cave, &[(Badlands, 1), (Lake, 1)])
        .links(Desert, &[(Ruins, 1)])
        .links(IceCave, &[(SnowyForest, 1)])
        .links(Meadow, &[(Plains, 1), (FairyCave, 2)])
        .links(PowerPlant, &[(Factory, 1)])
        .links(Volcano, &[(Beach, 1), (IceCave, 4)])
        .links(Graveyard, &[(Abyss, 1)])
        .links(Dojo, &[(Plains, 1), (Temple, 3)])
        .links(Factory, &[(Plains, 1), (Laboratory, 4)])
        .links(Ruins, &[(Forest, 1)])
        .links(Wasteland, &[(Badlands, 1)])
        .links(Abyss, &[(Cave, 1), (Space, 3), (Wasteland, 3)])
        .links(Space, &[(Ruins, 1)])
        .links(ConstructionSite, &[(Dojo, 1), (PowerPlant, 1)])
        .links(Jungle, &[(Temple, 1)])
        .links(FairyCave, &[(IceCave, 1), (Space, 3)])
        .links(Temple, &[(Swamp, 1), (Ruins, 3)])
        .links(Metropolis, &[(Slum, 1)])
        .links(SnowyForest, &[(Forest, 1), (Lake, 1), (Mountain, 1)])
        .links(Island, &[(Sea, 1)])
        .links(Laboratory, &[(ConstructionSite, 1)])
        .build()?;
    Ok(graph)
}
