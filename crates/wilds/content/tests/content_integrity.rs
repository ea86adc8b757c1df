//! Integrity checks over the full authored dataset.
//!
//! These tests drive the public query API end to end: build the tables the
//! way a game process would, then verify the authored data holds the
//! invariants the queries rely on.

use wilds_content::{biome_links, encounter_pools, species, world_tables};
use wilds_core::{Biome, PoolTier, TimeOfDay};

#[test]
fn full_content_set_builds() {
    let (pools, graph) = world_tables().expect("authored content must build");
    // Spot-check that both tables carry data.
    assert!(!pools
        .resolve(Biome::Town, PoolTier::Common, TimeOfDay::Dawn)
        .is_empty());
    assert!(!graph.links_from(Biome::Town).is_empty());
}

#[test]
fn every_link_list_holds_the_prefix_sum_invariant() {
    let graph = biome_links().unwrap();
    for biome in Biome::all() {
        let links = graph.links_from(biome);
        let mut running_total = 0u32;
        for link in links {
            assert!(link.weight > 0, "{biome}: weight must be positive");
            running_total += link.weight;
            assert_eq!(
                link.cumulative_weight, running_total,
                "{biome}: cumulative weight must be the running prefix sum"
            );
        }
        assert_eq!(graph.total_weight(biome), links.last().map(|link| link.cumulative_weight));
    }
}

#[test]
fn end_is_the_only_terminal_biome() {
    let graph = biome_links().unwrap();
    assert!(graph.is_terminal(Biome::End));
    assert_eq!(graph.pick_next(Biome::End, 0), None);
    for biome in Biome::all() {
        if biome != Biome::End {
            assert!(!graph.is_terminal(biome), "{biome} should declare links");
        }
    }
}

#[test]
fn authored_out_degrees_and_totals_match_the_design() {
    let graph = biome_links().unwrap();

    let town = graph.links_from(Biome::Town);
    assert_eq!(town.len(), 1);
    assert_eq!(town[0].target, Biome::Plains);

    // Beach: Sea at weight 1, Island at weight 4.
    let beach = graph.links_from(Biome::Beach);
    assert_eq!(beach.len(), 2);
    assert_eq!((beach[0].target, beach[0].cumulative_weight), (Biome::Sea, 1));
    assert_eq!((beach[1].target, beach[1].cumulative_weight), (Biome::Island, 5));

    // Abyss: the widest fan-out, total mass 7.
    let abyss = graph.links_from(Biome::Abyss);
    assert_eq!(
        abyss.iter().map(|link| link.target).collect::<Vec<_>>(),
        vec![Biome::Cave, Biome::Space, Biome::Wasteland]
    );
    assert_eq!(graph.total_weight(Biome::Abyss), Some(7));
}

#[test]
fn draw_coverage_is_proportional_to_weight() {
    let graph = biome_links().unwrap();
    for biome in Biome::all() {
        let Some(total) = graph.total_weight(biome) else {
            continue;
        };
        let links = graph.links_from(biome);

        // Boundary draws hit the first and last links.
        assert_eq!(graph.pick_next(biome, 0), Some(&links[0]));
        assert_eq!(graph.pick_next(biome, total - 1), Some(&links[links.len() - 1]));

        // Each link is selected by exactly `weight` draws.
        let mut hits = vec![0u32; links.len()];
        for draw in 0..total {
            let picked = graph.pick_next(biome, draw).expect("in-range draw selects a link");
            let position = links
                .iter()
                .position(|link| link == picked)
                .expect("picked link comes from the list");
            hits[position] += 1;
        }
        for (link, hit_count) in links.iter().zip(hits) {
            assert_eq!(hit_count, link.weight, "{biome} -> {}", link.target);
        }
    }
}

#[test]
fn town_common_dawn_resolves_to_the_authored_sequence() {
    let pools = encounter_pools().unwrap();
    use species::*;
    let resolved = pools.resolve(Biome::Town, PoolTier::Common, TimeOfDay::Dawn);
    assert_eq!(
        resolved,
        vec![
            CATERPIE, METAPOD, SENTRET, LEDYBA, HOPPIP, SUNKERN, STARLY, PIDOVE, COTTONEE,
            SCATTERBUG, SPEWPA, YUNGOOS, SKWOVET,
        ]
    );
}

#[test]
fn plains_common_dusk_flattens_chains_in_order() {
    let pools = encounter_pools().unwrap();
    use species::*;
    let resolved = pools.resolve(Biome::Plains, PoolTier::Common, TimeOfDay::Dusk);
    assert_eq!(resolved, vec![MEOWTH, PERSIAN, POOCHYENA, MIGHTYENA]);
}

#[test]
fn all_bucket_is_not_merged_into_phase_queries() {
    let pools = encounter_pools().unwrap();
    // Pidgey lives in Town/Common/ALL only; the Dawn query must not see it.
    let dawn = pools.resolve(Biome::Town, PoolTier::Common, TimeOfDay::Dawn);
    assert!(!dawn.contains(&species::PIDGEY));
    let all = pools.resolve(Biome::Town, PoolTier::Common, TimeOfDay::All);
    assert!(all.contains(&species::PIDGEY));
}

#[test]
fn unauthored_buckets_resolve_empty() {
    let pools = encounter_pools().unwrap();
    // Town has no boss encounters at all.
    for time in TimeOfDay::all() {
        assert!(pools.resolve(Biome::Town, PoolTier::Boss, time).is_empty());
    }
    // Cave pools are not yet authored.
    assert!(pools
        .resolve(Biome::Cave, PoolTier::Common, TimeOfDay::All)
        .is_empty());
}

#[test]
fn end_carries_only_phase_independent_pools() {
    let pools = encounter_pools().unwrap();
    assert_eq!(
        pools.resolve(Biome::End, PoolTier::Boss, TimeOfDay::All),
        vec![species::ETERNATUS]
    );
    for time in [TimeOfDay::Dawn, TimeOfDay::Day, TimeOfDay::Dusk, TimeOfDay::Night] {
        assert!(pools.resolve(Biome::End, PoolTier::Common, time).is_empty());
    }
}
