//! Authored encounter pools.
//!
//! Buckets are transcribed for the opening progression stretch (Town through
//! Metropolis) and the terminal End biome; every other bucket stays empty
//! until its biome is authored. Within a bucket, entries keep the design's
//! declaration order - the resolver preserves it.

use anyhow::Result;
use wilds_core::{
    Biome, EncounterTable, EncounterTableBuilder, EvolutionChain, PoolEntry, PoolTier, SpeciesId,
    TimeOfDay,
};

use crate::species::*;

fn one(species: SpeciesId) -> PoolEntry {
    PoolEntry::Species(species)
}

fn chain(stages: &[(u8, &[SpeciesId])]) -> Result<PoolEntry> {
    Ok(PoolEntry::Chain(EvolutionChain::new(stages)?))
}

/// Builds the immutable encounter pool table.
pub fn encounter_pools() -> Result<EncounterTable> {
    let mut table = EncounterTable::builder();
    table = town(table)?;
    table = plains(table)?;
    table = grass(table)?;
    table = tall_grass(table)?;
    table = metropolis(table)?;
    table = end(table)?;
    Ok(table.build())
}

fn town(table: EncounterTableBuilder) -> Result<EncounterTableBuilder> {
    use Biome::Town;
    use PoolTier::*;
    use TimeOfDay::*;
    Ok(table
        .bucket(
            Town,
            Common,
            Dawn,
            vec![
                chain(&[(1, &[CATERPIE]), (7, &[METAPOD])])?,
                one(SENTRET),
                one(LEDYBA),
                one(HOPPIP),
                one(SUNKERN),
                one(STARLY),
                one(PIDOVE),
                one(COTTONEE),
                chain(&[(1, &[SCATTERBUG]), (9, &[SPEWPA])])?,
                one(YUNGOOS),
                one(SKWOVET),
            ],
        )
        .bucket(
            Town,
            Common,
            Day,
            vec![
                chain(&[(1, &[CATERPIE]), (7, &[METAPOD])])?,
                one(SENTRET),
                one(HOPPIP),
                one(SUNKERN),
                one(SILCOON),
                one(STARLY),
                one(PIDOVE),
                one(COTTONEE),
                chain(&[(1, &[SCATTERBUG]), (9, &[SPEWPA])])?,
                one(YUNGOOS),
                one(SKWOVET),
            ],
        )
        .bucket(
            Town,
            Common,
            Dusk,
            vec![
                chain(&[(1, &[WEEDLE]), (7, &[KAKUNA])])?,
                one(POOCHYENA),
                one(PATRAT),
                one(PURRLOIN),
                one(BLIPBUG),
            ],
        )
        .bucket(
            Town,
            Common,
            Night,
            vec![
                chain(&[(1, &[WEEDLE]), (7, &[KAKUNA])])?,
                one(HOOTHOOT),
                one(SPINARAK),
                one(POOCHYENA),
                one(CASCOON),
                one(PATRAT),
                one(PURRLOIN),
                one(BLIPBUG),
            ],
        )
        .bucket(
            Town,
            Common,
            All,
            vec![
                one(PIDGEY),
                one(RATTATA),
                one(SPEAROW),
                one(ZIGZAGOON),
                one(WURMPLE),
                one(TAILLOW),
                one(BIDOOF),
                one(LILLIPUP),
                one(FLETCHLING),
                one(WOOLOO),
                one(LECHONK),
            ],
        )
        .bucket(
            Town,
            Uncommon,
            Dawn,
            vec![
                one(BELLSPROUT),
                one(POOCHYENA),
                one(LOTAD),
                one(SKITTY),
                one(COMBEE),
                one(CHERUBI),
                one(PATRAT),
                one(MINCCINO),
                one(PAWMI),
            ],
        )
        .bucket(
            Town,
            Uncommon,
            Day,
            vec![
                one(NIDORAN_F),
                one(NIDORAN_M),
                one(BELLSPROUT),
                one(POOCHYENA),
                one(LOTAD),
                one(SKITTY),
                one(COMBEE),
                one(CHERUBI),
                one(PATRAT),
                one(MINCCINO),
                one(PAWMI),
            ],
        )
        .bucket(
            Town,
            Uncommon,
            Dusk,
            vec![
                one(EKANS),
                one(ODDISH),
                one(MEOWTH),
                one(SPINARAK),
                one(SEEDOT),
                one(SHROOMISH),
                one(KRICKETOT),
                one(VENIPEDE),
            ],
        )
        .bucket(
            Town,
            Uncommon,
            Night,
            vec![
                one(EKANS),
                one(ODDISH),
                one(PARAS),
                one(VENONAT),
                one(MEOWTH),
                one(SEEDOT),
                one(SHROOMISH),
                one(KRICKETOT),
                one(VENIPEDE),
            ],
        )
        .bucket(
            Town,
            Uncommon,
            All,
            vec![one(NINCADA), one(WHISMUR), one(FIDOUGH)],
        )
        .bucket(Town, Rare, Dawn, vec![one(TANDEMAUS)])
        .bucket(Town, Rare, Day, vec![one(TANDEMAUS)])
        .bucket(Town, Rare, All, vec![one(ABRA), one(SURSKIT), one(ROOKIDEE)])
        .bucket(Town, SuperRare, All, vec![one(EEVEE), one(RALTS)])
        .bucket(Town, UltraRare, All, vec![one(DITTO)]))
}

fn plains(table: EncounterTableBuilder) -> Result<EncounterTableBuilder> {
    use Biome::Plains;
    use PoolTier::*;
    use TimeOfDay::*;
    Ok(table
        .bucket(
            Plains,
            Common,
            Dawn,
            vec![
                chain(&[(1, &[SENTRET]), (15, &[FURRET])])?,
                chain(&[(1, &[YUNGOOS]), (30, &[GUMSHOOS])])?,
                chain(&[(1, &[SKWOVET]), (24, &[GREEDENT])])?,
            ],
        )
        .bucket(
            Plains,
            Common,
            Day,
            vec![
                chain(&[(1, &[SENTRET]), (15, &[FURRET])])?,
                chain(&[(1, &[YUNGOOS]), (30, &[GUMSHOOS])])?,
                chain(&[(1, &[SKWOVET]), (24, &[GREEDENT])])?,
            ],
        )
        .bucket(
            Plains,
            Common,
            Dusk,
            vec![
                chain(&[(1, &[MEOWTH]), (28, &[PERSIAN])])?,
                chain(&[(1, &[POOCHYENA]), (18, &[MIGHTYENA])])?,
            ],
        )
        .bucket(
            Plains,
            Common,
            Night,
            vec![
                chain(&[(1, &[ZUBAT]), (22, &[GOLBAT])])?,
                chain(&[(1, &[MEOWTH]), (28, &[PERSIAN])])?,
                chain(&[(1, &[POOCHYENA]), (18, &[MIGHTYENA])])?,
            ],
        )
        .bucket(
            Plains,
            Common,
            All,
            vec![
                chain(&[(1, &[ZIGZAGOON]), (20, &[LINOONE])])?,
                chain(&[(1, &[BIDOOF]), (15, &[BIBAREL])])?,
                chain(&[(1, &[LECHONK]), (18, &[OINKOLOGNE])])?,
            ],
        )
        .bucket(
            Plains,
            Uncommon,
            Dawn,
            vec![
                chain(&[(1, &[DODUO]), (31, &[DODRIO])])?,
                chain(&[(1, &[POOCHYENA]), (18, &[MIGHTYENA])])?,
                chain(&[(1, &[STARLY]), (14, &[STARAVIA]), (34, &[STARAPTOR])])?,
                chain(&[(1, &[PIDOVE]), (21, &[TRANQUILL]), (32, &[UNFEZANT])])?,
                chain(&[(1, &[PAWMI]), (18, &[PAWMO]), (32, &[PAWMOT])])?,
            ],
        )
        .bucket(
            Plains,
            Uncommon,
            Day,
            vec![
                chain(&[(1, &[DODUO]), (31, &[DODRIO])])?,
                chain(&[(1, &[POOCHYENA]), (18, &[MIGHTYENA])])?,
                chain(&[(1, &[STARLY]), (14, &[STARAVIA]), (34, &[STARAPTOR])])?,
                chain(&[(1, &[PIDOVE]), (21, &[TRANQUILL]), (32, &[UNFEZANT])])?,
                chain(&[(1, &[ROCKRUFF]), (25, &[LYCANROC])])?,
                chain(&[(1, &[PAWMI]), (18, &[PAWMO]), (32, &[PAWMOT])])?,
            ],
        )
        .bucket(
            Plains,
            Uncommon,
            Dusk,
            vec![chain(&[(1, &[MANKEY]), (28, &[PRIMEAPE]), (75, &[ANNIHILAPE])])?],
        )
        .bucket(
            Plains,
            Uncommon,
            Night,
            vec![chain(&[(1, &[MANKEY]), (28, &[PRIMEAPE]), (75, &[ANNIHILAPE])])?],
        )
        .bucket(
            Plains,
            Uncommon,
            All,
            vec![
                chain(&[(1, &[PIDGEY]), (18, &[PIDGEOTTO]), (36, &[PIDGEOT])])?,
                chain(&[(1, &[SPEAROW]), (20, &[FEAROW])])?,
                one(PIKACHU),
                chain(&[(1, &[FLETCHLING]), (17, &[FLETCHINDER]), (35, &[TALONFLAME])])?,
            ],
        )
        .bucket(Plains, Rare, Dawn, vec![one(PALDEA_TAUROS)])
        .bucket(Plains, Rare, Day, vec![one(PALDEA_TAUROS)])
        .bucket(
            Plains,
            Rare,
            Dusk,
            vec![chain(&[(1, &[SHINX]), (15, &[LUXIO]), (30, &[LUXRAY])])?],
        )
        .bucket(
            Plains,
            Rare,
            Night,
            vec![chain(&[(1, &[SHINX]), (15, &[LUXIO]), (30, &[LUXRAY])])?],
        )
        .bucket(
            Plains,
            Rare,
            All,
            vec![
                chain(&[(1, &[ABRA]), (16, &[KADABRA])])?,
                chain(&[(1, &[BUNEARY]), (20, &[LOPUNNY])])?,
                chain(&[(1, &[ROOKIDEE]), (18, &[CORVISQUIRE]), (38, &[CORVIKNIGHT])])?,
            ],
        )
        .bucket(
            Plains,
            SuperRare,
            All,
            vec![
                one(FARFETCHD),
                one(LICKITUNG),
                one(CHANSEY),
                one(EEVEE),
                one(SNORLAX),
                chain(&[(1, &[DUNSPARCE]), (62, &[DUDUNSPARCE])])?,
            ],
        )
        .bucket(
            Plains,
            UltraRare,
            All,
            vec![one(DITTO), one(LATIAS), one(LATIOS)],
        )
        .bucket(
            Plains,
            Boss,
            Dawn,
            vec![one(DODRIO), one(FURRET), one(GUMSHOOS), one(GREEDENT)],
        )
        .bucket(
            Plains,
            Boss,
            Day,
            vec![one(DODRIO), one(FURRET), one(GUMSHOOS), one(GREEDENT)],
        )
        .bucket(Plains, Boss, Dusk, vec![one(PERSIAN), one(MIGHTYENA)])
        .bucket(Plains, Boss, Night, vec![one(PERSIAN), one(MIGHTYENA)])
        .bucket(
            Plains,
            Boss,
            All,
            vec![one(LINOONE), one(BIBAREL), one(LOPUNNY), one(OINKOLOGNE)],
        )
        .bucket(Plains, BossRare, Dawn, vec![one(PAWMOT), one(PALDEA_TAUROS)])
        .bucket(
            Plains,
            BossRare,
            Day,
            vec![one(LYCANROC), one(PAWMOT), one(PALDEA_TAUROS)],
        )
        .bucket(
            Plains,
            BossRare,
            All,
            vec![one(FARFETCHD), one(SNORLAX), one(LICKILICKY), one(DUDUNSPARCE)],
        )
        .bucket(Plains, BossSuperRare, All, vec![one(LATIAS), one(LATIOS)]))
}

fn grass(table: EncounterTableBuilder) -> Result<EncounterTableBuilder> {
    use Biome::Grass;
    use PoolTier::*;
    use TimeOfDay::*;
    Ok(table
        .bucket(
            Grass,
            Common,
            Dawn,
            vec![
                chain(&[(1, &[HOPPIP]), (18, &[SKIPLOOM])])?,
                one(SUNKERN),
                one(COTTONEE),
                one(PETILIL),
            ],
        )
        .bucket(
            Grass,
            Common,
            Day,
            vec![
                chain(&[(1, &[HOPPIP]), (18, &[SKIPLOOM])])?,
                one(SUNKERN),
                one(COTTONEE),
                one(PETILIL),
            ],
        )
        .bucket(
            Grass,
            Common,
            Dusk,
            vec![
                chain(&[(1, &[SEEDOT]), (14, &[NUZLEAF])])?,
                chain(&[(1, &[SHROOMISH]), (23, &[BRELOOM])])?,
            ],
        )
        .bucket(
            Grass,
            Common,
            Night,
            vec![
                chain(&[(1, &[SEEDOT]), (14, &[NUZLEAF])])?,
                chain(&[(1, &[SHROOMISH]), (23, &[BRELOOM])])?,
            ],
        )
        .bucket(
            Grass,
            Uncommon,
            Dawn,
            vec![
                chain(&[(1, &[COMBEE]), (21, &[VESPIQUEN])])?,
                chain(&[(1, &[CHERUBI]), (25, &[CHERRIM])])?,
            ],
        )
        .bucket(
            Grass,
            Uncommon,
            Day,
            vec![
                chain(&[(1, &[COMBEE]), (21, &[VESPIQUEN])])?,
                chain(&[(1, &[CHERUBI]), (25, &[CHERRIM])])?,
            ],
        )
        .bucket(
            Grass,
            Uncommon,
            Dusk,
            vec![chain(&[(1, &[FOONGUS]), (39, &[AMOONGUSS])])?],
        )
        .bucket(
            Grass,
            Uncommon,
            Night,
            vec![chain(&[(1, &[FOONGUS]), (39, &[AMOONGUSS])])?],
        )
        .bucket(
            Grass,
            Rare,
            All,
            vec![
                chain(&[(1, &[BULBASAUR]), (16, &[IVYSAUR]), (32, &[VENUSAUR])])?,
                one(GROWLITHE),
                chain(&[(1, &[TURTWIG]), (18, &[GROTLE]), (32, &[TORTERRA])])?,
            ],
        )
        .bucket(Grass, SuperRare, All, vec![one(SUDOWOODO)])
        .bucket(Grass, UltraRare, All, vec![one(VIRIZION)])
        .bucket(
            Grass,
            Boss,
            Dawn,
            vec![one(JUMPLUFF), one(SUNFLORA), one(WHIMSICOTT)],
        )
        .bucket(
            Grass,
            Boss,
            Day,
            vec![one(JUMPLUFF), one(SUNFLORA), one(WHIMSICOTT)],
        )
        .bucket(
            Grass,
            BossRare,
            All,
            vec![one(VENUSAUR), one(SUDOWOODO), one(TORTERRA)],
        )
        .bucket(Grass, BossSuperRare, All, vec![one(VIRIZION)]))
}

fn tall_grass(table: EncounterTableBuilder) -> Result<EncounterTableBuilder> {
    use Biome::TallGrass;
    use PoolTier::*;
    use TimeOfDay::*;
    Ok(table
        .bucket(
            TallGrass,
            Common,
            Dawn,
            vec![chain(&[(1, &[BOUNSWEET]), (18, &[STEENEE]), (58, &[TSAREENA])])?],
        )
        .bucket(
            TallGrass,
            Common,
            Day,
            vec![
                chain(&[(1, &[NIDORAN_F]), (16, &[NIDORINA])])?,
                chain(&[(1, &[NIDORAN_M]), (16, &[NIDORINO])])?,
                chain(&[(1, &[BOUNSWEET]), (18, &[STEENEE]), (58, &[TSAREENA])])?,
            ],
        )
        .bucket(
            TallGrass,
            Common,
            Dusk,
            vec![
                chain(&[(1, &[ODDISH]), (21, &[GLOOM])])?,
                chain(&[(1, &[KRICKETOT]), (10, &[KRICKETUNE])])?,
            ],
        )
        .bucket(
            TallGrass,
            Common,
            Night,
            vec![
                chain(&[(1, &[ODDISH]), (21, &[GLOOM])])?,
                chain(&[(1, &[KRICKETOT]), (10, &[KRICKETUNE])])?,
            ],
        )
        .bucket(
            TallGrass,
            Common,
            All,
            vec![
                chain(&[(1, &[NINCADA]), (20, &[NINJASK])])?,
                chain(&[(1, &[FOMANTIS]), (44, &[LURANTIS])])?,
                chain(&[(1, &[NYMBLE]), (24, &[LOKIX])])?,
            ],
        )
        .bucket(
            TallGrass,
            Uncommon,
            Night,
            vec![
                chain(&[(1, &[PARAS]), (24, &[PARASECT])])?,
                chain(&[(1, &[VENONAT]), (31, &[VENOMOTH])])?,
                chain(&[(1, &[SPINARAK]), (22, &[ARIADOS])])?,
            ],
        )
        .bucket(TallGrass, Uncommon, All, vec![one(VULPIX)])
        .bucket(
            TallGrass,
            Rare,
            All,
            vec![
                one(PINSIR),
                chain(&[(1, &[CHIKORITA]), (16, &[BAYLEEF]), (32, &[MEGANIUM])])?,
                chain(&[(1, &[GIRAFARIG]), (62, &[FARIGIRAF])])?,
                one(ZANGOOSE),
                one(KECLEON),
                one(TROPIUS),
            ],
        )
        .bucket(
            TallGrass,
            SuperRare,
            All,
            vec![one(SCYTHER), one(SHEDINJA), one(ROTOM)],
        )
        .bucket(TallGrass, Boss, Dawn, vec![one(TSAREENA)])
        .bucket(
            TallGrass,
            Boss,
            Day,
            vec![one(NIDOQUEEN), one(NIDOKING), one(TSAREENA)],
        )
        .bucket(TallGrass, Boss, Dusk, vec![one(VILEPLUME), one(KRICKETUNE)])
        .bucket(TallGrass, Boss, Night, vec![one(VILEPLUME), one(KRICKETUNE)])
        .bucket(
            TallGrass,
            Boss,
            All,
            vec![
                one(NINJASK),
                one(ZANGOOSE),
                one(KECLEON),
                one(LURANTIS),
                one(LOKIX),
            ],
        )
        .bucket(TallGrass, BossRare, Dawn, vec![one(BELLOSSOM)])
        .bucket(TallGrass, BossRare, Day, vec![one(BELLOSSOM)])
        .bucket(
            TallGrass,
            BossRare,
            All,
            vec![one(PINSIR), one(MEGANIUM), one(FARIGIRAF)],
        )
        .bucket(TallGrass, BossSuperRare, All, vec![one(ROTOM)]))
}

fn metropolis(table: EncounterTableBuilder) -> Result<EncounterTableBuilder> {
    use Biome::Metropolis;
    use PoolTier::*;
    use TimeOfDay::*;
    Ok(table
        .bucket(
            Metropolis,
            Common,
            Dawn,
            vec![chain(&[(1, &[YAMPER]), (25, &[BOLTUND])])?],
        )
        .bucket(
            Metropolis,
            Common,
            Day,
            vec![chain(&[(1, &[YAMPER]), (25, &[BOLTUND])])?],
        )
        .bucket(
            Metropolis,
            Common,
            Dusk,
            vec![chain(&[(1, &[PATRAT]), (20, &[WATCHOG])])?],
        )
        .bucket(
            Metropolis,
            Common,
            Night,
            vec![
                chain(&[(1, &[HOUNDOUR]), (24, &[HOUNDOOM])])?,
                chain(&[(1, &[PATRAT]), (20, &[WATCHOG])])?,
            ],
        )
        .bucket(
            Metropolis,
            Common,
            All,
            vec![
                chain(&[(1, &[RATTATA]), (20, &[RATICATE])])?,
                chain(&[(1, &[ZIGZAGOON]), (20, &[LINOONE])])?,
                chain(&[(1, &[LILLIPUP]), (16, &[HERDIER]), (32, &[STOUTLAND])])?,
            ],
        )
        .bucket(
            Metropolis,
            Uncommon,
            Dawn,
            vec![chain(&[(1, &[PATRAT]), (20, &[WATCHOG])])?, one(INDEEDEE)],
        )
        .bucket(
            Metropolis,
            Uncommon,
            Day,
            vec![chain(&[(1, &[PATRAT]), (20, &[WATCHOG])])?, one(INDEEDEE)],
        )
        .bucket(
            Metropolis,
            Uncommon,
            Dusk,
            vec![chain(&[(1, &[ESPURR]), (25, &[MEOWSTIC])])?],
        )
        .bucket(
            Metropolis,
            Uncommon,
            Night,
            vec![chain(&[(1, &[ESPURR]), (25, &[MEOWSTIC])])?],
        )
        .bucket(
            Metropolis,
            Uncommon,
            All,
            vec![
                one(PIKACHU),
                chain(&[(1, &[GLAMEOW]), (38, &[PURUGLY])])?,
                one(FURFROU),
                chain(&[(1, &[FIDOUGH]), (26, &[DACHSBUN])])?,
                one(SQUAWKABILLY),
            ],
        )
        .bucket(
            Metropolis,
            Rare,
            Dawn,
            vec![chain(&[(1, &[TANDEMAUS]), (25, &[MAUSHOLD])])?],
        )
        .bucket(
            Metropolis,
            Rare,
            Day,
            vec![chain(&[(1, &[TANDEMAUS]), (25, &[MAUSHOLD])])?],
        )
        .bucket(Metropolis, Rare, Dusk, vec![one(MORPEKO)])
        .bucket(Metropolis, Rare, Night, vec![one(MORPEKO)])
        .bucket(
            Metropolis,
            Rare,
            All,
            vec![chain(&[(1, &[VAROOM]), (40, &[REVAVROOM])])?],
        )
        .bucket(
            Metropolis,
            SuperRare,
            All,
            vec![one(DITTO), one(EEVEE), one(SMEARGLE)],
        )
        .bucket(Metropolis, UltraRare, All, vec![one(CASTFORM)])
        .bucket(Metropolis, Boss, Dawn, vec![one(BOLTUND)])
        .bucket(Metropolis, Boss, Day, vec![one(BOLTUND)])
        .bucket(Metropolis, Boss, Dusk, vec![one(MEOWSTIC)])
        .bucket(Metropolis, Boss, Night, vec![one(MEOWSTIC)])
        .bucket(
            Metropolis,
            Boss,
            All,
            vec![one(STOUTLAND), one(FURFROU), one(DACHSBUN)],
        )
        .bucket(Metropolis, BossRare, Dawn, vec![one(MAUSHOLD)])
        .bucket(Metropolis, BossRare, Day, vec![one(MAUSHOLD)])
        .bucket(
            Metropolis,
            BossRare,
            All,
            vec![one(CASTFORM), one(REVAVROOM)],
        ))
}

fn end(table: EncounterTableBuilder) -> Result<EncounterTableBuilder> {
    use Biome::End;
    use PoolTier::*;
    use TimeOfDay::All;
    Ok(table
        .bucket(
            End,
            Common,
            All,
            vec![
                one(GREAT_TUSK),
                one(SCREAM_TAIL),
                one(BRUTE_BONNET),
                one(FLUTTER_MANE),
                one(SLITHER_WING),
                one(SANDY_SHOCKS),
                one(IRON_TREADS),
                one(IRON_BUNDLE),
                one(IRON_HANDS),
                one(IRON_JUGULIS),
                one(IRON_MOTH),
                one(IRON_THORNS),
            ],
        )
        .bucket(End, Uncommon, All, vec![one(ROARING_MOON), one(IRON_VALIANT)])
        .bucket(
            End,
            Rare,
            All,
            vec![
                one(WALKING_WAKE),
                one(IRON_LEAVES),
                one(GOUGING_FIRE),
                one(RAGING_BOLT),
                one(IRON_BOULDER),
                one(IRON_CROWN),
            ],
        )
        .bucket(End, Boss, All, vec![one(ETERNATUS)]))
}
