//! Named species identifiers referenced by the authored content.
//!
//! Numbering follows the dex ordering; regional forms add a region offset
//! (8000 for Paldean forms) to the base number. Only species that actually
//! appear in the authored pools are named here.

use wilds_core::SpeciesId;

pub const BULBASAUR: SpeciesId = SpeciesId(1);
pub const IVYSAUR: SpeciesId = SpeciesId(2);
pub const VENUSAUR: SpeciesId = SpeciesId(3);
pub const CATERPIE: SpeciesId = SpeciesId(10);
pub const METAPOD: SpeciesId = SpeciesId(11);
pub const WEEDLE: SpeciesId = SpeciesId(13);
pub const KAKUNA: SpeciesId = SpeciesId(14);
pub const PIDGEY: SpeciesId = SpeciesId(16);
pub const PIDGEOTTO: SpeciesId = SpeciesId(17);
pub const PIDGEOT: SpeciesId = SpeciesId(18);
pub const RATTATA: SpeciesId = SpeciesId(19);
pub const RATICATE: SpeciesId = SpeciesId(20);
pub const SPEAROW: SpeciesId = SpeciesId(21);
pub const FEAROW: SpeciesId = SpeciesId(22);
pub const EKANS: SpeciesId = SpeciesId(23);
pub const PIKACHU: SpeciesId = SpeciesId(25);
pub const NIDORAN_F: SpeciesId = SpeciesId(29);
pub const NIDORINA: SpeciesId = SpeciesId(30);
pub const NIDOQUEEN: SpeciesId = SpeciesId(31);
pub const NIDORAN_M: SpeciesId = SpeciesId(32);
pub const NIDORINO: SpeciesId = SpeciesId(33);
pub const NIDOKING: SpeciesId = SpeciesId(34);
pub const VULPIX: SpeciesId = SpeciesId(37);
pub const ZUBAT: SpeciesId = SpeciesId(41);
pub const GOLBAT: SpeciesId = SpeciesId(42);
pub const ODDISH: SpeciesId = SpeciesId(43);
pub const GLOOM: SpeciesId = SpeciesId(44);
pub const VILEPLUME: SpeciesId = SpeciesId(45);
pub const PARAS: SpeciesId = SpeciesId(46);
pub const PARASECT: SpeciesId = SpeciesId(47);
pub const VENONAT: SpeciesId = SpeciesId(48);
pub const VENOMOTH: SpeciesId = SpeciesId(49);
pub const MEOWTH: SpeciesId = SpeciesId(52);
pub const PERSIAN: SpeciesId = SpeciesId(53);
pub const MANKEY: SpeciesId = SpeciesId(56);
pub const PRIMEAPE: SpeciesId = SpeciesId(57);
pub const GROWLITHE: SpeciesId = SpeciesId(58);
pub const ABRA: SpeciesId = SpeciesId(63);
pub const KADABRA: SpeciesId = SpeciesId(64);
pub const BELLSPROUT: SpeciesId = SpeciesId(69);
pub const FARFETCHD: SpeciesId = SpeciesId(83);
pub const DODUO: SpeciesId = SpeciesId(84);
pub const DODRIO: SpeciesId = SpeciesId(85);
pub const LICKITUNG: SpeciesId = SpeciesId(108);
pub const CHANSEY: SpeciesId = SpeciesId(113);
pub const SCYTHER: SpeciesId = SpeciesId(123);
pub const PINSIR: SpeciesId = SpeciesId(127);
pub const DITTO: SpeciesId = SpeciesId(132);
pub const EEVEE: SpeciesId = SpeciesId(133);
pub const SNORLAX: SpeciesId = SpeciesId(143);
pub const CHIKORITA: SpeciesId = SpeciesId(152);
pub const BAYLEEF: SpeciesId = SpeciesId(153);
pub const MEGANIUM: SpeciesId = SpeciesId(154);
pub const SENTRET: SpeciesId = SpeciesId(161);
pub const FURRET: SpeciesId = SpeciesId(162);
pub const HOOTHOOT: SpeciesId = SpeciesId(163);
pub const LEDYBA: SpeciesId = SpeciesId(165);
pub const SPINARAK: SpeciesId = SpeciesId(167);
pub const ARIADOS: SpeciesId = SpeciesId(168);
pub const BELLOSSOM: SpeciesId = SpeciesId(182);
pub const SUDOWOODO: SpeciesId = SpeciesId(185);
pub const HOPPIP: SpeciesId = SpeciesId(187);
pub const SKIPLOOM: SpeciesId = SpeciesId(188);
pub const JUMPLUFF: SpeciesId = SpeciesId(189);
pub const SUNKERN: SpeciesId = SpeciesId(191);
pub const SUNFLORA: SpeciesId = SpeciesId(192);
pub const GIRAFARIG: SpeciesId = SpeciesId(203);
pub const DUNSPARCE: SpeciesId = SpeciesId(206);
pub const HOUNDOUR: SpeciesId = SpeciesId(228);
pub const HOUNDOOM: SpeciesId = SpeciesId(229);
pub const SMEARGLE: SpeciesId = SpeciesId(235);
pub const POOCHYENA: SpeciesId = SpeciesId(261);
pub const MIGHTYENA: SpeciesId = SpeciesId(262);
pub const ZIGZAGOON: SpeciesId = SpeciesId(263);
pub const LINOONE: SpeciesId = SpeciesId(264);
pub const WURMPLE: SpeciesId = SpeciesId(265);
pub const SILCOON: SpeciesId = SpeciesId(266);
pub const CASCOON: SpeciesId = SpeciesId(268);
pub const LOTAD: SpeciesId = SpeciesId(270);
pub const SEEDOT: SpeciesId = SpeciesId(273);
pub const NUZLEAF: SpeciesId = SpeciesId(274);
pub const TAILLOW: SpeciesId = SpeciesId(276);
pub const RALTS: SpeciesId = SpeciesId(280);
pub const SURSKIT: SpeciesId = SpeciesId(283);
pub const SHROOMISH: SpeciesId = SpeciesId(285);
pub const BRELOOM: SpeciesId = SpeciesId(286);
pub const NINCADA: SpeciesId = SpeciesId(290);
pub const NINJASK: SpeciesId = SpeciesId(291);
pub const SHEDINJA: SpeciesId = SpeciesId(292);
pub const WHISMUR: SpeciesId = SpeciesId(293);
pub const SKITTY: SpeciesId = SpeciesId(300);
pub const ZANGOOSE: SpeciesId = SpeciesId(335);
pub const CASTFORM: SpeciesId = SpeciesId(351);
pub const KECLEON: SpeciesId = SpeciesId(352);
pub const TROPIUS: SpeciesId = SpeciesId(357);
pub const LATIAS: SpeciesId = SpeciesId(380);
pub const LATIOS: SpeciesId = SpeciesId(381);
pub const TURTWIG: SpeciesId = SpeciesId(387);
pub const GROTLE: SpeciesId = SpeciesId(388);
pub const TORTERRA: SpeciesId = SpeciesId(389);
pub const STARLY: SpeciesId = SpeciesId(396);
pub const STARAVIA: SpeciesId = SpeciesId(397);
pub const STARAPTOR: SpeciesId = SpeciesId(398);
pub const BIDOOF: SpeciesId = SpeciesId(399);
pub const BIBAREL: SpeciesId = SpeciesId(400);
pub const KRICKETOT: SpeciesId = SpeciesId(401);
pub const KRICKETUNE: SpeciesId = SpeciesId(402);
pub const SHINX: SpeciesId = SpeciesId(403);
pub const LUXIO: SpeciesId = SpeciesId(404);
pub const LUXRAY: SpeciesId = SpeciesId(405);
pub const COMBEE: SpeciesId = SpeciesId(415);
pub const VESPIQUEN: SpeciesId = SpeciesId(416);
pub const CHERUBI: SpeciesId = SpeciesId(420);
pub const CHERRIM: SpeciesId = SpeciesId(421);
pub const BUNEARY: SpeciesId = SpeciesId(427);
pub const LOPUNNY: SpeciesId = SpeciesId(428);
pub const GLAMEOW: SpeciesId = SpeciesId(431);
pub const PURUGLY: SpeciesId = SpeciesId(432);
pub const LICKILICKY: SpeciesId = SpeciesId(463);
pub const ROTOM: SpeciesId = SpeciesId(479);
pub const PATRAT: SpeciesId = SpeciesId(504);
pub const WATCHOG: SpeciesId = SpeciesId(505);
pub const LILLIPUP: SpeciesId = SpeciesId(506);
pub const HERDIER: SpeciesId = SpeciesId(507);
pub const STOUTLAND: SpeciesId = SpeciesId(508);
pub const PURRLOIN: SpeciesId = SpeciesId(509);
pub const PIDOVE: SpeciesId = SpeciesId(519);
pub const TRANQUILL: SpeciesId = SpeciesId(520);
pub const UNFEZANT: SpeciesId = SpeciesId(521);
pub const VENIPEDE: SpeciesId = SpeciesId(543);
pub const COTTONEE: SpeciesId = SpeciesId(546);
pub const WHIMSICOTT: SpeciesId = SpeciesId(547);
pub const PETILIL: SpeciesId = SpeciesId(548);
pub const MINCCINO: SpeciesId = SpeciesId(572);
pub const FOONGUS: SpeciesId = SpeciesId(590);
pub const AMOONGUSS: SpeciesId = SpeciesId(591);
pub const VIRIZION: SpeciesId = SpeciesId(640);
pub const FLETCHLING: SpeciesId = SpeciesId(661);
pub const FLETCHINDER: SpeciesId = SpeciesId(662);
pub const TALONFLAME: SpeciesId = SpeciesId(663);
pub const SCATTERBUG: SpeciesId = SpeciesId(664);
pub const SPEWPA: SpeciesId = SpeciesId(665);
pub const FURFROU: SpeciesId = SpeciesId(676);
pub const ESPURR: SpeciesId = SpeciesId(677);
pub const MEOWSTIC: SpeciesId = SpeciesId(678);
pub const YUNGOOS: SpeciesId = SpeciesId(734);
pub const GUMSHOOS: SpeciesId = SpeciesId(735);
pub const ROCKRUFF: SpeciesId = SpeciesId(744);
pub const LYCANROC: SpeciesId = SpeciesId(745);
pub const FOMANTIS: SpeciesId = SpeciesId(753);
pub const LURANTIS: SpeciesId = SpeciesId(754);
pub const BOUNSWEET: SpeciesId = SpeciesId(761);
pub const STEENEE: SpeciesId = SpeciesId(762);
pub const TSAREENA: SpeciesId = SpeciesId(763);
pub const SKWOVET: SpeciesId = SpeciesId(819);
pub const GREEDENT: SpeciesId = SpeciesId(820);
pub const ROOKIDEE: SpeciesId = SpeciesId(821);
pub const CORVISQUIRE: SpeciesId = SpeciesId(822);
pub const CORVIKNIGHT: SpeciesId = SpeciesId(823);
pub const BLIPBUG: SpeciesId = SpeciesId(824);
pub const WOOLOO: SpeciesId = SpeciesId(831);
pub const YAMPER: SpeciesId = SpeciesId(835);
pub const BOLTUND: SpeciesId = SpeciesId(836);
pub const INDEEDEE: SpeciesId = SpeciesId(876);
pub const MORPEKO: SpeciesId = SpeciesId(877);
pub const ETERNATUS: SpeciesId = SpeciesId(890);
pub const LECHONK: SpeciesId = SpeciesId(915);
pub const OINKOLOGNE: SpeciesId = SpeciesId(916);
pub const NYMBLE: SpeciesId = SpeciesId(919);
pub const LOKIX: SpeciesId = SpeciesId(920);
pub const PAWMI: SpeciesId = SpeciesId(921);
pub const PAWMO: SpeciesId = SpeciesId(922);
pub const PAWMOT: SpeciesId = SpeciesId(923);
pub const TANDEMAUS: SpeciesId = SpeciesId(924);
pub const MAUSHOLD: SpeciesId = SpeciesId(925);
pub const FIDOUGH: SpeciesId = SpeciesId(926);
pub const DACHSBUN: SpeciesId = SpeciesId(927);
pub const SQUAWKABILLY: SpeciesId = SpeciesId(931);
pub const VAROOM: SpeciesId = SpeciesId(965);
pub const REVAVROOM: SpeciesId = SpeciesId(966);
pub const ANNIHILAPE: SpeciesId = SpeciesId(979);
pub const FARIGIRAF: SpeciesId = SpeciesId(981);
pub const DUDUNSPARCE: SpeciesId = SpeciesId(982);
pub const GREAT_TUSK: SpeciesId = SpeciesId(984);
pub const SCREAM_TAIL: SpeciesId = SpeciesId(985);
pub const BRUTE_BONNET: SpeciesId = SpeciesId(986);
pub const FLUTTER_MANE: SpeciesId = SpeciesId(987);
pub const SLITHER_WING: SpeciesId = SpeciesId(988);
pub const SANDY_SHOCKS: SpeciesId = SpeciesId(989);
pub const IRON_TREADS: SpeciesId = SpeciesId(990);
pub const IRON_BUNDLE: SpeciesId = SpeciesId(991);
pub const IRON_HANDS: SpeciesId = SpeciesId(992);
pub const IRON_JUGULIS: SpeciesId = SpeciesId(993);
pub const IRON_MOTH: SpeciesId = SpeciesId(994);
pub const IRON_THORNS: SpeciesId = SpeciesId(995);
pub const ROARING_MOON: SpeciesId = SpeciesId(1005);
pub const IRON_VALIANT: SpeciesId = SpeciesId(1006);
pub const WALKING_WAKE: SpeciesId = SpeciesId(1009);
pub const IRON_LEAVES: SpeciesId = SpeciesId(1010);
pub const GOUGING_FIRE: SpeciesId = SpeciesId(1020);
pub const RAGING_BOLT: SpeciesId = SpeciesId(1021);
pub const IRON_BOULDER: SpeciesId = SpeciesId(1022);
pub const IRON_CROWN: SpeciesId = SpeciesId(1023);

// Paldean regional form (8000 + base number).
pub const PALDEA_TAUROS: SpeciesId = SpeciesId(8128);
