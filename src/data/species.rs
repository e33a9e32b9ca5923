//! Static species catalog: base stats and typing for the original 151.
//!
//! Read-only process-wide reference data. Keys are normalized lowercase
//! identifiers (alphanumerics only), the same scheme move lookups use.

use crate::data::types::Type;
use phf::phf_map;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BaseStats {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spc: u8,
    pub spe: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct SpeciesData {
    pub name: &'static str,
    pub types: [Type; 2],
    pub base_stats: BaseStats,
}

pub static POKEDEX: phf::Map<&'static str, SpeciesData> = phf_map! {
    "bulbasaur" => SpeciesData { name: "Bulbasaur", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 45, atk: 49, def: 49, spc: 65, spe: 45 } },
    "ivysaur" => SpeciesData { name: "Ivysaur", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 60, atk: 62, def: 63, spc: 80, spe: 60 } },
    "venusaur" => SpeciesData { name: "Venusaur", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 80, atk: 82, def: 83, spc: 100, spe: 80 } },
    "charmander" => SpeciesData { name: "Charmander", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 39, atk: 52, def: 43, spc: 50, spe: 65 } },
    "charmeleon" => SpeciesData { name: "Charmeleon", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 58, atk: 64, def: 58, spc: 65, spe: 80 } },
    "charizard" => SpeciesData { name: "Charizard", types: [Type::Fire, Type::Flying], base_stats: BaseStats { hp: 78, atk: 84, def: 78, spc: 85, spe: 100 } },
    "squirtle" => SpeciesData { name: "Squirtle", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 44, atk: 48, def: 65, spc: 50, spe: 43 } },
    "wartortle" => SpeciesData { name: "Wartortle", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 59, atk: 63, def: 80, spc: 65, spe: 58 } },
    "blastoise" => SpeciesData { name: "Blastoise", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 79, atk: 83, def: 100, spc: 85, spe: 78 } },
    "caterpie" => SpeciesData { name: "Caterpie", types: [Type::Bug, Type::None], base_stats: BaseStats { hp: 45, atk: 30, def: 35, spc: 20, spe: 45 } },
    "metapod" => SpeciesData { name: "Metapod", types: [Type::Bug, Type::None], base_stats: BaseStats { hp: 50, atk: 20, def: 55, spc: 25, spe: 30 } },
    "butterfree" => SpeciesData { name: "Butterfree", types: [Type::Bug, Type::Flying], base_stats: BaseStats { hp: 60, atk: 45, def: 50, spc: 80, spe: 70 } },
    "weedle" => SpeciesData { name: "Weedle", types: [Type::Bug, Type::Poison], base_stats: BaseStats { hp: 40, atk: 35, def: 30, spc: 20, spe: 50 } },
    "kakuna" => SpeciesData { name: "Kakuna", types: [Type::Bug, Type::Poison], base_stats: BaseStats { hp: 45, atk: 25, def: 50, spc: 25, spe: 35 } },
    "beedrill" => SpeciesData { name: "Beedrill", types: [Type::Bug, Type::Poison], base_stats: BaseStats { hp: 65, atk: 80, def: 40, spc: 45, spe: 75 } },
    "pidgey" => SpeciesData { name: "Pidgey", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 40, atk: 45, def: 40, spc: 35, spe: 56 } },
    "pidgeotto" => SpeciesData { name: "Pidgeotto", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 63, atk: 60, def: 55, spc: 50, spe: 71 } },
    "pidgeot" => SpeciesData { name: "Pidgeot", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 83, atk: 80, def: 75, spc: 70, spe: 91 } },
    "rattatta" => SpeciesData { name: "Rattatta", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 30, atk: 56, def: 35, spc: 25, spe: 72 } },
    "raticate" => SpeciesData { name: "Raticate", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 55, atk: 81, def: 60, spc: 50, spe: 97 } },
    "spearow" => SpeciesData { name: "Spearow", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 40, atk: 60, def: 30, spc: 31, spe: 70 } },
    "fearow" => SpeciesData { name: "Fearow", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 65, atk: 90, def: 65, spc: 61, spe: 100 } },
    "ekans" => SpeciesData { name: "Ekans", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 35, atk: 60, def: 44, spc: 40, spe: 55 } },
    "arbok" => SpeciesData { name: "Arbok", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 60, atk: 85, def: 69, spc: 65, spe: 80 } },
    "pikachu" => SpeciesData { name: "Pikachu", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 35, atk: 55, def: 30, spc: 50, spe: 90 } },
    "raichu" => SpeciesData { name: "Raichu", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 60, atk: 90, def: 55, spc: 90, spe: 100 } },
    "sandshrew" => SpeciesData { name: "Sandshrew", types: [Type::Ground, Type::None], base_stats: BaseStats { hp: 50, atk: 75, def: 85, spc: 30, spe: 40 } },
    "sandslash" => SpeciesData { name: "Sandslash", types: [Type::Ground, Type::None], base_stats: BaseStats { hp: 75, atk: 100, def: 110, spc: 55, spe: 65 } },
    "nidoranf" => SpeciesData { name: "Nidoran-F", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 55, atk: 47, def: 52, spc: 40, spe: 41 } },
    "nidorina" => SpeciesData { name: "Nidorina", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 70, atk: 62, def: 67, spc: 55, spe: 56 } },
    "nidoqueen" => SpeciesData { name: "Nidoqueen", types: [Type::Poison, Type::Ground], base_stats: BaseStats { hp: 90, atk: 82, def: 87, spc: 75, spe: 76 } },
    "nidoranm" => SpeciesData { name: "Nidoran-M", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 46, atk: 57, def: 40, spc: 40, spe: 50 } },
    "nidorino" => SpeciesData { name: "Nidorino", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 61, atk: 72, def: 57, spc: 55, spe: 65 } },
    "nidoking" => SpeciesData { name: "Nidoking", types: [Type::Poison, Type::Ground], base_stats: BaseStats { hp: 81, atk: 92, def: 77, spc: 75, spe: 85 } },
    "clefairy" => SpeciesData { name: "Clefairy", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 70, atk: 45, def: 48, spc: 60, spe: 35 } },
    "clefable" => SpeciesData { name: "Clefable", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 95, atk: 70, def: 73, spc: 85, spe: 60 } },
    "vulpix" => SpeciesData { name: "Vulpix", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 38, atk: 41, def: 40, spc: 65, spe: 65 } },
    "ninetales" => SpeciesData { name: "Ninetales", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 73, atk: 76, def: 75, spc: 100, spe: 100 } },
    "jigglypuff" => SpeciesData { name: "Jigglypuff", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 115, atk: 45, def: 20, spc: 25, spe: 20 } },
    "wigglytuff" => SpeciesData { name: "Wigglytuff", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 140, atk: 70, def: 45, spc: 50, spe: 45 } },
    "zubat" => SpeciesData { name: "Zubat", types: [Type::Poison, Type::Flying], base_stats: BaseStats { hp: 40, atk: 45, def: 35, spc: 40, spe: 55 } },
    "golbat" => SpeciesData { name: "Golbat", types: [Type::Poison, Type::Flying], base_stats: BaseStats { hp: 75, atk: 80, def: 70, spc: 75, spe: 90 } },
    "oddish" => SpeciesData { name: "Oddish", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 45, atk: 50, def: 55, spc: 75, spe: 30 } },
    "gloom" => SpeciesData { name: "Gloom", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 60, atk: 65, def: 70, spc: 85, spe: 40 } },
    "vileplume" => SpeciesData { name: "Vileplume", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 75, atk: 80, def: 85, spc: 100, spe: 50 } },
    "paras" => SpeciesData { name: "Paras", types: [Type::Bug, Type::Grass], base_stats: BaseStats { hp: 35, atk: 70, def: 55, spc: 55, spe: 25 } },
    "parasect" => SpeciesData { name: "Parasect", types: [Type::Bug, Type::Grass], base_stats: BaseStats { hp: 60, atk: 95, def: 80, spc: 80, spe: 30 } },
    "venonat" => SpeciesData { name: "Venonat", types: [Type::Bug, Type::Poison], base_stats: BaseStats { hp: 60, atk: 55, def: 50, spc: 40, spe: 45 } },
    "venomoth" => SpeciesData { name: "Venomoth", types: [Type::Bug, Type::Poison], base_stats: BaseStats { hp: 70, atk: 65, def: 60, spc: 90, spe: 90 } },
    "diglett" => SpeciesData { name: "Diglett", types: [Type::Ground, Type::None], base_stats: BaseStats { hp: 10, atk: 55, def: 25, spc: 45, spe: 95 } },
    "dugtrio" => SpeciesData { name: "Dugtrio", types: [Type::Ground, Type::None], base_stats: BaseStats { hp: 35, atk: 80, def: 50, spc: 70, spe: 120 } },
    "meowth" => SpeciesData { name: "Meowth", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 40, atk: 45, def: 35, spc: 40, spe: 90 } },
    "persian" => SpeciesData { name: "Persian", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 65, atk: 70, def: 60, spc: 65, spe: 115 } },
    "psyduck" => SpeciesData { name: "Psyduck", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 50, atk: 52, def: 48, spc: 50, spe: 55 } },
    "golduck" => SpeciesData { name: "Golduck", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 80, atk: 82, def: 78, spc: 80, spe: 85 } },
    "mankey" => SpeciesData { name: "Mankey", types: [Type::Fighting, Type::None], base_stats: BaseStats { hp: 40, atk: 80, def: 35, spc: 35, spe: 70 } },
    "primeape" => SpeciesData { name: "Primeape", types: [Type::Fighting, Type::None], base_stats: BaseStats { hp: 65, atk: 105, def: 60, spc: 60, spe: 95 } },
    "growlithe" => SpeciesData { name: "Growlithe", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 55, atk: 70, def: 45, spc: 50, spe: 60 } },
    "arcanine" => SpeciesData { name: "Arcanine", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 90, atk: 110, def: 80, spc: 80, spe: 95 } },
    "poliwag" => SpeciesData { name: "Poliwag", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 40, atk: 50, def: 40, spc: 40, spe: 90 } },
    "poliwhirl" => SpeciesData { name: "Poliwhirl", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 65, atk: 65, def: 65, spc: 50, spe: 90 } },
    "poliwrath" => SpeciesData { name: "Poliwrath", types: [Type::Water, Type::Fighting], base_stats: BaseStats { hp: 90, atk: 85, def: 95, spc: 70, spe: 70 } },
    "abra" => SpeciesData { name: "Abra", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 25, atk: 20, def: 15, spc: 105, spe: 90 } },
    "kadabra" => SpeciesData { name: "Kadabra", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 40, atk: 35, def: 30, spc: 120, spe: 105 } },
    "alakazam" => SpeciesData { name: "Alakazam", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 55, atk: 50, def: 45, spc: 135, spe: 120 } },
    "machop" => SpeciesData { name: "Machop", types: [Type::Fighting, Type::None], base_stats: BaseStats { hp: 70, atk: 80, def: 50, spc: 35, spe: 35 } },
    "machoke" => SpeciesData { name: "Machoke", types: [Type::Fighting, Type::None], base_stats: BaseStats { hp: 80, atk: 100, def: 70, spc: 50, spe: 45 } },
    "machamp" => SpeciesData { name: "Machamp", types: [Type::Fighting, Type::None], base_stats: BaseStats { hp: 90, atk: 130, def: 80, spc: 65, spe: 55 } },
    "bellsprout" => SpeciesData { name: "Bellsprout", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 50, atk: 75, def: 35, spc: 70, spe: 40 } },
    "weepinbell" => SpeciesData { name: "Weepinbell", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 65, atk: 90, def: 50, spc: 85, spe: 55 } },
    "victreebel" => SpeciesData { name: "Victreebel", types: [Type::Grass, Type::Poison], base_stats: BaseStats { hp: 80, atk: 105, def: 65, spc: 100, spe: 70 } },
    "tentacool" => SpeciesData { name: "Tentacool", types: [Type::Water, Type::Poison], base_stats: BaseStats { hp: 40, atk: 40, def: 35, spc: 100, spe: 70 } },
    "tentacruel" => SpeciesData { name: "Tentacruel", types: [Type::Water, Type::Poison], base_stats: BaseStats { hp: 80, atk: 70, def: 65, spc: 120, spe: 100 } },
    "geodude" => SpeciesData { name: "Geodude", types: [Type::Rock, Type::Ground], base_stats: BaseStats { hp: 40, atk: 80, def: 100, spc: 30, spe: 20 } },
    "graveler" => SpeciesData { name: "Graveler", types: [Type::Rock, Type::Ground], base_stats: BaseStats { hp: 55, atk: 95, def: 115, spc: 45, spe: 35 } },
    "golem" => SpeciesData { name: "Golem", types: [Type::Rock, Type::Ground], base_stats: BaseStats { hp: 80, atk: 110, def: 130, spc: 55, spe: 45 } },
    "ponyta" => SpeciesData { name: "Ponyta", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 50, atk: 85, def: 55, spc: 65, spe: 90 } },
    "rapidash" => SpeciesData { name: "Rapidash", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 65, atk: 100, def: 70, spc: 80, spe: 105 } },
    "slowpoke" => SpeciesData { name: "Slowpoke", types: [Type::Water, Type::Psychic], base_stats: BaseStats { hp: 90, atk: 65, def: 65, spc: 40, spe: 15 } },
    "slowbro" => SpeciesData { name: "Slowbro", types: [Type::Water, Type::Psychic], base_stats: BaseStats { hp: 95, atk: 75, def: 110, spc: 80, spe: 30 } },
    "magnemite" => SpeciesData { name: "Magnemite", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 25, atk: 35, def: 70, spc: 95, spe: 45 } },
    "magneton" => SpeciesData { name: "Magneton", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 50, atk: 60, def: 95, spc: 120, spe: 70 } },
    "farfetchd" => SpeciesData { name: "Farfetch'd", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 52, atk: 65, def: 55, spc: 58, spe: 60 } },
    "doduo" => SpeciesData { name: "Doduo", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 35, atk: 85, def: 45, spc: 35, spe: 75 } },
    "dodrio" => SpeciesData { name: "Dodrio", types: [Type::Normal, Type::Flying], base_stats: BaseStats { hp: 60, atk: 110, def: 70, spc: 60, spe: 100 } },
    "seel" => SpeciesData { name: "Seel", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 65, atk: 45, def: 55, spc: 70, spe: 45 } },
    "dewgong" => SpeciesData { name: "Dewgong", types: [Type::Water, Type::Ice], base_stats: BaseStats { hp: 90, atk: 70, def: 80, spc: 95, spe: 70 } },
    "grimer" => SpeciesData { name: "Grimer", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 80, atk: 80, def: 50, spc: 40, spe: 25 } },
    "muk" => SpeciesData { name: "Muk", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 105, atk: 105, def: 75, spc: 65, spe: 50 } },
    "shellder" => SpeciesData { name: "Shellder", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 30, atk: 65, def: 100, spc: 45, spe: 40 } },
    "cloyster" => SpeciesData { name: "Cloyster", types: [Type::Water, Type::Ice], base_stats: BaseStats { hp: 50, atk: 95, def: 180, spc: 85, spe: 70 } },
    "gastly" => SpeciesData { name: "Gastly", types: [Type::Ghost, Type::Poison], base_stats: BaseStats { hp: 30, atk: 35, def: 30, spc: 100, spe: 80 } },
    "haunter" => SpeciesData { name: "Haunter", types: [Type::Ghost, Type::Poison], base_stats: BaseStats { hp: 45, atk: 50, def: 45, spc: 115, spe: 95 } },
    "gengar" => SpeciesData { name: "Gengar", types: [Type::Ghost, Type::Poison], base_stats: BaseStats { hp: 60, atk: 65, def: 60, spc: 130, spe: 110 } },
    "onix" => SpeciesData { name: "Onix", types: [Type::Rock, Type::Ground], base_stats: BaseStats { hp: 35, atk: 45, def: 160, spc: 30, spe: 70 } },
    "drowzee" => SpeciesData { name: "Drowzee", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 60, atk: 48, def: 45, spc: 90, spe: 42 } },
    "hypno" => SpeciesData { name: "Hypno", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 85, atk: 73, def: 70, spc: 115, spe: 67 } },
    "krabby" => SpeciesData { name: "Krabby", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 30, atk: 105, def: 90, spc: 25, spe: 50 } },
    "kingler" => SpeciesData { name: "Kingler", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 55, atk: 130, def: 115, spc: 50, spe: 75 } },
    "voltorb" => SpeciesData { name: "Voltorb", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 40, atk: 30, def: 50, spc: 55, spe: 100 } },
    "electrode" => SpeciesData { name: "Electrode", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 60, atk: 50, def: 70, spc: 80, spe: 140 } },
    "exeggcute" => SpeciesData { name: "Exeggcute", types: [Type::Grass, Type::Psychic], base_stats: BaseStats { hp: 60, atk: 40, def: 80, spc: 60, spe: 40 } },
    "exeggutor" => SpeciesData { name: "Exeggutor", types: [Type::Grass, Type::Psychic], base_stats: BaseStats { hp: 95, atk: 95, def: 85, spc: 125, spe: 55 } },
    "cubone" => SpeciesData { name: "Cubone", types: [Type::Ground, Type::None], base_stats: BaseStats { hp: 50, atk: 50, def: 95, spc: 40, spe: 35 } },
    "marowak" => SpeciesData { name: "Marowak", types: [Type::Ground, Type::None], base_stats: BaseStats { hp: 60, atk: 80, def: 110, spc: 50, spe: 45 } },
    "hitmonlee" => SpeciesData { name: "Hitmonlee", types: [Type::Fighting, Type::None], base_stats: BaseStats { hp: 50, atk: 120, def: 53, spc: 35, spe: 87 } },
    "hitmonchan" => SpeciesData { name: "Hitmonchan", types: [Type::Fighting, Type::None], base_stats: BaseStats { hp: 50, atk: 105, def: 79, spc: 35, spe: 76 } },
    "lickitung" => SpeciesData { name: "Lickitung", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 90, atk: 55, def: 75, spc: 60, spe: 30 } },
    "koffing" => SpeciesData { name: "Koffing", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 40, atk: 65, def: 95, spc: 60, spe: 35 } },
    "weezing" => SpeciesData { name: "Weezing", types: [Type::Poison, Type::None], base_stats: BaseStats { hp: 65, atk: 90, def: 120, spc: 85, spe: 60 } },
    "rhyhorn" => SpeciesData { name: "Rhyhorn", types: [Type::Ground, Type::Rock], base_stats: BaseStats { hp: 80, atk: 85, def: 95, spc: 30, spe: 25 } },
    "rhydon" => SpeciesData { name: "Rhydon", types: [Type::Ground, Type::Rock], base_stats: BaseStats { hp: 105, atk: 130, def: 120, spc: 45, spe: 40 } },
    "chansey" => SpeciesData { name: "Chansey", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 250, atk: 5, def: 5, spc: 105, spe: 50 } },
    "tangela" => SpeciesData { name: "Tangela", types: [Type::Grass, Type::None], base_stats: BaseStats { hp: 65, atk: 55, def: 115, spc: 100, spe: 60 } },
    "kangaskhan" => SpeciesData { name: "Kangaskhan", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 105, atk: 95, def: 80, spc: 40, spe: 90 } },
    "horsea" => SpeciesData { name: "Horsea", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 30, atk: 40, def: 70, spc: 70, spe: 60 } },
    "seadra" => SpeciesData { name: "Seadra", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 55, atk: 65, def: 95, spc: 95, spe: 85 } },
    "goldeen" => SpeciesData { name: "Goldeen", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 45, atk: 67, def: 60, spc: 50, spe: 63 } },
    "seaking" => SpeciesData { name: "Seaking", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 80, atk: 92, def: 65, spc: 80, spe: 68 } },
    "staryu" => SpeciesData { name: "Staryu", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 30, atk: 45, def: 55, spc: 70, spe: 85 } },
    "starmie" => SpeciesData { name: "Starmie", types: [Type::Water, Type::Psychic], base_stats: BaseStats { hp: 60, atk: 75, def: 85, spc: 100, spe: 115 } },
    "mrmime" => SpeciesData { name: "Mr. Mime", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 40, atk: 45, def: 65, spc: 100, spe: 90 } },
    "scyther" => SpeciesData { name: "Scyther", types: [Type::Bug, Type::Flying], base_stats: BaseStats { hp: 70, atk: 110, def: 80, spc: 55, spe: 105 } },
    "jynx" => SpeciesData { name: "Jynx", types: [Type::Ice, Type::Psychic], base_stats: BaseStats { hp: 65, atk: 50, def: 35, spc: 95, spe: 95 } },
    "electabuzz" => SpeciesData { name: "Electabuzz", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 65, atk: 83, def: 57, spc: 85, spe: 105 } },
    "magmar" => SpeciesData { name: "Magmar", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 65, atk: 95, def: 57, spc: 85, spe: 93 } },
    "pinsir" => SpeciesData { name: "Pinsir", types: [Type::Bug, Type::None], base_stats: BaseStats { hp: 65, atk: 125, def: 100, spc: 55, spe: 85 } },
    "tauros" => SpeciesData { name: "Tauros", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 75, atk: 100, def: 95, spc: 70, spe: 110 } },
    "magikarp" => SpeciesData { name: "Magikarp", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 20, atk: 10, def: 55, spc: 20, spe: 80 } },
    "gyarados" => SpeciesData { name: "Gyarados", types: [Type::Water, Type::Flying], base_stats: BaseStats { hp: 95, atk: 125, def: 79, spc: 100, spe: 81 } },
    "lapras" => SpeciesData { name: "Lapras", types: [Type::Water, Type::Ice], base_stats: BaseStats { hp: 130, atk: 85, def: 80, spc: 95, spe: 60 } },
    "ditto" => SpeciesData { name: "Ditto", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 48, atk: 48, def: 48, spc: 48, spe: 48 } },
    "eevee" => SpeciesData { name: "Eevee", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 55, atk: 55, def: 50, spc: 65, spe: 55 } },
    "vaporeon" => SpeciesData { name: "Vaporeon", types: [Type::Water, Type::None], base_stats: BaseStats { hp: 130, atk: 65, def: 60, spc: 110, spe: 65 } },
    "jolteon" => SpeciesData { name: "Jolteon", types: [Type::Electric, Type::None], base_stats: BaseStats { hp: 65, atk: 65, def: 60, spc: 110, spe: 130 } },
    "flareon" => SpeciesData { name: "Flareon", types: [Type::Fire, Type::None], base_stats: BaseStats { hp: 65, atk: 130, def: 60, spc: 110, spe: 65 } },
    "porygon" => SpeciesData { name: "Porygon", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 65, atk: 60, def: 70, spc: 75, spe: 40 } },
    "omanyte" => SpeciesData { name: "Omanyte", types: [Type::Rock, Type::Water], base_stats: BaseStats { hp: 35, atk: 40, def: 100, spc: 90, spe: 35 } },
    "omastar" => SpeciesData { name: "Omastar", types: [Type::Rock, Type::Water], base_stats: BaseStats { hp: 70, atk: 60, def: 125, spc: 115, spe: 55 } },
    "kabuto" => SpeciesData { name: "Kabuto", types: [Type::Rock, Type::Water], base_stats: BaseStats { hp: 30, atk: 80, def: 90, spc: 45, spe: 55 } },
    "kabutops" => SpeciesData { name: "Kabutops", types: [Type::Rock, Type::Water], base_stats: BaseStats { hp: 60, atk: 115, def: 105, spc: 70, spe: 80 } },
    "aerodactyl" => SpeciesData { name: "Aerodactyl", types: [Type::Rock, Type::Flying], base_stats: BaseStats { hp: 80, atk: 105, def: 65, spc: 60, spe: 130 } },
    "snorlax" => SpeciesData { name: "Snorlax", types: [Type::Normal, Type::None], base_stats: BaseStats { hp: 160, atk: 110, def: 65, spc: 65, spe: 30 } },
    "articuno" => SpeciesData { name: "Articuno", types: [Type::Ice, Type::Flying], base_stats: BaseStats { hp: 90, atk: 85, def: 100, spc: 125, spe: 85 } },
    "zapdos" => SpeciesData { name: "Zapdos", types: [Type::Electric, Type::Flying], base_stats: BaseStats { hp: 90, atk: 90, def: 85, spc: 125, spe: 100 } },
    "moltres" => SpeciesData { name: "Moltres", types: [Type::Fire, Type::Flying], base_stats: BaseStats { hp: 90, atk: 100, def: 90, spc: 125, spe: 90 } },
    "dratini" => SpeciesData { name: "Dratini", types: [Type::Dragon, Type::None], base_stats: BaseStats { hp: 41, atk: 64, def: 45, spc: 50, spe: 50 } },
    "dragonair" => SpeciesData { name: "Dragonair", types: [Type::Dragon, Type::None], base_stats: BaseStats { hp: 61, atk: 84, def: 65, spc: 70, spe: 70 } },
    "dragonite" => SpeciesData { name: "Dragonite", types: [Type::Dragon, Type::Flying], base_stats: BaseStats { hp: 91, atk: 134, def: 95, spc: 100, spe: 80 } },
    "mewtwo" => SpeciesData { name: "Mewtwo", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 106, atk: 110, def: 90, spc: 154, spe: 130 } },
    "mew" => SpeciesData { name: "Mew", types: [Type::Psychic, Type::None], base_stats: BaseStats { hp: 100, atk: 100, def: 100, spc: 100, spe: 100 } },};

/// National-dex order, for drivers that address species by number.
#[rustfmt::skip]
pub static DEX_ORDER: [&str; 151] = [
    "bulbasaur", "ivysaur", "venusaur", "charmander", "charmeleon", "charizard",
    "squirtle", "wartortle", "blastoise", "caterpie", "metapod", "butterfree",
    "weedle", "kakuna", "beedrill", "pidgey", "pidgeotto", "pidgeot",
    "rattatta", "raticate", "spearow", "fearow", "ekans", "arbok",
    "pikachu", "raichu", "sandshrew", "sandslash", "nidoranf", "nidorina",
    "nidoqueen", "nidoranm", "nidorino", "nidoking", "clefairy", "clefable",
    "vulpix", "ninetales", "jigglypuff", "wigglytuff", "zubat", "golbat",
    "oddish", "gloom", "vileplume", "paras", "parasect", "venonat",
    "venomoth", "diglett", "dugtrio", "meowth", "persian", "psyduck",
    "golduck", "mankey", "primeape", "growlithe", "arcanine", "poliwag",
    "poliwhirl", "poliwrath", "abra", "kadabra", "alakazam", "machop",
    "machoke", "machamp", "bellsprout", "weepinbell", "victreebel", "tentacool",
    "tentacruel", "geodude", "graveler", "golem", "ponyta", "rapidash",
    "slowpoke", "slowbro", "magnemite", "magneton", "farfetchd", "doduo",
    "dodrio", "seel", "dewgong", "grimer", "muk", "shellder",
    "cloyster", "gastly", "haunter", "gengar", "onix", "drowzee",
    "hypno", "krabby", "kingler", "voltorb", "electrode", "exeggcute",
    "exeggutor", "cubone", "marowak", "hitmonlee", "hitmonchan", "lickitung",
    "koffing", "weezing", "rhyhorn", "rhydon", "chansey", "tangela",
    "kangaskhan", "horsea", "seadra", "goldeen", "seaking", "staryu",
    "starmie", "mrmime", "scyther", "jynx", "electabuzz", "magmar",
    "pinsir", "tauros", "magikarp", "gyarados", "lapras", "ditto",
    "eevee", "vaporeon", "jolteon", "flareon", "porygon", "omanyte",
    "omastar", "kabuto", "kabutops", "aerodactyl", "snorlax", "articuno",
    "zapdos", "moltres", "dratini", "dragonair", "dragonite", "mewtwo",
    "mew",];

/// Look a species up by its 1-based dex number.
pub fn species_by_number(number: u16) -> Option<&'static SpeciesData> {
    let index = usize::from(number).checked_sub(1)?;
    let id = DEX_ORDER.get(index)?;
    POKEDEX.get(id)
}

pub fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Look a species up by display name or normalized id, case-insensitively.
pub fn get_species(name: &str) -> Option<&'static SpeciesData> {
    POKEDEX.get(normalize_id(name).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokedex_has_all_151_species() {
        assert_eq!(POKEDEX.len(), 151);
        assert_eq!(DEX_ORDER.len(), 151);
    }

    #[test]
    fn charizard_stats() {
        let charizard = POKEDEX.get("charizard").expect("Charizard should exist");
        assert_eq!(charizard.base_stats.hp, 78);
        assert_eq!(charizard.base_stats.atk, 84);
        assert_eq!(charizard.types, [Type::Fire, Type::Flying]);
    }

    #[test]
    fn mono_typed_species_use_none_second_type() {
        let pikachu = POKEDEX.get("pikachu").expect("Pikachu should exist");
        assert_eq!(pikachu.types, [Type::Electric, Type::None]);
    }

    #[test]
    fn lookup_is_case_and_punctuation_insensitive() {
        assert!(get_species("Farfetch'd").is_some());
        assert!(get_species("MR. MIME").is_some());
        assert!(get_species("NidoranF").is_some());
    }

    #[test]
    fn dex_number_lookup_matches_order() {
        assert_eq!(species_by_number(1).map(|s| s.name), Some("Bulbasaur"));
        assert_eq!(species_by_number(151).map(|s| s.name), Some("Mew"));
        assert!(species_by_number(0).is_none());
        assert!(species_by_number(152).is_none());
    }
}
