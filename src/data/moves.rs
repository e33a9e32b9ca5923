//! Static move catalog.
//!
//! A move is one immutable record with two orthogonal tagged axes: how its
//! primary (damage) phase resolves and how its secondary (non-damage) phase
//! resolves. The const constructors below mirror the behavioral families of
//! the catalog; concrete moves are data, consumed by the engine through the
//! shape tags and never by name.

use phf::phf_map;

use crate::data::types::{Category, Type};
use crate::sim::conditions::{PersistentKind, TransientKind};
use crate::sim::stats::Stat;

/// How the primary phase of a move resolves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DamageShape {
    /// No damage; the move only has a secondary phase.
    Status,
    /// The full level/power/stat formula with roll and critical variance.
    Standard {
        power: u8,
        crit_multiplier: u8,
        defense_divisor: u8,
    },
    /// Certain damage equal to the user's level.
    FixedLevel,
    /// Certain damage of a fixed amount.
    Fixed(u16),
    /// Uniform damage over 1..=(level * 3 / 2 - 1); needs level > 1.
    UniformToLevel,
    /// Certain maximum damage. The fails-if-slower miss rule is applied by
    /// the driver, not here.
    Ohko,
    /// No damage of its own; retaliates through the secondary phase.
    Counter,
}

impl DamageShape {
    pub const fn standard(power: u8) -> Self {
        DamageShape::Standard {
            power,
            crit_multiplier: 1,
            defense_divisor: 1,
        }
    }

    pub const fn high_crit(power: u8) -> Self {
        DamageShape::Standard {
            power,
            crit_multiplier: 8,
            defense_divisor: 1,
        }
    }

    pub const fn half_defense(power: u8) -> Self {
        DamageShape::Standard {
            power,
            crit_multiplier: 1,
            defense_divisor: 2,
        }
    }
}

/// How the secondary phase of a move resolves. At most one shape per move;
/// the shape is fixed by the definition, never computed at resolution time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SecondaryShape {
    None,
    /// Stage change, deterministic (`chance: None`) or chance-gated.
    StatChange {
        on_user: bool,
        stat: Stat,
        stages: i8,
        chance: Option<f64>,
    },
    /// Persistent condition, deterministic or chance-gated. Deterministic
    /// application of a condition with a duration yields a uniform
    /// distribution over its duration range.
    PersistentStatus {
        on_user: bool,
        kind: PersistentKind,
        chance: Option<f64>,
    },
    /// Transient condition, deterministic or chance-gated.
    TransientStatus {
        on_user: bool,
        kind: TransientKind,
        chance: Option<f64>,
    },
    /// User heals half of the damage dealt.
    Drain,
    /// User takes damage dealt divided by the divisor.
    Recoil { divisor: u8 },
    /// 1 to 4 follow-up hits of equal magnitude at 1/8, 3/8, 3/8, 1/8.
    MultiHit,
    /// Exactly one follow-up hit of equal magnitude.
    ExtraHit,
    /// User must spend the next turn recharging.
    Recharge,
    /// User takes its own max HP in damage.
    Kamikaze,
    /// User heals half of its max HP.
    HalfHeal,
    /// Fixed 1 HP self-damage; the driver triggers it on a miss.
    CrashDamage,
    /// Twice the damage last received, returned at the attacker.
    Retaliation,
}

/// Immutable definition of one move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveData {
    pub name: &'static str,
    pub move_type: Type,
    /// Base accuracy in [0.0, 1.0]; 0.0 means the normal accuracy check
    /// never misses.
    pub accuracy: f64,
    pub pp: u8,
    /// Turn-order tier, consumed by the external scheduler.
    pub priority: i8,
    pub damage: DamageShape,
    pub secondary: SecondaryShape,
}

impl MoveData {
    pub fn damages(&self) -> bool {
        !matches!(self.damage, DamageShape::Status)
    }

    /// Physical or Special, fixed by the move's type.
    pub fn damage_category(&self) -> Category {
        self.move_type.category()
    }

    const fn damaging(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
        priority: i8,
    ) -> Self {
        Self {
            name,
            move_type,
            accuracy,
            pp,
            priority,
            damage: DamageShape::standard(power),
            secondary: SecondaryShape::None,
        }
    }

    const fn high_crit(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
    ) -> Self {
        Self {
            damage: DamageShape::high_crit(power),
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn stat_chance(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
        stat: Stat,
        stages: i8,
        chance: f64,
    ) -> Self {
        Self {
            secondary: SecondaryShape::StatChange {
                on_user: false,
                stat,
                stages,
                chance: Some(chance),
            },
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn persistent_chance(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
        kind: PersistentKind,
        chance: f64,
    ) -> Self {
        Self {
            secondary: SecondaryShape::PersistentStatus {
                on_user: false,
                kind,
                chance: Some(chance),
            },
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn transient_chance(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
        kind: TransientKind,
        chance: f64,
    ) -> Self {
        Self {
            secondary: SecondaryShape::TransientStatus {
                on_user: false,
                kind,
                chance: Some(chance),
            },
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn multi_hit(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
    ) -> Self {
        Self {
            secondary: SecondaryShape::MultiHit,
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn extra_hit(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
    ) -> Self {
        Self {
            secondary: SecondaryShape::ExtraHit,
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn drain(name: &'static str, move_type: Type, power: u8, accuracy: f64, pp: u8) -> Self {
        Self {
            secondary: SecondaryShape::Drain,
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn recoil(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
        divisor: u8,
    ) -> Self {
        Self {
            secondary: SecondaryShape::Recoil { divisor },
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn recharge(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
    ) -> Self {
        Self {
            secondary: SecondaryShape::Recharge,
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn kamikaze(
        name: &'static str,
        move_type: Type,
        power: u8,
        accuracy: f64,
        pp: u8,
    ) -> Self {
        Self {
            damage: DamageShape::half_defense(power),
            secondary: SecondaryShape::Kamikaze,
            ..Self::damaging(name, move_type, power, accuracy, pp, 0)
        }
    }

    const fn crash(name: &'static str, power: u8, accuracy: f64, pp: u8) -> Self {
        Self {
            secondary: SecondaryShape::CrashDamage,
            ..Self::damaging(name, Type::Fighting, power, accuracy, pp, 0)
        }
    }

    const fn status(name: &'static str, move_type: Type, accuracy: f64, pp: u8) -> Self {
        Self {
            name,
            move_type,
            accuracy,
            pp,
            priority: 0,
            damage: DamageShape::Status,
            secondary: SecondaryShape::None,
        }
    }

    const fn status_stat(
        name: &'static str,
        move_type: Type,
        accuracy: f64,
        pp: u8,
        on_user: bool,
        stat: Stat,
        stages: i8,
    ) -> Self {
        Self {
            secondary: SecondaryShape::StatChange {
                on_user,
                stat,
                stages,
                chance: None,
            },
            ..Self::status(name, move_type, accuracy, pp)
        }
    }

    const fn status_persistent(
        name: &'static str,
        move_type: Type,
        accuracy: f64,
        pp: u8,
        kind: PersistentKind,
    ) -> Self {
        Self {
            secondary: SecondaryShape::PersistentStatus {
                on_user: false,
                kind,
                chance: None,
            },
            ..Self::status(name, move_type, accuracy, pp)
        }
    }

    const fn status_transient(
        name: &'static str,
        move_type: Type,
        accuracy: f64,
        pp: u8,
        on_user: bool,
        kind: TransientKind,
    ) -> Self {
        Self {
            secondary: SecondaryShape::TransientStatus {
                on_user,
                kind,
                chance: None,
            },
            ..Self::status(name, move_type, accuracy, pp)
        }
    }

    const fn half_heal(name: &'static str, pp: u8) -> Self {
        Self {
            secondary: SecondaryShape::HalfHeal,
            ..Self::status(name, Type::Normal, 0.0, pp)
        }
    }

    const fn fixed(
        name: &'static str,
        move_type: Type,
        magnitude: u16,
        accuracy: f64,
        pp: u8,
    ) -> Self {
        Self {
            damage: DamageShape::Fixed(magnitude),
            ..Self::damaging(name, move_type, 0, accuracy, pp, 0)
        }
    }

    const fn fixed_level(name: &'static str, move_type: Type, accuracy: f64, pp: u8) -> Self {
        Self {
            damage: DamageShape::FixedLevel,
            ..Self::damaging(name, move_type, 0, accuracy, pp, 0)
        }
    }

    const fn ohko(name: &'static str, move_type: Type) -> Self {
        Self {
            damage: DamageShape::Ohko,
            ..Self::damaging(name, move_type, 0, 0.3, 5, 0)
        }
    }
}

pub static MOVES: phf::Map<&'static str, MoveData> = phf_map! {
    "absorb" => MoveData::drain("Absorb", Type::Grass, 20, 1.0, 20),
    "acid" => MoveData::stat_chance("Acid", Type::Poison, 40, 1.0, 30, Stat::Def, -1, 0.33),
    "acidarmor" => MoveData::status_stat("Acid Armor", Type::Poison, 0.0, 40, true, Stat::Def, 2),
    "agility" => MoveData::status_stat("Agility", Type::Psychic, 0.0, 30, true, Stat::Spe, 2),
    "amnesia" => MoveData::status_stat("Amnesia", Type::Psychic, 0.0, 20, true, Stat::Spc, 2),
    "aurorabeam" => MoveData::stat_chance("Aurora Beam", Type::Ice, 65, 1.0, 20, Stat::Atk, -1, 0.33),
    "barrage" => MoveData::multi_hit("Barrage", Type::Normal, 15, 0.85, 20),
    "barrier" => MoveData::status_stat("Barrier", Type::Psychic, 0.0, 30, true, Stat::Def, 2),
    "bite" => MoveData::transient_chance("Bite", Type::Normal, 60, 1.0, 25, TransientKind::Flinching, 0.1),
    "blizzard" => MoveData::persistent_chance("Blizzard", Type::Ice, 120, 0.9, 5, PersistentKind::Freeze, 0.1),
    "bodyslam" => MoveData::persistent_chance("Body Slam", Type::Normal, 85, 1.0, 15, PersistentKind::Paralysis, 0.3),
    "boneclub" => MoveData::transient_chance("Bone Club", Type::Ground, 65, 0.85, 20, TransientKind::Flinching, 0.1),
    "bonemerang" => MoveData::extra_hit("Bonemerang", Type::Ground, 50, 0.9, 10),
    "bubble" => MoveData::stat_chance("Bubble", Type::Water, 20, 1.0, 30, Stat::Spe, -1, 0.33),
    "bubblebeam" => MoveData::stat_chance("Bubble Beam", Type::Water, 65, 1.0, 20, Stat::Spe, -1, 0.33),
    "cometpunch" => MoveData::multi_hit("Comet Punch", Type::Normal, 18, 0.85, 15),
    "confuseray" => MoveData::status_transient("Confuse Ray", Type::Ghost, 1.0, 10, false, TransientKind::Confused),
    "confusion" => MoveData::transient_chance("Confusion", Type::Psychic, 50, 1.0, 25, TransientKind::Confused, 0.1),
    "counter" => MoveData {
        damage: DamageShape::Counter,
        secondary: SecondaryShape::Retaliation,
        ..MoveData::damaging("Counter", Type::Fighting, 0, 1.0, 20, 0)
    },
    "crabhammer" => MoveData::high_crit("Crabhammer", Type::Water, 90, 0.85, 10),
    "cut" => MoveData::damaging("Cut", Type::Normal, 50, 0.95, 30, 0),
    "defensecurl" => MoveData::status_stat("Defense Curl", Type::Normal, 0.0, 40, true, Stat::Def, 1),
    "disable" => MoveData::status_transient("Disable", Type::Normal, 0.55, 20, false, TransientKind::Disabled),
    "dizzypunch" => MoveData::damaging("Dizzy Punch", Type::Normal, 70, 1.0, 10, 0),
    "doubleedge" => MoveData::recoil("Double-Edge", Type::Normal, 100, 1.0, 15, 4),
    "doublekick" => MoveData::extra_hit("Double Kick", Type::Fighting, 30, 1.0, 30),
    "doubleslap" => MoveData::multi_hit("Double Slap", Type::Normal, 15, 0.85, 10),
    "doubleteam" => MoveData::status_stat("Double Team", Type::Normal, 0.0, 15, true, Stat::Eva, 1),
    "dragonrage" => MoveData::fixed("Dragon Rage", Type::Dragon, 40, 1.0, 10),
    "dreameater" => MoveData::drain("Dream Eater", Type::Psychic, 100, 1.0, 15),
    "drillpeck" => MoveData::damaging("Drill Peck", Type::Flying, 80, 1.0, 20, 0),
    "earthquake" => MoveData::damaging("Earthquake", Type::Ground, 100, 1.0, 10, 0),
    "eggbomb" => MoveData::damaging("Egg Bomb", Type::Normal, 100, 0.75, 10, 0),
    "ember" => MoveData::persistent_chance("Ember", Type::Fire, 40, 1.0, 25, PersistentKind::Burn, 0.1),
    "explosion" => MoveData::kamikaze("Explosion", Type::Normal, 170, 1.0, 5),
    "fireblast" => MoveData::persistent_chance("Fire Blast", Type::Fire, 120, 0.85, 5, PersistentKind::Burn, 0.3),
    "firepunch" => MoveData::persistent_chance("Fire Punch", Type::Fire, 75, 1.0, 15, PersistentKind::Burn, 0.1),
    "fissure" => MoveData::ohko("Fissure", Type::Ground),
    "flamethrower" => MoveData::persistent_chance("Flamethrower", Type::Fire, 95, 1.0, 15, PersistentKind::Burn, 0.1),
    "flash" => MoveData::status_stat("Flash", Type::Normal, 0.7, 20, false, Stat::Acc, -1),
    "focusenergy" => MoveData::status_transient("Focus Energy", Type::Normal, 0.0, 30, true, TransientKind::Pumped),
    "furyattack" => MoveData::multi_hit("Fury Attack", Type::Normal, 15, 0.85, 20),
    "furyswipes" => MoveData::multi_hit("Fury Swipes", Type::Normal, 18, 0.8, 15),
    "glare" => MoveData::status_persistent("Glare", Type::Normal, 0.75, 30, PersistentKind::Paralysis),
    "growl" => MoveData::status_stat("Growl", Type::Normal, 1.0, 40, false, Stat::Atk, -1),
    "growth" => MoveData::status_stat("Growth", Type::Normal, 0.0, 40, true, Stat::Spc, 1),
    "guillotine" => MoveData::ohko("Guillotine", Type::Normal),
    "gust" => MoveData::damaging("Gust", Type::Normal, 40, 1.0, 35, 0),
    "harden" => MoveData::status_stat("Harden", Type::Normal, 0.0, 30, true, Stat::Def, 1),
    "headbutt" => MoveData::transient_chance("Headbutt", Type::Normal, 70, 1.0, 15, TransientKind::Flinching, 0.3),
    "highjumpkick" => MoveData::crash("High Jump Kick", 85, 0.9, 20),
    "hornattack" => MoveData::damaging("Horn Attack", Type::Normal, 65, 1.0, 25, 0),
    "horndrill" => MoveData::ohko("Horn Drill", Type::Normal),
    "hydropump" => MoveData::damaging("Hydro Pump", Type::Water, 120, 0.8, 5, 0),
    "hyperbeam" => MoveData::recharge("Hyper Beam", Type::Normal, 150, 0.9, 5),
    "hyperfang" => MoveData::transient_chance("Hyper Fang", Type::Normal, 80, 0.9, 15, TransientKind::Flinching, 0.1),
    "hypnosis" => MoveData::status_persistent("Hypnosis", Type::Psychic, 0.6, 20, PersistentKind::Sleep),
    "icebeam" => MoveData::persistent_chance("Ice Beam", Type::Ice, 95, 1.0, 10, PersistentKind::Freeze, 0.1),
    "icepunch" => MoveData::persistent_chance("Ice Punch", Type::Ice, 75, 1.0, 15, PersistentKind::Freeze, 0.1),
    "jumpkick" => MoveData::crash("Jump Kick", 70, 0.95, 25),
    "karatechop" => MoveData::high_crit("Karate Chop", Type::Normal, 50, 1.0, 25),
    "kinesis" => MoveData::status_stat("Kinesis", Type::Psychic, 0.8, 15, false, Stat::Acc, -1),
    "leechlife" => MoveData::drain("Leech Life", Type::Bug, 20, 1.0, 15),
    "leechseed" => MoveData::status_transient("Leech Seed", Type::Grass, 0.9, 10, false, TransientKind::Seeded),
    "leer" => MoveData::status_stat("Leer", Type::Normal, 1.0, 30, false, Stat::Def, -1),
    "lick" => MoveData::persistent_chance("Lick", Type::Ghost, 20, 1.0, 30, PersistentKind::Paralysis, 0.3),
    "lovelykiss" => MoveData::status_persistent("Lovely Kiss", Type::Normal, 0.75, 10, PersistentKind::Sleep),
    "lowkick" => MoveData::transient_chance("Low Kick", Type::Fighting, 50, 0.9, 20, TransientKind::Flinching, 0.3),
    "meditate" => MoveData::status_stat("Meditate", Type::Psychic, 0.0, 40, true, Stat::Atk, 1),
    "megadrain" => MoveData::drain("Mega Drain", Type::Grass, 40, 1.0, 10),
    "megakick" => MoveData::damaging("Mega Kick", Type::Normal, 120, 0.75, 5, 0),
    "megapunch" => MoveData::damaging("Mega Punch", Type::Normal, 80, 0.85, 20, 0),
    "minimize" => MoveData::status_stat("Minimize", Type::Normal, 0.0, 20, true, Stat::Eva, 1),
    "nightshade" => MoveData::fixed_level("Night Shade", Type::Ghost, 1.0, 15),
    "payday" => MoveData::damaging("Pay Day", Type::Normal, 40, 1.0, 20, 0),
    "peck" => MoveData::damaging("Peck", Type::Flying, 35, 1.0, 35, 0),
    "pinmissile" => MoveData::multi_hit("Pin Missile", Type::Bug, 14, 0.85, 20),
    "poisongas" => MoveData::status_persistent("Poison Gas", Type::Poison, 0.55, 40, PersistentKind::Poison),
    "poisonpowder" => MoveData::status_persistent("Poison Powder", Type::Poison, 0.75, 35, PersistentKind::Poison),
    "poisonsting" => MoveData::persistent_chance("Poison Sting", Type::Poison, 15, 1.0, 35, PersistentKind::Poison, 0.2),
    "pound" => MoveData::damaging("Pound", Type::Normal, 40, 1.0, 35, 0),
    "psybeam" => MoveData::transient_chance("Psybeam", Type::Psychic, 65, 1.0, 20, TransientKind::Confused, 0.1),
    "psychic" => MoveData::stat_chance("Psychic", Type::Psychic, 90, 1.0, 10, Stat::Spc, 1, 0.33),
    "psywave" => MoveData {
        damage: DamageShape::UniformToLevel,
        ..MoveData::damaging("Psywave", Type::Psychic, 0, 0.8, 15, 0)
    },
    "quickattack" => MoveData::damaging("Quick Attack", Type::Normal, 40, 1.0, 30, 1),
    "razorleaf" => MoveData::high_crit("Razor Leaf", Type::Grass, 55, 0.95, 25),
    "recover" => MoveData::half_heal("Recover", 20),
    "roar" => MoveData::status("Roar", Type::Normal, 1.0, 20),
    "rockslide" => MoveData::damaging("Rock Slide", Type::Rock, 75, 0.9, 10, 0),
    "rockthrow" => MoveData::damaging("Rock Throw", Type::Rock, 50, 0.65, 15, 0),
    "rollingkick" => MoveData::transient_chance("Rolling Kick", Type::Fighting, 60, 0.85, 15, TransientKind::Flinching, 0.3),
    "sandattack" => MoveData::status_stat("Sand Attack", Type::Normal, 1.0, 15, false, Stat::Acc, 1),
    "scratch" => MoveData::damaging("Scratch", Type::Normal, 40, 1.0, 35, 0),
    "screech" => MoveData::status_stat("Screech", Type::Normal, 0.85, 40, false, Stat::Def, -2),
    "seismictoss" => MoveData::fixed_level("Seismic Toss", Type::Fighting, 1.0, 20),
    "selfdestruct" => MoveData::kamikaze("Self-Destruct", Type::Normal, 130, 1.0, 20),
    "sharpen" => MoveData::status_stat("Sharpen", Type::Normal, 0.0, 30, true, Stat::Atk, 1),
    "sing" => MoveData::status_persistent("Sing", Type::Normal, 0.55, 15, PersistentKind::Sleep),
    "slam" => MoveData::damaging("Slam", Type::Normal, 80, 0.75, 20, 0),
    "slash" => MoveData::high_crit("Slash", Type::Normal, 70, 1.0, 20),
    "sleeppowder" => MoveData::status_persistent("Sleep Powder", Type::Grass, 0.75, 15, PersistentKind::Sleep),
    "sludge" => MoveData::persistent_chance("Sludge", Type::Poison, 65, 1.0, 20, PersistentKind::Poison, 0.4),
    "smog" => MoveData::persistent_chance("Smog", Type::Poison, 20, 0.7, 20, PersistentKind::Poison, 0.4),
    "smokescreen" => MoveData::status_stat("Smokescreen", Type::Normal, 1.0, 20, false, Stat::Acc, -1),
    "softboiled" => MoveData::half_heal("Soft-Boiled", 10),
    "sonicboom" => MoveData::fixed("Sonic Boom", Type::Normal, 20, 0.9, 20),
    "spikecannon" => MoveData::multi_hit("Spike Cannon", Type::Normal, 20, 1.0, 15),
    "splash" => MoveData::status("Splash", Type::Normal, 0.0, 40),
    "spore" => MoveData::status_persistent("Spore", Type::Grass, 1.0, 15, PersistentKind::Sleep),
    "stomp" => MoveData::transient_chance("Stomp", Type::Normal, 65, 1.0, 20, TransientKind::Flinching, 0.3),
    "strength" => MoveData::damaging("Strength", Type::Normal, 80, 1.0, 15, 0),
    "stringshot" => MoveData::status_stat("String Shot", Type::Bug, 0.95, 40, false, Stat::Spe, -1),
    "struggle" => MoveData::recoil("Struggle", Type::Normal, 50, 1.0, 10, 2),
    "stunspore" => MoveData::status_persistent("Stun Spore", Type::Grass, 0.75, 30, PersistentKind::Paralysis),
    "submission" => MoveData::recoil("Submission", Type::Fighting, 80, 0.8, 25, 4),
    "supersonic" => MoveData::status_transient("Supersonic", Type::Normal, 0.55, 20, false, TransientKind::Confused),
    "surf" => MoveData::damaging("Surf", Type::Water, 95, 1.0, 15, 0),
    "swift" => MoveData::damaging("Swift", Type::Normal, 60, 0.0, 20, 0),
    "swordsdance" => MoveData::status_stat("Swords Dance", Type::Normal, 0.0, 30, true, Stat::Atk, 2),
    "tackle" => MoveData::damaging("Tackle", Type::Normal, 35, 0.95, 35, 0),
    "tailwhip" => MoveData::status_stat("Tail Whip", Type::Normal, 1.0, 30, false, Stat::Def, -1),
    "takedown" => MoveData::recoil("Take Down", Type::Normal, 90, 0.85, 20, 4),
    "teleport" => MoveData::status("Teleport", Type::Psychic, 0.0, 20),
    "thunder" => MoveData::persistent_chance("Thunder", Type::Electric, 120, 0.7, 10, PersistentKind::Paralysis, 0.1),
    "thunderbolt" => MoveData::persistent_chance("Thunderbolt", Type::Electric, 95, 1.0, 15, PersistentKind::Paralysis, 0.1),
    "thunderpunch" => MoveData::persistent_chance("Thunder Punch", Type::Electric, 75, 1.0, 15, PersistentKind::Paralysis, 0.1),
    "thundershock" => MoveData::persistent_chance("Thunder Shock", Type::Electric, 40, 1.0, 30, PersistentKind::Paralysis, 0.1),
    "thunderwave" => MoveData::status_persistent("Thunder Wave", Type::Electric, 1.0, 20, PersistentKind::Paralysis),
    "triattack" => MoveData::damaging("Tri Attack", Type::Normal, 80, 1.0, 10, 0),
    "twineedle" => MoveData::extra_hit("Twineedle", Type::Bug, 25, 1.0, 20),
    "vicegrip" => MoveData::damaging("Vice Grip", Type::Normal, 55, 1.0, 30, 0),
    "vinewhip" => MoveData::damaging("Vine Whip", Type::Grass, 35, 1.0, 10, 0),
    "watergun" => MoveData::damaging("Water Gun", Type::Water, 40, 1.0, 25, 0),
    "waterfall" => MoveData::damaging("Waterfall", Type::Water, 80, 1.0, 15, 0),
    "whirlwind" => MoveData::status("Whirlwind", Type::Normal, 0.85, 20),
    "wingattack" => MoveData::damaging("Wing Attack", Type::Flying, 35, 1.0, 35, 0),
    "withdraw" => MoveData::status_stat("Withdraw", Type::Water, 0.0, 40, true, Stat::Def, 1),
};

pub fn normalize_move_name(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Look a move up by display name or normalized id.
pub fn get_move(name: &str) -> Option<&'static MoveData> {
    MOVES.get(normalize_move_name(name).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup_normalizes_names() {
        assert!(get_move("Thunderbolt").is_some());
        assert!(get_move("double-edge").is_some());
        assert!(get_move("SOFT-BOILED").is_some());
        assert!(get_move("notamove").is_none());
    }

    #[test]
    fn thunderbolt_carries_a_paralysis_chance() {
        let thunderbolt = get_move("thunderbolt").expect("Thunderbolt must be present");
        assert_eq!(thunderbolt.damage, DamageShape::standard(95));
        assert_eq!(
            thunderbolt.secondary,
            SecondaryShape::PersistentStatus {
                on_user: false,
                kind: PersistentKind::Paralysis,
                chance: Some(0.1),
            }
        );
    }

    #[test]
    fn status_moves_do_not_damage() {
        let agility = get_move("agility").expect("move exists");
        assert!(!agility.damages());
        let tackle = get_move("tackle").expect("move exists");
        assert!(tackle.damages());
    }

    #[test]
    fn damage_category_follows_move_type() {
        assert_eq!(
            get_move("earthquake").unwrap().damage_category(),
            Category::Physical
        );
        assert_eq!(
            get_move("surf").unwrap().damage_category(),
            Category::Special
        );
    }

    #[test]
    fn slash_boosts_its_critical_threshold() {
        assert_eq!(get_move("slash").unwrap().damage, DamageShape::high_crit(70));
    }

    #[test]
    fn explosion_halves_defense_and_sacrifices_the_user() {
        let explosion = get_move("explosion").unwrap();
        assert_eq!(explosion.damage, DamageShape::half_defense(170));
        assert_eq!(explosion.secondary, SecondaryShape::Kamikaze);
    }

    #[test]
    fn never_miss_moves_use_zero_accuracy() {
        assert_eq!(get_move("swift").unwrap().accuracy, 0.0);
    }

    #[test]
    fn quick_attack_carries_its_priority_tier() {
        assert_eq!(get_move("quickattack").unwrap().priority, 1);
    }
}
