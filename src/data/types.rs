//! Elemental types and the first-generation effectiveness chart.
//!
//! The chart is a fixed 16x16 matrix over the closed type set, including the
//! `None` placeholder used as the second type of mono-typed species. Every
//! lookup is total; `None` is Effective in both directions so it never
//! perturbs a dual-type product.

/// Damage category of a type. In this generation the category is a property
/// of the type itself, not of the individual move.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    None,
    Physical,
    Special,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    None,
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
}

impl Type {
    pub const ALL: [Type; 16] = [
        Type::None,
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
    ];

    pub fn category(self) -> Category {
        match self {
            Type::None => Category::None,
            Type::Normal
            | Type::Fighting
            | Type::Poison
            | Type::Ground
            | Type::Flying
            | Type::Bug
            | Type::Rock
            | Type::Ghost => Category::Physical,
            Type::Fire
            | Type::Water
            | Type::Electric
            | Type::Grass
            | Type::Ice
            | Type::Psychic
            | Type::Dragon => Category::Special,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::None => "none",
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Effectiveness {
    Ineffective,
    NotVeryEffective,
    Effective,
    SuperEffective,
}

impl Effectiveness {
    pub fn multiplier(self) -> f64 {
        match self {
            Effectiveness::Ineffective => 0.0,
            Effectiveness::NotVeryEffective => 0.5,
            Effectiveness::Effective => 1.0,
            Effectiveness::SuperEffective => 2.0,
        }
    }
}

const X0: Effectiveness = Effectiveness::Ineffective;
const HF: Effectiveness = Effectiveness::NotVeryEffective;
const EF: Effectiveness = Effectiveness::Effective;
const X2: Effectiveness = Effectiveness::SuperEffective;

/// `CHART[attacker][defender]`, rows and columns in `Type::ALL` order.
/// First-generation matchups, quirks included (Ghost is Ineffective against
/// Psychic, Bug and Poison are SuperEffective against each other).
#[rustfmt::skip]
const CHART: [[Effectiveness; 16]; 16] = [
    //         Non Nrm Fir Wat Ele Grs Ice Fig Poi Grd Fly Psy Bug Rck Gho Drg
    /* Non */ [EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF],
    /* Nrm */ [EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, HF, X0, EF],
    /* Fir */ [EF, EF, HF, HF, EF, X2, X2, EF, EF, EF, EF, EF, X2, HF, EF, HF],
    /* Wat */ [EF, EF, X2, HF, EF, HF, EF, EF, EF, X2, EF, EF, EF, X2, EF, HF],
    /* Ele */ [EF, EF, EF, X2, HF, HF, EF, EF, EF, X0, X2, EF, EF, EF, EF, HF],
    /* Grs */ [EF, EF, HF, X2, EF, HF, EF, EF, HF, X2, HF, EF, HF, X2, EF, HF],
    /* Ice */ [EF, EF, EF, HF, EF, X2, HF, EF, EF, X2, X2, EF, EF, EF, EF, X2],
    /* Fig */ [EF, X2, EF, EF, EF, EF, X2, EF, HF, EF, HF, HF, HF, X2, X0, EF],
    /* Poi */ [EF, EF, EF, EF, EF, X2, EF, EF, HF, HF, EF, EF, X2, HF, HF, EF],
    /* Grd */ [EF, EF, X2, EF, X2, HF, EF, EF, X2, EF, X0, EF, HF, X2, EF, EF],
    /* Fly */ [EF, EF, EF, EF, HF, X2, EF, X2, EF, EF, EF, EF, X2, HF, EF, EF],
    /* Psy */ [EF, EF, EF, EF, EF, EF, EF, X2, X2, EF, EF, HF, EF, EF, EF, EF],
    /* Bug */ [EF, EF, HF, EF, EF, X2, EF, HF, X2, EF, HF, X2, EF, EF, EF, EF],
    /* Rck */ [EF, EF, X2, EF, EF, EF, X2, HF, EF, HF, X2, EF, X2, EF, EF, EF],
    /* Gho */ [EF, X0, EF, EF, EF, EF, EF, EF, EF, EF, EF, X0, EF, EF, X2, EF],
    /* Drg */ [EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, EF, X2],
];

/// Effectiveness of an attacking type against a single defending type.
/// Total and pure over the closed type set.
pub fn effectiveness_against(attacking: Type, defending: Type) -> Effectiveness {
    CHART[attacking.index()][defending.index()]
}

/// Combined numeric multiplier against a dual-typed defender. A mono-typed
/// defender passes `Type::None` as its second type.
pub fn effectiveness_dual(attacking: Type, defending0: Type, defending1: Type) -> f64 {
    effectiveness_against(attacking, defending0).multiplier()
        * effectiveness_against(attacking, defending1).multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_neutral_for_every_attacker() {
        for attacking in Type::ALL {
            assert_eq!(
                effectiveness_against(attacking, Type::None),
                Effectiveness::Effective,
                "{} vs none",
                attacking.name()
            );
        }
    }

    #[test]
    fn none_attacker_is_neutral_against_everything() {
        for defending in Type::ALL {
            assert_eq!(
                effectiveness_against(Type::None, defending),
                Effectiveness::Effective
            );
        }
    }

    #[test]
    fn period_accurate_quirks() {
        assert_eq!(
            effectiveness_against(Type::Ghost, Type::Normal),
            Effectiveness::Ineffective
        );
        assert_eq!(
            effectiveness_against(Type::Ghost, Type::Ghost),
            Effectiveness::SuperEffective
        );
        assert_eq!(
            effectiveness_against(Type::Ghost, Type::Psychic),
            Effectiveness::Ineffective
        );
        assert_eq!(
            effectiveness_against(Type::Bug, Type::Poison),
            Effectiveness::SuperEffective
        );
        assert_eq!(
            effectiveness_against(Type::Poison, Type::Bug),
            Effectiveness::SuperEffective
        );
        assert_eq!(
            effectiveness_against(Type::Ice, Type::Fire),
            Effectiveness::Effective
        );
    }

    #[test]
    fn dual_multiplier_is_product_of_single_lookups() {
        // Electric into Water/Flying: 2.0 * 2.0
        assert_eq!(
            effectiveness_dual(Type::Electric, Type::Water, Type::Flying),
            4.0
        );
        // Electric into Ground/anything: immune
        assert_eq!(
            effectiveness_dual(Type::Electric, Type::Ground, Type::Water),
            0.0
        );
        // Mono-typed defender: the None column contributes exactly 1.0
        assert_eq!(effectiveness_dual(Type::Fire, Type::Grass, Type::None), 2.0);
    }

    #[test]
    fn category_follows_type() {
        assert_eq!(Type::Normal.category(), Category::Physical);
        assert_eq!(Type::Fire.category(), Category::Special);
        assert_eq!(Type::Ghost.category(), Category::Physical);
        assert_eq!(Type::None.category(), Category::None);
    }
}
