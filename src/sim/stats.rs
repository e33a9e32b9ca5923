//! Battle stat stages and first-generation stat derivation.

/// The six stage-modified battle stats.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spc,
    Spe,
    Acc,
    Eva,
}

impl Stat {
    fn index(self) -> usize {
        self as usize
    }
}

pub const STAGE_MIN: i8 = -6;
pub const STAGE_MAX: i8 = 6;

/// Stage-to-percent multiplier table, indexed by `stage + 6`.
pub const STAGE_MULTIPLIERS: [u16; 13] = [
    25, 28, 33, 40, 50, 66, 100, 150, 200, 250, 300, 350, 400,
];

/// Percent multiplier for a stage in [-6, 6].
pub fn stage_multiplier(stage: i8) -> u16 {
    STAGE_MULTIPLIERS[(stage - STAGE_MIN) as usize]
}

/// Stage-modified stat value: `base * multiplier / 100`, truncating.
pub fn effective_stat(base: u16, stage: i8) -> u16 {
    (u32::from(base) * u32::from(stage_multiplier(stage)) / 100) as u16
}

/// Six bounded stage counters, all zero on creation.
///
/// A change that would leave [-6, 6] is rejected atomically: the call reports
/// `false` and no counter moves. The boolean is part of the contract — the
/// caller surfaces it as the "but it failed!" feedback path.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StageTrack {
    stages: [i8; 6],
}

impl StageTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self, stat: Stat) -> i8 {
        self.stages[stat.index()]
    }

    /// Applies `delta` to one counter; `false` and untouched state if the
    /// result would leave the legal range. No clamping.
    pub fn try_modify(&mut self, stat: Stat, delta: i8) -> bool {
        let next = self.stages[stat.index()] + delta;
        if (STAGE_MIN..=STAGE_MAX).contains(&next) {
            self.stages[stat.index()] = next;
            true
        } else {
            false
        }
    }

    /// Clears every counter back to zero (switch-out semantics).
    pub fn reset(&mut self) {
        self.stages = [0; 6];
    }
}

/// First-generation max-HP formula.
pub fn calc_hp(base: u8, iv: u8, stat_exp: u16, level: u8) -> u16 {
    let core = (u32::from(base) + u32::from(iv)) * 2 + isqrt(u32::from(stat_exp)) / 4;
    (core * u32::from(level) / 100 + u32::from(level) + 10) as u16
}

/// First-generation formula for the four non-HP stats.
pub fn calc_stat(base: u8, iv: u8, stat_exp: u16, level: u8) -> u16 {
    let core = (u32::from(base) + u32::from(iv)) * 2 + isqrt(u32::from(stat_exp)) / 4;
    (core * u32::from(level) / 100 + 5) as u16
}

fn isqrt(value: u32) -> u32 {
    (f64::from(value)).sqrt() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_table_is_centered_at_100() {
        assert_eq!(stage_multiplier(0), 100);
        assert_eq!(stage_multiplier(-6), 25);
        assert_eq!(stage_multiplier(6), 400);
    }

    #[test]
    fn effective_stat_truncates_toward_zero() {
        // 55 * 66 / 100 = 36.3 -> 36
        assert_eq!(effective_stat(55, -1), 36);
        // 55 * 150 / 100 = 82.5 -> 82
        assert_eq!(effective_stat(55, 1), 82);
    }

    #[test]
    fn modify_within_range_succeeds() {
        let mut track = StageTrack::new();
        assert!(track.try_modify(Stat::Atk, 2));
        assert!(track.try_modify(Stat::Atk, -3));
        assert_eq!(track.stage(Stat::Atk), -1);
        assert_eq!(track.stage(Stat::Def), 0);
    }

    #[test]
    fn modify_past_boundary_fails_and_leaves_state() {
        let mut track = StageTrack::new();
        assert!(track.try_modify(Stat::Eva, 6));
        assert!(!track.try_modify(Stat::Eva, 1));
        assert_eq!(track.stage(Stat::Eva), 6);
        assert!(!track.try_modify(Stat::Eva, 2));
        assert_eq!(track.stage(Stat::Eva), 6);
        assert!(track.try_modify(Stat::Eva, -12));
        assert_eq!(track.stage(Stat::Eva), -6);
        assert!(!track.try_modify(Stat::Eva, -1));
    }

    #[test]
    fn reset_clears_all_counters() {
        let mut track = StageTrack::new();
        track.try_modify(Stat::Spc, 3);
        track.try_modify(Stat::Spe, -2);
        track.reset();
        assert_eq!(track, StageTrack::new());
    }

    #[test]
    fn level_100_mewtwo_special_with_max_investment() {
        // (154 + 15) * 2 + sqrt(65535)/4 = 338 + 63 = 401; 401 * 100 / 100 + 5
        assert_eq!(calc_stat(154, 15, 65535, 100), 406);
    }

    #[test]
    fn level_50_untrained_hp() {
        // (45 + 0) * 2 = 90; 90 * 50 / 100 + 50 + 10
        assert_eq!(calc_hp(45, 0, 0, 50), 105);
    }
}
