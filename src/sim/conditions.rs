//! Per-combatant condition state: one persistent affliction slot plus an
//! independent set of transient flags and counters.
//!
//! The two tracks never interact here; being asleep and confused at the same
//! time is a valid state. Turn logic that makes them interact lives in the
//! driver.

use tracing::debug;

/// The at-most-one-at-a-time afflictions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PersistentKind {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    Sleep,
}

impl PersistentKind {
    /// Upper bound of the random duration, 0 for conditions without one.
    pub fn duration(self) -> u8 {
        match self {
            PersistentKind::Sleep => SLEEP_MAX_TURNS,
            _ => 0,
        }
    }
}

pub const SLEEP_MAX_TURNS: u8 = 7;

/// An active persistent condition. Sleep carries its remaining countdown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PersistentCondition {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    Sleep { turns_left: u8 },
}

impl PersistentCondition {
    pub fn of_kind(kind: PersistentKind, duration: u8) -> Self {
        match kind {
            PersistentKind::Burn => PersistentCondition::Burn,
            PersistentKind::Freeze => PersistentCondition::Freeze,
            PersistentKind::Paralysis => PersistentCondition::Paralysis,
            PersistentKind::Poison => PersistentCondition::Poison,
            PersistentKind::Sleep => PersistentCondition::Sleep {
                turns_left: duration,
            },
        }
    }

    pub fn kind(self) -> PersistentKind {
        match self {
            PersistentCondition::Burn => PersistentKind::Burn,
            PersistentCondition::Freeze => PersistentKind::Freeze,
            PersistentCondition::Paralysis => PersistentKind::Paralysis,
            PersistentCondition::Poison => PersistentKind::Poison,
            PersistentCondition::Sleep { .. } => PersistentKind::Sleep,
        }
    }

    /// Probability that the afflicted combatant skips its action this turn,
    /// sampled externally before a move resolves.
    pub fn skip_chance(self) -> f64 {
        match self {
            PersistentCondition::Burn | PersistentCondition::Poison => 0.0,
            PersistentCondition::Paralysis => 0.25,
            PersistentCondition::Freeze | PersistentCondition::Sleep { .. } => 1.0,
        }
    }

    /// Whether the condition deals residual end-of-turn damage. The numeric
    /// fraction is applied by the consumer, not here.
    pub fn residual_damage(self) -> bool {
        matches!(
            self,
            PersistentCondition::Burn
                | PersistentCondition::Poison
                | PersistentCondition::Sleep { .. }
        )
    }
}

/// The independently tracked transient flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TransientKind {
    BadlyPoisoned,
    Biding,
    Bound,
    Charging,
    Confused,
    Disabled,
    Flinching,
    FlyingHigh,
    Minimized,
    Misted,
    Pumped,
    Rampaging,
    Recharging,
    Seeded,
    Substituted,
    Transformed,
    Underground,
}

/// Independent boolean flags and their counters. Any combination may be
/// active at once; each flag has its own lifecycle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransientConditions {
    pub badly_poisoned: bool,
    pub toxic_counter: u8,
    pub biding: bool,
    pub bide_rounds: u8,
    pub bound: bool,
    pub bind_rounds: u8,
    pub charging: bool,
    pub confused: bool,
    pub confusion_turns: u8,
    pub disabled: bool,
    pub disabled_slot: u8,
    pub flinching: bool,
    pub flying_high: bool,
    pub minimized: bool,
    pub misted: bool,
    pub pumped: bool,
    pub rampaging: bool,
    pub rampage_rounds: u8,
    pub recharging: bool,
    pub seeded: bool,
    pub substituted: bool,
    pub substitute_hp: u8,
    pub transformed: bool,
    pub underground: bool,
}

impl TransientConditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, kind: TransientKind) -> bool {
        match kind {
            TransientKind::BadlyPoisoned => self.badly_poisoned,
            TransientKind::Biding => self.biding,
            TransientKind::Bound => self.bound,
            TransientKind::Charging => self.charging,
            TransientKind::Confused => self.confused,
            TransientKind::Disabled => self.disabled,
            TransientKind::Flinching => self.flinching,
            TransientKind::FlyingHigh => self.flying_high,
            TransientKind::Minimized => self.minimized,
            TransientKind::Misted => self.misted,
            TransientKind::Pumped => self.pumped,
            TransientKind::Rampaging => self.rampaging,
            TransientKind::Recharging => self.recharging,
            TransientKind::Seeded => self.seeded,
            TransientKind::Substituted => self.substituted,
            TransientKind::Transformed => self.transformed,
            TransientKind::Underground => self.underground,
        }
    }

    /// Raises a flag. `counter` seeds the flag's own counter where it has one
    /// (remaining rounds, substitute HP, disabled slot); flags without a
    /// counter ignore it.
    pub fn apply(&mut self, kind: TransientKind, counter: u8) {
        match kind {
            TransientKind::BadlyPoisoned => {
                self.badly_poisoned = true;
                self.toxic_counter = counter;
            }
            TransientKind::Biding => {
                self.biding = true;
                self.bide_rounds = counter;
            }
            TransientKind::Bound => {
                self.bound = true;
                self.bind_rounds = counter;
            }
            TransientKind::Charging => self.charging = true,
            TransientKind::Confused => {
                self.confused = true;
                self.confusion_turns = counter;
            }
            TransientKind::Disabled => {
                self.disabled = true;
                self.disabled_slot = counter;
            }
            TransientKind::Flinching => self.flinching = true,
            TransientKind::FlyingHigh => self.flying_high = true,
            TransientKind::Minimized => self.minimized = true,
            TransientKind::Misted => self.misted = true,
            TransientKind::Pumped => self.pumped = true,
            TransientKind::Rampaging => {
                self.rampaging = true;
                self.rampage_rounds = counter;
            }
            TransientKind::Recharging => self.recharging = true,
            TransientKind::Seeded => self.seeded = true,
            TransientKind::Substituted => {
                self.substituted = true;
                self.substitute_hp = counter;
            }
            TransientKind::Transformed => self.transformed = true,
            TransientKind::Underground => self.underground = true,
        }
    }

    pub fn clear(&mut self, kind: TransientKind) {
        match kind {
            TransientKind::BadlyPoisoned => {
                self.badly_poisoned = false;
                self.toxic_counter = 0;
            }
            TransientKind::Biding => {
                self.biding = false;
                self.bide_rounds = 0;
            }
            TransientKind::Bound => {
                self.bound = false;
                self.bind_rounds = 0;
            }
            TransientKind::Charging => self.charging = false,
            TransientKind::Confused => {
                self.confused = false;
                self.confusion_turns = 0;
            }
            TransientKind::Disabled => {
                self.disabled = false;
                self.disabled_slot = 0;
            }
            TransientKind::Flinching => self.flinching = false,
            TransientKind::FlyingHigh => self.flying_high = false,
            TransientKind::Minimized => self.minimized = false,
            TransientKind::Misted => self.misted = false,
            TransientKind::Pumped => self.pumped = false,
            TransientKind::Rampaging => {
                self.rampaging = false;
                self.rampage_rounds = 0;
            }
            TransientKind::Recharging => self.recharging = false,
            TransientKind::Seeded => self.seeded = false,
            TransientKind::Substituted => {
                self.substituted = false;
                self.substitute_hp = 0;
            }
            TransientKind::Transformed => self.transformed = false,
            TransientKind::Underground => self.underground = false,
        }
    }

    /// Flinch lasts exactly until the end of the turn it was inflicted on.
    pub fn end_of_turn(&mut self) {
        self.flinching = false;
    }
}

/// Both condition tracks of one combatant.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConditionState {
    pub persistent: Option<PersistentCondition>,
    pub transient: TransientConditions,
}

impl ConditionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the persistent condition. Fails (no-op, `false`) if one is
    /// already present; a combatant never carries two at once.
    pub fn set_persistent(&mut self, condition: PersistentCondition) -> bool {
        if self.persistent.is_some() {
            debug!(?condition, "persistent condition slot occupied");
            return false;
        }
        self.persistent = Some(condition);
        true
    }

    pub fn cure_persistent(&mut self) {
        self.persistent = None;
    }

    /// Advances the persistent condition by one turn: Sleep counts down and
    /// clears at zero, everything else persists until cured.
    pub fn tick_persistent(&mut self) {
        if let Some(PersistentCondition::Sleep { turns_left }) = self.persistent {
            let remaining = turns_left.saturating_sub(1);
            self.persistent = if remaining == 0 {
                None
            } else {
                Some(PersistentCondition::Sleep {
                    turns_left: remaining,
                })
            };
        }
    }

    /// Action-skip probability of the current persistent condition.
    pub fn skip_chance(&self) -> f64 {
        self.persistent.map_or(0.0, PersistentCondition::skip_chance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_persistent_condition_is_rejected() {
        let mut state = ConditionState::new();
        assert!(state.set_persistent(PersistentCondition::Burn));
        assert!(!state.set_persistent(PersistentCondition::Paralysis));
        assert_eq!(state.persistent, Some(PersistentCondition::Burn));
    }

    #[test]
    fn cure_reopens_the_slot() {
        let mut state = ConditionState::new();
        assert!(state.set_persistent(PersistentCondition::Poison));
        state.cure_persistent();
        assert!(state.set_persistent(PersistentCondition::Freeze));
    }

    #[test]
    fn sleep_counts_down_and_clears() {
        let mut state = ConditionState::new();
        assert!(state.set_persistent(PersistentCondition::Sleep { turns_left: 3 }));
        state.tick_persistent();
        state.tick_persistent();
        assert_eq!(
            state.persistent,
            Some(PersistentCondition::Sleep { turns_left: 1 })
        );
        state.tick_persistent();
        assert_eq!(state.persistent, None);
    }

    #[test]
    fn tick_leaves_non_counting_conditions_alone() {
        let mut state = ConditionState::new();
        assert!(state.set_persistent(PersistentCondition::Burn));
        state.tick_persistent();
        assert_eq!(state.persistent, Some(PersistentCondition::Burn));
    }

    #[test]
    fn skip_chances_match_the_condition_table() {
        assert_eq!(PersistentCondition::Paralysis.skip_chance(), 0.25);
        assert_eq!(PersistentCondition::Freeze.skip_chance(), 1.0);
        assert_eq!(PersistentCondition::Burn.skip_chance(), 0.0);
        assert_eq!(
            PersistentCondition::Sleep { turns_left: 2 }.skip_chance(),
            1.0
        );
    }

    #[test]
    fn transient_flags_are_independent_of_the_persistent_track() {
        let mut state = ConditionState::new();
        assert!(state.set_persistent(PersistentCondition::Sleep { turns_left: 5 }));
        state.transient.apply(TransientKind::Confused, 3);
        state.transient.apply(TransientKind::Seeded, 0);
        assert!(state.transient.is_active(TransientKind::Confused));
        assert!(state.transient.is_active(TransientKind::Seeded));
        assert_eq!(state.persistent.map(PersistentCondition::kind), Some(PersistentKind::Sleep));
    }

    #[test]
    fn flinch_clears_at_end_of_turn_other_flags_survive() {
        let mut transient = TransientConditions::new();
        transient.apply(TransientKind::Flinching, 0);
        transient.apply(TransientKind::Bound, 4);
        transient.end_of_turn();
        assert!(!transient.is_active(TransientKind::Flinching));
        assert!(transient.is_active(TransientKind::Bound));
        assert_eq!(transient.bind_rounds, 4);
    }

    #[test]
    fn clearing_a_counter_flag_resets_its_counter() {
        let mut transient = TransientConditions::new();
        transient.apply(TransientKind::Substituted, 25);
        transient.clear(TransientKind::Substituted);
        assert!(!transient.substituted);
        assert_eq!(transient.substitute_hp, 0);
    }
}
