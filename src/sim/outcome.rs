//! Probability-weighted outcome sets, the unit of communication between the
//! resolution engine and its driver.
//!
//! A non-empty set always sums to unit probability; construction enforces
//! this and never renormalizes. Sampling is driven by an injected random
//! source so resolutions stay replayable.

use rand::Rng;

use crate::error::EngineError;
use crate::sim::conditions::{PersistentKind, TransientKind};
use crate::sim::stats::Stat;

/// Absolute tolerance on the probability sum of a non-empty outcome set.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// One possible numeric result of an action phase. Negative HP magnitudes
/// denote healing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub magnitude: i32,
    pub chance: f64,
}

impl Outcome {
    pub fn new(magnitude: i32, chance: f64) -> Self {
        Self { magnitude, chance }
    }
}

/// Which aspect of the target the magnitudes apply to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EffectKind {
    /// Hit-point change; positive damages, negative heals.
    HitPoints,
    /// Stage change of one battle stat; magnitude is the stage delta.
    Stat(Stat),
    /// Persistent condition; magnitude is the initial duration (1 for
    /// conditions without one).
    Persistent(PersistentKind),
    /// Transient condition; magnitude seeds the flag's counter where it has
    /// one.
    Transient(TransientKind),
}

/// A weighted set of possible outcomes of one action phase.
#[derive(Clone, Debug, PartialEq)]
pub struct OutcomeDistribution {
    pub on_user: bool,
    pub effect: EffectKind,
    outcomes: Vec<Outcome>,
}

impl OutcomeDistribution {
    /// Builds a distribution, validating the unit-sum invariant for
    /// non-empty outcome sets.
    pub fn new(
        on_user: bool,
        effect: EffectKind,
        outcomes: Vec<Outcome>,
    ) -> Result<Self, EngineError> {
        if !outcomes.is_empty() {
            let sum: f64 = outcomes.iter().map(|o| o.chance).sum();
            if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
                return Err(EngineError::InvalidDistribution { sum });
            }
        }
        Ok(Self {
            on_user,
            effect,
            outcomes,
        })
    }

    /// The canonical empty distribution: no effect.
    pub fn none() -> Self {
        Self {
            on_user: false,
            effect: EffectKind::HitPoints,
            outcomes: Vec::new(),
        }
    }

    /// A single outcome that always happens.
    pub fn certain(on_user: bool, effect: EffectKind, magnitude: i32) -> Self {
        Self {
            on_user,
            effect,
            outcomes: vec![Outcome::new(magnitude, 1.0)],
        }
    }

    /// A binary-chance outcome: `magnitude` with probability `chance`, zero
    /// otherwise. `chance` must lie in (0.0, 1.0].
    pub fn chance(
        on_user: bool,
        effect: EffectKind,
        magnitude: i32,
        chance: f64,
    ) -> Result<Self, EngineError> {
        if !(chance > 0.0 && chance <= 1.0) {
            return Err(EngineError::ChanceOutOfRange(chance));
        }
        Ok(Self {
            on_user,
            effect,
            outcomes: vec![
                Outcome::new(magnitude, chance),
                Outcome::new(0, 1.0 - chance),
            ],
        })
    }

    pub fn is_none(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Draws one magnitude proportional to its weight. The empty
    /// distribution samples 0.
    pub fn sample(&self, rng: &mut impl Rng) -> i32 {
        if self.outcomes.is_empty() {
            return 0;
        }
        let roll: f64 = rng.gen();
        let mut cumulative = 0.0;
        for outcome in &self.outcomes {
            cumulative += outcome.chance;
            if roll < cumulative {
                return outcome.magnitude;
            }
        }
        // Floating error can leave the last boundary marginally below 1.0.
        self.outcomes[self.outcomes.len() - 1].magnitude
    }
}
