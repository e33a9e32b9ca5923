//! First-generation battle resolution engine.
//!
//! The crate resolves one move use into probability-weighted outcome
//! distributions instead of sampled results: the primary (damage) phase
//! through [`sim::moves::resolve_primary`] and the secondary (effect) phase
//! through [`sim::moves::resolve_secondary`]. Sampling, turn order and the
//! surrounding battle loop belong to the consumer.

pub mod data;
pub mod error;
pub mod sim;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::data::moves::{get_move, DamageShape, MoveData, SecondaryShape};
    pub use crate::data::species::{get_species, species_by_number, SpeciesData};
    pub use crate::data::types::{effectiveness_against, effectiveness_dual, Effectiveness, Type};
    pub use crate::error::EngineError;
    pub use crate::sim::battler::{Battler, MoveSlot, Pokemon};
    pub use crate::sim::conditions::{
        ConditionState, PersistentCondition, PersistentKind, TransientKind,
    };
    pub use crate::sim::moves::{
        critical_chance, hit_chance, resolve_primary, resolve_secondary, SecondaryContext,
    };
    pub use crate::sim::outcome::{EffectKind, Outcome, OutcomeDistribution};
    pub use crate::sim::stats::{Stat, StageTrack};
}
