//! Battle-state types and the move resolution engine.

pub mod battler;
pub mod conditions;
pub mod moves;
pub mod outcome;
pub mod stats;
