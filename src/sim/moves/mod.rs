//! Move resolution, split by phase: [`damaging`] covers accuracy, critical
//! hits and the damage formula; [`secondary`] covers every other effect.

pub mod damaging;
pub mod secondary;

pub use damaging::{critical_chance, hit_chance, resolve_primary};
pub use secondary::{resolve_secondary, SecondaryContext};
