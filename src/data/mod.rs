//! Static reference data: the type chart, the species catalog and the move
//! catalog. Everything in here is immutable process-wide state.

pub mod moves;
pub mod species;
pub mod types;
