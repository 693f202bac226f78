//! Core engine types: players, RNG, and the error taxonomy.
//!
//! These are the building blocks the state and rules modules share.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{EngineError, Rejection, StateFault};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
