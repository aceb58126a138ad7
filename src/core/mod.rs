//! Core engine types: players, RNG, configuration errors.
//!
//! These are the building blocks the rest of the engine is assembled
//! from. Nothing here knows about timelines or sessions.

pub mod error;
pub mod player;
pub mod rng;

pub use error::ConfigError;
pub use player::{PlayerId, PlayerState, MAX_LIVES};
pub use rng::GameRng;
