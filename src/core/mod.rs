//! Core match types: players, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{MatchConfig, MAX_PIP};
pub use error::{MatchError, Result};
