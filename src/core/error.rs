//! Error types for match setup and board consistency faults.
//!
//! Stack exhaustion is not an error: running out of tiles is how a match
//! ends in a draw. Everything here is either a bad configuration or a broken
//! internal invariant that aborts the match loop.

use thiserror::Error;

use crate::tiles::{DominoId, SideRef, TileFace};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Configuration error: {message}")]
    InvalidConfig { message: String },

    #[error("Tile {tile} matches neither open end ({left}, {right})")]
    NoMatchingEnd { tile: TileFace, left: u8, right: u8 },

    #[error("Board has not been seeded")]
    BoardNotSeeded,

    #[error("Board has already been seeded")]
    BoardAlreadySeeded,

    #[error("{0} is already on the board")]
    TileAlreadyPlaced(DominoId),

    #[error("{0} is already linked to a neighbour")]
    SideAlreadyLinked(SideRef),

    #[error("No tile left in the stack to seed the board")]
    EmptyStack,
}

impl MatchError {
    pub fn config(message: impl Into<String>) -> Self {
        MatchError::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
