//! # rust-dominoes
//!
//! An automated two-player dominoes match, played by a fixed rule: on each
//! turn the current player lays the first tile in hand that fits either end
//! of the board, or draws one tile if nothing fits.
//!
//! ## Design
//!
//! - **Arena tiles**: every domino lives in a `DominoSet`. The stack, the
//!   hands and the board hold `DominoId`s, never copies.
//!
//! - **Linked chain**: the board keeps only its two open sides. Placed tiles
//!   are linked side to side, so the chain is walked left to right without
//!   ever storing a tile's orientation.
//!
//! - **Seeded sessions**: a `Match` owns all of its state and its RNG. The
//!   same seed replays the same match, event for event.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `tiles`: Dominoes, sides and the tile arena
//! - `zones`: Stack and hands
//! - `board`: The placed chain and placement priority
//! - `rules`: Match outcomes
//! - `game`: The match loop and narration events

pub mod core;
pub mod tiles;
pub mod zones;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, MatchError, PlayerId, PlayerMap, Result, MAX_PIP};

pub use crate::tiles::{Domino, DominoId, DominoSet, Face, SideRef, TileFace};

pub use crate::zones::{Hand, Stack};

pub use crate::board::{Board, BoardEnd, OpenEnds, Placement};

pub use crate::rules::GameResult;

pub use crate::game::{EventSink, JsonNarrator, Match, MatchEvent, MatchPhase, MatchReport, Narrator};
