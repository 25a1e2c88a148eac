//! The match loop and its narration.
//!
//! A `Match` owns one session's tiles, stack, hands and board, and moves
//! through `Dealing -> Seeded -> Turn(player)... -> Won(player) | Stalemate`.
//! Each transition appends `MatchEvent`s to the session history; `play`
//! forwards them to an `EventSink` as they happen.

pub mod event;
pub mod session;

pub use event::{EventSink, JsonNarrator, MatchEvent, Narrator};
pub use session::{Match, MatchPhase, MatchReport};
