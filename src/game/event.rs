//! Narration events.
//!
//! Every observable thing a match does is a `MatchEvent`. The `Display`
//! impl produces the exact narration line; the serde form carries the same
//! data for machine consumers.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::board::BoardEnd;
use crate::core::player::PlayerId;
use crate::tiles::TileFace;

/// Something that happened during a match, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// The board was seeded.
    Started { first_tile: TileFace },

    /// A player attached a tile to the board.
    Placed {
        player: PlayerId,
        name: String,
        played: TileFace,
        connected_to: TileFace,
        end: BoardEnd,
    },

    /// The board after a placement, left to right.
    BoardChanged { board: Vec<TileFace> },

    /// A player had no playable tile and drew one.
    DrewTile {
        player: PlayerId,
        name: String,
        tile: TileFace,
    },

    /// A player emptied their hand.
    Won { player: PlayerId, name: String },

    /// The stack ran dry.
    Stalemate,
}

impl MatchEvent {
    /// The player this event concerns, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            MatchEvent::Placed { player, .. }
            | MatchEvent::DrewTile { player, .. }
            | MatchEvent::Won { player, .. } => Some(*player),
            MatchEvent::Started { .. } | MatchEvent::BoardChanged { .. } | MatchEvent::Stalemate => None,
        }
    }
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEvent::Started { first_tile } => {
                write!(f, "Game starting with first tile: {}", first_tile)
            }
            MatchEvent::Placed {
                name,
                played,
                connected_to,
                ..
            } => write!(
                f,
                "{} plays {} to connect to tile {} on the board",
                name, played, connected_to
            ),
            MatchEvent::BoardChanged { board } => {
                write!(f, "Board is now:")?;
                for tile in board {
                    write!(f, " {}", tile)?;
                }
                Ok(())
            }
            MatchEvent::DrewTile { name, tile, .. } => {
                write!(f, "{} can't play, drawing tile {}", name, tile)
            }
            MatchEvent::Won { name, .. } => write!(f, "Player {} has won!", name),
            MatchEvent::Stalemate => write!(f, "The game was a draw!"),
        }
    }
}

/// Receives events as a match produces them.
pub trait EventSink {
    fn record(&mut self, event: &MatchEvent);
}

impl EventSink for Vec<MatchEvent> {
    fn record(&mut self, event: &MatchEvent) {
        self.push(event.clone());
    }
}

/// Prints each event's narration line to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct Narrator;

impl EventSink for Narrator {
    fn record(&mut self, event: &MatchEvent) {
        println!("{}", event);
    }
}

/// Writes each event as one JSON object per line.
#[derive(Debug)]
pub struct JsonNarrator<W: Write> {
    out: W,
}

impl<W: Write> JsonNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonNarrator<W> {
    fn record(&mut self, event: &MatchEvent) {
        let written = serde_json::to_writer(&mut self.out, event)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_lines() {
        let started = MatchEvent::Started {
            first_tile: TileFace::new(6, 1),
        };
        assert_eq!(started.to_string(), "Game starting with first tile: <6:1>");

        let placed = MatchEvent::Placed {
            player: PlayerId::One,
            name: "Jackson".to_string(),
            played: TileFace::new(1, 4),
            connected_to: TileFace::new(6, 1),
            end: BoardEnd::Right,
        };
        assert_eq!(
            placed.to_string(),
            "Jackson plays <1:4> to connect to tile <6:1> on the board"
        );

        let board = MatchEvent::BoardChanged {
            board: vec![TileFace::new(6, 1), TileFace::new(1, 4)],
        };
        assert_eq!(board.to_string(), "Board is now: <6:1> <1:4>");

        let drew = MatchEvent::DrewTile {
            player: PlayerId::Two,
            name: "Syberen".to_string(),
            tile: TileFace::new(3, 0),
        };
        assert_eq!(drew.to_string(), "Syberen can't play, drawing tile <3:0>");

        let won = MatchEvent::Won {
            player: PlayerId::Two,
            name: "Syberen".to_string(),
        };
        assert_eq!(won.to_string(), "Player Syberen has won!");

        assert_eq!(MatchEvent::Stalemate.to_string(), "The game was a draw!");
    }

    #[test]
    fn test_event_player() {
        let won = MatchEvent::Won {
            player: PlayerId::One,
            name: "Jackson".to_string(),
        };
        assert_eq!(won.player(), Some(PlayerId::One));
        assert_eq!(MatchEvent::Stalemate.player(), None);
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<MatchEvent> = Vec::new();
        sink.record(&MatchEvent::Started {
            first_tile: TileFace::new(0, 0),
        });
        sink.record(&MatchEvent::Stalemate);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1], MatchEvent::Stalemate);
    }

    #[test]
    fn test_json_narrator_writes_lines() {
        let mut narrator = JsonNarrator::new(Vec::new());
        narrator.record(&MatchEvent::Started {
            first_tile: TileFace::new(2, 5),
        });
        narrator.record(&MatchEvent::Stalemate);

        let output = String::from_utf8(narrator.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: MatchEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(
            first,
            MatchEvent::Started {
                first_tile: TileFace::new(2, 5)
            }
        );
        assert_eq!(lines[1], r#"{"event":"stalemate"}"#);
    }
}
