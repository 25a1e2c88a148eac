//! A single automated match, from shuffle to win or draw.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::{EventSink, MatchEvent};
use crate::board::Board;
use crate::core::config::MatchConfig;
use crate::core::error::{MatchError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::rules::GameResult;
use crate::tiles::{DominoId, DominoSet};
use crate::zones::{Hand, Stack};

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Stack built, nothing shuffled or dealt yet.
    Dealing,
    /// Hands dealt and the first tile on the board.
    Seeded,
    /// Waiting for this player to move.
    Turn(PlayerId),
    /// This player emptied their hand.
    Won(PlayerId),
    /// The stack ran dry.
    Stalemate,
}

impl MatchPhase {
    /// The final result, once the match is over.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            MatchPhase::Won(player) => Some(GameResult::Winner(player)),
            MatchPhase::Stalemate => Some(GameResult::Draw),
            MatchPhase::Dealing | MatchPhase::Seeded | MatchPhase::Turn(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self.result().is_some()
    }
}

/// Everything a finished match produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub seed: u64,
    pub result: GameResult,
    pub events: Vec<MatchEvent>,
}

/// One match session.
///
/// Owns the tile arena and every zone that refers into it. Nothing is
/// shared between sessions, so any number of matches can run side by side.
///
/// ## Turn
///
/// The current player plays the first tile in hand that fits either open
/// end. With nothing playable they draw one tile and the turn passes; the
/// drawn tile waits for their next turn. Emptying a hand wins. Drawing the
/// last tile of the stack ends the match in a draw.
///
/// ```
/// use rust_dominoes::core::MatchConfig;
/// use rust_dominoes::game::Match;
///
/// let report = Match::run(MatchConfig::default().with_seed(7)).unwrap();
/// assert!(report.events[0].to_string().starts_with("Game starting"));
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    rng: GameRng,
    dominoes: DominoSet,
    stack: Stack,
    hands: PlayerMap<Hand>,
    board: Board,
    phase: MatchPhase,
    history: Vector<MatchEvent>,
    forwarded: usize,
}

impl Match {
    /// Build a fresh match: the full tile set, unshuffled, in the stack.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => {
                let rng = GameRng::from_entropy();
                tracing::info!(seed = rng.seed(), "no seed configured, drew one from entropy");
                rng
            }
        };
        let dominoes = DominoSet::standard(config.pip_max);
        let stack = Stack::build(&dominoes);

        Ok(Self {
            config,
            rng,
            dominoes,
            stack,
            hands: PlayerMap::with_default(),
            board: Board::new(),
            phase: MatchPhase::Dealing,
            history: Vector::new(),
            forwarded: 0,
        })
    }

    /// Build a match from a scripted position.
    ///
    /// `first_tile` is seeded onto the board immediately; the match starts
    /// in `Seeded` with the given hands and stack. The config supplies
    /// names only; its deal settings are ignored.
    pub fn arranged(
        config: MatchConfig,
        dominoes: DominoSet,
        stack: Stack,
        hands: PlayerMap<Hand>,
        first_tile: DominoId,
    ) -> Result<Self> {
        let mut board = Board::new();
        let first = board.seed(&dominoes, first_tile)?;

        let mut game = Self {
            rng: GameRng::new(config.seed.unwrap_or_default()),
            config,
            dominoes,
            stack,
            hands,
            board,
            phase: MatchPhase::Seeded,
            history: Vector::new(),
            forwarded: 0,
        };
        game.emit(MatchEvent::Started { first_tile: first });
        Ok(game)
    }

    /// Play a whole match with the given config and collect its events.
    pub fn run(config: MatchConfig) -> Result<MatchReport> {
        let mut game = Self::new(config)?;
        let mut events: Vec<MatchEvent> = Vec::new();
        let result = game.play(&mut events)?;
        Ok(MatchReport {
            seed: game.seed(),
            result,
            events,
        })
    }

    /// Run to completion, forwarding every event to `sink` in order.
    pub fn play(&mut self, sink: &mut dyn EventSink) -> Result<GameResult> {
        loop {
            self.flush(sink);
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.step()?;
        }
    }

    /// Advance by one transition and return the new phase.
    ///
    /// A finished match stays finished.
    pub fn step(&mut self) -> Result<MatchPhase> {
        match self.phase {
            MatchPhase::Dealing => self.deal()?,
            MatchPhase::Seeded => self.phase = MatchPhase::Turn(PlayerId::One),
            MatchPhase::Turn(player) => self.take_turn(player)?,
            MatchPhase::Won(_) | MatchPhase::Stalemate => {}
        }
        Ok(self.phase)
    }

    /// Shuffle, deal both hands, and seed the board from the top of the stack.
    pub fn deal(&mut self) -> Result<()> {
        if self.phase != MatchPhase::Dealing {
            return Err(MatchError::BoardAlreadySeeded);
        }

        self.stack.shuffle(&mut self.rng);
        for player in PlayerId::all() {
            self.hands[player].draw(&mut self.stack, self.config.hand_size);
        }

        let first_tile = self.stack.pop().ok_or(MatchError::EmptyStack)?;
        let first = self.board.seed(&self.dominoes, first_tile)?;
        self.phase = MatchPhase::Seeded;

        tracing::info!(
            seed = self.rng.seed(),
            first_tile = %first,
            stack = self.stack.len(),
            "match started"
        );
        self.emit(MatchEvent::Started { first_tile: first });
        Ok(())
    }

    fn take_turn(&mut self, player: PlayerId) -> Result<()> {
        let open = self
            .board
            .open_values(&self.dominoes)
            .ok_or(MatchError::BoardNotSeeded)?;
        let name = self.config.player_names[player].clone();

        match self.hands[player].find_playable(&self.dominoes, open) {
            Some(tile) => {
                let placement = self.board.place(&mut self.dominoes, tile)?;
                self.hands[player].remove(tile);

                self.emit(MatchEvent::Placed {
                    player,
                    name: name.clone(),
                    played: placement.played,
                    connected_to: placement.connected_to,
                    end: placement.end,
                });
                let board = self.board.tiles(&self.dominoes).collect();
                self.emit(MatchEvent::BoardChanged { board });

                if self.hands[player].is_empty() {
                    self.phase = MatchPhase::Won(player);
                    tracing::info!(%player, %name, board = self.board.len(), "match won");
                    self.emit(MatchEvent::Won { player, name });
                    return Ok(());
                }
            }
            None => {
                if let Some(&tile) = self.hands[player].draw(&mut self.stack, 1).first() {
                    let tile = self.dominoes[tile].face();
                    tracing::debug!(%player, %tile, stack = self.stack.len(), "forced draw");
                    self.emit(MatchEvent::DrewTile {
                        player,
                        name,
                        tile,
                    });
                }

                if self.stack.is_empty() {
                    self.phase = MatchPhase::Stalemate;
                    tracing::info!(board = self.board.len(), "match drawn");
                    self.emit(MatchEvent::Stalemate);
                    return Ok(());
                }
            }
        }

        self.phase = MatchPhase::Turn(player.other());
        Ok(())
    }

    fn emit(&mut self, event: MatchEvent) {
        self.history.push_back(event);
    }

    fn flush(&mut self, sink: &mut dyn EventSink) {
        for event in self.history.iter().skip(self.forwarded) {
            sink.record(event);
        }
        self.forwarded = self.history.len();
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The outcome, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.phase.result()
    }

    /// Seed of the shuffle, for replaying this match.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.config.player_names[player]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    #[must_use]
    pub fn dominoes(&self) -> &DominoSet {
        &self.dominoes
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Every event so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MatchEvent> {
        &self.history
    }

    /// The board rendered left to right.
    #[must_use]
    pub fn render_board(&self) -> String {
        self.board.render(&self.dominoes)
    }
}
