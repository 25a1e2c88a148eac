//! The face-down draw pile.
//!
//! The top of the stack is the end of the backing `Vec`, so drawing is a
//! cheap split from the tail. Draws never fabricate tiles: asking for more
//! than remain returns what is left.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::tiles::{DominoId, DominoSet};

/// Ordered draw pile of tile ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    tiles: Vec<DominoId>,
}

impl Stack {
    /// A stack holding every tile of the arena, in construction order.
    #[must_use]
    pub fn build(set: &DominoSet) -> Self {
        Self {
            tiles: set.ids().collect(),
        }
    }

    /// A stack with an explicit order; the last id is the top.
    #[must_use]
    pub fn from_tiles(tiles: Vec<DominoId>) -> Self {
        Self { tiles }
    }

    /// Shuffle the whole pile once.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Remove up to `n` tiles from the top.
    ///
    /// The returned tiles keep their stack order (the old top is last).
    /// Fewer than `n` come back when the stack runs short.
    pub fn draw(&mut self, n: usize) -> Vec<DominoId> {
        let take = n.min(self.tiles.len());
        self.tiles.split_off(self.tiles.len() - take)
    }

    /// Remove the top tile.
    pub fn pop(&mut self) -> Option<DominoId> {
        self.tiles.pop()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Remaining tiles, bottom first.
    #[must_use]
    pub fn tiles(&self) -> &[DominoId] {
        &self.tiles
    }
}
