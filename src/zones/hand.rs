//! A player's held tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::stack::Stack;
use crate::board::OpenEnds;
use crate::tiles::{DominoId, DominoSet};

/// Tiles held by one player, in the order they were drawn.
///
/// Order only matters for `find_playable`, which scans front to back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[DominoId; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A hand holding exactly these tiles.
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = DominoId>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Pull up to `n` tiles from the stack and return the ids drawn.
    pub fn draw(&mut self, stack: &mut Stack, n: usize) -> Vec<DominoId> {
        let drawn = stack.draw(n);
        self.tiles.extend(drawn.iter().copied());
        drawn
    }

    pub fn add(&mut self, tile: DominoId) {
        self.tiles.push(tile);
    }

    /// First held tile with a side matching either open end.
    #[must_use]
    pub fn find_playable(&self, set: &DominoSet, open: OpenEnds) -> Option<DominoId> {
        self.tiles
            .iter()
            .copied()
            .find(|&id| open.accepts(&set[id]))
    }

    /// Remove a specific tile by identity. Returns whether it was held.
    pub fn remove(&mut self, tile: DominoId) -> bool {
        match self.tiles.iter().position(|&id| id == tile) {
            Some(index) => {
                self.tiles.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, tile: DominoId) -> bool {
        self.tiles.contains(&tile)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = DominoId> + '_ {
        self.tiles.iter().copied()
    }
}
