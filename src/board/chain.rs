//! The placed chain of tiles.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::error::{MatchError, Result};
use crate::tiles::{Domino, DominoId, DominoSet, SideRef, TileFace};

/// Which end of the chain a tile attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEnd {
    Left,
    Right,
}

impl std::fmt::Display for BoardEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardEnd::Left => write!(f, "left"),
            BoardEnd::Right => write!(f, "right"),
        }
    }
}

/// Pip values currently playable at each end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenEnds {
    pub left: u8,
    pub right: u8,
}

impl OpenEnds {
    /// Could this tile attach to either end?
    #[must_use]
    pub fn accepts(&self, domino: &Domino) -> bool {
        domino.has_value(self.left) || domino.has_value(self.right)
    }
}

/// Outcome of a successful `Board::place`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub tile: DominoId,
    pub end: BoardEnd,
    /// The placed tile as it now reads on the board, left to right.
    pub played: TileFace,
    /// The tile it attached to, as it reads on the board.
    pub connected_to: TileFace,
    /// The pip value the two tiles share.
    pub matched_value: u8,
}

/// The chain of placed tiles, exposing only its two open ends.
///
/// ## Priority
///
/// `place` tries, in order: side A on the left end, side B on the left end,
/// side A on the right end, side B on the right end. A tile that fits both
/// ends therefore always goes left.
///
/// ```
/// use rust_dominoes::board::{Board, BoardEnd};
/// use rust_dominoes::tiles::DominoSet;
///
/// let mut set = DominoSet::new();
/// let first = set.push(2, 5);
/// let double = set.push(5, 5);
///
/// let mut board = Board::new();
/// board.seed(&set, first).unwrap();
/// let placement = board.place(&mut set, double).unwrap();
///
/// assert_eq!(placement.end, BoardEnd::Right);
/// assert_eq!(board.render(&set), "<2:5> <5:5>");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    left: Option<SideRef>,
    right: Option<SideRef>,
    placed: FxHashSet<DominoId>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the first tile down: side A becomes the left end, side B the right.
    ///
    /// Returns the tile as it reads on the board.
    pub fn seed(&mut self, set: &DominoSet, tile: DominoId) -> Result<TileFace> {
        if self.is_seeded() {
            return Err(MatchError::BoardAlreadySeeded);
        }
        if set[tile].is_linked() {
            return Err(MatchError::TileAlreadyPlaced(tile));
        }

        let domino = &set[tile];
        self.left = Some(domino.side_a());
        self.right = Some(domino.side_b());
        self.placed.insert(tile);

        tracing::debug!(tile = %domino.face(), "board seeded");
        Ok(domino.face())
    }

    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.left.is_some()
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    #[must_use]
    pub fn contains(&self, tile: DominoId) -> bool {
        self.placed.contains(&tile)
    }

    /// The exposed sides, left then right.
    pub fn ends(&self) -> Result<(SideRef, SideRef)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(MatchError::BoardNotSeeded),
        }
    }

    /// Values playable at each end. `None` before seeding.
    #[must_use]
    pub fn open_values(&self, set: &DominoSet) -> Option<OpenEnds> {
        let (left, right) = self.ends().ok()?;
        Some(OpenEnds {
            left: set.value(left),
            right: set.value(right),
        })
    }

    /// Attach a tile to the first end it matches.
    ///
    /// The board and arena are untouched when this returns an error.
    pub fn place(&mut self, set: &mut DominoSet, tile: DominoId) -> Result<Placement> {
        let (left, right) = self.ends()?;
        if self.placed.contains(&tile) || set[tile].is_linked() {
            return Err(MatchError::TileAlreadyPlaced(tile));
        }

        let left_value = set.value(left);
        let right_value = set.value(right);
        let (side_a, side_b) = (set[tile].side_a(), set[tile].side_b());

        let (matching, end) = [
            (side_a, BoardEnd::Left),
            (side_b, BoardEnd::Left),
            (side_a, BoardEnd::Right),
            (side_b, BoardEnd::Right),
        ]
        .into_iter()
        .find(|&(side, end)| {
            let open = match end {
                BoardEnd::Left => left_value,
                BoardEnd::Right => right_value,
            };
            set.value(side) == open
        })
        .ok_or_else(|| MatchError::NoMatchingEnd {
            tile: set[tile].face(),
            left: left_value,
            right: right_value,
        })?;

        let (anchor, played, connected_to) = match end {
            BoardEnd::Left => (left, set.read(matching.other_side()), set.read(left)),
            BoardEnd::Right => (right, set.read(matching), set.read(right.other_side())),
        };

        set.link(matching, anchor)?;
        match end {
            BoardEnd::Left => self.left = Some(matching.other_side()),
            BoardEnd::Right => self.right = Some(matching.other_side()),
        }
        self.placed.insert(tile);

        tracing::debug!(%played, %connected_to, %end, "tile placed");
        Ok(Placement {
            tile,
            end,
            played,
            connected_to,
            matched_value: set.value(matching),
        })
    }

    /// Walk the chain from the left end.
    ///
    /// The walk is lazy and stops after at most `set.len()` tiles.
    #[must_use]
    pub fn tiles<'a>(&self, set: &'a DominoSet) -> Tiles<'a> {
        Tiles {
            set,
            cursor: self.left,
            remaining: set.len(),
        }
    }

    /// The chain as space-separated `<a:b>` tiles, left to right.
    #[must_use]
    pub fn render(&self, set: &DominoSet) -> String {
        self.tiles(set)
            .map(|face| face.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Left-to-right walk over a board.
///
/// Each step reads the current side and its other side, then follows the
/// other side's `next` link into the neighbouring tile.
#[derive(Clone, Debug)]
pub struct Tiles<'a> {
    set: &'a DominoSet,
    cursor: Option<SideRef>,
    remaining: usize,
}

impl Iterator for Tiles<'_> {
    type Item = TileFace;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let side = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.set.next(side.other_side());
        Some(self.set.read(side))
    }
}
