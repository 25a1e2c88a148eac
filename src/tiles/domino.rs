//! Dominoes, their sides, and the arena that owns them.
//!
//! ## Side links
//!
//! Every domino has two sides, `Face::A` and `Face::B`. A side is addressed
//! by `SideRef { tile, face }`, which makes the "other side of the same tile"
//! a pure function (`SideRef::other_side`) that can never drift.
//!
//! The only mutable state is each side's `next` link: once a tile is placed,
//! its touching side points at the neighbouring tile's touching side and
//! vice versa. Links live in the `DominoSet` arena, so the stack, the hands
//! and the board all share the same tiles by `DominoId`.
//!
//! ```
//! use rust_dominoes::tiles::{DominoSet, Face, SideRef};
//!
//! let mut set = DominoSet::new();
//! let a = set.push(2, 5);
//! let b = set.push(5, 5);
//!
//! set.link(SideRef::new(a, Face::B), SideRef::new(b, Face::A)).unwrap();
//! assert_eq!(set.next(SideRef::new(b, Face::A)), Some(SideRef::new(a, Face::B)));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::error::{MatchError, Result};

/// Arena index of a domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DominoId(pub u16);

impl DominoId {
    /// Get the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DominoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Domino({})", self.0)
    }
}

/// One of the two faces of a domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    A,
    B,
}

impl Face {
    /// The opposite face.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Face::A => Face::B,
            Face::B => Face::A,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Face::A => 0,
            Face::B => 1,
        }
    }
}

/// Address of one side of one domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideRef {
    pub tile: DominoId,
    pub face: Face,
}

impl SideRef {
    #[must_use]
    pub const fn new(tile: DominoId, face: Face) -> Self {
        Self { tile, face }
    }

    /// The far side of the same tile.
    #[must_use]
    pub const fn other_side(self) -> Self {
        Self {
            tile: self.tile,
            face: self.face.flip(),
        }
    }
}

impl std::fmt::Display for SideRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:?}", self.tile, self.face)
    }
}

/// Two pip values in reading order, printed as `<left:right>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileFace {
    pub left: u8,
    pub right: u8,
}

impl TileFace {
    #[must_use]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// The same tile read from the other end.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

impl std::fmt::Display for TileFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}:{}>", self.left, self.right)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Side {
    value: u8,
    next: Option<SideRef>,
}

/// A tile with two unordered sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domino {
    id: DominoId,
    sides: [Side; 2],
}

impl Domino {
    fn new(id: DominoId, a: u8, b: u8) -> Self {
        Self {
            id,
            sides: [Side { value: a, next: None }, Side { value: b, next: None }],
        }
    }

    #[must_use]
    pub fn id(&self) -> DominoId {
        self.id
    }

    /// Pip value on the given face.
    #[must_use]
    pub fn value(&self, face: Face) -> u8 {
        self.sides[face.slot()].value
    }

    #[must_use]
    pub fn side_a(&self) -> SideRef {
        SideRef::new(self.id, Face::A)
    }

    #[must_use]
    pub fn side_b(&self) -> SideRef {
        SideRef::new(self.id, Face::B)
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.value(Face::A) == self.value(Face::B)
    }

    /// Does either side carry `value`?
    #[must_use]
    pub fn has_value(&self, value: u8) -> bool {
        self.value(Face::A) == value || self.value(Face::B) == value
    }

    /// Whether either side has been linked to a neighbour.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.sides.iter().any(|side| side.next.is_some())
    }

    /// The tile read A then B.
    #[must_use]
    pub fn face(&self) -> TileFace {
        TileFace::new(self.value(Face::A), self.value(Face::B))
    }

    /// `<a:b>`
    #[must_use]
    pub fn left_to_right_string(&self) -> String {
        self.face().to_string()
    }

    /// `<b:a>`
    #[must_use]
    pub fn right_to_left_string(&self) -> String {
        self.face().flipped().to_string()
    }
}

impl std::fmt::Display for Domino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.face())
    }
}

/// Arena owning every domino of a match.
///
/// Tiles are created once and never removed; `DominoId`s handed out by
/// `push` stay valid for the arena's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoSet {
    tiles: Vec<Domino>,
}

impl DominoSet {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical set: one tile for every unordered pair in `0..=pip_max`,
    /// doubles included.
    ///
    /// ```
    /// use rust_dominoes::tiles::DominoSet;
    ///
    /// assert_eq!(DominoSet::standard(6).len(), 28);
    /// ```
    #[must_use]
    pub fn standard(pip_max: u8) -> Self {
        let mut set = Self::new();
        for i in 0..=pip_max {
            for j in 0..=i {
                set.push(i, j);
            }
        }
        set
    }

    /// Add a tile and return its id.
    pub fn push(&mut self, a: u8, b: u8) -> DominoId {
        let id = DominoId(self.tiles.len() as u16);
        self.tiles.push(Domino::new(id, a, b));
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile.
    #[must_use]
    pub fn get(&self, id: DominoId) -> Option<&Domino> {
        self.tiles.get(id.index())
    }

    /// Iterate over every tile in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Domino> {
        self.tiles.iter()
    }

    /// Every id in construction order.
    pub fn ids(&self) -> impl Iterator<Item = DominoId> + '_ {
        self.tiles.iter().map(Domino::id)
    }

    /// Pip value of a side.
    #[must_use]
    pub fn value(&self, side: SideRef) -> u8 {
        self[side.tile].value(side.face)
    }

    /// The neighbouring side this side is linked to, if placed.
    #[must_use]
    pub fn next(&self, side: SideRef) -> Option<SideRef> {
        self[side.tile].sides[side.face.slot()].next
    }

    /// Read a tile starting from `side`: `<side:other_side>`.
    #[must_use]
    pub fn read(&self, side: SideRef) -> TileFace {
        TileFace::new(self.value(side), self.value(side.other_side()))
    }

    /// Link two sides to each other.
    ///
    /// Each side may be linked once; a second link would let the chain
    /// fold back on itself.
    pub fn link(&mut self, a: SideRef, b: SideRef) -> Result<()> {
        for side in [a, b] {
            if self.next(side).is_some() {
                return Err(MatchError::SideAlreadyLinked(side));
            }
        }
        if a.tile == b.tile {
            return Err(MatchError::SideAlreadyLinked(b));
        }
        self.set_next(a, b);
        self.set_next(b, a);
        Ok(())
    }

    fn set_next(&mut self, side: SideRef, next: SideRef) {
        self.tiles[side.tile.index()].sides[side.face.slot()].next = Some(next);
    }
}

impl Index<DominoId> for DominoSet {
    type Output = Domino;

    fn index(&self, id: DominoId) -> &Self::Output {
        &self.tiles[id.index()]
    }
}
