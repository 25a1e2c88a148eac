//! The board: a linked chain of placed tiles.
//!
//! The board stores only its two exposed sides. Everything between them is
//! reachable through side links in the `DominoSet`: from any side,
//! `other_side()` crosses the tile and `next` crosses to the neighbour.
//! Links are assigned once per side, so the chain can never close into a
//! cycle and a walk from the left end always reaches the right end.

pub mod chain;

pub use chain::{Board, BoardEnd, OpenEnds, Placement, Tiles};
