//! Domino tiles and the arena that owns them.
//!
//! ## Key Types
//!
//! - `DominoId`: Arena index shared by the stack, hands and board
//! - `SideRef`: One side of one tile; `other_side()` is fixed by construction
//! - `TileFace`: Two pip values in reading order, displayed as `<a:b>`
//! - `DominoSet`: The arena, holding pip values and `next` links

pub mod domino;

pub use domino::{Domino, DominoId, DominoSet, Face, SideRef, TileFace};
