//! Where tiles live before they reach the board.
//!
//! ## Key Types
//!
//! - `Stack`: The shuffled draw pile, consumed from the top
//! - `Hand`: One player's held tiles
//!
//! Both hold `DominoId`s into the match's `DominoSet`; moving a tile between
//! zones moves the id, never the tile.

pub mod stack;
pub mod hand;

pub use stack::Stack;
pub use hand::Hand;
