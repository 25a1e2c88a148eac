//! How a match ends.
//!
//! A match has exactly two terminal outcomes: one player empties their hand,
//! or the stack runs dry after a forced draw.

pub mod result;

pub use result::GameResult;
