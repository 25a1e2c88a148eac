//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A dominoes match always has exactly two seats, so `PlayerId` is a closed
//! enum rather than an index. Turn order alternates strictly via `other()`.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a fixed `[T; 2]` array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Moves first.
    One,
    /// Moves second.
    Two,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The player who moves after this one.
    ///
    /// ```
    /// use rust_dominoes::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::One.other(), PlayerId::Two);
    /// assert_eq!(PlayerId::Two.other(), PlayerId::One);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Iterate over both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player One"),
            PlayerId::Two => write!(f, "Player Two"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_dominoes::core::{PlayerId, PlayerMap};
///
/// let mut tiles: PlayerMap<u32> = PlayerMap::new(|_| 7);
/// assert_eq!(tiles[PlayerId::One], 7);
///
/// tiles[PlayerId::Two] -= 1;
/// assert_eq!(tiles[PlayerId::Two], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a PlayerMap from explicit per-seat values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
