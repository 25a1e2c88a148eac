//! Match configuration.
//!
//! A match is fully described by its tile set size (`pip_max`), how many
//! tiles each player is dealt, the shuffle seed and the two display names.

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};
use super::player::{PlayerId, PlayerMap};

/// Largest supported pip value (a double-eighteen set, 190 tiles).
pub const MAX_PIP: u8 = 18;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Highest pip value on a side (default: 6, the double-six set).
    pub pip_max: u8,

    /// Tiles dealt to each player before the board is seeded (default: 7).
    pub hand_size: usize,

    /// Shuffle seed. `None` draws one from entropy at match creation.
    pub seed: Option<u64>,

    /// Display names used in narration.
    pub player_names: PlayerMap<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pip_max: 6,
            hand_size: 7,
            seed: None,
            player_names: PlayerMap::from_pair("Jackson".to_string(), "Syberen".to_string()),
        }
    }
}

impl MatchConfig {
    /// Set the highest pip value.
    pub fn with_pip_max(mut self, pip_max: u8) -> Self {
        self.pip_max = pip_max;
        self
    }

    /// Set the number of tiles dealt to each player.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Fix the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set a player's display name.
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Number of tiles in the set: every unordered pair of `0..=pip_max`.
    ///
    /// ```
    /// use rust_dominoes::core::MatchConfig;
    ///
    /// assert_eq!(MatchConfig::default().tile_count(), 28);
    /// assert_eq!(MatchConfig::default().with_pip_max(9).tile_count(), 55);
    /// ```
    #[must_use]
    pub fn tile_count(&self) -> usize {
        let n = self.pip_max as usize + 1;
        n * (n + 1) / 2
    }

    /// Check that the deal is possible: both hands plus the seed tile
    /// must fit in the set.
    pub fn validate(&self) -> Result<()> {
        if self.pip_max > MAX_PIP {
            return Err(MatchError::config(format!(
                "pip_max {} exceeds the supported maximum of {}",
                self.pip_max, MAX_PIP
            )));
        }
        if self.hand_size == 0 {
            return Err(MatchError::config("hand_size must be at least 1"));
        }
        let needed = self.hand_size * 2 + 1;
        if needed > self.tile_count() {
            return Err(MatchError::config(format!(
                "dealing {} tiles per player and seeding the board needs {} tiles, but the set has {}",
                self.hand_size,
                needed,
                self.tile_count()
            )));
        }
        for (player, name) in self.player_names.iter() {
            if name.trim().is_empty() {
                return Err(MatchError::config(format!("{} needs a non-empty name", player)));
            }
        }
        Ok(())
    }
}
