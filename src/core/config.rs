//! Game configuration.
//!
//! A session is configured at startup with the board dimension, the player
//! colors (which also fixes the player count and seat order), and the RNG
//! seed used to pick a starting player.

use serde::{Deserialize, Serialize};

use super::player::{Color, PlayerId};

/// Default board dimension (classic four-player board).
pub const DEFAULT_BOARD_SIZE: usize = 20;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N (the board is N×N).
    pub board_size: usize,

    /// One color per seat, in turn order.
    pub colors: Vec<Color>,

    /// Seed for the session RNG.
    pub seed: u64,

    /// Draw the starting player from the RNG instead of seating player 0 first.
    pub random_start: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            colors: ['R', 'B', 'G', 'Y'].into_iter().map(Color::new).collect(),
            seed: 42,
            random_start: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration for an N×N board with the given colors.
    pub fn new(board_size: usize, colors: impl IntoIterator<Item = char>) -> Self {
        let config = Self {
            board_size,
            colors: colors.into_iter().map(Color::new).collect(),
            ..Self::default()
        };
        config.validate();
        config
    }

    /// Two-player 14×14 preset with colors `X` and `O`.
    pub fn duo() -> Self {
        Self::new(14, ['X', 'O'])
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self.validate();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pick the starting player at random (from the seeded RNG).
    #[must_use]
    pub fn with_random_start(mut self) -> Self {
        self.random_start = true;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.colors.len()
    }

    /// Color of a seat.
    #[must_use]
    pub fn color_of(&self, player: PlayerId) -> Option<Color> {
        self.colors.get(player.index()).copied()
    }

    /// Panics on a configuration no game can be played with.
    pub fn validate(&self) {
        assert!(self.board_size > 0, "Board size must be positive");
        assert!(self.board_size <= i32::MAX as usize, "Board size too large");
        assert!(!self.colors.is_empty(), "Must have at least 1 player");
        assert!(self.colors.len() <= 255, "At most 255 players supported");
        for (i, color) in self.colors.iter().enumerate() {
            assert!(
                !self.colors[..i].contains(color),
                "Duplicate player color {color}"
            );
        }
    }
}
