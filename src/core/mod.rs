//! Core engine types: cells, players, configuration, RNG.
//!
//! These are the value types every other module builds on. None of them
//! know about pieces or the board.

pub mod cell;
pub mod config;
pub mod player;
pub mod rng;

pub use cell::{Cell, CORNER_OFFSETS, EDGE_OFFSETS};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE};
pub use player::{Color, PieceMask, Player, PlayerId, PlayerMap, MAX_PIECES};
pub use rng::GameRng;
