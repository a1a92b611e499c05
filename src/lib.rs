//! # blokus-engine
//!
//! A Blokus rules engine: piece geometry, board legality and legal move
//! generation, built for agents and search that call it millions of times.
//!
//! ## Design Principles
//!
//! 1. **Board owns the grid**: the only write path is
//!    `Board::commit_placement`, which validates first and drops the piece
//!    from the player's inventory in the same call.
//!
//! 2. **N-Player First**: seats, colors and board size come from
//!    `GameConfig`. Nothing assumes two or four players.
//!
//! 3. **Rejections are values**: an illegal move is `false` or an empty
//!    list, never a panic. Only malformed piece catalogs produce an error.
//!
//! ## Placement Rule
//!
//! A player's first piece must cover a board corner. Every later piece
//! must touch the player's own color at a corner and never along an edge.
//! Other colors only block cells.
//!
//! ## Modules
//!
//! - `core`: cells, players and inventories, configuration, RNG
//! - `pieces`: shapes, orientations, the piece catalog
//! - `board`: the grid and the placement rule
//! - `rules`: `Move` and the `MoveGenerator`
//! - `game`: `GameSession`, turn order and history
//!
//! ## Example
//!
//! ```
//! use blokus_engine::{GameConfig, GameSession, PieceCatalog};
//!
//! let mut session = GameSession::new(GameConfig::duo(), PieceCatalog::standard());
//!
//! while !session.is_over() {
//!     let player = session.current_player();
//!     let moves = session.legal_moves();
//!     // Largest piece first.
//!     match moves.iter().max_by_key(|m| m.cells.len()) {
//!         Some(mv) => assert!(session.play(player, mv)),
//!         None => assert!(session.pass(player)),
//!     }
//! }
//!
//! assert!(session.result().is_some());
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod pieces;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, GameConfig, GameRng, PieceMask, Player, PlayerId, PlayerMap,
};

pub use crate::pieces::{
    CanonicalShape, CatalogError, Orientation, OrientedShape, Piece, PieceCatalog,
    PieceDefinition, Shape, ShapeError,
};

pub use crate::board::Board;

pub use crate::rules::{distinct_placements, Move, MoveGenerator};

pub use crate::game::{GameResult, GameSession, MoveRecord};
