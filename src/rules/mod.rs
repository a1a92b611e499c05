//! Move representation and legal move generation.
//!
//! - `moves`: the `Move` value and placement de-duplication
//! - `movegen`: `MoveGenerator`, origin-anchored enumeration of legal moves
//!
//! Generation only reads the board. Applying a move goes through
//! `Board::commit_placement` (or `GameSession::play`).

pub mod movegen;
pub mod moves;

pub use movegen::MoveGenerator;
pub use moves::{distinct_placements, Move};
