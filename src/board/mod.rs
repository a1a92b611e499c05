//! The shared game board.
//!
//! `Board` owns the grid and enforces the placement rule. It never sees
//! pieces directly: callers pass a piece index and the absolute cells it
//! would cover.

pub mod grid;

pub use grid::Board;
