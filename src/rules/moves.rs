//! Move values.
//!
//! A `Move` carries everything needed to replay it: the origin it was
//! generated for, the piece index, the orientation, and the absolute cells
//! it covers.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Cell;
use crate::pieces::{CellList, Orientation};

/// A candidate placement of one piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The board cell the pivot was aligned with.
    pub origin: Cell,
    /// Catalog index of the piece.
    pub piece: usize,
    pub orientation: Orientation,
    /// Absolute cells covered, in the oriented shape's canonical order.
    pub cells: CellList,
}

impl Move {
    #[must_use]
    pub fn new(origin: Cell, piece: usize, orientation: Orientation, cells: CellList) -> Self {
        Self {
            origin,
            piece,
            orientation,
            cells,
        }
    }

    /// Piece index plus sorted cells; equal for moves that fill the same
    /// squares with the same piece.
    #[must_use]
    pub fn placement_key(&self) -> (usize, CellList) {
        let mut cells = self.cells.clone();
        cells.sort_unstable();
        (self.piece, cells)
    }

    #[must_use]
    pub fn covers(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "piece {} {} at {} [", self.piece, self.orientation, self.origin)?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

/// Keep the first move for each `(piece, cell set)`, preserving order.
///
/// `valid_moves` reports a placement once per origin it covers; this gives
/// the view with one entry per distinct placement.
#[must_use]
pub fn distinct_placements(moves: impl IntoIterator<Item = Move>) -> Vec<Move> {
    let mut seen = FxHashSet::default();
    moves
        .into_iter()
        .filter(|mv| seen.insert(mv.placement_key()))
        .collect()
}
