//! Legal move enumeration.
//!
//! Generation is anchored on *origins*: empty cells where a new piece could
//! make its required corner contact. On a player's first move those are the
//! empty board corners. Afterwards they are the empty cells with no
//! same-color edge neighbor and at least one same-color diagonal neighbor.
//!
//! For each origin, every available piece, every distinct orientation and
//! every cell of that orientation (the *pivot*) is tried: the oriented shape
//! is translated so the pivot lands on the origin and kept if
//! `Board::is_valid_placement` accepts it. Every legal placement covers at
//! least one origin, so the union over origins is complete.
//!
//! A placement covering several origins is reported once per origin; use
//! `distinct_placements` for the de-duplicated view.
//!
//! ## Example
//!
//! ```
//! use blokus_engine::board::Board;
//! use blokus_engine::core::{Cell, Color, Player};
//! use blokus_engine::pieces::PieceCatalog;
//! use blokus_engine::rules::MoveGenerator;
//!
//! let catalog = PieceCatalog::standard();
//! let board = Board::new(14);
//! let player = Player::new(Color::new('X'), catalog.len());
//!
//! let movegen = MoveGenerator::new(&catalog);
//! assert_eq!(movegen.valid_origins(&board, &player).len(), 4);
//! assert!(movegen.valid_moves(&board, &player).iter().all(|m| m.covers(Cell::new(0, 0))
//!     || m.covers(Cell::new(0, 13))
//!     || m.covers(Cell::new(13, 0))
//!     || m.covers(Cell::new(13, 13))));
//! ```

use crate::board::Board;
use crate::core::{Cell, Player};
use crate::pieces::{CellList, OrientedShape, PieceCatalog};

use super::moves::Move;

/// Enumerates legal moves against one piece catalog.
///
/// Holds only a shared borrow, so one generator can serve many boards and
/// threads at once.
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator<'a> {
    catalog: &'a PieceCatalog,
}

impl<'a> MoveGenerator<'a> {
    #[must_use]
    pub fn new(catalog: &'a PieceCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a PieceCatalog {
        self.catalog
    }

    /// Cells a new placement can be anchored at, without duplicates.
    ///
    /// First move: the empty corners in `Board::corners` order. Otherwise a
    /// row-major scan.
    #[must_use]
    pub fn valid_origins(&self, board: &Board, player: &Player) -> Vec<Cell> {
        if board.is_first_move(player) {
            let mut origins = Vec::with_capacity(4);
            for corner in board.corners() {
                // A 1×1 board has one corner four times.
                if board.is_empty(corner) && !origins.contains(&corner) {
                    origins.push(corner);
                }
            }
            return origins;
        }

        let color = player.color();
        let n = board.size() as i32;
        let mut origins = Vec::new();

        for y in 0..n {
            for x in 0..n {
                let cell = Cell::new(x, y);
                if board.is_empty(cell)
                    && !board.has_edge_contact(&[cell], color)
                    && board.has_corner_contact(&[cell], color)
                {
                    origins.push(cell);
                }
            }
        }

        origins
    }

    /// Every candidate anchored at `origin`, legal or not, in generation
    /// order: piece index, then orientation, then pivot.
    fn candidates<'p>(
        &self,
        player: &'p Player,
        origin: Cell,
    ) -> impl Iterator<Item = (usize, &'a OrientedShape, CellList)> + 'p
    where
        'a: 'p,
    {
        let catalog = self.catalog;
        player
            .available_pieces()
            .filter_map(move |index| catalog.get(index).map(|piece| (index, piece)))
            .flat_map(move |(index, piece)| {
                piece.orientations().iter().flat_map(move |oriented| {
                    oriented.shape.cells().iter().map(move |&pivot| {
                        (index, oriented, oriented.shape.placed_at(origin.sub(pivot)))
                    })
                })
            })
    }

    /// Legal moves whose pivot sits on `origin`.
    ///
    /// An origin not returned by `valid_origins` yields whatever is legal
    /// there, usually nothing. An off-board origin yields nothing.
    #[must_use]
    pub fn moves_for_origin(&self, board: &Board, player: &Player, origin: Cell) -> Vec<Move> {
        if !board.in_bounds(origin) {
            return Vec::new();
        }
        self.candidates(player, origin)
            .filter(|(index, _, cells)| board.is_valid_placement(*index, cells, player))
            .map(|(index, oriented, cells)| Move::new(origin, index, oriented.orientation, cells))
            .collect()
    }

    /// All legal moves, grouped by origin in `valid_origins` order.
    ///
    /// Empty means the player must pass.
    #[must_use]
    pub fn valid_moves(&self, board: &Board, player: &Player) -> Vec<Move> {
        self.valid_origins(board, player)
            .into_iter()
            .flat_map(|origin| self.moves_for_origin(board, player, origin))
            .collect()
    }

    /// True if `valid_moves` would be non-empty; stops at the first hit.
    #[must_use]
    pub fn has_any_move(&self, board: &Board, player: &Player) -> bool {
        self.valid_origins(board, player).into_iter().any(|origin| {
            self.candidates(player, origin)
                .any(|(index, _, cells)| board.is_valid_placement(index, &cells, player))
        })
    }
}
