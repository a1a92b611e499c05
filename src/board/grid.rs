//! Board state and placement legality.
//!
//! The grid is private: `commit_placement` is the only code path that
//! writes a cell, and it validates first, so a rejected placement leaves
//! the board and the player untouched.
//!
//! ## Placement rule
//!
//! A set of cells is a legal placement of piece `i` for a player iff:
//!
//! 1. the player still holds piece `i`;
//! 2. every cell is on the board and empty (and no cell repeats);
//! 3. on the player's first move, some cell is a board corner;
//!    otherwise the cells touch the player's color diagonally
//!    (`has_corner_contact`) and never orthogonally (`has_edge_contact`).

use rustc_hash::FxHashMap;

use crate::core::{Cell, Color, Player};

/// An N×N grid of optional player colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Option<Color>>,
    /// Placed-cell count per color, kept in step with `grid`.
    placed: FxHashMap<Color, usize>,
}

impl Board {
    /// Create an empty N×N board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        assert!(size <= i32::MAX as usize, "Board size too large");

        Self {
            size,
            grid: vec![None; size * size],
            placed: FxHashMap::default(),
        }
    }

    /// Board dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.size + cell.x as usize)
    }

    /// Both coordinates lie in `[0, N)`.
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        let n = self.size as i64;
        (0..n).contains(&(cell.x as i64)) && (0..n).contains(&(cell.y as i64))
    }

    /// True iff the cell is on the board and holds no color.
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.offset(cell).is_some_and(|i| self.grid[i].is_none())
    }

    /// Color at a cell; `None` for empty or off-board cells.
    #[must_use]
    pub fn cell(&self, cell: Cell) -> Option<Color> {
        self.offset(cell).and_then(|i| self.grid[i])
    }

    /// True iff the cell is on the board and holds `color`.
    #[must_use]
    pub fn has_color(&self, cell: Cell, color: Color) -> bool {
        self.cell(cell) == Some(color)
    }

    /// The four corners: (0,0), (0,N−1), (N−1,0), (N−1,N−1).
    #[must_use]
    pub fn corners(&self) -> [Cell; 4] {
        let last = self.size as i32 - 1;
        [
            Cell::new(0, 0),
            Cell::new(0, last),
            Cell::new(last, 0),
            Cell::new(last, last),
        ]
    }

    #[must_use]
    pub fn is_corner(&self, cell: Cell) -> bool {
        self.corners().contains(&cell)
    }

    /// Number of cells holding `color`.
    #[must_use]
    pub fn occupied_count(&self, color: Color) -> usize {
        self.placed.get(&color).copied().unwrap_or(0)
    }

    /// Number of cells holding no color.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.len() - self.placed.values().sum::<usize>()
    }

    /// True iff no cell holds the player's color.
    #[must_use]
    pub fn is_first_move(&self, player: &Player) -> bool {
        self.occupied_count(player.color()) == 0
    }

    /// Any cell has an on-board diagonal neighbor holding `color`.
    #[must_use]
    pub fn has_corner_contact(&self, cells: &[Cell], color: Color) -> bool {
        cells
            .iter()
            .flat_map(|c| c.diagonal_neighbors())
            .any(|n| self.has_color(n, color))
    }

    /// Any cell has an on-board orthogonal neighbor holding `color`.
    #[must_use]
    pub fn has_edge_contact(&self, cells: &[Cell], color: Color) -> bool {
        cells
            .iter()
            .flat_map(|c| c.edge_neighbors())
            .any(|n| self.has_color(n, color))
    }

    /// Whether placing `piece` on `cells` is legal for `player`.
    ///
    /// Never panics: unknown pieces, empty or repeated cell lists and
    /// off-board cells are all just `false`.
    #[must_use]
    pub fn is_valid_placement(&self, piece: usize, cells: &[Cell], player: &Player) -> bool {
        if !player.has_piece(piece) || cells.is_empty() {
            return false;
        }

        for (i, &cell) in cells.iter().enumerate() {
            if !self.is_empty(cell) || cells[..i].contains(&cell) {
                return false;
            }
        }

        if self.is_first_move(player) {
            return cells.iter().any(|&c| self.is_corner(c));
        }

        let color = player.color();
        self.has_corner_contact(cells, color) && !self.has_edge_contact(cells, color)
    }

    /// Validate, then place: drops the piece from `player` and writes its
    /// color into every cell.
    ///
    /// Returns false and changes nothing if the placement is not legal.
    pub fn commit_placement(&mut self, piece: usize, cells: &[Cell], player: &mut Player) -> bool {
        if !self.is_valid_placement(piece, cells, player) {
            return false;
        }

        player.drop_piece(piece);

        let color = player.color();
        for &cell in cells {
            if let Some(i) = self.offset(cell) {
                self.grid[i] = Some(color);
            }
        }
        *self.placed.entry(color).or_insert(0) += cells.len();

        true
    }

    /// Grid rows, top (`y = 0`) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> {
        self.grid.chunks(self.size)
    }
}

impl std::fmt::Display for Board {
    /// One row per line, cells separated by spaces, `.` for empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| ".".to_string(), |c| c.to_string()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    fn player(symbol: char) -> Player {
        Player::new(Color::new(symbol), 21)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(14);

        assert_eq!(board.size(), 14);
        assert_eq!(board.empty_count(), 196);
        assert!(board.rows().all(|row| row.len() == 14 && row.iter().all(Option::is_none)));
    }

    #[test]
    #[should_panic(expected = "Board size must be positive")]
    fn test_zero_size() {
        let _ = Board::new(0);
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(5);

        assert!(board.in_bounds(Cell::new(0, 0)));
        assert!(board.in_bounds(Cell::new(4, 4)));
        assert!(!board.in_bounds(Cell::new(5, 0)));
        assert!(!board.in_bounds(Cell::new(0, -1)));

        assert!(board.is_empty(Cell::new(2, 2)));
        assert!(!board.is_empty(Cell::new(-1, 2)));
        assert_eq!(board.cell(Cell::new(9, 9)), None);
    }

    #[test]
    fn test_corners() {
        let board = Board::new(14);
        assert_eq!(
            board.corners(),
            [Cell::new(0, 0), Cell::new(0, 13), Cell::new(13, 0), Cell::new(13, 13)]
        );
        assert!(board.is_corner(Cell::new(13, 0)));
        assert!(!board.is_corner(Cell::new(1, 0)));
    }

    #[test]
    fn test_first_move_needs_corner() {
        let board = Board::new(14);
        let x = player('X');

        assert!(board.is_first_move(&x));
        assert!(board.is_valid_placement(1, &cells(&[(0, 0), (1, 0)]), &x));
        assert!(board.is_valid_placement(1, &cells(&[(13, 12), (13, 13)]), &x));
        assert!(!board.is_valid_placement(1, &cells(&[(1, 0), (2, 0)]), &x));
    }

    #[test]
    fn test_rejects_unavailable_and_unknown_pieces() {
        let board = Board::new(14);
        let mut x = player('X');
        x.drop_piece(0);

        assert!(!board.is_valid_placement(0, &cells(&[(0, 0)]), &x));
        assert!(!board.is_valid_placement(21, &cells(&[(0, 0)]), &x));
        assert!(!board.is_valid_placement(usize::MAX, &cells(&[(0, 0)]), &x));
    }

    #[test]
    fn test_rejects_malformed_cell_lists() {
        let board = Board::new(14);
        let x = player('X');

        assert!(!board.is_valid_placement(0, &[], &x));
        assert!(!board.is_valid_placement(1, &cells(&[(0, 0), (0, 0)]), &x));
        assert!(!board.is_valid_placement(1, &cells(&[(-1, 0), (0, 0)]), &x));
    }

    #[test]
    fn test_commit_writes_and_drops() {
        let mut board = Board::new(14);
        let mut x = player('X');

        assert!(board.commit_placement(1, &cells(&[(0, 0), (1, 0)]), &mut x));

        assert_eq!(board.cell(Cell::new(0, 0)), Some(Color::new('X')));
        assert_eq!(board.cell(Cell::new(1, 0)), Some(Color::new('X')));
        assert!(!x.has_piece(1));
        assert!(!board.is_first_move(&x));
        assert_eq!(board.occupied_count(Color::new('X')), 2);
        assert_eq!(board.empty_count(), 194);
    }

    #[test]
    fn test_follow_up_needs_corner_not_edge() {
        let mut board = Board::new(14);
        let mut x = player('X');
        assert!(board.commit_placement(0, &cells(&[(0, 0)]), &mut x));

        // Diagonal only.
        assert!(board.is_valid_placement(1, &cells(&[(1, 1), (2, 1)]), &x));
        // Shares an edge with (0, 0).
        assert!(!board.is_valid_placement(1, &cells(&[(1, 0), (1, 1)]), &x));
        // Touches nothing.
        assert!(!board.is_valid_placement(1, &cells(&[(5, 5), (6, 5)]), &x));
        // A corner no longer suffices after the first move.
        assert!(!board.is_valid_placement(1, &cells(&[(13, 13), (12, 13)]), &x));
    }

    #[test]
    fn test_other_colors_do_not_count() {
        let mut board = Board::new(14);
        let mut x = player('X');
        let mut o = player('O');
        assert!(board.commit_placement(0, &cells(&[(0, 0)]), &mut x));

        // O still places its first piece, and may sit edge-to-edge with X.
        assert!(board.is_first_move(&o));
        assert!(!board.is_valid_placement(1, &cells(&[(1, 1), (2, 1)]), &o));
        assert!(board.commit_placement(1, &cells(&[(13, 13), (13, 12)]), &mut o));
        assert!(board.has_edge_contact(&cells(&[(12, 13)]), Color::new('O')));
        assert!(!board.has_edge_contact(&cells(&[(12, 13)]), Color::new('X')));
    }

    #[test]
    fn test_contact_predicates() {
        let mut board = Board::new(5);
        let mut x = player('X');
        assert!(board.commit_placement(0, &cells(&[(0, 0)]), &mut x));
        let color = Color::new('X');

        assert!(board.has_corner_contact(&cells(&[(1, 1)]), color));
        assert!(!board.has_edge_contact(&cells(&[(1, 1)]), color));
        assert!(board.has_edge_contact(&cells(&[(0, 1)]), color));
        assert!(!board.has_corner_contact(&cells(&[(0, 1)]), color));
        assert!(!board.has_corner_contact(&cells(&[(4, 4)]), color));
    }

    #[test]
    fn test_contact_at_i32_limits() {
        let mut board = Board::new(5);
        let mut x = player('X');
        assert!(board.commit_placement(0, &cells(&[(0, 0)]), &mut x));
        let color = Color::new('X');
        let far = cells(&[
            (i32::MAX, i32::MAX),
            (i32::MIN, i32::MIN),
            (i32::MAX, 0),
            (0, i32::MIN),
        ]);

        assert!(!board.has_edge_contact(&far, color));
        assert!(!board.has_corner_contact(&far, color));
        assert!(!board.is_valid_placement(1, &far[..2], &x));
    }

    #[test]
    fn test_rejected_commit_changes_nothing() {
        let mut board = Board::new(14);
        let mut x = player('X');
        assert!(board.commit_placement(0, &cells(&[(0, 0)]), &mut x));

        let board_before = board.clone();
        let player_before = x.clone();

        assert!(!board.commit_placement(1, &cells(&[(0, 1), (0, 2)]), &mut x));
        assert!(!board.commit_placement(0, &cells(&[(1, 1)]), &mut x));
        assert!(!board.commit_placement(2, &cells(&[(0, 0), (1, 1), (0, 1)]), &mut x));

        assert_eq!(board, board_before);
        assert_eq!(x, player_before);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let board = Board::new(14);
        let x = player('X');
        let placement = cells(&[(0, 0), (0, 1), (1, 1)]);

        let first = board.is_valid_placement(2, &placement, &x);
        assert_eq!(first, board.is_valid_placement(2, &placement, &x));
        assert!(first);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        let mut x = player('X');
        assert!(board.commit_placement(1, &cells(&[(0, 0), (1, 0)]), &mut x));

        assert_eq!(format!("{}", board), "X X .\n. . .\n. . .\n");
    }
}
