//! Grid coordinates.
//!
//! A `Cell` is a `(column, row)` pair. Cells are plain values: they carry no
//! board reference, can be negative (pieces are defined around a local
//! origin), and compare by `x` first, then `y`.
//!
//! ```
//! use blokus_engine::core::Cell;
//!
//! let c = Cell::new(2, 3);
//! assert_eq!(c.offset(-1, 1), Cell::new(1, 4));
//! assert_eq!(c.diagonal_neighbors().count(), 4);
//! ```

use serde::{Deserialize, Serialize};

/// Offsets of the four orthogonal neighbors.
pub const EDGE_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Offsets of the four diagonal neighbors.
pub const CORNER_OFFSETS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A grid coordinate: `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Component-wise sum.
    #[must_use]
    pub const fn add(self, other: Cell) -> Self {
        self.offset(other.x, other.y)
    }

    /// Component-wise difference.
    #[must_use]
    pub const fn sub(self, other: Cell) -> Self {
        self.offset(-other.x, -other.y)
    }

    /// The cell shifted by `(dx, dy)`, or `None` past the `i32` range.
    #[must_use]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The orthogonal neighbors, unclipped. Neighbors past the `i32` range
    /// are skipped.
    pub fn edge_neighbors(self) -> impl Iterator<Item = Cell> {
        EDGE_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }

    /// The diagonal neighbors, unclipped. Neighbors past the `i32` range
    /// are skipped.
    pub fn diagonal_neighbors(self) -> impl Iterator<Item = Cell> {
        CORNER_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }

    /// True if `other` shares an edge with this cell.
    #[must_use]
    pub fn is_edge_adjacent(self, other: Cell) -> bool {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx + dy == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ordering() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn test_cell_arithmetic() {
        let a = Cell::new(3, 4);
        let b = Cell::new(1, -2);

        assert_eq!(a.add(b), Cell::new(4, 2));
        assert_eq!(a.sub(b), Cell::new(2, 6));
        assert_eq!(a.offset(0, -4), Cell::new(3, 0));
    }

    #[test]
    fn test_neighbors() {
        let c = Cell::new(0, 0);

        let edges: Vec<_> = c.edge_neighbors().collect();
        assert_eq!(edges.len(), 4);
        assert!(edges.contains(&Cell::new(-1, 0)));
        assert!(edges.contains(&Cell::new(0, 1)));
        assert!(edges.iter().all(|&e| c.is_edge_adjacent(e)));

        let corners: Vec<_> = c.diagonal_neighbors().collect();
        assert!(corners.contains(&Cell::new(1, 1)));
        assert!(corners.contains(&Cell::new(-1, -1)));
        assert!(corners.iter().all(|&d| !c.is_edge_adjacent(d)));
    }

    #[test]
    fn test_neighbors_at_i32_limits() {
        let far = Cell::new(i32::MAX, 0);
        let edges: Vec<_> = far.edge_neighbors().collect();
        assert_eq!(edges.len(), 3);
        assert!(!edges.contains(&Cell::new(i32::MIN, 0)));
        assert_eq!(far.diagonal_neighbors().count(), 2);

        let corner = Cell::new(i32::MIN, i32::MIN);
        let inward: Vec<_> = corner.diagonal_neighbors().collect();
        assert_eq!(inward, [Cell::new(i32::MIN + 1, i32::MIN + 1)]);
        assert_eq!(far.checked_offset(1, 0), None);
    }

    #[test]
    fn test_adjacency_across_full_range() {
        let low = Cell::new(i32::MIN, 0);
        let high = Cell::new(i32::MAX, 0);

        assert!(!low.is_edge_adjacent(high));
        assert!(!high.is_edge_adjacent(low));
        assert!(high.is_edge_adjacent(Cell::new(i32::MAX - 1, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::new(5, -1)), "(5, -1)");
    }

    #[test]
    fn test_serialization() {
        let cell = Cell::new(7, 13);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
