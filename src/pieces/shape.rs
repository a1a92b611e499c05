//! Polyomino shapes and their geometry.
//!
//! A `Shape` is a non-empty list of distinct cells relative to a local
//! origin. All geometric operators are pure and return new shapes:
//!
//! - `rotate90`: `(x, y) -> (y, -x)`
//! - `reflect_horizontal`: `(x, y) -> (-x, y)`
//! - `translate`: `(x, y) -> (x + ox, y + oy)`
//!
//! `canonicalize` turns a shape into a `CanonicalShape`: translated so each
//! axis starts at zero, then sorted. Two shapes that differ only by
//! translation or cell order have equal canonical forms.
//!
//! ```
//! use blokus_engine::core::Cell;
//! use blokus_engine::pieces::Shape;
//!
//! let bar = Shape::new([(0, 0), (1, 0), (2, 0)]).unwrap();
//! let upright = bar.rotate90().canonicalize();
//! assert_eq!(upright.cells(), &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
//! ```

use smallvec::SmallVec;
use thiserror::Error;

use crate::core::Cell;

/// Inline cell storage; every standard piece fits without allocating.
pub type CellList = SmallVec<[Cell; 5]>;

/// Why a cell list is not a valid shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no cells")]
    Empty,
    #[error("cell {0} appears more than once")]
    DuplicateCell(Cell),
}

/// A polyomino in one orientation, relative to a local origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: CellList,
}

impl Shape {
    /// Build a shape, rejecting empty lists and duplicate cells.
    pub fn new<C: Into<Cell>>(cells: impl IntoIterator<Item = C>) -> Result<Self, ShapeError> {
        let cells: CellList = cells.into_iter().map(Into::into).collect();
        if cells.is_empty() {
            return Err(ShapeError::Empty);
        }
        for (i, cell) in cells.iter().enumerate() {
            if cells[..i].contains(cell) {
                return Err(ShapeError::DuplicateCell(*cell));
            }
        }
        Ok(Self { cells })
    }

    // Operators below map cells bijectively, so the invariant carries over.
    fn map(&self, f: impl Fn(Cell) -> Cell) -> Self {
        Self {
            cells: self.cells.iter().map(|&c| f(c)).collect(),
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; shapes are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Quarter turn: `(x, y) -> (y, -x)`.
    #[must_use]
    pub fn rotate90(&self) -> Self {
        self.map(|c| Cell::new(c.y, -c.x))
    }

    /// `rotate90` applied `times` times (mod 4).
    #[must_use]
    pub fn rotated(&self, times: u8) -> Self {
        (0..times % 4).fold(self.clone(), |shape, _| shape.rotate90())
    }

    /// Mirror across the vertical axis: `(x, y) -> (-x, y)`.
    #[must_use]
    pub fn reflect_horizontal(&self) -> Self {
        self.map(|c| Cell::new(-c.x, c.y))
    }

    /// Shift every cell by `origin`.
    #[must_use]
    pub fn translate(&self, origin: Cell) -> Self {
        self.map(|c| c.add(origin))
    }

    /// Normalize to a zero minimum on each axis, then sort.
    #[must_use]
    pub fn canonicalize(&self) -> CanonicalShape {
        let min_x = self.cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = self.cells.iter().map(|c| c.y).min().unwrap_or(0);

        let mut cells: CellList = self
            .cells
            .iter()
            .map(|c| Cell::new(c.x - min_x, c.y - min_y))
            .collect();
        cells.sort_unstable();

        CanonicalShape { cells }
    }

    /// True if every cell is reachable from every other through shared edges.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let mut reached = vec![false; self.cells.len()];
        let mut stack = vec![0];
        reached[0] = true;

        while let Some(i) = stack.pop() {
            for (j, &other) in self.cells.iter().enumerate() {
                if !reached[j] && self.cells[i].is_edge_adjacent(other) {
                    reached[j] = true;
                    stack.push(j);
                }
            }
        }

        reached.into_iter().all(|r| r)
    }
}

/// A shape normalized to a zero minimum on each axis and sorted.
///
/// Used as the equality and hash key for orientation de-duplication.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalShape {
    cells: CellList,
}

impl CanonicalShape {
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Absolute cells with the shape's local origin placed at `origin`.
    #[must_use]
    pub fn placed_at(&self, origin: Cell) -> CellList {
        self.cells.iter().map(|&c| c.add(origin)).collect()
    }

    /// Back to a plain shape (for further rotation).
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        Shape {
            cells: self.cells.clone(),
        }
    }

    /// Width and height of the bounding box.
    #[must_use]
    pub fn extent(&self) -> (i32, i32) {
        let w = self.cells.iter().map(|c| c.x).max().unwrap_or(-1) + 1;
        let h = self.cells.iter().map(|c| c.y).max().unwrap_or(-1) + 1;
        (w, h)
    }
}

impl std::fmt::Display for CanonicalShape {
    /// Renders the shape as rows of `#` and `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.extent();
        for y in 0..h {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..w {
                let filled = self.cells.contains(&Cell::new(x, y));
                write!(f, "{}", if filled { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_tetromino() -> Shape {
        Shape::new([(0, 0), (0, 1), (0, 2), (1, 2)]).unwrap()
    }

    #[test]
    fn test_new_rejects_empty() {
        let none: [(i32, i32); 0] = [];
        assert_eq!(Shape::new(none), Err(ShapeError::Empty));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Shape::new([(0, 0), (1, 0), (0, 0)]).unwrap_err();
        assert_eq!(err, ShapeError::DuplicateCell(Cell::new(0, 0)));
        assert_eq!(err.to_string(), "cell (0, 0) appears more than once");
    }

    #[test]
    fn test_rotate90_maps_cells() {
        let shape = Shape::new([(1, 2)]).unwrap();
        assert_eq!(shape.rotate90().cells(), &[Cell::new(2, -1)]);
    }

    #[test]
    fn test_four_rotations_identity() {
        let shape = l_tetromino();
        assert_eq!(shape.rotated(4), shape);
        assert_eq!(shape.rotated(0), shape);
        assert_eq!(shape.rotated(5), shape.rotate90());
    }

    #[test]
    fn test_reflect_is_involution() {
        let shape = l_tetromino();
        assert_eq!(shape.reflect_horizontal().reflect_horizontal(), shape);
        assert_eq!(shape.reflect_horizontal().cells()[3], Cell::new(-1, 2));
    }

    #[test]
    fn test_translate() {
        let shape = Shape::new([(0, 0), (1, 0)]).unwrap();
        let moved = shape.translate(Cell::new(5, -3));
        assert_eq!(moved.cells(), &[Cell::new(5, -3), Cell::new(6, -3)]);
    }

    #[test]
    fn test_canonicalize_ignores_translation_and_order() {
        let a = Shape::new([(3, 4), (2, 4), (2, 5)]).unwrap();
        let b = Shape::new([(0, 1), (0, 0), (1, 0)]).unwrap();

        assert_eq!(a.canonicalize(), b.canonicalize());
        assert_eq!(
            a.canonicalize().cells(),
            &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn test_connectivity() {
        assert!(l_tetromino().is_connected());
        assert!(Shape::new([(0, 0)]).unwrap().is_connected());
        assert!(!Shape::new([(0, 0), (1, 1)]).unwrap().is_connected());
        assert!(!Shape::new([(0, 0), (2, 0)]).unwrap().is_connected());
    }

    #[test]
    fn test_placed_at() {
        let canon = l_tetromino().canonicalize();
        let placed = canon.placed_at(Cell::new(10, 10));
        assert_eq!(placed.len(), 4);
        assert!(placed.contains(&Cell::new(11, 12)));
    }

    #[test]
    fn test_display() {
        let canon = l_tetromino().canonicalize();
        assert_eq!(canon.extent(), (2, 3));
        assert_eq!(format!("{}", canon), "#.\n#.\n##");
    }
}
