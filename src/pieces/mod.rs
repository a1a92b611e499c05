//! Polyomino pieces: shapes, orientation geometry and the piece catalog.
//!
//! - `shape`: `Shape`, `CanonicalShape` and the pure geometric operators
//! - `piece`: `Piece`, `Orientation` and orientation enumeration
//! - `catalog`: the shared, validated list of pieces

pub mod catalog;
pub mod piece;
pub mod shape;

pub use catalog::{CatalogError, PieceCatalog, PieceDefinition, MAX_COORDINATE};
pub use piece::{enumerate_orientations, OrientedShape, Orientation, Piece};
pub use shape::{CanonicalShape, CellList, Shape, ShapeError};
