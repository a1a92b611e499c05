//! The piece catalog shared by all players.
//!
//! A `PieceCatalog` is the fixed, ordered list of pieces a game is played
//! with; a piece's position in the list is its index everywhere else (player
//! inventories, moves). Catalogs are validated when they are built: a
//! malformed definition is a load-time `CatalogError`, never a failure
//! during play.
//!
//! ## Example
//!
//! ```
//! use blokus_engine::pieces::PieceCatalog;
//!
//! let catalog = PieceCatalog::from_json(r#"[
//!     { "name": "dot", "cells": [[0, 0]] },
//!     { "name": "bar", "cells": [[0, 0], [1, 0], [2, 0]] }
//! ]"#).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(1).unwrap().name(), "bar");
//! assert_eq!(catalog.get(1).unwrap().orientations().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::piece::Piece;
use super::shape::{Shape, ShapeError};
use crate::core::{Cell, MAX_PIECES};

/// Largest absolute coordinate accepted in a piece definition.
pub const MAX_COORDINATE: i32 = 1 << 16;

/// The 21 standard pieces: name and base cells.
const STANDARD_PIECES: [(&str, &[(i32, i32)]); 21] = [
    ("I1", &[(0, 0)]),
    ("I2", &[(0, 0), (1, 0)]),
    ("V3", &[(0, 0), (0, 1), (1, 1)]),
    ("I3", &[(0, 0), (1, 0), (2, 0)]),
    ("O4", &[(0, 0), (1, 0), (0, 1), (1, 1)]),
    ("T4", &[(0, 0), (1, 0), (2, 0), (1, 1)]),
    ("I4", &[(0, 0), (1, 0), (2, 0), (3, 0)]),
    ("L4", &[(0, 0), (0, 1), (0, 2), (1, 2)]),
    ("Z4", &[(0, 0), (1, 0), (1, 1), (2, 1)]),
    ("L5", &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)]),
    ("T5", &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]),
    ("V5", &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]),
    ("N5", &[(0, 0), (1, 0), (2, 0), (2, 1), (3, 1)]),
    ("Z5", &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]),
    ("I5", &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
    ("P5", &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]),
    ("W5", &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]),
    ("U5", &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]),
    ("F5", &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]),
    ("X5", &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
    ("Y5", &[(0, 0), (1, 0), (2, 0), (3, 0), (1, 1)]),
];

/// Why a catalog could not be built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no pieces")]
    Empty,

    #[error("catalog has {0} pieces, at most {} supported", MAX_PIECES)]
    TooManyPieces(usize),

    #[error("piece {index} ({name}): {source}")]
    InvalidShape {
        index: usize,
        name: String,
        #[source]
        source: ShapeError,
    },

    #[error("piece {index} ({name}): cell {cell} is beyond ±{}", MAX_COORDINATE)]
    CoordinateOutOfRange { index: usize, name: String, cell: Cell },

    #[error("piece {index} ({name}) is not edge-connected")]
    Disconnected { index: usize, name: String },

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized form of one catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceDefinition {
    pub name: String,
    pub cells: Vec<(i32, i32)>,
}

impl PieceDefinition {
    pub fn new(name: impl Into<String>, cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            name: name.into(),
            cells: cells.into_iter().collect(),
        }
    }
}

/// Ordered, validated list of pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceCatalog {
    pieces: Vec<Piece>,
}

impl PieceCatalog {
    /// The 21-piece Blokus set.
    #[must_use]
    pub fn standard() -> Self {
        let pieces = STANDARD_PIECES
            .iter()
            .enumerate()
            .map(|(index, (name, cells))| {
                let shape = Shape::new(cells.iter().copied())
                    .unwrap_or_else(|e| panic!("standard piece {name} is malformed: {e}"));
                Piece::new(index, *name, shape)
            })
            .collect();
        Self { pieces }
    }

    /// The standard definitions, e.g. as a starting point for a custom set.
    #[must_use]
    pub fn standard_definitions() -> Vec<PieceDefinition> {
        STANDARD_PIECES
            .iter()
            .map(|(name, cells)| PieceDefinition::new(*name, cells.iter().copied()))
            .collect()
    }

    /// Build from definitions; indices follow definition order.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = PieceDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut pieces = Vec::new();

        for (index, def) in definitions.into_iter().enumerate() {
            let far = def
                .cells
                .iter()
                .find(|(x, y)| x.unsigned_abs().max(y.unsigned_abs()) > MAX_COORDINATE as u32);
            if let Some(&cell) = far {
                return Err(CatalogError::CoordinateOutOfRange {
                    index,
                    name: def.name,
                    cell: Cell::from(cell),
                });
            }
            let shape = match Shape::new(def.cells.iter().copied()) {
                Ok(shape) => shape,
                Err(source) => {
                    return Err(CatalogError::InvalidShape {
                        index,
                        name: def.name,
                        source,
                    })
                }
            };
            if !shape.is_connected() {
                return Err(CatalogError::Disconnected {
                    index,
                    name: def.name,
                });
            }
            pieces.push(Piece::new(index, def.name, shape));
        }

        if pieces.is_empty() {
            return Err(CatalogError::Empty);
        }
        if pieces.len() > MAX_PIECES {
            return Err(CatalogError::TooManyPieces(pieces.len()));
        }

        Ok(Self { pieces })
    }

    /// Parse a JSON array of `{ "name": .., "cells": [[x, y], ..] }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<PieceDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Get a piece by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Find a piece by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.name() == name)
    }

    /// Sum of all piece sizes.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.pieces.iter().map(Piece::size).sum()
    }

    /// Sum of distinct orientations over all pieces.
    #[must_use]
    pub fn total_orientations(&self) -> usize {
        self.pieces.iter().map(|p| p.orientations().len()).sum()
    }
}
