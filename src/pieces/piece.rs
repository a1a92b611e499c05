//! Pieces and their orientations.
//!
//! A `Piece` is a base `Shape` plus its stable catalog index. Its distinct
//! orientations are enumerated once, at construction, by
//! `enumerate_orientations`:
//!
//! - every combination of `reflected ∈ {false, true}` (outer loop) and
//!   `rotation ∈ 0..4` (inner loop) is applied to the base shape, rotating
//!   first and reflecting second;
//! - each result is canonicalized;
//! - only the first producer of each canonical shape is kept.
//!
//! The loop order makes the representative deterministic: lowest
//! `reflected`, then lowest `rotation`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::shape::{CanonicalShape, Shape};
use crate::core::Cell;

/// How a base shape was turned: `rotation` quarter turns, then an optional
/// horizontal reflection.
///
/// Deserialized values go through `Orientation::new`, so `rotation` is
/// always in `0..4`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "RawOrientation")]
pub struct Orientation {
    pub rotation: u8,
    pub reflected: bool,
}

#[derive(Deserialize)]
struct RawOrientation {
    rotation: u8,
    reflected: bool,
}

impl From<RawOrientation> for Orientation {
    fn from(raw: RawOrientation) -> Self {
        Self::new(raw.rotation, raw.reflected)
    }
}

impl Orientation {
    /// The untransformed orientation.
    pub const IDENTITY: Self = Self::new(0, false);

    #[must_use]
    pub const fn new(rotation: u8, reflected: bool) -> Self {
        Self {
            rotation: rotation % 4,
            reflected,
        }
    }

    /// All eight combinations in enumeration order.
    pub fn all() -> impl Iterator<Item = Orientation> {
        [false, true]
            .into_iter()
            .flat_map(|reflected| (0..4).map(move |rotation| Self::new(rotation, reflected)))
    }

    /// Apply this orientation to a shape.
    #[must_use]
    pub fn apply(self, shape: &Shape) -> Shape {
        let rotated = shape.rotated(self.rotation);
        if self.reflected {
            rotated.reflect_horizontal()
        } else {
            rotated
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.rotation)?;
        if self.reflected {
            write!(f, "+flip")?;
        }
        Ok(())
    }
}

/// One distinct orientation of a piece and the orientation that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrientedShape {
    pub shape: CanonicalShape,
    pub orientation: Orientation,
}

/// Distinct canonical orientations of a shape, in deterministic order.
#[must_use]
pub fn enumerate_orientations(shape: &Shape) -> Vec<OrientedShape> {
    let mut seen: FxHashSet<CanonicalShape> = FxHashSet::default();
    let mut out = Vec::with_capacity(8);

    for orientation in Orientation::all() {
        let canonical = orientation.apply(shape).canonicalize();
        if seen.insert(canonical.clone()) {
            out.push(OrientedShape {
                shape: canonical,
                orientation,
            });
        }
    }

    out
}

/// An immutable polyomino from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    index: usize,
    name: String,
    shape: Shape,
    orientations: Vec<OrientedShape>,
}

impl Piece {
    /// Create a piece; its orientations are computed here, once.
    pub fn new(index: usize, name: impl Into<String>, shape: Shape) -> Self {
        let orientations = enumerate_orientations(&shape);
        Self {
            index,
            name: name.into(),
            shape,
            orientations,
        }
    }

    /// Catalog index, shared by all players.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The un-rotated definition.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.shape.len()
    }

    /// Distinct orientations (1 to 8), lowest `reflected` then `rotation` first.
    #[must_use]
    pub fn orientations(&self) -> &[OrientedShape] {
        &self.orientations
    }

    /// The base shape turned by `orientation`, at absolute position
    /// `origin + cell` for each cell of the turned shape.
    #[must_use]
    pub fn positions(&self, origin: Cell, orientation: Orientation) -> Shape {
        orientation.apply(&self.shape).translate(origin)
    }

    /// True if `cells` is a translation of one of this piece's orientations.
    #[must_use]
    pub fn matches(&self, cells: &[Cell]) -> bool {
        if cells.len() != self.size() || !fits_extent(cells, self.size()) {
            return false;
        }
        let Ok(candidate) = Shape::new(cells.iter().copied()) else {
            return false;
        };
        let canonical = candidate.canonicalize();
        self.orientations.iter().any(|o| o.shape == canonical)
    }
}

/// True if the bounding box of `cells` is at most `span` wide and tall.
fn fits_extent(cells: &[Cell], span: usize) -> bool {
    let span = span as i64;
    let (xs, ys) = (cells.iter().map(|c| i64::from(c.x)), cells.iter().map(|c| i64::from(c.y)));
    let width = xs.clone().max().unwrap_or(0) - xs.min().unwrap_or(0);
    let height = ys.clone().max().unwrap_or(0) - ys.min().unwrap_or(0);
    width < span && height < span
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{}, {} cells)", self.name, self.index, self.size())
    }
}
