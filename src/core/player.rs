//! Seats, colors and piece inventories.
//!
//! A session seats players in a fixed order; `PlayerId` is the seat number
//! and `PlayerMap` holds one value per seat. Each seat plays one `Color`,
//! the marker written into board cells.
//!
//! `Player` pairs a color with a `PieceMask` of unplaced catalog pieces. The
//! mask only shrinks through `drop_piece` (called from
//! `Board::commit_placement`) and refills through `reset_pieces`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Seat number, 0-based, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Seat number as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seats `0..player_count` in turn order.
    ///
    /// ```
    /// use blokus_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, [PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(|seat| PlayerId(seat as u8))
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next_after(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// Up to four seats are stored inline.
///
/// ```
/// use blokus_engine::core::{PlayerId, PlayerMap};
///
/// let mut passed = PlayerMap::filled(4, false);
/// passed[PlayerId::new(2)] = true;
/// assert_eq!(passed.values().filter(|&&p| p).count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerMap<T> {
    seats: SmallVec<[T; 4]>,
}

impl<T> PlayerMap<T> {
    /// Build each seat's value from its id.
    pub fn from_fn(player_count: usize, f: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");
        Self {
            seats: PlayerId::all(player_count).map(f).collect(),
        }
    }

    /// Every seat starts with a clone of `value`.
    pub fn filled(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(player_count, |_| value.clone())
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Always false; a map has at least one seat.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.seats.len())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    /// `(seat, value)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.ids().zip(self.seats.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

/// Marker written into board cells by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub char);

impl Color {
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum catalog size representable by a `PieceMask`.
pub const MAX_PIECES: usize = 64;

/// Bitmask over catalog indices; a set bit means the piece is unplaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMask {
    bits: u64,
    len: u8,
}

impl PieceMask {
    /// A mask with all `len` pieces available.
    #[must_use]
    pub fn full(len: usize) -> Self {
        assert!(len <= MAX_PIECES, "At most {MAX_PIECES} pieces supported");
        Self {
            bits: Self::all_bits(len),
            len: len as u8,
        }
    }

    fn all_bits(len: usize) -> u64 {
        if len == MAX_PIECES {
            u64::MAX
        } else {
            (1u64 << len) - 1
        }
    }

    /// Number of catalog slots (available or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if `index` is in range and still available.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len() && self.bits & (1 << index) != 0
    }

    /// Clear a bit. Returns false if it was out of range or already clear.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.bits &= !(1 << index);
        true
    }

    /// Mark every piece available again.
    pub fn fill(&mut self) {
        self.bits = Self::all_bits(self.len());
    }

    /// Number of available pieces.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Available indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| self.contains(i))
    }
}

/// A player's color and remaining inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    pieces: PieceMask,
}

impl Player {
    /// Create a player with every piece of a `catalog_len`-sized catalog.
    #[must_use]
    pub fn new(color: Color, catalog_len: usize) -> Self {
        Self {
            color,
            pieces: PieceMask::full(catalog_len),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The availability mask.
    #[must_use]
    pub fn pieces(&self) -> &PieceMask {
        &self.pieces
    }

    /// True if the piece is in range and still unplaced.
    #[must_use]
    pub fn has_piece(&self, index: usize) -> bool {
        self.pieces.contains(index)
    }

    /// Mark a piece as placed.
    ///
    /// Returns false (no change) for out-of-range or already-placed pieces.
    pub fn drop_piece(&mut self, index: usize) -> bool {
        self.pieces.remove(index)
    }

    /// Make every piece available again (episode start).
    pub fn reset_pieces(&mut self) {
        self.pieces.fill();
    }

    /// Indices of unplaced pieces, ascending.
    pub fn available_pieces(&self) -> impl Iterator<Item = usize> + '_ {
        self.pieces.iter()
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.pieces.count()
    }
}
